use crate::constants::OVERLAY_ID;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        let _ = el.remove_attribute("hidden");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        let _ = el.set_attribute("hidden", "");
    }
}

#[inline]
pub fn is_visible(document: &web::Document) -> bool {
    document
        .get_element_by_id(OVERLAY_ID)
        .map(|el| !el.has_attribute("hidden"))
        .unwrap_or(false)
}
