//! DOM construction and updates for the cake, counter, meter, and controls.

use crate::constants::{
    CAKE_ID, LEVEL_FILL_ID, MIC_BTN_ID, MIC_LABEL_IDLE, MIC_LABEL_LIVE, REMAINING_ID,
    SENSITIVITY_BTN_ID,
};
use crate::dom;
use cake_core::{Sensitivity, Session, METER_GAIN};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Rebuild the candle row. Each candle is a button wired to extinguish
/// itself on activation.
pub fn build_candles(document: &web::Document, session: &Rc<RefCell<Session>>) {
    let Some(cake) = document.get_element_by_id(CAKE_ID) else {
        return;
    };
    cake.set_inner_html("");
    let Ok(row) = document.create_element("div") else {
        return;
    };
    row.set_class_name("candles");
    let total = session.borrow().total();
    for index in 0..total {
        if let Ok(candle) = build_candle(document, index) {
            let session_c = session.clone();
            let doc = document.clone();
            dom::add_click_listener_to(&candle, move || {
                crate::events::on_candle_activated(&doc, &session_c, Some(index));
            });
            let _ = row.append_child(&candle);
        }
    }
    let _ = cake.append_child(&row);
}

fn build_candle(document: &web::Document, index: usize) -> Result<web::Element, JsValue> {
    let candle = document.create_element("button")?;
    candle.set_class_name("candle");
    candle.set_attribute("type", "button")?;
    candle.set_attribute("aria-pressed", "false")?;
    candle.set_attribute("title", &format!("Candle {}", index + 1))?;
    candle.set_attribute("data-index", &index.to_string())?;
    for part in ["stick", "wick", "flame"] {
        let el = document.create_element("div")?;
        el.set_class_name(part);
        candle.append_child(&el)?;
    }
    Ok(candle)
}

/// Flip candle `index` to its extinguished look.
pub fn set_candle_out(document: &web::Document, index: usize) {
    if let Ok(Some(el)) = document.query_selector(&format!(".candle[data-index='{index}']")) {
        let _ = el.class_list().add_1("out");
        let _ = el.set_attribute("aria-pressed", "true");
    }
}

pub fn update_remaining(document: &web::Document, remaining: usize) {
    dom::set_text(document, REMAINING_ID, &remaining.to_string());
}

/// Drive the level meter fill from the current loudness.
pub fn set_meter(document: &web::Document, level: f32) {
    if let Some(el) = document.get_element_by_id(LEVEL_FILL_ID) {
        let pct = (level * METER_GAIN * 100.0).min(100.0);
        let _ = el.set_attribute("style", &format!("width:{pct:.0}%"));
    }
}

/// Mic button state: disabled with a listening label while the stream is
/// being acquired or live, enabled for retry otherwise.
pub fn set_mic_button_live(document: &web::Document, live: bool) {
    if let Some(el) = document.get_element_by_id(MIC_BTN_ID) {
        el.set_text_content(Some(if live { MIC_LABEL_LIVE } else { MIC_LABEL_IDLE }));
        if let Some(btn) = el.dyn_ref::<web::HtmlButtonElement>() {
            btn.set_disabled(live);
        }
    }
}

pub fn set_sensitivity_label(document: &web::Document, sensitivity: Sensitivity) {
    dom::set_text(
        document,
        SENSITIVITY_BTN_ID,
        &format!("Sensitivity: {}", sensitivity.label()),
    );
}
