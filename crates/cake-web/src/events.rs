//! Event wiring: candle activation, mic button, keyboard fallback,
//! sensitivity toggle, reset, and viewport resize.

use crate::audio::MicInput;
use crate::constants::{CAKE_ID, MIC_BTN_ID, MIC_DENIED_MESSAGE, RESET_BTN_ID, SENSITIVITY_BTN_ID};
use crate::frame::{self, ListenContext};
use crate::{confetti, dom, overlay, ui};
use cake_core::Session;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Shared handler for activating a candle: a direct click targets that
/// candle, the keyboard fallback takes the next one left to right.
pub fn on_candle_activated(
    document: &web::Document,
    session: &Rc<RefCell<Session>>,
    target: Option<usize>,
) {
    let out = {
        let mut s = session.borrow_mut();
        match target {
            Some(index) => s.extinguish_at(index),
            None => s.extinguish_next(),
        }
    };
    if let Some(out) = out {
        ui::set_candle_out(document, out.index);
        ui::update_remaining(document, session.borrow().remaining());
        if out.all_out {
            confetti::start_celebration(document);
        }
    }
}

/// Mic button: acquire the stream on click, then calibrate and start the
/// listen loop. On failure the button is re-enabled for retry and manual
/// clicking stays the only input path.
pub fn wire_mic_button(
    document: &web::Document,
    session: Rc<RefCell<Session>>,
    mic: Rc<RefCell<Option<MicInput>>>,
) {
    let doc = document.clone();
    dom::add_click_listener(document, MIC_BTN_ID, move || {
        if mic.borrow().is_some() {
            return;
        }
        ui::set_mic_button_live(&doc, true);
        let doc = doc.clone();
        let session = session.clone();
        let mic = mic.clone();
        spawn_local(async move {
            match MicInput::open().await {
                Ok(input) => {
                    *mic.borrow_mut() = Some(input);
                    session.borrow_mut().begin_calibration();
                    frame::start_listen_loop(ListenContext {
                        session,
                        mic,
                        document: doc,
                    });
                }
                Err(e) => {
                    log::error!("[mic] open failed: {:?}", e);
                    ui::set_mic_button_live(&doc, false);
                    if let Some(w) = web::window() {
                        let _ = w.alert_with_message(MIC_DENIED_MESSAGE);
                    }
                }
            }
        });
    });
}

/// Space/enter on the cake puts out the next candle (accessibility fallback
/// when the mic is unavailable).
pub fn wire_keyboard(document: &web::Document, session: Rc<RefCell<Session>>) {
    let Some(cake) = document.get_element_by_id(CAKE_ID) else {
        return;
    };
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let key = ev.key();
        if key == " " || key == "Enter" {
            ev.prevent_default();
            on_candle_activated(&doc, &session, None);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = cake.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_sensitivity_toggle(document: &web::Document, session: Rc<RefCell<Session>>) {
    let doc = document.clone();
    dom::add_click_listener(document, SENSITIVITY_BTN_ID, move || {
        let sensitivity = session.borrow_mut().toggle_sensitivity();
        ui::set_sensitivity_label(&doc, sensitivity);
        log::info!("[ui] sensitivity -> {}", sensitivity.label());
    });
}

/// Reset: hide the overlay, relight everything, rebuild the candle DOM.
pub fn wire_reset(document: &web::Document, session: Rc<RefCell<Session>>) {
    let doc = document.clone();
    dom::add_click_listener(document, RESET_BTN_ID, move || {
        overlay::hide(&doc);
        session.borrow_mut().reset();
        ui::build_candles(&doc, &session);
        ui::update_remaining(&doc, session.borrow().remaining());
    });
}

/// Restart the confetti sim at the new size while the overlay is visible.
pub fn wire_resize(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        if overlay::is_visible(&doc) {
            confetti::start_celebration(&doc);
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
