#![cfg(target_arch = "wasm32")]
//! Browser front-end: a cake of candle buttons, a mic-driven loudness loop,
//! and a confetti overlay once every candle is out.

pub mod audio;
pub mod confetti;
pub mod constants;
pub mod dom;
pub mod events;
pub mod frame;
pub mod overlay;
pub mod ui;

use cake_core::{Session, SessionConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cake-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let session = Rc::new(RefCell::new(Session::new(SessionConfig::default())));
    let mic = Rc::new(RefCell::new(None));

    ui::build_candles(&document, &session);
    ui::update_remaining(&document, session.borrow().remaining());
    ui::set_sensitivity_label(&document, session.borrow().sensitivity());

    events::wire_mic_button(&document, session.clone(), mic);
    events::wire_keyboard(&document, session.clone());
    events::wire_sensitivity_toggle(&document, session.clone());
    events::wire_reset(&document, session);
    events::wire_resize(&document);

    log::info!("[init] cake ready");
    Ok(())
}
