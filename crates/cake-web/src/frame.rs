//! Per-frame loudness sampling loop, scheduled via requestAnimationFrame and
//! self-cancelling once the mic handle is gone.

use crate::audio::MicInput;
use crate::{confetti, dom, ui};
use cake_core::{LevelReport, Session};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ListenContext {
    pub session: Rc<RefCell<Session>>,
    pub mic: Rc<RefCell<Option<MicInput>>>,
    pub document: web::Document,
}

impl ListenContext {
    /// One sampling step. Returns false once the mic handle is gone, which
    /// ends the loop.
    pub fn frame(&mut self) -> bool {
        let level = {
            let mut mic = self.mic.borrow_mut();
            match mic.as_mut() {
                Some(m) => m.read_level(),
                None => return false,
            }
        };
        ui::set_meter(&self.document, level);

        let report = self.session.borrow_mut().feed_level(level, dom::now_ms());
        match report {
            LevelReport::Calibrated { baseline } => {
                log::info!("[listen] calibrated, baseline {:.4}", baseline);
            }
            LevelReport::Listening { fired: Some(out) } => {
                ui::set_candle_out(&self.document, out.index);
                ui::update_remaining(&self.document, self.session.borrow().remaining());
                if out.all_out {
                    confetti::start_celebration(&self.document);
                }
            }
            _ => {}
        }
        true
    }
}

/// Drive `ctx.frame()` once per animation frame until it reports done.
pub fn start_listen_loop(ctx: ListenContext) {
    let ctx = Rc::new(RefCell::new(ctx));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !ctx.borrow_mut().frame() {
            log::info!("[listen] mic gone, stopping loop");
            return;
        }
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
