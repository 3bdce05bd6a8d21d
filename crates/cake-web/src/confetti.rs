//! Celebration overlay and the 2D-canvas confetti animation.

use crate::constants::{CONFETTI_CANVAS_ID, OVERLAY_ID};
use crate::overlay;
use cake_core::{ConfettiField, CONFETTI_COUNT, CONFETTI_PALETTE};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    // Bumped on every (re)start so a superseded loop stops rescheduling.
    static CELEBRATION_GEN: Cell<u64> = Cell::new(0);
}

struct ConfettiContext {
    field: ConfettiField,
    ctx2d: web::CanvasRenderingContext2d,
    document: web::Document,
    rng: StdRng,
    last: Instant,
    generation: u64,
}

impl ConfettiContext {
    /// One animation step. Returns false when the overlay went away or a
    /// newer celebration took over, which ends the loop.
    fn frame(&mut self) -> bool {
        if !overlay::is_visible(&self.document) {
            return false;
        }
        if CELEBRATION_GEN.with(|g| g.get()) != self.generation {
            return false;
        }
        let now = Instant::now();
        let dt = (now - self.last).as_secs_f32().min(0.1);
        self.last = now;
        self.field.step(dt, &mut self.rng);
        draw(&self.ctx2d, &self.field);
        true
    }
}

fn draw(ctx: &web::CanvasRenderingContext2d, field: &ConfettiField) {
    ctx.clear_rect(0.0, 0.0, field.width() as f64, field.height() as f64);
    for p in field.pieces() {
        ctx.save();
        let _ = ctx.translate(p.pos.x as f64, p.pos.y as f64);
        let _ = ctx.rotate((p.angle.sin() * 0.5) as f64);
        ctx.set_fill_style_str(CONFETTI_PALETTE[p.color]);
        ctx.fill_rect(
            (-p.size.x / 2.0) as f64,
            (-p.size.y / 2.0) as f64,
            p.size.x as f64,
            p.size.y as f64,
        );
        ctx.restore();
    }
}

/// Show the overlay and (re)start the confetti loop, with the canvas sized
/// to the overlay's current client area.
pub fn start_celebration(document: &web::Document) {
    overlay::show(document);
    let Some(overlay_el) = document.get_element_by_id(OVERLAY_ID) else {
        return;
    };
    let Some(canvas) = document
        .get_element_by_id(CONFETTI_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        return;
    };

    let width = overlay_el.client_width().max(1) as u32;
    let height = overlay_el.client_height().max(1) as u32;
    canvas.set_width(width);
    canvas.set_height(height);

    let Some(ctx2d) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok())
    else {
        return;
    };

    let generation = CELEBRATION_GEN.with(|g| {
        let next = g.get() + 1;
        g.set(next);
        next
    });
    let mut rng = StdRng::from_entropy();
    let field = ConfettiField::new(CONFETTI_COUNT, width as f32, height as f32, &mut rng);
    log::info!("[confetti] starting, {}x{}, gen {}", width, height, generation);

    let ctx = Rc::new(RefCell::new(ConfettiContext {
        field,
        ctx2d,
        document: document.clone(),
        rng,
        last: Instant::now(),
        generation,
    }));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !ctx.borrow_mut().frame() {
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
