use crate::starfield::StarfieldLayer;
use site_core::StarSprite;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything redrawn on each animation frame. One context drives every
/// canvas layer so a frame is fully applied before the next is scheduled.
pub struct FrameContext {
    layers: Vec<StarfieldLayer>,
    scratch: Vec<StarSprite>,
}

impl FrameContext {
    pub fn new(layers: Vec<StarfieldLayer>) -> Self {
        Self {
            layers,
            scratch: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        for layer in &mut self.layers {
            layer.draw_frame(&mut self.scratch);
        }
    }

    /// Viewport changed: re-measure every surface and rebuild its pool.
    pub fn handle_resize(&mut self) {
        for layer in &mut self.layers {
            layer.handle_resize();
        }
    }
}

/// Handle for a running requestAnimationFrame loop. `stop` (or drop)
/// cancels the pending callback synchronously; nothing draws afterwards.
pub struct RafLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    cancelled: Rc<Cell<bool>>,
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RafLoop {
    pub fn stop(&self) {
        self.cancelled.set(true);
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> RafLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let cancelled = Rc::new(Cell::new(false));

    let tick_clone = tick.clone();
    let raf_id_tick = raf_id.clone();
    let cancelled_tick = cancelled.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancelled_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_id_tick.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(Some(id));
        }
    }

    RafLoop {
        raf_id,
        cancelled,
        _tick: tick,
    }
}
