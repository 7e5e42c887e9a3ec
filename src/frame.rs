use crate::scene::Scene;
use showcase_core::{FrameHandle, FrameScheduler, MotionPreference};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame`-backed scheduler. The callback slot is filled by
/// [`start_loop`] and emptied by [`RafScheduler::release`].
pub struct RafScheduler {
    window: web::Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    pub fn callback_slot(&self) -> FrameCallback {
        self.callback.clone()
    }

    /// Drop the frame closure. Call only after the pending frame is cancelled.
    pub fn release(&self) {
        self.callback.borrow_mut().take();
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule_next_tick(&mut self) -> Option<FrameHandle> {
        let slot = self.callback.borrow();
        let cb = slot.as_ref()?;
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::error!("[loop] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }
}

/// Install the frame closure and start the scene's loop. The closure holds a
/// weak reference so a disposed scene can be dropped.
pub fn start_loop(scene: &Rc<RefCell<Scene>>, motion: MotionPreference) {
    let weak = Rc::downgrade(scene);
    let tick = Closure::wrap(Box::new(move |timestamp_ms: f64| {
        if let Some(scene) = weak.upgrade() {
            if let Ok(mut s) = scene.try_borrow_mut() {
                s.on_frame(timestamp_ms);
            }
        }
    }) as Box<dyn FnMut(f64)>);

    let mut s = scene.borrow_mut();
    *s.scheduler_callback().borrow_mut() = Some(tick);
    s.start(motion, instant::now());
}
