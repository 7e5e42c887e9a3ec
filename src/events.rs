use crate::dom::{pointer_canvas_css, Listener};
use crate::scene::Scene;
use showcase_core::InputEvent;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Run `f` on the scene if it is still alive and not mid-frame.
fn with_scene(weak: &Weak<RefCell<Scene>>, f: impl FnOnce(&mut Scene)) {
    if let Some(scene) = weak.upgrade() {
        if let Ok(mut s) = scene.try_borrow_mut() {
            f(&mut s);
        }
    }
}

fn pointer_listener(
    scene: &Rc<RefCell<Scene>>,
    canvas: &web::HtmlCanvasElement,
    event: &'static str,
    to_event: fn(f32, f32) -> InputEvent,
) -> Option<Listener> {
    let weak = Rc::downgrade(scene);
    let target = canvas.clone();
    Listener::new(canvas, event, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (x, y) = pointer_canvas_css(ev, &target);
        with_scene(&weak, |s| s.handle(to_event(x, y)));
    })
}

/// Subscribe the scene to canvas pointer input, window resizes and, for the
/// map, its view toggle. The listeners live on the scene and go with it.
pub fn wire_scene(
    scene: &Rc<RefCell<Scene>>,
    window: &web::Window,
    toggle: Option<&web::Element>,
) {
    let canvas = scene.borrow().canvas.clone();
    let mut listeners = Vec::new();

    listeners.extend(pointer_listener(scene, &canvas, "pointermove", |x, y| {
        InputEvent::PointerMove { x, y }
    }));
    listeners.extend(pointer_listener(scene, &canvas, "pointerdown", |x, y| {
        InputEvent::PointerDown { x, y }
    }));
    listeners.extend(pointer_listener(scene, &canvas, "pointerup", |x, y| {
        InputEvent::PointerUp { x, y }
    }));
    listeners.extend(pointer_listener(scene, &canvas, "click", |x, y| {
        InputEvent::Click { x, y }
    }));

    let weak = Rc::downgrade(scene);
    listeners.extend(Listener::new(&canvas, "pointerleave", move |_| {
        with_scene(&weak, |s| s.handle(InputEvent::PointerLeave));
    }));

    let weak = Rc::downgrade(scene);
    listeners.extend(Listener::new(window, "resize", move |_| {
        with_scene(&weak, Scene::resize_from_dom);
    }));

    if let Some(toggle) = toggle {
        let weak = Rc::downgrade(scene);
        listeners.extend(Listener::new(toggle, "click", move |_| {
            with_scene(&weak, |s| {
                s.toggle_view();
            });
        }));
    }

    log::debug!("[mount] {} listeners on #{}", listeners.len(), canvas.id());
    scene.borrow_mut().listeners.extend(listeners);
}
