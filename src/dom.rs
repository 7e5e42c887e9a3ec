use crate::constants::{FALLBACK_HEIGHT, FALLBACK_WIDTH, REDUCED_MOTION_QUERY};
use crate::helpers::{backing_store_px, css_extent_or, fill_width_css_size, sanitize_pixel_ratio};
use showcase_core::SurfaceSize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// A DOM event subscription. Dropping it unsubscribes.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                callback,
            }),
            Err(e) => {
                log::warn!("[dom] could not listen for {event}: {e:?}");
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Run `f` once the document has parsed; immediately if it already has.
pub fn on_dom_ready(f: impl FnOnce() + 'static) {
    let Some(document) = window_document() else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let cb = Closure::once_into_js(f);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        cb.unchecked_ref(),
        &opts,
    );
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    matches!(
        window.match_media(REDUCED_MOTION_QUERY),
        Ok(Some(mql)) if mql.matches()
    )
}

/// How a canvas gets its logical (CSS) size.
pub enum CanvasSizing {
    /// Take `source`'s layout box and pin the canvas CSS box to it (the hero
    /// canvas is absolutely positioned inside the banner).
    Pinned(web::Element),
    /// Fill the parent's width and pin the height to `width / aspect`.
    FillWidth { aspect: f64 },
}

/// Size the canvas backing store to its logical size times
/// devicePixelRatio and return the logical size. The CSS box is always set
/// explicitly so the backing store never feeds back into the next
/// measurement.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    sizing: &CanvasSizing,
) -> SurfaceSize {
    let dpr = sanitize_pixel_ratio(web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0));
    let style = canvas.style();
    let (width, height) = match sizing {
        CanvasSizing::Pinned(source) => {
            let rect = source.get_bounding_client_rect();
            (
                css_extent_or(rect.width(), FALLBACK_WIDTH),
                css_extent_or(rect.height(), FALLBACK_HEIGHT),
            )
        }
        CanvasSizing::FillWidth { aspect } => {
            _ = style.set_property("width", "100%");
            _ = style.remove_property("height");
            let rect = canvas.get_bounding_client_rect();
            fill_width_css_size(rect.width(), *aspect, FALLBACK_WIDTH)
        }
    };
    canvas.set_width(backing_store_px(width, dpr));
    canvas.set_height(backing_store_px(height, dpr));
    if matches!(sizing, CanvasSizing::Pinned(_)) {
        _ = style.set_property("width", &format!("{width}px"));
    }
    _ = style.set_property("height", &format!("{height}px"));
    SurfaceSize::new(width as f32, height as f32, dpr as f32)
}

/// Pointer position relative to the canvas box, in CSS pixels.
#[inline]
pub fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (
        (ev.client_x() as f64 - rect.left()) as f32,
        (ev.client_y() as f64 - rect.top()) as f32,
    )
}
