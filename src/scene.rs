use crate::constants::MOUNTED_ATTRIBUTE;
use crate::dom::{sync_canvas_backing_size, CanvasSizing, Listener};
use crate::frame::{FrameCallback, RafScheduler};
use crate::selection::DomSelectionHost;
use crate::surface::CanvasSurface;
use crate::view::MapView;
use showcase_core::{
    Engine, FrameLoop, InputEvent, LoopState, MotionPreference, SelectionOutcome, ShowcaseError,
    ViewMode,
};
use web_sys as web;

/// A mounted canvas: the engine plus everything tying it to the page.
pub struct Scene {
    pub engine: Engine,
    pub frame_loop: FrameLoop<RafScheduler>,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
    pub sizing: CanvasSizing,
    pub host: DomSelectionHost,
    pub view: Option<MapView>,
    pub listeners: Vec<Listener>,
}

impl Scene {
    pub fn scheduler_callback(&self) -> FrameCallback {
        self.frame_loop.scheduler().callback_slot()
    }

    pub fn start(&mut self, motion: MotionPreference, now_ms: f64) {
        let Self {
            engine,
            frame_loop,
            surface,
            ..
        } = self;
        frame_loop.start(motion, now_ms, engine, surface);
    }

    pub fn on_frame(&mut self, now_ms: f64) {
        let Self {
            engine,
            frame_loop,
            surface,
            ..
        } = self;
        frame_loop.on_frame(now_ms, engine, surface);
    }

    pub fn handle(&mut self, event: InputEvent) {
        let Self {
            engine,
            frame_loop,
            surface,
            host,
            canvas,
            ..
        } = self;
        let response = frame_loop.dispatch(event, instant::now(), engine, host, surface);
        if let Some(cursor) = response.cursor {
            _ = canvas.style().set_property("cursor", cursor.css());
            match engine.hover_hint() {
                Some(hint) => _ = canvas.set_attribute("title", hint),
                None => _ = canvas.remove_attribute("title"),
            }
        }
    }

    pub fn resize_from_dom(&mut self) {
        let size = sync_canvas_backing_size(&self.canvas, &self.sizing);
        self.handle(InputEvent::Resize {
            width: size.width,
            height: size.height,
            pixel_ratio: size.pixel_ratio,
        });
    }

    /// Flip the map/cards view. `None` for scenes without a view switch.
    pub fn toggle_view(&mut self) -> Option<ViewMode> {
        let mode = self.view.as_mut()?.toggle();
        log::debug!("[view] {mode:?}");
        Some(mode)
    }

    pub fn select(&mut self, node_id: &str) -> Result<SelectionOutcome, ShowcaseError> {
        let Self {
            engine,
            frame_loop,
            surface,
            host,
            ..
        } = self;
        frame_loop.select(node_id, instant::now(), engine, host, surface)
    }

    /// Tooltip text for a node, as shown on hover.
    pub fn describe(&self, node_id: &str) -> Option<String> {
        let nodes = self.engine.nodes();
        let node = nodes.get(nodes.index_of(node_id)?)?;
        Some(node.hint().to_string())
    }

    pub fn is_disposed(&self) -> bool {
        self.frame_loop.state() == LoopState::Disposed
    }

    /// Stop the loop, drop the frame closure and every listener, and clear
    /// the mount marker so the canvas can be mounted again.
    pub fn dispose(&mut self) {
        if self.is_disposed() {
            return;
        }
        self.frame_loop.dispose();
        self.frame_loop.scheduler().release();
        self.listeners.clear();
        _ = self.canvas.remove_attribute(MOUNTED_ATTRIBUTE);
        log::info!("[mount] {} disposed", self.canvas.id());
    }
}
