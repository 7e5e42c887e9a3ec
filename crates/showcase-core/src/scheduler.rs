//! Frame scheduling: a host-provided "next frame" primitive behind a trait,
//! and the run/static/disposed state machine that drives an [`Engine`].

use crate::engine::{Engine, EventResponse};
use crate::error::Result;
use crate::input::InputEvent;
use crate::selection::{SelectionHost, SelectionOutcome};
use crate::surface::DrawSurface;

/// Opaque id for one pending frame request (the rAF id on the web).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

pub trait FrameScheduler {
    /// Request a callback on the next display refresh. `None` when the host
    /// cannot schedule frames.
    fn schedule_next_tick(&mut self) -> Option<FrameHandle>;
    fn cancel(&mut self, handle: FrameHandle);
}

/// Scheduler that only records requests; tests fire frames by hand.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pub requested: usize,
    pub cancelled: Vec<FrameHandle>,
    /// When set, every request is refused.
    pub unavailable: bool,
    next_id: i32,
    pending: Option<FrameHandle>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Consume the pending request, as a host does when it fires the frame.
    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule_next_tick(&mut self) -> Option<FrameHandle> {
        if self.unavailable {
            return None;
        }
        self.next_id += 1;
        self.requested += 1;
        let h = FrameHandle(self.next_id);
        self.pending = Some(h);
        Some(h)
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
        self.cancelled.push(handle);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    /// Rescheduling itself every frame.
    Running,
    /// Drew a single frame and will not schedule again.
    Static,
    Disposed,
}

/// Drives an engine one frame at a time. Frames never overlap: the next
/// frame is only requested after the current one has finished drawing.
#[derive(Debug)]
pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    state: LoopState,
    pending: Option<FrameHandle>,
    frames: u64,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: LoopState::Idle,
            pending: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Start the loop. Reduced motion draws exactly one static frame and
    /// never schedules; otherwise the first frame is requested. Only the
    /// first call has any effect.
    pub fn start(
        &mut self,
        motion: MotionPreference,
        now_ms: f64,
        engine: &mut Engine,
        surface: &mut dyn DrawSurface,
    ) {
        if self.state != LoopState::Idle {
            log::warn!("[loop] start ignored in state {:?}", self.state);
            return;
        }
        match motion {
            MotionPreference::Reduced => self.draw_static(now_ms, engine, surface),
            MotionPreference::Full => {
                self.state = LoopState::Running;
                self.request_next(now_ms, engine, surface);
            }
        }
    }

    /// Host callback for a fired frame request. Returns whether a frame was
    /// drawn.
    pub fn on_frame(
        &mut self,
        now_ms: f64,
        engine: &mut Engine,
        surface: &mut dyn DrawSurface,
    ) -> bool {
        self.pending = None;
        if self.state != LoopState::Running {
            return false;
        }
        engine.tick(now_ms, surface);
        self.frames += 1;
        self.request_next(now_ms, engine, surface);
        true
    }

    /// Feed an input event to the engine. A static loop has no next frame to
    /// pick up a resize or a new selection, so it redraws its single frame
    /// for those. Events after dispose are dropped.
    pub fn dispatch(
        &mut self,
        event: InputEvent,
        now_ms: f64,
        engine: &mut Engine,
        host: &mut dyn SelectionHost,
        surface: &mut dyn DrawSurface,
    ) -> EventResponse {
        if self.state == LoopState::Disposed {
            return EventResponse::default();
        }
        let response = engine.handle_event(event, host, surface);
        if response.resized || response.selection.is_some() {
            self.redraw_static(now_ms, engine, surface);
        }
        response
    }

    /// Select a node by id, redrawing a static loop like [`Self::dispatch`].
    pub fn select(
        &mut self,
        node_id: &str,
        now_ms: f64,
        engine: &mut Engine,
        host: &mut dyn SelectionHost,
        surface: &mut dyn DrawSurface,
    ) -> Result<SelectionOutcome> {
        let outcome = engine.select_by_id(node_id, host)?;
        self.redraw_static(now_ms, engine, surface);
        Ok(outcome)
    }

    fn redraw_static(&mut self, now_ms: f64, engine: &mut Engine, surface: &mut dyn DrawSurface) {
        if self.state == LoopState::Static {
            self.draw_static(now_ms, engine, surface);
        }
    }

    /// Cancel any pending frame and stop for good.
    pub fn dispose(&mut self) {
        if let Some(h) = self.pending.take() {
            self.scheduler.cancel(h);
        }
        if self.state != LoopState::Disposed {
            log::info!("[loop] disposed after {} frames", self.frames);
        }
        self.state = LoopState::Disposed;
    }

    fn request_next(&mut self, now_ms: f64, engine: &mut Engine, surface: &mut dyn DrawSurface) {
        self.pending = self.scheduler.schedule_next_tick();
        if self.pending.is_none() {
            log::warn!("[loop] host refused a frame request, falling back to a static frame");
            self.draw_static(now_ms, engine, surface);
        }
    }

    fn draw_static(&mut self, now_ms: f64, engine: &mut Engine, surface: &mut dyn DrawSurface) {
        engine.render_static(now_ms, surface);
        self.frames += 1;
        self.state = LoopState::Static;
    }
}
