//! One engine instance per canvas: owns the field, nodes, bursts and pointer,
//! reacts to [`InputEvent`]s and draws a frame per [`Engine::tick`].

use crate::config::{EngineConfig, SceneKind};
use crate::constants::{
    GRID_COLOR, GRID_SPACING, HERO_BACKGROUND, HERO_STATIC_FILL, MAP_BACKGROUND,
};
use crate::effects::EffectSystem;
use crate::error::{Result, ShowcaseError};
use crate::field::AmbientField;
use crate::input::{Cursor, InputEvent, PointerState};
use crate::math::{SurfaceSize, Viewport};
use crate::nodes::{Node, NodeRegistry};
use crate::selection::{dispatch_selection, SelectionHost, SelectionOutcome};
use crate::surface::{DrawSurface, Stroke};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// What an input event changed, for the host to mirror into the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventResponse {
    /// Cursor the canvas should show; `None` leaves it alone.
    pub cursor: Option<Cursor>,
    /// Selected node id and how the page handled it.
    pub selection: Option<(String, SelectionOutcome)>,
    pub resized: bool,
}

pub struct Engine {
    scene: SceneKind,
    config: EngineConfig,
    size: SurfaceSize,
    viewport: Viewport,
    field: AmbientField,
    nodes: NodeRegistry,
    effects: EffectSystem,
    pointer: PointerState,
    selected: Option<usize>,
    hovered: Option<usize>,
    rng: StdRng,
    time_ms: f64,
}

impl Engine {
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        let nodes = NodeRegistry::new(config.nodes.clone());
        log::info!(
            "[engine] scene={:?} nodes={} max_points={}",
            config.scene,
            nodes.len(),
            config.field.max_points
        );
        Self {
            scene: config.scene,
            field: AmbientField::new(config.field),
            effects: EffectSystem::new(config.effect),
            nodes,
            config,
            size: SurfaceSize::default(),
            viewport: Viewport::IDENTITY,
            pointer: PointerState::default(),
            selected: None,
            hovered: None,
            rng: StdRng::seed_from_u64(seed),
            time_ms: 0.0,
        }
    }

    pub fn scene(&self) -> SceneKind {
        self.scene
    }
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
    pub fn size(&self) -> SurfaceSize {
        self.size
    }
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
    pub fn field(&self) -> &AmbientField {
        &self.field
    }
    pub fn nodes(&self) -> &NodeRegistry {
        &self.nodes
    }
    pub fn effects(&self) -> &EffectSystem {
        &self.effects
    }
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }
    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }
    pub fn selected_node(&self) -> Option<&Node> {
        self.selected.and_then(|i| self.nodes.get(i))
    }
    pub fn hovered_node(&self) -> Option<&Node> {
        self.hovered.and_then(|i| self.nodes.get(i))
    }

    /// Tooltip for the hovered node, see [`Node::hint`].
    pub fn hover_hint(&self) -> Option<&str> {
        self.hovered_node().map(Node::hint)
    }

    /// Adopt a new logical size: reset the device-pixel transform, refit the
    /// node viewport and regenerate every ambient point from scratch.
    pub fn resize(&mut self, size: SurfaceSize, surface: &mut dyn DrawSurface) {
        self.size = size;
        surface.reset_transform(size.pixel_ratio);
        self.viewport = Viewport::for_layout(self.config.layout, self.config.reference_size, size);
        self.field.initialize(size, &mut self.rng);
        log::info!(
            "[resize] {:.0}x{:.0} @{:.2} points={}",
            size.width,
            size.height,
            size.pixel_ratio,
            self.field.points().len()
        );
    }

    /// Node under a surface-space point, if any.
    pub fn node_at(&self, p: Vec2) -> Option<&Node> {
        self.nodes.hit_test(self.viewport.to_reference(p))
    }

    pub fn handle_event(
        &mut self,
        event: InputEvent,
        host: &mut dyn SelectionHost,
        surface: &mut dyn DrawSurface,
    ) -> EventResponse {
        let mut out = EventResponse::default();
        match event {
            InputEvent::PointerMove { x, y } => {
                self.pointer.moved_to(Vec2::new(x, y));
                // a press holds the hover until release
                if !self.pointer.pressed {
                    out.cursor = self.update_hover();
                }
            }
            InputEvent::PointerLeave => {
                self.pointer.left();
                if !self.nodes.is_empty() {
                    self.hovered = None;
                    out.cursor = Some(Cursor::Default);
                }
            }
            InputEvent::PointerDown { x, y } => {
                self.pointer.moved_to(Vec2::new(x, y));
                out.cursor = self.update_hover();
                self.pointer.pressed = true;
            }
            InputEvent::PointerUp { x, y } => {
                self.pointer.moved_to(Vec2::new(x, y));
                self.pointer.pressed = false;
                out.cursor = self.update_hover();
            }
            InputEvent::Click { x, y } => {
                let hit = self.nodes.hit_index(self.viewport.to_reference(Vec2::new(x, y)));
                if let Some(i) = hit {
                    let id = self.nodes.get(i).map(|n| n.id().to_string());
                    if let (Some(id), Some(outcome)) = (id, self.select_index(i, host)) {
                        out.selection = Some((id, outcome));
                    }
                }
            }
            InputEvent::Resize {
                width,
                height,
                pixel_ratio,
            } => {
                self.resize(SurfaceSize::new(width, height, pixel_ratio), surface);
                out.resized = true;
            }
        }
        out
    }

    fn update_hover(&mut self) -> Option<Cursor> {
        if self.nodes.is_empty() {
            return None;
        }
        self.hovered = self.nodes.hit_index(self.viewport.to_reference(self.pointer.position));
        Some(if self.hovered.is_some() {
            Cursor::Pointer
        } else {
            Cursor::Default
        })
    }

    /// Select a node: remember it, spawn a burst at its on-surface position
    /// and forward the selection to the page.
    pub fn select_index(
        &mut self,
        index: usize,
        host: &mut dyn SelectionHost,
    ) -> Option<SelectionOutcome> {
        let node = self.nodes.get(index)?;
        let origin = self.viewport.to_surface(node.position());
        let id = node.id().to_string();
        let color = node.color().to_string();
        self.selected = Some(index);
        self.effects.spawn_burst(origin, &color, &mut self.rng);
        let outcome = dispatch_selection(host, &id);
        log::debug!("[select] {id} -> {outcome:?}");
        Some(outcome)
    }

    pub fn select_by_id(
        &mut self,
        id: &str,
        host: &mut dyn SelectionHost,
    ) -> Result<SelectionOutcome> {
        let index = self
            .nodes
            .index_of(id)
            .ok_or_else(|| ShowcaseError::UnknownNode(id.to_string()))?;
        self.select_index(index, host)
            .ok_or_else(|| ShowcaseError::UnknownNode(id.to_string()))
    }

    /// Advance and draw one frame. Draw order: clear, background, grid and
    /// node links (map only), ambient field, bursts, nodes, selection ring.
    pub fn tick(&mut self, now_ms: f64, surface: &mut dyn DrawSurface) {
        self.time_ms = now_ms;
        self.draw_backdrop(surface);
        self.field.step(now_ms, &self.pointer);
        self.field.render(surface);
        self.effects.tick(surface);
        self.draw_nodes(surface);
    }

    /// Single frame for reduced motion: nothing moves. The hero gets a flat
    /// fill, the map keeps its backdrop and nodes so it stays usable.
    pub fn render_static(&mut self, now_ms: f64, surface: &mut dyn DrawSurface) {
        self.time_ms = now_ms;
        match self.scene {
            SceneKind::Hero => {
                let size = self.size_vec();
                surface.clear(size);
                surface.fill_rect(Vec2::ZERO, size, HERO_STATIC_FILL);
            }
            SceneKind::ProjectMap => {
                self.draw_backdrop(surface);
                self.field.render(surface);
                self.draw_nodes(surface);
            }
        }
    }

    fn size_vec(&self) -> Vec2 {
        Vec2::new(self.size.width, self.size.height)
    }

    fn draw_backdrop(&self, surface: &mut dyn DrawSurface) {
        let size = self.size_vec();
        surface.clear(size);
        match self.scene {
            SceneKind::Hero => surface.fill_linear_gradient(size, &HERO_BACKGROUND),
            SceneKind::ProjectMap => {
                surface.fill_linear_gradient(size, &MAP_BACKGROUND);
                draw_grid(surface, size);
                self.nodes.render_links(surface, &self.viewport);
            }
        }
    }

    fn draw_nodes(&self, surface: &mut dyn DrawSurface) {
        self.nodes.render(surface, self.time_ms, &self.viewport);
        if let Some(i) = self.selected {
            self.nodes.render_highlight(surface, i, &self.viewport);
        }
    }
}

fn draw_grid(surface: &mut dyn DrawSurface, size: Vec2) {
    let stroke = Stroke::solid(GRID_COLOR, 1.0);
    let mut x = 0.0;
    while x < size.x {
        surface.stroke_line(Vec2::new(x, 0.0), Vec2::new(x, size.y), stroke);
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y < size.y {
        surface.stroke_line(Vec2::new(0.0, y), Vec2::new(size.x, y), stroke);
        y += GRID_SPACING;
    }
}
