//! Fixed project markers and point-in-radius hit testing.

use crate::config::NodeConfig;
use crate::constants::*;
use crate::math::Viewport;
use crate::surface::{hex_with_alpha, DrawSurface, Stroke};
use fnv::FnvHashMap;
use glam::Vec2;

/// One interactive marker. Immutable once the registry is built.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    id: String,
    label: String,
    icon: String,
    color: String,
    description: String,
    position: Vec2,
    hit_radius: f32,
}

impl Node {
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn icon(&self) -> &str {
        &self.icon
    }
    pub fn color(&self) -> &str {
        &self.color
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    /// Position in reference space.
    pub fn position(&self) -> Vec2 {
        self.position
    }
    pub fn hit_radius(&self) -> f32 {
        self.hit_radius
    }

    /// Tooltip text: the description, or the label when there is none.
    pub fn hint(&self) -> &str {
        if self.description.is_empty() {
            &self.label
        } else {
            &self.description
        }
    }

    /// Strictly inside the hit radius; a point exactly on the rim misses.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.position.distance(p) < self.hit_radius
    }
}

impl From<NodeConfig> for Node {
    fn from(c: NodeConfig) -> Self {
        Self {
            id: c.id,
            label: c.label,
            icon: c.icon,
            color: c.color,
            description: c.description,
            position: c.position,
            hit_radius: c.hit_radius,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
    by_id: FnvHashMap<String, usize>,
}

impl NodeRegistry {
    pub fn new(configs: Vec<NodeConfig>) -> Self {
        let nodes: Vec<Node> = configs.into_iter().map(Node::from).collect();
        let mut by_id = FnvHashMap::default();
        for (i, n) in nodes.iter().enumerate() {
            // first registration wins, matching hit-test order
            by_id.entry(n.id.clone()).or_insert(i);
        }
        Self { nodes, by_id }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Index of the first node, in registry order, whose hit radius strictly
    /// contains `p` (reference space). No nearest-node tie-break.
    pub fn hit_index(&self, p: Vec2) -> Option<usize> {
        self.nodes.iter().position(|n| n.contains(p))
    }

    pub fn hit_test(&self, p: Vec2) -> Option<&Node> {
        self.hit_index(p).map(|i| &self.nodes[i])
    }

    /// Dashed line between every unordered pair of nodes.
    pub fn render_links(&self, surface: &mut dyn DrawSurface, viewport: &Viewport) {
        if self.nodes.len() < 2 {
            return;
        }
        let stroke = Stroke::solid(LINK_COLOR, LINK_WIDTH).dashed(LINK_DASH);
        for (i, a) in self.nodes.iter().enumerate() {
            for b in &self.nodes[i + 1..] {
                surface.stroke_line(
                    viewport.to_surface(a.position),
                    viewport.to_surface(b.position),
                    stroke,
                );
            }
        }
    }

    /// Glow, disc, icon and label for every node. The glow radius pulses
    /// with the node index as phase seed so nodes breathe out of step.
    pub fn render(&self, surface: &mut dyn DrawSurface, time_ms: f64, viewport: &Viewport) {
        let t = time_ms * 0.001;
        let s = viewport.scale;
        let icon_font = node_font(None, NODE_ICON_FONT_PX, s);
        let label_font = node_font(Some(NODE_LABEL_FONT_WEIGHT), NODE_LABEL_FONT_PX, s);
        for (i, n) in self.nodes.iter().enumerate() {
            let center = viewport.to_surface(n.position);
            let pulse = pulse_factor(t, i);

            let half = hex_with_alpha(&n.color, "80");
            let clear = hex_with_alpha(&n.color, "00");
            surface.fill_radial_gradient(
                center,
                NODE_GLOW_RADIUS * pulse * s,
                &[(0.0, n.color.as_str()), (0.5, half.as_str()), (1.0, clear.as_str())],
            );
            surface.fill_circle(center, NODE_INNER_RADIUS * s, &n.color, 1.0);
            surface.fill_text(&n.icon, center, &icon_font, NODE_TEXT_COLOR);
            surface.fill_text(
                &n.label,
                center + Vec2::new(0.0, NODE_LABEL_OFFSET * s),
                &label_font,
                NODE_TEXT_COLOR,
            );
        }
    }

    pub fn render_highlight(&self, surface: &mut dyn DrawSurface, index: usize, viewport: &Viewport) {
        if let Some(n) = self.nodes.get(index) {
            surface.stroke_circle(
                viewport.to_surface(n.position),
                NODE_HIGHLIGHT_RADIUS * viewport.scale,
                Stroke::solid(&n.color, NODE_HIGHLIGHT_WIDTH).glowing(NODE_HIGHLIGHT_GLOW),
            );
        }
    }
}

/// CSS font shorthand for a node glyph at `px` reference pixels, scaled with
/// the viewport like the discs. Sizes are rounded to a tenth of a pixel.
pub fn node_font(weight: Option<&str>, px: f32, scale: f32) -> String {
    let size = ((px * scale * 10.0).round() / 10.0).max(1.0);
    match weight {
        Some(w) => format!("{w} {size}px {NODE_FONT_FAMILY}"),
        None => format!("{size}px {NODE_FONT_FAMILY}"),
    }
}

/// `sin(t * 2 + index) * 0.3 + 1`, `t` in seconds.
#[inline]
pub fn pulse_factor(t_sec: f64, index: usize) -> f32 {
    ((t_sec * NODE_PULSE_RATE + index as f64).sin() as f32) * NODE_PULSE_DEPTH + 1.0
}
