//! Statically typed engine configuration.
//!
//! Every struct carries `#[serde(default)]`, and [`EngineConfig::overlay_json`]
//! deep-merges a partial JSON document over a preset, so a page can tweak
//! a single field without restating the rest. Values are not range-checked.

use crate::constants::*;
use crate::error::Result;
use crate::math::NodeLayout;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which page feature an engine instance drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// Ambient field behind the hero banner.
    #[default]
    Hero,
    /// Interactive project node map with grid, links and bursts.
    ProjectMap,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub color: String,
    pub description: String,
    /// Position in reference space.
    pub position: Vec2,
    pub hit_radius: f32,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            label: String::new(),
            icon: String::new(),
            color: "#ffffff".to_string(),
            description: String::new(),
            position: Vec2::ZERO,
            hit_radius: NODE_HIT_RADIUS,
        }
    }
}

impl NodeConfig {
    pub fn new(id: &str, label: &str, icon: &str, color: &str, position: Vec2) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            position,
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    pub count: usize,
    pub decay_rate: f32,
    pub velocity_range: f32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            count: BURST_COUNT,
            decay_rate: BURST_DECAY,
            velocity_range: BURST_VELOCITY_RANGE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub max_points: usize,
    pub area_per_point: f32,
    pub influence_radius: f32,
    pub connection_radius: f32,
    pub initial_speed: f32,
    pub drift_amplitude: f32,
    pub attraction: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_points: FIELD_MAX_POINTS,
            area_per_point: FIELD_AREA_PER_POINT,
            influence_radius: FIELD_INFLUENCE_RADIUS,
            connection_radius: FIELD_CONNECTION_RADIUS,
            initial_speed: FIELD_INITIAL_SPEED,
            drift_amplitude: FIELD_DRIFT_AMPLITUDE,
            attraction: FIELD_ATTRACTION,
        }
    }
}

impl FieldConfig {
    /// `min(max_points, floor(area / area_per_point))`.
    pub fn point_count(&self, width: f32, height: f32) -> usize {
        if width <= 0.0 || height <= 0.0 || self.area_per_point <= 0.0 {
            return 0;
        }
        let by_area = (width as f64 * height as f64 / self.area_per_point as f64).floor();
        (by_area as usize).min(self.max_points)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scene: SceneKind,
    pub nodes: Vec<NodeConfig>,
    pub layout: NodeLayout,
    /// Size of the space node positions are authored in.
    pub reference_size: Vec2,
    pub effect: EffectConfig,
    pub field: FieldConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::hero()
    }
}

impl EngineConfig {
    pub fn hero() -> Self {
        Self {
            scene: SceneKind::Hero,
            nodes: Vec::new(),
            layout: NodeLayout::Fit,
            reference_size: Vec2::new(MAP_REFERENCE_WIDTH, MAP_REFERENCE_HEIGHT),
            effect: EffectConfig::default(),
            field: FieldConfig::default(),
        }
    }

    pub fn project_map() -> Self {
        Self {
            scene: SceneKind::ProjectMap,
            nodes: default_project_nodes(),
            field: FieldConfig {
                max_points: 40,
                ..FieldConfig::default()
            },
            ..Self::hero()
        }
    }

    pub fn preset(scene: SceneKind) -> Self {
        match scene {
            SceneKind::Hero => Self::hero(),
            SceneKind::ProjectMap => Self::project_map(),
        }
    }

    /// Deep-merge a JSON object over this config. Arrays (e.g. `nodes`) are
    /// replaced wholesale.
    pub fn overlay_json(&self, json: &str) -> Result<EngineConfig> {
        let mut base = serde_json::to_value(self)?;
        let patch: Value = serde_json::from_str(json)?;
        merge_json(&mut base, patch);
        Ok(serde_json::from_value(base)?)
    }
}

fn merge_json(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(b), Value::Object(p)) => {
            for (k, v) in p {
                merge_json(b.entry(k).or_insert(Value::Null), v);
            }
        }
        (b, p) => *b = p,
    }
}

pub fn default_project_nodes() -> Vec<NodeConfig> {
    vec![
        NodeConfig::new("samepath", "SamePath", "📚", "#667eea", Vec2::new(100.0, 150.0))
            .with_description("Student Collaboration Platform"),
        NodeConfig::new(
            "realestatehirsch",
            "RealEstateHirsch",
            "🏠",
            "#f5576c",
            Vec2::new(350.0, 300.0),
        )
        .with_description("Professional Real Estate Website"),
        NodeConfig::new(
            "sportspredictor",
            "SportsPredictor",
            "🏈",
            "#4facfe",
            Vec2::new(600.0, 150.0),
        )
        .with_description("ML-Powered Sports Analytics"),
    ]
}
