// Shared visual and interaction tuning constants used by the engine and the web frontend.

// Ambient field
pub const FIELD_MAX_POINTS: usize = 110;
pub const FIELD_AREA_PER_POINT: f32 = 6000.0; // surface units² per point before the cap applies
pub const FIELD_INITIAL_SPEED: f32 = 0.1; // |vx|, |vy| upper bound at creation
pub const FIELD_DRIFT_AMPLITUDE: f32 = 0.15;
pub const FIELD_DRIFT_FREQ_X: f64 = 0.0007; // per millisecond
pub const FIELD_DRIFT_FREQ_Y: f64 = 0.0006; // per millisecond
pub const FIELD_INFLUENCE_RADIUS: f32 = 140.0;
pub const FIELD_ATTRACTION: f32 = 0.06;
pub const FIELD_CONNECTION_RADIUS: f32 = 140.0;
pub const FIELD_LINE_ALPHA_BASE: f32 = 0.12;
pub const FIELD_LINE_FALLOFF: f32 = 1200.0; // alpha = base - d / falloff
pub const FIELD_LINE_WIDTH: f32 = 1.0;
pub const FIELD_POINT_RADIUS: f32 = 2.2;
pub const FIELD_POINT_COLOR: &str = "rgba(255, 255, 255, 0.65)";
pub const FIELD_LINE_COLOR: &str = "#ffffff";

// Nodes
pub const NODE_HIT_RADIUS: f32 = 60.0;
pub const NODE_GLOW_RADIUS: f32 = 70.0; // scaled by the pulse factor
pub const NODE_INNER_RADIUS: f32 = 40.0;
pub const NODE_HIGHLIGHT_RADIUS: f32 = 50.0;
pub const NODE_HIGHLIGHT_WIDTH: f32 = 4.0;
pub const NODE_HIGHLIGHT_GLOW: f32 = 20.0; // shadow blur
pub const NODE_LABEL_OFFSET: f32 = 65.0;
pub const NODE_PULSE_RATE: f64 = 2.0; // radians per second
pub const NODE_PULSE_DEPTH: f32 = 0.3;
pub const NODE_ICON_FONT_PX: f32 = 32.0;
pub const NODE_LABEL_FONT_PX: f32 = 14.0;
pub const NODE_LABEL_FONT_WEIGHT: &str = "bold";
pub const NODE_FONT_FAMILY: &str = "Arial";
pub const NODE_TEXT_COLOR: &str = "white";

// Node map reference space; node coordinates are authored against it
pub const MAP_REFERENCE_WIDTH: f32 = 800.0;
pub const MAP_REFERENCE_HEIGHT: f32 = 400.0;

// Node map backdrop
pub const GRID_SPACING: f32 = 40.0;
pub const GRID_COLOR: &str = "rgba(255, 255, 255, 0.05)";
pub const LINK_COLOR: &str = "rgba(102, 126, 234, 0.3)";
pub const LINK_WIDTH: f32 = 2.0;
pub const LINK_DASH: [f32; 2] = [5.0, 5.0];

// Bursts
pub const BURST_COUNT: usize = 20;
pub const BURST_DECAY: f32 = 0.02; // life lost per tick
pub const BURST_VELOCITY_RANGE: f32 = 4.0; // |vx|, |vy| upper bound
pub const BURST_PARTICLE_RADIUS: f32 = 3.0;

// Palettes
pub const HERO_BACKGROUND: [(f32, &str); 3] = [
    (0.0, "rgba(109, 123, 255, 0.35)"),
    (0.5, "rgba(236, 72, 153, 0.25)"),
    (1.0, "rgba(56, 189, 248, 0.18)"),
];
pub const HERO_STATIC_FILL: &str = "rgba(109, 123, 255, 0.15)";
pub const MAP_BACKGROUND: [(f32, &str); 2] = [(0.0, "#1a1a2e"), (1.0, "#16213e")];
