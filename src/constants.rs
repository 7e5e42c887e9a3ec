/// DOM hooks and page-level tuning for the web frontend.
///
/// Kept free of crate paths so host tests can `include!` it.

// Hero field
pub const HERO_CANVAS_ID: &str = "heroCanvas";
pub const HERO_CONTAINER_SELECTOR: &str = ".hero";

// Project map
pub const MAP_CANVAS_ID: &str = "adventureCanvas";
pub const MAP_CONTAINER_SELECTOR: &str = ".projects-showcase";
pub const MAP_TOGGLE_ID: &str = "adventureToggle";
pub const MAP_LABEL_ID: &str = "viewMode";
pub const MAP_STYLE_ID: &str = "adventure-styles";
pub const CARD_SELECTOR: &str = ".project-showcase-card";

// Classes toggled by the view switch
pub const MAP_ACTIVE_CLASS: &str = "adventure-active";
pub const CARD_HIDDEN_CLASS: &str = "adventure-mode";

// Selection fallback
pub const CARD_ID_ATTRIBUTE: &str = "data-project";
pub const CARD_HIGHLIGHT_CLASS: &str = "adventure-highlight";
pub const DETAIL_PANEL_FN: &str = "openModal";

// Per-canvas mount marker and config hook
pub const MOUNTED_ATTRIBUTE: &str = "data-showcase-mounted";
pub const CONFIG_ATTRIBUTE: &str = "data-showcase-config";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Fallback logical size when the canvas has no layout box yet
pub const FALLBACK_WIDTH: f64 = 800.0;
pub const FALLBACK_HEIGHT: f64 = 400.0;

pub const MAP_MARKUP: &str = r#"
<div class="adventure-header">
    <h2>Explore My Projects</h2>
    <button class="adventure-toggle" id="adventureToggle">
        <span id="viewMode">Card View</span>
        <span class="toggle-icon">⇄</span>
    </button>
</div>
<div class="adventure-canvas-container">
    <canvas id="adventureCanvas" width="800" height="400"></canvas>
    <div class="adventure-legend">
        <p>👆 Click on a project to explore</p>
        <p>✨ Hover to see details</p>
    </div>
</div>
"#;

pub const MAP_STYLES: &str = r#"
.adventure-view { margin-bottom: 3rem; background: var(--card-bg); border-radius: 24px; padding: 2.2rem;
    border: 1px solid rgba(148, 163, 184, 0.18); box-shadow: 0 24px 55px rgba(15, 23, 42, 0.12); backdrop-filter: blur(12px); }
.adventure-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1.5rem; }
.adventure-header h2 { color: #0f172a; margin: 0; font-size: 1.9rem; font-weight: 700; }
.adventure-toggle { display: flex; align-items: center; gap: 0.5rem; padding: 0.55rem 1.1rem;
    background: linear-gradient(135deg, rgba(109, 123, 255, 0.9), rgba(236, 72, 153, 0.9)); color: #fff;
    border: none; border-radius: 999px; cursor: pointer; font-weight: 600; transition: all 0.3s ease; }
.adventure-toggle:hover { transform: translateY(-3px); }
.toggle-icon { font-size: 1.2rem; }
.adventure-canvas-container { position: relative; border-radius: 20px; padding: 2.2rem; overflow: hidden;
    background: linear-gradient(135deg, rgba(15, 23, 42, 0.85), rgba(30, 64, 175, 0.75)); }
#adventureCanvas { display: block; width: 100%; aspect-ratio: 2 / 1; border-radius: 14px; cursor: default; }
.adventure-legend { margin-top: 1rem; text-align: center; color: rgba(148, 163, 184, 0.9); font-size: 0.95rem; }
.adventure-legend p { margin: 0.25rem 0; }
.project-showcase-card.adventure-mode { display: none; }
.projects-showcase:not(.adventure-active) .adventure-canvas-container { display: none; }
@keyframes adventure-pulse { 0% { transform: scale(1); } 50% { transform: scale(1.05); } 100% { transform: scale(1); } }
.adventure-highlight { animation: adventure-pulse 0.5s ease; }
"#;
