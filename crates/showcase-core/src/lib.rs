//! Canvas interaction engine for the portfolio site: the ambient particle
//! field behind the hero banner and the interactive project node map.
//!
//! Nothing in this crate touches the DOM. Drawing goes through
//! [`surface::DrawSurface`], frame pacing through [`scheduler::FrameScheduler`],
//! and page-side reactions through [`selection::SelectionHost`] and
//! [`view_mode::ViewPresenter`], so the whole engine runs and tests on the host.

pub mod config;
pub mod constants;
pub mod effects;
pub mod engine;
pub mod error;
pub mod field;
pub mod input;
pub mod math;
pub mod nodes;
pub mod scheduler;
pub mod selection;
pub mod surface;
pub mod view_mode;

pub use config::{EffectConfig, EngineConfig, FieldConfig, NodeConfig, SceneKind};
pub use engine::{Engine, EventResponse};
pub use error::{Result, ShowcaseError};
pub use input::{Cursor, InputEvent, PointerState};
pub use math::{NodeLayout, SurfaceSize, Viewport};
pub use scheduler::{FrameHandle, FrameLoop, FrameScheduler, LoopState, ManualScheduler, MotionPreference};
pub use selection::{SelectionHost, SelectionOutcome};
pub use surface::{DrawCmd, DrawSurface, RecordingSurface, Stroke};
pub use view_mode::{ViewMode, ViewModeController, ViewPresenter};
