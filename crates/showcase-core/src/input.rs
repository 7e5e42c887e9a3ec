use glam::Vec2;

/// The one pointer record an engine owns. Every consumer reads this instance.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    /// Last known position in surface coordinates.
    pub position: Vec2,
    pub active: bool,
    pub pressed: bool,
}

impl PointerState {
    pub fn moved_to(&mut self, position: Vec2) {
        self.position = position;
        self.active = true;
    }

    pub fn left(&mut self) {
        self.active = false;
        self.pressed = false;
    }
}

/// Input delivered to an engine. Coordinates are surface-relative logical
/// units (CSS pixels), not backing-store pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f32, y: f32 },
    PointerLeave,
    PointerDown { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    Click { x: f32, y: f32 },
    Resize { width: f32, height: f32, pixel_ratio: f32 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}
