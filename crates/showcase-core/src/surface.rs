//! Immediate-mode 2D drawing seam.
//!
//! The engine never talks to a canvas directly; it issues calls against a
//! [`DrawSurface`]. The web frontend implements it over
//! `CanvasRenderingContext2d`, tests use [`RecordingSurface`].
//!
//! Colors are CSS color strings and are passed through untouched. A malformed
//! color simply renders wrong; nothing here validates it.

use glam::Vec2;

/// Line/outline styling for stroke calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke<'a> {
    pub color: &'a str,
    pub width: f32,
    pub alpha: f32,
    pub dash: Option<[f32; 2]>,
    /// Shadow blur in surface units, 0 disables the glow.
    pub glow: f32,
}

impl<'a> Stroke<'a> {
    pub fn solid(color: &'a str, width: f32) -> Self {
        Self {
            color,
            width,
            alpha: 1.0,
            dash: None,
            glow: 0.0,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn dashed(mut self, dash: [f32; 2]) -> Self {
        self.dash = Some(dash);
        self
    }

    pub fn glowing(mut self, blur: f32) -> Self {
        self.glow = blur;
        self
    }
}

pub trait DrawSurface {
    /// Reset the coordinate transform to a uniform device-pixel scale.
    fn reset_transform(&mut self, pixel_ratio: f32);
    fn clear(&mut self, size: Vec2);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str);
    /// Fill `[0, size]` with a diagonal linear gradient from the top-left corner.
    fn fill_linear_gradient(&mut self, size: Vec2, stops: &[(f32, &str)]);
    /// Fill a disc with a radial gradient from its center outwards.
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[(f32, &str)]);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str, alpha: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke<'_>);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke<'_>);
    /// Draw text centered on `pos`.
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str);
}

/// Append a two-digit hex alpha to a `#rrggbb` color. Any other form is
/// returned unchanged.
pub fn hex_with_alpha(color: &str, alpha_hex: &str) -> String {
    let is_rrggbb =
        color.len() == 7 && color.starts_with('#') && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if is_rrggbb {
        format!("{color}{alpha_hex}")
    } else {
        color.to_string()
    }
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    ResetTransform(f32),
    Clear(Vec2),
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: String,
    },
    LinearGradient {
        size: Vec2,
        stops: Vec<(f32, String)>,
    },
    RadialGradient {
        center: Vec2,
        radius: f32,
        stops: Vec<(f32, String)>,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
        alpha: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: String,
        width: f32,
        alpha: f32,
        dashed: bool,
    },
    Ring {
        center: Vec2,
        radius: f32,
        color: String,
        width: f32,
        glow: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        font: String,
        color: String,
    },
}

/// Surface that records every call, for host-side tests and debugging.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.commands)
    }

    pub fn count(&self, pred: impl Fn(&DrawCmd) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { .. }))
    }
}

fn own_stops(stops: &[(f32, &str)]) -> Vec<(f32, String)> {
    stops.iter().map(|(o, c)| (*o, c.to_string())).collect()
}

impl DrawSurface for RecordingSurface {
    fn reset_transform(&mut self, pixel_ratio: f32) {
        self.commands.push(DrawCmd::ResetTransform(pixel_ratio));
    }

    fn clear(&mut self, size: Vec2) {
        self.commands.push(DrawCmd::Clear(size));
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str) {
        self.commands.push(DrawCmd::FillRect {
            origin,
            size,
            color: color.to_string(),
        });
    }

    fn fill_linear_gradient(&mut self, size: Vec2, stops: &[(f32, &str)]) {
        self.commands.push(DrawCmd::LinearGradient {
            size,
            stops: own_stops(stops),
        });
    }

    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[(f32, &str)]) {
        self.commands.push(DrawCmd::RadialGradient {
            center,
            radius,
            stops: own_stops(stops),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str, alpha: f32) {
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            color: color.to_string(),
            alpha,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke<'_>) {
        self.commands.push(DrawCmd::Line {
            from,
            to,
            color: stroke.color.to_string(),
            width: stroke.width,
            alpha: stroke.alpha,
            dashed: stroke.dash.is_some(),
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke<'_>) {
        self.commands.push(DrawCmd::Ring {
            center,
            radius,
            color: stroke.color.to_string(),
            width: stroke.width,
            glow: stroke.glow,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            pos,
            font: font.to_string(),
            color: color.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_alpha_only_touches_rrggbb() {
        assert_eq!(hex_with_alpha("#667eea", "80"), "#667eea80");
        assert_eq!(hex_with_alpha("#fff", "80"), "#fff");
        assert_eq!(hex_with_alpha("tomato", "00"), "tomato");
        assert_eq!(hex_with_alpha("#zzzzzz", "00"), "#zzzzzz");
    }
}
