//! Ambient field: drifting points joined by faint lines.

use crate::config::FieldConfig;
use crate::constants::{
    FIELD_DRIFT_FREQ_X, FIELD_DRIFT_FREQ_Y, FIELD_LINE_ALPHA_BASE, FIELD_LINE_COLOR,
    FIELD_LINE_FALLOFF, FIELD_LINE_WIDTH, FIELD_POINT_COLOR, FIELD_POINT_RADIUS,
};
use crate::input::PointerState;
use crate::math::{clamp_to_surface, random_symmetric, random_upto, SurfaceSize};
use crate::surface::{DrawSurface, Stroke};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientPoint {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Phase offset for the periodic drift, in `[0, 2π)`.
    pub phase: f32,
}

#[derive(Clone, Debug)]
pub struct AmbientField {
    config: FieldConfig,
    size: SurfaceSize,
    points: Vec<AmbientPoint>,
}

impl AmbientField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            size: SurfaceSize::default(),
            points: Vec::new(),
        }
    }

    /// Discard every point and create a fresh batch sized for `size`.
    pub fn initialize<R: Rng + ?Sized>(&mut self, size: SurfaceSize, rng: &mut R) {
        self.size = size;
        let count = self.config.point_count(size.width, size.height);
        let speed = self.config.initial_speed;
        self.points = (0..count)
            .map(|_| AmbientPoint {
                position: Vec2::new(random_upto(rng, size.width), random_upto(rng, size.height)),
                velocity: Vec2::new(random_symmetric(rng, speed), random_symmetric(rng, speed)),
                phase: random_upto(rng, TAU),
            })
            .collect();
        log::debug!(
            "[field] {} points for {:.0}x{:.0}",
            self.points.len(),
            size.width,
            size.height
        );
    }

    pub fn points(&self) -> &[AmbientPoint] {
        &self.points
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Advance every point by one frame.
    ///
    /// Positions end inside `[0, width] × [0, height]`: velocity is reflected
    /// away from whichever edge was crossed and the position is clamped back.
    pub fn step(&mut self, time_ms: f64, pointer: &PointerState) {
        let size = self.size;
        let amp = self.config.drift_amplitude;
        let radius = self.config.influence_radius;
        let pull = self.config.attraction;

        for p in &mut self.points {
            let phase = p.phase as f64;
            let drift = Vec2::new(
                (time_ms * FIELD_DRIFT_FREQ_X + phase).sin() as f32,
                (time_ms * FIELD_DRIFT_FREQ_Y + phase).cos() as f32,
            ) * amp;
            p.position += p.velocity + drift;

            if p.position.x < 0.0 {
                p.velocity.x = p.velocity.x.abs();
            } else if p.position.x > size.width {
                p.velocity.x = -p.velocity.x.abs();
            }
            if p.position.y < 0.0 {
                p.velocity.y = p.velocity.y.abs();
            } else if p.position.y > size.height {
                p.velocity.y = -p.velocity.y.abs();
            }
            p.position = clamp_to_surface(p.position, size);

            if pointer.active && radius > 0.0 {
                let to_pointer = pointer.position - p.position;
                let d = to_pointer.length();
                if d < radius {
                    let force = (radius - d) / radius;
                    p.position = clamp_to_surface(p.position + to_pointer * force * pull, size);
                }
            }
        }
    }

    /// Line opacity for two points `distance` apart, `None` when they are
    /// too far apart to be joined.
    pub fn connection_opacity(&self, distance: f32) -> Option<f32> {
        (distance < self.config.connection_radius)
            .then(|| (FIELD_LINE_ALPHA_BASE - distance / FIELD_LINE_FALLOFF).max(0.0))
    }

    /// Every joined unordered pair `(i, j, opacity)` with `i < j`.
    pub fn connections(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        let pts = &self.points;
        (0..pts.len()).flat_map(move |i| {
            ((i + 1)..pts.len()).filter_map(move |j| {
                let d = pts[i].position.distance(pts[j].position);
                self.connection_opacity(d).map(|alpha| (i, j, alpha))
            })
        })
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        for (i, j, alpha) in self.connections() {
            surface.stroke_line(
                self.points[i].position,
                self.points[j].position,
                Stroke::solid(FIELD_LINE_COLOR, FIELD_LINE_WIDTH).with_alpha(alpha),
            );
        }
        for p in &self.points {
            surface.fill_circle(p.position, FIELD_POINT_RADIUS, FIELD_POINT_COLOR, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field_with(points: Vec<AmbientPoint>, w: f32, h: f32) -> AmbientField {
        let mut f = AmbientField::new(FieldConfig::default());
        f.size = SurfaceSize::new(w, h, 1.0);
        f.points = points;
        f
    }

    fn still(x: f32, y: f32) -> AmbientPoint {
        AmbientPoint {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            phase: 0.0,
        }
    }

    #[test]
    fn initialize_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut f = AmbientField::new(FieldConfig::default());
        f.initialize(SurfaceSize::new(800.0, 400.0, 1.0), &mut rng);
        assert_eq!(f.points().len(), 53);
        for p in f.points() {
            assert!((0.0..800.0).contains(&p.position.x));
            assert!((0.0..400.0).contains(&p.position.y));
            assert!(p.velocity.x.abs() <= 0.1 && p.velocity.y.abs() <= 0.1);
            assert!((0.0..TAU).contains(&p.phase));
        }
    }

    #[test]
    fn crossing_an_edge_turns_velocity_inwards() {
        let mut p = still(0.05, 200.0);
        p.velocity = Vec2::new(-0.1, 0.0);
        // phase chosen so the x drift is negative at t = 0
        p.phase = -std::f32::consts::FRAC_PI_2;
        let mut f = field_with(vec![p], 800.0, 400.0);
        f.step(0.0, &PointerState::default());
        let p = f.points()[0];
        assert!(p.velocity.x > 0.0);
        assert!(p.position.x >= 0.0);
    }

    #[test]
    fn pointer_pulls_nearby_points_closer() {
        let mut f = field_with(vec![still(100.0, 100.0), still(700.0, 300.0)], 800.0, 400.0);
        f.config.drift_amplitude = 0.0;
        let pointer = PointerState {
            position: Vec2::new(150.0, 100.0),
            active: true,
            pressed: false,
        };
        f.step(0.0, &pointer);
        let near = f.points()[0].position;
        // force = (140 - 50) / 140, moved 50 * force * 0.06 towards the pointer
        let expected = 100.0 + 50.0 * (90.0 / 140.0) * 0.06;
        assert!((near.x - expected).abs() < 1e-3, "got {}", near.x);
        assert_eq!(f.points()[1].position, Vec2::new(700.0, 300.0));
    }

    #[test]
    fn inactive_pointer_has_no_pull() {
        let mut f = field_with(vec![still(100.0, 100.0)], 800.0, 400.0);
        f.config.drift_amplitude = 0.0;
        let pointer = PointerState {
            position: Vec2::new(120.0, 100.0),
            active: false,
            pressed: false,
        };
        f.step(0.0, &pointer);
        assert_eq!(f.points()[0].position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn connection_threshold_is_open_at_radius() {
        let f = field_with(vec![], 800.0, 400.0);
        assert!(f.connection_opacity(139.0).unwrap() > 0.0);
        assert!(f.connection_opacity(140.0).is_none());
        assert!(f.connection_opacity(141.0).is_none());
        assert!((f.connection_opacity(0.0).unwrap() - 0.12).abs() < 1e-6);
    }
}
