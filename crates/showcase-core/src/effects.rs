//! Short-lived particle bursts spawned when a node is selected.

use crate::config::EffectConfig;
use crate::constants::BURST_PARTICLE_RADIUS;
use crate::math::random_symmetric;
use crate::surface::DrawSurface;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct EffectParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: String,
    decay: f32,
    age: u32,
    lifespan: u32,
}

impl EffectParticle {
    /// Remaining life in `[0, 1]`, used as the draw alpha.
    pub fn life(&self) -> f32 {
        (1.0 - self.age as f32 * self.decay).max(0.0)
    }

    pub fn decay(&self) -> f32 {
        self.decay
    }

    pub fn is_alive(&self) -> bool {
        self.age < self.lifespan
    }
}

/// Number of ticks until a life of 1.0 reaches zero at `decay` per tick.
///
/// Counted in whole ticks so float accumulation can't leave a sliver of life
/// behind: 0.02 gives exactly 50.
pub fn lifespan_ticks(decay: f32) -> u32 {
    if decay.is_nan() || decay <= 0.0 {
        return 0;
    }
    let ticks = (1.0 / decay as f64 - 1e-4).ceil();
    ticks.clamp(1.0, u32::MAX as f64) as u32
}

#[derive(Clone, Debug, Default)]
pub struct EffectSystem {
    config: EffectConfig,
    particles: Vec<EffectParticle>,
}

impl EffectSystem {
    pub fn new(config: EffectConfig) -> Self {
        Self {
            config,
            particles: Vec::new(),
        }
    }

    pub fn particles(&self) -> &[EffectParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Append `count` particles at `origin` with independent random
    /// velocities in `[-range, range]` per axis.
    pub fn spawn_burst<R: Rng + ?Sized>(&mut self, origin: Vec2, color: &str, rng: &mut R) {
        let lifespan = lifespan_ticks(self.config.decay_rate);
        let range = self.config.velocity_range;
        self.particles.reserve(self.config.count);
        for _ in 0..self.config.count {
            self.particles.push(EffectParticle {
                position: origin,
                velocity: Vec2::new(random_symmetric(rng, range), random_symmetric(rng, range)),
                color: color.to_string(),
                decay: self.config.decay_rate,
                age: 0,
                lifespan,
            });
        }
    }

    /// Age every particle, drop the ones whose life reached zero, then move
    /// the survivors. A particle never moves or draws on the tick it dies.
    pub fn step(&mut self) {
        self.particles.retain_mut(|p| {
            p.age = p.age.saturating_add(1);
            if !p.is_alive() {
                return false;
            }
            p.position += p.velocity;
            true
        });
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        for p in &self.particles {
            surface.fill_circle(p.position, BURST_PARTICLE_RADIUS, &p.color, p.life());
        }
    }

    /// One frame: step then draw.
    pub fn tick(&mut self, surface: &mut dyn DrawSurface) {
        self.step();
        self.render(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn lifespan_for_common_decays() {
        assert_eq!(lifespan_ticks(0.02), 50);
        assert_eq!(lifespan_ticks(0.5), 2);
        assert_eq!(lifespan_ticks(0.03), 34);
        assert_eq!(lifespan_ticks(1.0), 1);
        assert_eq!(lifespan_ticks(2.0), 1);
        assert_eq!(lifespan_ticks(0.0), 0);
        assert_eq!(lifespan_ticks(f32::NAN), 0);
    }

    #[test]
    fn zero_decay_particles_vanish_immediately() {
        let mut fx = EffectSystem::new(EffectConfig {
            decay_rate: 0.0,
            ..EffectConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(3);
        fx.spawn_burst(Vec2::ZERO, "#fff", &mut rng);
        fx.step();
        assert!(fx.is_empty());
    }
}
