//! Small geometry helpers shared by the field, node and effect systems.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Logical size of the drawing surface plus the device pixel ratio used to
/// scale the backing store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            pixel_ratio: if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 },
        }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Clamp a point into `[0, width] × [0, height]`.
#[inline]
pub fn clamp_to_surface(p: Vec2, size: SurfaceSize) -> Vec2 {
    Vec2::new(p.x.clamp(0.0, size.width), p.y.clamp(0.0, size.height))
}

/// Uniform sample in `[-range, range]`; a non-positive range yields zero.
#[inline]
pub fn random_symmetric<R: Rng + ?Sized>(rng: &mut R, range: f32) -> f32 {
    if range > 0.0 {
        rng.gen_range(-range..=range)
    } else {
        0.0
    }
}

/// Uniform sample in `[0, max)`; a non-positive max yields zero.
#[inline]
pub fn random_upto<R: Rng + ?Sized>(rng: &mut R, max: f32) -> f32 {
    if max > 0.0 {
        rng.gen_range(0.0..max)
    } else {
        0.0
    }
}

/// How node coordinates map onto the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeLayout {
    /// Node coordinates are surface units; nothing reflows on resize.
    Fixed,
    /// Uniformly scale the reference space to fit the surface and center it.
    #[default]
    Fit,
}

/// Affine mapping from node reference space to surface space (uniform scale
/// plus offset, so circles stay circles).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Viewport {
    pub const IDENTITY: Viewport = Viewport {
        scale: 1.0,
        offset: Vec2::ZERO,
    };

    pub fn for_layout(layout: NodeLayout, reference: Vec2, size: SurfaceSize) -> Self {
        match layout {
            NodeLayout::Fixed => Self::IDENTITY,
            NodeLayout::Fit => {
                if size.is_empty() || reference.x <= 0.0 || reference.y <= 0.0 {
                    return Self::IDENTITY;
                }
                let scale = (size.width / reference.x).min(size.height / reference.y);
                let used = reference * scale;
                let offset = (Vec2::new(size.width, size.height) - used) * 0.5;
                Self { scale, offset }
            }
        }
    }

    #[inline]
    pub fn to_surface(&self, p: Vec2) -> Vec2 {
        p * self.scale + self.offset
    }

    #[inline]
    pub fn to_reference(&self, p: Vec2) -> Vec2 {
        (p - self.offset) / self.scale
    }
}
