//! Particle model shared by every collection in the field.

use galaxy_core::{Layer, Rgb};

use crate::projection::MAX_DEPTH;

/// Points kept in a falling star's trail.
pub const TRAIL_LENGTH: usize = 8;

/// A single particle. Variant-specific state lives in [`ParticleKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Depth, always within `0.0..=MAX_DEPTH`.
    pub z: f32,
    /// Horizontal velocity in pixels per frame.
    pub vx: f32,
    /// Vertical velocity in pixels per frame.
    pub vy: f32,
    pub size: f32,
    pub color: Rgb,
    /// Base opacity before twinkle, depth and life fading.
    pub opacity: f32,
    pub kind: ParticleKind,
}

impl Particle {
    /// A particle at rest; depth is clamped into range.
    pub fn new(
        x: f32,
        y: f32,
        z: f32,
        size: f32,
        color: Rgb,
        opacity: f32,
        kind: ParticleKind,
    ) -> Self {
        Self {
            x,
            y,
            z: clamp_depth(z),
            vx: 0.0,
            vy: 0.0,
            size,
            color,
            opacity,
            kind,
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    /// Move by one frame's worth of velocity, scaled by `k`.
    pub fn drift(&mut self, k: f32) {
        self.x += self.vx * k;
        self.y += self.vy * k;
    }
}

/// Per-variant particle state.
#[derive(Debug, Clone, PartialEq)]
pub enum ParticleKind {
    /// Persistent parallax star.
    Star {
        layer: Layer,
        twinkle_speed: f32,
        phase: f32,
    },
    /// Persistent drifting dust; `phase` advances every frame.
    Dust { twinkle_speed: f32, phase: f32 },
    /// Diffuse dust cloud orbiting the galaxy core.
    Orbit { angle: f32, distance: f32, speed: f32 },
    /// Large pulsing nebula blob, regenerated in place when it fades out.
    Nebula {
        pulse_speed: f32,
        phase: f32,
        life: f32,
        max_life: f32,
    },
    /// Wide aurora band centered on the particle; `size` is its height.
    Aurora {
        width: f32,
        frequency: f32,
        amplitude: f32,
        speed: f32,
        phase: f32,
    },
    /// Transient streak crossing the viewport.
    ShootingStar { length: f32, life: f32, max_life: f32 },
    /// Transient star falling from the top edge with a short trail.
    FallingStar { life: f32, max_life: f32, trail: Trail },
}

/// One remembered position of a falling star.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrailPoint {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

/// Fixed-size history of positions, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    points: [TrailPoint; TRAIL_LENGTH],
    len: usize,
}

impl Trail {
    /// Append a point, dropping the oldest once full.
    pub fn push(&mut self, point: TrailPoint) {
        if self.len == TRAIL_LENGTH {
            self.points.copy_within(1.., 0);
            self.points[TRAIL_LENGTH - 1] = point;
        } else {
            self.points[self.len] = point;
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points[..self.len].iter()
    }
}

/// Clamp a depth into the supported range.
pub fn clamp_depth(z: f32) -> f32 {
    if z.is_nan() { 0.0 } else { z.clamp(0.0, MAX_DEPTH) }
}
