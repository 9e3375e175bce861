//! Drifting cosmic dust, including dust shed near the pointer.

use std::f32::consts::TAU;

use galaxy_core::{Rgb, Viewport};
use rand::Rng;

use super::{count_for, spread, uniform};
use crate::color::{ROYAL_BLUE, SKY_BLUE};
use crate::particle::{Particle, ParticleKind};
use crate::projection::Influence;

/// Twinkle amplitude and bias for dust.
pub const TWINKLE: (f32, f32) = (0.4, 0.6);

/// How far zoom pushes dust away from the viewport center.
pub const ZOOM_PUSH: f32 = 0.6;

pub const INFLUENCE: Influence = Influence {
    depth: 800.0,
    magnitude: 30.0,
    radius: 250.0,
    boost: 5.0,
};

pub fn count(viewport: Viewport, density: f32) -> usize {
    count_for(viewport, density)
}

pub fn create(viewport: Viewport, rng: &mut impl Rng) -> Particle {
    let color = if rng.random::<f32>() > 0.7 {
        ROYAL_BLUE
    } else {
        Rgb::WHITE
    };
    Particle::new(
        uniform(rng, 0.0, viewport.width()),
        uniform(rng, 0.0, viewport.height()),
        uniform(rng, 0.0, 1000.0),
        uniform(rng, 0.5, 2.5),
        color,
        uniform(rng, 0.2, 0.8),
        ParticleKind::Dust {
            twinkle_speed: uniform(rng, 0.01, 0.03),
            phase: uniform(rng, 0.0, TAU),
        },
    )
    .with_velocity(spread(rng, 0.5), spread(rng, 0.5))
}

/// Closer, brighter and faster dust scattered around the pointer.
pub fn create_near(x: f32, y: f32, rng: &mut impl Rng) -> Particle {
    let color = if rng.random::<f32>() > 0.5 {
        Rgb::WHITE
    } else {
        SKY_BLUE
    };
    Particle::new(
        x + spread(rng, 80.0),
        y + spread(rng, 80.0),
        uniform(rng, 0.0, 200.0),
        uniform(rng, 0.4, 1.6),
        color,
        uniform(rng, 0.3, 1.0),
        ParticleKind::Dust {
            twinkle_speed: uniform(rng, 0.015, 0.04),
            phase: uniform(rng, 0.0, TAU),
        },
    )
    .with_velocity(spread(rng, 1.5), spread(rng, 1.5))
}

/// Advance twinkle phase by one frame, kept within one turn.
pub fn advance_phase(phase: &mut f32, twinkle_speed: f32, k: f32) {
    *phase = (*phase + twinkle_speed * k).rem_euclid(TAU);
}
