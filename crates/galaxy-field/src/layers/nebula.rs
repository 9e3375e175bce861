//! Large pulsing nebula blobs drifting behind everything else.

use std::f32::consts::TAU;

use galaxy_core::Viewport;
use rand::Rng;

use super::{count_for, spread, uniform};
use crate::color::hsl_to_rgb;
use crate::particle::{Particle, ParticleKind};

/// Pulse amplitude and bias.
pub const PULSE: (f32, f32) = (0.3, 0.7);

/// Life lost per frame.
const DECAY: f32 = 0.5;

/// `area / density + base` blobs.
pub fn count(viewport: Viewport, density: f32, base: usize) -> usize {
    count_for(viewport, density) + base
}

pub fn create(viewport: Viewport, rng: &mut impl Rng) -> Particle {
    Particle::new(
        uniform(rng, 0.0, viewport.width()),
        uniform(rng, 0.0, viewport.height()),
        uniform(rng, 100.0, 1100.0),
        uniform(rng, 100.0, 300.0),
        // Purple through indigo to slate blue
        hsl_to_rgb(uniform(rng, 235.0, 285.0), uniform(rng, 0.4, 0.7), uniform(rng, 0.15, 0.3)),
        uniform(rng, 0.1, 0.4),
        ParticleKind::Nebula {
            pulse_speed: uniform(rng, 0.2, 0.8),
            phase: uniform(rng, 0.0, TAU),
            life: uniform(rng, 500.0, 1500.0),
            max_life: 1000.0,
        },
    )
    .with_velocity(spread(rng, 0.2), spread(rng, 0.2))
}

/// Drift and decay by one frame; a spent or escaped blob is replaced in place.
pub fn update(particle: &mut Particle, viewport: Viewport, k: f32, rng: &mut impl Rng) {
    particle.drift(k);
    let ParticleKind::Nebula { life, .. } = &mut particle.kind else {
        return;
    };
    *life -= DECAY * k;

    let s = particle.size;
    let escaped = particle.x < -s
        || particle.x > viewport.width() + s
        || particle.y < -s
        || particle.y > viewport.height() + s;
    if *life <= 0.0 || escaped {
        *particle = create(viewport, rng);
    }
}

/// Remaining life as a 0.0-1.0 fade factor.
pub fn life_ratio(life: f32, max_life: f32) -> f32 {
    if max_life > 0.0 {
        (life / max_life).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
