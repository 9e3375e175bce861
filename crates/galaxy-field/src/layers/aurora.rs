//! Aurora curtains: a handful of wide, breathing bands of colored light.

use std::f32::consts::{PI, TAU};

use galaxy_core::{Rgb, Viewport};
use rand::Rng;

use super::uniform;
use crate::particle::{Particle, ParticleKind};

/// Bands created per viewport, inclusive.
pub const MIN_WAVES: usize = 4;
pub const MAX_WAVES: usize = 6;

/// Columns sampled across one band.
pub const POINTS: usize = 100;

/// Horizontal sway, in radians per second and pixels per frame.
const SWAY_RATE: f32 = 0.3;
const SWAY: f32 = 0.1;

/// The lower edge ripples less than the upper one.
const LOWER_RIPPLE: f32 = 0.7;

const PALETTE: [Rgb; 5] = [
    Rgb::new(0, 255, 127),
    Rgb::new(50, 205, 50),
    Rgb::new(0, 191, 255),
    Rgb::new(138, 43, 226),
    Rgb::new(75, 0, 130),
];

pub fn count(rng: &mut impl Rng) -> usize {
    rng.random_range(MIN_WAVES..=MAX_WAVES)
}

/// A band across the middle three fifths of the viewport, wider than it.
pub fn create(viewport: Viewport, rng: &mut impl Rng) -> Particle {
    let (w, h) = (viewport.width(), viewport.height());
    Particle::new(
        uniform(rng, 0.0, w),
        h * 0.2 + uniform(rng, 0.0, h * 0.6),
        0.0,
        uniform(rng, 100.0, 300.0),
        PALETTE[rng.random_range(0..PALETTE.len())],
        uniform(rng, 0.1, 0.3),
        ParticleKind::Aurora {
            width: w * uniform(rng, 1.2, 2.0),
            frequency: uniform(rng, 0.01, 0.03),
            amplitude: uniform(rng, 20.0, 60.0),
            speed: uniform(rng, 0.5, 1.5),
            phase: uniform(rng, 0.0, TAU),
        },
    )
}

/// Sway sideways and advance the ripple phase by one frame.
pub fn update(particle: &mut Particle, time: f32, k: f32) {
    particle.x += (time * SWAY_RATE).sin() * SWAY * k;
    if let ParticleKind::Aurora { phase, speed, .. } = &mut particle.kind {
        *phase = (*phase + *speed * 0.0005 * k).rem_euclid(TAU);
    }
}

/// Opacity after the slow breathing shared by every band, in `[0.2, 0.8] * base`.
pub fn breath(base: f32, time: f32) -> f32 {
    base * (0.5 + time.sin() * 0.3)
}

/// Sampled columns of a band as `(x, top, bottom)`, left to right.
pub fn columns(particle: &Particle, time: f32) -> impl Iterator<Item = (f32, f32, f32)> + '_ {
    let (width, frequency, amplitude, speed, phase) = match particle.kind {
        ParticleKind::Aurora {
            width,
            frequency,
            amplitude,
            speed,
            phase,
        } => (width, frequency, amplitude, speed, phase),
        _ => (0.0, 0.0, 0.0, 0.0, 0.0),
    };
    let points = if width > 0.0 { POINTS + 1 } else { 0 };
    let step = width / POINTS as f32;
    let left = particle.x - width / 2.0;
    let half = particle.size / 2.0;

    (0..points).map(move |i| {
        let x = left + i as f32 * step;
        let angle = x * frequency + time * speed + phase;
        let top = particle.y - half + angle.sin() * amplitude;
        let bottom = particle.y + half + (angle + PI).sin() * amplitude * LOWER_RIPPLE;
        (x, top, bottom)
    })
}
