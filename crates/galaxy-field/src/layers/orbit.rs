//! Diffuse dust clouds slowly orbiting the galaxy core.

use std::f32::consts::PI;

use galaxy_core::Viewport;
use rand::Rng;

use super::{count_for, uniform};
use crate::color::hsl_to_rgb;
use crate::particle::{Particle, ParticleKind};
use crate::projection::Influence;

/// Orbit clouds ignore depth for pointer influence.
pub const INFLUENCE: Influence = Influence {
    depth: f32::MAX,
    magnitude: 15.0,
    radius: 400.0,
    boost: 2.0,
};

/// Core of the galaxy as a fraction of the viewport.
const CORE: (f32, f32) = (0.2, 0.3);

/// Vertical squash of the orbits.
const FLATTEN: f32 = 0.5;

pub fn count(viewport: Viewport, density: f32) -> usize {
    count_for(viewport, density)
}

pub fn create(viewport: Viewport, rng: &mut impl Rng) -> Particle {
    // Three turns spread the clouds over several spiral arms
    let angle = uniform(rng, 0.0, PI * 6.0);
    let distance = uniform(rng, 0.0, viewport.width().min(viewport.height()) * 0.6);
    let mut particle = Particle::new(
        0.0,
        0.0,
        uniform(rng, 0.0, 800.0),
        uniform(rng, 80.0, 200.0),
        hsl_to_rgb(uniform(rng, 230.0, 280.0), 0.5, 0.2),
        uniform(rng, 0.05, 0.15),
        ParticleKind::Orbit {
            angle,
            distance,
            speed: uniform(rng, 0.0005, 0.002),
        },
    );
    place(&mut particle, viewport);
    particle
}

/// Advance the orbit angle by one frame and recompute the position.
pub fn update(particle: &mut Particle, viewport: Viewport, k: f32) {
    if let ParticleKind::Orbit { angle, speed, .. } = &mut particle.kind {
        *angle += *speed * k;
    }
    place(particle, viewport);
}

fn place(particle: &mut Particle, viewport: Viewport) {
    if let ParticleKind::Orbit { angle, distance, .. } = particle.kind {
        particle.x = viewport.width() * CORE.0 + angle.cos() * distance;
        particle.y = viewport.height() * CORE.1 + angle.sin() * distance * FLATTEN;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_orbit_keeps_distance_from_core() {
        let vp = Viewport::new(1000.0, 800.0).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut cloud = create(vp, &mut rng);
        let ParticleKind::Orbit { distance, .. } = cloud.kind else {
            panic!("expected orbit particle");
        };
        for _ in 0..1000 {
            update(&mut cloud, vp, 1.0);
            let dx = cloud.x - 200.0;
            let dy = (cloud.y - 240.0) / FLATTEN;
            assert!(((dx * dx + dy * dy).sqrt() - distance).abs() < 0.05);
        }
    }
}
