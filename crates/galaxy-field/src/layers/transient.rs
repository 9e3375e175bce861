//! Shooting and falling stars: finite-life particles removed on expiry.

use galaxy_core::{Rgb, Viewport};
use rand::Rng;

use super::{spread, uniform};
use crate::color::SKY_BLUE;
use crate::particle::{Particle, ParticleKind, Trail, TrailPoint};

/// Shooting stars are dropped once this far outside the viewport.
pub const SHOOTING_BOUNDS: f32 = 100.0;

/// Falling stars are dropped once this far below the viewport.
pub const FALLING_BOTTOM: f32 = 50.0;

/// A shooting star entering from a random edge.
pub fn create_shooting(viewport: Viewport, rng: &mut impl Rng) -> Particle {
    let (w, h) = (viewport.width(), viewport.height());
    // Speed along the edge and speed into the viewport
    let across = spread(rng, 3.0);
    let inward = uniform(rng, 1.0, 3.0);

    let (x, y, vx, vy) = match rng.random_range(0..4) {
        0 => (uniform(rng, 0.0, w), -50.0, across, inward),
        1 => (w + 50.0, uniform(rng, 0.0, h), -inward, across),
        2 => (uniform(rng, 0.0, w), h + 50.0, across, -inward),
        _ => (-50.0, uniform(rng, 0.0, h), inward, across),
    };

    let max_life = uniform(rng, 40.0, 120.0);
    Particle::new(
        x,
        y,
        0.0,
        1.5,
        Rgb::WHITE,
        1.0,
        ParticleKind::ShootingStar {
            length: uniform(rng, 30.0, 90.0),
            life: max_life,
            max_life,
        },
    )
    .with_velocity(vx, vy)
}

/// A falling star dropping in from just above the top edge.
pub fn create_falling(viewport: Viewport, rng: &mut impl Rng) -> Particle {
    let color = if rng.random::<f32>() > 0.5 {
        Rgb::WHITE
    } else {
        SKY_BLUE
    };
    let max_life = uniform(rng, 60.0, 180.0);
    Particle::new(
        uniform(rng, 0.0, viewport.width()),
        -20.0,
        0.0,
        uniform(rng, 1.0, 4.0),
        color,
        1.0,
        ParticleKind::FallingStar {
            life: max_life,
            max_life,
            trail: Trail::default(),
        },
    )
    .with_velocity(spread(rng, 2.0), uniform(rng, 1.0, 3.0))
}

/// Advance a transient particle by one frame. Returns false once it expired
/// and should leave its pool.
pub fn update(particle: &mut Particle, viewport: Viewport, k: f32) -> bool {
    // Falling stars remember where they were before moving
    if let ParticleKind::FallingStar { trail, .. } = &mut particle.kind {
        trail.push(TrailPoint {
            x: particle.x,
            y: particle.y,
            opacity: particle.opacity,
        });
    }
    particle.drift(k);

    let (w, h) = (viewport.width(), viewport.height());
    match &mut particle.kind {
        ParticleKind::ShootingStar { life, max_life, .. } => {
            *life -= k;
            particle.opacity = (*life / *max_life).clamp(0.0, 1.0);
            let b = SHOOTING_BOUNDS;
            *life > 0.0
                && particle.x >= -b
                && particle.x <= w + b
                && particle.y >= -b
                && particle.y <= h + b
        }
        ParticleKind::FallingStar { life, max_life, .. } => {
            *life -= k;
            particle.opacity = (*life / *max_life).clamp(0.0, 1.0);
            *life > 0.0 && particle.y <= h + FALLING_BOTTOM
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 800.0).unwrap()
    }

    #[test]
    fn test_shooting_star_enters_from_an_edge() {
        let mut rng = StdRng::seed_from_u64(2);
        let vp = viewport();
        for _ in 0..100 {
            let s = create_shooting(vp, &mut rng);
            let on_edge = s.x == -50.0 || s.y == -50.0 || s.x == 1050.0 || s.y == 850.0;
            assert!(on_edge, "{s:?}");
        }
    }

    #[test]
    fn test_shooting_star_expires_with_life() {
        let mut rng = StdRng::seed_from_u64(4);
        let vp = viewport();
        let mut s = create_shooting(vp, &mut rng).with_velocity(0.0, 0.0);
        s.x = 500.0;
        s.y = 400.0;
        let ParticleKind::ShootingStar { max_life, .. } = s.kind else {
            panic!("expected shooting star");
        };
        let mut frames = 0;
        while update(&mut s, vp, 1.0) {
            frames += 1;
            assert!(s.opacity <= 1.0);
        }
        assert_eq!(frames, max_life.ceil() as usize - 1);
    }

    #[test]
    fn test_shooting_star_leaves_extended_bounds() {
        let mut rng = StdRng::seed_from_u64(4);
        let vp = viewport();
        let mut s = create_shooting(vp, &mut rng).with_velocity(-5.0, 0.0);
        s.x = -98.0;
        s.y = 10.0;
        assert!(!update(&mut s, vp, 1.0));
    }

    #[test]
    fn test_falling_star_builds_trail() {
        let mut rng = StdRng::seed_from_u64(8);
        let vp = viewport();
        let mut f = create_falling(vp, &mut rng);
        for _ in 0..10 {
            assert!(update(&mut f, vp, 1.0));
        }
        let ParticleKind::FallingStar { trail, .. } = &f.kind else {
            panic!("expected falling star");
        };
        assert_eq!(trail.len(), crate::particle::TRAIL_LENGTH);
    }

    #[test]
    fn test_falling_star_dropped_below_viewport() {
        let mut rng = StdRng::seed_from_u64(8);
        let vp = viewport();
        let mut f = create_falling(vp, &mut rng);
        f.y = 849.5;
        f.vy = 1.0;
        assert!(!update(&mut f, vp, 1.0));
    }
}
