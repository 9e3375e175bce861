//! Particle generation and per-frame update rules, one module per collection.

pub mod aurora;
pub mod cursor;
pub mod dust;
pub mod nebula;
pub mod orbit;
pub mod stars;
pub mod transient;

use galaxy_core::Viewport;
use rand::Rng;

/// Uniform sample in `min..max`; tolerates empty or inverted ranges.
pub(crate) fn uniform(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    min + rng.random::<f32>() * (max - min)
}

/// Uniform sample centered on zero with the given total width.
pub(crate) fn spread(rng: &mut impl Rng, width: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * width
}

/// `floor(area / density)`; non-positive densities produce nothing.
pub(crate) fn count_for(viewport: Viewport, density: f32) -> usize {
    if density > 0.0 && density.is_finite() {
        (viewport.area() / density).floor() as usize
    } else {
        0
    }
}

/// Toroidal wrap: leaving past `margin` on one side re-enters exactly at the
/// margin of the opposite side.
pub(crate) fn wrap(x: &mut f32, y: &mut f32, viewport: Viewport, margin: f32) {
    let (w, h) = (viewport.width(), viewport.height());
    if *x < -margin {
        *x = w + margin;
    } else if *x > w + margin {
        *x = -margin;
    }
    if *y < -margin {
        *y = h + margin;
    } else if *y > h + margin {
        *y = -margin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_is_exact() {
        let vp = Viewport::new(1000.0, 800.0).unwrap();
        let (mut x, mut y) = (-51.0, 400.0);
        wrap(&mut x, &mut y, vp, 50.0);
        assert_eq!((x, y), (1050.0, 400.0));

        let (mut x, mut y) = (1050.5, 851.0);
        wrap(&mut x, &mut y, vp, 50.0);
        assert_eq!((x, y), (-50.0, -50.0));

        // On the boundary itself nothing moves
        let (mut x, mut y) = (-50.0, 850.0);
        wrap(&mut x, &mut y, vp, 50.0);
        assert_eq!((x, y), (-50.0, 850.0));
    }

    #[test]
    fn test_count_for() {
        let vp = Viewport::new(1000.0, 800.0).unwrap();
        assert_eq!(count_for(vp, 1500.0), 533);
        assert_eq!(count_for(vp, 0.0), 0);
    }
}
