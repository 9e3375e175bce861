//! Three depth layers of persistent parallax stars.

use std::f32::consts::TAU;

use galaxy_core::{DensityConfig, Layer, Viewport};
use rand::Rng;

use super::{count_for, uniform};
use crate::color::STAR_TYPES;
use crate::particle::{Particle, ParticleKind};
use crate::projection::Influence;

/// Twinkle amplitude and bias for stars.
pub const TWINKLE: (f32, f32) = (0.3, 0.7);

/// How far zoom pushes stars away from the viewport center.
pub const ZOOM_PUSH: f32 = 0.8;

/// Shared parameters of one star layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerParams {
    pub z_min: f32,
    pub z_max: f32,
    pub size_multiplier: f32,
    pub opacity_multiplier: f32,
    pub influence: Influence,
}

pub fn params(layer: Layer) -> LayerParams {
    match layer {
        Layer::Background => LayerParams {
            z_min: 800.0,
            z_max: 1200.0,
            size_multiplier: 0.5,
            opacity_multiplier: 0.3,
            influence: Influence {
                depth: 1200.0,
                magnitude: 10.0,
                radius: 200.0,
                boost: 2.0,
            },
        },
        Layer::Middle => LayerParams {
            z_min: 400.0,
            z_max: 800.0,
            size_multiplier: 1.0,
            opacity_multiplier: 0.7,
            influence: Influence {
                depth: 800.0,
                magnitude: 25.0,
                radius: 300.0,
                boost: 3.0,
            },
        },
        Layer::Foreground => LayerParams {
            z_min: 100.0,
            z_max: 400.0,
            size_multiplier: 1.5,
            opacity_multiplier: 1.0,
            influence: Influence {
                depth: 400.0,
                magnitude: 40.0,
                radius: 400.0,
                boost: 4.0,
            },
        },
    }
}

/// Number of stars a layer holds for the viewport.
pub fn count(layer: Layer, viewport: Viewport, density: &DensityConfig) -> usize {
    let per_star = match layer {
        Layer::Background => density.background_stars,
        Layer::Middle => density.middle_stars,
        Layer::Foreground => density.foreground_stars,
    };
    count_for(viewport, per_star)
}

/// A star at a random position within the layer's depth band.
pub fn create(layer: Layer, viewport: Viewport, rng: &mut impl Rng) -> Particle {
    let p = params(layer);
    // Most stars are the plain white type
    let (color, size, opacity) = if rng.random::<f32>() < 0.6 {
        STAR_TYPES[0]
    } else {
        STAR_TYPES[rng.random_range(0..STAR_TYPES.len())]
    };

    Particle::new(
        uniform(rng, 0.0, viewport.width()),
        uniform(rng, 0.0, viewport.height()),
        uniform(rng, p.z_min, p.z_max),
        (size + uniform(rng, 0.0, 0.4)) * p.size_multiplier,
        color,
        opacity * p.opacity_multiplier * uniform(rng, 0.6, 1.0),
        ParticleKind::Star {
            layer,
            twinkle_speed: uniform(rng, 0.5, 3.0),
            phase: uniform(rng, 0.0, TAU),
        },
    )
}

/// Populate one layer.
pub fn init(
    layer: Layer,
    viewport: Viewport,
    density: &DensityConfig,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    (0..count(layer, viewport, density))
        .map(|_| create(layer, viewport, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_layers_get_sparser_towards_front() {
        let vp = Viewport::new(1000.0, 800.0).unwrap();
        let density = DensityConfig::default();
        let bg = count(Layer::Background, vp, &density);
        let mid = count(Layer::Middle, vp, &density);
        let fg = count(Layer::Foreground, vp, &density);
        assert_eq!((bg, mid, fg), (533, 400, 228));
    }

    #[test]
    fn test_stars_respect_layer_band() {
        let vp = Viewport::new(640.0, 480.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for layer in Layer::ALL {
            let p = params(layer);
            for star in init(layer, vp, &DensityConfig::default(), &mut rng) {
                assert!(star.z >= p.z_min && star.z <= p.z_max);
                assert!(star.x >= 0.0 && star.x <= vp.width());
                assert!(star.opacity <= p.opacity_multiplier);
                assert!(matches!(star.kind, ParticleKind::Star { layer: l, .. } if l == layer));
            }
        }
    }
}
