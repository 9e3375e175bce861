//! Drawing surface abstraction.

use galaxy_core::{Layer, Rgb};

/// Shape of a small particle sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Plus-shaped star with a bright center.
    Cross,
    /// Small diamond, used by dust and shooting star heads.
    Diamond,
    /// Filled square, used by falling stars and their trails.
    Square,
}

/// Group of draw calls about to be issued, in compositing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawLayer {
    Backdrop,
    Nebulae,
    Aurora,
    Dust,
    Orbits,
    ShootingStars,
    FallingStars,
    Stars(Layer),
    CursorTrail,
}

/// A 2D target the particle field paints into.
///
/// Coordinates are virtual pixels; alpha is 0.0-1.0. Later calls composite
/// over earlier ones.
pub trait Surface {
    /// Marks the start of a draw layer. Surfaces that don't care ignore it.
    fn begin_layer(&mut self, _layer: DrawLayer) {}

    /// Fill the whole surface with an opaque color.
    fn clear(&mut self, color: Rgb);

    /// Soft radial light fading to nothing at `radius`.
    fn glow(&mut self, x: f32, y: f32, radius: f32, color: Rgb, alpha: f32);

    /// A small particle of the given size.
    fn sprite(&mut self, x: f32, y: f32, size: f32, shape: Shape, color: Rgb, alpha: f32);

    /// A line from a bright head at `(x0, y0)` fading out towards `(x1, y1)`.
    fn streak(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb, alpha: f32);

    /// A vertical band of light at `x` spanning `top..bottom`, transparent
    /// at both ends and brightest in the middle. Empty when `bottom <= top`.
    fn curtain(&mut self, x: f32, top: f32, bottom: f32, color: Rgb, alpha: f32);
}
