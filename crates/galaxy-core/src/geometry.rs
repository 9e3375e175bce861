//! Viewport, pointer and depth layer types.

use serde::{Deserialize, Serialize};

/// Size of the drawing surface in virtual pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Create a viewport; `None` when either side is not a positive finite size.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        (valid(width) && valid(height)).then_some(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Last observed pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    /// Horizontal position normalized to -1.0..1.0.
    pub nx: f32,
    /// Vertical position normalized to -1.0..1.0.
    pub ny: f32,
    /// Raw horizontal position in pixels.
    pub x: f32,
    /// Raw vertical position in pixels.
    pub y: f32,
}

/// Pointer state shared between the move handler and the frame step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    last: Option<Pointer>,
}

impl PointerState {
    /// Record a pointer position in pixels relative to `viewport`.
    pub fn update(&mut self, x: f32, y: f32, viewport: Viewport) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.last = Some(Pointer {
            nx: ((x / viewport.width()) * 2.0 - 1.0).clamp(-1.0, 1.0),
            ny: ((y / viewport.height()) * 2.0 - 1.0).clamp(-1.0, 1.0),
            x,
            y,
        });
    }

    pub fn clear(&mut self) {
        self.last = None;
    }

    pub fn get(&self) -> Option<Pointer> {
        self.last
    }
}

/// Depth band of a persistent star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Background,
    Middle,
    Foreground,
}

impl Layer {
    /// Layers in draw order, farthest first.
    pub const ALL: [Layer; 3] = [Layer::Background, Layer::Middle, Layer::Foreground];

    pub fn index(self) -> usize {
        match self {
            Layer::Background => 0,
            Layer::Middle => 1,
            Layer::Foreground => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_rejects_empty() {
        assert!(Viewport::new(0.0, 10.0).is_none());
        assert!(Viewport::new(10.0, -1.0).is_none());
        assert!(Viewport::new(f32::NAN, 10.0).is_none());
        let vp = Viewport::new(1000.0, 800.0).unwrap();
        assert_eq!(vp.area(), 800_000.0);
        assert_eq!(vp.center(), (500.0, 400.0));
    }

    #[test]
    fn test_pointer_normalization() {
        let vp = Viewport::new(1000.0, 800.0).unwrap();
        let mut state = PointerState::default();
        assert!(state.get().is_none());

        state.update(500.0, 400.0, vp);
        let p = state.get().unwrap();
        assert_eq!((p.x, p.y, p.nx, p.ny), (500.0, 400.0, 0.0, 0.0));

        state.update(0.0, 800.0, vp);
        let p = state.get().unwrap();
        assert_eq!((p.nx, p.ny), (-1.0, 1.0));

        state.update(f32::NAN, 10.0, vp);
        assert_eq!(state.get().map(|p| p.x), Some(0.0));

        state.clear();
        assert!(state.get().is_none());
    }

    #[test]
    fn test_layer_order() {
        let indices: Vec<usize> = Layer::ALL.iter().map(|l| l.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
