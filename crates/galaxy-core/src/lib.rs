//! Core types shared by the galaxy particle field, its configuration and the
//! terminal host.

mod color;
mod config;
mod geometry;
mod speed;

pub use color::Rgb;
pub use config::{DensityConfig, FieldConfig, SpawnConfig, SpawnRule, ZoomConfig};
pub use geometry::{Layer, Pointer, PointerState, Viewport};
pub use speed::AnimationSpeed;
