//! Multi-layer parallax particle field.
//!
//! A [`FieldEngine`] owns every particle collection and advances them one
//! throttled frame at a time, drawing onto any [`Surface`]. A [`FieldHost`]
//! wraps the engine with a mount/teardown lifecycle driven by a
//! [`FrameScheduler`]. [`TerminalSurface`] renders the field into ratatui
//! cells.

mod chars;
mod color;
mod engine;
mod host;
mod layers;
mod particle;
mod pool;
mod projection;
mod spawn;
mod surface;
mod terminal;
mod throttle;

pub use color::hsl_to_rgb;
pub use engine::{FieldCounts, FieldEngine};
pub use host::{FieldHost, FrameHandle, FrameScheduler};
pub use particle::{Particle, ParticleKind, TRAIL_LENGTH, Trail, TrailPoint};
pub use pool::Pool;
pub use projection::MAX_DEPTH;
pub use spawn::SpawnTimer;
pub use surface::{DrawLayer, Shape, Surface};
pub use terminal::TerminalSurface;
pub use throttle::{FrameStep, FrameThrottle};
