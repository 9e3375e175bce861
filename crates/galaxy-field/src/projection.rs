//! Depth projection, pointer influence and twinkle math.
//!
//! These are pure functions over a [`FrameContext`] so the per-frame draw
//! step stays a plain `match` over particle kinds.

use galaxy_core::{Pointer, Viewport, ZoomConfig};

/// Largest depth any particle may have.
pub const MAX_DEPTH: f32 = 1200.0;

/// Per-frame values shared by every particle draw.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Animation time in seconds.
    pub time: f32,
    /// Current zoom scalar.
    pub zoom: f32,
    pub pointer: Option<Pointer>,
    pub viewport: Viewport,
    pub reference_depth: f32,
}

/// How strongly a group of particles reacts to the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Influence {
    /// Depth at which the influence falls to zero.
    pub depth: f32,
    /// Influence in pixels for a particle at depth zero.
    pub magnitude: f32,
    /// Raw pointer distance below which particles are attracted harder.
    pub radius: f32,
    /// Largest extra multiplier applied at zero pointer distance.
    pub boost: f32,
}

/// Inverse-distance depth scale, 1.0 at `z == 0` and falling with depth.
pub fn depth_scale(reference: f32, z: f32) -> f32 {
    reference / (reference + z.clamp(0.0, MAX_DEPTH))
}

/// Slow bounded oscillation used to breathe the whole field in and out.
pub fn zoom_scalar(time: f32, zoom: &ZoomConfig) -> f32 {
    let raw = 1.0 + (time * zoom.rate).sin() * zoom.amplitude + zoom.bias;
    raw.max(zoom.min).min(zoom.max())
}

/// `sin(time * speed + phase) * amplitude + bias`, clamped to 0.0-1.0.
pub fn twinkle_factor(time: f32, speed: f32, phase: f32, amplitude: f32, bias: f32) -> f32 {
    ((time * speed + phase).sin() * amplitude + bias).clamp(0.0, 1.0)
}

/// Final opacity of a twinkling particle; never exceeds `base`.
pub fn twinkle_opacity(base: f32, factor: f32, scale: f32) -> f32 {
    let base = base.max(0.0);
    (base * factor.clamp(0.0, 1.0) * scale.clamp(0.0, 1.0)).clamp(0.0, base)
}

/// Pointer influence magnitude for a particle at depth `z`.
///
/// Closer particles react more; within `radius` of the raw pointer the
/// influence grows by up to `boost`.
pub fn pointer_influence(influence: Influence, z: f32, distance: Option<f32>) -> f32 {
    let mut magnitude = (1.0 - z / influence.depth).max(0.0) * influence.magnitude;
    if let Some(d) = distance
        && d < influence.radius
    {
        magnitude *= (1.0 - d / influence.radius) * influence.boost;
    }
    magnitude
}

/// On-screen position and scale of a particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

/// Project a particle: depth scale composed with zoom, pointer parallax and
/// zoom push away from the viewport center.
pub fn project(
    x: f32,
    y: f32,
    z: f32,
    influence: Influence,
    push: f32,
    ctx: &FrameContext,
) -> Projected {
    let scale = depth_scale(ctx.reference_depth, z) * ctx.zoom;
    let (cx, cy) = ctx.viewport.center();
    let zoom_push = (ctx.zoom - 1.0) * push;

    let (mut px, mut py) = (x + (x - cx) * zoom_push, y + (y - cy) * zoom_push);
    if let Some(p) = ctx.pointer {
        let distance = ((p.x - x).powi(2) + (p.y - y).powi(2)).sqrt();
        let magnitude = pointer_influence(influence, z, Some(distance));
        px += p.nx * magnitude * scale;
        py += p.ny * magnitude * scale;
    }

    Projected { x: px, y: py, scale }
}
