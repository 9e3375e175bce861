//! The particle field engine: owns every collection and advances them once
//! per processed frame.

use galaxy_core::{AnimationSpeed, FieldConfig, Layer, PointerState, Rgb, Viewport};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, trace};

use crate::color::{CURSOR_BLUE, CURSOR_VIOLET, SPACE, SPACE_GLOW};
use crate::layers::{
    self, aurora, cursor, cursor::CursorTrail, dust, nebula, orbit, stars, transient,
};
use crate::particle::{Particle, ParticleKind};
use crate::pool::Pool;
use crate::projection::{
    FrameContext, depth_scale, project, twinkle_factor, twinkle_opacity, zoom_scalar,
};
use crate::spawn::SpawnTimer;
use crate::surface::{DrawLayer, Shape, Surface};
use crate::throttle::{FrameStep, FrameThrottle};

/// Longest gap, in milliseconds, fed into the animation clock at once.
/// Longer stalls (pauses, suspended terminals) don't make the field jump.
const MAX_FRAME_GAP_MS: f64 = 250.0;

/// Particle counts per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldCounts {
    /// Stars per layer, background first.
    pub stars: [usize; 3],
    pub dust: usize,
    pub orbits: usize,
    pub nebulae: usize,
    pub auroras: usize,
    pub shooting_stars: usize,
    pub falling_stars: usize,
    pub trail_marks: usize,
}

impl FieldCounts {
    pub fn total(&self) -> usize {
        self.stars.iter().sum::<usize>()
            + self.dust
            + self.orbits
            + self.nebulae
            + self.auroras
            + self.shooting_stars
            + self.falling_stars
    }
}

/// Multi-layer parallax particle field.
#[derive(Debug)]
pub struct FieldEngine<R = StdRng> {
    config: FieldConfig,
    rng: R,
    viewport: Option<Viewport>,
    pointer: PointerState,
    throttle: FrameThrottle,
    /// Animation clock in seconds.
    time: f32,
    zoom: f32,
    /// Timestamp of the last processed frame.
    now_ms: f64,
    frames: u64,
    stars: [Vec<Particle>; 3],
    dust: Pool<Particle>,
    orbits: Vec<Particle>,
    nebulae: Vec<Particle>,
    auroras: Vec<Particle>,
    shooting: Pool<Particle>,
    falling: Pool<Particle>,
    trail: CursorTrail,
    shooting_timer: SpawnTimer,
    falling_timer: SpawnTimer,
    dust_timer: SpawnTimer,
}

impl FieldEngine<StdRng> {
    /// Engine seeded from the operating system.
    pub fn new(config: FieldConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> FieldEngine<R> {
    /// Engine drawing its randomness from `rng`. Nothing is allocated until
    /// [`initialize`](Self::initialize).
    pub fn with_rng(config: FieldConfig, mut rng: R) -> Self {
        let throttle = FrameThrottle::new(
            config.frame_interval_ms() as f64,
            config.frame_tolerance_ms as f64,
        );
        let shooting_timer = SpawnTimer::new(config.spawn.shooting_stars, 0.0, &mut rng);
        let falling_timer = SpawnTimer::new(config.spawn.falling_stars, 0.0, &mut rng);
        let dust_timer = SpawnTimer::new(config.spawn.cursor_dust, 0.0, &mut rng);

        Self {
            shooting: Pool::with_capacity(config.spawn.shooting_stars.cap),
            falling: Pool::with_capacity(config.spawn.falling_stars.cap),
            config,
            rng,
            viewport: None,
            pointer: PointerState::default(),
            throttle,
            time: 0.0,
            zoom: 1.0,
            now_ms: 0.0,
            frames: 0,
            stars: [Vec::new(), Vec::new(), Vec::new()],
            dust: Pool::with_capacity(0),
            orbits: Vec::new(),
            nebulae: Vec::new(),
            auroras: Vec::new(),
            trail: CursorTrail::new(),
            shooting_timer,
            falling_timer,
            dust_timer,
        }
    }

    /// Populate every collection for `viewport`, replacing whatever was there.
    pub fn initialize(&mut self, viewport: Viewport) {
        let density = &self.config.density;
        let rng = &mut self.rng;

        self.stars = Layer::ALL.map(|layer| stars::init(layer, viewport, density, rng));

        let dust_count = dust::count(viewport, density.dust);
        let dust_capacity = dust_count.max(self.config.spawn.cursor_dust.cap);
        let mut dust_pool = Pool::with_capacity(dust_capacity);
        for _ in 0..dust_count {
            let spawned = dust_pool.spawn(dust::create(viewport, rng));
            debug_assert!(spawned.is_ok(), "dust pool holds at least the initial dust");
        }
        self.dust = dust_pool;

        self.orbits = (0..orbit::count(viewport, density.orbit_clouds))
            .map(|_| orbit::create(viewport, rng))
            .collect();
        self.nebulae = (0..nebula::count(viewport, density.nebulae, density.nebula_base))
            .map(|_| nebula::create(viewport, rng))
            .collect();
        self.auroras = (0..aurora::count(rng))
            .map(|_| aurora::create(viewport, rng))
            .collect();

        self.shooting = Pool::with_capacity(self.config.spawn.shooting_stars.cap);
        self.falling = Pool::with_capacity(self.config.spawn.falling_stars.cap);
        self.trail.clear();
        if let Some(p) = self.pointer.get() {
            self.pointer.update(p.x, p.y, viewport);
        }

        let now = self.now_ms;
        let spawn = &self.config.spawn;
        self.shooting_timer = SpawnTimer::new(spawn.shooting_stars, now, &mut self.rng);
        self.falling_timer = SpawnTimer::new(spawn.falling_stars, now, &mut self.rng);
        self.dust_timer = SpawnTimer::new(spawn.cursor_dust, now, &mut self.rng);

        self.viewport = Some(viewport);
        let counts = self.counts();
        debug!(
            width = viewport.width(),
            height = viewport.height(),
            stars = ?counts.stars,
            dust = counts.dust,
            orbits = counts.orbits,
            nebulae = counts.nebulae,
            auroras = counts.auroras,
            total = counts.total(),
            "particle field initialized"
        );
    }

    /// Rebuild the field for a new viewport; prior particles are discarded.
    pub fn resize(&mut self, viewport: Viewport) {
        self.initialize(viewport);
    }

    /// Record the pointer position. Only stores state for the next frame.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if let Some(viewport) = self.viewport {
            self.pointer.update(x, y, viewport);
        }
    }

    /// Forget the pointer, e.g. when it leaves the surface.
    pub fn on_pointer_leave(&mut self) {
        self.pointer.clear();
    }

    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.config.speed = speed;
    }

    pub fn speed(&self) -> AnimationSpeed {
        self.config.speed
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Animation time in seconds.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Number of frames processed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn counts(&self) -> FieldCounts {
        FieldCounts {
            stars: [self.stars[0].len(), self.stars[1].len(), self.stars[2].len()],
            dust: self.dust.len(),
            orbits: self.orbits.len(),
            nebulae: self.nebulae.len(),
            auroras: self.auroras.len(),
            shooting_stars: self.shooting.len(),
            falling_stars: self.falling.len(),
            trail_marks: self.trail.len(),
        }
    }

    /// Process one frame if it is due. Returns false for skipped frames and
    /// when no viewport has been initialized.
    pub fn advance_frame(&mut self, timestamp_ms: f64, surface: &mut impl Surface) -> bool {
        let Some(viewport) = self.viewport else {
            return false;
        };
        let elapsed_ms = match self.throttle.check(timestamp_ms) {
            FrameStep::Advance { elapsed_ms } => elapsed_ms,
            FrameStep::Primed | FrameStep::Skipped => return false,
        };
        self.now_ms = timestamp_ms;

        let k = self.config.speed.time_multiplier();
        self.time += (elapsed_ms.min(MAX_FRAME_GAP_MS) / 1000.0) as f32 * k;
        self.zoom = zoom_scalar(self.time, &self.config.zoom);

        self.spawn(viewport);

        let ctx = FrameContext {
            time: self.time,
            zoom: self.zoom,
            pointer: if self.config.interactive {
                self.pointer.get()
            } else {
                None
            },
            viewport,
            reference_depth: self.config.reference_depth,
        };
        let margin = self.config.wrap_margin;

        surface.begin_layer(DrawLayer::Backdrop);
        draw_backdrop(viewport, surface);

        surface.begin_layer(DrawLayer::Nebulae);
        for p in &mut self.nebulae {
            nebula::update(p, viewport, k, &mut self.rng);
            draw_particle(p, &ctx, surface);
        }

        surface.begin_layer(DrawLayer::Aurora);
        for p in &mut self.auroras {
            aurora::update(p, self.time, k);
            draw_particle(p, &ctx, surface);
        }

        surface.begin_layer(DrawLayer::Dust);
        for p in self.dust.iter_mut() {
            p.drift(k);
            if let ParticleKind::Dust { twinkle_speed, phase } = &mut p.kind {
                dust::advance_phase(phase, *twinkle_speed, k);
            }
            layers::wrap(&mut p.x, &mut p.y, viewport, margin);
            draw_particle(p, &ctx, surface);
        }

        surface.begin_layer(DrawLayer::Orbits);
        for p in &mut self.orbits {
            orbit::update(p, viewport, k);
            draw_particle(p, &ctx, surface);
        }

        surface.begin_layer(DrawLayer::ShootingStars);
        self.shooting.retain_mut(|p| transient::update(p, viewport, k));
        for p in &self.shooting {
            draw_particle(p, &ctx, surface);
        }

        surface.begin_layer(DrawLayer::FallingStars);
        self.falling.retain_mut(|p| transient::update(p, viewport, k));
        for p in &self.falling {
            draw_particle(p, &ctx, surface);
        }

        for layer in Layer::ALL {
            surface.begin_layer(DrawLayer::Stars(layer));
            for p in &mut self.stars[layer.index()] {
                p.drift(k);
                layers::wrap(&mut p.x, &mut p.y, viewport, margin);
                draw_particle(p, &ctx, surface);
            }
        }

        if self.config.cursor_trail {
            surface.begin_layer(DrawLayer::CursorTrail);
            self.trail.follow(self.pointer.get());
            self.trail.fade(k);
            draw_cursor(&self.trail, self.pointer.get().map(|p| (p.x, p.y)), surface);
        }

        self.frames += 1;
        true
    }

    /// Start transient particles whose cooldown elapsed, up to their caps.
    fn spawn(&mut self, viewport: Viewport) {
        let now = self.now_ms;

        if self.shooting.len() < self.shooting_timer.cap()
            && self.shooting_timer.poll(now, &mut self.rng)
        {
            let star = transient::create_shooting(viewport, &mut self.rng);
            if let Ok(slot) = self.shooting.spawn(star) {
                trace!(slot, "shooting star spawned");
            }
        }

        if self.falling.len() < self.falling_timer.cap()
            && self.falling_timer.poll(now, &mut self.rng)
        {
            let star = transient::create_falling(viewport, &mut self.rng);
            if let Ok(slot) = self.falling.spawn(star) {
                trace!(slot, "falling star spawned");
            }
        }

        if self.dust_timer.poll(now, &mut self.rng)
            && self.config.interactive
            && let Some(p) = self.pointer.get()
            && self.dust.len() < self.dust_timer.cap()
        {
            let mote = dust::create_near(p.x, p.y, &mut self.rng);
            if let Ok(slot) = self.dust.spawn(mote) {
                trace!(slot, "cursor dust spawned");
            }
        }
    }
}

/// Solid deep-space fill with a soft glow towards the galaxy core.
fn draw_backdrop(viewport: Viewport, surface: &mut impl Surface) {
    let (w, h) = (viewport.width(), viewport.height());
    surface.clear(SPACE);
    surface.glow(w * 0.3, h * 0.4, w.max(h) * 0.8, SPACE_GLOW, 0.4);
}

/// Draw one particle according to its kind.
fn draw_particle(p: &Particle, ctx: &FrameContext, surface: &mut impl Surface) {
    match &p.kind {
        ParticleKind::Star {
            layer,
            twinkle_speed,
            phase,
        } => {
            let params = stars::params(*layer);
            let at = project(p.x, p.y, p.z, params.influence, stars::ZOOM_PUSH, ctx);
            let (amplitude, bias) = stars::TWINKLE;
            let factor = twinkle_factor(ctx.time, *twinkle_speed, *phase, amplitude, bias);
            let alpha = twinkle_opacity(p.opacity, factor, at.scale);
            surface.sprite(at.x, at.y, p.size * at.scale, Shape::Cross, p.color, alpha);
        }
        ParticleKind::Dust {
            twinkle_speed,
            phase,
        } => {
            let at = project(p.x, p.y, p.z, dust::INFLUENCE, dust::ZOOM_PUSH, ctx);
            let (amplitude, bias) = dust::TWINKLE;
            let factor = twinkle_factor(ctx.time, *twinkle_speed, *phase, amplitude, bias);
            let alpha = twinkle_opacity(p.opacity, factor, at.scale);
            surface.sprite(at.x, at.y, p.size * at.scale, Shape::Diamond, p.color, alpha);
        }
        ParticleKind::Orbit { .. } => {
            let at = project(p.x, p.y, p.z, orbit::INFLUENCE, 0.0, ctx);
            let alpha = twinkle_opacity(p.opacity, 1.0, at.scale);
            surface.glow(at.x, at.y, p.size * at.scale, p.color, alpha);
        }
        ParticleKind::Nebula {
            pulse_speed,
            phase,
            life,
            max_life,
        } => {
            let scale = depth_scale(ctx.reference_depth, p.z);
            let (amplitude, bias) = nebula::PULSE;
            let pulse = twinkle_factor(ctx.time, *pulse_speed, *phase, amplitude, bias);
            let fade = pulse * nebula::life_ratio(*life, *max_life);
            let alpha = twinkle_opacity(p.opacity, fade, scale);
            surface.glow(p.x, p.y, p.size * scale, p.color, alpha);
        }
        ParticleKind::Aurora { .. } => {
            let alpha = aurora::breath(p.opacity, ctx.time);
            let width = ctx.viewport.width();
            for (x, top, bottom) in aurora::columns(p, ctx.time) {
                if (0.0..=width).contains(&x) {
                    surface.curtain(x, top, bottom, p.color, alpha);
                }
            }
        }
        ParticleKind::ShootingStar { length, .. } => {
            let tail_x = p.x - p.vx * length / 4.0;
            let tail_y = p.y - p.vy * length / 4.0;
            surface.streak(p.x, p.y, tail_x, tail_y, p.color, p.opacity);
            surface.sprite(p.x, p.y, 2.0, Shape::Diamond, p.color, p.opacity);
        }
        ParticleKind::FallingStar { trail, .. } => {
            let n = trail.len() as f32;
            for (i, point) in trail.iter().enumerate() {
                let f = i as f32 / n;
                let alpha = f * point.opacity * 0.5;
                surface.sprite(point.x, point.y, p.size * f, Shape::Square, p.color, alpha);
            }
            surface.sprite(p.x, p.y, p.size, Shape::Square, p.color, p.opacity);
            // Sparkle
            surface.sprite(p.x, p.y, p.size * 1.5, Shape::Cross, p.color, p.opacity * 0.6);
        }
    }
}

/// Fading trail marks, then a halo and bright core at the pointer.
fn draw_cursor(trail: &CursorTrail, pointer: Option<(f32, f32)>, surface: &mut impl Surface) {
    for (i, mark) in trail.iter().enumerate() {
        let f = i as f32 / cursor::TRAIL_LENGTH as f32;
        let scale = 0.3 + f * 0.7;
        surface.glow(mark.x, mark.y, 6.0 * scale, CURSOR_BLUE, mark.life.max(0.0) * f);
    }
    if let Some((x, y)) = pointer {
        surface.glow(x, y, 10.0, CURSOR_VIOLET, 0.6);
        surface.sprite(x, y, 2.0, Shape::Diamond, Rgb::WHITE, 1.0);
    }
}
