//! Mount/unmount lifecycle around [`FieldEngine`].
//!
//! The host owns the engine and a [`FrameScheduler`]. At most one frame
//! request is outstanding; the next one is requested from inside
//! [`FieldHost::on_frame`], so frames never overlap.

use galaxy_core::{AnimationSpeed, Viewport};
use rand::{Rng, rngs::StdRng};
use tracing::{debug, info};

use crate::engine::FieldEngine;
use crate::surface::Surface;

/// Identifies one scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Whatever the environment uses to call back once per display frame.
pub trait FrameScheduler {
    /// Ask for one future call to [`FieldHost::on_frame`].
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a request made by [`request_frame`](Self::request_frame).
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostState {
    Unmounted,
    Running,
    Paused,
    TornDown,
}

/// Lifecycle wrapper hosting a particle field.
#[derive(Debug)]
pub struct FieldHost<S, R = StdRng> {
    engine: FieldEngine<R>,
    scheduler: S,
    pending: Option<FrameHandle>,
    state: HostState,
}

impl<S: FrameScheduler, R: Rng> FieldHost<S, R> {
    pub fn new(engine: FieldEngine<R>, scheduler: S) -> Self {
        Self {
            engine,
            scheduler,
            pending: None,
            state: HostState::Unmounted,
        }
    }

    /// Initialize the field and start the frame loop.
    ///
    /// Without a drawing surface (`None`) nothing happens and false is
    /// returned; decoration must never break the host.
    pub fn mount(&mut self, surface: Option<Viewport>) -> bool {
        if self.state != HostState::Unmounted {
            return self.is_running();
        }
        let Some(viewport) = surface else {
            debug!("no drawing surface, particle field disabled");
            return false;
        };

        self.engine.initialize(viewport);
        self.state = HostState::Running;
        self.pending = Some(self.scheduler.request_frame());
        info!(
            width = viewport.width(),
            height = viewport.height(),
            "particle field mounted"
        );
        true
    }

    /// Scheduler callback. Stale or unknown handles are ignored.
    /// Returns whether the engine processed a frame.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        timestamp_ms: f64,
        surface: &mut impl Surface,
    ) -> bool {
        if self.state != HostState::Running || self.pending != Some(handle) {
            return false;
        }
        self.pending = None;
        let advanced = self.engine.advance_frame(timestamp_ms, surface);
        self.pending = Some(self.scheduler.request_frame());
        advanced
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if self.listening() {
            self.engine.on_pointer_move(x, y);
        }
    }

    pub fn on_pointer_leave(&mut self) {
        if self.listening() {
            self.engine.on_pointer_leave();
        }
    }

    /// Rebuild the field for the new size. A vanished surface keeps the old
    /// field until a usable size comes back.
    pub fn on_resize(&mut self, surface: Option<Viewport>) {
        if !self.listening() {
            return;
        }
        if let Some(viewport) = surface {
            self.engine.resize(viewport);
        }
    }

    /// Regenerate every particle at the current size.
    pub fn reseed(&mut self) {
        if self.listening()
            && let Some(viewport) = self.engine.viewport()
        {
            self.engine.initialize(viewport);
        }
    }

    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.engine.set_speed(speed);
    }

    /// Stop requesting frames while keeping the field.
    pub fn pause(&mut self) {
        if self.state == HostState::Running {
            self.cancel_pending();
            self.state = HostState::Paused;
        }
    }

    /// Resume the frame loop after [`pause`](Self::pause).
    pub fn resume(&mut self) {
        if self.state == HostState::Paused {
            self.state = HostState::Running;
            self.pending = Some(self.scheduler.request_frame());
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.state {
            HostState::Running => self.pause(),
            HostState::Paused => self.resume(),
            HostState::Unmounted | HostState::TornDown => {}
        }
    }

    /// Cancel the outstanding frame and stop listening. Safe to repeat.
    pub fn teardown(&mut self) {
        if self.state == HostState::TornDown {
            return;
        }
        self.cancel_pending();
        if self.state != HostState::Unmounted {
            info!(frames = self.engine.frames(), "particle field torn down");
        }
        self.state = HostState::TornDown;
    }

    pub fn is_running(&self) -> bool {
        self.state == HostState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == HostState::Paused
    }

    /// The handle the host is waiting on, if any.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn engine(&self) -> &FieldEngine<R> {
        &self.engine
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn listening(&self) -> bool {
        matches!(self.state, HostState::Running | HostState::Paused)
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}
