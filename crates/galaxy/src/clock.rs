//! Frame scheduling for the terminal event loop.

use std::time::{Duration, Instant};

use galaxy_field::{FrameHandle, FrameScheduler};

/// How long the event loop may block when no frame is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy)]
struct Pending {
    handle: FrameHandle,
    deadline: Instant,
}

/// A display-refresh stand-in: hands out one frame callback per tick.
///
/// Deadlines follow a fixed cadence from the previous tick. After a stall
/// the next deadline is "now" rather than a burst of catch-up frames.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    interval: Duration,
    next_id: u64,
    pending: Option<Pending>,
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            start: Instant::now(),
            interval,
            next_id: 0,
            pending: None,
            last_tick: None,
        }
    }

    /// Take the pending handle if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<FrameHandle> {
        let pending = self.pending.filter(|p| now >= p.deadline)?;
        self.pending = None;
        self.last_tick = Some(pending.deadline);
        Some(pending.handle)
    }

    /// How long the caller can wait for input before the next frame is due.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.pending
            .map_or(IDLE_POLL, |p| p.deadline.saturating_duration_since(now))
    }

    /// Milliseconds since the clock was created, used as frame timestamps.
    pub fn timestamp_ms(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.start).as_secs_f64() * 1000.0
    }
}

impl FrameScheduler for FrameClock {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        let now = Instant::now();
        let deadline = self
            .last_tick
            .map_or(now, |tick| (tick + self.interval).max(now));
        self.pending = Some(Pending { handle, deadline });
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending.is_some_and(|p| p.handle == handle) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_is_due_immediately() {
        let mut clock = FrameClock::new(Duration::from_secs(10));
        let handle = clock.request_frame();
        assert_eq!(clock.take_due(Instant::now()), Some(handle));
        assert_eq!(clock.take_due(Instant::now()), None);
        assert_eq!(clock.time_until_due(Instant::now()), IDLE_POLL);
    }

    #[test]
    fn test_next_request_waits_one_interval() {
        let mut clock = FrameClock::new(Duration::from_secs(10));
        clock.request_frame();
        clock.take_due(Instant::now());

        clock.request_frame();
        let now = Instant::now();
        assert_eq!(clock.take_due(now), None);
        assert!(clock.time_until_due(now) > Duration::from_secs(5));
        assert!(clock.take_due(now + Duration::from_secs(11)).is_some());
    }

    #[test]
    fn test_cancel_only_matching_handle() {
        let mut clock = FrameClock::new(Duration::from_millis(16));
        let handle = clock.request_frame();
        clock.cancel_frame(FrameHandle(handle.0 + 1));
        assert!(clock.pending.is_some());
        clock.cancel_frame(handle);
        assert!(clock.pending.is_none());
        assert_eq!(clock.time_until_due(Instant::now()), IDLE_POLL);
    }

    #[test]
    fn test_timestamps_increase() {
        let clock = FrameClock::new(Duration::from_millis(16));
        let now = Instant::now();
        let a = clock.timestamp_ms(now);
        let b = clock.timestamp_ms(now + Duration::from_millis(20));
        assert!((b - a - 20.0).abs() < 1e-6);
    }
}
