//! Frame-rate limiting independent of any scheduler.

/// Outcome of offering a timestamp to [`FrameThrottle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameStep {
    /// First timestamp seen; recorded as the reference, nothing advances.
    Primed,
    /// Too soon after the last processed frame.
    Skipped,
    /// Process a frame; `elapsed_ms` since the previous processed frame.
    Advance { elapsed_ms: f64 },
}

/// Drops frames that arrive faster than the target interval.
#[derive(Debug, Clone)]
pub struct FrameThrottle {
    interval_ms: f64,
    tolerance_ms: f64,
    last_ms: Option<f64>,
}

impl FrameThrottle {
    pub fn new(interval_ms: f64, tolerance_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            tolerance_ms: tolerance_ms.clamp(0.0, interval_ms.max(0.0)),
            last_ms: None,
        }
    }

    pub fn check(&mut self, timestamp_ms: f64) -> FrameStep {
        let Some(last) = self.last_ms else {
            self.last_ms = Some(timestamp_ms);
            return FrameStep::Primed;
        };

        let elapsed_ms = timestamp_ms - last;
        if elapsed_ms < 0.0 {
            // Clock went backwards (host restarted its timeline); re-anchor.
            self.last_ms = Some(timestamp_ms);
            return FrameStep::Skipped;
        }
        if elapsed_ms < self.interval_ms - self.tolerance_ms {
            return FrameStep::Skipped;
        }

        self.last_ms = Some(timestamp_ms);
        FrameStep::Advance { elapsed_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIXTY_FPS: f64 = 1000.0 / 60.0;

    #[test]
    fn test_first_frame_primes() {
        let mut throttle = FrameThrottle::new(SIXTY_FPS, 1.0);
        assert_eq!(throttle.check(0.0), FrameStep::Primed);
        assert_eq!(throttle.check(16.0), FrameStep::Advance { elapsed_ms: 16.0 });
        assert_eq!(throttle.check(20.0), FrameStep::Skipped);
        assert_eq!(throttle.check(33.0), FrameStep::Advance { elapsed_ms: 17.0 });
    }

    #[test]
    fn test_high_refresh_display_is_halved() {
        let mut throttle = FrameThrottle::new(SIXTY_FPS, 1.0);
        throttle.check(0.0);
        let processed = (1..=240)
            .map(|i| throttle.check(i as f64 * 1000.0 / 120.0))
            .filter(|step| matches!(step, FrameStep::Advance { .. }))
            .count();
        assert_eq!(processed, 120);
    }

    #[test]
    fn test_backwards_clock_reanchors() {
        let mut throttle = FrameThrottle::new(SIXTY_FPS, 1.0);
        throttle.check(1000.0);
        assert_eq!(throttle.check(10.0), FrameStep::Skipped);
        assert_eq!(throttle.check(30.0), FrameStep::Advance { elapsed_ms: 20.0 });
    }
}
