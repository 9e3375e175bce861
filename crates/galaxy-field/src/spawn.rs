//! Randomized cooldown timers for particle producers.

use galaxy_core::SpawnRule;
use rand::Rng;

/// Fires once the current randomized wait has elapsed, then re-arms.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    rule: SpawnRule,
    last_ms: f64,
    wait_ms: f64,
}

impl SpawnTimer {
    /// A timer whose first wait is measured from `now_ms`.
    pub fn new(rule: SpawnRule, now_ms: f64, rng: &mut impl Rng) -> Self {
        let mut timer = Self {
            rule,
            last_ms: now_ms,
            wait_ms: 0.0,
        };
        timer.rearm(now_ms, rng);
        timer
    }

    pub fn cap(&self) -> usize {
        self.rule.cap
    }

    /// True when the wait has elapsed; re-arms with a fresh random wait.
    pub fn poll(&mut self, now_ms: f64, rng: &mut impl Rng) -> bool {
        if now_ms - self.last_ms < self.wait_ms {
            return false;
        }
        self.rearm(now_ms, rng);
        true
    }

    fn rearm(&mut self, now_ms: f64, rng: &mut impl Rng) {
        self.last_ms = now_ms;
        let jitter = self.rule.jitter_ms.max(0.0) as f64;
        self.wait_ms = self.rule.cooldown_ms.max(0.0) as f64 + rng.random::<f64>() * jitter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_waits_for_cooldown() {
        let mut rng = StdRng::seed_from_u64(1);
        let rule = SpawnRule {
            cooldown_ms: 4000.0,
            jitter_ms: 4000.0,
            cap: 5,
        };
        let mut timer = SpawnTimer::new(rule, 0.0, &mut rng);
        assert!(!timer.poll(3999.0, &mut rng));
        assert!(timer.poll(8000.0, &mut rng));
        // Re-armed from 8000
        assert!(!timer.poll(8001.0, &mut rng));
    }

    #[test]
    fn test_zero_cooldown_fires_every_poll() {
        let mut rng = StdRng::seed_from_u64(1);
        let rule = SpawnRule {
            cooldown_ms: 0.0,
            jitter_ms: 0.0,
            cap: 1,
        };
        let mut timer = SpawnTimer::new(rule, 0.0, &mut rng);
        assert!((0..100).all(|i| timer.poll(i as f64, &mut rng)));
        assert_eq!(timer.cap(), 1);
    }
}
