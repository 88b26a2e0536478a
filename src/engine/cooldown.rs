use std::sync::Arc;
use std::time::Duration;

use bevy::prelude::*;

use super::clock::Clock;

/// Restartable countdown measured against a shared monotonic clock
pub struct Cooldown {
    duration: Duration,
    /// `None` until the first reset: a ready cooldown counts as elapsed
    started_at: Option<Duration>,
    clock: Arc<dyn Clock>,
}

impl Cooldown {
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// True once `duration` has passed since the last reset (or creation)
    pub fn check_finished(&self) -> bool {
        match self.started_at {
            Some(start) => self.clock.now().saturating_sub(start) >= self.duration,
            None => true,
        }
    }

    /// Restarts the countdown from the current clock reading
    pub fn reset(&mut self) {
        self.started_at = Some(self.clock.now());
    }
}

/// Builds cooldowns that all read the same clock.
///
/// Passed explicitly to constructors so tests can hand in a clock they
/// advance themselves.
#[derive(Resource, Clone)]
pub struct CooldownFactory {
    clock: Arc<dyn Clock>,
}

impl CooldownFactory {
    pub fn new(clock: impl Clock) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    /// Cooldown running from now
    pub fn get(&self, duration_ms: u64) -> Cooldown {
        let mut cooldown = self.ready(duration_ms);
        cooldown.reset();
        cooldown
    }

    /// Cooldown that reports finished until it is first reset
    pub fn ready(&self, duration_ms: u64) -> Cooldown {
        Cooldown {
            duration: Duration::from_millis(duration_ms),
            started_at: None,
            clock: Arc::clone(&self.clock),
        }
    }
}
