use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use bevy::prelude::*;

/// Monotonic time source read by cooldowns
pub trait Clock: Send + Sync + 'static {
    /// Time elapsed since the clock started. Never decreases.
    fn now(&self) -> Duration;
}

/// Shared millisecond clock, advanced once per frame.
///
/// Every clone reads the same counter, so all cooldowns built from one
/// `FrameClock` agree on "now" for the whole frame.
#[derive(Resource, Clone, Default)]
pub struct FrameClock {
    elapsed_ms: Arc<AtomicU64>,
}

impl FrameClock {
    /// Moves the clock forward to `now`. Earlier readings are ignored.
    pub fn advance_to(&self, now: Duration) {
        self.elapsed_ms
            .fetch_max(now.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn advance_by(&self, delta: Duration) {
        self.elapsed_ms
            .fetch_add(delta.as_millis() as u64, Ordering::Relaxed);
    }
}

impl Clock for FrameClock {
    fn now(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms.load(Ordering::Relaxed))
    }
}

/// Copies real elapsed time into the frame clock (runs in `First`)
pub fn advance_frame_clock(time: Res<Time<Real>>, clock: Res<FrameClock>) {
    clock.advance_to(time.elapsed());
}
