//! Frame clock, cooldowns and playfield size

use bevy::prelude::*;
use bevy::time::TimeSystem;

pub mod clock;
pub mod cooldown;

pub use clock::*;
pub use cooldown::*;

/// Playfield size in pixels. Origin is the top-left corner, y grows downward.
#[derive(Resource, Clone, Copy, Debug)]
pub struct Screen {
    pub width: i32,
    pub height: i32,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            width: 448,
            height: 520,
        }
    }
}

pub struct EnginePlugin;

impl Plugin for EnginePlugin {
    fn build(&self, app: &mut App) {
        let clock = FrameClock::default();

        app.init_resource::<Screen>()
            .insert_resource(CooldownFactory::new(clock.clone()))
            .insert_resource(clock)
            .add_systems(First, advance_frame_clock.after(TimeSystem));
    }
}
