use bevy::prelude::*;

use super::{Bullet, BulletPool, SpriteType};
use crate::engine::{Cooldown, CooldownFactory};

pub const SHIP_WIDTH: i32 = 13 * 2;
pub const SHIP_HEIGHT: i32 = 8 * 2;

/// Player ship tuning
#[derive(Resource, Clone, Debug)]
pub struct ShipConfig {
    pub shooting_interval_ms: u64, // Minimum time between shots
    pub bullet_speed: i32,         // Pixels per frame, negative is up
    pub speed: i32,                // Horizontal pixels per frame
    pub destruction_phases: usize, // Sprite swaps during the hit flicker
    pub destruction_ms: u64,       // Length of the whole flicker
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            shooting_interval_ms: 750,
            bullet_speed: -6,
            speed: 2,
            destruction_phases: 10,
            destruction_ms: 1000,
        }
    }
}

/// Timed phases of the post-hit flicker, shortest first.
///
/// Built once and never resized, so the last phase always exists.
struct DestructionSequence {
    phases: Box<[Cooldown]>,
    sprites: [SpriteType; 2],
}

impl DestructionSequence {
    fn new(cooldowns: &CooldownFactory, count: usize, total_ms: u64, sprites: [SpriteType; 2]) -> Self {
        let count = count.max(1);
        let step = total_ms / count as u64;

        let phases = (1..count as u64)
            .map(|i| cooldowns.ready(step * i))
            .chain(std::iter::once(cooldowns.ready(total_ms)))
            .collect();

        Self { phases, sprites }
    }

    fn restart(&mut self) {
        for phase in self.phases.iter_mut() {
            phase.reset();
        }
    }

    /// Sprite of the first unfinished phase, alternating between the pair
    fn current_sprite(&self) -> Option<SpriteType> {
        self.phases
            .iter()
            .position(|phase| !phase.check_finished())
            .map(|index| self.sprites[index % 2])
    }

    fn is_running(&self) -> bool {
        self.phases
            .last()
            .is_some_and(|phase| !phase.check_finished())
    }
}

/// Ship controlled by the player
#[derive(Component)]
pub struct Ship {
    position_x: i32,
    position_y: i32,
    width: i32,
    height: i32,
    sprite_type: SpriteType,
    speed: i32,
    bullet_speed: i32,
    shooting_cooldown: Cooldown,
    destruction: DestructionSequence,
}

impl Ship {
    pub fn new(position_x: i32, position_y: i32, cooldowns: &CooldownFactory) -> Self {
        Self::with_config(position_x, position_y, &ShipConfig::default(), cooldowns)
    }

    /// Every cooldown starts ready: the ship can fire on its first frame
    /// and is not destroyed.
    pub fn with_config(
        position_x: i32,
        position_y: i32,
        config: &ShipConfig,
        cooldowns: &CooldownFactory,
    ) -> Self {
        Self {
            position_x,
            position_y,
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
            sprite_type: SpriteType::Ship,
            speed: config.speed,
            bullet_speed: config.bullet_speed,
            shooting_cooldown: cooldowns.ready(config.shooting_interval_ms),
            destruction: DestructionSequence::new(
                cooldowns,
                config.destruction_phases,
                config.destruction_ms,
                [SpriteType::ShipDestroyedLeft, SpriteType::ShipDestroyedRight],
            ),
        }
    }

    pub fn position_x(&self) -> i32 {
        self.position_x
    }

    pub fn position_y(&self) -> i32 {
        self.position_y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn sprite_type(&self) -> SpriteType {
        self.sprite_type
    }

    /// Horizontal movement per frame
    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// No border check here; callers keep the ship on screen.
    pub fn move_right(&mut self) {
        self.position_x += self.speed;
    }

    pub fn move_left(&mut self) {
        self.position_x -= self.speed;
    }

    /// Fires one bullet upward from the ship's nose if the shooting
    /// cooldown has elapsed. Returns whether a bullet was added.
    pub fn shoot(&mut self, pool: &mut BulletPool, bullets: &mut Vec<Bullet>) -> bool {
        if !self.shooting_cooldown.check_finished() {
            return false;
        }

        self.shooting_cooldown.reset();
        bullets.push(pool.get(
            self.position_x + self.width / 2,
            self.position_y,
            self.bullet_speed,
        ));
        true
    }

    /// Picks this frame's sprite from the destruction flicker
    pub fn update(&mut self) {
        self.sprite_type = self.destruction.current_sprite().unwrap_or(SpriteType::Ship);
    }

    /// Restarts the full flicker from now, even mid-sequence
    pub fn destroy(&mut self) {
        self.destruction.restart();
    }

    pub fn is_destroyed(&self) -> bool {
        self.destruction.is_running()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::engine::FrameClock;

    fn setup() -> (FrameClock, Ship) {
        let clock = FrameClock::default();
        clock.advance_to(Duration::from_millis(5_000));
        let ship = Ship::new(200, 490, &CooldownFactory::new(clock.clone()));
        (clock, ship)
    }

    fn wait(clock: &FrameClock, ms: u64) {
        clock.advance_by(Duration::from_millis(ms));
    }

    fn phase_durations(ship: &Ship) -> Vec<u64> {
        ship.destruction
            .phases
            .iter()
            .map(|phase| phase.duration().as_millis() as u64)
            .collect()
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_ship_defaults() {
        let (_clock, ship) = setup();
        assert_eq!(ship.position_x(), 200);
        assert_eq!(ship.position_y(), 490);
        assert_eq!(ship.width(), 26);
        assert_eq!(ship.height(), 16);
        assert_eq!(ship.sprite_type(), SpriteType::Ship);
        assert_eq!(ship.speed(), 2);
        assert!(!ship.is_destroyed());
    }

    #[test]
    fn test_destruction_durations_default() {
        let (_clock, ship) = setup();
        assert_eq!(
            phase_durations(&ship),
            vec![100, 200, 300, 400, 500, 600, 700, 800, 900, 1000]
        );
    }

    #[test]
    fn test_destruction_durations_custom_count() {
        let cooldowns = CooldownFactory::new(FrameClock::default());

        let config = ShipConfig { destruction_phases: 3, ..default() };
        let ship = Ship::with_config(0, 0, &config, &cooldowns);
        assert_eq!(phase_durations(&ship), vec![333, 666, 1000]);

        let config = ShipConfig { destruction_phases: 0, ..default() };
        let ship = Ship::with_config(0, 0, &config, &cooldowns);
        assert_eq!(phase_durations(&ship), vec![1000]);
    }

    // ==================== Movement Tests ====================

    #[test]
    fn test_move_right_then_left_is_net_zero() {
        let (_clock, mut ship) = setup();
        ship.move_right();
        assert_eq!(ship.position_x(), 202);
        ship.move_left();
        assert_eq!(ship.position_x(), 200);
    }

    #[test]
    fn test_move_has_no_border_check() {
        let cooldowns = CooldownFactory::new(FrameClock::default());
        let mut ship = Ship::new(0, 0, &cooldowns);
        ship.move_left();
        assert_eq!(ship.position_x(), -2);
    }

    // ==================== Shooting Tests ====================

    #[test]
    fn test_can_shoot_on_first_frame() {
        let (_clock, mut ship) = setup();
        let mut pool = BulletPool::default();
        let mut bullets = Vec::new();

        assert!(ship.shoot(&mut pool, &mut bullets));
        assert_eq!(bullets.len(), 1);

        let bullet = &bullets[0];
        assert_eq!(bullet.position_x, 200 + 13);
        assert_eq!(bullet.position_y, 490);
        assert_eq!(bullet.speed, -6);
        assert_eq!(bullet.sprite_type, SpriteType::Bullet);
    }

    #[test]
    fn test_second_shot_within_interval_suppressed() {
        let (clock, mut ship) = setup();
        let mut pool = BulletPool::default();
        let mut bullets = Vec::new();

        assert!(ship.shoot(&mut pool, &mut bullets));
        wait(&clock, 10);
        assert!(!ship.shoot(&mut pool, &mut bullets));
        assert_eq!(bullets.len(), 1);
    }

    #[test]
    fn test_shot_rate_capped_by_interval() {
        let (clock, mut ship) = setup();
        let mut pool = BulletPool::default();
        let mut bullets = Vec::new();

        // Try to fire every 16ms frame for 3 seconds
        let mut fired = 0;
        for _ in 0..(3000 / 16) {
            if ship.shoot(&mut pool, &mut bullets) {
                fired += 1;
            }
            wait(&clock, 16);
        }

        assert_eq!(fired, bullets.len());
        assert!(fired <= 3000 / 750 + 1);
        assert!(fired >= 3);
    }

    #[test]
    fn test_can_shoot_again_after_interval() {
        let (clock, mut ship) = setup();
        let mut pool = BulletPool::default();
        let mut bullets = Vec::new();

        assert!(ship.shoot(&mut pool, &mut bullets));
        wait(&clock, 749);
        assert!(!ship.shoot(&mut pool, &mut bullets));
        wait(&clock, 1);
        assert!(ship.shoot(&mut pool, &mut bullets));
        assert_eq!(bullets.len(), 2);
    }

    // ==================== Destruction Tests ====================

    #[test]
    fn test_destroyed_for_one_second() {
        let (clock, mut ship) = setup();
        ship.destroy();
        assert!(ship.is_destroyed());

        wait(&clock, 999);
        assert!(ship.is_destroyed());

        wait(&clock, 1);
        assert!(!ship.is_destroyed());
    }

    #[test]
    fn test_sprite_flicker_timeline() {
        let (clock, mut ship) = setup();
        ship.destroy();

        wait(&clock, 50);
        ship.update();
        assert_eq!(ship.sprite_type(), SpriteType::ShipDestroyedLeft);

        wait(&clock, 100);
        ship.update();
        assert_eq!(ship.sprite_type(), SpriteType::ShipDestroyedRight);

        wait(&clock, 900);
        ship.update();
        assert_eq!(ship.sprite_type(), SpriteType::Ship);
    }

    #[test]
    fn test_every_phase_alternates_sprite() {
        let (clock, mut ship) = setup();
        ship.destroy();
        wait(&clock, 50);

        for phase in 0..10 {
            ship.update();
            let expected = if phase % 2 == 0 {
                SpriteType::ShipDestroyedLeft
            } else {
                SpriteType::ShipDestroyedRight
            };
            assert_eq!(ship.sprite_type(), expected, "phase {phase}");
            wait(&clock, 100);
        }

        ship.update();
        assert_eq!(ship.sprite_type(), SpriteType::Ship);
    }

    #[test]
    fn test_update_without_destroy_keeps_normal_sprite() {
        let (clock, mut ship) = setup();
        for _ in 0..5 {
            ship.update();
            assert_eq!(ship.sprite_type(), SpriteType::Ship);
            wait(&clock, 16);
        }
    }

    #[test]
    fn test_destroy_mid_sequence_restarts() {
        let (clock, mut ship) = setup();
        ship.destroy();
        wait(&clock, 500);

        ship.destroy();
        ship.update();
        assert_eq!(ship.sprite_type(), SpriteType::ShipDestroyedLeft);

        // Past the end of the first sequence, still inside the second
        wait(&clock, 600);
        assert!(ship.is_destroyed());

        wait(&clock, 400);
        assert!(!ship.is_destroyed());
    }

    #[test]
    fn test_destroy_does_not_block_shooting_cooldown() {
        let (_clock, mut ship) = setup();
        let mut pool = BulletPool::default();
        let mut bullets = Vec::new();

        ship.destroy();
        assert!(ship.shoot(&mut pool, &mut bullets));
    }
}
