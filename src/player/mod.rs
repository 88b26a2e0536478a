use bevy::prelude::*;

use crate::GameState;
use crate::combat::Bullets;
use crate::engine::{CooldownFactory, Screen};
use crate::entity::{BulletPool, Ship, ShipConfig, SpriteType};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShipConfig>()
            .add_systems(Startup, spawn_player_ship)
            .add_systems(
                Update,
                (
                    player_input, // Move and shoot before picking the sprite
                    update_ships,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

#[derive(Component)]
pub struct Player;

fn spawn_player_ship(
    mut commands: Commands,
    config: Res<ShipConfig>,
    cooldowns: Res<CooldownFactory>,
    screen: Res<Screen>,
) {
    let ship = Ship::with_config(
        screen.width / 2,
        screen.height - 30,
        &config,
        &cooldowns,
    );
    commands.spawn((Player, ship));
}

/// Would one more step right leave the screen
pub fn at_right_border(ship: &Ship, screen: &Screen) -> bool {
    ship.position_x() + ship.width() + ship.speed() > screen.width - 1
}

pub fn at_left_border(ship: &Ship) -> bool {
    ship.position_x() - ship.speed() < 1
}

fn player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut player_query: Query<&mut Ship, With<Player>>,
    mut pool: ResMut<BulletPool>,
    mut bullets: ResMut<Bullets>,
    screen: Res<Screen>,
) {
    let Ok(mut ship) = player_query.single_mut() else {
        return;
    };

    // No control while the hit flicker plays
    if ship.is_destroyed() {
        return;
    }

    let move_right = keyboard.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]);
    let move_left = keyboard.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]);

    if move_right && !at_right_border(&ship, &screen) {
        ship.move_right();
    }
    if move_left && !at_left_border(&ship) {
        ship.move_left();
    }

    if keyboard.pressed(KeyCode::Space) && ship.shoot(&mut pool, &mut bullets.0) {
        debug!("Shot fired from x={}", ship.position_x());
    }
}

/// Once per frame: pick each ship's sprite from its destruction state
fn update_ships(mut ships: Query<&mut Ship>) {
    for mut ship in &mut ships {
        let was_flickering = ship.sprite_type() != SpriteType::Ship;
        ship.update();

        if was_flickering && ship.sprite_type() == SpriteType::Ship {
            info!("Ship back in play");
        }
    }
}
