//! Combat system - bullets in flight, hits on the player ship

use bevy::prelude::*;

use crate::engine::Screen;
use crate::entity::{Bullet, BulletPool, Ship};
use crate::player::Player;
use crate::GameState;

/// Top edge of the playfield; the HUD lives above it
pub const SEPARATION_LINE_HEIGHT: i32 = 40;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Bullets>()
            .init_resource::<BulletPool>()
            .add_event::<ShipHit>()
            .add_systems(
                Update,
                (debug_hit_player, process_ship_hits, update_bullets)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Bullets currently on screen
#[derive(Resource, Default, Deref, DerefMut)]
pub struct Bullets(pub Vec<Bullet>);

/// Event fired when something hits a ship
#[derive(Event)]
pub struct ShipHit {
    pub ship: Entity,
}

/// Start the destruction flicker on ships that were hit.
/// A ship already flickering ignores further hits.
pub fn process_ship_hits(mut hits: EventReader<ShipHit>, mut ships: Query<&mut Ship>) {
    for hit in hits.read() {
        let Ok(mut ship) = ships.get_mut(hit.ship) else {
            continue;
        };

        if ship.is_destroyed() {
            continue;
        }

        ship.destroy();
        info!("Ship hit at x={}", ship.position_x());
    }
}

/// Move bullets one frame and recycle the ones that left the playfield
pub fn update_bullets(
    mut bullets: ResMut<Bullets>,
    mut pool: ResMut<BulletPool>,
    screen: Res<Screen>,
) {
    for bullet in bullets.iter_mut() {
        bullet.update();
    }

    let (live, spent): (Vec<_>, Vec<_>) = bullets
        .drain(..)
        .partition(|bullet| on_playfield(bullet, &screen));

    if !spent.is_empty() {
        pool.recycle(spent);
        debug!("Recycled bullets, pool size {}", pool.len());
    }

    bullets.0 = live;
}

fn on_playfield(bullet: &Bullet, screen: &Screen) -> bool {
    bullet.position_y >= SEPARATION_LINE_HEIGHT && bullet.position_y <= screen.height
}

/// F1 hits the player ship; collision detection lives outside this crate
fn debug_hit_player(
    keyboard: Res<ButtonInput<KeyCode>>,
    player_query: Query<Entity, With<Player>>,
    mut hits: EventWriter<ShipHit>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    if let Ok(ship) = player_query.single() {
        hits.write(ShipHit { ship });
    }
}
