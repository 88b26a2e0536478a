//! Placeholder drawing - every sprite is a gizmo rectangle in its own colour

use bevy::prelude::*;

use crate::combat::{Bullets, SEPARATION_LINE_HEIGHT};
use crate::engine::Screen;
use crate::entity::{Ship, SpriteType};

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(Update, (draw_separation_line, draw_ships, draw_bullets));
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub fn sprite_color(sprite: SpriteType) -> Color {
    match sprite {
        SpriteType::Ship => Color::srgb(0.0, 1.0, 0.0),
        SpriteType::ShipDestroyedLeft => Color::srgb(0.0, 0.5, 0.0),
        SpriteType::ShipDestroyedRight => Color::srgb(0.6, 1.0, 0.6),
        SpriteType::Bullet => Color::WHITE,
        SpriteType::EnemyBullet => Color::srgb(1.0, 0.3, 0.3),
    }
}

/// Centre of a pixel rect (top-left origin, y down) in world space (centre origin, y up)
pub fn to_world(x: i32, y: i32, width: i32, height: i32, screen: &Screen) -> Vec2 {
    Vec2::new(
        x as f32 + width as f32 / 2.0 - screen.width as f32 / 2.0,
        screen.height as f32 / 2.0 - (y as f32 + height as f32 / 2.0),
    )
}

fn draw_separation_line(mut gizmos: Gizmos, screen: Res<Screen>) {
    let left = to_world(0, SEPARATION_LINE_HEIGHT, 0, 0, &screen);
    let right = to_world(screen.width, SEPARATION_LINE_HEIGHT, 0, 0, &screen);
    gizmos.line_2d(left, right, Color::srgb(0.0, 1.0, 0.0));
}

fn draw_ships(mut gizmos: Gizmos, ships: Query<&Ship>, screen: Res<Screen>) {
    for ship in &ships {
        let center = to_world(
            ship.position_x(),
            ship.position_y(),
            ship.width(),
            ship.height(),
            &screen,
        );
        let size = Vec2::new(ship.width() as f32, ship.height() as f32);
        gizmos.rect_2d(center, size, sprite_color(ship.sprite_type()));
    }
}

fn draw_bullets(mut gizmos: Gizmos, bullets: Res<Bullets>, screen: Res<Screen>) {
    for bullet in bullets.iter() {
        let center = to_world(
            bullet.position_x,
            bullet.position_y,
            bullet.width,
            bullet.height,
            &screen,
        );
        let size = Vec2::new(bullet.width as f32, bullet.height as f32);
        gizmos.rect_2d(center, size, sprite_color(bullet.sprite_type));
    }
}

// ============================================================================
// TESTS
// ============================================================================
