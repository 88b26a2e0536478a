use bevy::prelude::*;

use super::SpriteType;

pub const BULLET_WIDTH: i32 = 3 * 2;
pub const BULLET_HEIGHT: i32 = 5 * 2;

/// Projectile moving straight up or down the playfield
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bullet {
    pub position_x: i32,
    pub position_y: i32,
    pub width: i32,
    pub height: i32,
    /// Pixels per frame, negative moves up
    pub speed: i32,
    pub sprite_type: SpriteType,
}

impl Bullet {
    fn new(position_x: i32, position_y: i32, speed: i32) -> Self {
        Self {
            position_x,
            position_y,
            width: BULLET_WIDTH,
            height: BULLET_HEIGHT,
            speed,
            sprite_type: sprite_for(speed),
        }
    }

    pub fn update(&mut self) {
        self.position_y += self.speed;
    }
}

/// Player bullets travel up, enemy bullets travel down
fn sprite_for(speed: i32) -> SpriteType {
    if speed < 0 {
        SpriteType::Bullet
    } else {
        SpriteType::EnemyBullet
    }
}

/// Free list of spent bullets, reused before allocating new ones
#[derive(Resource, Default)]
pub struct BulletPool {
    free: Vec<Bullet>,
}

impl BulletPool {
    pub fn get(&mut self, position_x: i32, position_y: i32, speed: i32) -> Bullet {
        match self.free.pop() {
            Some(mut bullet) => {
                bullet.position_x = position_x;
                bullet.position_y = position_y;
                bullet.speed = speed;
                bullet.sprite_type = sprite_for(speed);
                bullet
            }
            None => Bullet::new(position_x, position_y, speed),
        }
    }

    pub fn recycle(&mut self, bullets: impl IntoIterator<Item = Bullet>) {
        self.free.extend(bullets);
    }

    pub fn len(&self) -> usize {
        self.free.len()
    }
}
