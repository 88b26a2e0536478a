//! Game entities: the player ship and its bullets

pub mod bullet;
pub mod ship;

pub use bullet::*;
pub use ship::*;

/// Selects which visual asset represents an entity this frame
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SpriteType {
    #[default]
    Ship,
    ShipDestroyedLeft,
    ShipDestroyedRight,
    Bullet,
    EnemyBullet,
}
