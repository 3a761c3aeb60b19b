use crate::geometry::{BoundingBox, Rect};

use super::player::Facing;

/// A bullet fired by the player. Moves horizontally in its facing
/// direction until it leaves the screen or hits an enemy.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub facing: Facing,
}

impl Projectile {
    pub const WIDTH: f32 = 10.0;
    pub const HEIGHT: f32 = 5.0;
    pub const SPEED: f32 = 7.0;

    pub fn new(x: f32, y: f32, facing: Facing) -> Self {
        Self {
            x,
            y,
            speed: Self::SPEED,
            facing,
        }
    }

    pub fn update(&mut self) {
        self.x += self.speed * self.facing.sign();
    }

    /// True once the bullet lies fully outside [0, world_width].
    pub fn is_out_of_bounds(&self, world_width: f32) -> bool {
        self.x + Self::WIDTH <= 0.0 || self.x >= world_width
    }
}

impl BoundingBox for Projectile {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, Self::WIDTH, Self::HEIGHT)
    }
}
