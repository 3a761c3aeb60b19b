use crate::geometry::{BoundingBox, Rect};
use crate::input::FrameInput;
use crate::session::WorldBounds;

use super::projectile::Projectile;

/// Which way the player faces; also the travel direction of its shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// The player-controlled skater. Two motion states only: grounded and
/// airborne. Created once per session and never destroyed.
#[derive(Debug, Clone)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Horizontal velocity, world units per frame
    pub dx: f32,
    /// Vertical velocity, world units per frame
    pub dy: f32,
    pub facing: Facing,
    pub airborne: bool,
    pub fire_cooldown: u8,
}

impl Player {
    pub const WIDTH: f32 = 50.0;
    pub const HEIGHT: f32 = 100.0;
    pub const MOVE_SPEED: f32 = 5.0;
    pub const DAMPING: f32 = 0.9;
    pub const JUMP_STRENGTH: f32 = 16.0;
    pub const GRAVITY: f32 = 0.8;
    /// 250ms at 60 frames per second
    pub const FIRE_COOLDOWN_FRAMES: u8 = 15;

    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            dx: 0.0,
            dy: 0.0,
            facing: Facing::Right,
            airborne: false,
            fire_cooldown: 0,
        }
    }

    /// Starting position: centered horizontally, standing on the ground line.
    pub fn spawn(bounds: &WorldBounds) -> Self {
        Self::new(
            bounds.width / 2.0 - Self::WIDTH / 2.0,
            bounds.ground_y() - Self::HEIGHT,
        )
    }

    /// Top coordinate the player rests at while standing on the ground line.
    pub fn floor_y(bounds: &WorldBounds) -> f32 {
        bounds.ground_y() - Self::HEIGHT
    }

    /// Applies one frame of input and physics: horizontal velocity from held
    /// keys (damped toward zero when neither is held), jump only from the
    /// ground, additive position integration, gravity while off the ground,
    /// ground clamp, screen-boundary clamp.
    pub fn update(&mut self, input: &FrameInput, bounds: &WorldBounds) {
        if input.left {
            self.dx = -Self::MOVE_SPEED;
            self.facing = Facing::Left;
        } else if input.right {
            self.dx = Self::MOVE_SPEED;
            self.facing = Facing::Right;
        } else {
            self.dx *= Self::DAMPING;
        }

        // No double jump: only a grounded player can leave the ground
        if input.jump && !self.airborne {
            self.dy = -Self::JUMP_STRENGTH;
            self.airborne = true;
        }

        self.x += self.dx;
        self.y += self.dy;

        let floor_y = Self::floor_y(bounds);
        if self.y < floor_y || self.airborne {
            self.dy += Self::GRAVITY;
        }

        // Ground collision: clamp, kill vertical velocity, land
        if self.y > floor_y {
            self.y = floor_y;
            self.dy = 0.0;
            self.airborne = false;
        }

        self.x = self.x.clamp(0.0, (bounds.width - Self::WIDTH).max(0.0));
    }

    pub fn can_fire(&self) -> bool {
        self.fire_cooldown == 0
    }

    pub fn reset_cooldown(&mut self) {
        self.fire_cooldown = Self::FIRE_COOLDOWN_FRAMES;
    }

    pub fn update_cooldown(&mut self) {
        if self.fire_cooldown > 0 {
            self.fire_cooldown -= 1;
        }
    }

    /// Builds one bullet at the leading edge of the player, vertically
    /// centered. Cooldown gating is the session's job, not ours.
    pub fn shoot(&self) -> Projectile {
        let x = match self.facing {
            Facing::Right => self.x + Self::WIDTH,
            Facing::Left => self.x - Projectile::WIDTH,
        };
        let y = self.y + Self::HEIGHT / 2.0 - Projectile::HEIGHT / 2.0;
        Projectile::new(x, y, self.facing)
    }
}

impl BoundingBox for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, Self::WIDTH, Self::HEIGHT)
    }
}
