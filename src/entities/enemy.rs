use crate::geometry::{BoundingBox, Rect};

/// A horde walker marching right-to-left along the ground line. Speed is
/// fixed at spawn time and stays constant for the enemy's lifetime.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    /// World units moved leftward per frame, always > 0
    pub speed: f32,
}

impl Enemy {
    pub const WIDTH: f32 = 40.0;
    pub const HEIGHT: f32 = 90.0;

    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        debug_assert!(speed > 0.0);
        Self { x, y, speed }
    }

    pub fn update(&mut self) {
        self.x -= self.speed;
    }

    /// True once the enemy has fully crossed the left edge.
    pub fn is_off_screen(&self) -> bool {
        self.x + Self::WIDTH <= 0.0
    }
}

impl BoundingBox for Enemy {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, Self::WIDTH, Self::HEIGHT)
    }
}
