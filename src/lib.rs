// Library exports for testing
pub use entities::{Enemy, Facing, GameState, Player, Projectile, Spawner};
pub use geometry::{BoundingBox, Rect};
pub use input::FrameInput;
pub use session::{GameEvent, Session, WorldBounds};

pub mod app;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod renderer;
pub mod session;
