mod enemy;
mod game_state;
mod player;
mod projectile;
mod spawner;

// Re-export all public types
pub use enemy::Enemy;
pub use game_state::GameState;
pub use player::{Facing, Player};
pub use projectile::Projectile;
pub use spawner::Spawner;
