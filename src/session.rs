use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::entities::{Enemy, Player, Projectile, Spawner};
use crate::geometry::BoundingBox;
use crate::input::FrameInput;

/// Distance from the bottom of the screen to the walkable ground line.
pub const GROUND_OFFSET: f32 = 20.0;

/// Screen dimensions in world units plus the derived ground line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn ground_y(&self) -> f32 {
        self.height - GROUND_OFFSET
    }
}

/// Signals the frame driver can observe. The simulation attaches no policy
/// to them: a hit removes nothing and changes no combatant state, so lives
/// or game-over rules can layer on top later without touching the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An enemy overlapped the player's box this frame.
    PlayerHit,
}

/// Owns the whole simulation state: the player, the enemy and projectile
/// collections, the spawner and the RNG feeding it. Entities hold no
/// back-references; everything is driven from [`Session::step`].
pub struct Session {
    pub bounds: WorldBounds,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub spawner: Spawner,
    rng: SmallRng,
}

impl Session {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_rng(width, height, SmallRng::from_os_rng())
    }

    /// Deterministic variant for tests.
    pub fn with_seed(width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(width, height, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(width: f32, height: f32, rng: SmallRng) -> Self {
        let bounds = WorldBounds::new(width, height);
        Self {
            bounds,
            player: Player::spawn(&bounds),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            spawner: Spawner::new(),
            rng,
        }
    }

    /// Resets the session for new screen dimensions: player repositioned on
    /// the new ground line, all enemies and projectiles cleared, spawn timer
    /// restarted. The world is reset rather than rescaled in place.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = WorldBounds::new(width, height);
        self.player = Player::spawn(&self.bounds);
        self.enemies.clear();
        self.projectiles.clear();
        self.spawner.reset();
    }

    /// Advances the simulation by one frame. The order is fixed:
    /// player input and gated shoot, projectile advance and cull, spawner
    /// tick, enemy advance and cull, projectile-enemy collisions, then the
    /// player-enemy pass which only reports hits.
    pub fn step(&mut self, input: &FrameInput) -> Vec<GameEvent> {
        let mut events = Vec::new();

        // 1. Player physics, then the shoot request gated by the cooldown
        self.player.update_cooldown();
        self.player.update(input, &self.bounds);
        if input.fire && self.player.can_fire() {
            self.projectiles.push(self.player.shoot());
            self.player.reset_cooldown();
        }

        // 2. Advance projectiles, cull anything fully outside [0, width]
        for projectile in &mut self.projectiles {
            projectile.update();
        }
        let width = self.bounds.width;
        self.projectiles.retain(|p| !p.is_out_of_bounds(width));

        // 3. Spawn timer; at most one enemy per frame
        if let Some(enemy) = self.spawner.tick(&self.bounds, &mut self.rng) {
            self.enemies.push(enemy);
        }

        // 4. Advance enemies, cull anything fully past the left edge
        for enemy in &mut self.enemies {
            enemy.update();
        }
        self.enemies.retain(|e| !e.is_off_screen());

        // 5. Projectile-enemy pass, newest to oldest on both sides. The
        // first match removes both and ends that projectile's scan, so one
        // bullet kills at most one enemy per frame.
        for p_idx in (0..self.projectiles.len()).rev() {
            for e_idx in (0..self.enemies.len()).rev() {
                if self.projectiles[p_idx]
                    .bounds()
                    .intersects(&self.enemies[e_idx].bounds())
                {
                    self.projectiles.remove(p_idx);
                    self.enemies.remove(e_idx);
                    break;
                }
            }
        }

        // 6. Player-enemy pass: report only, remove nothing
        let player_box = self.player.bounds();
        for enemy in &self.enemies {
            if player_box.intersects(&enemy.bounds()) {
                events.push(GameEvent::PlayerHit);
            }
        }

        events
    }
}
