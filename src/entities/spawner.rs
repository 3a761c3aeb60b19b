use rand::Rng;

use crate::session::WorldBounds;

use super::enemy::Enemy;

/// Timer-driven enemy source. Counts simulation frames and emits one enemy
/// whenever the counter reaches the current interval, then resamples the
/// interval. The RNG is passed in by the caller so tests can seed it; the
/// interval bounds are plain fields so tests can pin them.
#[derive(Debug, Clone)]
pub struct Spawner {
    pub timer: u32,
    pub interval: u32,
    pub min_interval: u32,
    pub max_interval: u32,
}

impl Spawner {
    /// ~3 seconds at 60 frames per second
    pub const INITIAL_INTERVAL: u32 = 180;
    pub const MIN_INTERVAL: u32 = 120;
    pub const MAX_INTERVAL: u32 = 240;
    pub const MIN_SPEED: f32 = 1.0;
    pub const MAX_SPEED: f32 = 3.0;

    pub fn new() -> Self {
        Self {
            timer: 0,
            interval: Self::INITIAL_INTERVAL,
            min_interval: Self::MIN_INTERVAL,
            max_interval: Self::MAX_INTERVAL,
        }
    }

    /// Advances the spawn timer by one frame. At most one enemy per call,
    /// placed just off the right edge with its feet on the ground line and
    /// a speed sampled uniformly from [MIN_SPEED, MAX_SPEED).
    pub fn tick(&mut self, bounds: &WorldBounds, rng: &mut impl Rng) -> Option<Enemy> {
        self.timer += 1;
        if self.timer < self.interval {
            return None;
        }

        self.timer = 0;
        self.interval = rng.random_range(self.min_interval..self.max_interval);

        let speed = rng.random_range(Self::MIN_SPEED..Self::MAX_SPEED);
        let y = bounds.ground_y() - Enemy::HEIGHT;
        Some(Enemy::new(bounds.width, y, speed))
    }

    pub fn reset(&mut self) {
        self.timer = 0;
        self.interval = Self::INITIAL_INTERVAL;
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn bounds() -> WorldBounds {
        WorldBounds::new(800.0, 600.0)
    }

    #[test]
    fn test_no_spawn_before_interval_elapses() {
        let mut spawner = Spawner::new();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..Spawner::INITIAL_INTERVAL - 1 {
            assert!(spawner.tick(&bounds(), &mut rng).is_none());
        }
        assert!(spawner.tick(&bounds(), &mut rng).is_some());
    }

    #[test]
    fn test_spawn_count_with_pinned_interval() {
        // Pinning the resample range to {10} holds the interval constant,
        // so 35 ticks must produce exactly floor(35 / 10) = 3 enemies.
        let mut spawner = Spawner::new();
        spawner.interval = 10;
        spawner.min_interval = 10;
        spawner.max_interval = 11;

        let mut rng = SmallRng::seed_from_u64(7);
        let mut spawned = 0;
        for _ in 0..35 {
            if spawner.tick(&bounds(), &mut rng).is_some() {
                spawned += 1;
            }
        }
        assert_eq!(spawned, 3);
    }

    #[test]
    fn test_spawned_enemy_position_and_speed() {
        let b = bounds();
        let mut spawner = Spawner::new();
        spawner.interval = 1;

        let mut rng = SmallRng::seed_from_u64(7);
        let enemy = spawner.tick(&b, &mut rng).expect("spawn on first tick");
        assert_eq!(enemy.x, b.width);
        assert_eq!(enemy.y, b.ground_y() - Enemy::HEIGHT);
        assert!(enemy.speed >= Spawner::MIN_SPEED);
        assert!(enemy.speed < Spawner::MAX_SPEED);
    }

    #[test]
    fn test_interval_resampled_within_bounds_after_spawn() {
        let mut spawner = Spawner::new();
        spawner.interval = 1;

        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            spawner.tick(&bounds(), &mut rng);
            assert!(spawner.interval >= Spawner::MIN_INTERVAL);
            assert!(spawner.interval < Spawner::MAX_INTERVAL);
            // Force the next tick to spawn again
            spawner.timer = spawner.interval - 1;
        }
    }

    #[test]
    fn test_reset_restores_initial_timing() {
        let mut spawner = Spawner::new();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..300 {
            spawner.tick(&bounds(), &mut rng);
        }
        spawner.reset();
        assert_eq!(spawner.timer, 0);
        assert_eq!(spawner.interval, Spawner::INITIAL_INTERVAL);
    }
}
