/// Integration tests for the simulation core
///
/// These tests drive whole sessions frame by frame and verify the
/// interactions between entities: spawning, culling, collision and the
/// player-hit signal.
use grindline::{Enemy, Facing, FrameInput, GameEvent, Player, Projectile, Session, Spawner};

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 600.0;

fn session() -> Session {
    Session::with_seed(WIDTH, HEIGHT, 1)
}

/// A session whose spawner never fires, for targeted entity tests.
fn quiet_session() -> Session {
    let mut session = session();
    session.spawner.interval = 1_000_000;
    session
}

fn idle() -> FrameInput {
    FrameInput::default()
}

#[test]
fn test_player_never_leaves_ground_band_while_jumping() {
    let mut session = quiet_session();
    let floor_y = Player::floor_y(&session.bounds);

    // Hammer the jump key for several full jump arcs
    for frame in 0..600 {
        let input = FrameInput {
            jump: frame % 7 != 0,
            left: frame % 3 == 0,
            right: frame % 5 == 0,
            ..FrameInput::default()
        };
        session.step(&input);
        assert!(session.player.y <= floor_y);
        assert!(session.player.x >= 0.0);
        assert!(session.player.x <= WIDTH - Player::WIDTH);
    }
}

#[test]
fn test_first_enemy_spawns_after_initial_interval() {
    let mut session = session();

    for _ in 0..Spawner::INITIAL_INTERVAL - 1 {
        session.step(&idle());
    }
    assert!(session.enemies.is_empty());

    session.step(&idle());
    assert_eq!(session.enemies.len(), 1);

    // Spawned just off the right edge, then advanced once this frame
    let enemy = &session.enemies[0];
    assert!(enemy.x < WIDTH);
    assert!(enemy.x >= WIDTH - Spawner::MAX_SPEED);
    assert_eq!(enemy.y, session.bounds.ground_y() - Enemy::HEIGHT);
}

#[test]
fn test_held_fire_respects_cooldown() {
    let mut session = quiet_session();
    // Fire from the left edge so no bullet is culled during the test
    session.player.x = 0.0;
    let fire = FrameInput {
        fire: true,
        ..FrameInput::default()
    };

    for _ in 0..u32::from(Player::FIRE_COOLDOWN_FRAMES) * 4 {
        session.step(&fire);
    }
    // One shot per cooldown window: frames 1, 16, 31, 46 for a 15-frame cooldown
    assert_eq!(session.projectiles.len(), 4);
}

#[test]
fn test_projectile_and_enemy_culled_when_fully_offscreen() {
    let mut session = quiet_session();
    session
        .projectiles
        .push(Projectile::new(-Projectile::WIDTH, 527.5, Facing::Left));
    session.enemies.push(Enemy::new(-Enemy::WIDTH, 490.0, 1.0));

    session.step(&idle());
    assert!(session.projectiles.is_empty());
    assert!(session.enemies.is_empty());
}

#[test]
fn test_player_hit_is_reported_every_overlapping_frame() {
    let mut session = quiet_session();
    // A slow enemy parked on top of the player
    session
        .enemies
        .push(Enemy::new(session.player.x, session.player.y, 0.001));

    let mut hits = 0;
    for _ in 0..10 {
        hits += session
            .step(&idle())
            .iter()
            .filter(|event| **event == GameEvent::PlayerHit)
            .count();
    }
    assert_eq!(hits, 10);
    // The hit is a signal only: the enemy survives and so does the player
    assert_eq!(session.enemies.len(), 1);
}

#[test]
fn test_bullet_meets_enemy_head_on() {
    let mut session = quiet_session();

    // Player at the left edge, one enemy entering from the right at speed 2
    session.player.x = 0.0;
    session.player.facing = Facing::Right;
    session.projectiles.push(session.player.shoot());
    session.enemies.push(Enemy::new(
        WIDTH,
        session.bounds.ground_y() - Enemy::HEIGHT,
        2.0,
    ));

    // Closing speed 9/frame over the gap between bullet front and enemy
    let gap = WIDTH - Player::WIDTH - Projectile::WIDTH;
    let expected_frames = (gap / (Projectile::SPEED + 2.0)).ceil() as u32;

    let mut frame = 0;
    while !session.enemies.is_empty() || !session.projectiles.is_empty() {
        assert_eq!(
            session.enemies.len(),
            session.projectiles.len(),
            "bullet and enemy must be removed in the same frame"
        );
        session.step(&idle());
        frame += 1;
        assert!(frame <= expected_frames, "collision happened too late");
    }
    assert_eq!(frame, expected_frames);
}

#[test]
fn test_restart_after_resize_produces_fresh_world() {
    let mut session = session();
    let fire = FrameInput {
        fire: true,
        ..FrameInput::default()
    };

    // Run long enough to spawn enemies and leave bullets in flight
    for _ in 0..300 {
        session.step(&fire);
    }
    assert!(!session.enemies.is_empty() || !session.projectiles.is_empty());

    session.resize(1200.0, 400.0);
    assert!(session.enemies.is_empty());
    assert!(session.projectiles.is_empty());
    assert_eq!(session.spawner.timer, 0);
    assert_eq!(session.player.y, Player::floor_y(&session.bounds));
    assert_eq!(session.player.x, 600.0 - Player::WIDTH / 2.0);
}
