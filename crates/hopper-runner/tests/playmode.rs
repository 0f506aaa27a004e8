//! Play-mode style integration tests
//!
//! These drive a simulated keyboard against the built-in sample level and
//! assert on the player's motion and the session outcome, mirroring how
//! the game plays: movement, full and interrupted jumps, deaths from
//! enemies and map bounds, stomps, token collection, reaching the goal,
//! and pausing.

use hopper_mechanics::{Aabb, GamePhase, KeyCode, KeyboardEvent, Vec2};
use hopper_runner::{InputScript, LevelConfig, Session};

const SPAWN_Y: f32 = 0.5;

fn sample_session() -> Session {
    Session::new(LevelConfig::sample().build())
}

fn run(session: &mut Session, ticks: u64) {
    for _ in 0..ticks {
        session.step().unwrap();
    }
}

fn seconds(s: f32) -> u64 {
    (s * 60.0) as u64
}

fn press(session: &mut Session, key: KeyCode) {
    session.handle_key(KeyboardEvent::press(key)).unwrap();
}

fn release(session: &mut Session, key: KeyCode) {
    session.handle_key(KeyboardEvent::release(key)).unwrap();
}

fn player_pos(session: &Session) -> Vec2 {
    session.world().scene.player.position
}

fn assert_approx(a: Vec2, b: Vec2, tolerance: f32) {
    assert!(
        (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance,
        "{a:?} not within {tolerance} of {b:?}"
    );
}

// ========== MOVEMENT TESTS ==========

#[test]
fn test_move_both_directions() {
    let mut session = sample_session();
    let orig = player_pos(&session);

    press(&mut session, KeyCode::Char('d'));
    run(&mut session, seconds(0.5));
    release(&mut session, KeyCode::Char('d'));
    let forward = player_pos(&session);
    assert!(forward.x > orig.x);

    press(&mut session, KeyCode::Char('a'));
    run(&mut session, seconds(0.5));
    release(&mut session, KeyCode::Char('a'));
    let backward = player_pos(&session);
    assert!(backward.x < forward.x);
}

// ========== JUMP TESTS ==========

#[test]
fn test_jump_full_height() {
    let mut session = sample_session();
    let full_jump_time = 0.65;
    let full_jump_height = 1.75;

    press(&mut session, KeyCode::Space);
    run(&mut session, seconds(full_jump_time));
    release(&mut session, KeyCode::Space);

    assert!(player_pos(&session).y > SPAWN_Y + full_jump_height);
}

#[test]
fn test_interrupt_jump_caps_height() {
    let mut session = sample_session();
    let interrupt_time = 0.15;
    let short_jump_height = 1.0;

    press(&mut session, KeyCode::Space);
    run(&mut session, seconds(interrupt_time));
    release(&mut session, KeyCode::Space);

    let release_y = player_pos(&session).y;
    assert!(release_y < SPAWN_Y + short_jump_height);

    // the jump overflows for a moment after the release
    run(&mut session, 3);
    assert!(player_pos(&session).y > release_y);

    // wait until the drop starts
    let mut last_y = player_pos(&session).y;
    let mut dropping = false;
    for _ in 0..120 {
        run(&mut session, 1);
        let y = player_pos(&session).y;
        if y < last_y {
            dropping = true;
            break;
        }
        last_y = y;
    }
    assert!(dropping);

    // position gets lower every step until the player is back on ground
    for _ in 0..240 {
        let y = player_pos(&session).y;
        if (y - SPAWN_Y).abs() < 1e-3 {
            return;
        }
        run(&mut session, 1);
        assert!(player_pos(&session).y < y);
    }
    panic!("player never landed");
}

#[test]
fn test_no_double_jump() {
    let mut session = sample_session();
    let double_jump_height = 2.5;

    press(&mut session, KeyCode::Space);
    run(&mut session, seconds(0.5));
    release(&mut session, KeyCode::Space);
    // instantly try to jump again mid-air
    press(&mut session, KeyCode::Space);

    for _ in 0..240 {
        run(&mut session, 1);
        assert!(player_pos(&session).y < SPAWN_Y + double_jump_height);
        if player_pos(&session).y <= SPAWN_Y {
            break;
        }
    }
    assert!(session.world().scene.player.is_grounded());
}

// ========== DEATH TESTS ==========

#[test]
fn test_killed_by_enemy_respawns_at_start() {
    let mut session = sample_session();
    let orig = player_pos(&session);

    // walk right into the patrolling enemy
    press(&mut session, KeyCode::Char('d'));
    run(&mut session, seconds(3.0));
    release(&mut session, KeyCode::Char('d'));

    // wait out the respawn countdown
    run(&mut session, seconds(3.0));

    assert_approx(player_pos(&session), orig, 0.01);
    assert!(session.world().is_playing());
    assert!(session.world().scene.player.control_enabled);
}

#[test]
fn test_killed_by_map_bounds_respawns_at_start() {
    let mut session = sample_session();
    let orig = player_pos(&session);

    // no enemies in the way for this one
    session.world_mut().scene.enemies.clear();

    // run off the edge of the first platform into the pit
    press(&mut session, KeyCode::Char('d'));
    run(&mut session, seconds(4.5));
    release(&mut session, KeyCode::Char('d'));

    run(&mut session, seconds(4.5));

    assert_approx(player_pos(&session), orig, 0.01);
    assert!(session.world().is_playing());
}

// ========== OTHER TESTS ==========

#[test]
fn test_stomp_kills_enemy() {
    let mut session = sample_session();
    let orig = player_pos(&session);
    let out_of_view_y = -4.0;

    // stop the enemy so it stays still under the player
    session.world_mut().scene.enemies[0].mover = None;

    press(&mut session, KeyCode::Space);
    // half way through the jump, move the enemy to the player's start
    run(&mut session, seconds(0.5));
    session.world_mut().scene.enemies[0].position = orig;
    run(&mut session, seconds(0.5));
    release(&mut session, KeyCode::Space);

    // the enemy's collider is gone and it drops out of view
    run(&mut session, seconds(2.0));
    assert!(!session.world().scene.enemies[0].alive);
    assert!(session.world().scene.enemies[0].position.y < out_of_view_y);

    // the stomp did not hurt the player
    assert!(session.world().scene.player.health.is_alive());
    assert!(session.world().is_playing());
}

#[test]
fn test_collect_token() {
    let mut session = sample_session();
    let orig = player_pos(&session);

    // move the token right above the player
    session.world_mut().scene.tokens[0].position = orig + Vec2::new(0.0, 1.0);

    press(&mut session, KeyCode::Space);
    run(&mut session, seconds(1.0));
    release(&mut session, KeyCode::Space);

    assert!(session.world().scene.tokens[0].collected);
    assert_eq!(session.world().scene.tokens_collected, 1);
}

#[test]
fn test_reach_goal_locks_controls() {
    let mut session = sample_session();
    let orig = player_pos(&session);

    // move the goal zone to the left of the player
    session.world_mut().scene.victory_zones[0].bounds =
        Aabb::from_size(orig + Vec2::new(-1.0, 0.5), Vec2::new(1.0, 2.0));

    press(&mut session, KeyCode::Char('a'));
    run(&mut session, seconds(1.0));
    release(&mut session, KeyCode::Char('a'));

    assert_eq!(session.world().phase, GamePhase::Victory);
    let end = player_pos(&session);

    // can't move right
    press(&mut session, KeyCode::Char('d'));
    run(&mut session, seconds(1.0));
    release(&mut session, KeyCode::Char('d'));
    assert_approx(player_pos(&session), end, 0.01);

    // can't move left
    press(&mut session, KeyCode::Char('a'));
    run(&mut session, seconds(1.0));
    release(&mut session, KeyCode::Char('a'));
    assert_approx(player_pos(&session), end, 0.01);

    // can't jump
    press(&mut session, KeyCode::Space);
    run(&mut session, seconds(1.0));
    release(&mut session, KeyCode::Space);
    assert_approx(player_pos(&session), end, 0.01);
}

#[test]
fn test_pause_freezes_and_resumes() {
    let mut session = sample_session();
    let orig = player_pos(&session);

    // jump, then pause mid-air
    press(&mut session, KeyCode::Space);
    run(&mut session, seconds(0.5));
    release(&mut session, KeyCode::Space);
    let jump_pos = player_pos(&session);

    press(&mut session, KeyCode::Escape);
    release(&mut session, KeyCode::Escape);
    run(&mut session, seconds(1.0));
    assert_eq!(player_pos(&session), jump_pos);

    // unpause and drop back to the ground
    press(&mut session, KeyCode::Escape);
    release(&mut session, KeyCode::Escape);
    run(&mut session, seconds(2.0));
    assert_approx(player_pos(&session), orig, 0.01);
}

#[test]
fn test_scripted_run_clears_the_level() {
    let mut session = sample_session();
    session
        .run_script(&InputScript::sample(), seconds(8.0))
        .unwrap();
    assert_eq!(session.world().phase, GamePhase::Victory);
    assert!(session.events_executed() > 0);
}
