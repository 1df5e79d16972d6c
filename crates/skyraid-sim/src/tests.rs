//! Tests for the simulation engine: scoring, collision resolution, level
//! progression, timed player states, and the phase state machine.

use skyraid_core::commands::PlayerCommand;
use skyraid_core::components::{Bullet, Enemy, Explosion, ExplosionStyle, PowerUp};
use skyraid_core::constants::*;
use skyraid_core::enums::*;
use skyraid_core::events::AudioEvent;
use skyraid_core::types::{Position, Size, Velocity};

use crate::engine::{SimConfig, SimulationEngine};
use crate::score::ScoreState;
use crate::systems::movement;
use crate::world_setup;

fn new_engine() -> SimulationEngine {
    SimulationEngine::new(SimConfig::default())
}

fn count_bullets(engine: &SimulationEngine, owner: BulletOwner) -> usize {
    let mut query = engine.world().query::<&Bullet>();
    query.iter().filter(|(_, b)| b.owner == owner).count()
}

fn visible_enemy_count(engine: &SimulationEngine) -> usize {
    let mut query = engine.world().query::<&Enemy>();
    query.iter().filter(|(_, e)| e.visible).count()
}

fn first_visible_enemy(engine: &SimulationEngine) -> Option<(Position, Size)> {
    let mut query = engine.world().query::<(&Enemy, &Position, &Size)>();
    query
        .iter()
        .filter(|(_, (enemy, _, _))| enemy.visible)
        .map(|(_, (_, pos, size))| (*pos, *size))
        .next()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });

    for tick in 0..500 {
        // Identical command streams: start firing once the round is live.
        if tick == 210 {
            engine_a.queue_command(PlayerCommand::StartFiring);
            engine_b.queue_command(PlayerCommand::StartFiring);
        }
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

// ---- Countdown ----

#[test]
fn test_countdown_reaches_running_after_three_seconds() {
    let mut engine = new_engine();

    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Countdown);
    assert_eq!(snap.countdown, COUNTDOWN_START);

    for _ in 0..201 {
        engine.tick();
    }
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Running);
    assert_eq!(snap.countdown, 0);
}

#[test]
fn test_countdown_suppresses_all_firing() {
    let mut engine = new_engine();

    // StartFiring is ignored while the countdown runs.
    engine.queue_command(PlayerCommand::StartFiring);
    for _ in 0..100 {
        engine.tick();
    }
    assert_eq!(count_bullets(&engine, BulletOwner::Player), 0);
    assert_eq!(count_bullets(&engine, BulletOwner::Enemy), 0);
    assert_eq!(engine.phase(), GamePhase::Countdown);

    // Entities still advance: the formation has moved off its spawn column.
    let (pos, _) = first_visible_enemy(&engine).unwrap();
    let expected_spawn_x = 0.1 * SCREEN_WIDTH - FORMATION_SLOT_WIDTH / 2.0;
    assert!(
        (pos.x - expected_spawn_x).abs() > 10.0,
        "Formation should drift during the countdown"
    );
}

// ---- Pause ----

#[test]
fn test_pause_freezes_clock_and_deadlines() {
    let mut engine = new_engine();
    engine.skip_countdown();

    for _ in 0..10 {
        engine.tick();
    }
    let now = engine.session().now();
    engine.session_mut().player.activate_shield(now);
    let shield_until = engine.session().player.shield_until;

    engine.queue_command(PlayerCommand::TogglePause);
    engine.tick();
    assert_eq!(engine.phase(), GamePhase::Paused);

    let paused_tick = engine.session().time.tick;
    for _ in 0..500 {
        engine.tick();
    }
    assert_eq!(engine.session().time.tick, paused_tick);
    assert_eq!(engine.session().player.shield_until, shield_until);
    assert!(engine.session().player.shield_active);

    engine.queue_command(PlayerCommand::TogglePause);
    engine.tick();
    assert_eq!(engine.phase(), GamePhase::Running);
    assert!(
        engine.session().player.shield_active,
        "Shield duration must survive a pause intact"
    );
}

#[test]
fn test_toggle_pause_ignored_when_not_running() {
    let mut engine = new_engine();
    engine.queue_command(PlayerCommand::TogglePause);
    engine.tick();
    assert_eq!(engine.phase(), GamePhase::Countdown);

    engine.session_mut().end_game(GameOutcome::Lost);
    engine.queue_command(PlayerCommand::TogglePause);
    engine.tick();
    assert_eq!(engine.phase(), GamePhase::GameOver);
}

// ---- Scoring / combo ----

#[test]
fn test_combo_law() {
    let mut score = ScoreState::default();
    assert_eq!(score.register_kill(1, 0.0), 1);
    score.register_kill(1, 0.5);
    assert_eq!(score.combo, 2);
    score.register_kill(1, 0.9);
    assert_eq!(score.combo, 3);

    // A gap over one second resets the multiplier.
    score.register_kill(1, 2.5);
    assert_eq!(score.combo, 1);
}

#[test]
fn test_score_accumulation() {
    let mut score = ScoreState::default();
    score.register_kill(1, 0.0);
    score.register_kill(1, 0.5);
    score.register_kill(1, 0.9);
    assert_eq!(score.score, 1 + 2 + 3);
}

#[test]
fn test_boss_kill_bonus_is_combo_multiplied() {
    let mut score = ScoreState::default();
    score.register_kill(1, 0.0);
    let awarded = score.register_kill(BOSS_KILL_BONUS, 0.4);
    assert_eq!(awarded, 200, "Boss bonus at combo 2 = 100 * 2");
    assert_eq!(score.score, 201);
}

// ---- Player hits, invulnerability, shield ----

#[test]
fn test_invulnerability_blocks_enemy_bullets() {
    let mut engine = new_engine();
    engine.skip_countdown();

    let now = engine.session().now();
    engine.session_mut().player.grant_invulnerability(now);
    engine.spawn_test_bullet(BulletKind::Slug, 380.0, 710.0);

    let snap = engine.tick();
    assert_eq!(snap.lives, STARTING_LIVES);
    assert_eq!(
        count_bullets(&engine, BulletOwner::Enemy),
        1,
        "The check is skipped entirely: the bullet passes through"
    );
}

#[test]
fn test_enemy_bullet_hit_costs_a_life_and_grants_invulnerability() {
    let mut engine = new_engine();
    engine.skip_countdown();

    engine.spawn_test_bullet(BulletKind::Slug, 380.0, 710.0);
    let snap = engine.tick();

    assert_eq!(snap.lives, STARTING_LIVES - 1);
    assert!(snap.player.invulnerable);
    assert_eq!(
        count_bullets(&engine, BulletOwner::Enemy),
        0,
        "The bullet is consumed by the hit"
    );
}

#[test]
fn test_bullet_overlapping_bounding_box_but_not_wedge_misses() {
    let mut engine = new_engine();
    engine.skip_countdown();

    // The wedge points right from x=370: at its top-right the bounding box
    // is empty space. x=415 overlaps the box but never the triangle.
    engine.spawn_test_bullet(BulletKind::Slug, 415.0, 700.0);
    let snap = engine.tick();

    assert_eq!(snap.lives, STARTING_LIVES);
    assert_eq!(count_bullets(&engine, BulletOwner::Enemy), 1);
}

#[test]
fn test_shield_absorbs_exactly_one_hit() {
    let mut engine = new_engine();
    engine.skip_countdown();

    let now = engine.session().now();
    engine.session_mut().player.activate_shield(now);

    // Two overlapping bullets arrive in the same tick. The first consumes
    // the shield without granting invulnerability; the second costs a life.
    engine.spawn_test_bullet(BulletKind::Slug, 380.0, 710.0);
    engine.spawn_test_bullet(BulletKind::Slug, 382.0, 712.0);

    let snap = engine.tick();
    assert!(!snap.player.shield_active);
    assert_eq!(snap.lives, STARTING_LIVES - 1);
    assert!(snap.player.invulnerable);
}

#[test]
fn test_zero_lives_is_game_over_loss() {
    let mut engine = new_engine();
    engine.skip_countdown();
    engine.session_mut().lives = 1;

    engine.spawn_test_bullet(BulletKind::Slug, 380.0, 710.0);
    let snap = engine.tick();

    assert_eq!(snap.lives, 0);
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert_eq!(snap.outcome, Some(GameOutcome::Lost));
}

// ---- Player bullets vs enemies ----

#[test]
fn test_player_bullet_kill() {
    let mut engine = new_engine();
    engine.skip_countdown();

    let before = visible_enemy_count(&engine);
    let (pos, size) = first_visible_enemy(&engine).unwrap();
    engine.spawn_test_bullet(
        BulletKind::Standard,
        pos.x + size.w / 2.0,
        pos.y + size.h / 2.0,
    );

    let snap = engine.tick();
    assert_eq!(visible_enemy_count(&engine), before - 1);
    assert_eq!(snap.score, 1);
    assert_eq!(snap.combo, 1);
    assert_eq!(count_bullets(&engine, BulletOwner::Player), 0);
    assert_eq!(snap.explosions.len(), 1, "Kill spawns an explosion");
}

#[test]
fn test_one_bullet_resolves_at_most_one_hit() {
    let mut engine = new_engine();
    engine.skip_countdown();

    // Stage two planes directly on top of each other.
    world_setup::spawn_plane(engine.world_mut(), EnemyKind::Scout, Position::new(100.0, 400.0));
    world_setup::spawn_plane(engine.world_mut(), EnemyKind::Scout, Position::new(105.0, 405.0));
    let before = visible_enemy_count(&engine);

    engine.spawn_test_bullet(BulletKind::Standard, 110.0, 415.0);
    engine.tick();

    assert_eq!(
        visible_enemy_count(&engine),
        before - 1,
        "One bullet destroys exactly one plane"
    );
}

#[test]
fn test_invisible_planes_are_excluded_from_collision() {
    let mut engine = new_engine();
    engine.skip_countdown();

    let entity = world_setup::spawn_plane(
        engine.world_mut(),
        EnemyKind::Scout,
        Position::new(100.0, 400.0),
    );
    engine
        .world_mut()
        .get::<&mut Enemy>(entity)
        .unwrap()
        .visible = false;

    engine.spawn_test_bullet(BulletKind::Standard, 110.0, 415.0);
    let snap = engine.tick();

    assert_eq!(snap.score, 0);
    assert_eq!(
        count_bullets(&engine, BulletOwner::Player),
        1,
        "The bullet flies on through a destroyed plane"
    );
    assert!(
        snap.enemies.iter().all(|e| e.position.y != 400.0),
        "Invisible planes stay out of the snapshot"
    );
}

// ---- Boss fights ----

#[test]
fn test_boss_defeat_threshold() {
    let mut engine = new_engine();
    engine.load_level_for_test(4);
    engine.skip_countdown();

    // Level 4 opens with a 200hp boss at the top; 5 damage per hit means
    // exactly 40 hits to bring it down.
    for hit in 1..=40 {
        engine.spawn_test_bullet(BulletKind::Standard, 450.0, 110.0);
        let snap = engine.tick();

        let boss = snap.enemies.iter().find(|e| e.kind == EnemyKind::Dreadnought);
        if hit < 40 {
            let boss = boss.expect("Boss survives the first 39 hits");
            assert_eq!(boss.health, Some(200 - hit * 5));
        } else {
            assert!(boss.is_none(), "The 40th hit destroys the boss");
            assert_eq!(snap.score, BOSS_KILL_BONUS, "Boss kill at combo 1");
        }
    }
    assert_eq!(engine.session().score.kills_this_level, 1);
}

// ---- Level progression ----

#[test]
fn test_level_transition_rebuilds_formation() {
    let mut engine = new_engine();
    engine.skip_countdown();
    engine.session_mut().score.power_up_dropped = true;

    let target = engine.session().score.level_target;
    engine.session_mut().score.kills_this_level = target;
    let snap = engine.tick();

    assert_eq!(snap.level, 2);
    assert_eq!(engine.session().score.kills_this_level, 0);
    assert!(!engine.session().score.power_up_dropped);
    // Level 2's layout: 7 + 5 + 5 + 4 + 4 planes.
    assert_eq!(visible_enemy_count(&engine), 25);
    assert_eq!(engine.session().score.level_target, 25);
}

#[test]
fn test_final_level_clear_is_game_over_win() {
    let mut engine = new_engine();
    engine.load_level_for_test(6);
    engine.skip_countdown();

    let target = engine.session().score.level_target;
    engine.session_mut().score.kills_this_level = target;
    let snap = engine.tick();

    assert_eq!(snap.phase, GamePhase::GameOver);
    assert_eq!(snap.outcome, Some(GameOutcome::Won));
}

#[test]
fn test_invalid_level_request_is_ignored() {
    let mut engine = new_engine();
    let before = visible_enemy_count(&engine);

    engine.load_level_for_test(99);

    assert_eq!(engine.session().level, 1);
    assert_eq!(visible_enemy_count(&engine), before);
}

// ---- Terminal state ----

#[test]
fn test_game_over_ticks_are_no_ops() {
    let mut engine = new_engine();
    engine.skip_countdown();
    engine.session_mut().end_game(GameOutcome::Lost);

    let baseline = engine.tick();
    for _ in 0..10 {
        let snap = engine.tick();
        assert_eq!(snap.score, baseline.score);
        assert_eq!(snap.lives, baseline.lives);
        assert_eq!(snap.level, baseline.level);
        assert_eq!(snap.time.tick, baseline.time.tick);
    }
}

#[test]
fn test_reset_leaves_game_over() {
    let mut engine = new_engine();
    engine.skip_countdown();
    engine.session_mut().end_game(GameOutcome::Lost);
    engine.tick();

    engine.reset();
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Countdown);
    assert_eq!(snap.lives, STARTING_LIVES);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.level, 1);
    assert_eq!(visible_enemy_count(&engine), 14);
}

// ---- Power-ups ----

#[test]
fn test_power_up_single_drop_per_level() {
    let mut engine = new_engine();
    engine.skip_countdown();

    // Kill 13 of the 14 planes (staying inside the level) and count drop
    // events. The per-level flag caps them at one regardless of the rolls.
    let mut spawn_events = 0;
    while engine.session().score.kills_this_level < 13 {
        let (pos, size) = first_visible_enemy(&engine).unwrap();
        engine.spawn_test_bullet(
            BulletKind::Standard,
            pos.x + size.w / 2.0,
            pos.y + size.h / 2.0,
        );
        let snap = engine.tick();
        spawn_events += snap
            .audio_events
            .iter()
            .filter(|e| matches!(e, AudioEvent::PowerUpSpawned { .. }))
            .count();
    }

    assert!(
        spawn_events <= 1,
        "At most one power-up may drop per level, saw {spawn_events}"
    );
}

#[test]
fn test_extra_life_pickup() {
    let mut engine = new_engine();
    engine.skip_countdown();

    world_setup::spawn_power_up(
        engine.world_mut(),
        PowerUpKind::ExtraLife,
        Position::new(370.0, 700.0),
    );
    let snap = engine.tick();

    assert_eq!(snap.lives, STARTING_LIVES + 1);
    let mut query = engine.world().query::<&PowerUp>();
    assert_eq!(query.iter().count(), 0, "Pickup consumes the entity");
}

#[test]
fn test_rapid_fire_triple_shot() {
    let mut engine = new_engine();
    engine.skip_countdown();
    world_setup::clear_formation(engine.world_mut());

    let now = engine.session().now();
    engine.session_mut().apply_power_up(PowerUpKind::RapidFire);
    assert!(engine.session().player.rapid_fire_active(now));

    engine.queue_command(PlayerCommand::StartFiring);
    for _ in 0..14 {
        engine.tick();
    }
    assert_eq!(
        count_bullets(&engine, BulletOwner::Player),
        3,
        "One boosted trigger releases center + two angled shots"
    );

    // The boost reverts on its sim-clock deadline.
    engine.queue_command(PlayerCommand::StopFiring);
    for _ in 0..270 {
        engine.tick();
    }
    let snap = engine.tick();
    assert!(!snap.player.rapid_fire);
}

#[test]
fn test_single_shot_without_boost() {
    let mut engine = new_engine();
    engine.skip_countdown();
    world_setup::clear_formation(engine.world_mut());

    engine.queue_command(PlayerCommand::StartFiring);
    for _ in 0..14 {
        engine.tick();
    }
    assert_eq!(count_bullets(&engine, BulletOwner::Player), 1);
}

#[test]
fn test_shield_expires_on_sim_clock() {
    let mut engine = new_engine();
    engine.skip_countdown();
    world_setup::clear_formation(engine.world_mut());

    engine.session_mut().apply_power_up(PowerUpKind::Shield);
    engine.tick();
    assert!(engine.session().player.shield_active);

    // 5 seconds at 15ms per tick.
    for _ in 0..340 {
        engine.tick();
    }
    assert!(
        !engine.session().player.shield_active,
        "Unconsumed shield deactivates on expiry"
    );
}

#[test]
fn test_power_up_falls_off_screen() {
    let mut engine = new_engine();
    engine.skip_countdown();

    world_setup::spawn_power_up(
        engine.world_mut(),
        PowerUpKind::Shield,
        Position::new(100.0, SCREEN_HEIGHT - 2.0),
    );
    for _ in 0..3 {
        engine.tick();
    }
    let mut query = engine.world().query::<&PowerUp>();
    assert_eq!(query.iter().count(), 0);
}

// ---- Formation movement ----

#[test]
fn test_formation_flips_and_descends_at_edge() {
    let mut engine = new_engine();
    engine.skip_countdown();
    assert_eq!(engine.session().formation_direction, 1.0);

    let start_rows: Vec<(EnemyKind, f32)> = {
        let mut query = engine.world().query::<(&Enemy, &Position)>();
        query
            .iter()
            .map(|(_, (enemy, pos))| (enemy.kind, pos.y))
            .collect()
    };

    // The rightmost level-1 plane spawns 60px from the edge; at 1px per
    // 30ms step the flip lands within ~150 ticks.
    let mut ticks = 0;
    while engine.session().formation_direction > 0.0 {
        engine.tick();
        ticks += 1;
        assert!(ticks < 300, "Formation never reached the screen edge");
    }

    let after: Vec<(EnemyKind, f32)> = {
        let mut query = engine.world().query::<(&Enemy, &Position)>();
        query
            .iter()
            .map(|(_, (enemy, pos))| (enemy.kind, pos.y))
            .collect()
    };
    for ((kind, y0), (_, y1)) in start_rows.iter().zip(after.iter()) {
        assert!(
            (y1 - y0 - kind.size().h / 2.0).abs() < 1e-3,
            "Each plane drops by half its own height on the flip"
        );
    }
}

#[test]
fn test_formation_reaching_player_row_triggers_hit() {
    let mut engine = new_engine();
    engine.skip_countdown();
    world_setup::clear_formation(engine.world_mut());

    // One plane a step from the right edge and a half-height drop above
    // the player's row: the next flip breaches it.
    world_setup::spawn_plane(
        engine.world_mut(),
        EnemyKind::Scout,
        Position::new(SCREEN_WIDTH - 40.0, 670.0),
    );

    for _ in 0..4 {
        engine.tick();
    }
    assert_eq!(engine.session().lives, STARTING_LIVES - 1);
}

// ---- Enemy fire ----

#[test]
fn test_enemy_volley_cadence() {
    let mut engine = new_engine();
    engine.skip_countdown();

    // No volley before the 3-second cadence elapses.
    for _ in 0..150 {
        engine.tick();
    }
    assert_eq!(count_bullets(&engine, BulletOwner::Enemy), 0);

    for _ in 0..55 {
        engine.tick();
    }
    assert_eq!(
        count_bullets(&engine, BulletOwner::Enemy),
        14,
        "Every visible plane fires exactly one bullet per volley"
    );
}

// ---- Movement / cleanup ----

#[test]
fn test_movement_integration() {
    let mut world = hecs::World::new();
    world.spawn((Position::new(0.0, 100.0), Velocity::new(0.0, -5.0)));

    for _ in 0..10 {
        movement::run(&mut world);
    }

    let mut query = world.query::<&Position>();
    let (_, pos) = query.iter().next().unwrap();
    assert!((pos.y - 50.0).abs() < 1e-6);
}

#[test]
fn test_off_screen_bullets_are_removed() {
    let mut engine = new_engine();
    engine.skip_countdown();

    engine.spawn_test_bullet(BulletKind::Standard, 100.0, 3.0);
    engine.tick();
    assert_eq!(
        count_bullets(&engine, BulletOwner::Player),
        0,
        "A bullet above the top edge is compacted away"
    );
}

#[test]
fn test_frame_sequence_explosion_advances_and_retires() {
    let mut engine = new_engine();
    engine.skip_countdown();
    world_setup::clear_formation(engine.world_mut());

    let now = engine.session().now();
    world_setup::spawn_explosion_styled(
        engine.world_mut(),
        Position::new(100.0, 100.0),
        ExplosionStyle::Frames {
            frame_count: EXPLOSION_FRAME_COUNT,
            frame_delay_secs: EXPLOSION_FRAME_DELAY_SECS,
        },
        now,
    );

    let snap = engine.tick();
    assert_eq!(snap.explosions.len(), 1);
    assert_eq!(snap.explosions[0].frame, Some(0));

    // 6 frames at 50ms each land well inside 30 ticks.
    for _ in 0..30 {
        engine.tick();
    }
    let mut query = engine.world().query::<&Explosion>();
    assert_eq!(query.iter().count(), 0);
}

#[test]
fn test_explosion_retires_after_flash_duration() {
    let mut engine = new_engine();
    engine.skip_countdown();

    let (pos, size) = first_visible_enemy(&engine).unwrap();
    engine.spawn_test_bullet(
        BulletKind::Standard,
        pos.x + size.w / 2.0,
        pos.y + size.h / 2.0,
    );
    let snap = engine.tick();
    assert_eq!(snap.explosions.len(), 1);

    // 400ms at 15ms per tick.
    for _ in 0..28 {
        engine.tick();
    }
    let mut query = engine.world().query::<&Explosion>();
    assert_eq!(query.iter().count(), 0);
}

// ---- Player movement / facing ----

#[test]
fn test_move_player_is_clamped() {
    let mut engine = new_engine();
    engine.skip_countdown();

    engine.queue_command(PlayerCommand::MovePlayer { x: -50.0 });
    let snap = engine.tick();
    assert_eq!(snap.player.position.x, 0.0);

    engine.queue_command(PlayerCommand::MovePlayer { x: 10_000.0 });
    let snap = engine.tick();
    assert_eq!(snap.player.position.x, SCREEN_WIDTH - PLAYER_SIZE);
}

#[test]
fn test_facing_follows_movement_then_reverts() {
    let mut engine = new_engine();
    engine.skip_countdown();

    engine.queue_command(PlayerCommand::MovePlayer { x: 500.0 });
    let snap = engine.tick();
    assert_eq!(snap.player.facing, Facing::Right);

    engine.queue_command(PlayerCommand::MovePlayer { x: 200.0 });
    let snap = engine.tick();
    assert_eq!(snap.player.facing, Facing::Left);

    // 300ms without movement reverts to neutral.
    for _ in 0..22 {
        engine.tick();
    }
    let snap = engine.tick();
    assert_eq!(snap.player.facing, Facing::Neutral);
}

#[test]
fn test_queued_commands_apply_in_order() {
    let mut engine = new_engine();
    engine.skip_countdown();

    engine.queue_commands(vec![
        PlayerCommand::MovePlayer { x: 100.0 },
        PlayerCommand::MovePlayer { x: 300.0 },
    ]);
    let snap = engine.tick();
    assert_eq!(snap.player.position.x, 300.0);
    assert_eq!(snap.player.facing, Facing::Right);
}

#[test]
fn test_move_player_ignored_while_paused() {
    let mut engine = new_engine();
    engine.skip_countdown();
    engine.tick();

    engine.queue_command(PlayerCommand::TogglePause);
    engine.tick();

    let x_before = engine.session().player.position.x;
    engine.queue_command(PlayerCommand::MovePlayer { x: 10.0 });
    engine.tick();
    assert_eq!(engine.session().player.position.x, x_before);
}

// ---- Snapshot ----

#[test]
fn test_snapshot_reflects_level_one_formation() {
    let mut engine = new_engine();
    let snap = engine.tick();

    assert_eq!(snap.level, 1);
    assert_eq!(snap.max_level, 6);
    assert_eq!(snap.lives, STARTING_LIVES);
    assert_eq!(snap.enemies.len(), 14);
    assert!(snap.enemies.iter().all(|e| e.health.is_none()));

    // Rows alternate Scout/Raider on level 1, top row first.
    assert_eq!(snap.enemies[0].kind, EnemyKind::Scout);
    let second_row_y = snap.enemies[5].position.y;
    assert!(second_row_y > snap.enemies[0].position.y);
}

#[test]
fn test_snapshot_exposes_boss_health() {
    let mut engine = new_engine();
    engine.load_level_for_test(6);
    let snap = engine.tick();

    let boss = snap
        .enemies
        .iter()
        .find(|e| e.kind == EnemyKind::Leviathan)
        .expect("Level 6 opens with the final boss");
    assert_eq!(boss.health, Some(300));
    assert_eq!(boss.max_health, Some(300));
}
