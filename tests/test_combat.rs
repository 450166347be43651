use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::Vector2;

use gridcast::core::ai;
use gridcast::core::entity::EnemyKind;
use gridcast::core::game::{Game, PLAYER_ID, Tick};
use gridcast::core::input::InputState;
use gridcast::core::level::Level;
use gridcast::core::projectile::{PROJECTILE_SPEED, Projectile};
use gridcast::core::weapon::Weapon;

// ── projectiles ──────────────────────────────────────────────────────────────

#[test]
fn projectile_travels_along_its_angle() {
    let mut p = Projectile::new(Vector2::new(100.0, 100.0), 0.0, 10, 99, 0);
    assert!(p.advance(0.25, 100));
    assert!((p.pos.x - (100.0 + PROJECTILE_SPEED * 0.25)).abs() < 1e-3);
    assert!((p.pos.y - 100.0).abs() < 1e-3);
}

#[test]
fn projectile_dies_at_its_decay_time() {
    let mut p = Projectile::new(Vector2::zero(), 0.0, 10, 99, 0);
    assert!(p.advance(0.016, 999));
    let x = p.pos.x;
    assert!(!p.advance(0.016, 1000));
    assert_eq!(p.pos.x, x); // a dead projectile does not move
}

#[test]
fn each_target_is_damaged_at_most_once() {
    let mut p = Projectile::new(Vector2::zero(), 0.0, 10, 99, 0);
    assert!(p.try_damage(5));
    assert!(!p.try_damage(5));
    assert!(p.try_damage(6));
}

#[test]
fn shooter_is_never_a_valid_target() {
    let mut p = Projectile::new(Vector2::zero(), 0.0, 10, 99, 0);
    assert!(!p.try_damage(99));
}

// ── weapons ──────────────────────────────────────────────────────────────────

#[test]
fn first_trigger_press_only_starts_the_cooldown() {
    let mut w = Weapon::laser_gun(PLAYER_ID);
    let pos = Vector2::new(10.0, 20.0);
    assert!(w.trigger(pos, 0.0, 0).is_none());
    assert!(w.trigger(pos, 0.0, 800).is_none()); // interval not yet exceeded
    let shot = w.trigger(pos, 0.0, 801).unwrap();
    // spawned just ahead of the muzzle
    assert!((shot.pos.x - 11.0).abs() < 1e-3);
    assert!((shot.pos.y - 20.0).abs() < 1e-3);
}

#[test]
fn holding_the_trigger_respects_the_fire_interval() {
    let mut w = Weapon::laser_gun(PLAYER_ID);
    let pos = Vector2::zero();
    assert!(w.trigger(pos, 0.0, 0).is_none());
    assert!(w.trigger(pos, 0.0, 801).is_some());
    assert!(w.trigger(pos, 0.0, 900).is_none());
    assert!(w.trigger(pos, 0.0, 1700).is_some());
}

#[test]
fn releasing_resets_the_activation() {
    let mut w = Weapon::laser_gun(PLAYER_ID);
    let pos = Vector2::zero();
    assert!(w.trigger(pos, 0.0, 0).is_none());
    assert!(w.trigger(pos, 0.0, 801).is_some());
    w.release();
    // re-activation starts a fresh cooldown instead of firing immediately
    assert!(w.trigger(pos, 0.0, 5000).is_none());
}

// ── behavior ─────────────────────────────────────────────────────────────────

#[test]
fn chaser_moves_toward_the_player_inside_the_band() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut entity = EnemyKind::Chaser.spawn(1, Vector2::new(125.0, 25.0));
    let player = Vector2::new(25.0, 25.0);
    let mut sink = Vec::new();
    ai::drive(&mut entity, player, &mut sink, &mut rng, 0.1, 0);
    assert!(entity.vel.x < 0.0);
    assert!((entity.vel.length() - entity.speed * 0.1).abs() < 1e-3);
}

#[test]
fn chaser_backs_off_when_crowding() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut entity = EnemyKind::Chaser.spawn(1, Vector2::new(60.0, 25.0));
    let player = Vector2::new(25.0, 25.0);
    let mut sink = Vec::new();
    ai::drive(&mut entity, player, &mut sink, &mut rng, 0.1, 0);
    assert!(entity.vel.x > 0.0); // away from the player
}

#[test]
fn far_entity_wanders_at_reduced_speed() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut entity = EnemyKind::Chaser.spawn(1, Vector2::new(800.0, 25.0));
    let player = Vector2::new(25.0, 25.0);
    let mut sink = Vec::new();
    ai::drive(&mut entity, player, &mut sink, &mut rng, 0.1, 0);
    assert!((entity.vel.length() - entity.speed * 0.2 * 0.1).abs() < 1e-3);
}

#[test]
fn gunner_fires_at_the_player_in_range() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut entity = EnemyKind::Gunner.spawn(2, Vector2::new(325.0, 25.0));
    let player = Vector2::new(25.0, 25.0);
    let mut sink = Vec::new();
    ai::drive(&mut entity, player, &mut sink, &mut rng, 0.016, 0);
    assert!(sink.is_empty()); // first press only activates
    ai::drive(&mut entity, player, &mut sink, &mut rng, 0.016, 1500);
    assert_eq!(sink.len(), 1);
    assert!(sink[0].dir.x < 0.0); // aimed at the player
    assert!(!sink[0].try_damage(2)); // never its own shooter
}

// ── game loop ────────────────────────────────────────────────────────────────

#[test]
fn game_spawns_entities_from_the_level() {
    let level = Level::parse("@0!\n$00").unwrap();
    let game = Game::new(level, 7);
    assert_eq!(game.entities.len(), 2);
    assert_eq!(game.player.pos, Vector2::new(25.0, 25.0));
    // ids are unique and distinct from the player's
    assert_ne!(game.entities[0].id, game.entities[1].id);
    assert!(game.entities.iter().all(|e| e.id != PLAYER_ID));
}

#[test]
fn lingering_projectile_damages_an_entity_only_once() {
    let level = Level::parse("@0!").unwrap();
    let mut game = Game::new(level, 7);
    let start_health = game.entities[0].health;
    let damage = 25;

    // drop a player shot right next to the chaser; with a tiny dt it stays
    // inside the hit radius over both ticks
    game.projectiles.push(Projectile::new(Vector2::new(120.0, 25.0), 0.0, damage, PLAYER_ID, 0));
    let input = InputState::default();
    assert_eq!(game.tick(&input, 0.001, 1), Tick::Continue);
    assert_eq!(game.entities[0].health, start_health - damage);
    assert_eq!(game.tick(&input, 0.001, 2), Tick::Continue);
    assert_eq!(game.entities[0].health, start_health - damage);
}

#[test]
fn entity_dropping_to_zero_health_is_removed() {
    let level = Level::parse("@0!").unwrap();
    let mut game = Game::new(level, 7);
    game.entities[0].health = 10;
    game.projectiles.push(Projectile::new(Vector2::new(120.0, 25.0), 0.0, 25, PLAYER_ID, 0));
    game.tick(&InputState::default(), 0.001, 1);
    assert!(game.entities.is_empty());
}

#[test]
fn player_death_ends_the_tick_with_a_signal() {
    let level = Level::parse("@0").unwrap();
    let mut game = Game::new(level, 7);
    game.player.health = 5;
    let near_player = Vector2::new(game.player.pos.x + 5.0, game.player.pos.y);
    game.projectiles.push(Projectile::new(near_player, 0.0, 25, 1, 0));
    assert_eq!(game.tick(&InputState::default(), 0.0001, 1), Tick::PlayerDied);
}

#[test]
fn projectiles_are_dropped_after_decay() {
    let level = Level::parse("@0").unwrap();
    let mut game = Game::new(level, 7);
    game.projectiles.push(Projectile::new(Vector2::new(90.0, 25.0), 0.0, 10, 1, 0));
    game.tick(&InputState::default(), 0.016, 500);
    assert_eq!(game.projectiles.len(), 1);
    game.tick(&InputState::default(), 0.016, 1500);
    assert!(game.projectiles.is_empty());
}
