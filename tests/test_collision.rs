use raylib::prelude::Vector2;

use gridcast::core::collision;
use gridcast::core::level::Level;

// Geometry reminder: tiles are 50 units, tile (i, j) center is
// ((i + 0.5) * 50, (j + 0.5) * 50), the margin band is 15 units deep.

#[test]
fn closing_on_an_exposed_side_zeroes_that_component() {
    // wall at (1, 0), movable below it inside the bottom band
    let level = Level::parse("0#0\n0@0").unwrap();
    let pos = Vector2::new(75.0, 55.0);
    let mut vel = Vector2::new(3.0, -2.0);
    collision::resolve(pos, &mut vel, &level);
    assert_eq!(vel, Vector2::new(3.0, 0.0));
}

#[test]
fn opening_velocity_is_untouched() {
    let level = Level::parse("0#0\n0@0").unwrap();
    let pos = Vector2::new(75.0, 55.0);
    let mut vel = Vector2::new(0.0, 3.0);
    collision::resolve(pos, &mut vel, &level);
    assert_eq!(vel, Vector2::new(0.0, 3.0));
}

#[test]
fn outside_the_margin_band_nothing_fires() {
    let level = Level::parse("0#0\n0@0").unwrap();
    let pos = Vector2::new(75.0, 70.0); // band ends at 65
    let mut vel = Vector2::new(0.0, -2.0);
    collision::resolve(pos, &mut vel, &level);
    assert_eq!(vel, Vector2::new(0.0, -2.0));
}

#[test]
fn head_on_corner_approach_is_fully_deflected() {
    // free-standing wall at (1, 1); movable closes on its top-left corner
    let level = Level::parse("000\n0#0\n00@").unwrap();
    let pos = Vector2::new(45.0, 45.0);
    let mut vel = Vector2::new(1.0, 1.0);
    collision::resolve(pos, &mut vel, &level);
    assert!(vel.x.abs() < 1e-5, "vel.x = {}", vel.x);
    assert!(vel.y.abs() < 1e-5, "vel.y = {}", vel.y);
}

#[test]
fn tangential_corner_velocity_passes_through() {
    let level = Level::parse("000\n0#0\n00@").unwrap();
    let pos = Vector2::new(45.0, 45.0);
    let mut vel = Vector2::new(1.0, -1.0); // no component along the corner normal
    collision::resolve(pos, &mut vel, &level);
    assert_eq!(vel, Vector2::new(1.0, -1.0));
}

#[test]
fn zero_velocity_at_a_corner_is_a_no_op() {
    let level = Level::parse("000\n0#0\n00@").unwrap();
    let pos = Vector2::new(45.0, 45.0);
    let mut vel = Vector2::zero();
    collision::resolve(pos, &mut vel, &level);
    assert_eq!(vel, Vector2::zero());
}

#[test]
fn two_walls_clamp_independently_in_a_pocket() {
    // enclosed cell: sliding diagonally into the top-left pocket kills both
    // components, one per neighboring wall
    let level = Level::parse("###\n#@#\n###").unwrap();
    let pos = Vector2::new(60.0, 60.0);
    let mut vel = Vector2::new(-2.0, -2.0);
    collision::resolve(pos, &mut vel, &level);
    assert_eq!(vel, Vector2::zero());
}

#[test]
fn off_map_position_resolves_without_panicking() {
    let level = Level::parse("0#0\n0@0").unwrap();
    let pos = Vector2::new(-10.0, -10.0);
    let mut vel = Vector2::new(1.0, 1.0);
    collision::resolve(pos, &mut vel, &level);
    assert_eq!(vel, Vector2::new(1.0, 1.0));
}
