//! Per-tick collision resolution against the 8-neighborhood.
//!
//! Runs after AI/input has set a pending velocity and before positions
//! integrate: every wall tile adjacent to the movable's current cell gets a
//! chance to clamp the velocity. Out-of-range neighbors are skipped, and the
//! response set has no defined order; simultaneous corrections each apply
//! independently.

use raylib::prelude::Vector2;

use crate::core::level::{Level, Tile};

const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Clamp `vel` for a movable at pending position `pos`. Mutates the velocity
/// only; integration happens at the caller.
pub fn resolve(pos: Vector2, vel: &mut Vector2, level: &Level) {
    let i = (pos.x / crate::BLOCK_SIZE).floor() as isize;
    let j = (pos.y / crate::BLOCK_SIZE).floor() as isize;

    for (di, dj) in NEIGHBORHOOD {
        if let Some(Tile::Wall(wall)) = level.tile_at(i + di, j + dj) {
            wall.resolve(pos, vel);
        }
    }
}
