//! Core game state and logic (no windowing, no asset I/O).
//!
//! Re-exports:
//! - `geometry`: distance, facing tests, line-intersection solvers
//! - `level`: text-grid loading into tiles
//! - `wall`: exposed edges and tagged collision responses
//! - `entity` / `player`: movables with capability components
//! - `weapon` / `projectile`: combat model
//! - `collision`: 8-neighborhood velocity clamping
//! - `ai`: behavior driver
//! - `input`: input-snapshot consumption
//! - `game`: per-tick orchestration

pub mod ai;
pub mod collision;
pub mod entity;
pub mod game;
pub mod geometry;
pub mod input;
pub mod level;
pub mod player;
pub mod projectile;
pub mod wall;
pub mod weapon;
