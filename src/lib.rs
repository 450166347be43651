//! gridcast: a tile-grid raycasting engine with billboard entities,
//! projectiles and axis-aligned collision response.
//!
//! The core is windowing-agnostic: it consumes an [`core::input::InputState`]
//! snapshot and a [`render::textures::TextureManager`], and writes into a CPU
//! [`render::framebuffer::Framebuffer`]. `main.rs` owns the raylib window and
//! presents the result.

pub mod core;
pub mod render;

/// Size of one grid cell in world units (collisions and rendering agree on it).
pub const BLOCK_SIZE: f32 = 50.0;

/// Billboard width of an entity in world units.
pub const ENTITY_SIZE: f32 = 50.0;
pub const ENTITY_HALF_SIZE: f32 = ENTITY_SIZE / 2.0;

/// Width of the band along an exposed wall side where collision responses fire.
pub const COLLISION_MARGIN: f32 = 15.0;

pub const PLAYER_SPEED: f32 = 70.0;
pub const PLAYER_RUN_MODIFIER: f32 = 2.0;
pub const MOUSE_SENSITIVITY: f32 = 0.0025;

pub const DISPLAY_WIDTH: u32 = 1280;
pub const DISPLAY_HEIGHT: u32 = 720;

/// Reference strip height for walls and entities; projectiles use a thin one.
pub const WALL_REF_HEIGHT: f32 = 1000.0;
pub const PROJECTILE_REF_HEIGHT: f32 = 50.0;
