//! Rendering: CPU framebuffer, texture context and the raycasting
//! compositor.
//!
//! Re-exports:
//! - `framebuffer`: CPU pixel target
//! - `textures`: pixmap manager with procedural fallbacks
//! - `raycaster`: per-column ray casting and layer compositing

pub mod framebuffer;
pub mod raycaster;
pub mod textures;
