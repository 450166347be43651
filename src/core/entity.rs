//! Entities as data plus optional capability components.
//!
//! Instead of an inheritance ladder (visible / animated / AI-controlled),
//! an entity owns optional components and the drivers check for presence:
//! the renderer reads `sprite`, the AI driver reads `behavior`, the combat
//! pass reads `weapon`.

use raylib::prelude::Vector2;

use crate::core::ai::Behavior;
use crate::core::weapon::Weapon;

/// Billboard texture state: a fixed frame list cycled on a millisecond clock.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<char>,
    frame_ms: u64,
    current: usize,
    last_update: u64,
}

impl Animation {
    pub fn new(frames: Vec<char>, frame_ms: u64) -> Self {
        debug_assert!(!frames.is_empty());
        Self { frames, frame_ms, current: 0, last_update: 0 }
    }

    pub fn reset(&mut self, now: u64) {
        self.current = 0;
        self.last_update = now;
    }

    /// Advance the frame cursor if the interval elapsed; returns the frame to
    /// show this tick.
    pub fn advance(&mut self, now: u64) -> char {
        if now.saturating_sub(self.last_update) > self.frame_ms {
            self.last_update = now;
            self.current = (self.current + 1) % self.frames.len();
        }
        self.frames[self.current]
    }

    pub fn first_frame(&self) -> char {
        self.frames[0]
    }
}

#[derive(Debug, Clone)]
pub enum Sprite {
    Static(char),
    Animated(Animation),
}

impl Sprite {
    /// Texture key for this tick, advancing the animation when present.
    pub fn key(&mut self, now: u64) -> char {
        match self {
            Sprite::Static(key) => *key,
            Sprite::Animated(anim) => anim.advance(now),
        }
    }
}

pub struct Entity {
    pub id: u32,
    pub pos: Vector2,
    /// Transient: set by AI each tick, clamped by collision resolution,
    /// consumed and zeroed by `integrate`.
    pub vel: Vector2,
    pub speed: f32,
    pub health: i32,
    pub hit_radius: f32,
    pub sprite: Sprite,
    pub behavior: Option<Behavior>,
    pub weapon: Option<Weapon>,
}

impl Entity {
    /// Apply the accumulated velocity and reset it for the next tick.
    pub fn integrate(&mut self) {
        self.pos.x += self.vel.x;
        self.pos.y += self.vel.y;
        self.vel = Vector2::zero();
    }

    /// Grid cell the entity currently occupies.
    pub fn current_block(&self) -> (isize, isize) {
        (
            (self.pos.x / crate::BLOCK_SIZE).floor() as isize,
            (self.pos.y / crate::BLOCK_SIZE).floor() as isize,
        )
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Spawn-tile entity kinds. The level symbol picks the kind; the kind is the
/// factory for a fully wired entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    /// Walks toward the player in the chase band; melee pressure only.
    Chaser,
    /// Slower, but carries a gun and fires inside its range band.
    Gunner,
}

impl EnemyKind {
    pub fn from_symbol(sym: char) -> Option<Self> {
        match sym {
            '!' => Some(EnemyKind::Chaser),
            '$' => Some(EnemyKind::Gunner),
            _ => None,
        }
    }

    pub fn spawn(self, id: u32, pos: Vector2) -> Entity {
        match self {
            EnemyKind::Chaser => Entity {
                id,
                pos,
                vel: Vector2::zero(),
                speed: 60.0,
                health: 60,
                hit_radius: 20.0,
                sprite: Sprite::Animated(Animation::new(vec!['c', 'C'], 150)),
                behavior: Some(Behavior::Chase),
                weapon: None,
            },
            EnemyKind::Gunner => Entity {
                id,
                pos,
                vel: Vector2::zero(),
                speed: 45.0,
                health: 40,
                hit_radius: 20.0,
                sprite: Sprite::Animated(Animation::new(vec!['u', 'U'], 220)),
                behavior: Some(Behavior::Chase),
                weapon: Some(Weapon::blaster(id)),
            },
        }
    }
}
