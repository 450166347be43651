//! Frame-loop orchestration: input, AI, collision, integration, projectile
//! aging and damage, death handling.
//!
//! Single-threaded and synchronous; all state is owned here and mutated in a
//! fixed order each tick.

use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::Vector2;
use tracing::debug;

use crate::core::ai;
use crate::core::collision;
use crate::core::entity::Entity;
use crate::core::geometry::distance;
use crate::core::input::{self, InputState};
use crate::core::level::Level;
use crate::core::player::Player;
use crate::core::projectile::Projectile;

/// Damage-tracking id of the player; entity ids start above it.
pub const PLAYER_ID: u32 = 0;

/// Outcome of one tick, observed by the caller between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    PlayerDied,
}

/// Billboard view of a live entity, handed to the raycaster.
#[derive(Debug, Clone, Copy)]
pub struct Billboard {
    pub pos: Vector2,
    pub texture: char,
    pub half_size: f32,
}

pub struct Game {
    pub level: Level,
    pub player: Player,
    pub entities: Vec<Entity>,
    pub projectiles: Vec<Projectile>,
    rng: StdRng,
}

impl Game {
    /// Run the spawn factories of a parsed level. The RNG is seeded so runs
    /// can be reproduced.
    pub fn new(level: Level, seed: u64) -> Self {
        let mut next_id = PLAYER_ID + 1;
        let entities: Vec<Entity> = level
            .enemy_spawns()
            .map(|(pos, kind)| {
                let entity = kind.spawn(next_id, pos);
                next_id += 1;
                entity
            })
            .collect();
        let player = Player::new(level.player_spawn, 0.0);
        Self {
            level,
            player,
            entities,
            projectiles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One frame of simulation. `dt` is the frame time in seconds, `now` a
    /// monotonic millisecond clock.
    pub fn tick(&mut self, input: &InputState, dt: f32, now: u64) -> Tick {
        input::apply(&mut self.player, input, &mut self.projectiles, dt, now);

        for entity in &mut self.entities {
            ai::drive(entity, self.player.pos, &mut self.projectiles, &mut self.rng, dt, now);
            collision::resolve(entity.pos, &mut entity.vel, &self.level);
            entity.integrate();
        }

        collision::resolve(self.player.pos, &mut self.player.vel, &self.level);
        self.player.integrate();

        self.projectiles.retain_mut(|projectile| {
            let alive = projectile.advance(dt, now);
            if !alive {
                debug!("projectile decayed");
            }
            alive
        });

        for projectile in &mut self.projectiles {
            for entity in &mut self.entities {
                if distance(projectile.pos, entity.pos) < entity.hit_radius
                    && projectile.try_damage(entity.id)
                {
                    entity.health -= projectile.damage;
                }
            }
            if distance(projectile.pos, self.player.pos) < self.player.hit_radius
                && projectile.try_damage(PLAYER_ID)
            {
                self.player.health -= projectile.damage;
            }
        }

        self.entities.retain(|entity| {
            if !entity.is_alive() {
                debug!(id = entity.id, "entity destroyed");
            }
            entity.is_alive()
        });

        if !self.player.is_alive() {
            return Tick::PlayerDied;
        }
        Tick::Continue
    }

    /// Advance sprite animations and build the billboard views for this frame.
    pub fn billboards(&mut self, now: u64) -> Vec<Billboard> {
        self.entities
            .iter_mut()
            .map(|entity| Billboard {
                pos: entity.pos,
                texture: entity.sprite.key(now),
                half_size: crate::ENTITY_HALF_SIZE,
            })
            .collect()
    }
}
