//! Per-tick entity behavior: band-based chasing and weapon use.

use rand::Rng;
use raylib::prelude::Vector2;

use crate::core::entity::Entity;
use crate::core::geometry::distance;
use crate::core::projectile::Projectile;

/// Closer than this the entity backs off instead of crowding the player.
const CHASE_MIN: f32 = 40.0;
/// Beyond this the player is out of interest and the entity wanders.
const CHASE_MAX: f32 = 250.0;
/// Gunners fire inside this band.
const FIRE_RANGE: f32 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Chase,
}

/// Drive one entity for one tick: sets its pending velocity and may append
/// newly fired projectiles to the shared sink. Velocity here already includes
/// the dt scaling, matching the transient-velocity discipline.
pub fn drive(
    entity: &mut Entity,
    player_pos: Vector2,
    projectiles: &mut Vec<Projectile>,
    rng: &mut impl Rng,
    dt: f32,
    now: u64,
) {
    let Some(behavior) = entity.behavior else {
        return;
    };

    match behavior {
        Behavior::Chase => {
            let dist = distance(player_pos, entity.pos);
            let to_player = Vector2::new(player_pos.x - entity.pos.x, player_pos.y - entity.pos.y);

            if dist > CHASE_MIN && dist < CHASE_MAX {
                let step = to_player.normalized().scale_by(entity.speed * dt);
                entity.vel = step;
            } else if dist <= CHASE_MIN && dist > 0.0 {
                let step = to_player.normalized().scale_by(-entity.speed * dt);
                entity.vel = step;
            } else {
                // out of the band: drift a little so idle enemies do not freeze
                let ang = rng.gen_range(0.0..std::f32::consts::TAU);
                let wander = entity.speed * 0.2 * dt;
                entity.vel = Vector2::new(ang.cos() * wander, ang.sin() * wander);
            }

            if dist < FIRE_RANGE {
                let aim = to_player.y.atan2(to_player.x);
                if let Some(weapon) = entity.weapon.as_mut() {
                    if let Some(projectile) = weapon.trigger(entity.pos, aim, now) {
                        projectiles.push(projectile);
                    }
                }
            } else if let Some(weapon) = entity.weapon.as_mut() {
                weapon.release();
            }
        }
    }
}
