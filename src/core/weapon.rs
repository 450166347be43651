//! Weapons: fire-rate gated projectile spawners with an active/idle
//! animation state for the HUD.

use raylib::prelude::Vector2;

use crate::core::entity::Animation;
use crate::core::projectile::Projectile;

/// Distance in front of the muzzle where a projectile materializes.
const MUZZLE_OFFSET: f32 = 1.0;

pub struct Weapon {
    /// Entity id of whoever holds the weapon; its projectiles never damage it.
    pub owner: u32,
    pub damage: i32,
    pub fire_interval_ms: u64,
    last_fire: u64,
    pub active: bool,
    pub animation: Animation,
}

impl Weapon {
    pub fn new(owner: u32, damage: i32, fire_interval_ms: u64, animation: Animation) -> Self {
        Self { owner, damage, fire_interval_ms, last_fire: 0, active: false, animation }
    }

    /// The player's starting gun.
    pub fn laser_gun(owner: u32) -> Self {
        Self::new(owner, 25, 800, Animation::new(vec!['w', 'x', 'y'], 100))
    }

    /// The gunner enemy's slower sidearm.
    pub fn blaster(owner: u32) -> Self {
        Self::new(owner, 10, 1400, Animation::new(vec!['w'], 200))
    }

    /// Hold-to-fire: the first call activates the weapon and starts the
    /// cooldown; each later call spawns a projectile once the cooldown has
    /// elapsed.
    pub fn trigger(&mut self, pos: Vector2, ang: f32, now: u64) -> Option<Projectile> {
        if !self.active {
            self.active = true;
            self.animation.reset(now);
            self.last_fire = now;
        }
        if now.saturating_sub(self.last_fire) > self.fire_interval_ms {
            self.last_fire = now;
            let muzzle = Vector2::new(
                pos.x + ang.cos() * MUZZLE_OFFSET,
                pos.y + ang.sin() * MUZZLE_OFFSET,
            );
            Some(Projectile::new(muzzle, ang, self.damage, self.owner, now))
        } else {
            None
        }
    }

    pub fn release(&mut self) {
        self.active = false;
    }

    /// HUD frame: animated while the trigger is held, idle frame otherwise.
    pub fn hud_frame(&mut self, now: u64) -> char {
        if self.active {
            self.animation.advance(now)
        } else {
            self.animation.first_frame()
        }
    }
}
