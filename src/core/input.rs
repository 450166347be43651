//! Input consumption: the core reads a plain snapshot, never the hardware.

use raylib::prelude::Vector2;

use crate::{MOUSE_SENSITIVITY, PLAYER_RUN_MODIFIER};
use crate::core::player::Player;
use crate::core::projectile::Projectile;

#[derive(Debug, Default, Clone, Copy)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub run: bool,
    pub fire: bool,
    pub switch_weapon: bool,
    /// Raw horizontal mouse delta for this frame, in pixels.
    pub mouse_dx: f32,
}

/// Turn one frame of input into player state: pending velocity, look angle,
/// weapon trigger state. Fired projectiles go into the shared sink.
pub fn apply(
    player: &mut Player,
    input: &InputState,
    projectiles: &mut Vec<Projectile>,
    dt: f32,
    now: u64,
) {
    player.look_ang += input.mouse_dx * MOUSE_SENSITIVITY;

    let forward = Vector2::new(player.look_ang.cos(), player.look_ang.sin());
    let right = Vector2::new(-player.look_ang.sin(), player.look_ang.cos());

    let mut vel = Vector2::zero();
    if input.forward {
        vel += forward;
    }
    if input.back {
        vel -= forward;
    }
    if input.strafe_left {
        vel -= right;
    }
    if input.strafe_right {
        vel += right;
    }
    if vel != Vector2::zero() {
        vel = vel.normalized().scale_by(player.speed * dt);
        if input.run {
            vel = vel.scale_by(PLAYER_RUN_MODIFIER);
        }
    }
    player.vel = vel;

    if input.switch_weapon {
        player.cycle_weapon();
    }

    let pos = player.pos;
    let ang = player.look_ang;
    let weapon = player.current_weapon_mut();
    if input.fire {
        if let Some(projectile) = weapon.trigger(pos, ang, now) {
            projectiles.push(projectile);
        }
    } else {
        weapon.release();
    }
}
