//! Player: the entity specialization that owns the camera and the inventory.

use raylib::prelude::Vector2;

use crate::PLAYER_SPEED;
use crate::core::game::PLAYER_ID;
use crate::core::weapon::Weapon;

pub struct Player {
    pub pos: Vector2,
    /// Transient, same discipline as entity velocity.
    pub vel: Vector2,
    pub speed: f32,
    pub health: i32,
    pub hit_radius: f32,
    pub look_ang: f32,
    pub fov: f32,
    pub weapons: Vec<Weapon>,
    pub active_weapon: usize,
}

impl Player {
    pub fn new(pos: Vector2, look_ang: f32) -> Self {
        Self {
            pos,
            vel: Vector2::zero(),
            speed: PLAYER_SPEED,
            health: 100,
            hit_radius: 15.0,
            look_ang,
            fov: std::f32::consts::FRAC_PI_2,
            weapons: vec![Weapon::laser_gun(PLAYER_ID)],
            active_weapon: 0,
        }
    }

    pub fn current_weapon_mut(&mut self) -> &mut Weapon {
        &mut self.weapons[self.active_weapon]
    }

    pub fn cycle_weapon(&mut self) {
        if !self.weapons.is_empty() {
            self.active_weapon = (self.active_weapon + 1) % self.weapons.len();
        }
    }

    pub fn integrate(&mut self) {
        self.pos.x += self.vel.x;
        self.pos.y += self.vel.y;
        self.vel = Vector2::zero();
    }

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
