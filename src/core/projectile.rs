//! Projectiles: short line segments with a decay timer and
//! damage-once-per-target bookkeeping.

use raylib::prelude::Vector2;

pub const PROJECTILE_SPEED: f32 = 200.0;
pub const PROJECTILE_DECAY_MS: u64 = 1000;
pub const PROJECTILE_LENGTH: f32 = 20.0;
pub const PROJECTILE_WIDTH: f32 = 2.0;

pub struct Projectile {
    pub pos: Vector2,
    /// Unit direction of travel.
    pub dir: Vector2,
    pub speed: f32,
    pub damage: i32,
    spawned_at: u64,
    pub decay_ms: u64,
    pub length: f32,
    pub width: f32,
    damaged: Vec<u32>,
}

impl Projectile {
    /// `shooter` is pre-marked in the damaged set so a projectile can never
    /// hurt its own user (it materializes inside the shooter's hit radius).
    pub fn new(pos: Vector2, ang: f32, damage: i32, shooter: u32, now: u64) -> Self {
        Self {
            pos,
            dir: Vector2::new(ang.cos(), ang.sin()),
            speed: PROJECTILE_SPEED,
            damage,
            spawned_at: now,
            decay_ms: PROJECTILE_DECAY_MS,
            length: PROJECTILE_LENGTH,
            width: PROJECTILE_WIDTH,
            damaged: vec![shooter],
        }
    }

    /// Integrate one tick of travel; returns false once the decay lifetime is
    /// exceeded and the projectile should be dropped.
    pub fn advance(&mut self, dt: f32, now: u64) -> bool {
        if now.saturating_sub(self.spawned_at) >= self.decay_ms {
            return false;
        }
        self.pos.x += self.dir.x * self.speed * dt;
        self.pos.y += self.dir.y * self.speed * dt;
        true
    }

    /// The two thin rectangles the raycaster treats as segments: the
    /// length-wise trail and the width-wise cross-section. Each is
    /// (origin, unit direction, length).
    pub fn segments(&self) -> [(Vector2, Vector2, f32); 2] {
        let across = Vector2::new(-self.dir.y, self.dir.x);
        let cross_origin = Vector2::new(
            self.pos.x - across.x * self.width / 2.0,
            self.pos.y - across.y * self.width / 2.0,
        );
        [
            (self.pos, self.dir, self.length),
            (cross_origin, across, self.width),
        ]
    }

    /// Record damage against a target; true the first time, false on every
    /// later attempt by this projectile instance.
    pub fn try_damage(&mut self, target_id: u32) -> bool {
        if self.damaged.contains(&target_id) {
            return false;
        }
        self.damaged.push(target_id);
        true
    }
}
