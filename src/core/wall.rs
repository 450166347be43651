//! Wall tiles: exposed render edges plus tagged collision responses.
//!
//! Each wall tile is self-contained. Edges and responses are computed once
//! from the 4-neighborhood when the level is parsed and never change at
//! runtime. Neighboring walls may emit overlapping geometry at shared
//! corners; that is fine because only sides facing non-wall tiles are ever
//! emitted.

use std::f32::consts::FRAC_1_SQRT_2;

use raylib::prelude::Vector2;

use crate::{BLOCK_SIZE, COLLISION_MARGIN};

/// One exposed face of a wall tile, as a renderable line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub p1: Vector2,
    pub p2: Vector2,
    pub texture: char,
}

impl Edge {
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.p1.x == self.p2.x
    }
}

/// Which sides of a tile face non-wall neighbors, in (left, top, right,
/// bottom) order. The map boundary counts as non-wall, so boundary faces are
/// exposed too.
pub type Exposure = [bool; 4];

/// Tagged collision-response identifier, dispatched against the owning
/// tile's geometry. Axial variants clamp one velocity component inside the
/// margin band along their side; corner variants cancel the inward-projected
/// velocity where two exposed sides meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Left,
    Top,
    Right,
    Bottom,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Response {
    /// Apply this response for a wall centered at `wall_pos` against a movable
    /// with pending position `pos` and velocity `vel`. Only the velocity is
    /// mutated; it is reduced only while it points into the tile.
    pub fn apply(self, wall_pos: Vector2, pos: Vector2, vel: &mut Vector2) {
        let h = BLOCK_SIZE / 2.0;
        let m = COLLISION_MARGIN;
        let left = wall_pos.x - h;
        let right = wall_pos.x + h;
        let top = wall_pos.y - h;
        let bottom = wall_pos.y + h;

        match self {
            Response::Left => {
                if top <= pos.y && pos.y <= bottom && left - m <= pos.x && pos.x <= left && vel.x > 0.0 {
                    vel.x = 0.0;
                }
            }
            Response::Right => {
                if top <= pos.y && pos.y <= bottom && right <= pos.x && pos.x <= right + m && vel.x < 0.0 {
                    vel.x = 0.0;
                }
            }
            Response::Top => {
                if left <= pos.x && pos.x <= right && top - m <= pos.y && pos.y <= top && vel.y > 0.0 {
                    vel.y = 0.0;
                }
            }
            Response::Bottom => {
                if left <= pos.x && pos.x <= right && bottom <= pos.y && pos.y <= bottom + m && vel.y < 0.0 {
                    vel.y = 0.0;
                }
            }
            Response::TopLeft => {
                if left - m < pos.x && pos.x < left && top - m < pos.y && pos.y < top {
                    deflect(vel, Vector2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2));
                }
            }
            Response::TopRight => {
                if right < pos.x && pos.x < right + m && top - m < pos.y && pos.y < top {
                    deflect(vel, Vector2::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2));
                }
            }
            Response::BottomRight => {
                if right < pos.x && pos.x < right + m && bottom < pos.y && pos.y < bottom + m {
                    deflect(vel, Vector2::new(-FRAC_1_SQRT_2, -FRAC_1_SQRT_2));
                }
            }
            Response::BottomLeft => {
                if left - m < pos.x && pos.x < left && bottom < pos.y && pos.y < bottom + m {
                    deflect(vel, Vector2::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2));
                }
            }
        }
    }
}

/// Remove the velocity component along the unit corner normal `n` when the
/// movable is closing on the corner. A zero or opening velocity is a no-op.
#[inline]
fn deflect(vel: &mut Vector2, n: Vector2) {
    let s = vel.dot(n);
    if s > 0.0 {
        vel.x -= n.x * s;
        vel.y -= n.y * s;
    }
}

#[derive(Debug)]
pub struct Wall {
    /// Center of the tile in world units.
    pub pos: Vector2,
    pub texture: char,
    pub edges: Vec<Edge>,
    pub responses: Vec<Response>,
}

impl Wall {
    /// Build a wall tile from its exposure. `exposure` is (left, top, right,
    /// bottom); `true` means the side faces a non-wall tile or the map edge.
    pub fn new(pos: Vector2, texture: char, exposure: Exposure) -> Self {
        let h = BLOCK_SIZE / 2.0;
        let top_left = Vector2::new(pos.x - h, pos.y - h);
        let top_right = Vector2::new(pos.x + h, pos.y - h);
        let bottom_right = Vector2::new(pos.x + h, pos.y + h);
        let bottom_left = Vector2::new(pos.x - h, pos.y + h);

        let [left, top, right, bottom] = exposure;
        let mut edges = Vec::new();
        let mut responses = Vec::new();

        if left {
            edges.push(Edge { p1: top_left, p2: bottom_left, texture });
            responses.push(Response::Left);
        }
        if top {
            edges.push(Edge { p1: top_left, p2: top_right, texture });
            responses.push(Response::Top);
        }
        if right {
            edges.push(Edge { p1: top_right, p2: bottom_right, texture });
            responses.push(Response::Right);
        }
        if bottom {
            edges.push(Edge { p1: bottom_left, p2: bottom_right, texture });
            responses.push(Response::Bottom);
        }

        if left && top {
            responses.push(Response::TopLeft);
        }
        if top && right {
            responses.push(Response::TopRight);
        }
        if right && bottom {
            responses.push(Response::BottomRight);
        }
        if bottom && left {
            responses.push(Response::BottomLeft);
        }

        Self { pos, texture, edges, responses }
    }

    /// Resolve every registered response against a movable.
    pub fn resolve(&self, pos: Vector2, vel: &mut Vector2) {
        for response in &self.responses {
            response.apply(self.pos, pos, vel);
        }
    }
}
