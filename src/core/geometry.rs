//! Distance, facing tests and line-intersection solvers.
//!
//! Coordinates are screen-style: x grows right, y grows down, and the forward
//! vector for an angle `a` is `(cos a, sin a)`.

use raylib::prelude::Vector2;

#[inline]
pub fn distance(a: Vector2, b: Vector2) -> f32 {
    ((a.x - b.x) * (a.x - b.x) + (a.y - b.y) * (a.y - b.y)).sqrt()
}

/// Forward-hemisphere test: is `point` in front of the *look* direction?
///
/// The raycaster uses the look angle here, not the individual ray angle, so
/// every ray of a frame agrees on what counts as "behind the player".
#[inline]
pub fn is_visible(look_ang: f32, pos: Vector2, point: Vector2) -> bool {
    let look = Vector2::new(look_ang.cos(), look_ang.sin());
    let to_point = Vector2::new(point.x - pos.x, point.y - pos.y);
    look.dot(to_point) > 0.0
}

/// A ray in slope/intercept form. Vertical rays have no slope and are kept as
/// a distinct case rather than an error.
#[derive(Debug, Clone, Copy)]
pub struct RayLine {
    pub origin: Vector2,
    /// `None` when the ray is vertical (cos == 0).
    pub slope: Option<f32>,
    /// y-intercept; meaningless for vertical rays.
    pub intercept: f32,
}

impl RayLine {
    pub fn from_angle(origin: Vector2, ang: f32) -> Self {
        let cos = ang.cos();
        let sin = ang.sin();
        if cos == 0.0 {
            Self { origin, slope: None, intercept: 0.0 }
        } else {
            let k = sin / cos;
            Self { origin, slope: Some(k), intercept: origin.y - k * origin.x }
        }
    }

    /// Intersection with the vertical line `x = x0`. `None` when the ray is
    /// vertical too (parallel).
    pub fn intersect_vertical(&self, x0: f32) -> Option<Vector2> {
        let k = self.slope?;
        Some(Vector2::new(x0, k * x0 + self.intercept))
    }

    /// Intersection with the horizontal line `y = y0`. `None` when the ray is
    /// horizontal (parallel).
    pub fn intersect_horizontal(&self, y0: f32) -> Option<Vector2> {
        match self.slope {
            None => Some(Vector2::new(self.origin.x, y0)),
            Some(k) if k == 0.0 => None,
            Some(k) => Some(Vector2::new((y0 - self.intercept) / k, y0)),
        }
    }

    /// Intersection with the line through `point` with direction `dir`.
    /// `None` for parallel or degenerate pairs.
    pub fn intersect_dir(&self, point: Vector2, dir: Vector2) -> Option<Vector2> {
        if dir.x == 0.0 {
            // other line is vertical
            return self.intersect_vertical(point.x);
        }
        let k1 = dir.y / dir.x;
        let b1 = point.y - k1 * point.x;
        match self.slope {
            None => Some(Vector2::new(self.origin.x, k1 * self.origin.x + b1)),
            Some(k) if k == k1 => None,
            Some(k) => {
                let x = (b1 - self.intercept) / (k - k1);
                Some(Vector2::new(x, k * x + self.intercept))
            }
        }
    }
}
