//! The raycaster / layer compositor.
//!
//! One ray per screen column strip: find the nearest wall-edge hit plus every
//! visible entity and projectile intersection, then composite the resulting
//! layers back-to-front as vertical strips scaled by 1/distance.

use raylib::prelude::*;

use crate::{BLOCK_SIZE, PROJECTILE_REF_HEIGHT, WALL_REF_HEIGHT};
use crate::core::game::Billboard;
use crate::core::geometry::{RayLine, distance, is_visible};
use crate::core::level::Level;
use crate::core::player::Player;
use crate::core::projectile::Projectile;
use crate::render::framebuffer::Framebuffer;
use crate::render::textures::TextureManager;

const PROJECTILE_COLOR: Color = Color::new(235, 40, 40, 255);

// Background palette: ceiling and floor gradients.
const CEIL_TOP: Color = Color::new(10, 12, 18, 255);
const CEIL_MID: Color = Color::new(20, 24, 32, 255);
const FLOOR_NEAR: Color = Color::new(56, 58, 62, 255);
const FLOOR_FAR: Color = Color::new(26, 28, 30, 255);

/// Render tuning, passed in explicitly rather than read from globals.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Number of rays cast across the field of view.
    pub rays: usize,
    /// Hits closer than this are culled (the eye is inside the margin band).
    /// An eye inside a fully enclosed cell needs `BLOCK_SIZE / 2.0` here so
    /// the shared near face is culled and the face beyond it wins.
    pub min_distance: f32,
    /// Distance of the background sentinel; nothing farther is drawn.
    pub far_clip: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { rays: 200, min_distance: 10.0, far_clip: 1000.0 }
    }
}

/// What a layer samples from: the background fill, a 1-pixel texture column,
/// or a flat color (projectiles).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnSource {
    Background,
    Textured { key: char, column: u32 },
    Flat(Color),
}

/// One depth-sorted contributor to a screen column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub distance: f32,
    pub source: ColumnSource,
    /// Scales the on-screen strip height together with 1/distance.
    pub ref_height: f32,
}

/// Cast a single ray and collect its layers.
///
/// `layers[0]` is always the base layer: the background sentinel at
/// `far_clip`, replaced by the nearest wall hit when one exists. Entity and
/// projectile layers follow unsorted; the compositor sorts by distance.
pub fn cast_ray(
    ang: f32,
    look_ang: f32,
    pos: Vector2,
    level: &Level,
    billboards: &[Billboard],
    projectiles: &[Projectile],
    texman: &TextureManager,
    cfg: &RenderConfig,
) -> Vec<Layer> {
    let ray = RayLine::from_angle(pos, ang);
    let mut layers = vec![Layer {
        distance: cfg.far_clip,
        source: ColumnSource::Background,
        ref_height: WALL_REF_HEIGHT,
    }];

    // Wall pass: nearest exposed edge wins and becomes the base layer.
    for wall in level.walls() {
        for edge in &wall.edges {
            // rays parallel to the side cannot hit it
            let inter = if edge.is_vertical() {
                match ray.intersect_vertical(edge.p1.x) {
                    Some(p) => p,
                    None => continue,
                }
            } else {
                match ray.intersect_horizontal(edge.p1.y) {
                    Some(p) => p,
                    None => continue,
                }
            };

            let min_x = edge.p1.x.min(edge.p2.x);
            let max_x = edge.p1.x.max(edge.p2.x);
            let min_y = edge.p1.y.min(edge.p2.y);
            let max_y = edge.p1.y.max(edge.p2.y);
            if inter.x < min_x || inter.x > max_x || inter.y < min_y || inter.y > max_y {
                continue;
            }
            if !is_visible(look_ang, pos, inter) {
                continue;
            }
            let dist = distance(inter, pos);
            if dist <= cfg.min_distance || dist >= layers[0].distance {
                continue;
            }

            let (tex_w, _) = texman.image_size(edge.texture).unwrap_or((64, 64));
            let units_per_pixel = BLOCK_SIZE / tex_w as f32;
            let offset = if edge.is_vertical() {
                (inter.y - edge.p1.y).abs()
            } else {
                (inter.x - edge.p1.x).abs()
            };
            let mut column = (offset / units_per_pixel) as u32;
            // a hit exactly on the far pixel boundary wraps to the first column
            if column >= tex_w {
                column = 0;
            }
            layers[0] = Layer {
                distance: dist,
                source: ColumnSource::Textured { key: edge.texture, column },
                ref_height: WALL_REF_HEIGHT,
            };
        }
    }

    let wall_dist = layers[0].distance;

    // Entity pass: billboards lie on the plane through the entity center,
    // perpendicular to the look direction.
    let across = Vector2::new(-look_ang.sin(), look_ang.cos());
    for billboard in billboards {
        let Some(inter) = ray.intersect_dir(billboard.pos, across) else {
            continue;
        };
        let dx = billboard.pos.x - inter.x;
        let dy = billboard.pos.y - inter.y;
        if dx * dx + dy * dy >= billboard.half_size * billboard.half_size {
            continue;
        }
        if !is_visible(look_ang, pos, inter) {
            continue;
        }
        let dist = distance(inter, pos);
        if dist <= cfg.min_distance || dist >= wall_dist {
            continue;
        }

        let (tex_w, _) = texman.image_size(billboard.texture).unwrap_or((64, 64));
        let units_per_pixel = (billboard.half_size * 2.0) / tex_w as f32;
        let near_end = Vector2::new(
            billboard.pos.x - across.x * billboard.half_size,
            billboard.pos.y - across.y * billboard.half_size,
        );
        let mut column = (distance(near_end, inter) / units_per_pixel) as u32;
        if column >= tex_w {
            column = 0;
        }
        layers.push(Layer {
            distance: dist,
            source: ColumnSource::Textured { key: billboard.texture, column },
            ref_height: WALL_REF_HEIGHT,
        });
    }

    // Projectile pass: both thin rectangles contribute flat strips.
    for projectile in projectiles {
        for (origin, dir, len) in projectile.segments() {
            let Some(inter) = ray.intersect_dir(origin, dir) else {
                continue;
            };
            let along = Vector2::new(dir.x * len, dir.y * len);
            let to_inter = Vector2::new(inter.x - origin.x, inter.y - origin.y);
            let product = along.dot(to_inter);
            if product <= 0.0 || product >= len * len {
                continue;
            }
            if !is_visible(look_ang, pos, inter) {
                continue;
            }
            let dist = distance(inter, pos);
            if dist <= cfg.min_distance || dist >= wall_dist {
                continue;
            }
            layers.push(Layer {
                distance: dist,
                source: ColumnSource::Flat(PROJECTILE_COLOR),
                ref_height: PROJECTILE_REF_HEIGHT,
            });
        }
    }

    layers
}

/// Render the whole frame: one ray per column strip, layers composited
/// back-to-front (background, wall, then sprites nearest-last).
pub fn render(
    fb: &mut Framebuffer,
    player: &Player,
    level: &Level,
    billboards: &[Billboard],
    projectiles: &[Projectile],
    texman: &TextureManager,
    cfg: &RenderConfig,
) {
    let col_w = fb.width as f32 / cfg.rays as f32;
    let step = player.fov / cfg.rays as f32;

    for i in 0..cfg.rays {
        let ang = player.look_ang - player.fov / 2.0 + step * i as f32;
        let mut layers = cast_ray(
            ang,
            player.look_ang,
            player.pos,
            level,
            billboards,
            projectiles,
            texman,
            cfg,
        );
        layers.sort_by(|a, b| {
            b.distance
                .partial_cmp(&a.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let x0 = (i as f32 * col_w).floor() as u32;
        let x1 = (((i as f32 + 1.0) * col_w).ceil() as u32).min(fb.width);
        for layer in &layers {
            blit_strip(fb, x0, x1, layer, texman);
        }
    }
}

fn blit_strip(fb: &mut Framebuffer, x0: u32, x1: u32, layer: &Layer, texman: &TextureManager) {
    let h = fb.height;
    let hh = h as f32 / 2.0;

    match layer.source {
        ColumnSource::Background => {
            let half = h / 2;
            for y in 0..half {
                let t = y as f32 / half as f32;
                let color = lerp_color(CEIL_TOP, CEIL_MID, t);
                for x in x0..x1 {
                    fb.set_pixel_color(x, y, color);
                }
            }
            for y in half..h {
                let t = (y - half) as f32 / (h - half) as f32;
                let color = lerp_color(FLOOR_FAR, FLOOR_NEAR, t);
                for x in x0..x1 {
                    fb.set_pixel_color(x, y, color);
                }
            }
        }
        ColumnSource::Textured { key, column } => {
            let strip_h = (BLOCK_SIZE / layer.distance) * layer.ref_height;
            if strip_h < 1.0 {
                return;
            }
            let (_, tex_h) = texman.image_size(key).unwrap_or((64, 64));
            let y_start = hh - strip_h / 2.0;
            let y0 = y_start.max(0.0) as u32;
            let y1 = ((y_start + strip_h).min(h as f32)) as u32;
            for y in y0..y1 {
                let v = (y as f32 - y_start) / strip_h;
                let ty = (v * tex_h as f32).clamp(0.0, tex_h as f32 - 1.0) as u32;
                let color = texman.get_pixel_color(key, column, ty);
                if color.a < 8 {
                    continue;
                }
                for x in x0..x1 {
                    fb.set_pixel_color(x, y, color);
                }
            }
        }
        ColumnSource::Flat(color) => {
            let strip_h = (BLOCK_SIZE / layer.distance) * layer.ref_height;
            if strip_h < 1.0 {
                return;
            }
            let y_start = hh - strip_h / 2.0;
            let y0 = y_start.max(0.0) as u32;
            let y1 = ((y_start + strip_h).min(h as f32)) as u32;
            for y in y0..y1 {
                for x in x0..x1 {
                    fb.set_pixel_color(x, y, color);
                }
            }
        }
    }
}

#[inline]
fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let f = |x: u8, y: u8| -> u8 { ((x as f32) * (1.0 - t) + (y as f32) * t) as u8 };
    Color::new(f(a.r, b.r), f(a.g, b.g), f(a.b, b.b), 255)
}
