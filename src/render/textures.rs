//! Texture resource context: CPU pixmaps keyed by char, sampled per pixel.
//!
//! The engine only ever asks for (width, height, pixel at column/row); how a
//! pixmap got here is irrelevant to it. `procedural()` builds deterministic
//! fallbacks for every key the engine uses; `load_assets` overrides them from
//! image files when those exist on disk.

use std::collections::HashMap;

use raylib::prelude::*;

/// An immutable CPU pixmap, sampled without any GPU involvement.
#[derive(Clone)]
struct Pixmap {
    w: u32,
    h: u32,
    px: Vec<Color>,
}

impl Pixmap {
    fn new(w: u32, h: u32, px: Vec<Color>) -> Self {
        Self { w, h, px }
    }

    #[inline]
    fn sample(&self, x: u32, y: u32) -> Color {
        let xi = (x % self.w) as usize;
        let yi = (y % self.h) as usize;
        self.px[(yi * self.w as usize) + xi]
    }
}

pub struct TextureManager {
    maps: HashMap<char, Pixmap>,
}

/// Keys the engine uses when no assets are on disk.
/// Walls: '#'. Chaser frames: 'c'/'C'. Gunner frames: 'u'/'U'.
/// Weapon HUD frames: 'w' idle, 'x' charge, 'y' flash.
impl TextureManager {
    /// Deterministic procedural set covering every engine key.
    pub fn procedural() -> Self {
        let mut tm = Self { maps: HashMap::new() };

        tm.maps.insert('#', Self::make_brick(64, 64, Color::new(110, 104, 96, 255)));

        tm.maps.insert('c', Self::make_enemy_flat(64, 64, Color::new(210, 70, 70, 255), 0.60));
        tm.maps.insert('C', Self::make_enemy_flat(64, 64, Color::new(230, 95, 95, 255), 0.64));
        tm.maps.insert('u', Self::make_enemy_flat(64, 64, Color::new(90, 120, 220, 255), 0.58));
        tm.maps.insert('U', Self::make_enemy_flat(64, 64, Color::new(120, 150, 240, 255), 0.62));

        tm.maps.insert('w', Self::make_weapon_frame(64, 64, Color::new(70, 70, 80, 255), 0));
        tm.maps.insert('x', Self::make_weapon_frame(64, 64, Color::new(70, 70, 80, 255), 96));
        tm.maps.insert('y', Self::make_weapon_frame(64, 64, Color::new(70, 70, 80, 255), 220));

        tm
    }

    /// Try to replace procedural pixmaps with image files. Missing files are
    /// fine; whatever loads wins.
    pub fn load_assets(&mut self, _rl: &mut RaylibHandle, _thread: &RaylibThread) {
        let candidates: &[(&str, char)] = &[
            ("assets/wall.png", '#'),
            ("assets/walls/wall.png", '#'),
            ("assets/chaser_0.png", 'c'),
            ("assets/chaser_1.png", 'C'),
            ("assets/gunner_0.png", 'u'),
            ("assets/gunner_1.png", 'U'),
            ("assets/lasergun/0.png", 'w'),
            ("assets/lasergun/1.png", 'x'),
            ("assets/lasergun/2.png", 'y'),
        ];
        for (path, key) in candidates {
            if let Ok(img) = Image::load_image(path) {
                let w = img.width().max(1) as u32;
                let h = img.height().max(1) as u32;
                let data = img.get_image_data().to_vec();
                self.maps.insert(*key, Pixmap::new(w, h, data));
            }
        }
    }

    /// Sample one pixel; unknown keys sample white.
    pub fn get_pixel_color(&self, key: char, tx: u32, ty: u32) -> Color {
        if let Some(pm) = self.maps.get(&key) {
            return pm.sample(tx, ty);
        }
        Color::WHITE
    }

    pub fn image_size(&self, key: char) -> Option<(u32, u32)> {
        self.maps.get(&key).map(|p| (p.w, p.h))
    }

    fn make_brick(w: u32, h: u32, base: Color) -> Pixmap {
        let mut px = vec![base; (w * h) as usize];
        let mortar = Self::mix(base, Color::BLACK, 110);
        let course = 16u32;
        for y in 0..h {
            let row = y / course;
            let shift = if row % 2 == 0 { 0 } else { 16 };
            for x in 0..w {
                let i = (y * w + x) as usize;
                if y % course == 0 || (x + shift) % 32 == 0 {
                    px[i] = mortar;
                } else if ((x / 4) + (y / 4)) % 7 == 0 {
                    px[i] = Self::mix(base, Color::WHITE, 18);
                }
            }
        }
        Pixmap::new(w, h, px)
    }

    /// Flat elliptical body on a transparent background; `fill` controls the
    /// body height so two frames of the same kind read as a walk bob.
    fn make_enemy_flat(w: u32, h: u32, body: Color, fill: f32) -> Pixmap {
        let mut px = vec![Color::new(0, 0, 0, 0); (w * h) as usize];
        let cx = (w as f32) * 0.5;
        let cy = (h as f32) * 0.6;
        let rx = (w as f32) * 0.23;
        let ry = (h as f32) * fill * 0.58;
        for y in 0..h {
            for x in 0..w {
                let nx = (x as f32 - cx) / rx;
                let ny = (y as f32 - cy) / ry;
                let i = (y * w + x) as usize;
                if nx * nx + ny * ny <= 1.0 {
                    px[i] = body;
                    px[i].a = 255;
                }
            }
        }
        Pixmap::new(w, h, px)
    }

    /// HUD gun silhouette with a muzzle glow of varying intensity.
    fn make_weapon_frame(w: u32, h: u32, body: Color, glow: u8) -> Pixmap {
        let mut px = vec![Color::new(0, 0, 0, 0); (w * h) as usize];
        for y in (h / 2)..h {
            for x in (w / 3)..(2 * w / 3) {
                let i = (y * w + x) as usize;
                px[i] = body;
                px[i].a = 255;
            }
        }
        if glow > 0 {
            let flash = Self::mix(Color::new(255, 240, 120, 255), Color::WHITE, glow);
            let cx = w / 2;
            let cy = h / 2;
            let r = (w / 8) as i32;
            for dy in -r..=r {
                for dx in -r..=r {
                    if dx * dx + dy * dy <= r * r {
                        let x = (cx as i32 + dx).clamp(0, w as i32 - 1) as u32;
                        let y = (cy as i32 + dy).clamp(0, h as i32 - 1) as u32;
                        let i = (y * w + x) as usize;
                        px[i] = flash;
                        px[i].a = 255;
                    }
                }
            }
        }
        Pixmap::new(w, h, px)
    }

    #[inline]
    fn mix(a: Color, b: Color, t: u8) -> Color {
        let ta = t as u16;
        let na = 255u16 - ta;
        let mixc = |x: u8, y: u8| -> u8 { (((x as u16) * na + (y as u16) * ta) / 255) as u8 };
        Color::new(mixc(a.r, b.r), mixc(a.g, b.g), mixc(a.b, b.b), mixc(a.a, b.a))
    }
}
