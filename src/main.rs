//! raylib shell: window, input polling, minimap/HUD and presentation.
//! Everything simulated or rendered lives in the library.

use raylib::prelude::*;

use gridcast::{BLOCK_SIZE, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use gridcast::core::game::{Game, Tick};
use gridcast::core::input::InputState;
use gridcast::core::level::{Level, Tile};
use gridcast::render::framebuffer::Framebuffer;
use gridcast::render::raycaster::{self, RenderConfig};
use gridcast::render::textures::TextureManager;

const MINIMAP_SCALE: f32 = 0.12;

fn poll_input(window: &RaylibHandle) -> InputState {
    InputState {
        forward: window.is_key_down(KeyboardKey::KEY_W),
        back: window.is_key_down(KeyboardKey::KEY_S),
        strafe_left: window.is_key_down(KeyboardKey::KEY_A),
        strafe_right: window.is_key_down(KeyboardKey::KEY_D),
        run: window.is_key_down(KeyboardKey::KEY_LEFT_SHIFT),
        fire: window.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
        switch_weapon: window.is_key_pressed(KeyboardKey::KEY_TAB),
        mouse_dx: window.get_mouse_delta().x,
    }
}

fn draw_minimap(framebuffer: &mut Framebuffer, game: &Game) {
    let cell = (BLOCK_SIZE * MINIMAP_SCALE).max(2.0) as u32;
    for (j, row) in game.level.rows().iter().enumerate() {
        for (i, tile) in row.iter().enumerate() {
            let color = match tile {
                Tile::Wall(_) => Color::WHITE,
                _ => Color::new(30, 30, 30, 255),
            };
            let xo = i as u32 * cell;
            let yo = j as u32 * cell;
            for y in yo..yo + cell {
                for x in xo..xo + cell {
                    framebuffer.set_pixel_color(x, y, color);
                }
            }
        }
    }

    let dot = |fb: &mut Framebuffer, pos: Vector2, color: Color| {
        let cx = (pos.x * MINIMAP_SCALE) as i32;
        let cy = (pos.y * MINIMAP_SCALE) as i32;
        for dy in -1..=1i32 {
            for dx in -1..=1i32 {
                fb.set_pixel_color((cx + dx).max(0) as u32, (cy + dy).max(0) as u32, color);
            }
        }
    };
    for entity in &game.entities {
        dot(framebuffer, entity.pos, Color::RED);
    }
    for projectile in &game.projectiles {
        framebuffer.set_pixel_color(
            (projectile.pos.x * MINIMAP_SCALE) as u32,
            (projectile.pos.y * MINIMAP_SCALE) as u32,
            Color::ORANGE,
        );
    }
    dot(framebuffer, game.player.pos, Color::YELLOW);
}

/// Weapon overlay, scaled and blitted bottom-center straight into the
/// framebuffer.
fn draw_weapon_hud(framebuffer: &mut Framebuffer, texman: &TextureManager, key: char) {
    let size = 300u32;
    let (tw, th) = match texman.image_size(key) {
        Some(s) => s,
        None => return,
    };
    let x0 = (framebuffer.width - size) / 2;
    let y0 = framebuffer.height - size;
    for y in 0..size {
        let ty = (y * th) / size;
        for x in 0..size {
            let tx = (x * tw) / size;
            let color = texman.get_pixel_color(key, tx, ty);
            if color.a < 8 {
                continue;
            }
            framebuffer.set_pixel_color(x0 + x, y0 + y, color);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let level = match Level::load("levels/level_1.txt") {
        Ok(level) => level,
        Err(err) => {
            eprintln!("failed to load level: {err}");
            std::process::exit(1);
        }
    };

    let (mut window, raylib_thread) = raylib::init()
        .size(DISPLAY_WIDTH as i32, DISPLAY_HEIGHT as i32)
        .title("gridcast")
        .build();
    window.disable_cursor();

    let mut texman = TextureManager::procedural();
    texman.load_assets(&mut window, &raylib_thread);

    let mut framebuffer = Framebuffer::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
    framebuffer.set_background_color(Color::new(50, 50, 100, 255));

    let cfg = RenderConfig::default();
    let mut game = Game::new(level, 0xC0FFEE);

    while !window.window_should_close() {
        let dt = window.get_frame_time();
        let now = (window.get_time() * 1000.0) as u64;
        let input = poll_input(&window);

        if game.tick(&input, dt, now) == Tick::PlayerDied {
            break;
        }

        framebuffer.clear();
        let billboards = game.billboards(now);
        raycaster::render(
            &mut framebuffer,
            &game.player,
            &game.level,
            &billboards,
            &game.projectiles,
            &texman,
            &cfg,
        );
        let weapon_key = game.player.current_weapon_mut().hud_frame(now);
        draw_weapon_hud(&mut framebuffer, &texman, weapon_key);
        draw_minimap(&mut framebuffer, &game);

        let fps_now = window.get_fps();
        let health = game.player.health;
        {
            let mut d = window.begin_drawing(&raylib_thread);
            d.clear_background(Color::BLACK);
            for y in 0..framebuffer.height {
                for x in 0..framebuffer.width {
                    let color = framebuffer.color_buffer[(y * framebuffer.width + x) as usize];
                    if color != framebuffer.background_color {
                        d.draw_pixel(x as i32, y as i32, color);
                    }
                }
            }
            d.draw_text(&format!("FPS: {fps_now}"), 10, 10, 20, Color::WHITE);
            d.draw_text(&format!("HP: {health}"), 10, 40, 20, Color::GREEN);
        }

        std::thread::sleep(std::time::Duration::from_millis(16));
    }
}
