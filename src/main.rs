//! Galop demo entry point.
//!
//! Plays two rider sprite sheets side by side:
//! - **raylib** for windowing and drawing
//! - fixed 1920x1080 design resolution scaled to the window via a 2D camera
//!
//! # Main Loop
//!
//! 1. Initialize the window from [`DemoConfig`] and load the sheet textures
//! 2. Build the riders from inline grid and animation definitions
//! 3. Each tick: feed the frame delta to the [`FrameClock`], skip update
//!    when the instantaneous rate falls below the configured minimum,
//!    otherwise `update(dt)` then `draw()` every sprite
//! 4. Optionally draw the FPS overlay
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use clap::Parser;
use raylib::prelude::*;
use std::path::PathBuf;

use galop::anim::{AnimationDef, AnimationSet};
use galop::clock::FrameClock;
use galop::config::DemoConfig;
use galop::layout::fit_scale;
use galop::render::RaylibBlit;
use galop::sheet::SheetGrid;
use galop::sprite::AnimatedSprite;
use galop::texturestore::TextureStore;

/// Design-space canvas the sprites are placed on; scaled to the window.
const DESIGN_WIDTH: f32 = 1920.0;
const DESIGN_HEIGHT: f32 = 1080.0;
/// Side length of one sheet frame, in pixels.
const FRAME_SIZE: u32 = 80;
const BACKGROUND: Color = Color {
    r: 246,
    g: 246,
    b: 219,
    a: 255,
};

/// Galop sprite animation demo
#[derive(Parser)]
#[command(version, about = "Sprite-sheet animation demo: two riders on a canvas")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show the FPS overlay.
    #[arg(long)]
    debug: bool,
}

/// Inline sheet layouts and animation sets for the two demo riders.
fn build_riders() -> Vec<AnimatedSprite> {
    let rider1_anims = AnimationSet::new()
        .with("idle", AnimationDef::StaticPose(30))
        .with(
            "attack",
            AnimationDef::Sequence {
                frames: (0..31).collect(),
                fps: 24.0,
                looped: true,
            },
        );
    let rider1 = AnimatedSprite::new(
        "rider1",
        rider1_anims,
        SheetGrid::new(10, 4, FRAME_SIZE).frame_positions(),
        FRAME_SIZE as f32,
        Vector2 { x: 250.0, y: 100.0 },
    )
    .expect("rider1 definitions fit the sheet")
    .with_scale(8.0);

    let rider2_anims = AnimationSet::new()
        .with("idle", AnimationDef::StaticPose(30))
        .with(
            "attack",
            AnimationDef::Sequence {
                frames: (0..39).collect(),
                fps: 12.0,
                looped: true,
            },
        );
    let rider2 = AnimatedSprite::new(
        "rider2",
        rider2_anims,
        SheetGrid::new(11, 4, FRAME_SIZE).frame_positions(),
        FRAME_SIZE as f32,
        Vector2 {
            x: 1200.0,
            y: 100.0,
        },
    )
    .expect("rider2 definitions fit the sheet")
    .with_scale(8.0);

    vec![rider1, rider2]
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => DemoConfig::with_path(path),
        None => DemoConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults
    if cli.debug {
        config.debug = true;
    }

    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("Galop")
        .build();
    rl.set_target_fps(config.target_fps);

    let mut textures = TextureStore::new();
    for (key, path) in [
        ("rider1", "assets/textures/rider1.png"),
        ("rider2", "assets/textures/rider2.png"),
    ] {
        if let Err(e) = textures.load(&mut rl, &thread, key, path) {
            log::error!("{e}");
            std::process::exit(1);
        }
    }

    let mut riders = build_riders();
    for rider in riders.iter_mut() {
        rider
            .set_current_anim("attack")
            .expect("attack is registered");
    }

    let mut clock = FrameClock::new().with_min_fps(config.min_fps as f32);

    while !rl.window_should_close() {
        clock.tick(rl.get_frame_time());

        // A collapsed tick rate means one giant delta; skip the step instead
        // of fast-forwarding every animation through it.
        if clock.should_step() {
            for rider in riders.iter_mut() {
                rider.update(clock.delta);
            }
        }

        let zoom = fit_scale(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            DESIGN_WIDTH,
            DESIGN_HEIGHT,
        );
        let camera = Camera2D {
            offset: Vector2 { x: 0.0, y: 0.0 },
            target: Vector2 { x: 0.0, y: 0.0 },
            rotation: 0.0,
            zoom,
        };

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND);
        {
            let mut d2 = d.begin_mode2D(camera);
            let mut blit = RaylibBlit::new(&mut d2, &textures);
            for rider in riders.iter() {
                if let Err(e) = rider.draw(&mut blit) {
                    log::warn!("skipping rider draw: {e}");
                }
            }
        }

        if config.debug {
            let fps = d.get_fps();
            d.draw_text(&format!("FPS: {fps}"), 25, 25, 40, Color::BLACK);
        }
    }
}
