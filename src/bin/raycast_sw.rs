//! First-person raycaster in a window.
//!
//! Controls  W/S/↑/↓ = forward/back  A/D/←/→ = turn  Space = fire
//!           M = minimap  R = rain  Esc = quit
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- --map resources/map.txt
//! ```

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Context;
use clap::Parser;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use raycaster_rs::{
    config::Config,
    engine::Screen,
    renderer::{Renderer, Software, assets::builtin_bank},
    sim::{Game, InputCmd, LogAudio},
    world::Grid,
};

#[derive(Parser, Debug)]
#[command(name = "raycast_sw", about = "Software raycaster over a tile map")]
struct Args {
    /// Map file: whitespace separated integers, row-major
    #[arg(long, default_value = "resources/map.txt")]
    map: PathBuf,
    /// Map width in cells
    #[arg(long, default_value_t = 24)]
    map_width: usize,
    /// Map height in cells
    #[arg(long, default_value_t = 24)]
    map_height: usize,
    /// Window width in pixels
    #[arg(long, default_value_t = 640)]
    width: usize,
    /// Window height in pixels
    #[arg(long, default_value_t = 480)]
    height: usize,
    /// Milliseconds between a shot and the recoil frame
    #[arg(long, default_value_t = 300)]
    cooldown_ms: u64,
    /// Frame-rate cap
    #[arg(long, default_value_t = 60)]
    fps: usize,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            screen_w: self.width,
            screen_h: self.height,
            map_path: self.map,
            map_w: self.map_width,
            map_h: self.map_height,
            fire_cooldown: Duration::from_millis(self.cooldown_ms),
            target_fps: self.fps,
            ..Config::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let cfg = Args::parse().into_config();
    anyhow::ensure!(
        cfg.screen_w > 0 && cfg.screen_h > 0,
        "screen size must be non-zero"
    );

    let grid = Grid::from_file(&cfg.map_path, cfg.map_w, cfg.map_h)
        .with_context(|| format!("loading map {}", cfg.map_path.display()))?;
    let bank = builtin_bank().context("building textures")?;

    let screen = Screen::new(cfg.screen_w, cfg.screen_h);
    let mut game = Game::new(grid, &cfg);
    let mut renderer = Software::default();
    let mut audio = LogAudio;

    let mut win = Window::new(
        "Raycaster",
        screen.w,
        screen.h,
        WindowOptions::default(),
    )?;
    win.set_target_fps(cfg.target_fps);

    // ────────────────── benchmarking state ──────────────────────────────
    let start = Instant::now();
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    while win.is_open() && game.running() {
        let t0 = Instant::now();

        /* --------------- build one InputCmd per frame --------------------- */
        let mut cmd = InputCmd::default();
        if win.is_key_down(Key::Up) || win.is_key_down(Key::W) {
            cmd.forward += 1.0;
        }
        if win.is_key_down(Key::Down) || win.is_key_down(Key::S) {
            cmd.forward -= 1.0;
        }
        if win.is_key_down(Key::Left) || win.is_key_down(Key::A) {
            cmd.turn += 1.0;
        }
        if win.is_key_down(Key::Right) || win.is_key_down(Key::D) {
            cmd.turn -= 1.0;
        }
        cmd.fire = win.is_key_pressed(Key::Space, KeyRepeat::No); // edge-trigger
        cmd.toggle_minimap = win.is_key_pressed(Key::M, KeyRepeat::No);
        cmd.toggle_rain = win.is_key_pressed(Key::R, KeyRepeat::No);
        cmd.quit = win.is_key_down(Key::Escape);

        game.update(&cmd, start.elapsed(), &mut audio);

        /* draw */
        game.render(&mut renderer, &bank, &screen);
        let mut present = Ok(());
        renderer.end_frame(|fb, w, h| present = win.update_with_buffer(fb, w, h));
        present.context("presenting frame")?;

        // ─────────── accumulate & report every ~3 s ────────────────────
        acc_time += t0.elapsed();
        acc_frames += 1;
        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            tracing::info!("avg frame: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
