use std::time::Duration;

use super::{AudioSink, InputCmd, Overlays, Rain, Sound, WeaponState, WeaponStateMachine};
use crate::{
    config::Config,
    engine::{ColumnHit, Screen, project_into},
    renderer::{Renderer, RendererExt, assets::SKY},
    world::{CameraPose, Grid, TextureBank},
};

/// Owns the map and every piece of mutable game state, and drives one
/// frame at a time: input → weapon → raycast → present.
pub struct Game {
    grid: Grid,
    pose: CameraPose,
    weapon: WeaponStateMachine,
    overlays: Overlays,
    rain: Rain,
    move_speed: f64,
    rot_speed: f64,
    minimap_scale: usize,
    running: bool,
    theme_started: bool,
    /// per-column scratch reused across frames
    columns: Vec<Option<ColumnHit>>,
}

impl Game {
    pub fn new(grid: Grid, cfg: &Config) -> Self {
        let pose = cfg.start_pose();
        let (cx, cy) = pose.cell();
        if !grid.is_walkable(cx, cy) {
            tracing::warn!(x = cx, y = cy, "start position is not on an empty cell");
        }
        Self {
            grid,
            pose,
            weapon: WeaponStateMachine::new(cfg.fire_cooldown),
            overlays: Overlays::default(),
            rain: Rain::new(cfg.raindrops, cfg.screen_w, cfg.screen_h, cfg.rain_seed),
            move_speed: cfg.move_speed,
            rot_speed: cfg.rot_speed,
            minimap_scale: cfg.minimap_scale,
            running: true,
            theme_started: false,
            columns: Vec::with_capacity(cfg.screen_w),
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    #[inline]
    pub fn weapon(&self) -> WeaponState {
        self.weapon.current_pose()
    }

    #[inline]
    pub fn overlays(&self) -> Overlays {
        self.overlays
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.running
    }

    /// Apply one frame of input at monotonic time `now`.
    /// The first call also starts the theme track.
    pub fn update<A: AudioSink>(&mut self, cmd: &InputCmd, now: Duration, audio: &mut A) {
        if !self.theme_started {
            audio.play(Sound::Theme);
            self.theme_started = true;
        }
        if cmd.quit {
            self.running = false;
        }
        if cmd.toggle_minimap {
            self.overlays.toggle(Overlays::MINIMAP);
        }
        if cmd.toggle_rain {
            self.overlays.toggle(Overlays::RAIN);
        }

        if cmd.forward != 0.0 {
            self.pose.try_move(&self.grid, cmd.forward * self.move_speed);
        }
        if cmd.turn != 0.0 {
            self.pose.rotate(cmd.turn * self.rot_speed);
        }

        if cmd.fire {
            if let Some(sound) = self.weapon.fire_triggered(now) {
                audio.play(sound);
            }
        }
        self.weapon.tick(now);
    }

    /// Raycast the current view and draw the whole frame.
    pub fn render<R: Renderer>(&mut self, r: &mut R, bank: &TextureBank, screen: &Screen) {
        project_into(&self.grid, screen, &self.pose, &mut self.columns);

        r.begin_frame(screen.w, screen.h);
        r.draw_sky(bank.by_name_or_missing(SKY));
        r.draw_walls(&self.columns, bank);

        if self.overlays.contains(Overlays::MINIMAP) {
            r.draw_minimap(&self.grid, &self.pose, self.minimap_scale);
        }
        r.draw_weapon(self.weapon.current_pose(), bank, screen);
        if self.overlays.contains(Overlays::RAIN) {
            r.draw_rain(&self.rain);
            self.rain.step();
        }
    }
}
