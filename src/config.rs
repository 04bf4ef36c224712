//! Runtime settings.  `Default` reproduces the reference setup; the
//! binary overrides fields from the command line.

use std::{path::PathBuf, time::Duration};

use glam::{DVec2, dvec2};

use crate::world::CameraPose;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub screen_w: usize,
    pub screen_h: usize,
    pub map_path: PathBuf,
    pub map_w: usize,
    pub map_h: usize,
    /// Cells per frame.
    pub move_speed: f64,
    /// Radians per frame.
    pub rot_speed: f64,
    pub fire_cooldown: Duration,
    pub target_fps: usize,
    pub raindrops: usize,
    pub rain_seed: u64,
    /// Pixels per map cell on the minimap.
    pub minimap_scale: usize,
    pub start_pos: DVec2,
    pub start_dir: DVec2,
    pub start_plane: DVec2,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_w: 640,
            screen_h: 480,
            map_path: PathBuf::from("resources/map.txt"),
            map_w: 24,
            map_h: 24,
            move_speed: 0.06,
            rot_speed: 0.03,
            fire_cooldown: Duration::from_millis(300),
            target_fps: 60,
            raindrops: 100,
            rain_seed: 0x5EED,
            minimap_scale: 5,
            start_pos: dvec2(22.0, 12.0),
            start_dir: dvec2(-1.0, 0.0),
            start_plane: dvec2(0.0, 0.66),
        }
    }
}

impl Config {
    pub fn start_pose(&self) -> CameraPose {
        CameraPose::new(self.start_pos, self.start_dir, self.start_plane)
    }
}
