//! Rendering abstraction layer.
//!
//! *The rest of the engine never touches a pixel buffer directly.*
//! The frame loop hands ray hits, sprites and overlay primitives to a
//! type that implements [`Renderer`].
//!
//! * Back-ends only implement a handful of primitives.
//! * A blanket impl [`RendererExt`] builds the weapon, minimap and rain
//!   overlays out of those primitives so every back-end gets them.

use crate::{
    engine::{ColumnHit, Screen},
    sim::{Rain, WeaponState, rain::DROP_LEN},
    world::{CameraPose, Grid, Texture, TextureBank},
};

pub mod assets;
pub mod software;

pub use software::Software;

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

pub const BLACK: Rgba = 0xFF_000000;
pub const RED: Rgba = 0xFF_FF0000;
pub const GREEN: Rgba = 0xFF_00FF00;
pub const RAIN_BLUE: Rgba = 0xFF_87CEFA;

/// Side length of the on-screen weapon sprite.
pub const WEAPON_SIZE: i32 = 256;

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and
    /// clear it to black.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Stretch `sky` over the upper half of the screen.
    fn draw_sky(&mut self, sky: &Texture);

    /// One textured vertical strip per column; `None` columns stay blank.
    fn draw_walls(&mut self, columns: &[Option<ColumnHit>], bank: &TextureBank);

    /// Blit `tex` scaled into the `w`×`h` box at `(x, y)`, skipping
    /// transparent texels.
    fn draw_sprite(&mut self, tex: &Texture, x: i32, y: i32, w: i32, h: i32);

    /// Solid rectangle, clipped to the screen.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, col: Rgba);

    /// One-pixel line, clipped to the screen.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, col: Rgba);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Overlays built on top of the [`Renderer`] primitives.
pub trait RendererExt: Renderer {
    /// Weapon sprite for `pose`, bottom-centre.
    fn draw_weapon(&mut self, pose: WeaponState, bank: &TextureBank, screen: &Screen) {
        let tex = bank.by_name_or_missing(pose.sprite_name());
        self.draw_sprite(
            tex,
            screen.half_w - WEAPON_SIZE / 2,
            screen.h as i32 - WEAPON_SIZE,
            WEAPON_SIZE,
            WEAPON_SIZE,
        );
    }

    /// Top-down map in the top-left corner: walls red, floor black,
    /// player marker red, heading line green.
    fn draw_minimap(&mut self, grid: &Grid, cam: &CameraPose, scale: usize) {
        let s = scale as i32;
        for (x, y, cell) in grid.iter() {
            let col = if cell > 0 { RED } else { BLACK };
            self.fill_rect(x as i32 * s, y as i32 * s, s, s, col);
        }

        let px = (cam.pos.x * scale as f64) as i32;
        let py = (cam.pos.y * scale as f64) as i32;
        self.fill_rect(px - 2, py - 2, 4, 4, RED);

        let tip = cam.pos * scale as f64 + cam.dir * (5 * scale) as f64;
        self.draw_line(px, py, tip.x as i32, tip.y as i32, GREEN);
    }

    /// Every raindrop as a short vertical streak.
    fn draw_rain(&mut self, rain: &Rain) {
        for d in rain.drops() {
            let (x, y) = (d.x as i32, d.y as i32);
            self.draw_line(x, y, x, y + DROP_LEN as i32, RAIN_BLUE);
        }
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}
