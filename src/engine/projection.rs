//! Column height and texture lookup for one [`ColumnHit`].

use crate::engine::{raycast::ColumnHit, types::Screen};

/// Vertical extent of one wall slice on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallStrip {
    /// `screen_h / perp_dist`, may exceed the screen.
    pub line_height: i32,
    /// Unclamped top row; texture rows are measured from here.
    pub top: i32,
    /// First visible row (clamped to 0).
    pub draw_start: i32,
    /// Last visible row (clamped to `h - 1`).
    pub draw_end: i32,
}

impl WallStrip {
    pub fn new(perp_dist: f64, screen: &Screen) -> Self {
        let h = screen.h as i32;
        // `as` saturates, so a wall touching the camera is just very tall
        let line_height = (screen.h as f64 / perp_dist) as i32;
        let top = screen.half_h - line_height / 2;
        Self {
            line_height,
            top,
            draw_start: top.max(0),
            draw_end: (line_height / 2 + screen.half_h).min(h - 1),
        }
    }

    pub fn from_hit(hit: &ColumnHit, screen: &Screen) -> Self {
        Self::new(hit.perp_dist, screen)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.draw_end < self.draw_start
    }

    /// Texture row for screen row `y` of a texture `tex_h` texels tall.
    #[inline]
    pub fn texture_row(&self, y: i32, tex_h: usize) -> usize {
        if self.line_height <= 0 {
            return 0;
        }
        let d = (y - self.top).max(0) as i64;
        ((d * tex_h as i64 / self.line_height as i64) as usize).min(tex_h - 1)
    }
}

/// Texel column for a face fraction `tex_u` in `[0, 1)`. Mirrored faces
/// count from the right edge: `tex_w - floor(tex_u * tex_w) - 1`.
#[inline]
pub fn texture_column(tex_u: f64, mirrored: bool, tex_w: usize) -> usize {
    let col = ((tex_u * tex_w as f64) as usize).min(tex_w - 1);
    if mirrored { tex_w - 1 - col } else { col }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_wall_is_centred() {
        let s = Screen::new(320, 200);
        let strip = WallStrip::new(4.0, &s);
        assert_eq!(strip.line_height, 50);
        assert_eq!((strip.draw_start, strip.draw_end), (75, 125));
        assert_eq!(strip.top, 75);
    }

    #[test]
    fn near_wall_is_clamped() {
        let s = Screen::new(320, 200);
        let strip = WallStrip::new(0.5, &s);
        assert_eq!(strip.line_height, 400);
        assert_eq!(strip.top, -100);
        assert_eq!((strip.draw_start, strip.draw_end), (0, 199));
        // cropped, not squashed: first visible row samples a quarter down
        assert_eq!(strip.texture_row(0, 64), 16);
        assert_eq!(strip.texture_row(199, 64), 47);
    }

    #[test]
    fn tiny_distance_saturates() {
        let s = Screen::new(320, 200);
        let strip = WallStrip::new(1e-300, &s);
        assert_eq!((strip.draw_start, strip.draw_end), (0, 199));
        assert!(!strip.is_empty());
    }

    #[test]
    fn texture_column_plain_and_mirrored() {
        assert_eq!(texture_column(0.0, false, 64), 0);
        assert_eq!(texture_column(0.999, false, 64), 63);
        assert_eq!(texture_column(0.0, true, 64), 63);
        assert_eq!(texture_column(0.999, true, 64), 0);
        // whole-texel boundary lands left of centre, not on it
        assert_eq!(texture_column(0.5, true, 64), 31);
        assert_eq!(texture_column(0.5, false, 64), 32);
    }
}
