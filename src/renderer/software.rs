//! ---------------------------------------------------------------------------
//! Software (CPU) column renderer
//!
//! * Fills a `Vec<u32>` frame-buffer in **0xAARRGGBB** format.
//! * Walls are drawn one screen column at a time straight from the
//!   raycaster's [`ColumnHit`]s; there is no depth buffer because every
//!   column holds exactly one wall.
//! ---------------------------------------------------------------------------

use crate::{
    engine::{ColumnHit, Screen, WallStrip},
    renderer::{BLACK, Renderer, Rgba},
    world::{ALPHA_MASK, Texture, TextureBank},
};

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    screen: Option<Screen>,
}

impl Software {
    #[inline]
    fn width(&self) -> usize {
        self.screen.map_or(0, |s| s.w)
    }

    #[inline]
    fn height(&self) -> usize {
        self.screen.map_or(0, |s| s.h)
    }

    /// Read back one pixel (tests and screenshots).
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.scratch[y * self.width() + x])
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, col: Rgba) {
        if (0..self.width() as i32).contains(&x) && (0..self.height() as i32).contains(&y) {
            let w = self.width();
            self.scratch[y as usize * w + x as usize] = col;
        }
    }

    /// Draw a single vertical slice (one screen column).
    fn draw_column(&mut self, x: usize, hit: &ColumnHit, tex: &Texture, screen: &Screen) {
        let strip = WallStrip::from_hit(hit, screen);
        if strip.is_empty() {
            return;
        }
        let u = hit.texel_column(tex.w);
        for y in strip.draw_start..=strip.draw_end {
            let v = strip.texture_row(y, tex.h);
            self.scratch[y as usize * screen.w + x] = tex.texel(u, v);
        }
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if self.width() != w || self.height() != h {
            self.screen = Some(Screen::new(w, h));
            self.scratch.resize(w * h, 0);
        }
        self.scratch.fill(BLACK);
    }

    fn draw_sky(&mut self, sky: &Texture) {
        let (w, h) = (self.width(), self.height() / 2);
        for y in 0..h {
            let v = y * sky.h / h.max(1);
            let row = &mut self.scratch[y * w..(y + 1) * w];
            for (x, px) in row.iter_mut().enumerate() {
                *px = sky.texel(x * sky.w / w.max(1), v);
            }
        }
    }

    fn draw_walls(&mut self, columns: &[Option<ColumnHit>], bank: &TextureBank) {
        let Some(screen) = self.screen else {
            return;
        };
        for (x, hit) in columns.iter().enumerate().take(screen.w) {
            if let Some(hit) = hit {
                self.draw_column(x, hit, bank.material(hit.material), &screen);
            }
        }
    }

    fn draw_sprite(&mut self, tex: &Texture, x: i32, y: i32, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }
        for dy in 0..h {
            let v = dy as usize * tex.h / h as usize;
            for dx in 0..w {
                let texel = tex.texel(dx as usize * tex.w / w as usize, v);
                if texel & ALPHA_MASK != 0 {
                    self.put(x + dx, y + dy, texel);
                }
            }
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, col: Rgba) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width() as i32);
        let y1 = (y + h).min(self.height() as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let stride = self.width();
        for yy in y0..y1 {
            let row = yy as usize * stride;
            self.scratch[row + x0 as usize..row + x1 as usize].fill(col);
        }
    }

    /// Integer Bresenham line‑drawing algorithm.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, col: Rgba) {
        let mut x0 = x0;
        let mut y0 = y0;
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x0, y0, col);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width(), self.height());
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::Side,
        renderer::{GREEN, RED, RendererExt},
        world::{CameraPose, Grid},
    };
    use glam::dvec2;

    /* tiny helpers ---------------------------------------------------*/
    fn tiny_bank() -> TextureBank {
        let mut bank = TextureBank::default_with_checker();
        bank.push_material("BLUE", Texture::from_fn("BLUE", 4, 4, |_, _| 0xFF_0000FF))
            .unwrap();
        bank
    }

    fn blue_hit(perp_dist: f64) -> ColumnHit {
        ColumnHit {
            cell_x: 3,
            cell_y: 1,
            side: Side::X,
            perp_dist,
            material: 0,
            tex_u: 0.5,
            mirrored: false,
        }
    }

    #[test]
    fn software_renders_columns() {
        let bank = tiny_bank();
        let mut sw = Software::default();
        sw.begin_frame(8, 8);
        sw.draw_walls(&[None, Some(blue_hit(2.0)), Some(blue_hit(1.0))], &bank);

        // column 0 blank, column 1 rows 2..=6, column 2 full height
        assert!((0..8).all(|y| sw.pixel(0, y) == Some(BLACK)));
        assert_eq!(sw.pixel(1, 1), Some(BLACK));
        assert!((2..=6).all(|y| sw.pixel(1, y) == Some(0xFF_0000FF)));
        assert!((0..8).all(|y| sw.pixel(2, y) == Some(0xFF_0000FF)));

        let mut seen = 0;
        sw.end_frame(|fb, w, h| {
            assert_eq!((w, h), (8, 8));
            seen = fb.iter().filter(|&&px| px == 0xFF_0000FF).count();
        });
        assert_eq!(seen, 5 + 8);
    }

    #[test]
    fn unknown_material_draws_checker() {
        let bank = tiny_bank();
        let mut sw = Software::default();
        sw.begin_frame(4, 4);
        let hit = ColumnHit {
            material: 9,
            ..blue_hit(0.5)
        };
        sw.draw_walls(&[Some(hit)], &bank);
        assert!((0..4).all(|y| sw.pixel(0, y) != Some(0xFF_0000FF)));
        assert!((0..4).all(|y| sw.pixel(0, y) != Some(BLACK) || y % 2 == 1));
    }

    #[test]
    fn sky_fills_top_half_only() {
        let sky = Texture::from_fn("SKY", 2, 2, |_, _| 0xFF_112233);
        let mut sw = Software::default();
        sw.begin_frame(6, 6);
        sw.draw_sky(&sky);
        assert_eq!(sw.pixel(5, 2), Some(0xFF_112233));
        assert_eq!(sw.pixel(0, 3), Some(BLACK));
    }

    #[test]
    fn sprite_skips_transparent_texels() {
        let tex = Texture::from_fn("HALF", 2, 1, |x, _| if x == 0 { 0xFF_FFFFFF } else { 0 });
        let mut sw = Software::default();
        sw.begin_frame(4, 2);
        sw.draw_sprite(&tex, 0, 0, 4, 2);
        assert_eq!(sw.pixel(1, 1), Some(0xFF_FFFFFF));
        assert_eq!(sw.pixel(2, 1), Some(BLACK));
        // fully off screen is harmless
        sw.draw_sprite(&tex, -100, -100, 4, 2);
    }

    #[test]
    fn minimap_marks_walls_and_player() {
        let grid = Grid::parse("1 1 1\n1 0 1\n1 1 1", 3, 3).unwrap();
        let cam = CameraPose::new(dvec2(1.5, 1.5), dvec2(1.0, 0.0), dvec2(0.0, 0.66));
        let mut sw = Software::default();
        sw.begin_frame(40, 40);
        sw.draw_minimap(&grid, &cam, 5);

        assert_eq!(sw.pixel(0, 0), Some(RED)); // wall cell
        assert_eq!(sw.pixel(9, 5), Some(BLACK)); // floor cell
        assert_eq!(sw.pixel(6, 6), Some(RED)); // player marker
        assert_eq!(sw.pixel(12, 7), Some(GREEN)); // heading line
    }

    #[test]
    fn line_is_clipped() {
        let mut sw = Software::default();
        sw.begin_frame(4, 4);
        sw.draw_line(-3, 1, 10, 1, GREEN);
        assert!((0..4).all(|x| sw.pixel(x, 1) == Some(GREEN)));
        sw.fill_rect(2, 2, 10, 10, RED);
        assert_eq!(sw.pixel(3, 3), Some(RED));
        assert_eq!(sw.pixel(1, 3), Some(BLACK));
    }
}
