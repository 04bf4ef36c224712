//! Per-column ray / grid traversal (DDA).
//!
//! For every screen column a ray leaves the camera through the camera
//! plane and steps cell by cell, always crossing whichever grid line is
//! nearer, until it enters a wall cell.  The result is a [`ColumnHit`]
//! per column, or `None` when the ray leaves the map or exceeds the
//! step bound.
//!
//! ```text
//!   camera_x = 2·x / w − 1            (-1 … +1)
//!   ray      = dir + plane · camera_x
//!   perp     = (map − pos + (1 − step)/2) / ray      (hit axis only)
//! ```
//!
//! Distances are measured along the view axis, not along the ray, so
//! straight walls stay straight (no fisheye).

use glam::DVec2;

use crate::{
    engine::{projection::texture_column, types::Screen},
    world::{CameraPose, Grid},
};

/// Which family of grid lines the ray crossed last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Crossed a vertical line (`x = const`): east/west face.
    X,
    /// Crossed a horizontal line (`y = const`): north/south face.
    Y,
}

/// What one screen column sees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnHit {
    pub cell_x: i32,
    pub cell_y: i32,
    pub side: Side,
    /// Distance along the camera's forward axis.
    pub perp_dist: f64,
    /// Grid value minus one.
    pub material: u32,
    /// Fractional hit position along the face, in `[0, 1)`.
    pub tex_u: f64,
    /// Face seen from the side where `tex_u` runs right to left; the
    /// texel column is flipped so textures read the same from every
    /// direction.
    pub mirrored: bool,
}

impl ColumnHit {
    /// Texel column of a texture `tex_w` texels wide.
    #[inline]
    pub fn texel_column(&self, tex_w: usize) -> usize {
        texture_column(self.tex_u, self.mirrored, tex_w)
    }
}

/// Hard cap on DDA iterations for a grid: a ray inside the map can never
/// cross more than `width + height` cell boundaries before leaving it.
#[inline]
pub fn max_steps(grid: &Grid) -> usize {
    grid.width() + grid.height()
}

/// Project every column of `screen`.  `result.len() == screen.w`.
pub fn project(grid: &Grid, screen: &Screen, pose: &CameraPose) -> Vec<Option<ColumnHit>> {
    let mut out = Vec::with_capacity(screen.w);
    project_into(grid, screen, pose, &mut out);
    out
}

/// Like [`project`] but reuses `out` between frames.
pub fn project_into(
    grid: &Grid,
    screen: &Screen,
    pose: &CameraPose,
    out: &mut Vec<Option<ColumnHit>>,
) {
    debug_assert!(pose.dir != DVec2::ZERO, "camera heading must be non-zero");

    out.clear();
    let w = screen.w as f64;
    for x in 0..screen.w {
        let camera_x = 2.0 * x as f64 / w - 1.0;
        let hit = cast_ray(grid, pose.pos, pose.ray_dir(camera_x));
        if hit.is_none() {
            tracing::trace!(column = x, "ray left the map without a hit");
        }
        out.push(hit);
    }
}

/// Per-axis DDA state.
#[derive(Clone, Copy)]
struct Axis {
    map: i32,
    step: i32,
    delta: f64,
    side_dist: f64,
}

impl Axis {
    fn new(pos: f64, ray: f64) -> Self {
        let map = pos.floor() as i32;
        // Zero component: this axis is never crossed.
        let delta = if ray == 0.0 {
            f64::INFINITY
        } else {
            (1.0 / ray).abs()
        };
        let (step, edge) = if ray < 0.0 {
            (-1, pos - map as f64)
        } else {
            (1, map as f64 + 1.0 - pos)
        };
        let side_dist = if delta.is_infinite() {
            f64::INFINITY
        } else {
            edge * delta
        };
        Self {
            map,
            step,
            delta,
            side_dist,
        }
    }

    #[inline]
    fn advance(&mut self) {
        self.side_dist += self.delta;
        self.map += self.step;
    }

    /// Distance along the view axis to the face just crossed.
    #[inline]
    fn perp(&self, pos: f64, ray: f64) -> f64 {
        (self.map as f64 - pos + (1 - self.step) as f64 / 2.0) / ray
    }
}

/// Trace a single ray from `pos` along `ray`.
pub fn cast_ray(grid: &Grid, pos: DVec2, ray: DVec2) -> Option<ColumnHit> {
    let mut ax = Axis::new(pos.x, ray.x);
    let mut ay = Axis::new(pos.y, ray.y);

    for _ in 0..max_steps(grid) {
        // ties go to X
        let side = if ax.side_dist <= ay.side_dist {
            ax.advance();
            Side::X
        } else {
            ay.advance();
            Side::Y
        };

        let cell = grid.get(ax.map, ay.map)?;
        if cell == 0 {
            continue;
        }

        let perp_dist = match side {
            Side::X => ax.perp(pos.x, ray.x),
            Side::Y => ay.perp(pos.y, ray.y),
        };
        debug_assert!(perp_dist >= 0.0, "negative wall distance {perp_dist}");

        let wall = match side {
            Side::X => pos.y + perp_dist * ray.y,
            Side::Y => pos.x + perp_dist * ray.x,
        };
        let tex_u = wall - wall.floor();
        let mirrored = (side == Side::X && ray.x > 0.0) || (side == Side::Y && ray.y < 0.0);

        return Some(ColumnHit {
            cell_x: ax.map,
            cell_y: ay.map,
            side,
            perp_dist,
            material: cell - 1,
            tex_u,
            mirrored,
        });
    }
    None
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    /// `w`×`h` room, border = 1, interior = 0.
    fn walled_room(w: usize, h: usize) -> Grid {
        let cells = (0..w * h)
            .map(|i| {
                let (x, y) = (i % w, i / w);
                (x == 0 || y == 0 || x == w - 1 || y == h - 1) as u32
            })
            .collect();
        Grid::new(w, h, cells).unwrap()
    }

    /// 6×6 map whose only walls are the column x = 5 (material 3).
    fn east_wall() -> Grid {
        let cells = (0..36).map(|i| if i % 6 == 5 { 4 } else { 0 }).collect();
        Grid::new(6, 6, cells).unwrap()
    }

    fn screen(w: usize) -> Screen {
        Screen::new(w, 100)
    }

    #[test]
    fn one_hit_per_column() {
        let grid = walled_room(10, 10);
        let pose = CameraPose::new(dvec2(5.5, 5.5), dvec2(-1.0, 0.0), dvec2(0.0, 0.66));
        let cols = project(&grid, &screen(64), &pose);
        assert_eq!(cols.len(), 64);
        assert!(cols.iter().all(Option::is_some));
    }

    #[test]
    fn center_column_facing_west_hits_x_side() {
        let grid = walled_room(10, 10);
        let pose = CameraPose::new(dvec2(5.5, 5.5), dvec2(-1.0, 0.0), dvec2(0.0, 0.66));
        let cols = project(&grid, &screen(2), &pose);
        let hit = cols[1].unwrap(); // camera_x = 0
        assert_eq!(hit.side, Side::X);
        assert_eq!((hit.cell_x, hit.cell_y), (0, 5));
        assert!((hit.perp_dist - 4.5).abs() < 1e-12);
        assert_eq!(hit.material, 0);
    }

    #[test]
    fn projection_is_deterministic() {
        let grid = walled_room(24, 24);
        let mut pose = CameraPose::new(dvec2(22.0, 12.0), dvec2(-1.0, 0.0), dvec2(0.0, 0.66));
        pose.rotate(0.37);
        let a = project(&grid, &screen(320), &pose);
        let b = project(&grid, &screen(320), &pose);
        assert_eq!(a, b);

        let mut reused = Vec::new();
        project_into(&grid, &screen(320), &pose, &mut reused);
        project_into(&grid, &screen(320), &pose, &mut reused);
        assert_eq!(a, reused);
    }

    #[test]
    fn edge_columns_span_the_fov() {
        let pose = CameraPose::new(dvec2(2.5, 2.5), dvec2(-1.0, 0.0), dvec2(0.0, 0.66));
        let w = 320usize;
        let first = pose.ray_dir(2.0 * 0.0 / w as f64 - 1.0);
        let last = pose.ray_dir(2.0 * (w - 1) as f64 / w as f64 - 1.0);
        assert_eq!(first, dvec2(-1.0, -0.66));
        assert_ne!(first, last);
        // the two edge rays lie on opposite sides of the heading
        assert!(pose.dir.perp_dot(first) * pose.dir.perp_dot(last) < 0.0);
        let spread = first.angle_to(last).abs();
        assert!((spread - pose.fov()).abs() < 0.01);
    }

    #[test]
    fn x_hit_facing_east_is_mirrored() {
        let grid = east_wall();
        let pose = CameraPose::new(dvec2(2.0, 2.0), dvec2(1.0, 0.0), dvec2(0.0, 0.66));

        // camera_x = 0: straight ray, raw fraction 0
        let hit = project(&grid, &screen(2), &pose)[1].unwrap();
        assert_eq!((hit.cell_x, hit.side), (5, Side::X));
        assert!((hit.perp_dist - 3.0).abs() < 1e-12);
        assert_eq!(hit.material, 3);
        assert_eq!(hit.tex_u, 0.0);
        assert!(hit.mirrored);
        // texW - floor(raw * texW) - 1
        assert_eq!(hit.texel_column(64), 63);

        // camera_x = 0.5: ray (1, 0.33) meets x = 5 at y = 2.99
        let hit = project(&grid, &screen(4), &pose)[3].unwrap();
        assert_eq!((hit.cell_x, hit.cell_y, hit.side), (5, 2, Side::X));
        let wall = 2.0 + hit.perp_dist * 0.33;
        let raw = wall - wall.floor();
        assert!((hit.tex_u - raw).abs() < 1e-9);
        assert!((0.0..1.0).contains(&hit.tex_u));
        assert!(hit.mirrored);
        assert_eq!(hit.texel_column(64), 64 - (raw * 64.0) as usize - 1);
        assert_eq!(hit.texel_column(64), 0);
    }

    #[test]
    fn x_hit_facing_west_is_not_mirrored() {
        let grid = walled_room(6, 6);
        let pose = CameraPose::new(dvec2(3.0, 2.0), dvec2(-1.0, 0.0), dvec2(0.0, 0.66));
        // camera_x = 0.5: ray (-1, 0.33) meets x = 1 at y = 2.66
        let hit = project(&grid, &screen(4), &pose)[3].unwrap();
        assert_eq!((hit.cell_x, hit.side), (0, Side::X));
        assert!((hit.perp_dist - 2.0).abs() < 1e-12);
        assert!((hit.tex_u - 0.66).abs() < 1e-9);
        assert!(!hit.mirrored);
        assert_eq!(hit.texel_column(64), 42);
    }

    #[test]
    fn five_by_five_top_wall() {
        let grid = walled_room(5, 5);
        let pose = CameraPose::new(dvec2(2.5, 2.5), dvec2(0.0, -1.0), dvec2(0.66, 0.0));
        let cols = project(&grid, &screen(1), &pose);
        assert_eq!(cols.len(), 1);
        let hit = cols[0].unwrap();
        assert_eq!(hit.cell_y, 0);
        assert_eq!(hit.side, Side::Y);
        // the top wall's face is the line y = 1
        assert!((hit.perp_dist - 1.5).abs() < 1e-12);
    }

    #[test]
    fn center_ray_north_reports_face_distance() {
        let grid = walled_room(5, 5);
        let pose = CameraPose::new(dvec2(2.5, 2.5), dvec2(0.0, -1.0), dvec2(0.66, 0.0));
        let hit = project(&grid, &screen(2), &pose)[1].unwrap();
        assert_eq!((hit.cell_x, hit.cell_y, hit.side), (2, 0, Side::Y));
        assert!((hit.perp_dist - 1.5).abs() < 1e-12);
        // Y hit with ray.y < 0 is mirrored: raw 0.5 samples texel 31 of 64
        assert!((hit.tex_u - 0.5).abs() < 1e-12);
        assert!(hit.mirrored);
        assert_eq!(hit.texel_column(64), 31);
    }

    #[test]
    fn perpendicular_distance_is_flat_across_columns() {
        // Facing a straight wall every column reports the same depth.
        let grid = walled_room(40, 40);
        let pose = CameraPose::new(dvec2(20.5, 20.5), dvec2(0.0, -1.0), dvec2(0.66, 0.0));
        for hit in project(&grid, &screen(33), &pose).into_iter().flatten() {
            if hit.side == Side::Y && hit.cell_y == 0 {
                assert!((hit.perp_dist - 19.5).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn open_map_yields_no_hit() {
        let grid = Grid::new(4, 4, vec![0; 16]).unwrap();
        let pose = CameraPose::new(dvec2(2.5, 2.5), dvec2(1.0, 0.0), dvec2(0.0, 0.66));
        let cols = project(&grid, &screen(8), &pose);
        assert_eq!(cols.len(), 8);
        assert!(cols.iter().all(Option::is_none));
    }

    #[test]
    fn axis_aligned_ray_with_integer_position() {
        // ray.y == 0 and pos.y on a grid line must not produce NaN
        let grid = walled_room(6, 6);
        let hit = cast_ray(&grid, dvec2(3.0, 3.0), dvec2(1.0, 0.0)).unwrap();
        assert_eq!((hit.cell_x, hit.cell_y, hit.side), (5, 3, Side::X));
        assert!((hit.perp_dist - 2.0).abs() < 1e-12);
    }

    #[test]
    fn exact_diagonal_tie_prefers_x() {
        let grid = walled_room(6, 6);
        // From the cell centre both first crossings are 0.5 away.
        let mut map = vec![0u32; 36];
        map[2 * 6 + 3] = 2; // (3, 2)
        map[3 * 6 + 2] = 3; // (2, 3)
        let grid_tie = Grid::new(6, 6, map).unwrap();
        let hit = cast_ray(&grid_tie, dvec2(2.5, 2.5), dvec2(1.0, 1.0)).unwrap();
        assert_eq!(hit.side, Side::X);
        assert_eq!((hit.cell_x, hit.cell_y), (3, 2));
        assert_eq!(hit.material, 1);
        assert!(cast_ray(&grid, dvec2(2.5, 2.5), dvec2(1.0, 1.0)).is_some());
    }

    #[test]
    fn step_bound_matches_grid() {
        assert_eq!(max_steps(&walled_room(24, 24)), 48);
    }
}
