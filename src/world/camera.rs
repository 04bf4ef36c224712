use glam::DVec2;

use super::Grid;

/// Player view-point in grid space.
///
/// * `pos` is in cell units; `floor(pos)` is the containing cell.
/// * `dir` is the heading, `plane` the camera plane.  `|plane| / |dir|`
///   sets the horizontal FoV (0.66 ≈ 66°).
/// * `dir` and `plane` are only ever rotated together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub pos: DVec2,
    pub dir: DVec2,
    pub plane: DVec2,
}

impl CameraPose {
    pub fn new(pos: DVec2, dir: DVec2, plane: DVec2) -> Self {
        Self { pos, dir, plane }
    }

    /// Grid cell the camera stands in.
    #[inline]
    pub fn cell(&self) -> (i32, i32) {
        (self.pos.x.floor() as i32, self.pos.y.floor() as i32)
    }

    /// Ray direction for camera-space offset `camera_x` in `[-1, 1)`.
    #[inline]
    pub fn ray_dir(&self, camera_x: f64) -> DVec2 {
        self.dir + self.plane * camera_x
    }

    /// Full horizontal field of view in radians.
    pub fn fov(&self) -> f64 {
        2.0 * self.dir.angle_to(self.dir + self.plane).abs()
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Rotate heading and camera plane by `angle` radians
    /// (positive = counter-clockwise).
    pub fn rotate(&mut self, angle: f64) {
        let r = DVec2::from_angle(angle);
        self.dir = r.rotate(self.dir);
        self.plane = r.rotate(self.plane);
    }

    /// Walk `distance` cells along the heading (negative = backwards).
    ///
    /// X and Y are tested against the grid separately, X first, so a
    /// blocked axis still lets the player slide along the other one.
    pub fn try_move(&mut self, grid: &Grid, distance: f64) {
        let delta = self.dir * distance;

        let nx = self.pos.x + delta.x;
        if grid.is_walkable(nx.floor() as i32, self.pos.y.floor() as i32) {
            self.pos.x = nx;
        }

        let ny = self.pos.y + delta.y;
        if grid.is_walkable(self.pos.x.floor() as i32, ny.floor() as i32) {
            self.pos.y = ny;
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
