//! Tile map: a fixed-size grid of wall-material indices.
//!
//! * `0` = empty, walkable floor.
//! * `n > 0` = solid wall using material `n - 1`.
//!
//! The on-disk format is plain text: whitespace separated integers in
//! row-major order (row `y`, then column `x`).

use std::{fs, io, path::Path};

use thiserror::Error;

/// Value stored in one grid cell.
pub type Cell = u32;

/// Cell value meaning "nothing here".
pub const EMPTY: Cell = 0;

/// Things that can go wrong while building a [`Grid`].
#[derive(Error, Debug)]
pub enum MapError {
    /// Map file could not be read.
    #[error("cannot read map file: {0}")]
    Io(#[from] io::Error),

    /// Input ran out before every cell had a value.
    #[error("map data ends early: no value for cell ({x}, {y})")]
    Short { x: usize, y: usize },

    /// A token was not a non-negative integer.
    #[error("bad map value `{token}` at cell ({x}, {y})")]
    BadToken { token: String, x: usize, y: usize },

    /// `cells.len()` disagrees with `width * height`.
    #[error("grid is {width}x{height} but {len} cells were supplied")]
    SizeMismatch { width: usize, height: usize, len: usize },
}

/// Immutable tile map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// `cells[y * width + x]`
    cells: Vec<Cell>,
}

impl Grid {
    // ---------------------------------------------------------------------
    // Constructors
    // ---------------------------------------------------------------------

    pub fn new(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, MapError> {
        if cells.len() != width * height {
            return Err(MapError::SizeMismatch {
                width,
                height,
                len: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse `width * height` integers from `text`.  Extra trailing
    /// tokens are ignored.
    pub fn parse(text: &str, width: usize, height: usize) -> Result<Self, MapError> {
        let mut tokens = text.split_whitespace();
        let mut cells = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                let tok = tokens.next().ok_or(MapError::Short { x, y })?;
                let value = tok.parse::<Cell>().map_err(|_| MapError::BadToken {
                    token: tok.to_owned(),
                    x,
                    y,
                })?;
                cells.push(value);
            }
        }

        Self::new(width, height, cells)
    }

    /// Load a map file from disk.
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        width: usize,
        height: usize,
    ) -> Result<Self, MapError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let grid = Self::parse(&text, width, height)?;
        tracing::info!(
            path = %path.display(),
            width,
            height,
            walls = grid.wall_count(),
            "map loaded"
        );
        Ok(grid)
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(x, y)`, or `None` outside the map.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    /// True for an in-bounds empty cell.  Off-map counts as blocked.
    #[inline]
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(EMPTY)
    }

    #[inline]
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|c| c > EMPTY)
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c > EMPTY).count()
    }

    /// Iterate `(x, y, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (i % self.width, i / self.width, c))
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
