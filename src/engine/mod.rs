//! Raycasting core: per-column DDA and the projection helpers that turn
//! a hit into a screen strip.

pub mod projection;
pub mod raycast;
pub mod types;

pub use projection::{WallStrip, texture_column};
pub use raycast::{ColumnHit, Side, cast_ray, max_steps, project, project_into};
pub use types::Screen;
