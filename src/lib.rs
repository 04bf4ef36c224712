//! Grid raycaster: a Wolfenstein-style first-person view of a tile map.
//!
//! * [`world`]    – tile grid, camera pose, texture bank.
//! * [`engine`]   – per-column DDA raycasting and strip projection.
//! * [`sim`]      – weapon state machine, input, rain, frame loop.
//! * [`renderer`] – presentation back-ends.

pub mod config;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;
