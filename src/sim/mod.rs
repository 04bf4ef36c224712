pub mod audio;
mod components;
pub mod rain;
mod tic;
mod weapon;

pub use audio::{AudioSink, LogAudio, NullAudio, Sound};
pub use components::{InputCmd, Overlays};
pub use rain::{Rain, Raindrop};
pub use tic::Game;
pub use weapon::{DEFAULT_COOLDOWN, WeaponState, WeaponStateMachine};
