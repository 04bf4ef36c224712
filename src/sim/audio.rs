//! Seam between the game logic and whatever plays sounds.

/// Sound cues the game can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Background track, looped for the whole session.
    Theme,
    Shotgun,
}

/// Receives play requests; device I/O lives behind this trait.
pub trait AudioSink {
    fn play(&mut self, sound: Sound);
}

/// Discards every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _sound: Sound) {}
}

/// Reports each request through `tracing` instead of a sound device.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, sound: Sound) {
        tracing::info!(?sound, "play sound");
    }
}

/// Records every request, in order.
impl AudioSink for Vec<Sound> {
    fn play(&mut self, sound: Sound) {
        self.push(sound);
    }
}
