use bitflags::bitflags;

/// One frame's worth of player intent, decoupled from the window system.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputCmd {
    pub forward: f64,         // –1 … +1  (back / forward)
    pub turn: f64,            // –1 … +1  (right / left)
    pub fire: bool,           // trigger edge this frame
    pub toggle_minimap: bool, // edge
    pub toggle_rain: bool,    // edge
    pub quit: bool,
}

bitflags! {
    /// Decorative layers drawn on top of the 3-D view.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Overlays: u8 {
        const MINIMAP = 0b01;
        const RAIN    = 0b10;
    }
}

impl Default for Overlays {
    /// Minimap on, rain off.
    fn default() -> Self {
        Overlays::MINIMAP
    }
}
