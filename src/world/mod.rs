mod camera;
mod grid;
mod texture;

pub use camera::CameraPose;

pub use grid::{Cell, EMPTY, Grid, MapError};

pub use texture::{
    ALPHA_MASK, NO_TEXTURE, Texture, TextureBank, TextureError, TextureId, shade,
};
