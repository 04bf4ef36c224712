// Format-agnostic repository of textures.
// The renderer and world logic interact through `TextureId` only.

use std::collections::HashMap;

/// Runtime handle for a texture in this bank.
///
/// *Guaranteed* to remain stable for the lifetime of the bank.
pub type TextureId = u16;

/// `TextureId` whose pixels are the checkerboard fallback.
/// Always = 0 because `TextureBank::new()` inserts it first.
pub const NO_TEXTURE: TextureId = 0;

/// Alpha bits of a texel; `0` means transparent (sprites only).
pub const ALPHA_MASK: u32 = 0xFF_000000;

/// CPU-side storage: 32-bit **ARGB** (0xAARRGGBB) in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub name: String,
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<u32>,
}

/// Convenience checkerboard 8×8 (magenta/black).
impl Default for Texture {
    fn default() -> Self {
        Texture::from_fn("CHECKER", 8, 8, |x, y| {
            if (x ^ y) & 1 == 0 {
                0xFF_FF00FF
            } else {
                0xFF_000000
            }
        })
    }
}

impl Texture {
    /// Build a texture by evaluating `f(x, y)` for every texel.
    pub fn from_fn<F>(name: &str, w: usize, h: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> u32,
    {
        let mut pixels = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                pixels.push(f(x, y));
            }
        }
        Texture {
            name: name.to_string(),
            w,
            h,
            pixels,
        }
    }

    /// Texel at `(x, y)`; coordinates are clamped to the texture.
    #[inline]
    pub fn texel(&self, x: usize, y: usize) -> u32 {
        let x = x.min(self.w - 1);
        let y = y.min(self.h - 1);
        self.pixels[y * self.w + x]
    }

    /*──────────────────── procedural wall materials ─────────────────*/

    /// Running-bond brick pattern with mortar lines.
    pub fn bricks(name: &str, size: usize, brick: u32, mortar: u32) -> Self {
        let row_h = (size / 4).max(1);
        let brick_w = (size / 2).max(1);
        Texture::from_fn(name, size, size, |x, y| {
            let row = y / row_h;
            let shift = if row % 2 == 0 { 0 } else { brick_w / 2 };
            let bx = (x + shift) % brick_w;
            if y % row_h == 0 || bx == 0 {
                mortar
            } else {
                brick
            }
        })
    }

    /// Vertical planks whose colour is modulated per plank.
    pub fn planks(name: &str, size: usize, base: u32) -> Self {
        let plank_w = (size / 8).max(1);
        Texture::from_fn(name, size, size, |x, _| {
            if x % plank_w == 0 {
                0xFF_000000
            } else {
                shade(base, 0.75 + 0.05 * ((x / plank_w) % 5) as f32)
            }
        })
    }

    /// Large stone blocks with a bevelled lighter top-left edge.
    pub fn stone(name: &str, size: usize, base: u32) -> Self {
        let block = (size / 2).max(1);
        Texture::from_fn(name, size, size, |x, y| {
            let (bx, by) = (x % block, y % block);
            if bx == 0 || by == 0 {
                shade(base, 1.3)
            } else if bx == block - 1 || by == block - 1 {
                shade(base, 0.5)
            } else {
                base
            }
        })
    }

    /// Vertical gradient from `top` to `bottom`, used for the sky.
    pub fn gradient(name: &str, w: usize, h: usize, top: u32, bottom: u32) -> Self {
        Texture::from_fn(name, w, h, |_, y| {
            let t = if h > 1 { y as f32 / (h - 1) as f32 } else { 0.0 };
            lerp_rgb(top, bottom, t)
        })
    }
}

/// Scale the RGB channels of `c` by `k`, keeping alpha.
pub fn shade(c: u32, k: f32) -> u32 {
    let ch = |s: u32| (((c >> s) & 0xFF) as f32 * k).clamp(0.0, 255.0) as u32;
    (c & ALPHA_MASK) | ch(16) << 16 | ch(8) << 8 | ch(0)
}

fn lerp_rgb(a: u32, b: u32, t: f32) -> u32 {
    let ch = |s: u32| {
        let (ca, cb) = (((a >> s) & 0xFF) as f32, ((b >> s) & 0xFF) as f32);
        (ca + (cb - ca) * t) as u32
    };
    ALPHA_MASK | ch(16) << 16 | ch(8) << 8 | ch(0)
}

/// Things that can go wrong when using the bank.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextureError {
    /// Attempted to insert a second texture with an existing name.
    #[error("texture name `{0}` already present in bank")]
    Duplicate(String),

    /// A texture with no texels cannot be sampled.
    #[error("texture `{0}` has zero size")]
    Empty(String),
}

/// A format-agnostic cache of textures.
///
/// * Stores exactly one copy of every name.
/// * ID **0** is always the “missing” checkerboard.
/// * Wall materials are an ordered list of ids: material `m` is the
///   texture for grid value `m + 1`.
pub struct TextureBank {
    by_name: HashMap<String, TextureId>,
    data: Vec<Texture>,
    materials: Vec<TextureId>,
}

impl TextureBank {
    // ---------------------------------------------------------------------
    // Constructors
    // ---------------------------------------------------------------------

    /// Create an empty bank with a mandatory *missing* texture used as
    /// fallback.  The texture is inserted under the fixed name `"MISSING"`
    /// and obtains the handle **0**.
    pub fn new(missing_tex: Texture) -> Self {
        let mut by_name = HashMap::new();
        by_name.insert("MISSING".into(), NO_TEXTURE);
        Self {
            by_name,
            data: vec![missing_tex],
            materials: Vec::new(),
        }
    }

    pub fn default_with_checker() -> Self {
        Self::new(Texture::default())
    }

    // ---------------------------------------------------------------------
    // Query helpers
    // ---------------------------------------------------------------------

    /// Number of textures stored (including the “missing” one).
    pub fn texture_count(&self) -> usize {
        self.data.len()
    }

    /// Obtain the id for a *loaded* texture by name.
    pub fn id(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    /// Fallback-safe query: unknown names resolve to the checkerboard id.
    pub fn id_or_missing(&self, name: &str) -> TextureId {
        self.id(name).unwrap_or(NO_TEXTURE)
    }

    /// Borrow a texture by name; unknown names give the checkerboard.
    pub fn by_name_or_missing(&self, name: &str) -> &Texture {
        &self.data[self.id_or_missing(name) as usize]
    }

    /// Texture for wall material `material`; unknown materials give the
    /// checkerboard.
    pub fn material(&self, material: u32) -> &Texture {
        let id = self
            .materials
            .get(material as usize)
            .copied()
            .unwrap_or(NO_TEXTURE);
        &self.data[id as usize]
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Insert a texture under `name`.
    ///
    /// * Returns the newly assigned `TextureId`.
    /// * Fails if the name already exists (`Duplicate`) or the texture
    ///   has no texels (`Empty`).
    pub fn insert<S: Into<String>>(
        &mut self,
        name: S,
        tex: Texture,
    ) -> Result<TextureId, TextureError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(TextureError::Duplicate(name));
        }
        if tex.w == 0 || tex.h == 0 || tex.pixels.len() < tex.w * tex.h {
            return Err(TextureError::Empty(name));
        }
        let id = self.data.len() as TextureId;
        self.data.push(tex);
        self.by_name.insert(name, id);
        Ok(id)
    }

    /// Insert `tex` and append it to the wall-material list.
    pub fn push_material<S: Into<String>>(
        &mut self,
        name: S,
        tex: Texture,
    ) -> Result<TextureId, TextureError> {
        let id = self.insert(name, tex)?;
        self.materials.push(id);
        Ok(id)
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
