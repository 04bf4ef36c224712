//! Built-in art: wall materials, sky and the four shotgun frames, all
//! generated at start-up so the game runs without any asset files.

use crate::{
    sim::WeaponState,
    world::{Texture, TextureBank, TextureError, shade},
};

/// Wall texture edge length in texels.
pub const WALL_SIZE: usize = 64;
/// Weapon sprite edge length in texels (drawn scaled up).
pub const SPRITE_SIZE: usize = 64;

pub const SKY: &str = "SKY";

/// Fill a bank with five wall materials, the sky and every weapon pose.
pub fn builtin_bank() -> Result<TextureBank, TextureError> {
    let mut bank = TextureBank::default_with_checker();

    bank.push_material("WALL1", Texture::bricks("WALL1", WALL_SIZE, 0xFF_8B2E1F, 0xFF_A0A0A0))?;
    bank.push_material("WALL2", Texture::stone("WALL2", WALL_SIZE, 0xFF_6E6E78))?;
    bank.push_material("WALL3", Texture::planks("WALL3", WALL_SIZE, 0xFF_9C6B30))?;
    bank.push_material("WALL4", Texture::bricks("WALL4", WALL_SIZE, 0xFF_2F5F8F, 0xFF_1A1A1A))?;
    bank.push_material("WALL5", Texture::stone("WALL5", WALL_SIZE, 0xFF_3C7A3C))?;

    bank.insert(SKY, Texture::gradient(SKY, 256, 128, 0xFF_1E3C78, 0xFF_B4C8E6))?;

    for pose in WeaponState::ALL {
        bank.insert(pose.sprite_name(), weapon_sprite(pose))?;
    }

    tracing::debug!(textures = bank.texture_count(), materials = bank.material_count(), "texture bank built");
    Ok(bank)
}

/// Procedural shotgun seen from behind, one frame per pose.
///
/// * AIM    – barrel centred.
/// * FIRE   – muzzle flash above the barrel.
/// * RECOIL – weapon kicked up and darkened.
/// * RELOAD – weapon lowered and shifted right.
pub fn weapon_sprite(pose: WeaponState) -> Texture {
    const BARREL: u32 = 0xFF_3A3A40;
    const STOCK: u32 = 0xFF_6B4423;
    const FLASH: u32 = 0xFF_FFD040;

    let s = SPRITE_SIZE as i32;
    let (ox, oy, k) = match pose {
        WeaponState::Aim | WeaponState::Fire => (0, 0, 1.0),
        WeaponState::Recoil => (0, -6, 0.8),
        WeaponState::Reload => (10, 12, 0.9),
    };
    let flash = pose == WeaponState::Fire;

    Texture::from_fn(pose.sprite_name(), SPRITE_SIZE, SPRITE_SIZE, |x, y| {
        let (x, y) = (x as i32 - ox, y as i32 - oy);
        let cx = s / 2;
        // barrel: narrow column in the upper half
        if (cx - 4..cx + 4).contains(&x) && (s / 4..s * 3 / 4).contains(&y) {
            return shade(BARREL, k);
        }
        // stock: wider block at the bottom
        if (cx - 10..cx + 10).contains(&x) && (s * 3 / 4..s).contains(&y) {
            return shade(STOCK, k);
        }
        if flash {
            let (dx, dy) = (x - cx, y - s / 8);
            if dx * dx + dy * dy < 64 {
                return FLASH;
            }
        }
        0 // transparent
    })
}
