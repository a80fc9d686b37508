use crate::skins::{SkinVariant, TextureEntry, TextureMetadata, TextureSet};
use crate::utils::Identifier;

/// Stock Steve texture
pub const CLASSIC_DEFAULT_URL: &str = "http://assets.mojang.com/SkinTemplates/steve.png";
/// Stock Alex texture
pub const SLIM_DEFAULT_URL: &str = "http://assets.mojang.com/SkinTemplates/alex.png";

/// Hex digit positions whose XOR selects the default body shape
const VARIANT_DIGITS: [usize; 4] = [7, 15, 23, 31];

/// Default skin variant an account is entitled to when it has no custom skin.
///
/// XOR of the hex digits at positions 7, 15, 23 and 31 of the dash-free id:
/// odd means Slim, even means Classic.
pub fn classify(id: &Identifier) -> SkinVariant {
    let parity = VARIANT_DIGITS
        .iter()
        .fold(0u8, |acc, &pos| acc ^ id.nibble(pos));

    if parity & 1 == 1 {
        SkinVariant::Slim
    } else {
        SkinVariant::Classic
    }
}

/// Canonical texture set for a stock skin
pub fn default_textures(variant: SkinVariant) -> TextureSet {
    let entry = match variant {
        SkinVariant::Slim => TextureEntry {
            url: SLIM_DEFAULT_URL.to_string(),
            metadata: Some(TextureMetadata {
                model: SkinVariant::Slim.to_string(),
            }),
        },
        SkinVariant::Classic => TextureEntry {
            url: CLASSIC_DEFAULT_URL.to_string(),
            metadata: None,
        },
    };

    TextureSet::with_skin(entry)
}
