pub mod profile;
pub mod variant;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use profile::{decode_textures, resolve_profile};
pub use variant::{classify, default_textures, CLASSIC_DEFAULT_URL, SLIM_DEFAULT_URL};

pub const SKIN_SLOT: &str = "SKIN";
pub const CAPE_SLOT: &str = "CAPE";

/// Skin variant (Steve vs Alex arm width)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SkinVariant {
    #[default]
    Classic, // Steve (4px arms)
    Slim, // Alex (3px arms)
}

impl std::fmt::Display for SkinVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkinVariant::Classic => write!(f, "classic"),
            SkinVariant::Slim => write!(f, "slim"),
        }
    }
}

/// Model hint attached to a texture
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextureMetadata {
    pub model: String,
}

/// A single texture slot entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextureEntry {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TextureMetadata>,
}

impl TextureEntry {
    /// Body shape this texture is drawn for. Absent metadata means classic.
    pub fn variant(&self) -> SkinVariant {
        match self.metadata.as_ref().map(|m| m.model.to_lowercase()) {
            Some(model) if model == "slim" => SkinVariant::Slim,
            _ => SkinVariant::Classic,
        }
    }
}

/// Texture slots keyed by slot name ("SKIN", "CAPE")
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TextureSet(pub BTreeMap<String, TextureEntry>);

impl TextureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skin(entry: TextureEntry) -> Self {
        let mut set = Self::new();
        set.insert(SKIN_SLOT, entry);
        set
    }

    pub fn insert(&mut self, slot: &str, entry: TextureEntry) {
        self.0.insert(slot.to_string(), entry);
    }

    pub fn get(&self, slot: &str) -> Option<&TextureEntry> {
        self.0.get(slot)
    }

    pub fn skin(&self) -> Option<&TextureEntry> {
        self.get(SKIN_SLOT)
    }

    pub fn cape(&self) -> Option<&TextureEntry> {
        self.get(CAPE_SLOT)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Upstream profile property. `value` is base64 JSON for the textures property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// Session profile as returned by the session server
#[derive(Debug, Clone, Deserialize)]
pub struct SessionProfileResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// Session profile augmented with decoded textures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionProfile {
    pub id: String,
    pub name: String,
    pub properties: Vec<Property>,
    pub textures: TextureSet,
}

impl SessionProfile {
    /// Variant of the active skin
    pub fn skin_variant(&self) -> SkinVariant {
        self.textures
            .skin()
            .map(TextureEntry::variant)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_set_wire_shape() {
        let json = r#"{
            "SKIN": {"url": "http://textures.minecraft.net/texture/abc", "metadata": {"model": "slim"}},
            "CAPE": {"url": "http://textures.minecraft.net/texture/def"}
        }"#;
        let set: TextureSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.skin().unwrap().variant(), SkinVariant::Slim);
        assert_eq!(set.cape().unwrap().variant(), SkinVariant::Classic);
        assert!(set.cape().unwrap().metadata.is_none());
    }

    #[test]
    fn test_classic_entry_omits_metadata() {
        let set = TextureSet::with_skin(TextureEntry {
            url: "X".to_string(),
            metadata: None,
        });
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json, serde_json::json!({"SKIN": {"url": "X"}}));
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(SkinVariant::Classic.to_string(), "classic");
        assert_eq!(SkinVariant::Slim.to_string(), "slim");
        assert_eq!(SkinVariant::default(), SkinVariant::Classic);
    }
}
