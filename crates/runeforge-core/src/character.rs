//! Character appearance configuration
//!
//! [`CharacterConfig`] stores style identifiers as plain strings so profiles
//! round-trip even when they name styles this build does not know. The typed
//! accessors resolve them on demand; a miss is `None`.

use crate::color::{hex, Color};
use crate::equipment::EquippedItems;
use crate::error::{Result, SpriteError};
use crate::style::{
    BeardStyle, BodyType, ChestStyle, FacePaint, HairStyle, HeadStyle, LegStyle, ScarStyle,
    NONE_ID,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use std::path::Path;

/// Base/shadow/highlight skin triad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkinPalette {
    pub id: &'static str,
    pub name: &'static str,
    pub base: Color,
    pub shadow: Color,
    pub highlight: Color,
}

/// Built-in skin palettes
pub const SKIN_PALETTES: &[SkinPalette] = &[
    SkinPalette { id: "fair", name: "Fair", base: hex(0xF5D0A9), shadow: hex(0xD4A574), highlight: hex(0xFFE4C4) },
    SkinPalette { id: "light", name: "Light", base: hex(0xE8C298), shadow: hex(0xC49A6C), highlight: hex(0xF5DFC5) },
    SkinPalette { id: "medium", name: "Medium", base: hex(0xC68642), shadow: hex(0x8D5524), highlight: hex(0xD4A06A) },
    SkinPalette { id: "tan", name: "Tan", base: hex(0xA0724A), shadow: hex(0x6B4226), highlight: hex(0xB8885C) },
    SkinPalette { id: "brown", name: "Brown", base: hex(0x8D5524), shadow: hex(0x5C3310), highlight: hex(0xA0724A) },
    SkinPalette { id: "dark", name: "Dark", base: hex(0x6B4226), shadow: hex(0x3B1F0B), highlight: hex(0x8D5524) },
    SkinPalette { id: "pale", name: "Pale", base: hex(0xFFE8D6), shadow: hex(0xE8C8A8), highlight: hex(0xFFF4EC) },
    SkinPalette { id: "olive", name: "Olive", base: hex(0xB89A6A), shadow: hex(0x8A6A3A), highlight: hex(0xD0B080) },
];

impl SkinPalette {
    /// Look up a palette by id
    pub fn find(id: &str) -> Option<&'static SkinPalette> {
        SKIN_PALETTES.iter().find(|p| p.id == id)
    }
}

/// Default eye color when none is configured
pub const DEFAULT_EYE_COLOR: Color = hex(0x1A1A2E);

/// Appearance of one character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterConfig {
    pub body_type: String,
    pub head_style: String,
    pub chest_style: String,
    pub leg_style: String,
    pub hair_style: String,
    pub hair_color: Color,
    pub skin_base: Color,
    pub skin_shadow: Color,
    pub skin_highlight: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beard_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eye_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scar_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_paint: Option<String>,
}

impl Default for CharacterConfig {
    /// Round-headed, broad-chested warrior with short brown hair and fair skin
    fn default() -> Self {
        let fair = SKIN_PALETTES[0];
        Self {
            body_type: BodyType::Warrior.id().into(),
            head_style: HeadStyle::Round.id().into(),
            chest_style: ChestStyle::Broad.id().into(),
            leg_style: LegStyle::Normal.id().into(),
            hair_style: HairStyle::Short.id().into(),
            hair_color: hex(0x6B3A2A),
            skin_base: fair.base,
            skin_shadow: fair.shadow,
            skin_highlight: fair.highlight,
            beard_style: None,
            eye_color: None,
            scar_style: None,
            face_paint: None,
        }
    }
}

/// Treat unset and the `"none"` sentinel alike
fn optional(id: &Option<String>) -> Option<&str> {
    id.as_deref().filter(|s| *s != NONE_ID)
}

impl CharacterConfig {
    /// Default scout: same palette, narrow build
    pub fn scout() -> Self {
        Self::default()
            .with_body(BodyType::Scout)
            .with_chest(ChestStyle::Slim)
    }

    pub fn with_body(mut self, body: BodyType) -> Self {
        self.body_type = body.id().into();
        self
    }

    pub fn with_head(mut self, head: HeadStyle) -> Self {
        self.head_style = head.id().into();
        self
    }

    pub fn with_chest(mut self, chest: ChestStyle) -> Self {
        self.chest_style = chest.id().into();
        self
    }

    pub fn with_legs(mut self, legs: LegStyle) -> Self {
        self.leg_style = legs.id().into();
        self
    }

    pub fn with_hair(mut self, style: HairStyle, color: Color) -> Self {
        self.hair_style = style.id().into();
        self.hair_color = color;
        self
    }

    pub fn with_skin(mut self, palette: &SkinPalette) -> Self {
        self.skin_base = palette.base;
        self.skin_shadow = palette.shadow;
        self.skin_highlight = palette.highlight;
        self
    }

    pub fn with_beard(mut self, beard: Option<BeardStyle>) -> Self {
        self.beard_style = beard.map(|b| b.id().into());
        self
    }

    pub fn with_eyes(mut self, color: Option<Color>) -> Self {
        self.eye_color = color;
        self
    }

    pub fn with_scar(mut self, scar: Option<ScarStyle>) -> Self {
        self.scar_style = scar.map(|s| s.id().into());
        self
    }

    pub fn with_face_paint(mut self, paint: Option<FacePaint>) -> Self {
        self.face_paint = paint.map(|p| p.id().into());
        self
    }

    pub fn body(&self) -> Option<BodyType> {
        BodyType::from_id(&self.body_type)
    }

    pub fn head(&self) -> Option<HeadStyle> {
        HeadStyle::from_id(&self.head_style)
    }

    pub fn chest(&self) -> Option<ChestStyle> {
        ChestStyle::from_id(&self.chest_style)
    }

    pub fn legs(&self) -> Option<LegStyle> {
        LegStyle::from_id(&self.leg_style)
    }

    pub fn hair(&self) -> Option<HairStyle> {
        HairStyle::from_id(&self.hair_style)
    }

    pub fn beard(&self) -> Option<BeardStyle> {
        optional(&self.beard_style).and_then(BeardStyle::from_id)
    }

    pub fn scar(&self) -> Option<ScarStyle> {
        optional(&self.scar_style).and_then(ScarStyle::from_id)
    }

    pub fn paint(&self) -> Option<FacePaint> {
        optional(&self.face_paint).and_then(FacePaint::from_id)
    }

    /// Configured eye color or [`DEFAULT_EYE_COLOR`]
    pub fn eyes(&self) -> Color {
        self.eye_color.unwrap_or(DEFAULT_EYE_COLOR)
    }

    pub fn is_bald(&self) -> bool {
        self.hair() == Some(HairStyle::Bald)
    }

    /// Identifiers that do not resolve, as `(kind, id)` pairs
    pub fn unknown_ids(&self) -> Vec<(&'static str, String)> {
        let checks = [
            (BodyType::KIND, Some(&self.body_type), self.body().is_some()),
            (HeadStyle::KIND, Some(&self.head_style), self.head().is_some()),
            (ChestStyle::KIND, Some(&self.chest_style), self.chest().is_some()),
            (LegStyle::KIND, Some(&self.leg_style), self.legs().is_some()),
            (HairStyle::KIND, Some(&self.hair_style), self.hair().is_some()),
            (BeardStyle::KIND, self.beard_style.as_ref(), self.beard().is_some()),
            (ScarStyle::KIND, self.scar_style.as_ref(), self.scar().is_some()),
            (FacePaint::KIND, self.face_paint.as_ref(), self.paint().is_some()),
        ];

        checks
            .into_iter()
            .filter_map(|(kind, id, known)| match id {
                Some(id) if !known && id != NONE_ID => Some((kind, id.clone())),
                _ => None,
            })
            .collect()
    }

    /// Reject any identifier that does not resolve
    pub fn validate(&self) -> Result<()> {
        match self.unknown_ids().first() {
            Some((kind, id)) => Err(SpriteError::unknown(kind, id.as_str())),
            None => Ok(()),
        }
    }
}

/// A character file: appearance plus equipment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterProfile {
    #[serde(default)]
    pub config: CharacterConfig,
    #[serde(default)]
    pub equipped: EquippedItems,
}

impl CharacterProfile {
    pub fn new(config: CharacterConfig, equipped: EquippedItems) -> Self {
        Self { config, equipped }
    }

    /// Parse a profile from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a profile from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let profile = Self::from_json(&text)?;
        debug!(
            path = %path.as_ref().display(),
            items = profile.equipped.count(),
            "Loaded character profile"
        );
        Ok(profile)
    }

    /// Pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::{HelmetId, ItemId};

    #[test]
    fn test_default_warrior() {
        let config = CharacterConfig::default();
        assert_eq!(config.body(), Some(BodyType::Warrior));
        assert_eq!(config.head(), Some(HeadStyle::Round));
        assert_eq!(config.hair(), Some(HairStyle::Short));
        assert_eq!(config.hair_color.to_hex(), "#6B3A2A");
        assert_eq!(config.skin_base.to_hex(), "#F5D0A9");
        assert_eq!(config.eyes(), DEFAULT_EYE_COLOR);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_none_sentinel() {
        let mut config = CharacterConfig::default();
        config.beard_style = Some("none".into());
        config.scar_style = Some("none".into());
        assert_eq!(config.beard(), None);
        assert_eq!(config.scar(), None);
        assert!(config.unknown_ids().is_empty());
    }

    #[test]
    fn test_unknown_ids_are_reported_not_fatal() {
        let mut config = CharacterConfig::default();
        config.head_style = "trapezoid".into();
        config.face_paint = Some("glitter".into());

        assert_eq!(config.head(), None);
        assert_eq!(
            config.unknown_ids(),
            vec![
                ("head style", "trapezoid".to_string()),
                ("face paint", "glitter".to_string())
            ]
        );
        assert!(matches!(
            config.validate(),
            Err(SpriteError::UnknownId { kind: "head style", .. })
        ));
    }

    #[test]
    fn test_camel_case_json() {
        let config = CharacterConfig::scout().with_beard(Some(BeardStyle::Braided));
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["bodyType"], "scout");
        assert_eq!(json["beardStyle"], "braided-beard");
        assert_eq!(json["skinShadow"], "#D4A574");
        assert!(json.get("eyeColor").is_none());
    }

    #[test]
    fn test_profile_round_trip() {
        let profile = CharacterProfile::new(
            CharacterConfig::default().with_skin(SkinPalette::find("olive").unwrap()),
            EquippedItems::new().with(ItemId::Helmet(HelmetId::WolfSkull)),
        );
        let back = CharacterProfile::from_json(&profile.to_json().unwrap()).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn test_bad_color_rejected_at_load() {
        let text = r##"{"config": {"bodyType": "warrior", "headStyle": "round",
            "chestStyle": "broad", "legStyle": "normal", "hairStyle": "short",
            "hairColor": "rgba(0,0,0,0.3)", "skinBase": "#F5D0A9",
            "skinShadow": "#D4A574", "skinHighlight": "#FFE4C4"}}"##;
        assert!(CharacterProfile::from_json(text).is_err());
    }

    #[test]
    fn test_profile_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hero.json");
        std::fs::write(&path, r#"{"equipped": {"weapon": "twin-seax"}}"#).unwrap();

        let profile = CharacterProfile::load(&path).unwrap();
        assert_eq!(profile.config, CharacterConfig::default());
        assert_eq!(profile.equipped.weapon.as_deref(), Some("twin-seax"));
    }
}
