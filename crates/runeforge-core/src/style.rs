//! Body and face style identifiers
//!
//! Each enum is the closed set of routines the part catalog can draw for one
//! body region. Configurations still carry plain strings so that unknown
//! styles survive loading and degrade to a no-op at draw time.

named_enum! {
    /// Body archetype; drives silhouette width and limb placement
    #[derive(Default)]
    pub enum BodyType("body type") {
        #[default]
        Warrior => "warrior",
        Scout => "scout",
    }
}

named_enum! {
    /// Head silhouette
    #[derive(Default)]
    pub enum HeadStyle("head style") {
        #[default]
        Round => "round",
        Square => "square",
        Angular => "angular",
        Oval => "oval",
        Heart => "heart",
        Diamond => "diamond",
    }
}

named_enum! {
    /// Torso build
    #[derive(Default)]
    pub enum ChestStyle("chest style") {
        #[default]
        Broad => "broad",
        Slim => "slim",
    }
}

named_enum! {
    /// Leg build
    #[derive(Default)]
    pub enum LegStyle("leg style") {
        #[default]
        Normal => "normal",
        Muscular => "muscular",
    }
}

named_enum! {
    /// Hair cut. `Bald` draws nothing.
    #[derive(Default)]
    pub enum HairStyle("hair style") {
        #[default]
        Short => "short",
        Long => "long",
        Braided => "braided",
        Mohawk => "mohawk",
        Topknot => "topknot",
        Wild => "wild",
        ShavedSides => "shaved-sides",
        Bald => "bald",
    }
}

named_enum! {
    pub enum BeardStyle("beard style") {
        Stubble => "stubble",
        Short => "short",
        Long => "long",
        Braided => "braided-beard",
    }
}

named_enum! {
    pub enum ScarStyle("scar style") {
        LeftEye => "left-eye",
        RightCheek => "right-cheek",
        CrossFace => "cross-face",
    }
}

named_enum! {
    pub enum FacePaint("face paint") {
        WarStripes => "war-stripes",
        SkullPaint => "skull-paint",
        RuneMarks => "rune-marks",
        BloodSmear => "blood-smear",
    }
}

/// Sentinel accepted by every optional face-detail field
pub const NONE_ID: &str = "none";

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_ids_round_trip() {
        for style in HairStyle::ALL {
            assert_eq!(HairStyle::from_id(style.id()), Some(*style));
        }
        assert_eq!(BeardStyle::Braided.id(), "braided-beard");
        assert_eq!(HeadStyle::ALL.len(), 6);
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(HeadStyle::from_id("trapezoid"), None);
        let err = HeadStyle::from_str("trapezoid").unwrap_err();
        assert!(err.to_string().contains("head style"));
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&HairStyle::ShavedSides).unwrap();
        assert_eq!(json, "\"shaved-sides\"");
        let body: BodyType = serde_json::from_str("\"scout\"").unwrap();
        assert_eq!(body, BodyType::Scout);
    }
}
