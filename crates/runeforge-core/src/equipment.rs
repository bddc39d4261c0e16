//! Equipment slots, item identifiers and the equipped-items record

use serde::{Deserialize, Serialize};

named_enum! {
    /// Equipment slot
    pub enum Slot("slot") {
        Helmet => "helmet",
        Chest => "chest",
        Gloves => "gloves",
        Pants => "pants",
        Boots => "boots",
        Weapon => "weapon",
    }
}

named_enum! {
    pub enum HelmetId("helmet") {
        IronNasal => "iron-nasal",
        BearHead => "bear-head",
        RavenSkull => "raven-skull",
        JarlGilded => "jarl-gilded",
        RunicWar => "runic-war",
        WolfSkull => "wolf-skull",
        ValkyrieWing => "valkyrie-wing",
        Dragonbone => "dragonbone",
    }
}

named_enum! {
    pub enum ChestId("chest") {
        LeatherVest => "leather-vest",
        Chainmail => "chainmail",
        FurCloak => "fur-cloak",
        BerserkerHarness => "berserker-harness",
        RunestonePlate => "runestone-plate",
        BoneCuirass => "bone-cuirass",
        Stormweave => "stormweave",
        BloodforgeMail => "bloodforge-mail",
    }
}

named_enum! {
    pub enum GlovesId("gloves") {
        LeatherWraps => "leather-wraps",
        FurGauntlets => "fur-gauntlets",
        IronBracers => "iron-bracers",
        BerserkerWraps => "berserker-wraps",
        RunicGauntlets => "runic-gauntlets",
        SpikedFists => "spiked-fists",
        DragonscaleGrips => "dragonscale-grips",
        EmberWraps => "ember-wraps",
    }
}

named_enum! {
    pub enum PantsId("pants") {
        WoolTrousers => "wool-trousers",
        LeatherLeggings => "leather-leggings",
        FrostGreaves => "frost-greaves",
        BerserkerSkirt => "berserker-skirt",
        RunicLegguards => "runic-legguards",
        IronChainSkirt => "iron-chain-skirt",
        ShadowLeggings => "shadow-leggings",
        FlameGuards => "flame-guards",
    }
}

named_enum! {
    pub enum BootsId("boots") {
        LeatherBoots => "leather-boots",
        FurBoots => "fur-boots",
        IronToe => "iron-toe",
        SilentHunter => "silent-hunter",
        Stormforged => "stormforged",
        BoneTreads => "bone-treads",
        Flamestep => "flamestep",
        ShadowStep => "shadow-step",
    }
}

named_enum! {
    pub enum WeaponId("weapon") {
        BeardedAxe => "bearded-axe",
        Longsword => "longsword",
        WarSpear => "war-spear",
        TwinSeax => "twin-seax",
        RunicHammer => "runic-hammer",
        FrostCleaver => "frost-cleaver",
        BloodthirstBlade => "bloodthirst-blade",
        ThunderMace => "thunder-mace",
        ShieldOfOdin => "shield-of-odin",
        RagnarokGreatsword => "ragnarok-greatsword",
    }
}

/// Item identifier for any slot; serializes as its bare id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum ItemId {
    Helmet(HelmetId),
    Chest(ChestId),
    Gloves(GlovesId),
    Pants(PantsId),
    Boots(BootsId),
    Weapon(WeaponId),
}

impl ItemId {
    /// Resolve an item id within a slot's table
    pub fn resolve(slot: Slot, id: &str) -> Option<Self> {
        match slot {
            Slot::Helmet => HelmetId::from_id(id).map(Self::Helmet),
            Slot::Chest => ChestId::from_id(id).map(Self::Chest),
            Slot::Gloves => GlovesId::from_id(id).map(Self::Gloves),
            Slot::Pants => PantsId::from_id(id).map(Self::Pants),
            Slot::Boots => BootsId::from_id(id).map(Self::Boots),
            Slot::Weapon => WeaponId::from_id(id).map(Self::Weapon),
        }
    }

    /// Slot this item belongs to
    pub fn slot(self) -> Slot {
        match self {
            Self::Helmet(_) => Slot::Helmet,
            Self::Chest(_) => Slot::Chest,
            Self::Gloves(_) => Slot::Gloves,
            Self::Pants(_) => Slot::Pants,
            Self::Boots(_) => Slot::Boots,
            Self::Weapon(_) => Slot::Weapon,
        }
    }

    /// String identifier
    pub fn id(self) -> &'static str {
        match self {
            Self::Helmet(i) => i.id(),
            Self::Chest(i) => i.id(),
            Self::Gloves(i) => i.id(),
            Self::Pants(i) => i.id(),
            Self::Boots(i) => i.id(),
            Self::Weapon(i) => i.id(),
        }
    }

    /// Every item of a slot, in catalog order
    pub fn all_in(slot: Slot) -> Vec<ItemId> {
        match slot {
            Slot::Helmet => HelmetId::ALL.iter().copied().map(Self::Helmet).collect(),
            Slot::Chest => ChestId::ALL.iter().copied().map(Self::Chest).collect(),
            Slot::Gloves => GlovesId::ALL.iter().copied().map(Self::Gloves).collect(),
            Slot::Pants => PantsId::ALL.iter().copied().map(Self::Pants).collect(),
            Slot::Boots => BootsId::ALL.iter().copied().map(Self::Boots).collect(),
            Slot::Weapon => WeaponId::ALL.iter().copied().map(Self::Weapon).collect(),
        }
    }
}

impl From<ItemId> for &'static str {
    fn from(item: ItemId) -> Self {
        item.id()
    }
}

/// Up to six slot → item associations.
///
/// Ids are kept as strings so unknown items load fine; they resolve to
/// `None` when the compositor looks them up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquippedItems {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helmet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gloves: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pants: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boots: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weapon: Option<String>,
}

impl EquippedItems {
    /// Nothing equipped
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw id equipped in a slot
    pub fn get(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::Helmet => self.helmet.as_deref(),
            Slot::Chest => self.chest.as_deref(),
            Slot::Gloves => self.gloves.as_deref(),
            Slot::Pants => self.pants.as_deref(),
            Slot::Boots => self.boots.as_deref(),
            Slot::Weapon => self.weapon.as_deref(),
        }
    }

    /// Set or clear a slot with a raw id
    pub fn set(&mut self, slot: Slot, id: Option<impl Into<String>>) {
        let id = id.map(Into::into);
        match slot {
            Slot::Helmet => self.helmet = id,
            Slot::Chest => self.chest = id,
            Slot::Gloves => self.gloves = id,
            Slot::Pants => self.pants = id,
            Slot::Boots => self.boots = id,
            Slot::Weapon => self.weapon = id,
        }
    }

    /// Equip a known item in its slot
    pub fn with(mut self, item: ItemId) -> Self {
        self.set(item.slot(), Some(item.id()));
        self
    }

    /// Equip a raw id, which may not exist
    pub fn with_raw(mut self, slot: Slot, id: impl Into<String>) -> Self {
        self.set(slot, Some(id));
        self
    }

    /// Whether the slot holds anything, known or not
    pub fn has(&self, slot: Slot) -> bool {
        self.get(slot).is_some()
    }

    /// Typed item for a slot, `None` when empty or unknown
    pub fn item(&self, slot: Slot) -> Option<ItemId> {
        self.get(slot).and_then(|id| ItemId::resolve(slot, id))
    }

    pub fn helmet(&self) -> Option<HelmetId> {
        self.helmet.as_deref().and_then(HelmetId::from_id)
    }

    pub fn chest(&self) -> Option<ChestId> {
        self.chest.as_deref().and_then(ChestId::from_id)
    }

    pub fn gloves(&self) -> Option<GlovesId> {
        self.gloves.as_deref().and_then(GlovesId::from_id)
    }

    pub fn pants(&self) -> Option<PantsId> {
        self.pants.as_deref().and_then(PantsId::from_id)
    }

    pub fn boots(&self) -> Option<BootsId> {
        self.boots.as_deref().and_then(BootsId::from_id)
    }

    pub fn weapon(&self) -> Option<WeaponId> {
        self.weapon.as_deref().and_then(WeaponId::from_id)
    }

    /// Number of occupied slots
    pub fn count(&self) -> usize {
        Slot::ALL.iter().filter(|s| self.has(**s)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_per_slot() {
        assert_eq!(
            ItemId::resolve(Slot::Boots, "shadow-step"),
            Some(ItemId::Boots(BootsId::ShadowStep))
        );
        // Ids are scoped to their slot
        assert_eq!(ItemId::resolve(Slot::Helmet, "shadow-step"), None);
    }

    #[test]
    fn test_equipped_builder() {
        let eq = EquippedItems::new()
            .with(ItemId::Helmet(HelmetId::RunicWar))
            .with(ItemId::Weapon(WeaponId::TwinSeax))
            .with_raw(Slot::Chest, "does-not-exist");

        assert_eq!(eq.count(), 3);
        assert_eq!(eq.helmet(), Some(HelmetId::RunicWar));
        assert_eq!(eq.weapon(), Some(WeaponId::TwinSeax));
        assert!(eq.has(Slot::Chest));
        assert_eq!(eq.chest(), None);
        assert_eq!(eq.item(Slot::Chest), None);
    }

    #[test]
    fn test_catalog_sizes() {
        let sizes: Vec<usize> = Slot::ALL.iter().map(|s| ItemId::all_in(*s).len()).collect();
        assert_eq!(sizes, vec![8, 8, 8, 8, 8, 10]);
    }

    #[test]
    fn test_serde_skips_empty_slots() {
        let eq = EquippedItems::new().with(ItemId::Boots(BootsId::FurBoots));
        let json = serde_json::to_string(&eq).unwrap();
        assert_eq!(json, r#"{"boots":"fur-boots"}"#);

        let back: EquippedItems = serde_json::from_str("{}").unwrap();
        assert_eq!(back, EquippedItems::new());
    }
}
