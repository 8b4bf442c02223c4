//! Item definitions
//!
//! Core item types, rarities, and pricing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Item rarity tiers, declared in ascending multiplier order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
}

/// Fixed attributes attached to each rarity tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityInfo {
    pub multiplier: f64,
    pub base_price: u32,
    pub name: &'static str,
    pub color: (u8, u8, u8),
}

const COMMON: RarityInfo = RarityInfo { multiplier: 1.0, base_price: 10, name: "Common", color: (200, 200, 200) };
const UNCOMMON: RarityInfo = RarityInfo { multiplier: 1.5, base_price: 25, name: "Uncommon", color: (100, 255, 100) };
const RARE: RarityInfo = RarityInfo { multiplier: 2.0, base_price: 50, name: "Rare", color: (100, 150, 255) };
const EPIC: RarityInfo = RarityInfo { multiplier: 3.0, base_price: 100, name: "Epic", color: (200, 100, 255) };

impl Rarity {
    pub fn info(&self) -> &'static RarityInfo {
        match self {
            Rarity::Common => &COMMON,
            Rarity::Uncommon => &UNCOMMON,
            Rarity::Rare => &RARE,
            Rarity::Epic => &EPIC,
        }
    }

    pub fn multiplier(&self) -> f64 {
        self.info().multiplier
    }

    pub fn base_price(&self) -> u32 {
        self.info().base_price
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    /// Get display color RGB
    pub fn color(&self) -> (u8, u8, u8) {
        self.info().color
    }

    pub fn all() -> &'static [Rarity] {
        &[Rarity::Common, Rarity::Uncommon, Rarity::Rare, Rarity::Epic]
    }
}

/// What an item does when used or equipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Attack,
    Defense,
    CritChance,
    CritDamage,
    Heal,
    Gold,
}

impl ItemKind {
    /// Equipment slot this kind occupies, if any
    pub fn equip_slot(&self) -> Option<EquipSlot> {
        match self {
            ItemKind::Attack => Some(EquipSlot::Weapon),
            ItemKind::Defense => Some(EquipSlot::Armor),
            ItemKind::CritChance | ItemKind::CritDamage => Some(EquipSlot::Amulet),
            ItemKind::Heal | ItemKind::Gold => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Attack => "attack",
            ItemKind::Defense => "defense",
            ItemKind::CritChance => "crit_chance",
            ItemKind::CritDamage => "crit_damage",
            ItemKind::Heal => "heal",
            ItemKind::Gold => "gold",
        }
    }

    /// Map glyph used when the item lies on the floor
    pub fn glyph(&self) -> char {
        use crate::world::tile::overlay;
        match self {
            ItemKind::Attack => overlay::WEAPON,
            ItemKind::Defense => overlay::ARMOR,
            ItemKind::Heal => overlay::POTION,
            ItemKind::CritChance | ItemKind::CritDamage | ItemKind::Gold => overlay::ITEM,
        }
    }
}

/// Equipment slots on the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Armor,
    Amulet,
}

impl EquipSlot {
    pub fn name(&self) -> &'static str {
        match self {
            EquipSlot::Weapon => "Weapon",
            EquipSlot::Armor => "Armor",
            EquipSlot::Amulet => "Amulet",
        }
    }

    /// Get all slots in display order
    pub fn all() -> &'static [EquipSlot] {
        &[EquipSlot::Weapon, EquipSlot::Armor, EquipSlot::Amulet]
    }
}

/// A single item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    pub value: i32,
    pub description: String,
    pub rarity: Rarity,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        kind: ItemKind,
        value: i32,
        description: impl Into<String>,
        rarity: Rarity,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            value,
            description: description.into(),
            rarity,
        }
    }

    /// Shop price: `base_price * max(1, value / 2)`
    pub fn price(&self) -> u32 {
        self.rarity.base_price() * (self.value / 2).max(1) as u32
    }

    pub fn sell_price(&self) -> u32 {
        self.price() / 2
    }

    pub fn equip_slot(&self) -> Option<EquipSlot> {
        self.kind.equip_slot()
    }

    pub fn is_equipment(&self) -> bool {
        self.equip_slot().is_some()
    }

    /// Can `other` be merged into this item?
    pub fn combinable_with(&self, other: &Item) -> bool {
        self.name == other.name && self.kind == other.kind && self.kind != ItemKind::Heal
    }

    /// Merge two matching items into a new one: values add, the rarer tier wins
    pub fn combined(&self, other: &Item) -> Item {
        Item {
            name: self.name.clone(),
            kind: self.kind,
            value: self.value + other.value,
            description: self.description.clone(),
            rarity: self.rarity.max(other.rarity),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{} {}) [{}]", self.name, self.value, self.kind.label(), self.rarity.name())
    }
}
