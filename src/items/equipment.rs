//! Equipment system
//!
//! Manages equipped items and the combat bonuses they provide. Bonuses are
//! read at resolution time and never folded into the character's base stats.

use serde::{Deserialize, Serialize};

use super::item::{EquipSlot, Item, ItemKind};

/// Player equipment slots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub amulet: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Equip an item, returning the previously equipped item if any.
    /// Items without a slot are handed straight back.
    pub fn equip(&mut self, item: Item) -> Result<Option<Item>, Item> {
        match item.equip_slot() {
            Some(slot) => Ok(self.slot_mut(slot).replace(item)),
            None => Err(item),
        }
    }

    /// Get item in a slot
    pub fn get(&self, slot: EquipSlot) -> Option<&Item> {
        match slot {
            EquipSlot::Weapon => self.weapon.as_ref(),
            EquipSlot::Armor => self.armor.as_ref(),
            EquipSlot::Amulet => self.amulet.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<Item> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
            EquipSlot::Amulet => &mut self.amulet,
        }
    }

    /// Get all equipped items in slot order
    pub fn all_items(&self) -> impl Iterator<Item = &Item> {
        EquipSlot::all().iter().filter_map(|slot| self.get(*slot))
    }

    /// Weapon attack bonus (0 when unarmed)
    pub fn weapon_bonus(&self) -> i32 {
        self.weapon.as_ref().map(|w| w.value).unwrap_or(0)
    }

    /// Armor defense bonus (0 when unarmored)
    pub fn armor_bonus(&self) -> i32 {
        self.armor.as_ref().map(|a| a.value).unwrap_or(0)
    }

    /// Amulet crit chance bonus in percent points: `value / 100`
    pub fn crit_chance_bonus(&self) -> f64 {
        self.amulet_bonus(ItemKind::CritChance)
    }

    /// Amulet crit multiplier bonus: `value / 100`
    pub fn crit_damage_bonus(&self) -> f64 {
        self.amulet_bonus(ItemKind::CritDamage)
    }

    fn amulet_bonus(&self, kind: ItemKind) -> f64 {
        match &self.amulet {
            Some(amulet) if amulet.kind == kind => amulet.value as f64 / 100.0,
            _ => 0.0,
        }
    }

    /// Does every occupied slot hold an item of the matching kind?
    pub fn is_consistent(&self) -> bool {
        EquipSlot::all()
            .iter()
            .all(|slot| self.get(*slot).map_or(true, |item| item.equip_slot() == Some(*slot)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Rarity;

    fn item(name: &str, kind: ItemKind, value: i32) -> Item {
        Item::new(name, kind, value, "", Rarity::Common)
    }

    #[test]
    fn test_equip_swaps_previous() {
        let mut eq = Equipment::new();
        assert_eq!(eq.equip(item("Dagger", ItemKind::Attack, 3)), Ok(None));
        let previous = eq.equip(item("Mace", ItemKind::Attack, 6)).ok().flatten();
        assert_eq!(previous.map(|i| i.name), Some("Dagger".to_string()));
        assert_eq!(eq.weapon_bonus(), 6);
    }

    #[test]
    fn test_unequippable_item_is_returned() {
        let mut eq = Equipment::new();
        let potion = item("Health Potion", ItemKind::Heal, 5);
        assert_eq!(eq.equip(potion.clone()), Err(potion));
        assert_eq!(eq, Equipment::new());
    }

    #[test]
    fn test_amulet_bonus_matches_kind() {
        let mut eq = Equipment::new();
        let _ = eq.equip(item("Amulet of Ferocity", ItemKind::CritDamage, 15));
        assert_eq!(eq.crit_chance_bonus(), 0.0);
        assert!((eq.crit_damage_bonus() - 0.15).abs() < 1e-9);
        assert_eq!(eq.armor_bonus(), 0);
    }

    #[test]
    fn test_consistency_check() {
        let mut eq = Equipment::new();
        eq.weapon = Some(item("Plate Armor", ItemKind::Defense, 4));
        assert!(!eq.is_consistent());
        eq.weapon = Some(item("Spear", ItemKind::Attack, 4));
        assert!(eq.is_consistent());
    }
}
