//! Loot generation system
//!
//! Random field drops and shop stock. Every roll is drawn from the caller's
//! RNG in a fixed order: gold check, kind, rarity, magnitude, name.

use rand::seq::SliceRandom;
use rand::Rng;

use super::item::{Item, ItemKind, Rarity};

/// Chance that a field drop is a pile of gold
pub const GOLD_CHANCE: f64 = 0.30;

/// Items stocked per shop visit
pub const SHOP_EQUIPMENT_COUNT: usize = 8;
pub const SHOP_POTION_COUNT: usize = 2;

const WEAPON_NAMES: &[&str] = &["Longsword", "Battle Axe", "War Hammer", "Spear", "Dagger", "Mace"];
const ARMOR_NAMES: &[&str] = &["Leather Armor", "Chain Mail", "Scale Mail", "Plate Armor", "Padded Vest"];

const CRIT_CHANCE_AMULET: &str = "Amulet of Precision";
const CRIT_DAMAGE_AMULET: &str = "Amulet of Ferocity";
const POTION_NAME: &str = "Health Potion";
const GOLD_NAME: &str = "Gold Coins";

/// Broad loot categories before a concrete item is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LootKind {
    Weapon,
    Armor,
    Amulet,
    Potion,
}

/// Field drop weights (weapon, armor, amulet, potion)
const FIELD_WEIGHTS: [(LootKind, f64); 4] = [
    (LootKind::Weapon, 0.30),
    (LootKind::Armor, 0.30),
    (LootKind::Amulet, 0.25),
    (LootKind::Potion, 0.15),
];

/// Pick a loot kind from a single uniform draw in `[0, 1)`
pub fn loot_kind_from_roll(roll: f64) -> LootKind {
    pick_weighted(&FIELD_WEIGHTS, roll)
}

/// Shop equipment uses the field weights without potions, renormalised
fn shop_equipment_kind_from_roll(roll: f64) -> LootKind {
    pick_weighted(&FIELD_WEIGHTS[..3], roll)
}

fn pick_weighted(weights: &[(LootKind, f64)], roll: f64) -> LootKind {
    let total: f64 = weights.iter().map(|(_, w)| w).sum();
    let target = roll * total;
    let mut cumulative = 0.0;
    for (kind, weight) in weights {
        cumulative += weight;
        if target < cumulative {
            return *kind;
        }
    }
    weights[weights.len() - 1].0
}

/// Field rarity from a single uniform draw
pub fn rarity_from_roll(roll: f64) -> Rarity {
    if roll < 0.50 {
        Rarity::Common
    } else if roll < 0.80 {
        Rarity::Uncommon
    } else if roll < 0.95 {
        Rarity::Rare
    } else {
        Rarity::Epic
    }
}

/// Shop rarity from a single uniform draw. Epic never appears in shops.
pub fn shop_rarity_from_roll(roll: f64) -> Rarity {
    if roll < 0.50 {
        Rarity::Common
    } else if roll < 0.85 {
        Rarity::Uncommon
    } else {
        Rarity::Rare
    }
}

/// Scaled magnitude for weapons, armor and potions
pub fn scaled_value(base_roll: i32, dungeon_level: u32, rarity: Rarity) -> i32 {
    ((base_roll + dungeon_level as i32) as f64 * rarity.multiplier()) as i32
}

/// Crit chance amulet magnitude
pub fn crit_chance_amulet_value(roll: i32, rarity: Rarity) -> i32 {
    (roll as f64 * rarity.multiplier()) as i32
}

/// Crit damage amulet magnitude: `roll * (multiplier / 10) * 10` in floats
pub fn crit_damage_amulet_value(roll: i32, rarity: Rarity) -> i32 {
    (roll as f64 * (rarity.multiplier() / 10.0) * 10.0) as i32
}

fn description(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Attack => "A weapon that increases your attack power.",
        ItemKind::Defense => "Armor that reduces the damage you take.",
        ItemKind::CritChance => "An amulet that sharpens your aim for critical hits.",
        ItemKind::CritDamage => "An amulet that makes critical hits land harder.",
        ItemKind::Heal => "A potion that restores health.",
        ItemKind::Gold => "A handful of coins.",
    }
}

/// Build the concrete item for a kind and rarity, drawing the magnitude
/// (and name, for weapons and armor)
fn build_item(kind: LootKind, rarity: Rarity, dungeon_level: u32, rng: &mut impl Rng) -> Item {
    match kind {
        LootKind::Weapon => {
            let value = scaled_value(rng.gen_range(2..=5), dungeon_level, rarity);
            let name = WEAPON_NAMES.choose(rng).copied().unwrap_or(WEAPON_NAMES[0]);
            Item::new(name, ItemKind::Attack, value, description(ItemKind::Attack), rarity)
        }
        LootKind::Armor => {
            let value = scaled_value(rng.gen_range(2..=5), dungeon_level, rarity);
            let name = ARMOR_NAMES.choose(rng).copied().unwrap_or(ARMOR_NAMES[0]);
            Item::new(name, ItemKind::Defense, value, description(ItemKind::Defense), rarity)
        }
        LootKind::Amulet => {
            if rng.gen_bool(0.5) {
                let value = crit_chance_amulet_value(rng.gen_range(2..=5), rarity);
                Item::new(CRIT_CHANCE_AMULET, ItemKind::CritChance, value, description(ItemKind::CritChance), rarity)
            } else {
                let value = crit_damage_amulet_value(rng.gen_range(10..=25), rarity);
                Item::new(CRIT_DAMAGE_AMULET, ItemKind::CritDamage, value, description(ItemKind::CritDamage), rarity)
            }
        }
        LootKind::Potion => {
            let value = scaled_value(rng.gen_range(2..=5), dungeon_level, rarity);
            Item::new(POTION_NAME, ItemKind::Heal, value, description(ItemKind::Heal), rarity)
        }
    }
}

/// Gold pile worth `randint(5, 20) + level * 2`
pub fn generate_gold(dungeon_level: u32, rng: &mut impl Rng) -> Item {
    let value = rng.gen_range(5..=20) + dungeon_level as i32 * 2;
    Item::new(GOLD_NAME, ItemKind::Gold, value, description(ItemKind::Gold), Rarity::Common)
}

/// Generate a random field drop for the given depth
pub fn generate_item(dungeon_level: u32, rng: &mut impl Rng) -> Item {
    if rng.gen::<f64>() < GOLD_CHANCE {
        return generate_gold(dungeon_level, rng);
    }

    let kind = loot_kind_from_roll(rng.gen());
    let rarity = rarity_from_roll(rng.gen());
    build_item(kind, rarity, dungeon_level, rng)
}

/// Stock a shop: equipment first, then potions
pub fn generate_shop_inventory(dungeon_level: u32, rng: &mut impl Rng) -> Vec<Item> {
    let mut stock = Vec::with_capacity(SHOP_EQUIPMENT_COUNT + SHOP_POTION_COUNT);

    for _ in 0..SHOP_EQUIPMENT_COUNT {
        let kind = shop_equipment_kind_from_roll(rng.gen());
        let rarity = shop_rarity_from_roll(rng.gen());
        stock.push(build_item(kind, rarity, dungeon_level, rng));
    }

    for _ in 0..SHOP_POTION_COUNT {
        let rarity = shop_rarity_from_roll(rng.gen());
        stock.push(build_item(LootKind::Potion, rarity, dungeon_level, rng));
    }

    stock
}
