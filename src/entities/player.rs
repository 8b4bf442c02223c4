//! Player character

use serde::{Deserialize, Serialize};

use crate::data::ClassTemplate;
use crate::items::{Item, ItemKind, Rarity};

/// XP needed for the first level-up
pub const STARTING_XP_TO_NEXT: u32 = 100;

/// The player's persistent stats. `attack` and `defense` are base values;
/// equipment bonuses are added only when combat resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    pub gold: u32,
    /// Percent, e.g. 3.0 for 3%
    pub crit_chance: f64,
    /// Multiplier, e.g. 1.4
    pub crit_damage: f64,
    pub character_class: String,
}

impl Character {
    /// Fresh level 1 character built from a class template
    pub fn from_template(name: impl Into<String>, template: &ClassTemplate, xp_to_next: u32) -> Self {
        Self {
            name: name.into(),
            hp: template.hp,
            max_hp: template.hp,
            attack: template.attack,
            defense: template.defense,
            level: 1,
            xp: 0,
            xp_to_next,
            gold: 0,
            crit_chance: template.crit_chance,
            crit_damage: template.crit_damage,
            character_class: template.name.clone(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }

    /// Heal up to max HP, returning the amount actually restored
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount).min(self.max_hp);
        self.hp - before
    }
}

/// The starting weapon a class begins with
pub fn starting_weapon(template: &ClassTemplate) -> Item {
    Item::new(
        template.weapon_name.clone(),
        ItemKind::Attack,
        template.weapon_bonus,
        format!("Starting weapon of the {}.", template.name),
        Rarity::Common,
    )
}
