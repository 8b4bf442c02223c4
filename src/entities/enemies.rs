//! Enemy templates and instances
//!
//! Each `EnemyType` maps to a fixed stat record. Instances scale that record
//! by level when spawned.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Enemy definition with base stats and rendering info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyDef {
    pub name: &'static str,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub xp_reward: u32,
    pub glyph: char,
    pub fg: (u8, u8, u8),
    pub gold_reward: u32,
    /// Shallowest depth where this type spawns
    pub min_depth: u32,
}

pub const GOBLIN: EnemyDef = EnemyDef {
    name: "Goblin",
    hp: 20,
    attack: 3,
    defense: 1,
    xp_reward: 15,
    glyph: 'G',
    fg: (200, 200, 50),
    gold_reward: 5,
    min_depth: 1,
};

pub const ORC: EnemyDef = EnemyDef {
    name: "Orc",
    hp: 35,
    attack: 5,
    defense: 2,
    xp_reward: 30,
    glyph: 'O',
    fg: (255, 90, 90),
    gold_reward: 10,
    min_depth: 1,
};

pub const TROLL: EnemyDef = EnemyDef {
    name: "Troll",
    hp: 50,
    attack: 7,
    defense: 3,
    xp_reward: 50,
    glyph: 'T',
    fg: (170, 30, 30),
    gold_reward: 20,
    min_depth: 3,
};

pub const DRAGON: EnemyDef = EnemyDef {
    name: "Dragon",
    hp: 100,
    attack: 12,
    defense: 5,
    xp_reward: 150,
    glyph: 'D',
    fg: (180, 60, 200),
    gold_reward: 50,
    min_depth: 7,
};

// Displayed as "Knight"; the tag is kept for save compatibility.
pub const DEMON: EnemyDef = EnemyDef {
    name: "Knight",
    hp: 75,
    attack: 10,
    defense: 4,
    xp_reward: 100,
    glyph: 'K',
    fg: (120, 120, 120),
    gold_reward: 30,
    min_depth: 5,
};

/// Enemy template tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyType {
    Goblin,
    Orc,
    Troll,
    Dragon,
    Demon,
}

impl EnemyType {
    pub fn def(&self) -> &'static EnemyDef {
        match self {
            EnemyType::Goblin => &GOBLIN,
            EnemyType::Orc => &ORC,
            EnemyType::Troll => &TROLL,
            EnemyType::Dragon => &DRAGON,
            EnemyType::Demon => &DEMON,
        }
    }

    pub fn all() -> &'static [EnemyType] {
        &[EnemyType::Goblin, EnemyType::Orc, EnemyType::Troll, EnemyType::Dragon, EnemyType::Demon]
    }

    /// Types allowed to spawn at a depth
    pub fn pool_for_depth(depth: u32) -> Vec<EnemyType> {
        Self::all().iter().copied().filter(|t| t.def().min_depth <= depth).collect()
    }

    /// Pick a random type for a depth
    pub fn roll_for_depth(depth: u32, rng: &mut impl Rng) -> EnemyType {
        Self::pool_for_depth(depth).choose(rng).copied().unwrap_or(EnemyType::Goblin)
    }
}

/// A live enemy in the world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub enemy_type: EnemyType,
    pub level: u32,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub xp_reward: u32,
    pub gold_reward: u32,
}

impl Enemy {
    /// Spawn an enemy of `enemy_type` scaled to `level` (1-based)
    pub fn new(enemy_type: EnemyType, level: u32) -> Self {
        let def = enemy_type.def();
        let steps = level.saturating_sub(1);
        let max_hp = def.hp + steps as i32 * 5;
        Self {
            enemy_type,
            level,
            hp: max_hp,
            max_hp,
            attack: def.attack + steps as i32 * 2,
            defense: def.defense + steps as i32,
            xp_reward: def.xp_reward + steps * 10,
            gold_reward: def.gold_reward + steps * 5,
        }
    }

    pub fn name(&self) -> &'static str {
        self.enemy_type.def().name
    }

    pub fn glyph(&self) -> char {
        self.enemy_type.def().glyph
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Apply damage and report whether the enemy died
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.hp -= amount;
        !self.is_alive()
    }
}
