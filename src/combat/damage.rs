//! Damage calculation
//!
//! Handles all combat math: player strikes with crits, enemy retaliation
//! and the flat damage of a chasing enemy reaching the player.

use rand::Rng;

use crate::entities::{Character, Enemy};
use crate::items::Equipment;

/// Flat damage range when a chasing enemy steps onto the player
pub const CHASE_DAMAGE: (i32, i32) = (1, 15);

/// Result of a player attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackResult {
    /// Damage before the crit multiplier
    pub base_damage: i32,
    /// Damage applied to the enemy
    pub final_damage: i32,
    pub is_crit: bool,
}

/// Effective crit chance in percent, including a crit chance amulet
pub fn effective_crit_chance(player: &Character, equipment: &Equipment) -> f64 {
    player.crit_chance + equipment.crit_chance_bonus()
}

/// Effective crit multiplier, including a crit damage amulet
pub fn effective_crit_damage(player: &Character, equipment: &Equipment) -> f64 {
    player.crit_damage + equipment.crit_damage_bonus()
}

/// Base strike damage before crits, never below 1
pub fn base_damage(player: &Character, equipment: &Equipment, enemy: &Enemy) -> i32 {
    (player.attack + equipment.weapon_bonus() - enemy.defense).max(1)
}

/// Roll a player strike against `enemy`. Draws exactly one value from `rng`.
pub fn resolve_player_attack(
    player: &Character,
    equipment: &Equipment,
    enemy: &Enemy,
    rng: &mut impl Rng,
) -> AttackResult {
    let base = base_damage(player, equipment, enemy);
    let crit_roll: f64 = rng.gen_range(0.0..100.0);
    let is_crit = crit_roll < effective_crit_chance(player, equipment);

    let final_damage = if is_crit {
        (base as f64 * effective_crit_damage(player, equipment)) as i32
    } else {
        base
    };

    AttackResult {
        base_damage: base,
        final_damage,
        is_crit,
    }
}

/// Damage a surviving enemy deals back, mitigated by defense and armor
pub fn retaliation_damage(enemy: &Enemy, player: &Character, equipment: &Equipment) -> i32 {
    (enemy.attack - (player.defense + equipment.armor_bonus())).max(1)
}

/// Damage from an enemy that walks into the player. Ignores defense.
pub fn chase_damage(rng: &mut impl Rng) -> i32 {
    rng.gen_range(CHASE_DAMAGE.0..=CHASE_DAMAGE.1)
}
