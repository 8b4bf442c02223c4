//! Experience and leveling
//!
//! XP thresholds grow by half after each level-up.

use crate::entities::Character;

pub const LEVEL_UP_HP: i32 = 20;
pub const LEVEL_UP_ATTACK: i32 = 2;
pub const LEVEL_UP_DEFENSE: i32 = 1;

/// Threshold for the level after one that needed `xp_to_next`
pub fn next_threshold(xp_to_next: u32) -> u32 {
    ((xp_to_next as f64 * 1.5) as u32).max(1)
}

/// Apply every level-up the character's XP pays for. Returns the number
/// of levels gained; afterwards `xp < xp_to_next` always holds.
pub fn apply_level_ups(character: &mut Character) -> u32 {
    if character.xp_to_next == 0 {
        character.xp_to_next = 1;
    }

    let mut gained = 0;
    while character.xp >= character.xp_to_next {
        character.level += 1;
        character.xp -= character.xp_to_next;
        character.xp_to_next = next_threshold(character.xp_to_next);
        character.max_hp += LEVEL_UP_HP;
        character.hp = character.max_hp;
        character.attack += LEVEL_UP_ATTACK;
        character.defense += LEVEL_UP_DEFENSE;
        gained += 1;
    }
    gained
}
