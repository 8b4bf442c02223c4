//! Enemies and the player character

pub mod enemies;
pub mod player;

pub use enemies::{Enemy, EnemyDef, EnemyType};
pub use player::{starting_weapon, Character, STARTING_XP_TO_NEXT};
