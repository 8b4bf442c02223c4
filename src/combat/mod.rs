//! Combat system

pub mod damage;

pub use damage::{
    base_damage, chase_damage, effective_crit_chance, effective_crit_damage, resolve_player_attack,
    retaliation_damage, AttackResult,
};
