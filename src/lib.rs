//! Shadows of the Abyss - a turn-based dungeon crawler
//!
//! Descend through procedurally generated levels, fight what lives there,
//! and collect, equip and combine loot along the way.

pub mod combat;
pub mod data;
pub mod entities;
pub mod game;
pub mod items;
pub mod progression;
pub mod save;
pub mod world;

// Re-export commonly used types
pub use data::{ClassTemplate, DataManager, GameConfig};
pub use game::{Game, GameView, Outcome, SharedGame, ShopTransaction};
pub use world::{Direction, Map, Position, TileType};
