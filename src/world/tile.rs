//! Tile definitions
//!
//! Terrain kinds stored in the grid. Player, enemy and item markers are
//! overlays drawn by the renderer and never live in the grid itself.

use serde::{Deserialize, Serialize};

/// Types of terrain in the dungeon grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileType {
    #[default]
    Wall,
    Floor,
    Door,
    StairsDown,
    StairsUp,
}

impl TileType {
    /// Can the player step onto this tile?
    pub fn is_passable(&self) -> bool {
        !matches!(self, TileType::Wall)
    }

    /// Can the player rest on this tile between turns?
    pub fn can_hold_player(&self) -> bool {
        matches!(self, TileType::Floor | TileType::Door)
    }

    pub fn glyph(&self) -> char {
        match self {
            TileType::Wall => '#',
            TileType::Floor => '.',
            TileType::Door => '+',
            TileType::StairsDown => '>',
            TileType::StairsUp => '<',
        }
    }

    pub fn fg_color(&self) -> (u8, u8, u8) {
        match self {
            TileType::Wall => (130, 110, 90),
            TileType::Floor => (80, 80, 80),
            TileType::Door => (139, 90, 43),
            TileType::StairsDown | TileType::StairsUp => (200, 200, 200),
        }
    }
}

/// Overlay glyphs for things standing on the grid
pub mod overlay {
    pub const PLAYER: char = '@';
    pub const ITEM: char = 'C';
    pub const POTION: char = 'p';
    pub const WEAPON: char = 'w';
    pub const ARMOR: char = 'a';
}
