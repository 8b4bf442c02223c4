//! World module
//!
//! Contains the grid, tiles, positions and procedural generation.

pub mod generation;
pub mod map;
pub mod position;
pub mod tile;

pub use generation::{generate_level, Level};
pub use map::Map;
pub use position::{Direction, Position};
pub use tile::TileType;
