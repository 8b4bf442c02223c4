//! Map data structure
//!
//! The 2D grid representing a dungeon level.

use super::position::Position;
use super::tile::TileType;

/// A dungeon level grid, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    pub width: i32,
    pub height: i32,
    pub tiles: Vec<TileType>,
}

impl Map {
    /// Create a new map filled with walls
    pub fn new(width: i32, height: i32) -> Self {
        let tiles = vec![TileType::Wall; (width.max(0) * height.max(0)) as usize];
        Self { width, height, tiles }
    }

    /// Rebuild a map from raw row-major tiles. Returns `None` when the
    /// tile count does not match the dimensions.
    pub fn from_tiles(width: i32, height: i32, tiles: Vec<TileType>) -> Option<Self> {
        if width <= 0 || height <= 0 || tiles.len() != (width * height) as usize {
            return None;
        }
        Some(Self { width, height, tiles })
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Convert 1D index to 2D coordinates
    #[inline]
    pub fn idx_to_xy(&self, idx: usize) -> (i32, i32) {
        let idx = idx as i32;
        (idx % self.width, idx / self.width)
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Get tile at position
    pub fn get(&self, x: i32, y: i32) -> Option<TileType> {
        if self.in_bounds(x, y) {
            Some(self.tiles[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    pub fn tile_at(&self, pos: Position) -> Option<TileType> {
        self.get(pos.x, pos.y)
    }

    /// Set tile type at position. Writes outside the grid are dropped.
    pub fn set(&mut self, x: i32, y: i32, tile_type: TileType) {
        if self.in_bounds(x, y) {
            let idx = self.xy_to_idx(x, y);
            self.tiles[idx] = tile_type;
        }
    }

    /// Check if a position can be entered
    pub fn is_passable(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|t| t.is_passable())
    }

    /// Iterate rows for rendering
    pub fn rows(&self) -> impl Iterator<Item = &[TileType]> {
        self.tiles.chunks(self.width.max(1) as usize)
    }

    /// All positions holding the given tile type
    pub fn positions_of(&self, tile_type: TileType) -> Vec<Position> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == tile_type)
            .map(|(idx, _)| {
                let (x, y) = self.idx_to_xy(idx);
                Position::new(x, y)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_writes_are_dropped() {
        let mut map = Map::new(4, 3);
        map.set(-1, 0, TileType::Floor);
        map.set(4, 2, TileType::Floor);
        map.set(1, 3, TileType::Floor);
        assert!(map.tiles.iter().all(|t| *t == TileType::Wall));

        map.set(3, 2, TileType::Floor);
        assert_eq!(map.get(3, 2), Some(TileType::Floor));
        assert_eq!(map.get(3, 3), None);
    }

    #[test]
    fn test_from_tiles_checks_dimensions() {
        assert!(Map::from_tiles(2, 2, vec![TileType::Floor; 4]).is_some());
        assert!(Map::from_tiles(2, 2, vec![TileType::Floor; 3]).is_none());
        assert!(Map::from_tiles(0, 2, Vec::new()).is_none());
    }
}
