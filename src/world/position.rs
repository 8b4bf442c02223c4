//! Grid coordinates

use serde::{Deserialize, Serialize};

/// Position in the dungeon grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position
    pub fn distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Position shifted by a delta
    pub fn offset(&self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    /// One greedy step towards `target`, moving on both axes at once
    pub fn step_towards(&self, target: &Position) -> Position {
        self.offset((target.x - self.x).signum(), (target.y - self.y).signum())
    }
}

/// Orthogonal movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Unit delta for this direction (north is -y)
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_towards_moves_on_both_axes() {
        let enemy = Position::new(5, 5);
        assert_eq!(enemy.step_towards(&Position::new(8, 2)), Position::new(6, 4));
        assert_eq!(enemy.step_towards(&Position::new(5, 9)), Position::new(5, 6));
    }

    #[test]
    fn test_direction_deltas_are_orthogonal() {
        let (dx, dy) = Direction::North.delta();
        assert_eq!(Position::new(3, 3).offset(dx, dy), Position::new(3, 2));
        for dir in [Direction::North, Direction::South, Direction::East, Direction::West] {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }
}
