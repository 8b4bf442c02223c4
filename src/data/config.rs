//! Tunable game settings

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest grid that still fits the fallback room and its border
pub const MIN_MAP_WIDTH: i32 = 9;
pub const MIN_MAP_HEIGHT: i32 = 8;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("map is {width}x{height}, smaller than the {MIN_MAP_WIDTH}x{MIN_MAP_HEIGHT} minimum")]
    MapTooSmall { width: i32, height: i32 },
    #[error("room range {min}..={max} is empty")]
    RoomRange { min: usize, max: usize },
    #[error("item_chance {0} is not a probability")]
    ItemChance(f64),
    #[error("message_capacity must be at least 1")]
    NoMessages,
    #[error("starting_xp_to_next must be positive")]
    ZeroXpThreshold,
}

/// Settings for level generation and the turn engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub map_width: i32,
    pub map_height: i32,
    pub min_rooms: usize,
    pub max_rooms: usize,
    /// Manhattan distance within which enemies chase the player
    pub aggro_radius: i32,
    /// Messages kept for the renderer
    pub message_capacity: usize,
    /// Every depth divisible by this is a shop
    pub shop_interval: u32,
    pub max_enemies_per_room: u32,
    /// Chance that a room receives a floor item
    pub item_chance: f64,
    pub starting_xp_to_next: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map_width: 80,
            map_height: 24,
            min_rooms: 6,
            max_rooms: 10,
            aggro_radius: 5,
            message_capacity: 5,
            shop_interval: 5,
            max_enemies_per_room: 2,
            item_chance: 0.5,
            starting_xp_to_next: crate::entities::STARTING_XP_TO_NEXT,
        }
    }
}

impl GameConfig {
    /// Is `depth` a shop level?
    pub fn is_shop_depth(&self, depth: u32) -> bool {
        self.shop_interval > 0 && depth % self.shop_interval == 0
    }

    /// Reject settings the generator or turn engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map_width < MIN_MAP_WIDTH || self.map_height < MIN_MAP_HEIGHT {
            return Err(ConfigError::MapTooSmall {
                width: self.map_width,
                height: self.map_height,
            });
        }
        if self.min_rooms == 0 || self.min_rooms > self.max_rooms {
            return Err(ConfigError::RoomRange {
                min: self.min_rooms,
                max: self.max_rooms,
            });
        }
        if !(0.0..=1.0).contains(&self.item_chance) {
            return Err(ConfigError::ItemChance(self.item_chance));
        }
        if self.message_capacity == 0 {
            return Err(ConfigError::NoMessages);
        }
        if self.starting_xp_to_next == 0 {
            return Err(ConfigError::ZeroXpThreshold);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_depths() {
        let config = GameConfig::default();
        assert!(config.is_shop_depth(5));
        assert!(config.is_shop_depth(10));
        assert!(!config.is_shop_depth(6));
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config: GameConfig = ron::from_str("(map_width: 60, aggro_radius: 3)").expect("valid ron");
        assert_eq!(config.map_width, 60);
        assert_eq!(config.aggro_radius, 3);
        assert_eq!(config.map_height, 24);
        assert_eq!(config.message_capacity, 5);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_unplayable_settings() {
        let tiny = GameConfig {
            map_width: 5,
            map_height: 5,
            ..GameConfig::default()
        };
        assert_eq!(tiny.validate(), Err(ConfigError::MapTooSmall { width: 5, height: 5 }));

        let smallest = GameConfig {
            map_width: MIN_MAP_WIDTH,
            map_height: MIN_MAP_HEIGHT,
            ..GameConfig::default()
        };
        assert_eq!(smallest.validate(), Ok(()));

        let rooms = GameConfig {
            min_rooms: 8,
            max_rooms: 3,
            ..GameConfig::default()
        };
        assert!(matches!(rooms.validate(), Err(ConfigError::RoomRange { min: 8, max: 3 })));

        for chance in [f64::NAN, f64::INFINITY, -0.1, 1.5] {
            let config = GameConfig {
                item_chance: chance,
                ..GameConfig::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::ItemChance(_))), "{}", chance);
        }

        let silent = GameConfig {
            message_capacity: 0,
            ..GameConfig::default()
        };
        assert_eq!(silent.validate(), Err(ConfigError::NoMessages));
    }
}
