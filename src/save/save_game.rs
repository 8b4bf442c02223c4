//! Game save/load system
//!
//! Exports the full mutable run state into a plain record, validates a
//! record before turning it back into a `Game`, and reads/writes records
//! as pretty JSON.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::GameConfig;
use crate::entities::{Character, Enemy};
use crate::game::{usable_config, Game, GameMessage, MessageLog};
use crate::items::{Equipment, Inventory, Item};
use crate::world::generation::Room;
use crate::world::{Map, Position, TileType};

/// Save file version for compatibility checking
pub const SAVE_VERSION: u32 = 1;

/// Complete save data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub player: Character,
    pub player_pos: Position,
    pub inventory: Vec<Item>,
    pub equipment: Equipment,
    pub map: MapSaveData,
    pub rooms: Vec<Room>,
    pub stairs: Option<Position>,
    pub enemies: Vec<EnemySaveData>,
    pub items_on_ground: Vec<ItemOnGround>,
    pub depth: u32,
    pub in_shop: bool,
    pub shop_stock: Vec<Item>,
    pub messages: Vec<GameMessage>,
    pub game_over: bool,
}

/// Row-major grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSaveData {
    pub width: i32,
    pub height: i32,
    pub tiles: Vec<TileType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySaveData {
    pub position: Position,
    pub enemy: Enemy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOnGround {
    pub position: Position,
    pub item: Item,
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
    #[error("Invalid save data: {0}")]
    Invalid(#[from] ValidationError),
}

/// Broken invariants in an imported record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("grid is {width}x{height} but holds {tiles} tiles")]
    GridSize { width: i32, height: i32, tiles: usize },
    #[error("{what} at ({}, {}) is outside the grid", .position.x, .position.y)]
    OutOfBounds { what: &'static str, position: Position },
    #[error("player at ({}, {}) is not on floor or door", .0.x, .0.y)]
    PlayerNotOnFloor(Position),
    #[error("{what} at ({}, {}) stands in a wall", .position.x, .position.y)]
    InWall { what: &'static str, position: Position },
    #[error("two {what}s share ({}, {})", .position.x, .position.y)]
    DuplicatePosition { what: &'static str, position: Position },
    #[error("equipment holds an item in the wrong slot")]
    MisslottedEquipment,
    #[error("xp_to_next must be positive")]
    ZeroXpThreshold,
    #[error("enemy at ({}, {}) has invalid hit points", .0.x, .0.y)]
    InvalidEnemy(Position),
    #[error("depth must be at least 1")]
    InvalidDepth,
}

impl Game {
    /// Snapshot the whole mutable state
    pub fn export(&self) -> SaveData {
        SaveData {
            version: SAVE_VERSION,
            player: self.player.clone(),
            player_pos: self.player_pos,
            inventory: self.inventory.items().to_vec(),
            equipment: self.equipment.clone(),
            map: MapSaveData {
                width: self.map.width,
                height: self.map.height,
                tiles: self.map.tiles.clone(),
            },
            rooms: self.rooms.clone(),
            stairs: self.stairs,
            enemies: self
                .enemies
                .iter()
                .map(|(position, enemy)| EnemySaveData {
                    position: *position,
                    enemy: enemy.clone(),
                })
                .collect(),
            items_on_ground: self
                .items
                .iter()
                .map(|(position, item)| ItemOnGround {
                    position: *position,
                    item: item.clone(),
                })
                .collect(),
            depth: self.depth,
            in_shop: self.in_shop,
            shop_stock: self.shop_stock.clone(),
            messages: self.messages.to_vec(),
            game_over: self.game_over,
        }
    }

    /// Rebuild a game from a record, refusing anything that breaks the
    /// world invariants. The RNG is not part of the record; `seed` picks
    /// the stream to continue with (entropy when `None`).
    pub fn import(save: SaveData, config: GameConfig, seed: Option<u64>) -> Result<Game, SaveError> {
        if save.version != SAVE_VERSION {
            return Err(SaveError::VersionMismatch {
                expected: SAVE_VERSION,
                found: save.version,
            });
        }
        validate(&save)?;

        let MapSaveData { width, height, tiles } = save.map;
        let map = Map::from_tiles(width, height, tiles).ok_or(ValidationError::GridSize {
            width,
            height,
            tiles: (width.max(0) * height.max(0)) as usize,
        })?;

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let config = usable_config(config);
        log::debug!("Imported save at depth {}", save.depth);
        Ok(Game {
            messages: MessageLog::from_messages(config.message_capacity, save.messages),
            config,
            rng,
            player: save.player,
            player_pos: save.player_pos,
            inventory: Inventory::from_items(save.inventory),
            equipment: save.equipment,
            map,
            rooms: save.rooms,
            stairs: save.stairs,
            enemies: save.enemies.into_iter().map(|e| (e.position, e.enemy)).collect::<BTreeMap<_, _>>(),
            items: save.items_on_ground.into_iter().map(|i| (i.position, i.item)).collect::<BTreeMap<_, _>>(),
            depth: save.depth,
            in_shop: save.in_shop,
            shop_stock: save.shop_stock,
            game_over: save.game_over,
        })
    }
}

/// Check every invariant a live game relies on
pub fn validate(save: &SaveData) -> Result<(), ValidationError> {
    let map = &save.map;
    let expected = (map.width.max(0) as usize) * (map.height.max(0) as usize);
    if map.width <= 0 || map.height <= 0 || map.tiles.len() != expected {
        return Err(ValidationError::GridSize {
            width: map.width,
            height: map.height,
            tiles: map.tiles.len(),
        });
    }
    let tile_at = |pos: Position| -> Option<TileType> {
        if pos.x < 0 || pos.y < 0 || pos.x >= map.width || pos.y >= map.height {
            None
        } else {
            map.tiles.get((pos.y * map.width + pos.x) as usize).copied()
        }
    };

    if save.depth < 1 {
        return Err(ValidationError::InvalidDepth);
    }
    if save.player.xp_to_next == 0 {
        return Err(ValidationError::ZeroXpThreshold);
    }
    if !save.equipment.is_consistent() {
        return Err(ValidationError::MisslottedEquipment);
    }

    match tile_at(save.player_pos) {
        None => {
            return Err(ValidationError::OutOfBounds {
                what: "player",
                position: save.player_pos,
            })
        }
        Some(tile) if !tile.can_hold_player() => return Err(ValidationError::PlayerNotOnFloor(save.player_pos)),
        Some(_) => {}
    }

    if let Some(stairs) = save.stairs {
        if tile_at(stairs).is_none() {
            return Err(ValidationError::OutOfBounds {
                what: "stairs",
                position: stairs,
            });
        }
    }

    let mut seen = HashSet::new();
    for EnemySaveData { position, enemy } in &save.enemies {
        check_placement(&tile_at, "enemy", *position)?;
        if !seen.insert(*position) {
            return Err(ValidationError::DuplicatePosition {
                what: "enemy",
                position: *position,
            });
        }
        if enemy.hp <= 0 || enemy.hp > enemy.max_hp {
            return Err(ValidationError::InvalidEnemy(*position));
        }
    }

    let mut seen = HashSet::new();
    for ItemOnGround { position, .. } in &save.items_on_ground {
        check_placement(&tile_at, "item", *position)?;
        if !seen.insert(*position) {
            return Err(ValidationError::DuplicatePosition {
                what: "item",
                position: *position,
            });
        }
    }

    Ok(())
}

fn check_placement(
    tile_at: &impl Fn(Position) -> Option<TileType>,
    what: &'static str,
    position: Position,
) -> Result<(), ValidationError> {
    match tile_at(position) {
        None => Err(ValidationError::OutOfBounds { what, position }),
        Some(TileType::Wall) => Err(ValidationError::InWall { what, position }),
        Some(_) => Ok(()),
    }
}

/// Directory holding save slots
pub fn save_directory() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("", "", "abyss") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("saves");
        path
    } else {
        // Fallback to current directory
        PathBuf::from("./saves")
    }
}

pub fn save_path(slot: u8) -> PathBuf {
    let mut path = save_directory();
    path.push(format!("save_{}.json", slot));
    path
}

pub fn save_exists(slot: u8) -> bool {
    save_path(slot).exists()
}

/// Write the game to a save slot
pub fn save_game(game: &Game, slot: u8) -> Result<(), SaveError> {
    save_to_path(game, &save_path(slot))?;
    log::info!("Game saved to slot {}", slot);
    Ok(())
}

/// Read a save slot. The record still has to go through [`Game::import`].
pub fn load_game(slot: u8) -> Result<SaveData, SaveError> {
    let save = load_from_path(&save_path(slot))?;
    log::info!("Game loaded from slot {}", slot);
    Ok(save)
}

pub fn save_to_path(game: &Game, path: &Path) -> Result<(), SaveError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(&game.export())?;
    fs::write(path, json)?;
    log::info!("Saved game to {}", path.display());
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<SaveData, SaveError> {
    let data = fs::read_to_string(path)?;
    let save: SaveData = serde_json::from_str(&data)?;

    // Version check
    if save.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION,
            found: save.version,
        });
    }

    log::info!("Loaded save from {}", path.display());
    Ok(save)
}
