//! Procedural level generation
//!
//! Carves the room grid, then places the stairs, enemies and floor loot
//! for one dungeon depth.

pub mod rooms;

pub use rooms::{generate_dungeon, Room};

use std::collections::BTreeMap;

use rand::Rng;

use super::{Map, Position, TileType};
use crate::data::GameConfig;
use crate::entities::{Enemy, EnemyType};
use crate::items::{generate_item, Item};

/// Everything created for one depth
#[derive(Debug, Clone)]
pub struct Level {
    pub map: Map,
    pub rooms: Vec<Room>,
    pub start: Position,
    pub stairs: Position,
    pub enemies: BTreeMap<Position, Enemy>,
    pub items: BTreeMap<Position, Item>,
}

/// Generate a populated level for `depth`
pub fn generate_level(rng: &mut impl Rng, config: &GameConfig, depth: u32) -> Level {
    let max_rooms = config.max_rooms.max(config.min_rooms);
    let num_rooms = rng.gen_range(config.min_rooms..=max_rooms);
    let (mut map, rooms) = generate_dungeon(rng, config.map_width, config.map_height, num_rooms);

    // generate_dungeon always yields at least one room
    let first = rooms.first().copied().unwrap_or_else(Room::fallback);
    let start = first.center();
    let stairs = match rooms.last() {
        Some(last) if rooms.len() > 1 => last.center(),
        _ => Position::new(first.x, first.y),
    };
    map.set(stairs.x, stairs.y, TileType::StairsDown);

    let mut level = Level {
        map,
        rooms,
        start,
        stairs,
        enemies: BTreeMap::new(),
        items: BTreeMap::new(),
    };
    populate(rng, config, depth, &mut level);

    log::info!(
        "Generated depth {}: {} rooms, {} enemies, {} items",
        depth,
        level.rooms.len(),
        level.enemies.len(),
        level.items.len()
    );
    level
}

/// Spawn enemies and loot in every room except the starting one
fn populate(rng: &mut impl Rng, config: &GameConfig, depth: u32, level: &mut Level) {
    let spawn_rooms: Vec<Room> = level.rooms.iter().skip(1).copied().collect();
    // gen_bool panics on NaN, which clamp passes through
    let item_chance = if config.item_chance.is_finite() {
        config.item_chance.clamp(0.0, 1.0)
    } else {
        0.0
    };

    for room in spawn_rooms {
        let count = rng.gen_range(0..=config.max_enemies_per_room);
        for _ in 0..count {
            let pos = random_point_in(rng, &room);
            if is_free(level, pos) {
                let enemy_type = EnemyType::roll_for_depth(depth, rng);
                level.enemies.insert(pos, Enemy::new(enemy_type, depth));
            }
        }

        if rng.gen_bool(item_chance) {
            let pos = random_point_in(rng, &room);
            if is_free(level, pos) {
                let item = generate_item(depth, rng);
                level.items.insert(pos, item);
            }
        }
    }
}

fn random_point_in(rng: &mut impl Rng, room: &Room) -> Position {
    Position::new(
        rng.gen_range(room.x..room.x + room.width),
        rng.gen_range(room.y..room.y + room.height),
    )
}

/// A spawn point must be open floor away from the start, the stairs and
/// anything already placed
fn is_free(level: &Level, pos: Position) -> bool {
    pos != level.start
        && pos != level.stairs
        && level.map.tile_at(pos) == Some(TileType::Floor)
        && !level.enemies.contains_key(&pos)
        && !level.items.contains_key(&pos)
}
