//! Room and corridor dungeon generator
//!
//! Classic roguelike dungeon with rectangular rooms chained together by
//! L-shaped corridors. Each accepted room is connected to the room accepted
//! just before it, so the floor always forms a single connected region.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::world::{Map, Position, TileType};

/// Placement attempts before giving up on reaching the requested room count
pub const MAX_ATTEMPTS: u32 = 100;

/// Longest corridor leg allowed between two consecutive room centers
pub const MAX_CORRIDOR_SPAN: i32 = 20;

const ROOM_WIDTH: (i32, i32) = (5, 9);
const ROOM_HEIGHT: (i32, i32) = (4, 7);

/// A rectangular room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Edge-exclusive overlap test, so rooms may touch but not share cells
    pub fn intersects(&self, other: &Room) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.x
            && pos.x < self.x + self.width
            && pos.y >= self.y
            && pos.y < self.y + self.height
    }

    /// Room forced onto the map when random placement accepted nothing
    pub fn fallback() -> Self {
        Room::new(2, 2, 6, 5)
    }
}

/// Generate a dungeon grid with up to `num_rooms` rooms
pub fn generate_dungeon(
    rng: &mut impl Rng,
    width: i32,
    height: i32,
    num_rooms: usize,
) -> (Map, Vec<Room>) {
    let mut map = Map::new(width, height);
    let mut rooms: Vec<Room> = Vec::new();
    let mut attempts = 0;

    while rooms.len() < num_rooms && attempts < MAX_ATTEMPTS {
        attempts += 1;

        let w = rng.gen_range(ROOM_WIDTH.0..=ROOM_WIDTH.1);
        let h = rng.gen_range(ROOM_HEIGHT.0..=ROOM_HEIGHT.1);

        // Grid too small for this candidate plus its 1-tile border
        let max_x = width - w - 1;
        let max_y = height - h - 1;
        if max_x < 1 || max_y < 1 {
            continue;
        }

        let x = rng.gen_range(1..=max_x);
        let y = rng.gen_range(1..=max_y);
        let new_room = Room::new(x, y, w, h);

        if rooms.iter().any(|r| new_room.intersects(r)) {
            continue;
        }

        let Some(prev) = rooms.last().copied() else {
            carve_room(&mut map, &new_room);
            rooms.push(new_room);
            continue;
        };

        let prev_center = prev.center();
        let new_center = new_room.center();
        let h_dist = (new_center.x - prev_center.x).abs();
        let v_dist = (new_center.y - prev_center.y).abs();
        // Checked before carving so a dropped room leaves no unreachable floor
        if h_dist > MAX_CORRIDOR_SPAN || v_dist > MAX_CORRIDOR_SPAN {
            log::debug!("Dropped room at ({}, {}): corridor would span {}x{}", x, y, h_dist, v_dist);
            continue;
        }

        carve_room(&mut map, &new_room);
        if rng.gen_bool(0.5) {
            carve_h_corridor(&mut map, prev_center.x, new_center.x, prev_center.y);
            carve_v_corridor(&mut map, prev_center.y, new_center.y, new_center.x);
        } else {
            carve_v_corridor(&mut map, prev_center.y, new_center.y, prev_center.x);
            carve_h_corridor(&mut map, prev_center.x, new_center.x, new_center.y);
        }
        rooms.push(new_room);
    }

    if rooms.is_empty() {
        let fallback = Room::fallback();
        log::warn!("No room fit after {} attempts, placing fallback room", attempts);
        carve_room(&mut map, &fallback);
        rooms.push(fallback);
    }

    (map, rooms)
}

/// Carve out a room
fn carve_room(map: &mut Map, room: &Room) {
    for y in room.y..room.y + room.height {
        for x in room.x..room.x + room.width {
            map.set(x, y, TileType::Floor);
        }
    }
}

/// Carve a horizontal corridor
fn carve_h_corridor(map: &mut Map, x1: i32, x2: i32, y: i32) {
    for x in x1.min(x2)..=x1.max(x2) {
        map.set(x, y, TileType::Floor);
    }
}

/// Carve a vertical corridor
fn carve_v_corridor(map: &mut Map, y1: i32, y2: i32, x: i32) {
    for y in y1.min(y2)..=y1.max(y2) {
        map.set(x, y, TileType::Floor);
    }
}
