//! Render snapshot
//!
//! Owned copy of everything a renderer needs, taken between turns.

use super::message_log::GameMessage;
use super::state::Game;
use crate::entities::{Character, Enemy};
use crate::items::{Equipment, Item};
use crate::world::tile::overlay;
use crate::world::{Map, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    pub map: Map,
    pub player: Character,
    pub player_pos: Position,
    pub enemies: Vec<(Position, Enemy)>,
    pub items: Vec<(Position, Item)>,
    pub stairs: Option<Position>,
    pub inventory: Vec<Item>,
    pub equipment: Equipment,
    pub messages: Vec<GameMessage>,
    pub depth: u32,
    pub in_shop: bool,
    pub shop_stock: Vec<Item>,
    pub game_over: bool,
}

impl GameView {
    /// Plain ASCII rows: terrain first, then items, enemies and the player
    pub fn ascii_rows(&self) -> Vec<String> {
        let mut rows: Vec<Vec<char>> = self
            .map
            .rows()
            .map(|row| row.iter().map(|t| t.glyph()).collect())
            .collect();

        let mut put = |pos: Position, glyph: char| {
            let (Ok(x), Ok(y)) = (usize::try_from(pos.x), usize::try_from(pos.y)) else {
                return;
            };
            if let Some(cell) = rows.get_mut(y).and_then(|row| row.get_mut(x)) {
                *cell = glyph;
            }
        };
        for (pos, item) in &self.items {
            put(*pos, item.kind.glyph());
        }
        for (pos, enemy) in &self.enemies {
            put(*pos, enemy.glyph());
        }
        put(self.player_pos, overlay::PLAYER);

        rows.into_iter().map(|row| row.into_iter().collect()).collect()
    }
}

impl Game {
    pub fn view(&self) -> GameView {
        GameView {
            map: self.map.clone(),
            player: self.player.clone(),
            player_pos: self.player_pos,
            enemies: self.enemies.iter().map(|(p, e)| (*p, e.clone())).collect(),
            items: self.items.iter().map(|(p, i)| (*p, i.clone())).collect(),
            stairs: self.stairs,
            inventory: self.inventory.items().to_vec(),
            equipment: self.equipment.clone(),
            messages: self.messages.to_vec(),
            depth: self.depth,
            in_shop: self.in_shop,
            shop_stock: self.shop_stock.clone(),
            game_over: self.game_over,
        }
    }
}
