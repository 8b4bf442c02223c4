//! Game state
//!
//! Movement, combat, item use and depth transitions.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::message_log::{MessageCategory, MessageLog};
use super::Outcome;
use crate::combat::{resolve_player_attack, retaliation_damage};
use crate::data::{ClassTemplate, GameConfig};
use crate::entities::{starting_weapon, Character, Enemy};
use crate::items::{generate_shop_inventory, Equipment, Inventory, Item, ItemKind};
use crate::progression::apply_level_ups;
use crate::world::generation::Room;
use crate::world::{generate_level, Direction, Map, Position};

/// The main game struct that holds all run data
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) rng: StdRng,
    pub(crate) player: Character,
    pub(crate) player_pos: Position,
    pub(crate) inventory: Inventory,
    pub(crate) equipment: Equipment,
    pub(crate) map: Map,
    pub(crate) rooms: Vec<Room>,
    /// `None` while in a shop
    pub(crate) stairs: Option<Position>,
    pub(crate) enemies: BTreeMap<Position, Enemy>,
    pub(crate) items: BTreeMap<Position, Item>,
    pub(crate) depth: u32,
    pub(crate) in_shop: bool,
    pub(crate) shop_stock: Vec<Item>,
    pub(crate) messages: MessageLog,
    pub(crate) game_over: bool,
}

impl Game {
    /// Start a new run at depth 1 with the class's starting weapon equipped
    pub fn new(name: impl Into<String>, template: &ClassTemplate, config: GameConfig, seed: u64) -> Self {
        let config = usable_config(config);
        let player = Character::from_template(name, template, config.starting_xp_to_next);
        let mut equipment = Equipment::new();
        let _ = equipment.equip(starting_weapon(template));

        let mut game = Self {
            messages: MessageLog::new(config.message_capacity),
            rng: StdRng::seed_from_u64(seed),
            player,
            player_pos: Position::new(0, 0),
            inventory: Inventory::new(),
            equipment,
            map: Map::new(config.map_width, config.map_height),
            rooms: Vec::new(),
            stairs: None,
            enemies: BTreeMap::new(),
            items: BTreeMap::new(),
            depth: 1,
            in_shop: false,
            shop_stock: Vec::new(),
            game_over: false,
            config,
        };

        log::info!("New {} run with seed {}", template.name, seed);
        game.add_message(
            format!("{} the {} enters the abyss.", game.player.name, game.player.character_class),
            MessageCategory::System,
        );
        game.enter_depth();
        game
    }

    // Accessors

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn player_pos(&self) -> Position {
        self.player_pos
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn stairs(&self) -> Option<Position> {
        self.stairs
    }

    pub fn enemies(&self) -> &BTreeMap<Position, Enemy> {
        &self.enemies
    }

    pub fn items(&self) -> &BTreeMap<Position, Item> {
        &self.items
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn in_shop(&self) -> bool {
        self.in_shop
    }

    pub fn shop_stock(&self) -> &[Item] {
        &self.shop_stock
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn add_message(&mut self, text: impl Into<String>, category: MessageCategory) {
        self.messages.push(text, category);
    }

    /// Build the current depth: a shop on every shop interval, otherwise a
    /// freshly generated level
    pub(crate) fn enter_depth(&mut self) {
        self.enemies.clear();
        self.items.clear();
        self.shop_stock.clear();

        if self.config.is_shop_depth(self.depth) {
            self.in_shop = true;
            self.stairs = None;
            self.shop_stock = generate_shop_inventory(self.depth, &mut self.rng);
            log::info!("Entered shop at depth {}", self.depth);
            self.add_message(
                format!("Depth {}: you find a merchant's shop.", self.depth),
                MessageCategory::System,
            );
            return;
        }

        let level = generate_level(&mut self.rng, &self.config, self.depth);
        self.in_shop = false;
        self.map = level.map;
        self.rooms = level.rooms;
        self.player_pos = level.start;
        self.stairs = Some(level.stairs);
        self.enemies = level.enemies;
        self.items = level.items;
        self.add_message(format!("You arrive at depth {}.", self.depth), MessageCategory::System);
    }

    /// Move the player one tile, attacking, picking up or descending as the
    /// target tile dictates
    pub fn move_player(&mut self, direction: Direction) -> Outcome {
        if self.game_over {
            return Outcome::Rejected;
        }
        if self.in_shop {
            self.add_message("You are in the shop. Leave it to keep exploring.", MessageCategory::Warning);
            return Outcome::Rejected;
        }

        let (dx, dy) = direction.delta();
        let target = self.player_pos.offset(dx, dy);
        let tile = match self.map.tile_at(target) {
            Some(tile) if tile.is_passable() => tile,
            _ => {
                self.add_message("You can't move there.", MessageCategory::Warning);
                return Outcome::Rejected;
            }
        };

        if self.enemies.contains_key(&target) {
            self.attack_enemy(target);
            if !self.game_over {
                self.run_enemy_phase();
            }
            return Outcome::TurnTaken;
        }

        if self.items.contains_key(&target) {
            self.pick_up(target);
            return Outcome::Free;
        }

        if Some(target) == self.stairs {
            self.descend();
            return Outcome::Free;
        }

        if !tile.can_hold_player() {
            self.add_message("You can't move there.", MessageCategory::Warning);
            return Outcome::Rejected;
        }

        self.player_pos = target;
        log::debug!("Player moved to ({}, {})", target.x, target.y);
        self.run_enemy_phase();
        Outcome::TurnTaken
    }

    /// Resolve one exchange against the enemy at `target`
    fn attack_enemy(&mut self, target: Position) {
        let Some(enemy) = self.enemies.get_mut(&target) else {
            return;
        };

        let result = resolve_player_attack(&self.player, &self.equipment, enemy, &mut self.rng);
        let name = enemy.name();
        let died = enemy.take_damage(result.final_damage);
        let retaliation = retaliation_damage(enemy, &self.player, &self.equipment);

        if result.is_crit {
            self.add_message(
                format!("Critical hit! You deal {} damage to the {}.", result.final_damage, name),
                MessageCategory::Combat,
            );
        } else {
            self.add_message(
                format!("You hit the {} for {} damage.", name, result.final_damage),
                MessageCategory::Combat,
            );
        }

        if died {
            if let Some(dead) = self.enemies.remove(&target) {
                self.player.xp += dead.xp_reward;
                self.player.gold += dead.gold_reward;
                self.add_message(
                    format!(
                        "The {} dies! You gain {} XP and {} gold.",
                        name, dead.xp_reward, dead.gold_reward
                    ),
                    MessageCategory::Combat,
                );
                self.check_level_up();
            }
            return;
        }

        self.player.take_damage(retaliation);
        self.add_message(
            format!("The {} hits you for {} damage.", name, retaliation),
            MessageCategory::Combat,
        );
        if self.player.is_dead() {
            self.player_died(name);
        }
    }

    fn check_level_up(&mut self) {
        if apply_level_ups(&mut self.player) > 0 {
            log::debug!("Player reached level {}", self.player.level);
            self.add_message(
                format!("Level up! You are now level {}.", self.player.level),
                MessageCategory::System,
            );
        }
    }

    /// Mark the run as lost. Permanent.
    pub(crate) fn player_died(&mut self, cause: &str) {
        self.game_over = true;
        log::info!("Player slain by {} at depth {}", cause, self.depth);
        self.add_message(format!("You were slain by the {}. Game over.", cause), MessageCategory::Warning);
    }

    fn pick_up(&mut self, target: Position) {
        let Some(item) = self.items.remove(&target) else {
            return;
        };
        if item.kind == ItemKind::Gold {
            self.player.gold += item.value.max(0) as u32;
            self.add_message(format!("You pick up {} gold.", item.value), MessageCategory::Item);
        } else {
            self.add_message(format!("You pick up {}.", item), MessageCategory::Item);
            self.inventory.add_item(item);
        }
    }

    fn descend(&mut self) {
        self.depth += 1;
        log::info!("Descending to depth {}", self.depth);
        self.enter_depth();
    }

    /// Drink a potion or equip the item at `index`
    pub fn use_item(&mut self, index: usize) -> Outcome {
        if self.game_over {
            return Outcome::Rejected;
        }
        let Some(kind) = self.inventory.get(index).map(|item| item.kind) else {
            self.add_message("Invalid item number.", MessageCategory::Warning);
            return Outcome::Rejected;
        };

        match kind {
            ItemKind::Gold => {
                self.add_message("Gold cannot be used.", MessageCategory::Warning);
                Outcome::Rejected
            }
            ItemKind::Heal => {
                let Some(potion) = self.inventory.remove_at(index) else {
                    return Outcome::Rejected;
                };
                let restored = self.player.heal(potion.value);
                self.add_message(
                    format!("You drink the {} and restore {} HP.", potion.name, restored),
                    MessageCategory::Item,
                );
                self.run_enemy_phase();
                Outcome::TurnTaken
            }
            ItemKind::Attack | ItemKind::Defense | ItemKind::CritChance | ItemKind::CritDamage => {
                let Some(item) = self.inventory.remove_at(index) else {
                    return Outcome::Rejected;
                };
                let name = item.name.clone();
                match self.equipment.equip(item) {
                    Ok(previous) => {
                        if let Some(previous) = previous {
                            self.add_message(format!("You unequip {}.", previous.name), MessageCategory::Item);
                            self.inventory.add_item(previous);
                        }
                        self.add_message(format!("You equip {}.", name), MessageCategory::Item);
                        Outcome::Free
                    }
                    Err(item) => {
                        self.inventory.add_item(item);
                        Outcome::Rejected
                    }
                }
            }
        }
    }

    /// Merge two identical inventory items into a stronger one
    pub fn combine_items(&mut self, i: usize, j: usize) -> Outcome {
        if self.game_over {
            return Outcome::Rejected;
        }
        match self.inventory.combine(i, j) {
            Ok(item) => {
                let text = format!("Combined into {}.", item);
                self.add_message(text, MessageCategory::Item);
                Outcome::Free
            }
            Err(e) => {
                self.add_message(e.message(), MessageCategory::Warning);
                Outcome::Rejected
            }
        }
    }
}

/// Settings the engine can run with; invalid ones are swapped for defaults
pub(crate) fn usable_config(config: GameConfig) -> GameConfig {
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("{}. Using default config.", e);
            GameConfig::default()
        }
    }
}
