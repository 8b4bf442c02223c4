//! Enemy turn phase
//!
//! Enemies within aggro range take one greedy step towards the player.
//! There is no pathfinding: a blocked step is simply skipped.

use super::message_log::MessageCategory;
use super::state::Game;
use crate::combat::chase_damage;
use crate::world::{Position, TileType};

/// Where an enemy at `from` wants to step, or `None` when the player is
/// out of range
pub fn chase_step(from: Position, player: Position, aggro_radius: i32) -> Option<Position> {
    let distance = from.distance(&player);
    if distance == 0 || distance > aggro_radius {
        return None;
    }
    Some(from.step_towards(&player))
}

impl Game {
    /// Let every enemy act once, in ascending position order
    pub(crate) fn run_enemy_phase(&mut self) {
        let positions: Vec<Position> = self.enemies.keys().copied().collect();

        for pos in positions {
            if self.game_over {
                break;
            }
            let Some(name) = self.enemies.get(&pos).map(|e| e.name()) else {
                continue;
            };
            let Some(target) = chase_step(pos, self.player_pos, self.config.aggro_radius) else {
                continue;
            };

            if target == self.player_pos {
                let damage = chase_damage(&mut self.rng);
                self.player.take_damage(damage);
                self.add_message(format!("The {} attacks you for {} damage.", name, damage), MessageCategory::Combat);
                if self.player.is_dead() {
                    self.player_died(name);
                }
                continue;
            }

            let open = self.map.tile_at(target) == Some(TileType::Floor) && !self.enemies.contains_key(&target);
            if open {
                if let Some(enemy) = self.enemies.remove(&pos) {
                    log::debug!("{} moves ({}, {}) -> ({}, {})", name, pos.x, pos.y, target.x, target.y);
                    self.enemies.insert(target, enemy);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{default_class_templates, GameConfig};
    use crate::entities::{Enemy, EnemyType};
    use crate::world::generation::Room;
    use crate::world::Map;

    fn arena() -> Game {
        let classes = default_class_templates();
        let mut game = Game::new("Hero", &classes.templates[0], GameConfig::default(), 11);
        let mut map = Map::new(12, 9);
        for y in 1..8 {
            for x in 1..11 {
                map.set(x, y, TileType::Floor);
            }
        }
        game.map = map;
        game.rooms = vec![Room::new(1, 1, 10, 7)];
        game.player_pos = Position::new(5, 4);
        game.stairs = None;
        game.enemies.clear();
        game.items.clear();
        game
    }

    #[test]
    fn test_chase_step_range() {
        let player = Position::new(5, 5);
        assert_eq!(chase_step(Position::new(8, 3), player, 5), Some(Position::new(7, 4)));
        assert_eq!(chase_step(Position::new(11, 5), player, 5), None);
        assert_eq!(chase_step(Position::new(10, 5), player, 5), Some(Position::new(9, 5)));
        assert_eq!(chase_step(player, player, 5), None);
    }

    #[test]
    fn test_diagonal_step() {
        let mut game = arena();
        game.enemies.insert(Position::new(7, 6), Enemy::new(EnemyType::Orc, 1));
        game.run_enemy_phase();
        assert!(game.enemies.contains_key(&Position::new(6, 5)));
    }

    #[test]
    fn test_far_enemy_stays() {
        let mut game = arena();
        game.enemies.insert(Position::new(10, 7), Enemy::new(EnemyType::Orc, 1));
        game.player_pos = Position::new(1, 1);
        game.run_enemy_phase();
        assert!(game.enemies.contains_key(&Position::new(10, 7)));
    }

    #[test]
    fn test_blocked_enemy_waits() {
        let mut game = arena();
        // The nearer orc is processed first but its step lands on the player;
        // the farther one is blocked by it and stays put
        game.enemies.insert(Position::new(6, 4), Enemy::new(EnemyType::Orc, 1));
        game.enemies.insert(Position::new(7, 4), Enemy::new(EnemyType::Goblin, 1));
        game.player.hp = 1000;
        game.player.max_hp = 1000;
        game.run_enemy_phase();
        assert!(game.enemies.contains_key(&Position::new(6, 4)));
        assert!(game.enemies.contains_key(&Position::new(7, 4)));
        assert!(game.player.hp < 1000 && game.player.hp >= 1000 - 15);
    }

    #[test]
    fn test_enemies_avoid_walls() {
        let mut game = arena();
        game.map.set(6, 4, TileType::Wall);
        game.enemies.insert(Position::new(7, 4), Enemy::new(EnemyType::Goblin, 1));
        game.run_enemy_phase();
        assert!(game.enemies.contains_key(&Position::new(7, 4)));
    }

    #[test]
    fn test_phase_stops_at_game_over() {
        let mut game = arena();
        game.player.hp = 1;
        game.enemies.insert(Position::new(4, 4), Enemy::new(EnemyType::Orc, 1));
        game.enemies.insert(Position::new(9, 4), Enemy::new(EnemyType::Goblin, 1));
        game.run_enemy_phase();
        assert!(game.is_game_over());
        assert!(game.enemies.contains_key(&Position::new(9, 4)));
    }
}
