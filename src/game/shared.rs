//! Thread-safe game handle
//!
//! Commands hold the write lock for a whole turn, so readers never see a
//! half-applied turn.

use std::sync::Arc;

use parking_lot::RwLock;

use super::shop::ShopTransaction;
use super::state::Game;
use super::view::GameView;
use super::Outcome;
use crate::world::Direction;

#[derive(Debug, Clone)]
pub struct SharedGame {
    inner: Arc<RwLock<Game>>,
}

impl SharedGame {
    pub fn new(game: Game) -> Self {
        Self {
            inner: Arc::new(RwLock::new(game)),
        }
    }

    /// Snapshot for rendering
    pub fn view(&self) -> GameView {
        self.inner.read().view()
    }

    /// Run `f` with shared access to the game
    pub fn read<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access to the game
    pub fn write<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.inner.write())
    }

    pub fn move_player(&self, direction: Direction) -> Outcome {
        self.write(|game| game.move_player(direction))
    }

    pub fn use_item(&self, index: usize) -> Outcome {
        self.write(|game| game.use_item(index))
    }

    pub fn combine_items(&self, i: usize, j: usize) -> Outcome {
        self.write(|game| game.combine_items(i, j))
    }

    pub fn shop_transaction(&self, transaction: ShopTransaction) -> Outcome {
        self.write(|game| game.shop_transaction(transaction))
    }

    pub fn leave_shop(&self) -> Outcome {
        self.write(|game| game.leave_shop())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{default_class_templates, GameConfig};
    use std::thread;

    #[test]
    fn test_views_from_other_threads() {
        let classes = default_class_templates();
        let shared = SharedGame::new(Game::new("Hero", &classes.templates[2], GameConfig::default(), 3));

        let reader = shared.clone();
        let handle = thread::spawn(move || {
            (0..20)
                .map(|_| reader.view())
                .all(|view| view.map.tile_at(view.player_pos).is_some_and(|t| t.can_hold_player()) || view.in_shop)
        });

        for dir in [Direction::North, Direction::East, Direction::South, Direction::West] {
            shared.move_player(dir);
        }

        assert!(handle.join().expect("reader thread"));
        assert_eq!(shared.read(|g| g.depth()), shared.view().depth);
    }
}
