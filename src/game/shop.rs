//! Shop levels
//!
//! Every shop interval the dungeon gives way to a merchant. Buying and
//! selling are free actions; leaving continues to the next depth.

use super::message_log::MessageCategory;
use super::state::Game;
use super::Outcome;

/// A buy or sell request, addressed by list index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopTransaction {
    /// Index into the shop stock
    Buy(usize),
    /// Index into the player inventory
    Sell(usize),
}

impl Game {
    pub fn shop_transaction(&mut self, transaction: ShopTransaction) -> Outcome {
        if self.game_over {
            return Outcome::Rejected;
        }
        if !self.in_shop {
            self.add_message("There is no shop here.", MessageCategory::Warning);
            return Outcome::Rejected;
        }

        match transaction {
            ShopTransaction::Buy(index) => self.buy(index),
            ShopTransaction::Sell(index) => self.sell(index),
        }
    }

    fn buy(&mut self, index: usize) -> Outcome {
        let Some(price) = self.shop_stock.get(index).map(|item| item.price()) else {
            self.add_message("Invalid item number.", MessageCategory::Warning);
            return Outcome::Rejected;
        };
        if price > self.player.gold {
            self.add_message(
                format!("Not enough gold. You need {} but have {}.", price, self.player.gold),
                MessageCategory::Warning,
            );
            return Outcome::Rejected;
        }

        let item = self.shop_stock.remove(index);
        self.player.gold -= price;
        self.add_message(format!("You buy {} for {} gold.", item, price), MessageCategory::Item);
        self.inventory.add_item(item);
        Outcome::Free
    }

    fn sell(&mut self, index: usize) -> Outcome {
        let Some(item) = self.inventory.remove_at(index) else {
            self.add_message("Invalid item number.", MessageCategory::Warning);
            return Outcome::Rejected;
        };
        let price = item.sell_price();
        self.player.gold += price;
        self.add_message(format!("You sell {} for {} gold.", item, price), MessageCategory::Item);
        Outcome::Free
    }

    /// Leave the shop and continue to the next depth
    pub fn leave_shop(&mut self) -> Outcome {
        if self.game_over || !self.in_shop {
            return Outcome::Rejected;
        }
        self.depth += 1;
        log::info!("Leaving shop for depth {}", self.depth);
        self.enter_depth();
        Outcome::Free
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{default_class_templates, GameConfig};
    use crate::items::loot::{SHOP_EQUIPMENT_COUNT, SHOP_POTION_COUNT};
    use crate::items::{Item, ItemKind, Rarity};
    use crate::world::Direction;

    fn shop_game() -> Game {
        let classes = default_class_templates();
        let mut game = Game::new("Hero", &classes.templates[1], GameConfig::default(), 5);
        game.depth = 5;
        game.enter_depth();
        game
    }

    #[test]
    fn test_shop_depth_stocks_shop() {
        let game = shop_game();
        assert!(game.in_shop());
        assert!(game.enemies().is_empty());
        assert!(game.items().is_empty());
        assert_eq!(game.stairs(), None);
        assert_eq!(game.shop_stock().len(), SHOP_EQUIPMENT_COUNT + SHOP_POTION_COUNT);
        assert!(game.shop_stock().iter().all(|i| i.rarity != Rarity::Epic));
    }

    #[test]
    fn test_buy_requires_gold() {
        let mut game = shop_game();
        let price = game.shop_stock[0].price();
        game.player.gold = price - 1;
        assert_eq!(game.shop_transaction(ShopTransaction::Buy(0)), Outcome::Rejected);
        assert!(game.inventory.is_empty());

        game.player.gold = price + 3;
        let item = game.shop_stock[0].clone();
        assert_eq!(game.shop_transaction(ShopTransaction::Buy(0)), Outcome::Free);
        assert_eq!(game.player.gold, 3);
        assert_eq!(game.inventory.get(0), Some(&item));
        assert_eq!(game.shop_stock().len(), SHOP_EQUIPMENT_COUNT + SHOP_POTION_COUNT - 1);
    }

    #[test]
    fn test_sell_credits_half_price() {
        let mut game = shop_game();
        game.inventory.add_item(Item::new("Plate Armor", ItemKind::Defense, 10, "", Rarity::Rare));
        assert_eq!(game.shop_transaction(ShopTransaction::Sell(0)), Outcome::Free);
        assert_eq!(game.player.gold, 125);
        assert!(game.inventory.is_empty());
        assert_eq!(game.shop_transaction(ShopTransaction::Sell(0)), Outcome::Rejected);
    }

    #[test]
    fn test_movement_blocked_in_shop() {
        let mut game = shop_game();
        let pos = game.player_pos();
        assert_eq!(game.move_player(Direction::North), Outcome::Rejected);
        assert_eq!(game.player_pos(), pos);
    }

    #[test]
    fn test_leave_shop_generates_next_level() {
        let mut game = shop_game();
        assert_eq!(game.leave_shop(), Outcome::Free);
        assert_eq!(game.depth(), 6);
        assert!(!game.in_shop());
        assert!(game.stairs().is_some());
        assert!(game.shop_stock().is_empty());
        assert_eq!(game.leave_shop(), Outcome::Rejected);
        assert_eq!(game.shop_transaction(ShopTransaction::Buy(0)), Outcome::Rejected);
    }
}
