//! Inventory system
//!
//! The player's carried items, addressed by list index.

use serde::{Deserialize, Serialize};

use super::item::Item;

/// Why two inventory slots could not be merged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineError {
    OutOfRange,
    SameSlot,
    Mismatch,
    Potion,
}

impl CombineError {
    pub fn message(&self) -> &'static str {
        match self {
            CombineError::OutOfRange => "Invalid item numbers.",
            CombineError::SameSlot => "You cannot combine an item with itself.",
            CombineError::Mismatch => "Only identical items can be combined.",
            CombineError::Potion => "Potions cannot be combined.",
        }
    }
}

/// Player inventory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Get current number of items
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Merge the items at `i` and `j` into one new item appended at the end
    pub fn combine(&mut self, i: usize, j: usize) -> Result<&Item, CombineError> {
        let (first, second) = match (self.items.get(i), self.items.get(j)) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(CombineError::OutOfRange),
        };
        if i == j {
            return Err(CombineError::SameSlot);
        }
        if first.kind == crate::items::ItemKind::Heal {
            return Err(CombineError::Potion);
        }
        if !first.combinable_with(second) {
            return Err(CombineError::Mismatch);
        }

        let merged = first.combined(second);
        // Remove the higher index first so the lower one stays valid
        self.items.remove(i.max(j));
        self.items.remove(i.min(j));
        self.items.push(merged);
        Ok(&self.items[self.items.len() - 1])
    }
}
