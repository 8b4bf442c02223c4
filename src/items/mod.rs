//! Item system

pub mod equipment;
pub mod inventory;
pub mod item;
pub mod loot;

pub use equipment::Equipment;
pub use inventory::{CombineError, Inventory};
pub use item::{EquipSlot, Item, ItemKind, Rarity, RarityInfo};
pub use loot::{generate_gold, generate_item, generate_shop_inventory};
