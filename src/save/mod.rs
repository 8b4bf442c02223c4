//! Save/load system
//!
//! Handles game export, import validation and save files.

pub mod save_game;

pub use save_game::{
    load_from_path, load_game, save_directory, save_exists, save_game, save_path, save_to_path,
    validate, EnemySaveData, ItemOnGround, MapSaveData, SaveData, SaveError, ValidationError, SAVE_VERSION,
};
