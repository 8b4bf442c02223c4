//! Data loading and external game content
//!
//! Class templates and engine settings live in RON files under
//! `assets/data`, with hardcoded defaults when a file is missing.

pub mod classes;
pub mod config;
pub mod loader;

pub use classes::{default_class_templates, ClassTemplate, ClassTemplates};
pub use config::{ConfigError, GameConfig, MIN_MAP_HEIGHT, MIN_MAP_WIDTH};
pub use loader::{export_default_data, DataError, DataManager};
