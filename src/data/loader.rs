//! RON data loader
//!
//! Loads class templates and settings from external RON files, with fallback
//! to hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::classes::{default_class_templates, ClassTemplates};
use super::config::{ConfigError, GameConfig};

/// Default location of the data files, relative to the working directory
pub const DATA_DIR: &str = "assets/data";

const CLASSES_FILE: &str = "classes.ron";
const CONFIG_FILE: &str = "config.ron";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize data: {0}")]
    Serialize(#[from] ron::Error),
    #[error("{0} defines no classes")]
    NoClasses(PathBuf),
    #[error("invalid settings in {path}: {source}")]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

/// Manages all external game data
#[derive(Debug, Clone)]
pub struct DataManager {
    pub classes: ClassTemplates,
    pub config: GameConfig,
}

impl Default for DataManager {
    fn default() -> Self {
        Self {
            classes: default_class_templates(),
            config: GameConfig::default(),
        }
    }
}

impl DataManager {
    /// Create a new DataManager, loading from `assets/data` or using defaults
    pub fn new() -> Self {
        Self::load_from_dir(Path::new(DATA_DIR))
    }

    /// Load every data file under `base_path`; each missing or broken file
    /// falls back to its defaults on its own
    pub fn load_from_dir(base_path: &Path) -> Self {
        let classes = match Self::load_classes(base_path) {
            Ok(Some(classes)) => classes,
            Ok(None) => default_class_templates(),
            Err(e) => {
                log::warn!("{}. Using default classes.", e);
                default_class_templates()
            }
        };
        let config = match Self::load_config(base_path) {
            Ok(Some(config)) => config,
            Ok(None) => GameConfig::default(),
            Err(e) => {
                log::warn!("{}. Using default config.", e);
                GameConfig::default()
            }
        };

        Self { classes, config }
    }

    /// Load class templates from RON file, `None` when the file is absent
    pub fn load_classes(base_path: &Path) -> Result<Option<ClassTemplates>, DataError> {
        let path = base_path.join(CLASSES_FILE);
        let Some(classes) = read_ron::<ClassTemplates>(&path)? else {
            return Ok(None);
        };
        if classes.templates.is_empty() {
            return Err(DataError::NoClasses(path));
        }
        log::info!("Loaded {} classes from {}", classes.templates.len(), path.display());
        Ok(Some(classes))
    }

    /// Load settings from RON file, `None` when the file is absent
    pub fn load_config(base_path: &Path) -> Result<Option<GameConfig>, DataError> {
        let path = base_path.join(CONFIG_FILE);
        let Some(config) = read_ron::<GameConfig>(&path)? else {
            return Ok(None);
        };
        config
            .validate()
            .map_err(|source| DataError::InvalidConfig { path: path.clone(), source })?;
        log::info!("Loaded config from {}", path.display());
        Ok(Some(config))
    }
}

fn read_ron<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, DataError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents)
        .map(Some)
        .map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Export default data to RON files (for creating initial data files)
pub fn export_default_data(base_path: &Path) -> Result<(), DataError> {
    fs::create_dir_all(base_path).map_err(|source| DataError::Io {
        path: base_path.to_path_buf(),
        source,
    })?;

    let pretty = ron::ser::PrettyConfig::default();
    let files = [
        (CLASSES_FILE, ron::ser::to_string_pretty(&default_class_templates(), pretty.clone())?),
        (CONFIG_FILE, ron::ser::to_string_pretty(&GameConfig::default(), pretty)?),
    ];
    for (name, contents) in files {
        let path = base_path.join(name);
        fs::write(&path, contents).map_err(|source| DataError::Io { path, source })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("abyss-data-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_export_then_load_default_data() {
        let dir = scratch_dir("export");
        export_default_data(&dir).expect("export succeeds");

        let data = DataManager::load_from_dir(&dir);
        assert_eq!(data.classes, default_class_templates());
        assert_eq!(data.config, GameConfig::default());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_dir_uses_defaults() {
        let dir = scratch_dir("missing");
        let data = DataManager::load_from_dir(&dir);
        assert_eq!(data.classes.templates.len(), 4);
        assert_eq!(data.config.map_width, 80);
    }

    #[test]
    fn test_broken_file_falls_back() {
        let dir = scratch_dir("broken");
        fs::create_dir_all(&dir).expect("create dir");
        fs::write(dir.join(CLASSES_FILE), "not ron at all (").expect("write");
        fs::write(dir.join(CONFIG_FILE), "(aggro_radius: 2)").expect("write");

        assert!(matches!(DataManager::load_classes(&dir), Err(DataError::Parse { .. })));
        let data = DataManager::load_from_dir(&dir);
        assert_eq!(data.classes, default_class_templates());
        assert_eq!(data.config.aggro_radius, 2);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_empty_class_list_rejected() {
        let dir = scratch_dir("empty");
        fs::create_dir_all(&dir).expect("create dir");
        fs::write(dir.join(CLASSES_FILE), "(templates: [])").expect("write");

        assert!(matches!(DataManager::load_classes(&dir), Err(DataError::NoClasses(_))));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_tiny_map_config_falls_back() {
        let dir = scratch_dir("tiny");
        fs::create_dir_all(&dir).expect("create dir");
        fs::write(dir.join(CONFIG_FILE), "(map_width: 5, map_height: 5)").expect("write");

        assert!(matches!(
            DataManager::load_config(&dir),
            Err(DataError::InvalidConfig {
                source: ConfigError::MapTooSmall { width: 5, height: 5 },
                ..
            })
        ));
        let data = DataManager::load_from_dir(&dir);
        assert_eq!(data.config, GameConfig::default());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_out_of_range_item_chance_falls_back() {
        let dir = scratch_dir("chance");
        fs::create_dir_all(&dir).expect("create dir");
        fs::write(dir.join(CONFIG_FILE), "(item_chance: 1.5)").expect("write");

        assert!(matches!(
            DataManager::load_config(&dir),
            Err(DataError::InvalidConfig {
                source: ConfigError::ItemChance(_),
                ..
            })
        ));
        assert_eq!(DataManager::load_from_dir(&dir).config.item_chance, 0.5);

        let _ = fs::remove_dir_all(&dir);
    }
}
