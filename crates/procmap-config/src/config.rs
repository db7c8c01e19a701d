//! Config sections, defaults, and RON persistence.

use std::path::{Path, PathBuf};

use procmap_gen::{DungeonConfig, GenerationMode, IslandConfig, centered_origin};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "procmap.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Island generator parameters.
    pub island: IslandConfig,
    /// Dungeon generator parameters.
    pub dungeon: DungeonConfig,
    /// What to generate and where.
    pub output: OutputConfig,
    pub debug: DebugConfig,
}

/// Target area and seed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub mode: GenerationMode,
    /// Area width in tiles.
    pub width: i32,
    /// Area height in tiles.
    pub height: i32,
    /// Seed text. Numeric text is used as-is, anything else is hashed.
    pub seed: String,
    pub origin_x: i32,
    pub origin_y: i32,
    /// Treat `(origin_x, origin_y)` as the center of the area instead of its
    /// top-left corner.
    pub centered: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            mode: GenerationMode::Island,
            width: 256,
            height: 256,
            seed: "12345".to_string(),
            origin_x: 0,
            origin_y: 0,
            centered: false,
        }
    }
}

impl OutputConfig {
    /// Top-left corner of the generated area.
    pub fn top_left(&self) -> (i32, i32) {
        if self.centered {
            centered_origin(self.origin_x, self.origin_y, self.width, self.height)
        } else {
            (self.origin_x, self.origin_y)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level filter (e.g. "debug", "info", "warn").
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Config {
    /// Load `procmap.ron` from `config_dir`, writing defaults there first if
    /// it does not exist yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_path(config_dir);

        if path.exists() {
            let config = read_config(&path)?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Write this config to `config_dir/procmap.ron`, creating the directory
    /// if needed.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let path = config_path(config_dir);
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);
        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&path, serialized).map_err(|source| ConfigError::Write { path, source })
    }

    /// Re-read the file. Returns `Some` only when its contents differ from
    /// `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let fresh = read_config(&config_path(config_dir))?;
        if &fresh != self {
            log::info!("Config reloaded with changes");
            Ok(Some(fresh))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_write_item_ids() {
        let text = ron::ser::to_string_pretty(
            &Config::default(),
            ron::ser::PrettyConfig::new().depth_limit(3),
        )
        .unwrap();
        assert!(text.contains("noise_octaves: 4"));
        assert!(text.contains("floor_id: 406"));
        assert!(text.contains("log_level: \"info\""));
    }

    #[test]
    fn test_dungeon_mode_survives_ron() {
        let mut config = Config::default();
        config.output.mode = GenerationMode::Dungeon;
        config.dungeon.room_count = 3;
        let text = ron::to_string(&config).unwrap();
        let back: Config = ron::from_str(&text).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config =
            ron::from_str("(output: (mode: dungeon, seed: \"dng1\"), island: (island_size: 0.5))")
                .unwrap();
        assert_eq!(config.output.mode, GenerationMode::Dungeon);
        assert_eq!(config.output.seed, "dng1");
        assert_eq!(config.output.width, 256);
        assert_eq!(config.island.island_size, 0.5);
        assert_eq!(config.island.noise_octaves, IslandConfig::default().noise_octaves);
        assert_eq!(config.dungeon, DungeonConfig::default());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let result: Result<Config, _> = ron::from_str("(retired_section: (x: 1))");
        assert!(result.is_ok());
    }

    #[test]
    fn test_top_left_honours_centering() {
        let mut output = OutputConfig {
            width: 64,
            height: 32,
            origin_x: 100,
            origin_y: 100,
            ..Default::default()
        };
        assert_eq!(output.top_left(), (100, 100));
        output.centered = true;
        assert_eq!(output.top_left(), (68, 84));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.output.width = 64;
        config.island.smoothing_passes = 5;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        let config = Config::load_or_create(&nested).unwrap();
        assert_eq!(config, Config::default());
        assert!(nested.join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_reload_reports_new_seed() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());

        let mut modified = config.clone();
        modified.output.seed = "other".to_string();
        modified.save(dir.path()).unwrap();

        let reloaded = config.reload(dir.path()).unwrap();
        assert_eq!(reloaded.map(|c| c.output.seed), Some("other".to_string()));
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{{not ron}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }
}
