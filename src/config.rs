//! Configuration for the texture cache

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{IconCacheError, Result},
    types::{IconFlags, IconId},
};

/// Environment variable overriding the bundled asset directory
pub const ASSET_DIR_ENV: &str = "ICON_CACHE_ASSET_DIR";

/// Environment variable switching hi-res icon resolution on or off
pub const HI_RES_ENV: &str = "ICON_CACHE_HI_RES";

/// Configuration for the texture cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconCacheConfig {
    // Bundled assets
    /// Directory holding the plugin's own assets
    pub asset_directory: PathBuf,
    /// Bundled game artwork, relative to `asset_directory`
    pub game_icon_file: PathBuf,

    // Resolution and decoding
    /// Flags passed to the path resolver for every lookup
    pub icon_flags: IconFlags,
    /// Textures larger than this on either side are downscaled
    pub max_icon_dimension: u32,

    // Configuration-referenced icons
    /// Icons to keep loaded in the extra bucket (macro links and the like)
    pub extra_icons: Vec<IconId>,
}

impl Default for IconCacheConfig {
    fn default() -> Self {
        Self {
            asset_directory: PathBuf::from("assets"),
            game_icon_file: PathBuf::from("noses").join("Normal.png"),
            icon_flags: IconFlags::NONE,
            max_icon_dimension: 64,
            extra_icons: Vec::new(),
        }
    }
}

impl IconCacheConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a JSON configuration file. Missing keys take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        log::debug!("Loaded icon cache config from {:?}", path);
        config.validate()?;
        Ok(config)
    }

    /// Apply `ICON_CACHE_ASSET_DIR` and `ICON_CACHE_HI_RES` when set
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(dir) = std::env::var(ASSET_DIR_ENV) {
            if !dir.is_empty() {
                self.asset_directory = PathBuf::from(dir);
            }
        }
        if let Ok(value) = std::env::var(HI_RES_ENV) {
            self.icon_flags.hi_res = matches!(value.as_str(), "1" | "true" | "yes");
        }
        self
    }

    /// Set the asset directory
    pub fn with_asset_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_directory = dir.into();
        self
    }

    /// Set the resolver flags
    pub fn with_icon_flags(mut self, flags: IconFlags) -> Self {
        self.icon_flags = flags;
        self
    }

    /// Set the downscale bound
    pub fn with_max_icon_dimension(mut self, dimension: u32) -> Self {
        self.max_icon_dimension = dimension;
        self
    }

    /// Replace the configuration-referenced icon list
    pub fn with_extra_icons(mut self, icons: impl IntoIterator<Item = IconId>) -> Self {
        self.extra_icons = icons.into_iter().collect();
        self
    }

    /// Full path of the bundled game artwork
    pub fn game_icon_path(&self) -> PathBuf {
        self.asset_directory.join(&self.game_icon_file)
    }

    /// Check values the loader cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.max_icon_dimension == 0 {
            return Err(IconCacheError::Config(
                "max_icon_dimension must be greater than zero".to_string(),
            ));
        }
        if self.game_icon_file.as_os_str().is_empty() {
            return Err(IconCacheError::Config("game_icon_file is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = IconCacheConfig::default();
        assert_eq!(config.game_icon_path(), Path::new("assets").join("noses").join("Normal.png"));
        assert_eq!(config.max_icon_dimension, 64);
        assert!(config.extra_icons.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_partial() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{
                "asset_directory": "/opt/plugin",
                "icon_flags": { "hi_res": true },
                "extra_icons": [5, 7]
            }"#,
        )
        .unwrap();

        let config = IconCacheConfig::from_file(&path).unwrap();
        assert_eq!(
            config,
            IconCacheConfig::default()
                .with_asset_directory("/opt/plugin")
                .with_icon_flags(IconFlags::HI_RES)
                .with_extra_icons([5, 7])
        );
    }

    #[test]
    fn test_invalid_dimension_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "max_icon_dimension": 0 }"#).unwrap();

        let result = IconCacheConfig::from_file(&path);
        assert!(matches!(result, Err(IconCacheError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(IconCacheConfig::from_file(&path), Err(IconCacheError::Json(_))));
    }
}
