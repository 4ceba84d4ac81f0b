//! Configuration file support for jefit2hevy.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/jefit2hevy/config.toml`.
//! Everything here is an overridable default; CLI flags win over the file.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
}

/// Conversion defaults
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Timezone offset applied to rendered timestamps
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Exercise name mapping file (JSON object, source name -> Hevy name)
    #[serde(default)]
    pub mapping_file: Option<PathBuf>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            mapping_file: None,
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_default();
            PathBuf::from(home).join(".config")
        });
        base.join("jefit2hevy").join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.convert.timezone, "UTC");
        assert!(config.convert.mapping_file.is_none());
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[convert]
timezone = "+09:00"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.convert.timezone, "+09:00");
        assert!(config.convert.mapping_file.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[convert]\ntimezone = \"-05:00\"\nmapping_file = \"/tmp/map.json\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.convert.timezone, "-05:00");
        assert_eq!(
            config.convert.mapping_file,
            Some(PathBuf::from("/tmp/map.json"))
        );
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
