// Configuration loader, merges the bundled defaults with the user's file

use std::path::Path;

use ::config::{Config, File, FileFormat};

use crate::config::Validator;
use crate::error::{ConfigError, ConfigResult};
use crate::{DEFAULT_CONFIG, KeyboardTomlConfig};

/// Name used in errors for configs that don't come from a file
const INLINE_SOURCE: &str = "<inline>";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load keyboard configuration in two passes:
    ///
    /// **Pass 1**: Parse the user config alone, so syntax errors point at the user's file
    /// **Pass 2**: Merge the bundled defaults with the user config, the user's values win
    ///
    /// The merged config is validated before it's returned.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use layerkit_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::load("keyboard.toml").unwrap();
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<KeyboardTomlConfig> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::load_with_source(&content, &path.display().to_string())
    }

    /// Same as [`ConfigLoader::load`], with the user config given as a string
    pub fn load_str(content: &str) -> ConfigResult<KeyboardTomlConfig> {
        Self::load_with_source(content, INLINE_SOURCE)
    }

    fn load_with_source(content: &str, source: &str) -> ConfigResult<KeyboardTomlConfig> {
        // Pass 1: Check the user config on its own
        Self::parse_user_config(content, source)?;

        // Pass 2: Merge defaults with user config
        let config = Self::merge_configs(DEFAULT_CONFIG, content, source)?;
        Validator::validate_all(&config)?;

        Ok(config)
    }

    /// Parse user configuration (first pass)
    fn parse_user_config(content: &str, source: &str) -> ConfigResult<KeyboardTomlConfig> {
        toml::from_str(content).map_err(|e| ConfigError::TomlParse {
            path: source.to_string(),
            message: e.message().to_string(),
        })
    }

    /// Merge defaults with user config (second pass)
    fn merge_configs(default_str: &str, user_str: &str, source: &str) -> ConfigResult<KeyboardTomlConfig> {
        Config::builder()
            .add_source(File::from_str(default_str, FileFormat::Toml))
            .add_source(File::from_str(user_str, FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ConfigError::TomlParse {
                path: source.to_string(),
                message: format!("Failed to merge with defaults: {}", e),
            })
    }
}
