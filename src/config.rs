//! Configuration file handling.
//!
//! The configuration holds named color schemes in a TOML file, by default
//! `~/.colordna.toml`. A missing file is created with the built-in
//! schemes; built-in schemes absent from an existing file are merged in
//! without overriding the user's own definitions.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::scheme::{builtin_schemes, ColorScheme};

/// File name used under the home directory.
pub const CONFIG_FILE_NAME: &str = ".colordna.toml";

const CONFIG_HEADER: &str = r#"# colordna configuration file
# This file contains color schemes for DNA/RNA sequence visualization
#
# Color format: ANSI escape sequences, written with TOML unicode escapes
# - Font colors: "\u001b[91m" (bright red), "\u001b[92m" (bright green), etc.
# - Background colors: "\u001b[41m\u001b[97m" (red background + white text)
# - Styles: "\u001b[1m" (bold), "\u001b[4m" (underline), "\u001b[3m" (italic)
#
# quality = "gradient", "mono" or "none"
#
# You can create custom color schemes by adding new [color_schemes.<name>] tables.
# The 'bright' scheme is the default and uses only font colors (no backgrounds).

"#;

/// Errors that can occur while loading or saving the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Color scheme '{0}' not found")]
    UnknownScheme(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub color_schemes: BTreeMap<String, ColorScheme>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_schemes: builtin_schemes(),
        }
    }
}

/// Default configuration path, `~/.colordna.toml`.
///
/// Falls back to the working directory when no home directory is known.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_FILE_NAME)
}

impl Config {
    /// Loads the configuration, creating the file with defaults if missing.
    ///
    /// Unreadable files fall back to the built-in schemes; only a file that
    /// exists but does not parse is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, creating default config at: {}", path.display());
            let config = Self::default();
            if let Err(e) = config.save(path) {
                warn!("Could not create config file, using built-in defaults: {}", e);
            }
            return Ok(config);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Could not read config file, using built-in defaults: {}", e);
                return Ok(Self::default());
            }
        };

        let mut config = Self::from_toml(&content)?;
        debug!(
            "Found {} color scheme(s) in {}",
            config.color_schemes.len(),
            path.display()
        );

        let merged = config.merge_builtin();
        if merged > 0 {
            debug!("Merged {} default color scheme(s)", merged);
        }
        Ok(config)
    }

    /// Parses a configuration, without merging the built-in schemes.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Writes the configuration with an explanatory header, creating parent
    /// directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let body = toml::to_string_pretty(self)?;
        fs::write(path, format!("{}{}", CONFIG_HEADER, body))?;
        Ok(())
    }

    /// Adds every built-in scheme missing from this configuration.
    ///
    /// Returns the number of schemes added.
    pub fn merge_builtin(&mut self) -> usize {
        let mut merged = 0;
        for (name, scheme) in builtin_schemes() {
            if !self.color_schemes.contains_key(&name) {
                self.color_schemes.insert(name, scheme);
                merged += 1;
            }
        }
        merged
    }

    /// Looks up a scheme by name.
    pub fn scheme(&self, name: &str) -> ConfigResult<&ColorScheme> {
        self.color_schemes
            .get(name)
            .ok_or_else(|| ConfigError::UnknownScheme(name.to_string()))
    }

    /// Scheme names, sorted.
    pub fn scheme_names(&self) -> impl Iterator<Item = &str> {
        self.color_schemes.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::QualityMode;

    #[test]
    fn test_missing_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("colordna.toml");

        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# colordna configuration file"));
        assert_eq!(Config::from_toml(&written).unwrap(), Config::default());
    }

    #[test]
    fn test_user_schemes_are_kept_and_defaults_merged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colordna.toml");
        fs::write(
            &path,
            r#"
[color_schemes.bright]
a = "\u001b[31m"
quality = "mono"

[color_schemes.mine]
a = "\u001b[1m"
quality = "sparkly"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        let names: Vec<&str> = config.scheme_names().collect();
        assert_eq!(names, ["bright", "classic", "mine", "monochrome", "pastel"]);

        let bright = config.scheme("bright").unwrap();
        assert_eq!(bright.a, "\x1b[31m");
        assert_eq!(bright.t, "");
        assert_eq!(bright.quality, QualityMode::Mono);

        // Unrecognized quality modes disable quality styling
        assert_eq!(config.scheme("mine").unwrap().quality, QualityMode::None);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colordna.toml");
        fs::write(&path, "color_schemes = 3").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_scheme() {
        let config = Config::default();
        assert!(config.scheme("bright").is_ok());
        assert!(matches!(
            config.scheme("neon"),
            Err(ConfigError::UnknownScheme(name)) if name == "neon"
        ));
    }

    #[test]
    fn test_save_round_trip_keeps_custom_scheme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colordna.toml");

        let mut config = Config::default();
        config.color_schemes.insert(
            "plain".to_string(),
            ColorScheme {
                n: "\x1b[90m".to_string(),
                ..ColorScheme::default()
            },
        );
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
