//! Configuration system
//!
//! Settings files are plain TOML or RON; the format is picked from the file
//! extension so the same settings type can be stored either way.

pub use serde::{Deserialize, Serialize};

use std::fmt;
use std::path::{Path, PathBuf};

/// Supported settings file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml => write!(f, "TOML"),
            Self::Ron => write!(f, "RON"),
        }
    }
}

/// Serializable settings that can round-trip through a settings file
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Parse settings from text in the given format
    fn parse(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let parsed = match format {
            ConfigFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
            ConfigFormat::Ron => ron::from_str(contents).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| ConfigError::Parse { format, message })
    }

    /// Render settings as text in the given format
    fn render(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        let rendered = match format {
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| e.to_string()),
            ConfigFormat::Ron => {
                ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                    .map_err(|e| e.to_string())
            }
        };
        rendered.map_err(|message| ConfigError::Serialize { format, message })
    }

    /// Load settings from a `.toml` or `.ron` file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded {} settings from {}", format, path.display());
        Self::parse(&contents, format)
    }

    /// Write settings to a `.toml` or `.ron` file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = self.render(ConfigFormat::from_path(path)?)?;
        std::fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the settings file failed
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// File that could not be accessed
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Settings text could not be parsed
    #[error("{format} parse error: {message}")]
    Parse {
        /// Format that was being parsed
        format: ConfigFormat,
        /// Parser message
        message: String,
    },

    /// Settings could not be serialized
    #[error("{format} serialization error: {message}")]
    Serialize {
        /// Format that was being written
        format: ConfigFormat,
        /// Serializer message
        message: String,
    },

    /// File extension is neither `.toml` nor `.ron`
    #[error("Unsupported settings format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}
