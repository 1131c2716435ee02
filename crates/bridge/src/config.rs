//! Bridge configuration
//!
//! Resolves the native library location with priority:
//! 1. Explicit `library_path`
//! 2. `library_dir` joined with the platform library name
//! 3. `<base_dir>/cpp_lib/<platform library name>`
//!
//! The `cpp_lib` directory matches the layout older HSCIDE hosts used, but the
//! file name does not: those hosts looked for `libHSCIDE.so`/`libHSCIDE.dll`,
//! while this crate builds `libhscide.so`/`hscide.dll`. Set `library_path` to
//! load a library under the old name.

use crate::library::default_library_name;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory searched under the base dir when nothing else is configured
pub const DEFAULT_LIBRARY_SUBDIR: &str = "cpp_lib";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Bridge configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Explicit path to the native library
    pub library_path: Option<PathBuf>,
    /// Directory containing the native library
    pub library_dir: Option<PathBuf>,
    /// Serve the built-in greeting when the library is unavailable
    pub fallback: bool,
    /// Log level for `logging::init`
    pub log_level: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            library_path: None,
            library_dir: None,
            fallback: true,
            log_level: "info".to_string(),
        }
    }
}

impl BridgeConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Resolve where the native library should be loaded from
    pub fn resolve_library_path(&self, base_dir: &Path) -> PathBuf {
        if let Some(path) = &self.library_path {
            return path.clone();
        }

        let dir = self
            .library_dir
            .clone()
            .unwrap_or_else(|| base_dir.join(DEFAULT_LIBRARY_SUBDIR));
        dir.join(default_library_name())
    }
}
