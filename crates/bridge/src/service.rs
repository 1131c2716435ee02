//! Greeting service with built-in fallback

use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::library::GreetingLibrary;
use crate::logging;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Service name reported by health checks
pub const SERVICE_NAME: &str = "HSCIDE API";

static SHARED: OnceLock<GreetingService> = OnceLock::new();

/// Where a greeting came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GreetingSource {
    /// Returned by the native library's `get_hello_world`
    #[serde(rename = "C++ library")]
    NativeLibrary,
    /// Built-in greeting used when the library is unavailable
    #[serde(rename = "Fallback")]
    Fallback,
}

impl fmt::Display for GreetingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NativeLibrary => write!(f, "C++ library"),
            Self::Fallback => write!(f, "Fallback"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
    pub source: GreetingSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub cpp_library_available: bool,
    pub service: String,
}

/// Serves the greeting from the native library, or the built-in copy
#[derive(Debug)]
pub struct GreetingService {
    library: Option<GreetingLibrary>,
    fallback: bool,
}

impl GreetingService {
    pub fn new(library: Option<GreetingLibrary>, fallback: bool) -> Self {
        Self { library, fallback }
    }

    /// Build a service from config, loading the library if it can be found
    ///
    /// # Errors
    ///
    /// Returns `BridgeError::Unavailable` when the library cannot be loaded and
    /// fallback is disabled.
    pub fn from_config(config: &BridgeConfig, base_dir: &Path) -> Result<Self, BridgeError> {
        let path = config.resolve_library_path(base_dir);

        let library = match GreetingLibrary::open(&path) {
            Ok(library) => Some(library),
            Err(e) if config.fallback => {
                warn!("Native greeting library unavailable, using fallback: {e}");
                None
            }
            Err(e) => {
                return Err(BridgeError::Unavailable {
                    message: e.to_string(),
                });
            }
        };

        Ok(Self::new(library, config.fallback))
    }

    /// Load config from a TOML file, initialize logging at its level, then
    /// build the service
    pub fn from_config_file(config_path: &Path, base_dir: &Path) -> Result<Self, BridgeError> {
        let config = BridgeConfig::load(config_path)?;
        logging::init(&config.log_level);
        Self::from_config(&config, base_dir)
    }

    pub fn library_available(&self) -> bool {
        self.library.is_some()
    }

    /// Fetch the greeting
    pub fn hello(&self) -> Result<HelloResponse, BridgeError> {
        let Some(library) = &self.library else {
            return self.fallback_response("native library not loaded".to_string());
        };

        match library.get_hello_world() {
            Ok(message) => {
                debug!("Greeting served from {}", library.path().display());
                Ok(HelloResponse {
                    message,
                    source: GreetingSource::NativeLibrary,
                })
            }
            Err(e) if self.fallback => {
                warn!("Native greeting call failed, using fallback: {e}");
                self.fallback_response(e.to_string())
            }
            Err(e) => Err(e),
        }
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "healthy".to_string(),
            cpp_library_available: self.library_available(),
            service: SERVICE_NAME.to_string(),
        }
    }

    fn fallback_response(&self, reason: String) -> Result<HelloResponse, BridgeError> {
        if !self.fallback {
            return Err(BridgeError::Unavailable { message: reason });
        }
        Ok(HelloResponse {
            message: hscide::greeting().to_string(),
            source: GreetingSource::Fallback,
        })
    }
}

/// Process-wide service, created on first call
///
/// Later calls return the same instance and ignore their arguments. A failed
/// first initialization stores nothing, so the next call retries.
pub fn shared_service(
    config: &BridgeConfig,
    base_dir: &Path,
) -> Result<&'static GreetingService, BridgeError> {
    if let Some(service) = SHARED.get() {
        return Ok(service);
    }
    let service = GreetingService::from_config(config, base_dir)?;
    Ok(SHARED.get_or_init(|| service))
}
