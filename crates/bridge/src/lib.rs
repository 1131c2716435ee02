//! Host-side bridge for the HSCIDE native greeting library
//!
//! Loads the `hscide` shared library at runtime, resolves its
//! `get_hello_world` export and serves the greeting to the host. When the
//! library is unavailable the bridge can fall back to the greeting compiled
//! into this crate.

pub mod config;
pub mod error;
pub mod library;
pub mod logging;
pub mod service;

pub use config::{BridgeConfig, ConfigError};
pub use error::BridgeError;
pub use library::{GreetingLibrary, default_library_name};
pub use service::{
    GreetingService, GreetingSource, HealthResponse, HelloResponse, SERVICE_NAME, shared_service,
};
