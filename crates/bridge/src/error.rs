//! Bridge error types

use crate::config::ConfigError;
use std::path::PathBuf;
use std::str::Utf8Error;
use thiserror::Error;

/// Errors raised while loading or calling the native greeting library
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("native library not found at: {}", path.display())]
    LibraryNotFound { path: PathBuf },

    #[error("failed to load library: {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("library missing '{symbol}' symbol: {}", path.display())]
    MissingSymbol {
        symbol: &'static str,
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("native greeting returned a null pointer")]
    NullPointer,

    #[error("native greeting is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("greeting unavailable: {message}")]
    Unavailable { message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
