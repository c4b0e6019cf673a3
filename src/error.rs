//! Error types for the texture cache

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::{IconId, SingletonIcon};

/// Result type for texture cache operations
pub type Result<T> = std::result::Result<T, IconCacheError>;

/// Errors that can occur in the texture cache
#[derive(Error, Debug)]
pub enum IconCacheError {
    /// No resource path exists for the identifier
    #[error("No resource path for icon {0}")]
    ResolutionMiss(IconId),

    /// A path resolved but the texture could not be loaded
    #[error("Failed to load texture from {path:?}: {reason}")]
    LoadFailure { path: PathBuf, reason: String },

    /// A bundled or core icon is missing; the asset set is broken
    #[error("Core icon {icon:?} could not be loaded: {reason}")]
    MissingCoreIcon { icon: SingletonIcon, reason: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Image decoding error
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// DDS container or block decompression error
    #[error("DDS error: {0}")]
    Dds(String),

    /// File extension the loader does not decode
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed JSON in a configuration or sheet file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IconCacheError {
    /// Build a `LoadFailure` for `path` from any displayable cause.
    pub fn load_failure(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        IconCacheError::LoadFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
