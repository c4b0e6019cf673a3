//! Icon texture cache for game plugins
//!
//! Resolves numeric icon ids to loaded textures, grouped by category, and
//! owns those textures until the cache is disposed. Path resolution,
//! decoding and the record tables are injected, see [`provider`].

pub mod types;
pub mod error;
pub mod config;
pub mod provider;
pub mod class_job;
pub mod discovery;
pub mod processing;
pub mod sheets;
pub mod cache;

pub use cache::IconTextureCache;
pub use config::IconCacheConfig;
pub use discovery::DirectoryIconResolver;
pub use error::{IconCacheError, Result};
pub use processing::{DecodedTexture, ImageTextureLoader, InputFormat};
pub use provider::{DataSource, PathResolver, TextureLoader};
pub use sheets::IconSheets;
pub use types::{
    CacheStatistics, ClassJobRecord, IconCategory, IconFlags, IconId, IconRecord, IconTable,
    SingletonIcon, SingletonSource,
};

/// Cache wired to the on-disk resolver and the image decoder
pub type FileIconCache = IconTextureCache<DirectoryIconResolver, ImageTextureLoader>;
