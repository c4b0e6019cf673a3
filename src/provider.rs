//! Capabilities the cache is composed from
//!
//! The cache never touches game data directly. Path resolution, texture
//! decoding and the record tables are supplied by the host, which keeps the
//! cache constructible with fakes in tests.

use std::path::{Path, PathBuf};

use crate::{
    error::Result,
    types::{ClassJobRecord, IconFlags, IconId, IconRecord, IconTable},
};

/// Maps an icon identifier to the path of its resource.
///
/// Implementations must be deterministic and free of side effects.
pub trait PathResolver {
    /// Returns `None` when no resource exists for `id` (including id 0).
    fn resolve(&self, id: IconId, flags: IconFlags) -> Option<PathBuf>;
}

/// Loads textures from resolved resource paths or plain files.
pub trait TextureLoader {
    /// Owned texture handle. Dropping it releases the resource.
    type Texture;

    /// Load a resource returned by a [`PathResolver`].
    fn load_from_path(&self, path: &Path) -> Result<Self::Texture>;

    /// Load a file that ships with the plugin rather than with the game.
    fn load_from_file(&self, file: &Path) -> Result<Self::Texture>;
}

/// Enumerable record tables backing the fixed categories
pub trait DataSource {
    /// All rows of a table with a direct icon column
    fn icon_records(&self, table: IconTable) -> Vec<IconRecord>;

    /// All class/job rows
    fn class_jobs(&self) -> Vec<ClassJobRecord>;
}

impl<R: PathResolver + ?Sized> PathResolver for &R {
    fn resolve(&self, id: IconId, flags: IconFlags) -> Option<PathBuf> {
        (**self).resolve(id, flags)
    }
}

impl<L: TextureLoader + ?Sized> TextureLoader for &L {
    type Texture = L::Texture;

    fn load_from_path(&self, path: &Path) -> Result<Self::Texture> {
        (**self).load_from_path(path)
    }

    fn load_from_file(&self, file: &Path) -> Result<Self::Texture> {
        (**self).load_from_file(file)
    }
}

impl<D: DataSource + ?Sized> DataSource for &D {
    fn icon_records(&self, table: IconTable) -> Vec<IconRecord> {
        (**self).icon_records(table)
    }

    fn class_jobs(&self) -> Vec<ClassJobRecord> {
        (**self).class_jobs()
    }
}
