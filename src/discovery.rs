//! Filesystem icon resolution
//!
//! Icons are expected in the game's archive layout, extracted to disk:
//! `<root>/062000/062409.dds`, with an optional `_hr1` high-resolution
//! variant next to each file.

use std::path::{Path, PathBuf};

use crate::{
    provider::PathResolver,
    types::{IconFlags, IconId},
};

/// Suffix of the high-resolution variant of an icon file
const HI_RES_SUFFIX: &str = "_hr1";

/// Resolves icon ids against an extracted icon tree
#[derive(Debug, Clone)]
pub struct DirectoryIconResolver {
    root: PathBuf,
    /// Supported icon extensions, in lookup order
    supported_extensions: Vec<String>,
}

impl DirectoryIconResolver {
    /// Create a resolver rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            supported_extensions: vec![
                "dds".to_string(),
                "tga".to_string(),
                "png".to_string(),
                "DDS".to_string(),
                "TGA".to_string(),
                "PNG".to_string(),
            ],
        }
    }

    /// Restrict lookups to the given extensions
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding an icon: ids are grouped in blocks of 1000
    fn folder_for(&self, id: IconId) -> PathBuf {
        self.root.join(format!("{:06}", id / 1000 * 1000))
    }

    fn find_with_stem(&self, folder: &Path, stem: &str) -> Option<PathBuf> {
        self.supported_extensions.iter().find_map(|ext| {
            let candidate = folder.join(format!("{}.{}", stem, ext));
            log::trace!("Trying path: {:?}", candidate);
            candidate.is_file().then_some(candidate)
        })
    }
}

impl PathResolver for DirectoryIconResolver {
    fn resolve(&self, id: IconId, flags: IconFlags) -> Option<PathBuf> {
        if id == 0 {
            return None;
        }

        let folder = self.folder_for(id);
        let stem = format!("{:06}", id);

        if flags.hi_res {
            let hi_res_stem = format!("{}{}", stem, HI_RES_SUFFIX);
            if let Some(path) = self.find_with_stem(&folder, &hi_res_stem) {
                return Some(path);
            }
        }

        let found = self.find_with_stem(&folder, &stem);
        if found.is_none() {
            log::trace!("Icon {} not found under {:?}", id, folder);
        }
        found
    }
}
