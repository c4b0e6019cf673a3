//! Fake capabilities that record every call

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use rust_texture_cache::{
    IconCacheError, IconFlags, IconId, PathResolver, Result, SingletonIcon, TextureLoader,
};

/// Resolves only the ids it was given, plus every singleton icon
pub struct FakeResolver {
    available: HashSet<IconId>,
    pub calls: RefCell<Vec<IconId>>,
}

impl FakeResolver {
    pub fn with_icons(icons: impl IntoIterator<Item = IconId>) -> Self {
        let mut available: HashSet<IconId> = icons.into_iter().collect();
        available.extend(SingletonIcon::ALL.iter().filter_map(|icon| icon.icon_id()));
        Self {
            available,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Resolves nothing at all, not even singletons
    pub fn empty() -> Self {
        Self {
            available: HashSet::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls_for(&self, id: IconId) -> usize {
        self.calls.borrow().iter().filter(|c| **c == id).count()
    }
}

impl PathResolver for FakeResolver {
    fn resolve(&self, id: IconId, _flags: IconFlags) -> Option<PathBuf> {
        self.calls.borrow_mut().push(id);
        self.available
            .contains(&id)
            .then(|| PathBuf::from(format!("ui/icon/{:06}/{:06}.tex", id / 1000 * 1000, id)))
    }
}

/// Texture that counts its own release
#[derive(Debug)]
pub struct FakeTexture {
    pub serial: usize,
    pub path: PathBuf,
    released: Rc<Cell<usize>>,
}

impl Drop for FakeTexture {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

#[derive(Default)]
pub struct FakeLoader {
    pub loads: RefCell<Vec<PathBuf>>,
    pub file_loads: RefCell<Vec<PathBuf>>,
    /// Paths whose load fails even though they resolved
    pub broken: RefCell<HashSet<PathBuf>>,
    pub fail_local_file: Cell<bool>,
    released: Rc<Cell<usize>>,
    next_serial: Cell<usize>,
}

impl FakeLoader {
    pub fn released_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.released)
    }

    pub fn loads_of(&self, id: IconId) -> usize {
        let suffix = format!("{:06}.tex", id);
        self.loads
            .borrow()
            .iter()
            .filter(|p| p.to_string_lossy().ends_with(&suffix))
            .count()
    }

    pub fn break_icon(&self, id: IconId) {
        self.broken
            .borrow_mut()
            .insert(PathBuf::from(format!("ui/icon/{:06}/{:06}.tex", id / 1000 * 1000, id)));
    }

    fn make(&self, path: &Path) -> FakeTexture {
        let serial = self.next_serial.get();
        self.next_serial.set(serial + 1);
        FakeTexture {
            serial,
            path: path.to_path_buf(),
            released: Rc::clone(&self.released),
        }
    }
}

impl TextureLoader for FakeLoader {
    type Texture = FakeTexture;

    fn load_from_path(&self, path: &Path) -> Result<FakeTexture> {
        self.loads.borrow_mut().push(path.to_path_buf());
        if self.broken.borrow().contains(path) {
            return Err(IconCacheError::load_failure(path, "corrupt texture"));
        }
        Ok(self.make(path))
    }

    fn load_from_file(&self, file: &Path) -> Result<FakeTexture> {
        self.file_loads.borrow_mut().push(file.to_path_buf());
        if self.fail_local_file.get() {
            return Err(IconCacheError::load_failure(file, "file does not exist"));
        }
        Ok(self.make(file))
    }
}
