//! Main cache implementation

use ahash::AHashMap;

use crate::{
    class_job::class_job_icon,
    config::IconCacheConfig,
    error::{IconCacheError, Result},
    provider::{DataSource, PathResolver, TextureLoader},
    types::{
        CacheStatistics, IconCategory, IconFlags, IconId, IconTable, SingletonIcon,
        SingletonSource,
    },
};

/// Category-indexed icon texture cache.
///
/// Owns every texture it loads. Fixed categories and singleton icons are
/// filled once by [`IconTextureCache::load`]; the extra bucket grows on
/// demand and is never evicted. All textures are released together by
/// [`IconTextureCache::dispose`] or when the cache is dropped.
pub struct IconTextureCache<R: PathResolver, L: TextureLoader> {
    resolver: R,
    loader: L,
    flags: IconFlags,
    /// Row id (or icon id for extras) to texture, per category
    categories: AHashMap<IconCategory, AHashMap<IconId, L::Texture>>,
    singletons: AHashMap<SingletonIcon, L::Texture>,
}

impl<R: PathResolver, L: TextureLoader> IconTextureCache<R, L> {
    /// Build the cache: populate every fixed category from `data`, load the
    /// singleton icons and seed the extra bucket from the configuration.
    ///
    /// Records whose icon cannot be resolved or loaded are skipped. Only a
    /// missing singleton icon fails construction.
    pub fn load<D: DataSource>(
        data: &D,
        resolver: R,
        loader: L,
        config: &IconCacheConfig,
    ) -> Result<Self> {
        config.validate()?;

        let mut cache = Self {
            resolver,
            loader,
            flags: config.icon_flags,
            categories: AHashMap::new(),
            singletons: AHashMap::new(),
        };

        for table in IconTable::ALL {
            let records = data.icon_records(table);
            cache.populate(table.category(), records.iter().map(|r| (r.row_id, r.icon)));
        }

        let class_jobs = data.class_jobs();
        let loaded = cache.populate(
            IconCategory::ClassJob,
            class_jobs.iter().map(|r| (r.row_id, class_job_icon(r))),
        );
        log::info!("{} class jobs loaded.", loaded);

        cache.load_singletons(config)?;
        cache.reload_from_config(config);

        let stats = cache.statistics();
        log::info!("Icon cache ready. Total textures: {}", stats.total_textures);
        for (category, count) in &stats.category_counts {
            log::debug!("  {}: {}", category.name(), count);
        }

        Ok(cache)
    }

    /// Load a texture for `id` unless the extra bucket already holds it.
    ///
    /// Returns whether the icon is available afterwards. A miss is not an
    /// error; the next call tries again.
    pub fn ensure_loaded(&mut self, id: IconId) -> bool {
        if self.contains(IconCategory::Extra, id) {
            return true;
        }

        match self.load_icon(id) {
            Ok(texture) => {
                self.category_mut(IconCategory::Extra).insert(id, texture);
                true
            }
            Err(e) => {
                log::debug!("Extra icon {} unavailable: {}", id, e);
                false
            }
        }
    }

    /// [`ensure_loaded`](Self::ensure_loaded) every id in order. Previously
    /// loaded extras are kept even when they no longer appear in `ids`.
    ///
    /// Returns how many textures were newly loaded.
    pub fn reload_all<I: IntoIterator<Item = IconId>>(&mut self, ids: I) -> usize {
        let before = self.len(IconCategory::Extra);
        for id in ids {
            self.ensure_loaded(id);
        }
        self.len(IconCategory::Extra) - before
    }

    /// Bring the extra bucket up to date with the configured icon list
    pub fn reload_from_config(&mut self, config: &IconCacheConfig) -> usize {
        let loaded = self.reload_all(config.extra_icons.iter().copied());
        if loaded > 0 {
            log::info!("Loaded {} extra icons", loaded);
        }
        loaded
    }

    /// Look up a texture. Never loads.
    ///
    /// Fixed categories are keyed by dataset row id, the extra bucket by icon
    /// id and [`IconCategory::Singleton`] by the slot's literal icon id.
    pub fn get(&self, category: IconCategory, id: IconId) -> Option<&L::Texture> {
        match category {
            IconCategory::Singleton => self
                .singletons
                .iter()
                .find(|(icon, _)| icon.icon_id() == Some(id))
                .map(|(_, texture)| texture),
            _ => self.categories.get(&category)?.get(&id),
        }
    }

    /// Texture of a singleton slot. `None` only after [`dispose`](Self::dispose).
    pub fn singleton(&self, icon: SingletonIcon) -> Option<&L::Texture> {
        self.singletons.get(&icon)
    }

    pub fn contains(&self, category: IconCategory, id: IconId) -> bool {
        self.get(category, id).is_some()
    }

    /// Number of textures held in a category
    pub fn len(&self, category: IconCategory) -> usize {
        match category {
            IconCategory::Singleton => self.singletons.len(),
            _ => self.categories.get(&category).map_or(0, |m| m.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.singletons.is_empty() && self.categories.values().all(|m| m.is_empty())
    }

    /// Iterate the (key, texture) pairs of a non-singleton category
    pub fn textures(
        &self,
        category: IconCategory,
    ) -> impl Iterator<Item = (IconId, &L::Texture)> + '_ {
        self.categories
            .get(&category)
            .into_iter()
            .flat_map(|m| m.iter().map(|(id, texture)| (*id, texture)))
    }

    pub fn statistics(&self) -> CacheStatistics {
        let mut stats = CacheStatistics::default();
        for category in IconCategory::ALL {
            let count = self.len(category);
            stats.category_counts.insert(category, count);
            stats.total_textures += count;
        }
        stats
    }

    pub fn flags(&self) -> IconFlags {
        self.flags
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Release every texture in every category and singleton slot.
    ///
    /// Returns the number of textures released. Calling it again releases
    /// nothing; lookups after disposal always miss.
    pub fn dispose(&mut self) -> usize {
        let mut released = 0;
        for textures in self.categories.values_mut() {
            released += textures.drain().count();
        }
        released += self.singletons.drain().count();
        released
    }

    /// Resolve and load one icon. Id 0 never reaches the resolver.
    fn load_icon(&self, id: IconId) -> Result<L::Texture> {
        if id == 0 {
            return Err(IconCacheError::ResolutionMiss(id));
        }
        let path = self
            .resolver
            .resolve(id, self.flags)
            .ok_or(IconCacheError::ResolutionMiss(id))?;
        self.loader.load_from_path(&path)
    }

    fn category_mut(&mut self, category: IconCategory) -> &mut AHashMap<IconId, L::Texture> {
        self.categories.entry(category).or_default()
    }

    /// Fill a fixed category from (row id, icon id) pairs, skipping misses
    fn populate<I>(&mut self, category: IconCategory, entries: I) -> usize
    where
        I: IntoIterator<Item = (u32, IconId)>,
    {
        let mut loaded = 0;
        let mut skipped = 0;

        for (row_id, icon) in entries {
            if self.contains(category, row_id) {
                log::debug!("Duplicate {} row {}, keeping first icon", category.name(), row_id);
                continue;
            }

            match self.load_icon(icon) {
                Ok(texture) => {
                    self.category_mut(category).insert(row_id, texture);
                    loaded += 1;
                }
                Err(e) => {
                    log::debug!("Skipping {} row {}: {}", category.name(), row_id, e);
                    skipped += 1;
                }
            }
        }

        log::debug!("{}: {} icons loaded, {} skipped", category.name(), loaded, skipped);
        loaded
    }

    fn load_singletons(&mut self, config: &IconCacheConfig) -> Result<()> {
        for icon in SingletonIcon::ALL {
            let result = match icon.source() {
                SingletonSource::Game(id) => self.load_icon(id),
                SingletonSource::LocalFile => self.loader.load_from_file(&config.game_icon_path()),
            };

            match result {
                Ok(texture) => {
                    self.singletons.insert(icon, texture);
                }
                Err(e) => {
                    log::warn!("Core icon {:?} failed to load: {}", icon, e);
                    return Err(IconCacheError::MissingCoreIcon {
                        icon,
                        reason: e.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<R: PathResolver, L: TextureLoader> Drop for IconTextureCache<R, L> {
    fn drop(&mut self) {
        let released = self.dispose();
        if released > 0 {
            log::debug!("Released {} icon textures", released);
        }
    }
}
