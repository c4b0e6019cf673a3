//! Core types for the texture cache

use serde::{Deserialize, Serialize};

/// Numeric icon identifier in the game's icon namespace. 0 means "no icon".
pub type IconId = u32;

/// Logical grouping of cached textures
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IconCategory {
    MainCommand,
    GeneralAction,
    ContentType,
    Emote,
    ClassJob,
    Mount,
    Minion,
    /// Configuration-referenced icons, loaded on demand
    Extra,
    /// Fixed icons loaded by literal id or from a bundled file
    Singleton,
}

impl IconCategory {
    /// Every category, in population order
    pub const ALL: [IconCategory; 9] = [
        IconCategory::MainCommand,
        IconCategory::GeneralAction,
        IconCategory::ContentType,
        IconCategory::Emote,
        IconCategory::ClassJob,
        IconCategory::Mount,
        IconCategory::Minion,
        IconCategory::Extra,
        IconCategory::Singleton,
    ];

    /// Get a human-readable name for the category
    pub fn name(&self) -> &'static str {
        match self {
            IconCategory::MainCommand => "Main Command",
            IconCategory::GeneralAction => "General Action",
            IconCategory::ContentType => "Content Type",
            IconCategory::Emote => "Emote",
            IconCategory::ClassJob => "Class/Job",
            IconCategory::Mount => "Mount",
            IconCategory::Minion => "Minion",
            IconCategory::Extra => "Extra",
            IconCategory::Singleton => "Singleton",
        }
    }
}

/// Dataset tables whose records carry a plain icon column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconTable {
    MainCommand,
    GeneralAction,
    ContentType,
    Emote,
    Mount,
    Minion,
}

impl IconTable {
    pub const ALL: [IconTable; 6] = [
        IconTable::MainCommand,
        IconTable::GeneralAction,
        IconTable::ContentType,
        IconTable::Emote,
        IconTable::Mount,
        IconTable::Minion,
    ];

    /// The cache category this table populates
    pub fn category(&self) -> IconCategory {
        match self {
            IconTable::MainCommand => IconCategory::MainCommand,
            IconTable::GeneralAction => IconCategory::GeneralAction,
            IconTable::ContentType => IconCategory::ContentType,
            IconTable::Emote => IconCategory::Emote,
            IconTable::Mount => IconCategory::Mount,
            IconTable::Minion => IconCategory::Minion,
        }
    }
}

/// A dataset row with a direct icon reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    pub row_id: u32,
    pub icon: IconId,
}

/// A class/job row. Its icon is derived from the job index or the row id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassJobRecord {
    pub row_id: u32,
    #[serde(default)]
    pub job_index: u8,
}

/// Where a singleton icon comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingletonSource {
    /// Resolved through the path resolver by literal id
    Game(IconId),
    /// Loaded from the plugin's bundled asset file
    LocalFile,
}

/// Fixed icons every session needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingletonIcon {
    Aetheryte,
    Wiki,
    PluginInstaller,
    Logout,
    Emote,
    Hint,
    Chat,
    Maths,
    /// Bundled plugin artwork
    Game,
}

impl SingletonIcon {
    pub const ALL: [SingletonIcon; 9] = [
        SingletonIcon::Aetheryte,
        SingletonIcon::Wiki,
        SingletonIcon::PluginInstaller,
        SingletonIcon::Logout,
        SingletonIcon::Emote,
        SingletonIcon::Hint,
        SingletonIcon::Chat,
        SingletonIcon::Maths,
        SingletonIcon::Game,
    ];

    pub fn source(&self) -> SingletonSource {
        match self {
            SingletonIcon::Aetheryte => SingletonSource::Game(66417),
            SingletonIcon::Wiki => SingletonSource::Game(66404),
            SingletonIcon::PluginInstaller => SingletonSource::Game(66472),
            SingletonIcon::Logout => SingletonSource::Game(66403),
            SingletonIcon::Emote => SingletonSource::Game(66420),
            SingletonIcon::Hint => SingletonSource::Game(66453),
            SingletonIcon::Chat => SingletonSource::Game(66473),
            SingletonIcon::Maths => SingletonSource::Game(62409),
            SingletonIcon::Game => SingletonSource::LocalFile,
        }
    }

    /// Literal game icon id, if this slot is resolved from game data
    pub fn icon_id(&self) -> Option<IconId> {
        match self.source() {
            SingletonSource::Game(id) => Some(id),
            SingletonSource::LocalFile => None,
        }
    }
}

/// Flags forwarded to the path resolver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconFlags {
    /// Prefer the high-resolution variant of an icon
    #[serde(default)]
    pub hi_res: bool,
}

impl IconFlags {
    pub const NONE: IconFlags = IconFlags { hi_res: false };
    pub const HI_RES: IconFlags = IconFlags { hi_res: true };
}

/// Statistics about the cache
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStatistics {
    /// Number of textures per category
    pub category_counts: std::collections::BTreeMap<IconCategory, usize>,
    /// Total number of textures held
    pub total_textures: usize,
}
