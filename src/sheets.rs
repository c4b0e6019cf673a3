//! Record tables loaded from a JSON sheet export

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    provider::DataSource,
    types::{ClassJobRecord, IconRecord, IconTable},
};

/// The seven record tables the fixed categories are built from.
///
/// Tables absent from the file are treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSheets {
    pub main_commands: Vec<IconRecord>,
    pub general_actions: Vec<IconRecord>,
    pub content_types: Vec<IconRecord>,
    pub emotes: Vec<IconRecord>,
    pub class_jobs: Vec<ClassJobRecord>,
    pub mounts: Vec<IconRecord>,
    pub minions: Vec<IconRecord>,
}

impl IconSheets {
    /// Parse a sheet export from a JSON string
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a sheet export from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let sheets = Self::from_json(&std::fs::read_to_string(path)?)?;
        log::debug!("Loaded {} sheet rows from {:?}", sheets.row_count(), path);
        Ok(sheets)
    }

    pub fn table(&self, table: IconTable) -> &[IconRecord] {
        match table {
            IconTable::MainCommand => &self.main_commands,
            IconTable::GeneralAction => &self.general_actions,
            IconTable::ContentType => &self.content_types,
            IconTable::Emote => &self.emotes,
            IconTable::Mount => &self.mounts,
            IconTable::Minion => &self.minions,
        }
    }

    pub fn table_mut(&mut self, table: IconTable) -> &mut Vec<IconRecord> {
        match table {
            IconTable::MainCommand => &mut self.main_commands,
            IconTable::GeneralAction => &mut self.general_actions,
            IconTable::ContentType => &mut self.content_types,
            IconTable::Emote => &mut self.emotes,
            IconTable::Mount => &mut self.mounts,
            IconTable::Minion => &mut self.minions,
        }
    }

    /// Total rows across all tables
    pub fn row_count(&self) -> usize {
        IconTable::ALL.iter().map(|t| self.table(*t).len()).sum::<usize>() + self.class_jobs.len()
    }
}

impl DataSource for IconSheets {
    fn icon_records(&self, table: IconTable) -> Vec<IconRecord> {
        self.table(table).to_vec()
    }

    fn class_jobs(&self) -> Vec<ClassJobRecord> {
        self.class_jobs.clone()
    }
}
