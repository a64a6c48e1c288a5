//! Content factory for building stat tables from data files.

use std::path::{Path, PathBuf};

use combat_core::StatTables;
use tracing::info;

use crate::SectionMap;
use crate::loaders::{LoadResult, TablesLoader, TomlSourceLoader};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── weapons.toml
/// └── monsters.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const WEAPONS_FILE: &'static str = "weapons.toml";
    pub const MONSTERS_FILE: &'static str = "monsters.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the weapon and monster tables, falling back to defaults per file.
    pub fn load_tables(&self) -> StatTables {
        info!(data_dir = %self.data_dir.display(), "loading stat tables");
        TablesLoader::load(&self.weapons_path(), &self.monsters_path())
    }

    /// Load the raw weapon overrides from `weapons.toml`.
    pub fn load_weapon_source(&self) -> LoadResult<SectionMap> {
        TomlSourceLoader::load(&self.weapons_path())
    }

    /// Load the raw monster overrides from `monsters.toml`.
    pub fn load_monster_source(&self) -> LoadResult<SectionMap> {
        TomlSourceLoader::load(&self.monsters_path())
    }

    pub fn weapons_path(&self) -> PathBuf {
        self.data_dir.join(Self::WEAPONS_FILE)
    }

    pub fn monsters_path(&self) -> PathBuf {
        self.data_dir.join(Self::MONSTERS_FILE)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
