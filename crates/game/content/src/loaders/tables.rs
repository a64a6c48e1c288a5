//! Stat tables loader.

use std::path::Path;

use combat_core::{ConfigSource, StatTables};
use tracing::warn;

use crate::SectionMap;
use crate::loaders::TomlSourceLoader;

/// Builds [`StatTables`] from a weapon file and a monster file.
///
/// A file that is missing or does not parse is logged and treated as absent,
/// so the affected table keeps its compiled-in defaults. Loading never fails.
pub struct TablesLoader;

impl TablesLoader {
    pub fn load(weapons: &Path, monsters: &Path) -> StatTables {
        let weapons = Self::open(weapons);
        let monsters = Self::open(monsters);
        StatTables::load(
            weapons.as_ref().map(|s| s as &dyn ConfigSource),
            monsters.as_ref().map(|s| s as &dyn ConfigSource),
        )
    }

    /// Opens one stat file, or `None` if it cannot be used.
    pub fn open(path: &Path) -> Option<SectionMap> {
        match TomlSourceLoader::load(path) {
            Ok(sections) => Some(sections),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "stat file unavailable");
                None
            }
        }
    }
}
