//! Content loaders for reading stat overrides from files.
//!
//! Stat files are TOML whose dotted table headers name the sections the
//! tables read: `[Weapon.2]` becomes section `Weapon.2`.

pub mod factory;
pub mod source;
pub mod tables;

pub use factory::ContentFactory;
pub use source::TomlSourceLoader;
pub use tables::TablesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
