//! TOML stat file loader.

use std::path::Path;

use toml::{Table, Value};
use tracing::warn;

use crate::SectionMap;
use crate::loaders::{LoadResult, read_file};

/// Flattens a TOML stat file into a [`SectionMap`].
pub struct TomlSourceLoader;

impl TomlSourceLoader {
    /// Load a stat file from disk.
    pub fn load(path: &Path) -> LoadResult<SectionMap> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))
    }

    /// Parse stat file contents.
    ///
    /// Integer keys are collected under the dotted path of the table that
    /// holds them. Values that are not integers, or do not fit an `i32`, are
    /// skipped with a warning and the table default applies.
    pub fn parse(content: &str) -> LoadResult<SectionMap> {
        let root: Table = toml::from_str(content)?;
        let mut sections = SectionMap::new();
        flatten("", &root, &mut sections);
        Ok(sections)
    }
}

fn flatten(section: &str, table: &Table, out: &mut SectionMap) {
    if !section.is_empty() && (table.is_empty() || table.values().any(|v| !v.is_table())) {
        out.ensure_section(section);
    }

    for (key, value) in table {
        match value {
            Value::Table(inner) => {
                let path = if section.is_empty() {
                    key.clone()
                } else {
                    format!("{section}.{key}")
                };
                flatten(&path, inner, out);
            }
            Value::Integer(raw) if !section.is_empty() => match i32::try_from(*raw) {
                Ok(value) => out.insert(section, key, value),
                Err(_) => warn!(section, key = %key, raw, "value does not fit, ignoring"),
            },
            other => warn!(
                section,
                key = %key,
                kind = other.type_str(),
                "ignoring non-section value"
            ),
        }
    }
}
