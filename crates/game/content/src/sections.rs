//! In-memory sectioned key/value store.

use std::collections::HashMap;

use combat_core::ConfigSource;

/// Integer values grouped by section name (`Weapon.2`, `Monster.13`).
///
/// This is the shape every stat file is flattened into before the tables
/// read it, so tests and tools can build one by hand without touching disk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionMap {
    sections: HashMap<String, HashMap<String, i32>>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a section even if it ends up carrying no keys.
    pub fn ensure_section(&mut self, section: &str) {
        self.sections.entry(section.to_owned()).or_default();
    }

    pub fn insert(&mut self, section: &str, key: &str, value: i32) {
        self.sections
            .entry(section.to_owned())
            .or_default()
            .insert(key.to_owned(), value);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, section: &str, key: &str, value: i32) -> Self {
        self.insert(section, key, value);
        self
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section names in no particular order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

impl ConfigSource for SectionMap {
    fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    fn get_int(&self, section: &str, key: &str, default: i32) -> i32 {
        self.sections
            .get(section)
            .and_then(|keys| keys.get(key))
            .copied()
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_default() {
        let map = SectionMap::new().with("Weapon.2", "damage", 150);

        assert!(map.has_section("Weapon.2"));
        assert!(!map.has_section("Weapon.3"));
        assert_eq!(map.get_int("Weapon.2", "damage", 0), 150);
        assert_eq!(map.get_int("Weapon.2", "strMin", 6), 6);
        assert_eq!(map.get_int("Weapon.3", "damage", 7), 7);
    }

    #[test]
    fn empty_sections_still_exist() {
        let mut map = SectionMap::new();
        map.ensure_section("Monster.0");

        assert!(map.has_section("Monster.0"));
        assert_eq!(map.section_count(), 1);
        assert_eq!(map.get_int("Monster.0", "health", 5), 5);
    }
}
