//! Read-only key/value store for stat overrides.

/// Sectioned integer configuration, as read from the stat files.
///
/// Sections are named `Weapon.N` and `Monster.N`. A lookup for a key the
/// source does not carry returns the supplied default unchanged.
pub trait ConfigSource {
    fn has_section(&self, section: &str) -> bool;

    fn get_int(&self, section: &str, key: &str, default: i32) -> i32;
}
