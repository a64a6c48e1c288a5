//! Data-driven stat overrides for the combat engine.
//!
//! This crate turns weapon and monster stat files into the sectioned
//! key/value stores the stat tables read. Files are TOML; each dotted table
//! header (`[Weapon.2]`, `[Monster.13]`) names one section.
//!
//! Content is consumed once at startup and never appears in session state.

pub mod sections;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use sections::SectionMap;

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, LoadResult, TablesLoader, TomlSourceLoader};
