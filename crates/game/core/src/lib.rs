//! Frame-clock-driven combat resolution for a tile-based first-person game.
//!
//! `combat-core` owns the sequencing of a single attack: windup, strikes,
//! projectile travel and the final result, each gated on a millisecond
//! clock the host loop supplies. Entity bookkeeping, stat formulas,
//! rendering and audio are collaborators reached through the traits in
//! [`env`]; the weapon and monster data lives in [`tables`].
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod state;
pub mod tables;

pub use combat::{ActiveMissile, CombatSession, Engagement, StageKind, WeaponPose};
pub use config::CombatConfig;
pub use env::{
    CombatEnv, CombatFormulas, ConfigSource, DamageSplit, DistanceBucket, FeatureMask, HitType,
    ParticleBurst, PcgRng, Presentation, RngOracle, WorldOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    CombatStats, Combatant, EntityFlags, EntityId, PlayerView, Rgb, SpriteHandle, TargetKind,
    Tick, WorldPos,
};
pub use tables::{MonsterKind, StatTables, TableError, WeaponId, WeaponStat};
