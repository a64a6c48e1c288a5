//! Value types shared between the combat core and its collaborators.
//!
//! Entities themselves live in the world layer; the core only sees the
//! snapshots defined here and refers back to them by [`EntityId`].
pub mod types;

pub use types::{
    AMMO_TYPES, CombatStats, Combatant, EntityFlags, EntityId, PlayerView, Rgb, SpriteHandle,
    TargetKind, Tick, WorldPos,
};
