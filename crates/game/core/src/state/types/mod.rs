mod combatant;
mod common;

pub use combatant::{AMMO_TYPES, CombatStats, Combatant, EntityFlags, PlayerView, TargetKind};
pub use common::{EntityId, Rgb, SpriteHandle, Tick, WorldPos};
