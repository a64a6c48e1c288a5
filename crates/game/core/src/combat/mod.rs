//! Attack sequencing.
//!
//! A [`CombatSession`] drives one attack at a time through
//! Windup, Strike and Resolve on the caller's frame clock. The player and
//! monster sequences share the projectile tracker, the particle dispatcher
//! and the per-strike arithmetic in [`strike`].

pub mod effects;
mod missile;
mod monster;
mod player;
mod pose;
mod session;
pub mod strike;
mod teleport;

pub use missile::{ActiveMissile, Axis, MissileVisual, impact_visual, launch_visual, missile_speed};
pub use player::ammo_advisory;
pub use pose::{WEAPON_SPRITE_BASE, WeaponPose};
pub use session::{CombatSession, Engagement, StageKind};
pub use teleport::{CARDINAL_OFFSETS, TELEPORT_PUFF_ANIM, shuffled_order};
