//! First-person weapon sprite placement.

use super::session::{CombatSession, Stage};
use crate::state::Tick;
use crate::tables::{SpriteOffset, WeaponId};

/// Base resource id of the first-person weapon sprites.
pub const WEAPON_SPRITE_BASE: u16 = 240;

/// What the renderer draws for the held weapon this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeaponPose {
    pub sprite: u16,
    pub offset: SpriteOffset,
    pub muzzle_flash: bool,
}

impl CombatSession {
    /// Pose of the player's weapon: raised while the player is attacking,
    /// with a muzzle flash for the first part of each contact frame.
    pub fn weapon_pose(&self, weapon: WeaponId, now: Tick) -> WeaponPose {
        let stat = self.tables.weapon(weapon);
        let attacking = self.engagement.is_some_and(|e| e.is_player_attack());

        let (offset, muzzle_flash) = match self.stage {
            Stage::Windup | Stage::Resolve(_) if attacking => (stat.attack_offset, false),
            Stage::Strike(phase) if attacking => {
                (stat.attack_offset, phase.contact && now < phase.flash_until)
            }
            _ => (stat.idle_offset, false),
        };

        WeaponPose {
            sprite: WEAPON_SPRITE_BASE + weapon.index() as u16,
            offset,
            muzzle_flash,
        }
    }
}
