use bitflags::bitflags;

use super::{DamageSplit, SoundId};
use crate::state::{CombatStats, Combatant, EntityId, PlayerView, Tick, WorldPos};
use crate::tables::Splash;

bitflags! {
    /// Entity-type bits used when asking whether a tile is occupied by a
    /// feature of interest. Bits 4..=6 (doors, items, passable decor) never
    /// block a combat relocation and are left unnamed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct FeatureMask: u16 {
        const WORLD = 1 << 0;
        const ENEMY = 1 << 1;
        const NPC = 1 << 2;
        const PLAYER_CLIP = 1 << 3;
        const DECOR = 1 << 7;
        const ENV_DAMAGE = 1 << 8;
        const CORPSE = 1 << 9;
        const FIRE = 1 << 10;
        const SPRITE_WALL = 1 << 11;
        const INTERACTIVE = 1 << 12;
        const MONSTER_CLIP = 1 << 13;
        const ITEM_CLIP = 1 << 14;
        const SECRET = 1 << 15;
    }
}

impl FeatureMask {
    const SOLID: u16 = Self::WORLD.bits()
        | Self::ENEMY.bits()
        | Self::NPC.bits()
        | Self::DECOR.bits()
        | Self::ENV_DAMAGE.bits()
        | Self::CORPSE.bits()
        | Self::INTERACTIVE.bits()
        | Self::MONSTER_CLIP.bits();

    /// Features that stop a corpse from being raised where it lies.
    pub const RAISE_BLOCKERS: Self =
        Self::from_bits_retain(Self::SOLID | Self::FIRE.bits() | Self::SPRITE_WALL.bits());
    /// Features that stop the boss from teleporting onto a tile.
    pub const TELEPORT_BLOCKERS: Self =
        Self::from_bits_retain(Self::SOLID | Self::ITEM_CLIP.bits() | Self::SECRET.bits());
}

/// Entity/world module: positions, health bookkeeping and spatial index.
///
/// Lookups return owned snapshots; the combat core never holds on to world
/// data across frames.
pub trait WorldOracle {
    /// Current snapshot of an entity, or `None` once it has been removed.
    fn combatant(&self, id: EntityId) -> Option<Combatant>;

    fn player(&self) -> PlayerView;

    /// World distance metric between the player and an entity.
    fn distance_to_player(&self, id: EntityId) -> i32;

    /// Whether a feature matching `mask` occupies the tile containing `at`.
    fn is_blocked(&self, at: WorldPos, mask: FeatureMask) -> bool;

    /// Moves an entity, unlinking and relinking it in the spatial index.
    fn relocate(&mut self, id: EntityId, to: WorldPos);

    /// Applies damage to an entity through its pain path.
    fn pain(&mut self, id: EntityId, split: DamageSplit);

    /// Runs an entity's death transition.
    fn died(&mut self, id: EntityId);

    fn player_pain(&mut self, split: DamageSplit);

    /// Screen flash when a monster's shot reaches the player.
    fn player_pain_event(&mut self, attacker: EntityId);

    /// Damages every entity within splash radius of `center`.
    fn radius_hurt(&mut self, center: WorldPos, split: DamageSplit, splash: Splash, by_player: bool);

    /// Brings a corpse back with the given stats and reactivates it.
    fn revive(&mut self, id: EntityId, stats: CombatStats);

    /// Remaining health of the pool a power coupling draws from.
    fn device_health(&self, id: EntityId) -> i32;

    fn set_device_health(&mut self, id: EntityId, health: i32);

    fn attack_sound(&self, id: EntityId, alternate: bool) -> Option<SoundId>;

    /// Picks one of the entity's pain sounds.
    fn pain_sound(&mut self, id: EntityId) -> Option<SoundId>;

    /// Tints the entity's sprite until `until`.
    fn flash_damage(&mut self, id: EntityId, until: Tick);

    /// Holds the entity's pain frame until `until`.
    fn show_pain(&mut self, id: EntityId, until: Tick);

    /// Marks the entity as reduced to gibs.
    fn mark_gibbed(&mut self, id: EntityId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocker_masks_match_the_tile_engine_words() {
        assert_eq!(FeatureMask::RAISE_BLOCKERS.bits(), 0x3F87);
        assert_eq!(FeatureMask::TELEPORT_BLOCKERS.bits(), 0xF387);
    }

    #[test]
    fn corpses_block_both_but_only_items_stop_a_teleport() {
        for mask in [FeatureMask::RAISE_BLOCKERS, FeatureMask::TELEPORT_BLOCKERS] {
            assert!(mask.contains(FeatureMask::WORLD | FeatureMask::CORPSE));
            assert!(!mask.contains(FeatureMask::PLAYER_CLIP));
        }
        assert!(FeatureMask::TELEPORT_BLOCKERS.contains(FeatureMask::ITEM_CLIP));
        assert!(!FeatureMask::RAISE_BLOCKERS.contains(FeatureMask::ITEM_CLIP));
        assert!(FeatureMask::RAISE_BLOCKERS.contains(FeatureMask::FIRE));
        assert!(!FeatureMask::TELEPORT_BLOCKERS.contains(FeatureMask::FIRE));
    }
}
