//! Per-strike policy shared by the player and monster sequencers.
//!
//! Everything here is arithmetic on snapshots; the formula module does the
//! actual rolls.

use crate::config::CombatConfig;
use crate::env::{DamageSplit, DistanceBucket};
use crate::state::{CombatStats, TargetKind};
use crate::tables::{MonsterKind, WeaponId};

/// Power scalar for a player strike. Berserk triples it, a crit doubles it.
pub const fn player_power(berserk: bool, crit: bool) -> i32 {
    let base = if berserk {
        CombatConfig::POWER_BERSERK
    } else {
        CombatConfig::POWER_NORMAL
    };
    if crit { base * 512 >> 8 } else { base }
}

/// Power scalar for a monster strike.
pub const fn monster_power(crit: bool) -> i32 {
    if crit { 512 } else { CombatConfig::POWER_NORMAL }
}

/// A critical only counts on the last strike of an attack. `strikes_left`
/// is the count before this strike is consumed.
pub const fn is_final_strike(strikes_left: u8) -> bool {
    strikes_left == 1
}

/// Agility of the stand-in defender used for object hit rolls.
pub const fn object_agility(player_accuracy: i32) -> i32 {
    ((player_accuracy << 8) * 204) >> 16
}

/// Defense of the stand-in defender used for object damage.
pub const fn object_defense(player_strength: i32) -> i32 {
    ((player_strength << 8) * 176) >> 16
}

/// Whether a weapon can affect an object at all, once the roll has landed.
pub const fn object_accepts(kind: TargetKind, weapon: WeaponId) -> bool {
    match kind {
        TargetKind::Fire => matches!(weapon, WeaponId::FireExtinguisher),
        TargetKind::JammedDoor => matches!(weapon, WeaponId::Axe),
        _ => !matches!(weapon, WeaponId::FireExtinguisher),
    }
}

/// Particle count for a blood burst and whether the strike reduces the
/// target to gibs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Intensity {
    pub count: i32,
    pub gib: bool,
}

/// Scales a blood burst by how much of the target's pool one strike took.
pub fn particle_intensity(
    target: &CombatStats,
    monster: Option<MonsterKind>,
    split: DamageSplit,
    range: DistanceBucket,
) -> Intensity {
    let mut pool = target.max_health;
    if target.armor > 0 {
        pool += target.max_armor;
    }
    let pool = (pool << 8).max(1);

    let mut scaled = (((split.total() << 16) / pool) * 12288) >> 8;
    let remaining = target.health + target.armor - split.total();
    let mut gib = false;
    if remaining <= 0 {
        scaled = (scaled * 512) >> 8;
        let overkill = remaining <= -(((target.max_health << 16) / 637) >> 8);
        gib = range == DistanceBucket::Adjacent && (overkill || monster == Some(MonsterKind::Kronos));
    }

    Intensity {
        count: (scaled + 128).max(256) >> 8,
        gib,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn berserk_and_crit_stack() {
        assert_eq!(player_power(false, false), 256);
        assert_eq!(player_power(true, false), 768);
        assert_eq!(player_power(false, true), 512);
        assert_eq!(player_power(true, true), 1536);
        assert_eq!(monster_power(true), 512);
    }

    #[test]
    fn weapon_restrictions_on_objects() {
        assert!(object_accepts(TargetKind::Fire, WeaponId::FireExtinguisher));
        assert!(!object_accepts(TargetKind::Fire, WeaponId::Axe));
        assert!(object_accepts(TargetKind::JammedDoor, WeaponId::Axe));
        assert!(!object_accepts(TargetKind::JammedDoor, WeaponId::Shotgun));
        assert!(object_accepts(TargetKind::Destructible, WeaponId::Pistol));
        assert!(!object_accepts(TargetKind::Destructible, WeaponId::FireExtinguisher));
    }

    #[test]
    fn stand_in_defender_scaling() {
        assert_eq!(object_agility(100), 79);
        assert_eq!(object_defense(100), 68);
    }

    #[test]
    fn light_hit_yields_single_particle() {
        let target = CombatStats::new(100, 0, 1, 1, 1, 1);
        let intensity = particle_intensity(
            &target,
            Some(MonsterKind::Imp),
            DamageSplit::new(1, 0),
            DistanceBucket::Adjacent,
        );
        assert_eq!(intensity, Intensity { count: 1, gib: false });
    }

    #[test]
    fn overkill_at_point_blank_gibs() {
        let target = CombatStats::new(20, 0, 1, 1, 1, 1);
        let lethal = DamageSplit::new(60, 0);
        let close = particle_intensity(&target, Some(MonsterKind::Imp), lethal, DistanceBucket::Adjacent);
        assert!(close.gib);
        assert!(close.count > 1);

        let far = particle_intensity(&target, Some(MonsterKind::Imp), lethal, DistanceBucket::Mid);
        assert!(!far.gib);
    }

    #[test]
    fn boss_gibs_on_any_kill_at_point_blank() {
        let target = CombatStats::new(20, 0, 1, 1, 1, 1);
        let intensity = particle_intensity(
            &target,
            Some(MonsterKind::Kronos),
            DamageSplit::new(20, 0),
            DistanceBucket::Adjacent,
        );
        assert!(intensity.gib);
    }
}
