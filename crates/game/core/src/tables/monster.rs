//! Monster identifiers, base stats and attack timing.

use strum::{Display, EnumCount, EnumIter, FromRepr};

use super::{TableError, WeaponId};
use crate::state::CombatStats;

/// Number of monster subtypes.
pub const MONSTER_COUNT: usize = 14;

/// Typed monster subtype.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCount, FromRepr, Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MonsterKind {
    Zombie = 0,
    Hellhound,
    Troop,
    Imp,
    LostSoul,
    Pinky,
    Cacodemon,
    PainElemental,
    Revenant,
    Mancubus,
    Archvile,
    Baron,
    Cyberdemon,
    /// Boss that teleports away from the player's shots.
    Kronos,
}

const _: () = {
    assert!(MonsterKind::COUNT == MONSTER_COUNT);
    let mut i = 0;
    while i < MONSTER_COUNT {
        assert!(MonsterKind::ALL[i].index() == i);
        i += 1;
    }
};

impl MonsterKind {
    /// Every subtype, in table order.
    pub const ALL: [MonsterKind; MONSTER_COUNT] = [
        MonsterKind::Zombie,
        MonsterKind::Hellhound,
        MonsterKind::Troop,
        MonsterKind::Imp,
        MonsterKind::LostSoul,
        MonsterKind::Pinky,
        MonsterKind::Cacodemon,
        MonsterKind::PainElemental,
        MonsterKind::Revenant,
        MonsterKind::Mancubus,
        MonsterKind::Archvile,
        MonsterKind::Baron,
        MonsterKind::Cyberdemon,
        MonsterKind::Kronos,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<i32> for MonsterKind {
    type Error = TableError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(MonsterKind::from_repr)
            .ok_or(TableError::UnknownMonster(value))
    }
}

/// Base attributes a monster spawns with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterStat {
    pub kind: MonsterKind,
    pub health: i32,
    pub armor: i32,
    pub defense: i32,
    pub strength: i32,
    pub agility: i32,
    pub accuracy: i32,
}

impl MonsterStat {
    /// Combat record to seed a freshly spawned monster with.
    pub const fn combat_stats(&self) -> CombatStats {
        CombatStats::new(
            self.health,
            self.armor,
            self.defense,
            self.strength,
            self.agility,
            self.accuracy,
        )
    }
}

/// Attack rhythm of a monster subtype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterAttackTiming {
    pub strikes: u8,
    /// Frame duration in units of 10ms.
    pub frame_time: u8,
}

impl MonsterAttackTiming {
    pub const fn frame_ms(&self) -> u64 {
        10 * self.frame_time as u64
    }
}

/// Weapon slots a monster subtype attacks with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterAttacks {
    pub primary: WeaponId,
    pub alternate: WeaponId,
}

// health, armor, defense, strength, agility, accuracy
const BASE_STATS: [[i32; 6]; MONSTER_COUNT] = [
    [5, 4, 13, 13, 13, 13],
    [7, 3, 12, 14, 12, 12],
    [10, 5, 14, 7, 13, 12],
    [9, 4, 13, 14, 13, 13],
    [6, 3, 14, 6, 15, 15],
    [10, 5, 14, 16, 12, 13],
    [13, 7, 12, 10, 13, 15],
    [15, 8, 14, 12, 12, 12],
    [13, 8, 16, 14, 15, 15],
    [20, 10, 16, 14, 15, 15],
    [18, 9, 15, 17, 14, 16],
    [25, 15, 16, 15, 15, 15],
    [600, 400, 45, 30, 35, 40],
    [400, 250, 30, 35, 40, 55],
];

// strikes, frameTime
const TIMING: [[u8; 2]; MONSTER_COUNT] = [
    [1, 50],
    [1, 50],
    [3, 20],
    [1, 50],
    [3, 25],
    [1, 50],
    [3, 25],
    [1, 30],
    [1, 50],
    [1, 50],
    [1, 50],
    [1, 50],
    [1, 50],
    [3, 25],
];

const ATTACKS: [(WeaponId, WeaponId); MONSTER_COUNT] = [
    (WeaponId::MeleeAttack2, WeaponId::MeleeAttack2),
    (WeaponId::MeleeAttack1, WeaponId::MeleeAttack1),
    (WeaponId::MeleeAttack2, WeaponId::Fireball),
    (WeaponId::MeleeAttack1, WeaponId::Fireball),
    (WeaponId::MeleeAttack1, WeaponId::MeleeAttack1),
    (WeaponId::MeleeAttack3, WeaponId::MeleeAttack3),
    (WeaponId::MeleeAttack1, WeaponId::Fireball),
    (WeaponId::MeleeAttack1, WeaponId::Fireball),
    (WeaponId::MeleeAttack1, WeaponId::RocketMissile),
    (WeaponId::MeleeAttack3, WeaponId::BossMissile),
    (WeaponId::MeleeAttack3, WeaponId::Fireball),
    (WeaponId::MeleeAttack3, WeaponId::BossMissile),
    (WeaponId::MeleeAttack3, WeaponId::RocketMissile),
    (WeaponId::MeleeAttack3, WeaponId::BossMissile),
];

pub const fn default_monster(kind: MonsterKind) -> MonsterStat {
    let base = BASE_STATS[kind.index()];
    MonsterStat {
        kind,
        health: base[0],
        armor: base[1],
        defense: base[2],
        strength: base[3],
        agility: base[4],
        accuracy: base[5],
    }
}

pub const fn default_timing(kind: MonsterKind) -> MonsterAttackTiming {
    let timing = TIMING[kind.index()];
    MonsterAttackTiming {
        strikes: timing[0],
        frame_time: timing[1],
    }
}

pub const fn default_attacks(kind: MonsterKind) -> MonsterAttacks {
    let (primary, alternate) = ATTACKS[kind.index()];
    MonsterAttacks { primary, alternate }
}
