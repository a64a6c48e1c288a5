//! Fixed weapon and monster stat tables.
//!
//! The tables are pure data: 19 weapon slots and 14 monster subtypes, each
//! addressed by a typed id so an out-of-range lookup cannot be written. At
//! startup every field may be overridden from a [`ConfigSource`]; fields the
//! source does not carry keep their compiled-in default.

mod error;
mod monster;
mod weapon;

pub use error::TableError;
pub use monster::{
    MONSTER_COUNT, MonsterAttackTiming, MonsterAttacks, MonsterKind, MonsterStat, default_attacks,
    default_monster, default_timing,
};
pub use weapon::{SpriteOffset, Splash, WEAPON_COUNT, WeaponId, WeaponStat, default_weapon};

use strum::IntoEnumIterator;
use tracing::{info, warn};

use crate::config::CombatConfig;
use crate::env::ConfigSource;
use crate::error::GameError;

/// All per-weapon and per-monster attributes, immutable after load.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatTables {
    weapons: [WeaponStat; WEAPON_COUNT],
    monsters: [MonsterStat; MONSTER_COUNT],
    timings: [MonsterAttackTiming; MONSTER_COUNT],
    attacks: [MonsterAttacks; MONSTER_COUNT],
}

impl StatTables {
    /// Tables built entirely from compiled-in defaults.
    pub fn defaults() -> Self {
        Self {
            weapons: WeaponId::ALL.map(default_weapon),
            monsters: MonsterKind::ALL.map(default_monster),
            timings: MonsterKind::ALL.map(default_timing),
            attacks: MonsterKind::ALL.map(default_attacks),
        }
    }

    /// Loads weapon and monster overrides.
    ///
    /// `None` for either source means the store could not be opened; that is
    /// not an error, the affected table simply keeps its defaults.
    pub fn load(weapons: Option<&dyn ConfigSource>, monsters: Option<&dyn ConfigSource>) -> Self {
        let mut tables = Self::defaults();

        match weapons {
            Some(source) => {
                for id in WeaponId::iter() {
                    let section = format!("Weapon.{}", id.index());
                    if source.has_section(&section) {
                        tables.weapons[id.index()] =
                            read_weapon(source, &section, default_weapon(id));
                    }
                }
                info!("loaded weapon stats from configuration");
            }
            None => info!("using default weapon stats"),
        }

        match monsters {
            Some(source) => {
                for kind in MonsterKind::iter() {
                    let section = format!("Monster.{}", kind.index());
                    if source.has_section(&section) {
                        let i = kind.index();
                        tables.monsters[i] = read_monster(source, &section, default_monster(kind));
                        tables.timings[i] = read_timing(source, &section, default_timing(kind));
                        tables.attacks[i] = read_attacks(source, &section, default_attacks(kind));
                    }
                }
                info!("loaded monster stats from configuration");
            }
            None => info!("using default monster stats"),
        }

        tables
    }

    pub fn weapon(&self, id: WeaponId) -> &WeaponStat {
        &self.weapons[id.index()]
    }

    pub fn monster(&self, kind: MonsterKind) -> &MonsterStat {
        &self.monsters[kind.index()]
    }

    pub fn timing(&self, kind: MonsterKind) -> &MonsterAttackTiming {
        &self.timings[kind.index()]
    }

    pub fn attacks(&self, kind: MonsterKind) -> &MonsterAttacks {
        &self.attacks[kind.index()]
    }

    /// Replaces one weapon slot.
    #[must_use]
    pub fn with_weapon(mut self, id: WeaponId, stat: WeaponStat) -> Self {
        self.weapons[id.index()] = stat;
        self
    }

    /// Replaces one monster's attack rhythm.
    #[must_use]
    pub fn with_timing(mut self, kind: MonsterKind, timing: MonsterAttackTiming) -> Self {
        self.timings[kind.index()] = timing;
        self
    }
}

impl Default for StatTables {
    fn default() -> Self {
        Self::defaults()
    }
}

fn read_weapon(source: &dyn ConfigSource, section: &str, default: WeaponStat) -> WeaponStat {
    WeaponStat {
        str_min: source.get_int(section, "strMin", default.str_min),
        str_max: source.get_int(section, "strMax", default.str_max),
        range_min: source.get_int(section, "rangeMin", default.range_min),
        range_max: source.get_int(section, "rangeMax", default.range_max),
        ammo_type: read_narrow(source, section, "ammoType", default.ammo_type),
        ammo_usage: source.get_int(section, "ammoUsage", default.ammo_usage),
        damage: source.get_int(section, "damage", default.damage),
        resource_id: read_narrow(source, section, "resourceID", default.resource_id),
        frame_time: read_narrow(source, section, "frameTime", default.frame_time),
        strikes: read_strikes(source, section, default.strikes),
        ..default
    }
}

fn read_monster(source: &dyn ConfigSource, section: &str, default: MonsterStat) -> MonsterStat {
    MonsterStat {
        kind: default.kind,
        health: source.get_int(section, "health", default.health),
        armor: source.get_int(section, "armor", default.armor),
        defense: source.get_int(section, "defense", default.defense),
        strength: source.get_int(section, "strength", default.strength),
        agility: source.get_int(section, "agility", default.agility),
        accuracy: source.get_int(section, "accuracy", default.accuracy),
    }
}

fn read_timing(
    source: &dyn ConfigSource,
    section: &str,
    default: MonsterAttackTiming,
) -> MonsterAttackTiming {
    MonsterAttackTiming {
        strikes: read_strikes(source, section, default.strikes),
        frame_time: read_narrow(source, section, "frameTime", default.frame_time),
    }
}

fn read_attacks(source: &dyn ConfigSource, section: &str, default: MonsterAttacks) -> MonsterAttacks {
    MonsterAttacks {
        primary: read_weapon_id(source, section, "attack", default.primary),
        alternate: read_weapon_id(source, section, "altAttack", default.alternate),
    }
}

fn read_weapon_id(
    source: &dyn ConfigSource,
    section: &str,
    key: &'static str,
    default: WeaponId,
) -> WeaponId {
    let raw = source.get_int(section, key, default.index() as i32);
    WeaponId::try_from(raw).unwrap_or_else(|err| {
        reject(section, &err, "keeping default attack");
        default
    })
}

fn read_strikes(source: &dyn ConfigSource, section: &str, default: u8) -> u8 {
    let value: u8 = read_narrow(source, section, "strikes", default);
    if value == 0 || value as usize > CombatConfig::MAX_STRIKES_PER_ATTACK {
        let err = TableError::FieldOutOfRange {
            section: section.to_owned(),
            key: "strikes",
            value: value as i32,
        };
        reject(section, &err, "keeping default strike count");
        return default;
    }
    value
}

fn read_narrow<T>(source: &dyn ConfigSource, section: &str, key: &'static str, default: T) -> T
where
    T: TryFrom<i32> + Into<i32> + Copy,
{
    let raw = source.get_int(section, key, default.into());
    T::try_from(raw).unwrap_or_else(|_| {
        let err = TableError::FieldOutOfRange {
            section: section.to_owned(),
            key,
            value: raw,
        };
        reject(section, &err, "keeping default");
        default
    })
}

fn reject(section: &str, err: &TableError, action: &str) {
    warn!(
        %section,
        severity = err.severity().as_str(),
        code = err.error_code(),
        %err,
        "{action}"
    );
}
