use crate::state::CombatStats;
use crate::tables::WeaponStat;

/// Classification of one strike as reported by the formula module.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitType {
    #[default]
    Miss,
    Hit,
    Critical,
}

impl HitType {
    /// True for both ordinary and critical hits.
    pub const fn landed(self) -> bool {
        !matches!(self, HitType::Miss)
    }
}

/// Damage dealt by one strike, split between health and armor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageSplit {
    pub health: i32,
    pub armor: i32,
}

impl DamageSplit {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(health: i32, armor: i32) -> Self {
        Self { health, armor }
    }

    pub const fn total(self) -> i32 {
        self.health + self.armor
    }

    /// Half of each component, as applied to splash victims.
    pub const fn halved(self) -> Self {
        Self::new(self.health / 2, self.armor / 2)
    }
}

impl std::ops::AddAssign for DamageSplit {
    fn add_assign(&mut self, rhs: Self) {
        self.health += rhs.health;
        self.armor += rhs.armor;
    }
}

/// Coarse range tier between the player and a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceBucket {
    /// Range is not measured (monster-initiated attacks).
    Unmeasured,
    Adjacent,
    Near,
    Mid,
    Far,
    /// Beyond the farthest tier; impacts produce no particles.
    OutOfRange,
}

impl DistanceBucket {
    /// Buckets a world distance as reported by the world layer.
    pub const fn from_world_distance(distance: i32) -> Self {
        if distance <= 4096 {
            Self::Adjacent
        } else if distance <= 16384 {
            Self::Near
        } else if distance <= 36864 {
            Self::Mid
        } else if distance <= 65536 {
            Self::Far
        } else {
            Self::OutOfRange
        }
    }

    /// Numeric tier handed to formula and particle code; `None` when out of range.
    pub const fn tier(self) -> Option<u8> {
        match self {
            Self::Unmeasured => Some(0),
            Self::Adjacent => Some(1),
            Self::Near => Some(2),
            Self::Mid => Some(3),
            Self::Far => Some(4),
            Self::OutOfRange => None,
        }
    }
}

/// Combat-entity stat module: the hit and damage arithmetic.
///
/// The combat core decides when these are called and with which power
/// scalar; the formulas themselves (and any randomness they consume) belong
/// to the implementation.
pub trait CombatFormulas {
    fn calc_hit(
        &mut self,
        attacker: &CombatStats,
        weapon: &WeaponStat,
        defender: &CombatStats,
        range: DistanceBucket,
    ) -> HitType;

    /// `power` is a fixed-point multiplier where 256 is 1.0.
    fn calc_damage(
        &mut self,
        attacker: &CombatStats,
        weapon: &WeaponStat,
        defender: &CombatStats,
        power: i32,
        range: DistanceBucket,
    ) -> DamageSplit;
}
