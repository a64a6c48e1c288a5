//! Weapon identifiers and per-weapon attributes.

use strum::{Display, EnumCount, EnumIter, FromRepr};

use super::TableError;

/// Number of weapon slots, shared by player weapons and monster attacks.
pub const WEAPON_COUNT: usize = 19;

/// Typed index into the weapon table.
///
/// Slots 0..=8 are player weapons, 9..=11 companion bites, 12..=17 monster
/// attacks, and 18 is the null attack used by the raise ritual.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCount, FromRepr, Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum WeaponId {
    Axe = 0,
    FireExtinguisher,
    Pistol,
    Shotgun,
    Chaingun,
    SuperShotgun,
    PlasmaGun,
    RocketLauncher,
    Bfg,
    HellHound,
    Cerberus,
    DemonWolf,
    MeleeAttack1,
    MeleeAttack2,
    MeleeAttack3,
    Fireball,
    BossMissile,
    RocketMissile,
    Raise,
}

const _: () = {
    assert!(WeaponId::COUNT == WEAPON_COUNT);
    let mut i = 0;
    while i < WEAPON_COUNT {
        assert!(WeaponId::ALL[i].index() == i);
        i += 1;
    }
};

/// How a weapon's damage spreads around the point of impact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Splash {
    Blast,
    /// BFG splash also reaches entities the blast would not.
    Bfg,
}

impl WeaponId {
    /// Every slot, in table order.
    pub const ALL: [WeaponId; WEAPON_COUNT] = [
        WeaponId::Axe,
        WeaponId::FireExtinguisher,
        WeaponId::Pistol,
        WeaponId::Shotgun,
        WeaponId::Chaingun,
        WeaponId::SuperShotgun,
        WeaponId::PlasmaGun,
        WeaponId::RocketLauncher,
        WeaponId::Bfg,
        WeaponId::HellHound,
        WeaponId::Cerberus,
        WeaponId::DemonWolf,
        WeaponId::MeleeAttack1,
        WeaponId::MeleeAttack2,
        WeaponId::MeleeAttack3,
        WeaponId::Fireball,
        WeaponId::BossMissile,
        WeaponId::RocketMissile,
        WeaponId::Raise,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Splash behaviour; `None` for single-target weapons.
    pub const fn splash(self) -> Option<Splash> {
        match self {
            WeaponId::RocketLauncher => Some(Splash::Blast),
            WeaponId::Bfg => Some(Splash::Bfg),
            _ => None,
        }
    }

    /// Monster close-combat attacks: their missiles start next to the victim.
    pub const fn is_melee_attack(self) -> bool {
        matches!(
            self,
            WeaponId::MeleeAttack1 | WeaponId::MeleeAttack2 | WeaponId::MeleeAttack3
        )
    }
}

impl TryFrom<i32> for WeaponId {
    type Error = TableError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(WeaponId::from_repr)
            .ok_or(TableError::UnknownWeapon(value))
    }
}

/// Sprite offset of the first-person weapon graphic, in screen units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteOffset {
    pub x: i32,
    pub y: i32,
}

impl SpriteOffset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Immutable attributes of one weapon slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponStat {
    pub str_min: i32,
    pub str_max: i32,
    pub range_min: i32,
    pub range_max: i32,
    pub ammo_type: u8,
    /// Ammunition consumed per shot; zero for weapons without ammo.
    pub ammo_usage: i32,
    pub damage: i32,
    /// Sound/visual resource id.
    pub resource_id: i16,
    /// Animation frame duration in units of 10ms.
    pub frame_time: u8,
    /// Strikes per attack.
    pub strikes: u8,
    pub idle_offset: SpriteOffset,
    pub attack_offset: SpriteOffset,
}

impl WeaponStat {
    pub const fn uses_ammo(&self) -> bool {
        self.ammo_usage != 0
    }

    /// Milliseconds a contact frame stays up.
    pub const fn contact_ms(&self) -> u64 {
        10 * self.frame_time as u64
    }

    /// Milliseconds a recovery frame stays up.
    pub const fn recovery_ms(&self) -> u64 {
        5 * self.frame_time as u64
    }
}

// strMin, strMax, rangeMin, rangeMax, ammoType, ammoUsage, damage, resourceID
const BASE_STATS: [[i32; 8]; WEAPON_COUNT] = [
    [3, 12, 0, 70, 0, 0, 25, 5044],
    [1, 2, 0, 100, 0, 1, 204, 5045],
    [6, 7, 5, 80, 1, 1, 102, 5046],
    [6, 10, 2, 80, 2, 1, 128, 5047],
    [3, 6, 3, 90, 1, 3, 102, 5048],
    [12, 18, 1, 90, 2, 2, 51, 5049],
    [6, 8, 4, 90, 4, 3, 230, 5050],
    [15, 36, 8, 70, 3, 1, 128, 5051],
    [60, 105, 8, 100, 4, 15, 76, 5052],
    [5, 9, 0, 75, 5, 0, 25, 5088],
    [8, 12, 0, 75, 5, 0, 25, 5088],
    [15, 18, 0, 75, 5, 0, 25, 5088],
    [3, 5, 0, 90, 0, 0, 128, 5096],
    [4, 7, 0, 80, 0, 0, 128, 0],
    [5, 15, 0, 70, 0, 0, 128, 0],
    [4, 10, 3, 85, 0, 0, 128, 5072],
    [10, 20, 3, 75, 0, 0, 128, 0],
    [15, 30, 2, 80, 0, 0, 128, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

// strikes, frameTime, idleX, idleY, attackX, attackY
const ANIMATION: [[u8; 6]; WEAPON_COUNT] = [
    [1, 30, 20, 25, 20, 0],
    [1, 50, 0, 15, 0, 0],
    [1, 35, 0, 15, 0, 0],
    [1, 35, 0, 12, 0, 0],
    [3, 15, 0, 15, 0, 0],
    [1, 40, 0, 15, 0, 0],
    [3, 10, 0, 15, 0, 0],
    [1, 50, 0, 15, 0, 0],
    [1, 50, 0, 13, 0, 5],
    [1, 40, 20, 15, 20, 8],
    [1, 40, 20, 15, 20, 8],
    [1, 40, 20, 15, 20, 8],
    [1, 50, 0, 0, 0, 0],
    [1, 50, 0, 0, 0, 0],
    [1, 50, 0, 0, 0, 0],
    [1, 50, 0, 0, 0, 0],
    [1, 50, 0, 0, 0, 0],
    [1, 50, 0, 0, 0, 0],
    [1, 50, 0, 0, 0, 0],
];

/// Compiled-in attributes for a weapon slot.
pub const fn default_weapon(id: WeaponId) -> WeaponStat {
    let base = BASE_STATS[id.index()];
    let anim = ANIMATION[id.index()];
    WeaponStat {
        str_min: base[0],
        str_max: base[1],
        range_min: base[2],
        range_max: base[3],
        ammo_type: base[4] as u8,
        ammo_usage: base[5],
        damage: base[6],
        resource_id: base[7] as i16,
        frame_time: anim[1],
        strikes: anim[0],
        idle_offset: SpriteOffset::new(anim[2] as i32, anim[3] as i32),
        attack_offset: SpriteOffset::new(anim[4] as i32, anim[5] as i32),
    }
}
