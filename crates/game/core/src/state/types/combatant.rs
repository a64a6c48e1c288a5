use crate::tables::{MonsterKind, WeaponId};

use super::{EntityId, WorldPos};

/// Combat-entity record: the stats the formula module reads and the health
/// bookkeeping the world layer owns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub health: i32,
    pub max_health: i32,
    pub armor: i32,
    pub max_armor: i32,
    pub defense: i32,
    pub strength: i32,
    pub agility: i32,
    pub accuracy: i32,
}

impl CombatStats {
    /// Creates a fresh record; maxima start equal to the initial values.
    pub const fn new(
        health: i32,
        armor: i32,
        defense: i32,
        strength: i32,
        agility: i32,
        accuracy: i32,
    ) -> Self {
        Self {
            health,
            max_health: health,
            armor,
            max_armor: armor,
            defense,
            strength,
            agility,
            accuracy,
        }
    }

    /// Health and armor refilled to their maxima.
    #[must_use]
    pub const fn restored(mut self) -> Self {
        self.health = self.max_health;
        self.armor = self.max_armor;
        self
    }

    pub const fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Health that would remain after a split lands, accounting for armor
    /// damage that overflows the current armor.
    pub const fn health_after(&self, damage: i32, armor_damage: i32) -> i32 {
        let mut effective = damage;
        if armor_damage > self.armor {
            effective += armor_damage - self.armor;
        }
        self.health - effective
    }
}

/// What the struck entity is, as far as combat policy cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetKind {
    /// A monster with combat stats. `tinted_blood` marks the colour variants
    /// of the Cacodemon and Baron families.
    Enemy {
        monster: MonsterKind,
        tinted_blood: bool,
    },
    /// Burning scenery; only the extinguisher affects it.
    Fire,
    /// Jammed door; only the axe opens it.
    JammedDoor,
    /// Breakable scenery (crates, barrels).
    Destructible,
    /// Power coupling "device" with a shared health pool kept by the world.
    PowerCoupling,
    /// Any other interactive object.
    Inert,
}

impl TargetKind {
    pub const fn is_enemy(self) -> bool {
        matches!(self, TargetKind::Enemy { .. })
    }

    pub const fn monster(self) -> Option<MonsterKind> {
        match self {
            TargetKind::Enemy { monster, .. } => Some(monster),
            _ => None,
        }
    }
}

/// Entity status relevant to combat, one named field per condition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityFlags {
    /// Linked into the world and able to be struck.
    pub active: bool,
    /// Never the centre of a splash explosion.
    pub splash_immune: bool,
    /// Monster uses its alternate attack on its next turn.
    pub alternate_attack: bool,
    /// Monster casts the raise ritual on its next turn.
    pub raise_caster: bool,
}

/// Snapshot of an entity handed to the combat core by the world layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    pub id: EntityId,
    pub name: String,
    pub kind: TargetKind,
    pub flags: EntityFlags,
    pub position: WorldPos,
    pub stats: CombatStats,
}

impl Combatant {
    pub fn monster(&self) -> Option<MonsterKind> {
        self.kind.monster()
    }

    pub fn is_enemy(&self) -> bool {
        self.kind.is_enemy()
    }
}

/// Number of ammunition pools tracked by the player.
pub const AMMO_TYPES: usize = 6;

/// Snapshot of the player as seen by the combat core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerView {
    /// Camera position.
    pub position: WorldPos,
    /// One step along the facing direction.
    pub view_step: WorldPos,
    pub stats: CombatStats,
    pub weapon: WeaponId,
    pub ammo: [i32; AMMO_TYPES],
    /// Berserk buff timer is running.
    pub berserk: bool,
}

impl PlayerView {
    pub fn ammo_for(&self, ammo_type: u8) -> i32 {
        self.ammo.get(ammo_type as usize).copied().unwrap_or(0)
    }
}
