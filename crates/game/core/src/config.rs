/// Combat timing constants and capacity limits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CombatConfig;

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Most strikes a single attack may carry. Stat overrides above this are rejected.
    pub const MAX_STRIKES_PER_ATTACK: usize = 4;
    /// Capacity of the in-flight missile list: one projectile per strike.
    pub const MAX_ACTIVE_MISSILES: usize = Self::MAX_STRIKES_PER_ATTACK;

    // ===== timing (milliseconds) =====
    /// Windup before the first strike frame.
    pub const WINDUP_MS: u64 = 250;
    /// Contact window: the shot is fired when it elapses.
    pub const CONTACT_MS: u64 = 150;
    /// How long the result message stays up before control returns.
    pub const RESULT_HOLD_MS: u64 = 1000;
    /// Pain frame duration on a surviving enemy.
    pub const PAIN_FRAME_MS: u64 = 250;
    /// Damage flash duration on a bleeding target.
    pub const DAMAGE_FLASH_MS: u64 = 100;

    // ===== power scalars (256 = 1.0) =====
    pub const POWER_NORMAL: i32 = 256;
    pub const POWER_BERSERK: i32 = 768;

    // ===== projectile geometry (world units) =====
    /// Sideways deflection applied to a missed shot.
    pub const MISS_DEFLECTION: i32 = 25;
    /// Distance a monster projectile stops short of its victim.
    pub const MISSILE_STANDOFF: i32 = 48;
    /// Standoff used by the Archvile's flame.
    pub const ARCHVILE_STANDOFF: i32 = 30;

    // ===== boss teleport =====
    /// Roll below this (out of 256) teleports the boss without prior intent.
    pub const TELEPORT_ROLL: u8 = 96;
}
