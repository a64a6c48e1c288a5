use arrayvec::ArrayVec;
use tracing::{debug, info, warn};

use super::missile::ActiveMissile;
use crate::config::CombatConfig;
use crate::env::{CombatEnv, DamageSplit, DistanceBucket, HitType};
use crate::state::{CombatStats, Combatant, EntityId, Rgb, Tick};
use crate::tables::{MonsterKind, StatTables, WeaponId};

/// Who is attacking whom. The player is never named explicitly: an
/// engagement without an attacker is a player attack, one without a target
/// is aimed at the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Engagement {
    PlayerAttacks { target: EntityId },
    MonsterAttacksPlayer { attacker: EntityId },
    /// Monster-on-monster; in practice only the raise ritual.
    MonsterAttacksMonster { attacker: EntityId, target: EntityId },
}

impl Engagement {
    /// Builds an engagement from optional participants; both absent is rejected.
    pub fn from_parts(attacker: Option<EntityId>, target: Option<EntityId>) -> Option<Self> {
        match (attacker, target) {
            (None, Some(target)) => Some(Self::PlayerAttacks { target }),
            (Some(attacker), None) => Some(Self::MonsterAttacksPlayer { attacker }),
            (Some(attacker), Some(target)) => Some(Self::MonsterAttacksMonster { attacker, target }),
            (None, None) => None,
        }
    }

    pub const fn attacker(self) -> Option<EntityId> {
        match self {
            Self::PlayerAttacks { .. } => None,
            Self::MonsterAttacksPlayer { attacker } | Self::MonsterAttacksMonster { attacker, .. } => {
                Some(attacker)
            }
        }
    }

    pub const fn target(self) -> Option<EntityId> {
        match self {
            Self::PlayerAttacks { target } | Self::MonsterAttacksMonster { target, .. } => Some(target),
            Self::MonsterAttacksPlayer { .. } => None,
        }
    }

    pub const fn is_player_attack(self) -> bool {
        matches!(self, Self::PlayerAttacks { .. })
    }
}

/// Public view of where the sequence stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StageKind {
    Windup,
    Strike,
    Resolve,
    Concluded,
}

/// Timers and flags that only exist while strikes are being thrown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct StrikePhase {
    /// Current attack frame stays up until this time.
    pub(crate) anim_end: Tick,
    /// Pending contact window; the shot fires once it elapses.
    pub(crate) fire_at: Option<Tick>,
    /// Muzzle flash is drawn until this time.
    pub(crate) flash_until: Tick,
    /// Set once every strike has landed; Resolve follows after it passes.
    pub(crate) next_stage_at: Option<Tick>,
    /// Attack frame is showing.
    pub(crate) contact: bool,
    /// At least one impact (or a miss) has been processed.
    pub(crate) impact_seen: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ResolvePhase {
    /// Result message hold for a surviving enemy.
    pub(crate) hold_until: Option<Tick>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Stage {
    #[default]
    Windup,
    Strike(StrikePhase),
    Resolve(ResolvePhase),
    Concluded,
}

impl Stage {
    fn kind(self) -> StageKind {
        match self {
            Stage::Windup => StageKind::Windup,
            Stage::Strike(_) => StageKind::Strike,
            Stage::Resolve(_) => StageKind::Resolve,
            Stage::Concluded => StageKind::Concluded,
        }
    }
}

/// The combat engine for one game session.
///
/// One attack runs at a time. [`CombatSession::perform_attack`] sets it up
/// and the host loop calls [`CombatSession::run_frame`] once per frame until
/// it reports the encounter concluded. Boss escape state persists across
/// attacks for the life of the session.
#[derive(Clone, Debug)]
pub struct CombatSession {
    pub(crate) tables: StatTables,
    pub(crate) engagement: Option<Engagement>,
    pub(crate) stage: Stage,

    pub(crate) weapon: WeaponId,
    /// Sprite frame shown on a monster's contact frames.
    pub(crate) attack_frame: u8,
    pub(crate) missile_standoff: i32,
    /// Strikes remaining in the current attack.
    pub(crate) strikes_left: u8,
    pub(crate) strikes_per_attack: u8,

    /// Split of the most recent strike.
    pub(crate) last_split: DamageSplit,
    pub(crate) total: DamageSplit,
    pub(crate) hit_type: HitType,
    pub(crate) got_crit: bool,
    pub(crate) exploded: bool,
    pub(crate) gibbed: bool,
    pub(crate) range: DistanceBucket,
    pub(crate) blood_color: Rgb,
    /// Result message stays visible until this time after a kill.
    pub(crate) result_until: Option<Tick>,

    /// Boss wants to teleport away on its next eligible hit.
    pub(crate) boss_teleport_intent: bool,
    /// Boss has escaped at least once this session.
    pub(crate) boss_escaped: bool,
    /// Boss relocated during the current attack.
    pub(crate) teleported: bool,

    pub(crate) missiles: ArrayVec<ActiveMissile, { CombatConfig::MAX_ACTIVE_MISSILES }>,

    /// Stand-in defender for hit rolls and damage against plain objects.
    pub(crate) object_defender: CombatStats,
    /// Stand-in defender for power couplings.
    pub(crate) device_defender: CombatStats,
}

impl CombatSession {
    pub fn new(tables: StatTables) -> Self {
        Self {
            tables,
            engagement: None,
            stage: Stage::Concluded,
            weapon: WeaponId::Axe,
            attack_frame: 1,
            missile_standoff: CombatConfig::MISSILE_STANDOFF,
            strikes_left: 0,
            strikes_per_attack: 0,
            last_split: DamageSplit::ZERO,
            total: DamageSplit::ZERO,
            hit_type: HitType::Miss,
            got_crit: false,
            exploded: false,
            gibbed: false,
            range: DistanceBucket::Unmeasured,
            blood_color: Rgb::BLOOD_RED,
            result_until: None,
            boss_teleport_intent: false,
            boss_escaped: false,
            teleported: false,
            missiles: ArrayVec::new(),
            object_defender: CombatStats::new(-1, 0, 1, 1, 1, 1),
            device_defender: CombatStats::new(-1, 0, 25, 1, 1, 1),
        }
    }

    /// Starts an attack.
    ///
    /// Selects the weapon (the player's equipped one, or the attacker's
    /// primary, alternate or raise attack), seeds the strike count and puts
    /// the HUD into combat view. The first [`CombatSession::run_frame`] call
    /// runs the windup.
    pub fn perform_attack(&mut self, env: &mut CombatEnv<'_>, engagement: Engagement) {
        self.retire_missiles(env);
        self.engagement = Some(engagement);
        self.missile_standoff = CombatConfig::MISSILE_STANDOFF;

        match engagement.attacker() {
            None => {
                self.weapon = env.world.player().weapon;
                self.strikes_left = self.tables.weapon(self.weapon).strikes;
            }
            Some(attacker) => {
                let Some((combatant, monster)) = env
                    .world
                    .combatant(attacker)
                    .and_then(|c| c.monster().map(|m| (c, m)))
                else {
                    warn!(%attacker, "attacker is not a monster, dropping attack");
                    self.engagement = None;
                    self.stage = Stage::Concluded;
                    return;
                };

                let attacks = self.tables.attacks(monster);
                (self.weapon, self.attack_frame) = if combatant.flags.raise_caster {
                    (WeaponId::Raise, 5)
                } else if combatant.flags.alternate_attack {
                    (attacks.alternate, 5)
                } else {
                    (attacks.primary, 1)
                };
                if monster == MonsterKind::Archvile {
                    self.missile_standoff = CombatConfig::ARCHVILE_STANDOFF;
                }
                self.strikes_left = self.tables.timing(monster).strikes;
            }
        }

        self.strikes_per_attack = self.strikes_left;
        self.stage = Stage::Windup;
        info!(
            ?engagement,
            weapon = %self.weapon,
            strikes = self.strikes_left,
            "attack started"
        );

        env.presentation.clear_messages();
        env.presentation.enter_combat_view();
    }

    /// Advances the encounter by one frame.
    ///
    /// Returns `true` once the encounter has concluded; calling again after
    /// that has no effect and keeps returning `true`.
    pub fn run_frame(&mut self, env: &mut CombatEnv<'_>, now: Tick) -> bool {
        let Some(engagement) = self.engagement else {
            return true;
        };
        if self.stage == Stage::Concluded {
            return true;
        }

        let concluded = match engagement {
            Engagement::PlayerAttacks { target } => match env.world.combatant(target) {
                Some(target) => self.player_frame(env, now, &target),
                None => self.abort(env, "target vanished"),
            },
            Engagement::MonsterAttacksPlayer { attacker } => match env.world.combatant(attacker) {
                Some(attacker) => self.monster_frame(env, now, &attacker, None),
                None => self.abort(env, "attacker vanished"),
            },
            Engagement::MonsterAttacksMonster { attacker, target } => {
                match (env.world.combatant(attacker), env.world.combatant(target)) {
                    (Some(attacker), Some(target)) => {
                        self.monster_frame(env, now, &attacker, Some(&target))
                    }
                    _ => self.abort(env, "participant vanished"),
                }
            }
        };

        if concluded {
            self.stage = Stage::Concluded;
            debug!(total = self.total.total(), "attack concluded");
        }
        concluded
    }

    fn abort(&mut self, env: &mut CombatEnv<'_>, reason: &'static str) -> bool {
        debug!(reason, "attack aborted");
        self.retire_missiles(env);
        true
    }

    pub(crate) fn retire_missiles(&mut self, env: &mut CombatEnv<'_>) {
        for missile in self.missiles.drain(..) {
            env.presentation.retire_missile(missile.sprite);
        }
    }

    /// Clears per-attack results at the start of the windup.
    pub(crate) fn reset_attack(&mut self) {
        self.total = DamageSplit::ZERO;
        self.last_split = DamageSplit::ZERO;
        self.hit_type = HitType::Miss;
        self.got_crit = false;
        self.exploded = false;
        self.teleported = false;
        self.boss_teleport_intent = false;
    }

    /// Windup is over: the strike stage starts after a short pause.
    pub(crate) fn begin_strikes(&mut self, now: Tick) {
        self.stage = Stage::Strike(StrikePhase {
            anim_end: now + CombatConfig::WINDUP_MS,
            ..StrikePhase::default()
        });
    }

    pub(crate) fn attacker_monster(&self, attacker: Option<&Combatant>) -> Option<MonsterKind> {
        attacker.and_then(Combatant::monster)
    }

    // ===== accessors =====

    pub fn tables(&self) -> &StatTables {
        &self.tables
    }

    pub fn engagement(&self) -> Option<Engagement> {
        self.engagement
    }

    pub fn stage(&self) -> StageKind {
        self.stage.kind()
    }

    pub fn is_concluded(&self) -> bool {
        self.stage == Stage::Concluded
    }

    /// Weapon driving the current (or last) attack.
    pub fn weapon(&self) -> WeaponId {
        self.weapon
    }

    pub fn strikes_left(&self) -> u8 {
        self.strikes_left
    }

    pub fn strikes_per_attack(&self) -> u8 {
        self.strikes_per_attack
    }

    pub fn total_damage(&self) -> i32 {
        self.total.health
    }

    pub fn total_armor_damage(&self) -> i32 {
        self.total.armor
    }

    pub fn hit_type(&self) -> HitType {
        self.hit_type
    }

    pub fn got_crit(&self) -> bool {
        self.got_crit
    }

    pub fn gibbed(&self) -> bool {
        self.gibbed
    }

    pub fn range(&self) -> DistanceBucket {
        self.range
    }

    pub fn active_missiles(&self) -> &[ActiveMissile] {
        &self.missiles
    }

    pub fn result_visible_until(&self) -> Option<Tick> {
        self.result_until
    }

    pub fn boss_teleport_intent(&self) -> bool {
        self.boss_teleport_intent
    }

    pub fn boss_escaped(&self) -> bool {
        self.boss_escaped
    }

    /// Boss relocated during the current attack.
    pub fn boss_teleported(&self) -> bool {
        self.teleported
    }
}

impl Default for CombatSession {
    fn default() -> Self {
        Self::new(StatTables::defaults())
    }
}
