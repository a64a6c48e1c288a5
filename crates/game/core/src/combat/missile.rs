//! Projectile launch and per-frame travel.
//!
//! Every strike launches one missile (possibly invisible) or, for hitscan
//! weapons, explodes on the spot. Missiles travel axis by axis toward their
//! destination at a per-sprite speed; the axis carrying the sideways
//! component moves at a quarter of it. Arrival spawns the impact animation
//! and hands over to the particle dispatcher.

use tracing::{debug, warn};

use super::session::{CombatSession, Engagement, StrikePhase};
use crate::config::CombatConfig;
use crate::env::{CombatEnv, RenderMode};
use crate::state::{Combatant, SpriteHandle, Tick, WorldPos};
use crate::tables::{MonsterKind, WeaponId};

/// Axis that moves at quarter speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
}

/// A projectile in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveMissile {
    pub sprite: SpriteHandle,
    pub position: WorldPos,
    pub destination: WorldPos,
    pub slow_axis: Axis,
    /// World units per frame on the fast axis.
    pub speed: i32,
}

impl ActiveMissile {
    /// Moves one frame toward the destination without overshooting.
    pub fn step(&mut self) {
        let (step_x, step_y) = match self.slow_axis {
            Axis::X => (self.speed >> 2, self.speed),
            Axis::Y => (self.speed, self.speed >> 2),
        };
        self.position.x = approach(self.position.x, self.destination.x, step_x);
        self.position.y = approach(self.position.y, self.destination.y, step_y);
    }

    pub fn arrived(&self) -> bool {
        self.position == self.destination
    }
}

fn approach(from: i32, to: i32, step: i32) -> i32 {
    if from < to {
        (from + step).min(to)
    } else if from > to {
        (from - step).max(to)
    } else {
        from
    }
}

/// Sprite animation and compositing for a launch or an impact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MissileVisual {
    pub anim: u16,
    pub render: RenderMode,
}

impl MissileVisual {
    const fn normal(anim: u16) -> Self {
        Self {
            anim,
            render: RenderMode::Normal,
        }
    }

    const fn additive(anim: u16) -> Self {
        Self {
            anim,
            render: RenderMode::Additive,
        }
    }

    /// Anim 0 travels but is never drawn.
    pub const fn is_visible(self) -> bool {
        self.anim != 0
    }
}

/// Projectile sprite for a weapon; `None` means the shot is hitscan.
pub fn launch_visual(weapon: WeaponId, attacker: Option<MonsterKind>) -> Option<MissileVisual> {
    let visual = match weapon {
        WeaponId::PlasmaGun => MissileVisual::additive(200),
        WeaponId::RocketLauncher if attacker.is_some() => MissileVisual::normal(203),
        WeaponId::RocketLauncher => MissileVisual::normal(201),
        WeaponId::Bfg => MissileVisual::additive(202),
        WeaponId::MeleeAttack1 | WeaponId::MeleeAttack2 | WeaponId::MeleeAttack3 => {
            MissileVisual::normal(0)
        }
        WeaponId::Fireball if attacker == Some(MonsterKind::Archvile) => MissileVisual::additive(0),
        WeaponId::Fireball => MissileVisual::additive(204),
        WeaponId::BossMissile => MissileVisual::normal(205),
        WeaponId::RocketMissile => MissileVisual::normal(206),
        _ => return None,
    };
    Some(visual)
}

/// Animation spawned where a missile lands.
pub fn impact_visual(weapon: WeaponId, attacker: Option<MonsterKind>) -> MissileVisual {
    match weapon {
        WeaponId::PlasmaGun => MissileVisual::additive(5),
        WeaponId::RocketLauncher => MissileVisual::normal(1),
        WeaponId::Bfg => MissileVisual::additive(4),
        WeaponId::MeleeAttack1 if attacker == Some(MonsterKind::Revenant) => MissileVisual::normal(12),
        WeaponId::MeleeAttack1 => MissileVisual::normal(10),
        WeaponId::MeleeAttack2 => MissileVisual::normal(11),
        WeaponId::MeleeAttack3 => MissileVisual::normal(12),
        WeaponId::Fireball if attacker == Some(MonsterKind::Archvile) => MissileVisual::additive(9),
        WeaponId::Fireball => MissileVisual::additive(6),
        WeaponId::BossMissile => MissileVisual::normal(7),
        WeaponId::RocketMissile => MissileVisual::additive(8),
        _ => MissileVisual::normal(0),
    }
}

/// Fast-axis speed by projectile sprite.
pub const fn missile_speed(anim: u16) -> i32 {
    match anim {
        201 | 203 => 8,
        202 => 4,
        _ => 16,
    }
}

impl CombatSession {
    /// Fires the current strike: spawns a missile or marks a hitscan impact.
    pub(crate) fn launch_projectile(
        &mut self,
        env: &mut CombatEnv<'_>,
        attacker: Option<&Combatant>,
        target: Option<&Combatant>,
    ) {
        let attacker_kind = self.attacker_monster(attacker);
        let Some(visual) = launch_visual(self.weapon, attacker_kind) else {
            self.exploded = true;
            return;
        };

        let player = env.world.player();
        let mut destination = target.map_or(player.position, |t| t.position);
        let missed = !self.hit_type.landed();

        let (start, slow_axis) = match attacker {
            None => {
                let start = player.position + player.view_step;
                let (dx, dy) = (destination.x - start.x, destination.y - start.y);
                if dx != 0 && missed {
                    destination.y += deflection(env);
                }
                if dy != 0 && missed {
                    destination.x += deflection(env);
                }
                (start, if dy != 0 { Axis::X } else { Axis::Y })
            }
            Some(attacker) => {
                let standoff = self.missile_standoff;
                let close = attacker_kind == Some(MonsterKind::Archvile) || self.weapon.is_melee_attack();
                let mut start = attacker.position;
                let (dx, dy) = (destination.x - start.x, destination.y - start.y);

                if dx != 0 {
                    let toward = dx.signum();
                    if close {
                        start.x = destination.x - toward * standoff - 1;
                    }
                    if missed {
                        destination.y += deflection(env);
                    } else {
                        destination.x -= toward * standoff;
                    }
                }
                if dy != 0 {
                    let toward = dy.signum();
                    if close {
                        start.y = destination.y - toward * standoff - 1;
                    }
                    if missed {
                        destination.x += deflection(env);
                    } else {
                        destination.y -= toward * standoff;
                    }
                }
                (start, if dy != 0 { Axis::X } else { Axis::Y })
            }
        };

        let sprite = env
            .presentation
            .spawn_missile(visual.anim, start, visual.render, visual.is_visible());
        let missile = ActiveMissile {
            sprite,
            position: start,
            destination,
            slow_axis,
            speed: missile_speed(visual.anim),
        };

        if let Err(err) = self.missiles.try_push(missile) {
            warn!(capacity = CombatConfig::MAX_ACTIVE_MISSILES, "missile list full, exploding in place");
            env.presentation.retire_missile(err.element().sprite);
            self.exploded = true;
            return;
        }
        debug!(anim = visual.anim, ?start, ?destination, "missile launched");
        self.exploded = false;
    }

    /// Advances missiles in flight and schedules Resolve once the last
    /// strike has landed.
    pub(crate) fn update_projectiles(
        &mut self,
        env: &mut CombatEnv<'_>,
        now: Tick,
        phase: &mut StrikePhase,
        attacker: Option<&Combatant>,
        target: Option<&Combatant>,
    ) {
        let impact = impact_visual(self.weapon, self.attacker_monster(attacker));

        let mut i = 0;
        while i < self.missiles.len() {
            let missile = &mut self.missiles[i];
            missile.step();
            if !missile.arrived() {
                env.presentation.move_missile(missile.sprite, missile.position);
                i += 1;
                continue;
            }

            let landed = self.missiles.remove(i);
            env.presentation.retire_missile(landed.sprite);
            if self.total.total() != 0 {
                env.presentation
                    .spawn_animation(impact.anim, landed.position, impact.render);
            }
            self.exploded = true;
        }

        if self.exploded {
            match self.engagement {
                Some(Engagement::PlayerAttacks { .. }) => {
                    if let Some(target) = target {
                        self.explode_on_monster(env, now, target);
                    }
                }
                Some(Engagement::MonsterAttacksPlayer { attacker }) => {
                    self.explode_on_player(env, attacker);
                }
                _ => {}
            }
            phase.impact_seen = true;
            self.exploded = false;
        }

        if self.missiles.is_empty() {
            if !self.hit_type.landed() {
                phase.impact_seen = true;
            } else if !phase.impact_seen {
                return;
            }
            if self.strikes_left == 0 && !phase.contact {
                phase.next_stage_at = Some(now);
            }
        }
    }
}

fn deflection(env: &mut CombatEnv<'_>) -> i32 {
    if env.rng.coin_flip() {
        CombatConfig::MISS_DEFLECTION
    } else {
        -CombatConfig::MISS_DEFLECTION
    }
}
