//! Monster-initiated attack sequence, including the raise ritual.

use std::fmt::Write as _;

use tracing::{debug, warn};

use super::player::MORE_GLYPH;
use super::session::{CombatSession, Stage, StrikePhase};
use super::strike::{is_final_strike, monster_power};
use crate::config::CombatConfig;
use crate::env::{
    CombatEnv, DamageSplit, DistanceBucket, FeatureMask, HitType, SoundId, SpriteFrame, channel,
};
use crate::state::{Combatant, Tick};
use crate::tables::{MonsterAttackTiming, WeaponId};

impl CombatSession {
    pub(crate) fn monster_frame(
        &mut self,
        env: &mut CombatEnv<'_>,
        now: Tick,
        attacker: &Combatant,
        target: Option<&Combatant>,
    ) -> bool {
        let Some(monster) = attacker.monster() else {
            warn!(attacker = %attacker.id, "attacker lost its monster record");
            return true;
        };
        let timing = *self.tables.timing(monster);

        match self.stage {
            Stage::Windup => {
                self.monster_windup(env, now, attacker);
                false
            }
            Stage::Strike(phase) => {
                self.stage = self.monster_strike(env, now, attacker, target, timing, phase);
                false
            }
            Stage::Resolve(_) => {
                self.monster_resolve(env, target);
                true
            }
            Stage::Concluded => true,
        }
    }

    fn monster_windup(&mut self, env: &mut CombatEnv<'_>, now: Tick, attacker: &Combatant) {
        self.reset_attack();
        self.retire_missiles(env);
        self.range = DistanceBucket::Unmeasured;
        self.begin_strikes(now);

        let verb = if self.weapon == WeaponId::Raise {
            "casts raise"
        } else {
            "attacks"
        };
        let buffer = env.presentation.begin_message();
        let _ = write!(buffer, "{} {verb}{MORE_GLYPH}", attacker.name);
        env.presentation.finish_message();
        debug!(attacker = %attacker.id, weapon = %self.weapon, "monster windup");
    }

    fn monster_strike(
        &mut self,
        env: &mut CombatEnv<'_>,
        now: Tick,
        attacker: &Combatant,
        target: Option<&Combatant>,
        timing: MonsterAttackTiming,
        mut phase: StrikePhase,
    ) -> Stage {
        if let Some(next_stage_at) = phase.next_stage_at.filter(|_| self.missiles.is_empty()) {
            if now > phase.anim_end {
                env.presentation
                    .set_sprite_frame(attacker.id, SpriteFrame::Idle);
                if now > next_stage_at {
                    debug!("monster strikes resolved");
                    return Stage::Resolve(Default::default());
                }
            }
            return Stage::Strike(phase);
        }

        if phase.fire_at.is_none() {
            if now <= phase.anim_end || (self.strikes_left == 0 && !phase.contact) {
                self.update_projectiles(env, now, &mut phase, Some(attacker), target);
                return Stage::Strike(phase);
            }

            phase.contact = !phase.contact;
            if phase.contact {
                env.presentation
                    .set_sprite_frame(attacker.id, SpriteFrame::Attack(self.attack_frame));
                phase.fire_at = Some(now + CombatConfig::CONTACT_MS);
                self.monster_contact(env, attacker, target);
            } else {
                env.presentation
                    .set_sprite_frame(attacker.id, SpriteFrame::Idle);
            }
            env.presentation.request_redraw(true);
            phase.anim_end = now + timing.frame_ms();
        }

        if phase.fire_at.is_some_and(|fire_at| now > fire_at) {
            self.monster_fire(env, attacker, target);
            phase.fire_at = None;
        }

        self.update_projectiles(env, now, &mut phase, Some(attacker), target);
        Stage::Strike(phase)
    }

    fn monster_contact(&mut self, env: &mut CombatEnv<'_>, attacker: &Combatant, target: Option<&Combatant>) {
        let final_strike = is_final_strike(self.strikes_left);

        if target.is_some() {
            self.hit_type = HitType::Hit;
            self.last_split = DamageSplit::new(1, 0);
        } else {
            let player = env.world.player();
            let weapon = self.tables.weapon(self.weapon);
            self.hit_type = env
                .formulas
                .calc_hit(&attacker.stats, weapon, &player.stats, self.range);

            self.last_split = if self.hit_type.landed() {
                if self.hit_type == HitType::Critical && final_strike {
                    self.got_crit = true;
                }
                env.formulas.calc_damage(
                    &attacker.stats,
                    weapon,
                    &player.stats,
                    monster_power(self.got_crit),
                    self.range,
                )
            } else {
                DamageSplit::ZERO
            };
        }

        self.total += self.last_split;
        self.strikes_left = self.strikes_left.saturating_sub(1);
        debug!(
            hit = ?self.hit_type,
            split = ?self.last_split,
            strikes_left = self.strikes_left,
            "monster contact"
        );
    }

    fn monster_fire(&mut self, env: &mut CombatEnv<'_>, attacker: &Combatant, target: Option<&Combatant>) {
        let sound = if self.weapon == WeaponId::Raise {
            Some(SoundId::RAISE)
        } else {
            env.world
                .attack_sound(attacker.id, attacker.flags.alternate_attack)
        };
        if let Some(sound) = sound {
            env.presentation
                .play_sound(sound, 0, channel::MONSTER_ATTACK);
        }

        self.launch_projectile(env, Some(attacker), target);
    }

    fn monster_resolve(&mut self, env: &mut CombatEnv<'_>, target: Option<&Combatant>) {
        let Some(target) = target else {
            if self.total.total() == 0 {
                env.presentation.post_message("Dodged!");
            } else {
                env.world.player_pain(self.total);
            }
            return;
        };

        if self.weapon != WeaponId::Raise {
            env.world.died(target.id);
            return;
        }

        if env
            .world
            .is_blocked(target.position, FeatureMask::RAISE_BLOCKERS)
        {
            debug!(target = %target.id, "raise blocked");
            env.presentation.post_message("Raise failed!");
            return;
        }

        env.world.revive(target.id, target.stats.restored());
        env.presentation
            .set_sprite_frame(target.id, SpriteFrame::Idle);
        env.presentation
            .post_message(&format!("{} is revived!", target.name));
        debug!(target = %target.id, "corpse raised");
    }
}
