//! Player-initiated attack sequence.

use std::fmt::Write as _;

use tracing::debug;

use super::effects::blood_color;
use super::session::{CombatSession, ResolvePhase, Stage, StrikePhase};
use super::strike::{is_final_strike, object_accepts, object_agility, object_defense, player_power};
use crate::config::CombatConfig;
use crate::env::{
    CombatEnv, DamageSplit, DistanceBucket, HitType, SoundId, SpriteFrame, channel,
};
use crate::state::{Combatant, PlayerView, TargetKind, Tick};
use crate::tables::{MonsterKind, WeaponId, WeaponStat};

/// Marker glyph the HUD renders as "more follows".
pub(crate) const MORE_GLYPH: char = '\u{7f}';

/// Ammo advisory before the shot, by how many attacks the pool still covers.
pub fn ammo_advisory(ammo: i32, usage: i32) -> Option<&'static str> {
    if usage == 0 {
        None
    } else if ammo < usage {
        Some("Last shot!")
    } else if ammo < usage * 2 {
        Some("1 shot left!")
    } else if ammo < usage * 3 {
        Some("2 shots left!")
    } else if ammo < usage * 4 {
        Some("3 shots left!")
    } else {
        None
    }
}

impl CombatSession {
    pub(crate) fn player_frame(&mut self, env: &mut CombatEnv<'_>, now: Tick, target: &Combatant) -> bool {
        match self.stage {
            Stage::Windup => {
                self.player_windup(env, now, target);
                false
            }
            Stage::Strike(phase) => {
                self.stage = self.player_strike(env, now, target, phase);
                false
            }
            Stage::Resolve(phase) => self.player_resolve(env, now, target, phase),
            Stage::Concluded => true,
        }
    }

    fn player_windup(&mut self, env: &mut CombatEnv<'_>, now: Tick, target: &Combatant) {
        self.reset_attack();
        self.gibbed = false;
        self.retire_missiles(env);
        self.begin_strikes(now);
        env.presentation.request_redraw(false);

        self.range = DistanceBucket::from_world_distance(env.world.distance_to_player(target.id));
        debug!(target = %target.id, range = ?self.range, "player windup");

        let player = env.world.player();
        let weapon = self.tables.weapon(self.weapon);
        let advisory = ammo_advisory(player.ammo_for(weapon.ammo_type), weapon.ammo_usage);

        if target.is_enemy() {
            self.blood_color = blood_color(target.kind);
            if let Some(advisory) = advisory {
                let buffer = env.presentation.begin_message();
                let _ = write!(buffer, "Attacking{MORE_GLYPH} ({advisory})");
                env.presentation.finish_message();
            }
        } else if let Some(advisory) = advisory {
            env.presentation.post_message(advisory);
        }
    }

    fn player_strike(
        &mut self,
        env: &mut CombatEnv<'_>,
        now: Tick,
        target: &Combatant,
        mut phase: StrikePhase,
    ) -> Stage {
        if let Some(next_stage_at) = phase.next_stage_at {
            if now > phase.anim_end {
                if phase.contact {
                    env.presentation.request_redraw(false);
                    phase.contact = false;
                }
                if now > next_stage_at {
                    debug!("player strikes resolved");
                    return Stage::Resolve(ResolvePhase::default());
                }
            }
            return Stage::Strike(phase);
        }

        let weapon = *self.tables.weapon(self.weapon);

        if phase.fire_at.is_none() {
            if now <= phase.anim_end || (self.strikes_left == 0 && !phase.contact) {
                self.update_projectiles(env, now, &mut phase, None, Some(target));
                return Stage::Strike(phase);
            }

            phase.contact = !phase.contact;
            let first_contact = phase.contact && self.strikes_left == weapon.strikes;
            env.presentation.request_redraw(first_contact);

            if phase.contact {
                phase.fire_at = Some(now + CombatConfig::CONTACT_MS);
                phase.flash_until = now + weapon.contact_ms();
                self.player_contact(env, now, target, &weapon);
                phase.anim_end = now + weapon.contact_ms();
            } else {
                phase.anim_end = now + weapon.recovery_ms();
            }
        }

        if phase.fire_at.is_some_and(|fire_at| now > fire_at) {
            self.player_fire(env, now, target);
            phase.fire_at = None;
        }

        self.update_projectiles(env, now, &mut phase, None, Some(target));
        Stage::Strike(phase)
    }

    /// One contact: roll, accumulate and consume a strike.
    fn player_contact(&mut self, env: &mut CombatEnv<'_>, now: Tick, target: &Combatant, weapon: &WeaponStat) {
        let player = env.world.player();
        let final_strike = is_final_strike(self.strikes_left);
        self.last_split = DamageSplit::ZERO;

        if let Some(monster) = target.monster() {
            self.hit_type = env
                .formulas
                .calc_hit(&player.stats, weapon, &target.stats, self.range);

            if self.hit_type.landed() {
                if self.hit_type == HitType::Critical && final_strike {
                    self.got_crit = true;
                }
                self.last_split = env.formulas.calc_damage(
                    &player.stats,
                    weapon,
                    &target.stats,
                    player_power(player.berserk, self.got_crit),
                    self.range,
                );

                let split = self.last_split;
                if target.stats.health_after(split.health, split.armor) > 0 {
                    env.presentation.set_sprite_frame(target.id, SpriteFrame::Pain);
                    env.world.show_pain(target.id, now + CombatConfig::PAIN_FRAME_MS);
                }

                if monster == MonsterKind::Kronos && !self.boss_escaped {
                    self.boss_teleport_intent = true;
                }
            }

            if monster == MonsterKind::Kronos {
                self.try_boss_teleport(env, target, final_strike);
            }
        } else {
            self.hit_type = self.object_hit(env, &player, weapon, target);
            let defender = if target.kind == TargetKind::PowerCoupling {
                self.device_defender
            } else {
                self.object_defender.defense = object_defense(player.stats.strength);
                self.object_defender
            };
            self.last_split = env.formulas.calc_damage(
                &player.stats,
                weapon,
                &defender,
                player_power(player.berserk, self.got_crit),
                self.range,
            );
        }

        self.total += self.last_split;
        self.strikes_left = self.strikes_left.saturating_sub(1);
        debug!(
            hit = ?self.hit_type,
            split = ?self.last_split,
            strikes_left = self.strikes_left,
            "player contact"
        );
    }

    /// Hit roll against an object, through the stand-in defender.
    fn object_hit(
        &mut self,
        env: &mut CombatEnv<'_>,
        player: &PlayerView,
        weapon: &WeaponStat,
        target: &Combatant,
    ) -> HitType {
        self.object_defender.agility = object_agility(player.stats.accuracy);
        let roll = env
            .formulas
            .calc_hit(&player.stats, weapon, &self.object_defender, self.range);
        if !roll.landed() || !target.flags.active || !object_accepts(target.kind, player.weapon) {
            return HitType::Miss;
        }
        HitType::Hit
    }

    /// Contact window elapsed: sound, projectile and the chaingun finisher.
    fn player_fire(&mut self, env: &mut CombatEnv<'_>, now: Tick, target: &Combatant) {
        let sound = match self.weapon {
            WeaponId::Bfg => SoundId::BFG_FIRE,
            WeaponId::Axe if target.is_enemy() => SoundId::AXE_FLESH,
            weapon => SoundId(SoundId::WEAPON_BASE.0 + weapon.index() as u16),
        };
        env.presentation.play_sound(sound, 0, channel::PLAYER_WEAPON);

        if !self.teleported {
            self.launch_projectile(env, None, Some(target));
        }

        if self.weapon == WeaponId::Chaingun && self.gibbed && target.is_enemy() && self.strikes_left == 0 {
            if let Some(depth) = self.range.tier() {
                self.spawn_blood(env, now, target, depth);
            }
            env.presentation.hide_entity_sprite(target.id);
            env.presentation.request_redraw(true);
        }
    }

    fn player_resolve(
        &mut self,
        env: &mut CombatEnv<'_>,
        now: Tick,
        target: &Combatant,
        phase: ResolvePhase,
    ) -> bool {
        if let Some(hold_until) = phase.hold_until {
            return now > hold_until;
        }

        env.presentation.request_redraw(true);
        let total = self.total.total();

        if total == 0 {
            let message = if target.is_enemy() && self.weapon != WeaponId::FireExtinguisher {
                if self.teleported {
                    "Kronos Teleported!"
                } else if self.hit_type.landed() {
                    "Dodged!"
                } else {
                    "Missed!"
                }
            } else {
                "No effect!"
            };
            env.presentation.post_message(message);
        } else {
            if target.is_enemy() {
                self.damage_enemy(env, target, total);
            } else if self.hit_type.landed() {
                self.damage_object(env, target, total);
            } else if self.weapon == WeaponId::FireExtinguisher {
                env.presentation.post_message("No effect!");
            } else {
                env.presentation.post_message("Missed!");
            }

            if self.hit_type.landed() && !target.flags.splash_immune {
                if let Some(splash) = self.weapon.splash() {
                    env.world
                        .radius_hurt(target.position, self.total.halved(), splash, true);
                }
            }
        }

        let survivor = env
            .world
            .combatant(target.id)
            .filter(|c| c.is_enemy() && !c.stats.is_dead());
        if survivor.is_none() {
            self.result_until = Some(now + CombatConfig::RESULT_HOLD_MS);
            return true;
        }

        self.stage = Stage::Resolve(ResolvePhase {
            hold_until: Some(now + CombatConfig::RESULT_HOLD_MS),
        });
        false
    }

    fn damage_enemy(&mut self, env: &mut CombatEnv<'_>, target: &Combatant, total: i32) {
        let crit = if self.got_crit { "Crit! " } else { "" };
        let mut message = format!("{crit}{total} damage!");

        env.world.pain(target.id, self.total);
        let dead = env
            .world
            .combatant(target.id)
            .is_none_or(|c| c.stats.is_dead());

        if dead {
            let _ = write!(message, " {} died!", target.name);
            env.presentation.post_message(&message);
            env.world.died(target.id);
        } else {
            env.presentation.post_message(&message);
            if let Some(sound) = env.world.pain_sound(target.id) {
                env.presentation.play_sound(sound, 0, channel::PAIN);
            }
        }
    }

    fn damage_object(&mut self, env: &mut CombatEnv<'_>, target: &Combatant, total: i32) {
        if target.kind != TargetKind::PowerCoupling {
            env.world.died(target.id);
            return;
        }

        let health = env.world.device_health(target.id);
        if health > total {
            env.presentation
                .post_message(&format!("Hit {} for {total} damage!", target.name));
        } else {
            env.presentation
                .post_message(&format!("{} destroyed!", target.name));
        }

        let remaining = health - total;
        env.world.set_device_health(target.id, remaining);
        if remaining <= 0 {
            env.world.died(target.id);
        }
    }
}
