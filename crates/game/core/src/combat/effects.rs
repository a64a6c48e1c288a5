//! Particle presets and impact dispatch.

use super::session::CombatSession;
use super::strike::particle_intensity;
use crate::config::CombatConfig;
use crate::env::{CombatEnv, HudLayout, ParticleBurst, Span, Viewport};
use crate::state::{Combatant, EntityId, Rgb, TargetKind, Tick};
use crate::tables::{MonsterKind, WeaponId};

/// Standard particle count for scenery bursts.
const SCENERY_PARTICLES: i32 = 15;

fn screen_viewport(layout: &HudLayout) -> Viewport {
    Viewport {
        x: 0,
        y: layout.status_top_bar_height,
        width: layout.screen_width,
        height: layout.screen_height,
    }
}

fn display_viewport(layout: &HudLayout) -> Viewport {
    Viewport {
        x: 0,
        y: layout.status_top_bar_height,
        width: layout.display_width,
        height: layout.display_height - layout.status_bar_height,
    }
}

/// Blood spray from a wounded enemy. Gib bursts fly higher.
pub fn blood(layout: &HudLayout, color: Rgb, count: i32, depth: u8, gib: bool, themed: bool) -> ParticleBurst {
    ParticleBurst {
        velocity_x: Span::new(-150, 100),
        velocity_y: if gib {
            Span::new(-175, -75)
        } else {
            Span::new(-160, -60)
        },
        start_x: Span::new(-6, 6),
        start_y: Span::new(-9, 11),
        size: Span::new(1, 4),
        gravity: 10,
        color,
        viewport: screen_viewport(layout),
        count,
        depth,
        themed,
        ..ParticleBurst::default()
    }
}

/// Splinters from breakable scenery; they settle on the floor.
pub fn debris(layout: &HudLayout, depth: u8) -> ParticleBurst {
    ParticleBurst {
        velocity_x: Span::new(-75, 75),
        velocity_y: Span::new(-150, -75),
        start_x: Span::new(-6, 6),
        start_y: Span::new(9, 10),
        size: Span::new(1, 4),
        gravity: 12,
        color: Rgb::DEBRIS,
        viewport: display_viewport(layout),
        count: SCENERY_PARTICLES,
        depth,
        grounded: true,
        ..ParticleBurst::default()
    }
}

/// Sparks or foam rising off a fire.
pub fn fire(layout: &HudLayout, color: Rgb, depth: u8) -> ParticleBurst {
    ParticleBurst {
        velocity_x: Span::new(-85, 85),
        velocity_y: Span::new(-160, -100),
        start_x: Span::new(-16, 16),
        start_y: Span::new(-9, 11),
        size: Span::new(1, 4),
        gravity: 1,
        color,
        viewport: display_viewport(layout),
        count: SCENERY_PARTICLES,
        depth,
        ..ParticleBurst::default()
    }
}

/// Chips knocked off a jammed door; always at arm's length.
pub fn jammed_door(layout: &HudLayout, color: Rgb) -> ParticleBurst {
    ParticleBurst {
        velocity_x: Span::new(-150, 100),
        velocity_y: Span::new(-200, -100),
        start_x: Span::new(-6, 6),
        start_y: Span::new(-6, 6),
        size: Span::new(1, 4),
        gravity: 10,
        color,
        viewport: display_viewport(layout),
        count: SCENERY_PARTICLES,
        depth: 1,
        ..ParticleBurst::default()
    }
}

/// Blood colour by target; tinted Cacodemons bleed blue, tinted Barons green.
pub fn blood_color(kind: TargetKind) -> Rgb {
    match kind {
        TargetKind::Enemy {
            monster: MonsterKind::Cacodemon,
            tinted_blood: true,
        } => Rgb::BLOOD_BLUE,
        TargetKind::Enemy {
            monster: MonsterKind::Baron,
            tinted_blood: true,
        } => Rgb::BLOOD_GREEN,
        _ => Rgb::BLOOD_RED,
    }
}

impl CombatSession {
    /// Impact feedback on the player's target.
    pub(crate) fn explode_on_monster(&mut self, env: &mut CombatEnv<'_>, now: Tick, target: &Combatant) {
        let Some(depth) = self.range.tier() else {
            return;
        };
        if !self.hit_type.landed() {
            return;
        }

        let layout = env.presentation.hud_layout();
        match target.kind {
            TargetKind::Enemy { .. } => {
                self.spawn_blood(env, now, target, depth);
                if self.gibbed && (self.weapon != WeaponId::Chaingun || self.strikes_left == 0) {
                    env.presentation.hide_entity_sprite(target.id);
                    env.presentation.request_redraw(false);
                }
            }
            TargetKind::JammedDoor => {
                env.presentation
                    .spawn_particles(&jammed_door(&layout, Rgb::DEBRIS));
            }
            TargetKind::Destructible | TargetKind::PowerCoupling => {
                env.presentation.spawn_particles(&debris(&layout, depth));
            }
            TargetKind::Fire => {
                env.presentation
                    .spawn_particles(&fire(&layout, Rgb::FLAME, depth));
            }
            TargetKind::Inert => {}
        }
    }

    /// A monster's shot reached the player.
    pub(crate) fn explode_on_player(&mut self, env: &mut CombatEnv<'_>, attacker: EntityId) {
        if self.hit_type.landed() {
            env.world.player_pain_event(attacker);
        }
    }

    /// Blood burst sized by the last strike. Also decides whether the
    /// target is gibbed.
    pub(crate) fn spawn_blood(&mut self, env: &mut CombatEnv<'_>, now: Tick, target: &Combatant, depth: u8) {
        env.world
            .flash_damage(target.id, now + CombatConfig::DAMAGE_FLASH_MS);

        if self.weapon == WeaponId::FireExtinguisher {
            return;
        }

        let intensity = particle_intensity(&target.stats, target.monster(), self.last_split, self.range);
        if intensity.gib && !self.gibbed {
            self.gibbed = true;
            env.world.mark_gibbed(target.id);
        }

        let themed = self.gibbed && (self.weapon != WeaponId::Chaingun || self.strikes_left == 1);
        let layout = env.presentation.hud_layout();
        env.presentation.spawn_particles(&blood(
            &layout,
            self.blood_color,
            intensity.count,
            depth,
            self.gibbed,
            themed,
        ));
    }
}
