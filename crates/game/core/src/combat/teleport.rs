//! Boss escape: Kronos blinks to a free tile next to the player instead of
//! taking the attack.

use tracing::debug;

use super::session::CombatSession;
use crate::config::CombatConfig;
use crate::env::{CombatEnv, DamageSplit, FeatureMask, HitType, RenderMode, RngOracle};
use crate::state::Combatant;

/// Tile offsets tried around the player, before shuffling.
pub const CARDINAL_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Puff left behind at the boss's old position.
pub const TELEPORT_PUFF_ANIM: u16 = 2;

/// Order in which the cardinal offsets are tried: four random swaps.
pub fn shuffled_order(rng: &mut dyn RngOracle) -> [usize; 4] {
    let mut order = [0, 1, 2, 3];
    for _ in 0..4 {
        let a = (rng.next_byte() & 3) as usize;
        let b = (rng.next_byte() & 3) as usize;
        if a != b {
            order.swap(a, b);
        }
    }
    order
}

impl CombatSession {
    /// Rolls the escape after a contact against the boss. Returns whether the
    /// boss relocated.
    pub(crate) fn try_boss_teleport(
        &mut self,
        env: &mut CombatEnv<'_>,
        boss: &Combatant,
        final_strike: bool,
    ) -> bool {
        if !self.hit_type.landed() || !final_strike {
            return false;
        }
        if !self.boss_teleport_intent && env.rng.next_byte() >= CombatConfig::TELEPORT_ROLL {
            debug!(escaped = self.boss_escaped, "boss stays put");
            return false;
        }

        let order = shuffled_order(env.rng);
        let anchor = env.world.player().position;
        for (dx, dy) in order.map(|i| CARDINAL_OFFSETS[i]) {
            let destination = anchor.offset_tiles(dx, dy);
            if env.world.is_blocked(destination, FeatureMask::TELEPORT_BLOCKERS) {
                continue;
            }

            env.presentation
                .spawn_animation(TELEPORT_PUFF_ANIM, boss.position, RenderMode::Normal);
            env.world.relocate(boss.id, destination);

            self.boss_teleport_intent = true;
            self.boss_escaped = true;
            self.teleported = true;
            // the whole attack whiffs, earlier strikes included
            self.hit_type = HitType::Miss;
            self.last_split = DamageSplit::ZERO;
            self.total = DamageSplit::ZERO;
            self.got_crit = false;
            debug!(boss = %boss.id, ?destination, "boss teleported");
            return true;
        }

        debug!(boss = %boss.id, "no free tile around the player");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Script(Vec<u8>);

    impl RngOracle for Script {
        fn next_byte(&mut self) -> u8 {
            if self.0.is_empty() { 0 } else { self.0.remove(0) }
        }
    }

    #[test]
    fn equal_draws_leave_order_alone() {
        let mut rng = Script(vec![1, 1, 2, 2, 3, 3, 0, 0]);
        assert_eq!(shuffled_order(&mut rng), [0, 1, 2, 3]);
    }

    #[test]
    fn draws_swap_slots() {
        let mut rng = Script(vec![0, 2, 1, 1, 1, 1, 1, 1]);
        assert_eq!(shuffled_order(&mut rng), [2, 1, 0, 3]);
    }

    #[test]
    fn only_low_bits_count() {
        let mut rng = Script(vec![0xFC, 0x01, 0, 0, 0, 0, 0, 0]);
        assert_eq!(shuffled_order(&mut rng), [1, 0, 2, 3]);
    }
}
