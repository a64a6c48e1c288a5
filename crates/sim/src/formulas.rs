//! Stand-in hit and damage rolls for headless runs.

use combat_core::{
    CombatFormulas, CombatStats, DamageSplit, DistanceBucket, HitType, PcgRng, RngOracle,
    WeaponStat,
};

/// Rolls below this (out of 256) on a landed hit are critical.
const CRIT_ROLL: u8 = 12;

/// Simple accuracy-versus-agility rolls over a private RNG stream.
pub struct RollFormulas {
    rng: PcgRng,
}

impl RollFormulas {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: PcgRng::new(seed),
        }
    }

    /// Hit chance out of 256; long range and agile defenders lower it.
    fn hit_chance(attacker: &CombatStats, defender: &CombatStats, range: DistanceBucket) -> i32 {
        let penalty = match range.tier() {
            Some(tier) => 12 * i32::from(tier),
            None => return 0,
        };
        (160 + 6 * (attacker.accuracy - defender.agility) - penalty).clamp(24, 240)
    }
}

impl CombatFormulas for RollFormulas {
    fn calc_hit(
        &mut self,
        attacker: &CombatStats,
        _weapon: &WeaponStat,
        defender: &CombatStats,
        range: DistanceBucket,
    ) -> HitType {
        let roll = self.rng.next_byte();
        if i32::from(roll) >= Self::hit_chance(attacker, defender, range) {
            HitType::Miss
        } else if roll < CRIT_ROLL {
            HitType::Critical
        } else {
            HitType::Hit
        }
    }

    fn calc_damage(
        &mut self,
        attacker: &CombatStats,
        weapon: &WeaponStat,
        defender: &CombatStats,
        power: i32,
        _range: DistanceBucket,
    ) -> DamageSplit {
        let spread = (weapon.str_max - weapon.str_min).max(0) + 1;
        let base = weapon.str_min + (self.rng.next_u32() % spread as u32) as i32;
        let scaled = ((base + attacker.strength / 4) * weapon.damage / 128 * power) >> 8;
        let blocked = (scaled * defender.defense / 64).min(scaled);
        let dealt = (scaled - blocked / 2).max(0);

        if defender.armor > 0 {
            let armor = dealt / 2;
            DamageSplit::new(dealt - armor, armor)
        } else {
            DamageSplit::new(dealt, 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{StatTables, WeaponId};

    #[test]
    fn out_of_range_never_hits() {
        let mut formulas = RollFormulas::new(1);
        let stats = CombatStats::new(10, 0, 10, 10, 10, 10);
        let pistol = *StatTables::defaults().weapon(WeaponId::Pistol);
        for _ in 0..64 {
            assert_eq!(
                formulas.calc_hit(&stats, &pistol, &stats, DistanceBucket::OutOfRange),
                HitType::Miss
            );
        }
    }

    #[test]
    fn armored_defenders_split_damage() {
        let mut formulas = RollFormulas::new(2);
        let attacker = CombatStats::new(100, 0, 10, 12, 10, 10);
        let armored = CombatStats::new(10, 5, 8, 10, 10, 10);
        let shotgun = *StatTables::defaults().weapon(WeaponId::Shotgun);

        let split = formulas.calc_damage(&attacker, &shotgun, &armored, 256, DistanceBucket::Adjacent);
        assert!(split.health > 0);
        assert!(split.armor > 0);
        assert!(split.armor <= split.health);
    }

    #[test]
    fn power_scales_damage() {
        let attacker = CombatStats::new(100, 0, 10, 12, 10, 10);
        let defender = CombatStats::new(10, 0, 0, 10, 10, 10);
        let axe = *StatTables::defaults().weapon(WeaponId::Axe);

        let normal = RollFormulas::new(3).calc_damage(&attacker, &axe, &defender, 256, DistanceBucket::Adjacent);
        let berserk = RollFormulas::new(3).calc_damage(&attacker, &axe, &defender, 768, DistanceBucket::Adjacent);
        assert!(berserk.total() >= 3 * normal.total() - 2);
    }
}
