mod support;

use combat_core::tables::MonsterKind;
use combat_core::{DamageSplit, Engagement, EntityId, HitType, WeaponId};
use support::{
    Harness, MockWorld, PLAYER_POS, ScriptedFormulas, ScriptedRng, WorldEvent, monster,
    north_of_player, player,
};

const KRONOS: EntityId = EntityId(40);

fn boss_fight(rng: ScriptedRng, shots: usize) -> Harness {
    boss_fight_with(WeaponId::Pistol, rng, shots)
}

fn boss_fight_with(weapon: WeaponId, rng: ScriptedRng, shots: usize) -> Harness {
    let world = MockWorld::new(player(weapon)).with(
        monster(KRONOS.0, MonsterKind::Kronos, "Kronos", north_of_player()),
        4096,
    );
    let formulas = ScriptedFormulas::default()
        .hits(vec![HitType::Hit; shots])
        .damage(vec![DamageSplit::new(5, 0); shots]);
    Harness::new(world, formulas).with_rng(rng)
}

// swap slots 0 and 3, then three no-op swaps: order [3, 1, 2, 0]
const SHUFFLE: [u8; 8] = [0, 3, 1, 1, 1, 1, 1, 1];

#[test]
fn boss_blinks_to_the_first_free_tile() {
    let mut harness = boss_fight(ScriptedRng::new(SHUFFLE), 1);
    harness.world.block(PLAYER_POS.offset_tiles(-1, 0));
    harness.world.block(PLAYER_POS.offset_tiles(0, -1));

    harness.attack(Engagement::PlayerAttacks { target: KRONOS });
    harness.run_to_end();

    let destination = PLAYER_POS.offset_tiles(1, 0);
    assert!(
        harness
            .world
            .events
            .contains(&WorldEvent::Relocated(KRONOS, destination))
    );
    assert_eq!(harness.presentation.animations, [(2, north_of_player())]);
    assert_eq!(
        harness.presentation.last_message(),
        Some("Kronos Teleported!")
    );
    assert_eq!(harness.session.total_damage(), 0);
    assert!(harness.session.boss_teleported());
    assert!(harness.session.boss_escaped());
    assert!(
        !harness
            .world
            .events
            .iter()
            .any(|e| matches!(e, WorldEvent::Pain(..)))
    );
    // intent skips the escape roll, only the shuffle draws
    assert_eq!(harness.rng.drawn, 8);
}

#[test]
fn blink_on_the_last_chaingun_round_voids_the_whole_burst() {
    let mut harness = boss_fight_with(WeaponId::Chaingun, ScriptedRng::new(SHUFFLE), 3);
    harness.world.block(PLAYER_POS.offset_tiles(-1, 0));
    harness.world.block(PLAYER_POS.offset_tiles(0, -1));

    harness.attack(Engagement::PlayerAttacks { target: KRONOS });
    harness.run_to_end();

    assert_eq!(harness.formulas.hit_calls, 3);
    assert!(
        harness
            .world
            .events
            .contains(&WorldEvent::Relocated(KRONOS, PLAYER_POS.offset_tiles(1, 0)))
    );
    assert!(harness.session.boss_teleported());
    assert_eq!(harness.session.total_damage(), 0);
    assert_eq!(harness.session.total_armor_damage(), 0);
    assert_eq!(
        harness.presentation.last_message(),
        Some("Kronos Teleported!")
    );
    assert!(
        !harness
            .world
            .events
            .iter()
            .any(|e| matches!(e, WorldEvent::Pain(..)))
    );
}

#[test]
fn escaped_boss_needs_a_low_roll_to_blink_again() {
    let mut harness = boss_fight(ScriptedRng::new(SHUFFLE), 2);
    harness.world.block(PLAYER_POS.offset_tiles(-1, 0));
    harness.world.block(PLAYER_POS.offset_tiles(0, -1));

    harness.attack(Engagement::PlayerAttacks { target: KRONOS });
    harness.run_to_end();
    assert_eq!(harness.rng.drawn, 8);

    // script exhausted: the roll comes back 255 and the boss stays
    harness.attack(Engagement::PlayerAttacks { target: KRONOS });
    harness.run_to_end();

    assert_eq!(harness.rng.drawn, 9);
    assert!(!harness.session.boss_teleported());
    assert!(harness.session.boss_escaped());
    assert_eq!(harness.presentation.last_message(), Some("5 damage!"));
    assert!(
        harness
            .world
            .events
            .contains(&WorldEvent::Pain(KRONOS, DamageSplit::new(5, 0)))
    );
}

#[test]
fn low_roll_after_an_escape_blinks_again() {
    let mut bytes = SHUFFLE.to_vec();
    bytes.push(10);
    bytes.extend([0; 8]);
    let mut harness = boss_fight(ScriptedRng::new(bytes), 2);
    harness.world.block(PLAYER_POS.offset_tiles(-1, 0));
    harness.world.block(PLAYER_POS.offset_tiles(0, -1));

    harness.attack(Engagement::PlayerAttacks { target: KRONOS });
    harness.run_to_end();
    harness.attack(Engagement::PlayerAttacks { target: KRONOS });
    harness.run_to_end();

    assert!(harness.session.boss_teleported());
    assert!(
        harness
            .world
            .events
            .contains(&WorldEvent::Relocated(KRONOS, PLAYER_POS.offset_tiles(0, 1)))
    );
}

#[test]
fn boxed_in_boss_takes_the_hit() {
    let mut harness = boss_fight(ScriptedRng::new(SHUFFLE), 1);
    for (dx, dy) in combat_core::combat::CARDINAL_OFFSETS {
        harness.world.block(PLAYER_POS.offset_tiles(dx, dy));
    }

    harness.attack(Engagement::PlayerAttacks { target: KRONOS });
    harness.run_to_end();

    assert!(!harness.session.boss_teleported());
    assert!(harness.presentation.animations.is_empty());
    assert_eq!(harness.presentation.last_message(), Some("5 damage!"));
}
