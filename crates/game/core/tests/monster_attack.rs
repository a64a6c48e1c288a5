mod support;

use combat_core::env::{SoundId, SpriteFrame};
use combat_core::tables::MonsterKind;
use combat_core::{DamageSplit, Engagement, EntityId, HitType, TargetKind, WeaponId, WorldPos};
use support::{
    Harness, MockWorld, PLAYER_POS, ScriptedFormulas, WorldEvent, monster, north_of_player,
    object, player,
};

const IMP: EntityId = EntityId(3);
const ARCHVILE: EntityId = EntityId(4);

fn imp_attacks(formulas: ScriptedFormulas, alternate: bool) -> Harness {
    let mut imp = monster(IMP.0, MonsterKind::Imp, "Imp", north_of_player());
    imp.flags.alternate_attack = alternate;
    let world = MockWorld::new(player(WeaponId::Pistol)).with(imp, 4096);
    Harness::new(world, formulas)
}

#[test]
fn melee_hit_hurts_the_player() {
    let formulas = ScriptedFormulas::default()
        .hits([HitType::Hit])
        .damage([DamageSplit::new(3, 1)]);
    let mut harness = imp_attacks(formulas, false);

    harness.attack(Engagement::MonsterAttacksPlayer { attacker: IMP });
    assert_eq!(harness.session.weapon(), WeaponId::MeleeAttack1);
    harness.run_to_end();

    assert_eq!(harness.presentation.messages[0], "Imp attacks\u{7f}");
    assert_eq!(
        harness.world.events,
        [
            WorldEvent::PlayerPainEvent(IMP),
            WorldEvent::PlayerPain(DamageSplit::new(3, 1)),
        ]
    );
    assert_eq!(harness.presentation.sounds, [(SoundId(6004), 3)]);
    assert_eq!(harness.presentation.spawned_missiles[0].0, 0);
    assert_eq!(
        harness.presentation.animations,
        [(10, PLAYER_POS + WorldPos::new(0, -48))]
    );
    assert_eq!(harness.presentation.frames[0], (IMP, SpriteFrame::Attack(1)));
    assert_eq!(
        harness.presentation.frames.last(),
        Some(&(IMP, SpriteFrame::Idle))
    );
    assert!(harness.presentation.live_missiles.is_empty());
}

#[test]
fn every_subtype_seeds_strikes_from_its_timing() {
    for kind in MonsterKind::ALL {
        let attacker = monster(IMP.0, kind, "Attacker", north_of_player());
        let world = MockWorld::new(player(WeaponId::Pistol)).with(attacker, 4096);
        let mut harness = Harness::new(world, ScriptedFormulas::default());

        harness.attack(Engagement::MonsterAttacksPlayer { attacker: IMP });

        let tables = harness.session.tables();
        let strikes = tables.timing(kind).strikes;
        assert_eq!(harness.session.weapon(), tables.attacks(kind).primary, "{kind}");
        assert_eq!(harness.session.strikes_left(), strikes, "{kind}");
        assert_eq!(harness.session.strikes_per_attack(), strikes, "{kind}");
    }
}

#[test]
fn troop_claws_three_times() {
    const TROOP: EntityId = EntityId(7);
    let world = MockWorld::new(player(WeaponId::Pistol)).with(
        monster(TROOP.0, MonsterKind::Troop, "Troop", north_of_player()),
        4096,
    );
    let formulas = ScriptedFormulas::default()
        .hits([HitType::Hit; 3])
        .damage([DamageSplit::new(2, 0); 3]);
    let mut harness = Harness::new(world, formulas);

    harness.attack(Engagement::MonsterAttacksPlayer { attacker: TROOP });
    assert_eq!(harness.session.strikes_per_attack(), 3);

    let mut seen = vec![harness.session.strikes_left()];
    while !harness.frame() {
        let left = harness.session.strikes_left();
        if seen.last() != Some(&left) {
            seen.push(left);
        }
    }

    assert_eq!(seen, [3, 2, 1, 0]);
    assert_eq!(harness.formulas.hit_calls, 3);
    assert_eq!(harness.session.total_damage(), 6);
    assert!(
        harness
            .world
            .events
            .contains(&WorldEvent::PlayerPain(DamageSplit::new(6, 0)))
    );
}

#[test]
fn missed_attack_is_dodged() {
    let mut harness = imp_attacks(ScriptedFormulas::default().hits([HitType::Miss]), false);

    harness.attack(Engagement::MonsterAttacksPlayer { attacker: IMP });
    harness.run_to_end();

    assert_eq!(harness.presentation.last_message(), Some("Dodged!"));
    assert!(harness.world.events.is_empty());
    assert!(harness.presentation.animations.is_empty());
}

#[test]
fn alternate_attack_throws_a_fireball() {
    let formulas = ScriptedFormulas::default()
        .hits([HitType::Critical])
        .damage([DamageSplit::new(4, 0)]);
    let mut harness = imp_attacks(formulas, true);

    harness.attack(Engagement::MonsterAttacksPlayer { attacker: IMP });
    assert_eq!(harness.session.weapon(), WeaponId::Fireball);
    harness.run_to_end();

    assert_eq!(harness.presentation.spawned_missiles[0], (204, north_of_player()));
    assert!(
        harness
            .presentation
            .frames
            .contains(&(IMP, SpriteFrame::Attack(5)))
    );
    assert_eq!(harness.presentation.sounds, [(SoundId(6005), 3)]);
    assert!(harness.session.got_crit());
    assert_eq!(harness.formulas.powers, [512]);
}

fn raise_scene(blocked: bool) -> Harness {
    let corpse_pos = PLAYER_POS.offset_tiles(2, 0);
    let mut corpse = monster(IMP.0, MonsterKind::Imp, "Imp", corpse_pos);
    corpse.stats.health = 0;
    corpse.flags.active = false;

    let mut archvile = monster(
        ARCHVILE.0,
        MonsterKind::Archvile,
        "Archvile",
        PLAYER_POS.offset_tiles(3, 0),
    );
    archvile.flags.raise_caster = true;

    let mut world = MockWorld::new(player(WeaponId::Pistol))
        .with(corpse, 16384)
        .with(archvile, 36864);
    if blocked {
        world.block(corpse_pos);
    }
    Harness::new(world, ScriptedFormulas::default())
}

#[test]
fn archvile_raises_a_corpse() {
    let mut harness = raise_scene(false);

    harness.attack(Engagement::MonsterAttacksMonster {
        attacker: ARCHVILE,
        target: IMP,
    });
    assert_eq!(harness.session.weapon(), WeaponId::Raise);
    harness.run_to_end();

    assert_eq!(harness.presentation.messages[0], "Archvile casts raise\u{7f}");
    assert_eq!(harness.presentation.last_message(), Some("Imp is revived!"));
    assert_eq!(harness.presentation.sounds, [(SoundId::RAISE, 3)]);
    assert_eq!(harness.world.events, [WorldEvent::Revived(IMP)]);
    assert_eq!(harness.world.entities[&IMP].stats.health, 9);
    assert!(harness.presentation.frames.contains(&(IMP, SpriteFrame::Idle)));
    // the ritual never consults the formulas
    assert_eq!(harness.formulas.hit_calls, 0);
}

#[test]
fn blocked_corpse_cannot_rise() {
    let mut harness = raise_scene(true);

    harness.attack(Engagement::MonsterAttacksMonster {
        attacker: ARCHVILE,
        target: IMP,
    });
    harness.run_to_end();

    assert_eq!(harness.presentation.last_message(), Some("Raise failed!"));
    assert!(harness.world.events.is_empty());
    assert_eq!(harness.world.entities[&IMP].stats.health, 0);
}

#[test]
fn infighting_kills_the_target() {
    let mut harness = raise_scene(false);
    if let Some(vile) = harness.world.entities.get_mut(&ARCHVILE) {
        vile.flags.raise_caster = false;
    }
    if let Some(imp) = harness.world.entities.get_mut(&IMP) {
        imp.stats.health = 9;
        imp.flags.active = true;
    }

    harness.attack(Engagement::MonsterAttacksMonster {
        attacker: ARCHVILE,
        target: IMP,
    });
    assert_eq!(harness.session.weapon(), WeaponId::MeleeAttack3);
    harness.run_to_end();

    assert!(harness.world.died(IMP));
    assert_eq!(harness.session.total_damage(), 1);
}

#[test]
fn scenery_cannot_attack() {
    let crate_id = EntityId(9);
    let world = MockWorld::new(player(WeaponId::Pistol)).with(
        object(crate_id.0, TargetKind::Destructible, "Crate", north_of_player()),
        4096,
    );
    let mut harness = Harness::new(world, ScriptedFormulas::default());

    harness.attack(Engagement::MonsterAttacksPlayer { attacker: crate_id });

    assert!(harness.session.is_concluded());
    assert!(harness.frame());
    assert!(harness.presentation.messages.is_empty());
    assert!(!harness.presentation.in_combat_view);
}
