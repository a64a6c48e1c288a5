//! The scripted arena the simulator replays.

use combat_core::{
    CombatStats, Combatant, Engagement, EntityFlags, EntityId, MonsterKind, PlayerView,
    StatTables, TargetKind, WeaponId, WorldPos,
};

use crate::world::ArenaWorld;

pub const IMP: EntityId = EntityId(1);
pub const ARCHVILE: EntityId = EntityId(2);
pub const KRONOS: EntityId = EntityId(3);
pub const CRATE: EntityId = EntityId(10);
pub const COUPLING: EntityId = EntityId(11);

/// Centre of tile (5, 5).
const PLAYER_POS: WorldPos = WorldPos::new(5 * 64 + 32, 5 * 64 + 32);

/// One line of the replay script.
#[derive(Clone, Copy, Debug)]
pub enum Step {
    /// Player switches weapons.
    Equip(WeaponId),
    /// Sets the attack-selection flags a monster carries into its next turn.
    Prime {
        id: EntityId,
        alternate: bool,
        raise: bool,
    },
    Attack {
        label: &'static str,
        engagement: Engagement,
    },
}

fn monster(tables: &StatTables, id: EntityId, kind: MonsterKind, name: &str, position: WorldPos) -> Combatant {
    Combatant {
        id,
        name: name.to_owned(),
        kind: TargetKind::Enemy {
            monster: kind,
            tinted_blood: false,
        },
        flags: EntityFlags {
            active: true,
            ..EntityFlags::default()
        },
        position,
        stats: tables.monster(kind).combat_stats(),
    }
}

fn scenery(id: EntityId, kind: TargetKind, name: &str, position: WorldPos) -> Combatant {
    Combatant {
        id,
        name: name.to_owned(),
        kind,
        flags: EntityFlags {
            active: true,
            splash_immune: true,
            ..EntityFlags::default()
        },
        position,
        stats: CombatStats::new(1, 0, 0, 0, 0, 0),
    }
}

/// A walled 11x11 room with the player in the middle.
pub fn arena(tables: &StatTables) -> ArenaWorld {
    let mut world = ArenaWorld::new(PlayerView {
        position: PLAYER_POS,
        view_step: WorldPos::new(0, -WorldPos::TILE_SIZE),
        stats: CombatStats::new(100, 25, 10, 12, 12, 14),
        weapon: WeaponId::Pistol,
        ammo: [0, 40, 12, 6, 45, 0],
        berserk: false,
    });

    for i in 0..11 {
        world.add_wall(WorldPos::new(i * 64, 0));
        world.add_wall(WorldPos::new(i * 64, 10 * 64));
        world.add_wall(WorldPos::new(0, i * 64));
        world.add_wall(WorldPos::new(10 * 64, i * 64));
    }
    // pillar west of the player, so the boss has fewer places to land
    world.add_wall(PLAYER_POS.offset_tiles(-1, 0));

    world.spawn(monster(tables, IMP, MonsterKind::Imp, "Imp", PLAYER_POS.offset_tiles(0, -1)));
    world.spawn(monster(
        tables,
        ARCHVILE,
        MonsterKind::Archvile,
        "Archvile",
        PLAYER_POS.offset_tiles(2, -1),
    ));
    world.spawn(monster(tables, KRONOS, MonsterKind::Kronos, "Kronos", PLAYER_POS.offset_tiles(0, -3)));
    world.spawn(scenery(CRATE, TargetKind::Destructible, "Crate", PLAYER_POS.offset_tiles(1, 1)));
    world.spawn(scenery(
        COUPLING,
        TargetKind::PowerCoupling,
        "Power Coupling",
        PLAYER_POS.offset_tiles(1, 0),
    ));
    world
}

/// The replay: a short fight that touches every attack path.
pub fn script() -> Vec<Step> {
    vec![
        Step::Equip(WeaponId::Pistol),
        Step::Attack {
            label: "pistol at the imp",
            engagement: Engagement::PlayerAttacks { target: IMP },
        },
        Step::Attack {
            label: "imp claws back",
            engagement: Engagement::MonsterAttacksPlayer { attacker: IMP },
        },
        Step::Equip(WeaponId::Chaingun),
        Step::Attack {
            label: "chaingun burst",
            engagement: Engagement::PlayerAttacks { target: IMP },
        },
        Step::Equip(WeaponId::SuperShotgun),
        Step::Attack {
            label: "super shotgun finisher",
            engagement: Engagement::PlayerAttacks { target: IMP },
        },
        Step::Prime {
            id: ARCHVILE,
            alternate: false,
            raise: true,
        },
        Step::Attack {
            label: "archvile raises the imp",
            engagement: Engagement::MonsterAttacksMonster {
                attacker: ARCHVILE,
                target: IMP,
            },
        },
        Step::Prime {
            id: IMP,
            alternate: true,
            raise: false,
        },
        Step::Attack {
            label: "imp fireball",
            engagement: Engagement::MonsterAttacksPlayer { attacker: IMP },
        },
        Step::Equip(WeaponId::RocketLauncher),
        Step::Attack {
            label: "rocket at kronos",
            engagement: Engagement::PlayerAttacks { target: KRONOS },
        },
        Step::Attack {
            label: "second rocket at kronos",
            engagement: Engagement::PlayerAttacks { target: KRONOS },
        },
        Step::Prime {
            id: KRONOS,
            alternate: true,
            raise: false,
        },
        Step::Attack {
            label: "kronos returns fire",
            engagement: Engagement::MonsterAttacksPlayer { attacker: KRONOS },
        },
        Step::Equip(WeaponId::Axe),
        Step::Attack {
            label: "axe on the crate",
            engagement: Engagement::PlayerAttacks { target: CRATE },
        },
        Step::Equip(WeaponId::Pistol),
        Step::Attack {
            label: "pistol on the coupling",
            engagement: Engagement::PlayerAttacks { target: COUPLING },
        },
    ]
}
