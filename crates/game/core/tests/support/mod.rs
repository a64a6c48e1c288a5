//! Scripted collaborators for driving a `CombatSession` frame by frame.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};

use combat_core::env::{HudLayout, SoundId, SpriteFrame};
use combat_core::tables::{MonsterKind, Splash};
use combat_core::{
    CombatEnv, CombatFormulas, CombatSession, CombatStats, Combatant, DamageSplit, DistanceBucket,
    Engagement, EntityFlags, EntityId, FeatureMask, HitType, ParticleBurst, PlayerView,
    Presentation, RngOracle, SpriteHandle, StatTables, TargetKind, Tick, WeaponId, WeaponStat,
    WorldOracle, WorldPos,
};

/// Milliseconds between simulated frames.
pub const FRAME_MS: u64 = 16;

// ===== formulas =====

#[derive(Default)]
pub struct ScriptedFormulas {
    hits: VecDeque<HitType>,
    damage: VecDeque<DamageSplit>,
    pub hit_calls: usize,
    pub powers: Vec<i32>,
    pub defenders: Vec<CombatStats>,
}

impl ScriptedFormulas {
    pub fn hits(mut self, hits: impl IntoIterator<Item = HitType>) -> Self {
        self.hits.extend(hits);
        self
    }

    pub fn damage(mut self, splits: impl IntoIterator<Item = DamageSplit>) -> Self {
        self.damage.extend(splits);
        self
    }
}

impl CombatFormulas for ScriptedFormulas {
    fn calc_hit(
        &mut self,
        _attacker: &CombatStats,
        _weapon: &WeaponStat,
        _defender: &CombatStats,
        _range: DistanceBucket,
    ) -> HitType {
        self.hit_calls += 1;
        self.hits.pop_front().unwrap_or(HitType::Miss)
    }

    fn calc_damage(
        &mut self,
        _attacker: &CombatStats,
        _weapon: &WeaponStat,
        defender: &CombatStats,
        power: i32,
        _range: DistanceBucket,
    ) -> DamageSplit {
        self.powers.push(power);
        self.defenders.push(*defender);
        self.damage.pop_front().unwrap_or(DamageSplit::ZERO)
    }
}

// ===== world =====

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldEvent {
    Pain(EntityId, DamageSplit),
    Died(EntityId),
    PlayerPain(DamageSplit),
    PlayerPainEvent(EntityId),
    RadiusHurt(WorldPos, DamageSplit, Splash),
    Revived(EntityId),
    Relocated(EntityId, WorldPos),
    Gibbed(EntityId),
}

pub struct MockWorld {
    pub entities: HashMap<EntityId, Combatant>,
    pub player: PlayerView,
    pub distances: HashMap<EntityId, i32>,
    pub blocked_tiles: HashSet<(i32, i32)>,
    pub device_health: i32,
    pub events: Vec<WorldEvent>,
}

impl MockWorld {
    pub fn new(player: PlayerView) -> Self {
        Self {
            entities: HashMap::new(),
            player,
            distances: HashMap::new(),
            blocked_tiles: HashSet::new(),
            device_health: 100,
            events: Vec::new(),
        }
    }

    pub fn with(mut self, combatant: Combatant, distance: i32) -> Self {
        self.distances.insert(combatant.id, distance);
        self.entities.insert(combatant.id, combatant);
        self
    }

    pub fn block(&mut self, at: WorldPos) {
        self.blocked_tiles.insert(at.tile());
    }

    pub fn died(&self, id: EntityId) -> bool {
        self.events.contains(&WorldEvent::Died(id))
    }
}

impl WorldOracle for MockWorld {
    fn combatant(&self, id: EntityId) -> Option<Combatant> {
        self.entities.get(&id).cloned()
    }

    fn player(&self) -> PlayerView {
        self.player.clone()
    }

    fn distance_to_player(&self, id: EntityId) -> i32 {
        self.distances.get(&id).copied().unwrap_or(0)
    }

    fn is_blocked(&self, at: WorldPos, _mask: FeatureMask) -> bool {
        self.blocked_tiles.contains(&at.tile())
    }

    fn relocate(&mut self, id: EntityId, to: WorldPos) {
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.position = to;
        }
        self.events.push(WorldEvent::Relocated(id, to));
    }

    fn pain(&mut self, id: EntityId, split: DamageSplit) {
        if let Some(entity) = self.entities.get_mut(&id) {
            let stats = &mut entity.stats;
            let overflow = (split.armor - stats.armor).max(0);
            stats.armor = (stats.armor - split.armor).max(0);
            stats.health -= split.health + overflow;
        }
        self.events.push(WorldEvent::Pain(id, split));
    }

    fn died(&mut self, id: EntityId) {
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.stats.health = entity.stats.health.min(0);
            entity.flags.active = false;
        }
        self.events.push(WorldEvent::Died(id));
    }

    fn player_pain(&mut self, split: DamageSplit) {
        self.player.stats.health -= split.health;
        self.events.push(WorldEvent::PlayerPain(split));
    }

    fn player_pain_event(&mut self, attacker: EntityId) {
        self.events.push(WorldEvent::PlayerPainEvent(attacker));
    }

    fn radius_hurt(&mut self, center: WorldPos, split: DamageSplit, splash: Splash, _by_player: bool) {
        self.events.push(WorldEvent::RadiusHurt(center, split, splash));
    }

    fn revive(&mut self, id: EntityId, stats: CombatStats) {
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.stats = stats;
            entity.flags.active = true;
        }
        self.events.push(WorldEvent::Revived(id));
    }

    fn device_health(&self, _id: EntityId) -> i32 {
        self.device_health
    }

    fn set_device_health(&mut self, _id: EntityId, health: i32) {
        self.device_health = health;
    }

    fn attack_sound(&self, _id: EntityId, alternate: bool) -> Option<SoundId> {
        Some(SoundId(if alternate { 6005 } else { 6004 }))
    }

    fn pain_sound(&mut self, _id: EntityId) -> Option<SoundId> {
        Some(SoundId(6006))
    }

    fn flash_damage(&mut self, _id: EntityId, _until: Tick) {}

    fn show_pain(&mut self, _id: EntityId, _until: Tick) {}

    fn mark_gibbed(&mut self, id: EntityId) {
        self.events.push(WorldEvent::Gibbed(id));
    }
}

// ===== presentation =====

#[derive(Default)]
pub struct MockPresentation {
    buffer: String,
    pub messages: Vec<String>,
    pub sounds: Vec<(SoundId, u8)>,
    pub bursts: Vec<ParticleBurst>,
    pub animations: Vec<(u16, WorldPos)>,
    pub frames: Vec<(EntityId, SpriteFrame)>,
    pub hidden: Vec<EntityId>,
    pub spawned_missiles: Vec<(u16, WorldPos)>,
    pub live_missiles: HashSet<SpriteHandle>,
    pub in_combat_view: bool,
    next_sprite: u32,
}

impl MockPresentation {
    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl Presentation for MockPresentation {
    fn request_redraw(&mut self, _forced: bool) {}

    fn play_sound(&mut self, sound: SoundId, _priority: u8, channel: u8) {
        self.sounds.push((sound, channel));
    }

    fn begin_message(&mut self) -> &mut String {
        self.buffer.clear();
        &mut self.buffer
    }

    fn finish_message(&mut self) {
        self.messages.push(self.buffer.clone());
    }

    fn clear_messages(&mut self) {
        self.messages.clear();
    }

    fn enter_combat_view(&mut self) {
        self.in_combat_view = true;
    }

    fn set_sprite_frame(&mut self, entity: EntityId, frame: SpriteFrame) {
        self.frames.push((entity, frame));
    }

    fn hide_entity_sprite(&mut self, entity: EntityId) {
        self.hidden.push(entity);
    }

    fn spawn_missile(
        &mut self,
        anim: u16,
        at: WorldPos,
        _render: combat_core::env::RenderMode,
        _visible: bool,
    ) -> SpriteHandle {
        self.next_sprite += 1;
        let handle = SpriteHandle(self.next_sprite);
        self.spawned_missiles.push((anim, at));
        self.live_missiles.insert(handle);
        handle
    }

    fn move_missile(&mut self, sprite: SpriteHandle, _to: WorldPos) {
        assert!(self.live_missiles.contains(&sprite), "moved a retired missile");
    }

    fn retire_missile(&mut self, sprite: SpriteHandle) {
        assert!(self.live_missiles.remove(&sprite), "retired a missile twice");
    }

    fn spawn_animation(&mut self, anim: u16, at: WorldPos, _render: combat_core::env::RenderMode) {
        self.animations.push((anim, at));
    }

    fn spawn_particles(&mut self, burst: &ParticleBurst) {
        self.bursts.push(*burst);
    }

    fn hud_layout(&self) -> HudLayout {
        HudLayout {
            screen_width: 176,
            screen_height: 208,
            display_width: 176,
            display_height: 208,
            status_top_bar_height: 20,
            status_bar_height: 32,
        }
    }
}

// ===== rng =====

/// Replays a fixed byte script, then returns 255 forever.
#[derive(Default)]
pub struct ScriptedRng {
    bytes: VecDeque<u8>,
    pub drawn: usize,
}

impl ScriptedRng {
    pub fn new(bytes: impl IntoIterator<Item = u8>) -> Self {
        Self {
            bytes: bytes.into_iter().collect(),
            drawn: 0,
        }
    }
}

impl RngOracle for ScriptedRng {
    fn next_byte(&mut self) -> u8 {
        self.drawn += 1;
        self.bytes.pop_front().unwrap_or(u8::MAX)
    }
}

// ===== fixtures =====

pub const PLAYER_POS: WorldPos = WorldPos::new(5 * 64 + 32, 5 * 64 + 32);
pub const FACING_NORTH: WorldPos = WorldPos::new(0, -64);

pub fn player(weapon: WeaponId) -> PlayerView {
    PlayerView {
        position: PLAYER_POS,
        view_step: FACING_NORTH,
        stats: CombatStats::new(100, 50, 10, 12, 12, 14),
        weapon,
        ammo: [0, 50, 50, 50, 50, 50],
        berserk: false,
    }
}

pub fn monster(id: u32, kind: MonsterKind, name: &str, position: WorldPos) -> Combatant {
    Combatant {
        id: EntityId(id),
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
        stats: StatTables::defaults().monster(kind).combat_stats(),
    }
}

pub fn object(id: u32, kind: TargetKind, name: &str, position: WorldPos) -> Combatant {
    Combatant {
        id: EntityId(id),
        name: name.to_owned(),
        kind,
        flags: EntityFlags {
            active: true,
            ..EntityFlags::default()
        },
        position,
        stats: CombatStats::new(10, 0, 1, 1, 1, 1),
    }
}

/// One tile north of the player, in range bucket 1.
pub fn north_of_player() -> WorldPos {
    PLAYER_POS.offset_tiles(0, -1)
}

pub struct Harness {
    pub session: CombatSession,
    pub formulas: ScriptedFormulas,
    pub world: MockWorld,
    pub presentation: MockPresentation,
    pub rng: ScriptedRng,
    pub now: Tick,
}

impl Harness {
    pub fn new(world: MockWorld, formulas: ScriptedFormulas) -> Self {
        Self {
            session: CombatSession::new(StatTables::defaults()),
            formulas,
            world,
            presentation: MockPresentation::default(),
            rng: ScriptedRng::default(),
            now: Tick(1_000),
        }
    }

    pub fn with_rng(mut self, rng: ScriptedRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_tables(mut self, tables: StatTables) -> Self {
        self.session = CombatSession::new(tables);
        self
    }

    fn parts(&mut self) -> (&mut CombatSession, CombatEnv<'_>) {
        (
            &mut self.session,
            CombatEnv::new(
                &mut self.formulas,
                &mut self.world,
                &mut self.presentation,
                &mut self.rng,
            ),
        )
    }

    pub fn attack(&mut self, engagement: Engagement) {
        let (session, mut env) = self.parts();
        session.perform_attack(&mut env, engagement);
    }

    /// Advances one frame and returns whether the encounter concluded.
    pub fn frame(&mut self) -> bool {
        self.now = self.now + FRAME_MS;
        let now = self.now;
        let (session, mut env) = self.parts();
        session.run_frame(&mut env, now)
    }

    /// Runs frames until the encounter concludes; returns the frame count.
    pub fn run_to_end(&mut self) -> usize {
        for frame in 1..=2_000 {
            if self.frame() {
                return frame;
            }
        }
        panic!("encounter never concluded");
    }
}
