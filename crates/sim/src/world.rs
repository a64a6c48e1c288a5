//! In-memory arena implementing the world collaborator.

use std::collections::{BTreeMap, HashMap, HashSet};

use combat_core::env::SoundId;
use combat_core::tables::Splash;
use combat_core::{
    CombatStats, Combatant, DamageSplit, EntityId, FeatureMask, PlayerView, Tick, WorldOracle,
    WorldPos,
};
use tracing::{debug, info};

/// Base id of per-monster attack sounds; the alternate attack is one above.
const MONSTER_SOUND_BASE: u16 = 6000;
/// Sound played when a monster takes pain.
const PAIN_SOUND: u16 = 6100;

/// Flat tile arena: a player, a few combatants and some solid tiles.
pub struct ArenaWorld {
    player: PlayerView,
    entities: BTreeMap<EntityId, Combatant>,
    walls: HashSet<(i32, i32)>,
    device_health: HashMap<EntityId, i32>,
}

impl ArenaWorld {
    pub fn new(player: PlayerView) -> Self {
        Self {
            player,
            entities: BTreeMap::new(),
            walls: HashSet::new(),
            device_health: HashMap::new(),
        }
    }

    pub fn spawn(&mut self, combatant: Combatant) {
        self.entities.insert(combatant.id, combatant);
    }

    pub fn add_wall(&mut self, at: WorldPos) {
        self.walls.insert(at.tile());
    }

    pub fn player_mut(&mut self) -> &mut PlayerView {
        &mut self.player
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Combatant> {
        self.entities.get_mut(&id)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Combatant> {
        self.entities.values()
    }

    fn occupied(&self, tile: (i32, i32)) -> bool {
        self.entities
            .values()
            .any(|e| e.flags.active && e.position.tile() == tile)
    }
}

impl WorldOracle for ArenaWorld {
    fn combatant(&self, id: EntityId) -> Option<Combatant> {
        self.entities.get(&id).cloned()
    }

    fn player(&self) -> PlayerView {
        self.player.clone()
    }

    fn distance_to_player(&self, id: EntityId) -> i32 {
        let Some(entity) = self.entities.get(&id) else {
            return i32::MAX;
        };
        let dx = i64::from(entity.position.x - self.player.position.x);
        let dy = i64::from(entity.position.y - self.player.position.y);
        i32::try_from(dx * dx + dy * dy).unwrap_or(i32::MAX)
    }

    fn is_blocked(&self, at: WorldPos, mask: FeatureMask) -> bool {
        let tile = at.tile();
        (mask.contains(FeatureMask::WORLD) && self.walls.contains(&tile))
            || (mask.contains(FeatureMask::ENEMY) && self.occupied(tile))
            || (mask.contains(FeatureMask::PLAYER_CLIP) && self.player.position.tile() == tile)
    }

    fn relocate(&mut self, id: EntityId, to: WorldPos) {
        if let Some(entity) = self.entities.get_mut(&id) {
            debug!(%id, from = ?entity.position, ?to, "relocated");
            entity.position = to;
        }
    }

    fn pain(&mut self, id: EntityId, split: DamageSplit) {
        if let Some(entity) = self.entities.get_mut(&id) {
            let stats = &mut entity.stats;
            stats.health = stats.health_after(split.health, split.armor);
            stats.armor = (stats.armor - split.armor).max(0);
            debug!(%id, health = stats.health, armor = stats.armor, "pain");
        }
    }

    fn died(&mut self, id: EntityId) {
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.stats.health = entity.stats.health.min(0);
            entity.flags.active = false;
            info!(%id, name = %entity.name, "died");
        }
    }

    fn player_pain(&mut self, split: DamageSplit) {
        let stats = &mut self.player.stats;
        stats.health = stats.health_after(split.health, split.armor);
        stats.armor = (stats.armor - split.armor).max(0);
        info!(health = stats.health, armor = stats.armor, "player hurt");
    }

    fn player_pain_event(&mut self, attacker: EntityId) {
        debug!(%attacker, "player flinches");
    }

    fn radius_hurt(&mut self, center: WorldPos, split: DamageSplit, splash: Splash, by_player: bool) {
        let tile = center.tile();
        let victims: Vec<EntityId> = self
            .entities
            .values()
            .filter(|e| e.flags.active && !e.flags.splash_immune)
            .filter(|e| {
                let (x, y) = e.position.tile();
                (x - tile.0).abs() <= 1 && (y - tile.1).abs() <= 1
            })
            .map(|e| e.id)
            .collect();
        debug!(?center, ?splash, by_player, victims = victims.len(), "splash");
        for id in victims {
            self.pain(id, split);
        }
    }

    fn revive(&mut self, id: EntityId, stats: CombatStats) {
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.stats = stats;
            entity.flags.active = true;
            info!(%id, name = %entity.name, "revived");
        }
    }

    fn device_health(&self, id: EntityId) -> i32 {
        self.device_health.get(&id).copied().unwrap_or(100)
    }

    fn set_device_health(&mut self, id: EntityId, health: i32) {
        self.device_health.insert(id, health);
    }

    fn attack_sound(&self, id: EntityId, alternate: bool) -> Option<SoundId> {
        let monster = self.entities.get(&id)?.monster()?;
        let base = MONSTER_SOUND_BASE + 2 * monster.index() as u16;
        Some(SoundId(base + u16::from(alternate)))
    }

    fn pain_sound(&mut self, id: EntityId) -> Option<SoundId> {
        self.entities.get(&id)?.monster().map(|_| SoundId(PAIN_SOUND))
    }

    fn flash_damage(&mut self, id: EntityId, until: Tick) {
        debug!(%id, %until, "damage flash");
    }

    fn show_pain(&mut self, id: EntityId, until: Tick) {
        debug!(%id, %until, "pain frame");
    }

    fn mark_gibbed(&mut self, id: EntityId) {
        debug!(%id, "gibbed");
    }
}
