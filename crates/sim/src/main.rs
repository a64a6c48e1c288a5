//! Headless combat replay.
//!
//! Loads the stat tables, replays a scripted fight against an in-memory arena
//! and prints the HUD log of every encounter to stdout. Logs go to stderr.
mod config;
mod formulas;
mod hud;
mod scenario;
mod world;

use anyhow::{Result, bail};
use combat_content::ContentFactory;
use combat_core::env::compute_seed;
use combat_core::{CombatEnv, CombatSession, Engagement, PcgRng, Tick, WorldOracle};
use tracing::{debug, info, trace};

use config::SimConfig;
use formulas::RollFormulas;
use hud::HudLog;
use scenario::Step;
use world::ArenaWorld;

fn main() -> Result<()> {
    setup_logging();

    let config = SimConfig::from_env();
    info!(?config, "combat replay starting");

    let tables = ContentFactory::new(&config.data_dir).load_tables();
    let mut replay = Replay::new(&config, scenario::arena(&tables), CombatSession::new(tables));

    for step in scenario::script() {
        replay.apply(step)?;
    }

    let player = replay.world.player();
    println!(
        "== done: {} encounters, player {} hp / {} armor",
        replay.encounters, player.stats.health, player.stats.armor
    );
    for entity in replay.world.entities() {
        let state = if entity.flags.active { "up" } else { "down" };
        println!("   {:<16} {:>4} hp  {}", entity.name, entity.stats.health, state);
    }
    Ok(())
}

/// Installs a stderr subscriber; `RUST_LOG` overrides the INFO default.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

struct Replay<'c> {
    config: &'c SimConfig,
    world: ArenaWorld,
    session: CombatSession,
    formulas: RollFormulas,
    hud: HudLog,
    clock: Tick,
    encounters: u64,
}

impl<'c> Replay<'c> {
    fn new(config: &'c SimConfig, world: ArenaWorld, session: CombatSession) -> Self {
        Self {
            config,
            world,
            session,
            formulas: RollFormulas::new(config.seed),
            hud: HudLog::new(),
            clock: Tick::default(),
            encounters: 0,
        }
    }

    fn apply(&mut self, step: Step) -> Result<()> {
        match step {
            Step::Equip(weapon) => {
                debug!(%weapon, "equip");
                self.world.player_mut().weapon = weapon;
            }
            Step::Prime { id, alternate, raise } => {
                if let Some(entity) = self.world.entity_mut(id) {
                    entity.flags.alternate_attack = alternate;
                    entity.flags.raise_caster = raise;
                }
            }
            Step::Attack { label, engagement } => {
                if !self.ready(engagement) {
                    println!("== {label}: skipped");
                    return Ok(());
                }
                let frames = self.run(label, engagement)?;
                println!("== {label} ({frames} frames)");
                for line in self.hud.lines() {
                    println!("   {line}");
                }
            }
        }
        Ok(())
    }

    /// Living attacker, and a corpse when the attacker is raising.
    fn ready(&self, engagement: Engagement) -> bool {
        let attacker = engagement.attacker().map(|id| self.world.combatant(id));
        let target = engagement.target().map(|id| self.world.combatant(id));

        let attacker_up = match &attacker {
            None => self.world.player().stats.health > 0,
            Some(Some(attacker)) => attacker.flags.active,
            Some(None) => false,
        };
        let target_ok = match (&attacker, &target) {
            (Some(Some(caster)), Some(Some(corpse))) if caster.flags.raise_caster => {
                !corpse.flags.active
            }
            (_, Some(Some(target))) => target.flags.active,
            (_, Some(None)) => false,
            (_, None) => true,
        };
        attacker_up && target_ok
    }

    fn run(&mut self, label: &str, engagement: Engagement) -> Result<u32> {
        let attacker = engagement.attacker().map_or(0, |id| id.0);
        let mut rng = PcgRng::new(compute_seed(self.config.seed, self.encounters, attacker));
        self.encounters += 1;

        let mut env = CombatEnv::new(&mut self.formulas, &mut self.world, &mut self.hud, &mut rng);
        self.session.perform_attack(&mut env, engagement);

        for frame in 1..=self.config.max_frames {
            self.clock = self.clock + self.config.frame_ms;
            if self.session.run_frame(&mut env, self.clock) {
                debug!(
                    label,
                    total = self.session.total_damage(),
                    hit = ?self.session.hit_type(),
                    "encounter concluded"
                );
                return Ok(frame);
            }
            if engagement.is_player_attack() {
                let pose = self.session.weapon_pose(self.session.weapon(), self.clock);
                trace!(?pose, stage = ?self.session.stage(), "weapon pose");
            }
        }
        bail!("{label} did not conclude within {} frames", self.config.max_frames)
    }
}
