//! Traits describing the collaborators the combat core drives.
//!
//! The core owns only its sequencing state. Entity bookkeeping, stat
//! formulas, rendering and audio, stat overrides and randomness all sit
//! behind the traits here, and [`CombatEnv`] bundles one frame's worth of
//! them so the sequencer can reach everything without knowing concrete types.
mod config;
mod formulas;
mod presentation;
mod rng;
mod world;

pub use config::ConfigSource;
pub use formulas::{CombatFormulas, DamageSplit, DistanceBucket, HitType};
pub use presentation::{
    HudLayout, ParticleBurst, Presentation, RenderMode, SoundId, Span, SpriteFrame, Viewport,
    channel,
};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use world::{FeatureMask, WorldOracle};

/// Mutable collaborators handed to the sequencer for one frame.
pub struct CombatEnv<'a> {
    pub formulas: &'a mut dyn CombatFormulas,
    pub world: &'a mut dyn WorldOracle,
    pub presentation: &'a mut dyn Presentation,
    pub rng: &'a mut dyn RngOracle,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        formulas: &'a mut dyn CombatFormulas,
        world: &'a mut dyn WorldOracle,
        presentation: &'a mut dyn Presentation,
        rng: &'a mut dyn RngOracle,
    ) -> Self {
        Self {
            formulas,
            world,
            presentation,
            rng,
        }
    }
}
