//! Text presentation: HUD messages go to a log, everything else to tracing.

use combat_core::env::{HudLayout, RenderMode, SoundId, SpriteFrame};
use combat_core::{EntityId, ParticleBurst, Presentation, SpriteHandle, WorldPos};
use tracing::{debug, trace};

/// HUD glyph that the game renders as "more follows".
const MORE_GLYPH: char = '\u{7f}';

/// Collects HUD lines in order and counts presentation traffic.
#[derive(Default)]
pub struct HudLog {
    buffer: String,
    lines: Vec<String>,
    next_sprite: u32,
    pub missiles_spawned: usize,
    pub bursts: usize,
    pub sounds: usize,
}

impl HudLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages posted since the last clear, with the "more" glyph spelled out.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lines.iter().map(|line| line.replace(MORE_GLYPH, "..."))
    }
}

impl Presentation for HudLog {
    fn request_redraw(&mut self, forced: bool) {
        trace!(forced, "redraw");
    }

    fn play_sound(&mut self, sound: SoundId, priority: u8, channel: u8) {
        self.sounds += 1;
        debug!(sound = sound.0, priority, channel, "sound");
    }

    fn begin_message(&mut self) -> &mut String {
        self.buffer.clear();
        &mut self.buffer
    }

    fn finish_message(&mut self) {
        debug!(message = %self.buffer, "hud");
        self.lines.push(self.buffer.clone());
    }

    fn clear_messages(&mut self) {
        self.lines.clear();
    }

    fn enter_combat_view(&mut self) {
        trace!("combat view");
    }

    fn set_sprite_frame(&mut self, entity: EntityId, frame: SpriteFrame) {
        trace!(%entity, ?frame, "sprite frame");
    }

    fn hide_entity_sprite(&mut self, entity: EntityId) {
        debug!(%entity, "sprite hidden");
    }

    fn spawn_missile(&mut self, anim: u16, at: WorldPos, render: RenderMode, visible: bool) -> SpriteHandle {
        self.next_sprite += 1;
        self.missiles_spawned += 1;
        debug!(anim, ?at, ?render, visible, "missile spawned");
        SpriteHandle(self.next_sprite)
    }

    fn move_missile(&mut self, sprite: SpriteHandle, to: WorldPos) {
        trace!(sprite = sprite.0, ?to, "missile moved");
    }

    fn retire_missile(&mut self, sprite: SpriteHandle) {
        trace!(sprite = sprite.0, "missile retired");
    }

    fn spawn_animation(&mut self, anim: u16, at: WorldPos, render: RenderMode) {
        debug!(anim, ?at, ?render, "animation");
    }

    fn spawn_particles(&mut self, burst: &ParticleBurst) {
        self.bursts += 1;
        debug!(count = burst.count, depth = burst.depth, themed = burst.themed, "particles");
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
