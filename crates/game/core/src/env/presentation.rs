use crate::state::{EntityId, Rgb, SpriteHandle, WorldPos};

/// Identifier of a sound resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundId(pub u16);

impl SoundId {
    pub const BFG_FIRE: Self = Self(5052);
    pub const AXE_FLESH: Self = Self(5136);
    pub const RAISE: Self = Self(5124);
    /// Player weapon sounds are laid out from here by weapon slot.
    pub const WEAPON_BASE: Self = Self(5044);
}

/// Mixer channels used by combat.
pub mod channel {
    pub const PAIN: u8 = 2;
    pub const MONSTER_ATTACK: u8 = 3;
    pub const PLAYER_WEAPON: u8 = 5;
}

/// How a sprite is composited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderMode {
    #[default]
    Normal,
    Additive,
}

/// Frame shown on an entity's sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpriteFrame {
    Idle,
    /// Attack frame index from the monster's sheet.
    Attack(u8),
    Pain,
}

/// Inclusive integer range for one particle parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub min: i32,
    pub max: i32,
}

impl Span {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

/// Screen rectangle particles are clipped to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Dimensions the particle presets size their viewports from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HudLayout {
    pub screen_width: i32,
    pub screen_height: i32,
    pub display_width: i32,
    pub display_height: i32,
    pub status_top_bar_height: i32,
    pub status_bar_height: i32,
}

/// Full configuration of one particle emission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticleBurst {
    pub velocity_x: Span,
    pub velocity_y: Span,
    pub start_x: Span,
    pub start_y: Span,
    pub size: Span,
    pub gravity: i32,
    pub color: Rgb,
    pub viewport: Viewport,
    pub count: i32,
    /// Range tier of the target, scales particle size.
    pub depth: u8,
    /// Use the gib sprite set instead of plain dots.
    pub themed: bool,
    /// Particles settle on the floor instead of falling off screen.
    pub grounded: bool,
}

/// Rendering, HUD and audio surface the combat core drives.
pub trait Presentation {
    /// Requests a view redraw; `forced` bypasses any frame skipping.
    fn request_redraw(&mut self, forced: bool);

    fn play_sound(&mut self, sound: SoundId, priority: u8, channel: u8);

    /// Returns the single HUD message buffer, cleared for a new message.
    fn begin_message(&mut self) -> &mut String;

    /// Commits the buffer returned by [`Presentation::begin_message`].
    fn finish_message(&mut self);

    fn clear_messages(&mut self);

    /// Switches the HUD into combat mode.
    fn enter_combat_view(&mut self);

    fn set_sprite_frame(&mut self, entity: EntityId, frame: SpriteFrame);

    fn hide_entity_sprite(&mut self, entity: EntityId);

    /// Allocates a projectile sprite. Invisible missiles still travel.
    fn spawn_missile(
        &mut self,
        anim: u16,
        at: WorldPos,
        render: RenderMode,
        visible: bool,
    ) -> SpriteHandle;

    fn move_missile(&mut self, sprite: SpriteHandle, to: WorldPos);

    fn retire_missile(&mut self, sprite: SpriteHandle);

    /// One-shot animation in the world (impacts, teleport puff).
    fn spawn_animation(&mut self, anim: u16, at: WorldPos, render: RenderMode);

    fn spawn_particles(&mut self, burst: &ParticleBurst);

    fn hud_layout(&self) -> HudLayout;

    /// Replaces the HUD message with `text`.
    fn post_message(&mut self, text: &str) {
        let buffer = self.begin_message();
        buffer.push_str(text);
        self.finish_message();
    }
}
