use std::fmt;

/// Unique identifier for any entity the world layer can hand to the combat core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position in world units. One map tile spans [`WorldPos::TILE_SIZE`] units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPos {
    pub x: i32,
    pub y: i32,
}

impl WorldPos {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Width of a map tile in world units.
    pub const TILE_SIZE: i32 = 64;

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the tile-grid coordinates containing this position.
    pub const fn tile(self) -> (i32, i32) {
        (self.x >> 6, self.y >> 6)
    }

    /// Offsets this position by a whole number of tiles.
    pub const fn offset_tiles(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx * Self::TILE_SIZE,
            y: self.y + dy * Self::TILE_SIZE,
        }
    }
}

impl Default for WorldPos {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl std::ops::Add for WorldPos {
    type Output = WorldPos;
    fn add(self, rhs: WorldPos) -> WorldPos {
        WorldPos::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Monotonic frame clock in milliseconds, supplied by the host loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Opaque handle to a sprite owned by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteHandle(pub u32);

/// Packed `0xRRGGBB` colour used for particle bursts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u32);

impl Rgb {
    pub const BLOOD_RED: Self = Self(0xBB0000);
    pub const BLOOD_BLUE: Self = Self(0x0000BB);
    pub const BLOOD_GREEN: Self = Self(0x00C000);
    pub const DEBRIS: Self = Self(0xBBBBBB);
    pub const FLAME: Self = Self(0xCCCC00);
}
