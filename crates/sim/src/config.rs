//! Simulator runtime configuration.
use std::env;
use std::path::PathBuf;

/// Settings for one headless replay run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Directory holding `weapons.toml` and `monsters.toml`.
    pub data_dir: PathBuf,
    /// Session seed mixed into every encounter's RNG stream.
    pub seed: u64,
    /// Simulated milliseconds per frame.
    pub frame_ms: u64,
    /// Frames an encounter may run before the replay gives up on it.
    pub max_frames: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            seed: 0x5eed,
            frame_ms: 16,
            max_frames: 2_000,
        }
    }
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `COMBAT_DATA_DIR` - Stat file directory (default: `data`)
    /// - `COMBAT_SEED` - Session seed (default: 0x5eed)
    /// - `COMBAT_FRAME_MS` - Milliseconds per frame (default: 16, minimum 1)
    /// - `COMBAT_MAX_FRAMES` - Frame cap per encounter (default: 2000)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("COMBAT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(seed) = read_env::<u64>("COMBAT_SEED") {
            config.seed = seed;
        }
        if let Some(frame_ms) = read_env::<u64>("COMBAT_FRAME_MS") {
            config.frame_ms = frame_ms.max(1);
        }
        if let Some(max_frames) = read_env::<u32>("COMBAT_MAX_FRAMES") {
            config.max_frames = max_frames.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = SimConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert!(config.frame_ms > 0);
        assert!(config.max_frames > 0);
    }
}
