use std::{env, path::PathBuf, time::Duration};

use crate::core::CaptionLayout;
use crate::types::FRAME_DELAY_MS;

// Runtime knobs (not gameplay tuning). Read once at startup.

/// Terminals without release events get a synthesized key-up after this long.
pub const DEFAULT_KEY_RELEASE_MS: u64 = 600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub frame_delay: Duration,
    /// `None` means the bundled sprite.
    pub sprite_path: Option<PathBuf>,
    pub captions: CaptionLayout,
    pub key_release_timeout: Duration,
    /// Log file; logging is off when unset since stdout belongs to the screen.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(FRAME_DELAY_MS),
            sprite_path: None,
            captions: CaptionLayout::default(),
            key_release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_MS),
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparsable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let millis = |key: &str, fallback: Duration| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(fallback)
        };
        let path = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        };

        Self {
            frame_delay: millis("PANZER_FRAME_DELAY_MS", defaults.frame_delay),
            sprite_path: path("PANZER_SPRITE"),
            captions: lookup("PANZER_CAPTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.captions),
            key_release_timeout: millis("PANZER_KEY_RELEASE_MS", defaults.key_release_timeout),
            log_file: path("PANZER_LOG"),
        }
    }
}
