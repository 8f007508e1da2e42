//! Config file loading
//!
//! Looks for `$XDG_CONFIG_HOME/tinylingo/config.toml` (or `~/.config/...`).
//! A missing file means defaults; a malformed one is an error. Every
//! `[gestures]` key is optional and falls back to the app defaults, which
//! turn vertical swipes on so settings and the menu stay reachable.
//!
//! ```toml
//! debug = false
//!
//! [gestures]
//! min_swipe_distance = 100.0
//! enable_up_swipe = true
//!
//! [[lessons]]
//! title = "Animals"
//! cards = [
//!     { word = "cat", translation = "猫", pinyin = "māo" },
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::input::GestureConfig;
use crate::shell::lesson::{builtin_lessons, Lesson};

#[derive(Debug, Clone, Deserialize)]
#[serde(from = "ConfigFile")]
pub struct Config {
    /// Verbose logging
    pub debug: bool,
    pub gestures: GestureConfig,
    /// Empty means the built-in starter lessons
    pub lessons: Vec<Lesson>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            gestures: app_gestures(),
            lessons: Vec::new(),
        }
    }
}

/// Gesture thresholds used by the app when the file doesn't override them.
/// The lesson screen needs swipe up/down, so they are on here.
fn app_gestures() -> GestureConfig {
    GestureConfig {
        enable_up_swipe: true,
        ..GestureConfig::default()
    }
}

/// On-disk layout; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    debug: bool,
    gestures: GestureOverrides,
    lessons: Vec<Lesson>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GestureOverrides {
    min_swipe_distance: Option<f64>,
    min_up_swipe_distance: Option<f64>,
    max_tap_movement: Option<f64>,
    max_tap_duration_ms: Option<u64>,
    enable_up_swipe: Option<bool>,
}

impl GestureOverrides {
    fn apply(self, base: GestureConfig) -> GestureConfig {
        GestureConfig {
            min_swipe_distance: self.min_swipe_distance.unwrap_or(base.min_swipe_distance),
            min_up_swipe_distance: self.min_up_swipe_distance.unwrap_or(base.min_up_swipe_distance),
            max_tap_movement: self.max_tap_movement.unwrap_or(base.max_tap_movement),
            max_tap_duration_ms: self.max_tap_duration_ms.unwrap_or(base.max_tap_duration_ms),
            enable_up_swipe: self.enable_up_swipe.unwrap_or(base.enable_up_swipe),
        }
    }
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        Self {
            debug: file.debug,
            gestures: file.gestures.apply(app_gestures()),
            lessons: file.lessons,
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|_| std::env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
            .join("tinylingo")
            .join("config.toml")
    }

    /// Load from `path`. `Ok(None)` means the file doesn't exist.
    ///
    /// Runs before the log subscriber is installed, so the caller reports
    /// the outcome.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = Self::parse(&contents).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        Ok(Some(config))
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;

        if let Some(empty) = config.lessons.iter().find(|l| l.cards.is_empty()) {
            return Err(ConfigError::EmptyLesson(empty.title.clone()));
        }
        Ok(config)
    }

    /// Configured lessons, or the built-in set if none were given
    pub fn into_lessons(self) -> Vec<Lesson> {
        if self.lessons.is_empty() {
            builtin_lessons()
        } else {
            self.lessons
        }
    }
}

/// Parse size string like "480x800" into (width, height)
pub fn parse_size(s: &str) -> Result<(i32, i32), ConfigError> {
    let invalid = || ConfigError::InvalidSize(s.to_string());
    let (w, h) = s.split_once('x').ok_or_else(invalid)?;
    let w: i32 = w.trim().parse().map_err(|_| invalid())?;
    let h: i32 = h.trim().parse().map_err(|_| invalid())?;
    if w <= 0 || h <= 0 {
        return Err(invalid());
    }
    Ok((w, h))
}
