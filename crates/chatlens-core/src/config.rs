//! Configuration for chatlens
//!
//! Lexicons and thresholds live in a `config.toml`, resolved in this order:
//! an explicit path, `$CHATLENS_CONFIG_DIR/config.toml`, then
//! `~/.config/chatlens/config.toml`. A missing file means built-in defaults.

pub mod lexicon;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ChatlensError, Result};

pub use types::{Config, EmojiRange, Lexicon, ParserConfig, RedFlagCategory, Thresholds};

const CONFIG_DIR: &str = "chatlens";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "CHATLENS_CONFIG_DIR";

impl Config {
    /// Default location of the user config file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    ChatlensError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::default_path()?;
                if !path.exists() {
                    debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                Self::load_from(&path)
            }
        }
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ChatlensError::io_operation("read config", path.display(), e))?;

        let config: Config = toml::from_str(&content)?;

        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Reject values the analytics engine cannot work with
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        if t.top_k == 0 {
            return Err(ChatlensError::invalid_value("thresholds.top_k", t.top_k));
        }
        for (name, value, window) in [
            (
                "thresholds.response_window_minutes",
                t.response_window_minutes,
                t.response_window(),
            ),
            (
                "thresholds.conversation_gap_minutes",
                t.conversation_gap_minutes,
                t.conversation_gap(),
            ),
            (
                "thresholds.double_text_minutes",
                t.double_text_minutes,
                t.double_text_window(),
            ),
            ("thresholds.long_gap_days", t.long_gap_days, t.long_gap()),
        ] {
            if value < 0 || window.is_none() {
                return Err(ChatlensError::invalid_value(name, value));
            }
        }
        if t.severity_medium > t.severity_high {
            return Err(ChatlensError::invalid_value(
                "thresholds.severity_medium",
                format!("{} exceeds severity_high {}", t.severity_medium, t.severity_high),
            ));
        }
        for (name, hour) in [
            ("thresholds.late_night_start", t.late_night_start),
            ("thresholds.late_night_end", t.late_night_end),
            ("thresholds.early_morning_end", t.early_morning_end),
        ] {
            if hour > 24 {
                return Err(ChatlensError::invalid_value(name, hour));
            }
        }
        for range in &self.lexicon.emoji_ranges {
            if range.start > range.end || char::from_u32(range.end).is_none() {
                return Err(ChatlensError::invalid_value(
                    "lexicon.emoji_ranges",
                    format!("{} ({:#X}..={:#X})", range.name, range.start, range.end),
                ));
            }
        }
        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ChatlensError::Other(format!("failed to serialize config: {}", e)))
    }
}
