//! RTL fix configuration
//!
//! Settings are read from `rtl.toml` in the current directory, with
//! environment variables taking precedence over the file.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "rtl.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RtlConfig {
    /// Text fixing settings
    pub fix: FixConfig,
}

/// Text fixing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FixConfig {
    /// Treat Extended Arabic-Indic digits as the native digit set
    pub farsi: bool,
    /// Keep rich-text tags intact while reordering
    pub fix_text_tags: bool,
    /// Keep every digit set in reading order
    pub preserve_numbers: bool,
    /// Cap on positions visited while pairing brackets and quotes
    pub pair_search_limit: Option<usize>,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            farsi: true,
            fix_text_tags: true,
            preserve_numbers: false,
            pair_search_limit: None,
        }
    }
}

fn parse_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl RtlConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `rtl.toml` from the current directory, or the defaults if it
    /// is missing or unreadable.
    pub fn load_or_default() -> Self {
        Self::load_from_file(CONFIG_FILE).unwrap_or_default()
    }

    /// Override values with `RTL_*` environment variables.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("RTL_FARSI") {
            self.fix.farsi = parse_flag(&val);
        }
        if let Ok(val) = std::env::var("RTL_FIX_TEXT_TAGS") {
            self.fix.fix_text_tags = parse_flag(&val);
        }
        if let Ok(val) = std::env::var("RTL_PRESERVE_NUMBERS") {
            self.fix.preserve_numbers = parse_flag(&val);
        }
        if let Ok(val) = std::env::var("RTL_PAIR_SEARCH_LIMIT") {
            if let Ok(limit) = val.parse::<usize>() {
                self.fix.pair_search_limit = Some(limit);
            }
        }
    }

    /// Load configuration with environment variable overrides:
    /// 1. Load from rtl.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
