//! Configuration for the theme generator
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line overrides (applied by the caller)
//! 2. Environment variables
//! 3. Config file (./catppuccin-thunderbird.toml, then
//!    ~/.config/catppuccin-thunderbird/config.toml)
//! 4. Built-in defaults (lowest priority)
//!
//! With no config file and no environment, the defaults reproduce the
//! classic layout: palettes compiled in, icons from ./assets, packages
//! under ./themes.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::palette::DEFAULT_REFERENCE_FLAVOR;
use crate::theme::VariantMode;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project-local config file name
pub const LOCAL_CONFIG_FILE: &str = "catppuccin-thunderbird.toml";

/// Environment variables
pub const ENV_CONFIG: &str = "CTP_THUNDERBIRD_CONFIG";
pub const ENV_OUTPUT_DIR: &str = "CTP_THUNDERBIRD_OUTPUT_DIR";
pub const ENV_ASSETS_DIR: &str = "CTP_THUNDERBIRD_ASSETS_DIR";
pub const ENV_PALETTE_DIR: &str = "CTP_THUNDERBIRD_PALETTE_DIR";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Root of the generated package tree
    pub output_dir: PathBuf,

    /// Directory holding icon16.png, icon48.png and icon128.png
    pub assets_dir: PathBuf,

    /// External palette directory (bundled palettes when unset)
    pub palette_dir: Option<PathBuf>,

    /// Always-light flavor used for the light half of auto/combined themes
    pub reference_flavor: String,

    /// Variant modes to build
    pub modes: Vec<VariantMode>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("themes"),
            assets_dir: PathBuf::from("assets"),
            palette_dir: None,
            reference_flavor: DEFAULT_REFERENCE_FLAVOR.to_string(),
            modes: VariantMode::ALL.to_vec(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub output_dir: Option<String>,
    pub assets_dir: Option<String>,
    pub palette_dir: Option<String>,
    pub reference_flavor: Option<String>,
    pub modes: Option<Vec<String>>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Config file in effect: $CTP_THUNDERBIRD_CONFIG, the project-local file
    /// if present, otherwise ~/.config/catppuccin-thunderbird/config.toml
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(ENV_CONFIG) {
            return Some(PathBuf::from(path));
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }

        dirs::home_dir().map(|p| {
            p.join(".config")
                .join("catppuccin-thunderbird")
                .join("config.toml")
        })
    }

    /// Load file config if it exists.
    ///
    /// A config file that exists but does not parse is an error: a broken
    /// config should fail fast, not silently fall back to defaults.
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e).with_context(|| format!("cannot read config file {}", path.display())),
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn load() -> Result<Self> {
        let file = Self::load_file_config()?;
        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Merge a parsed config file with an environment lookup
    pub(crate) fn from_sources(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let defaults = Self::default();

        let output_dir = env(ENV_OUTPUT_DIR)
            .or(file.output_dir)
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let assets_dir = env(ENV_ASSETS_DIR)
            .or(file.assets_dir)
            .map(PathBuf::from)
            .unwrap_or(defaults.assets_dir);

        let palette_dir = env(ENV_PALETTE_DIR)
            .or(file.palette_dir)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let reference_flavor = file
            .reference_flavor
            .unwrap_or(defaults.reference_flavor);

        let modes = match file.modes {
            Some(names) => parse_modes(&names)?,
            None => defaults.modes,
        };

        let logging = LoggingConfig::from_file(file.logging);

        Ok(Self {
            output_dir,
            assets_dir,
            palette_dir,
            reference_flavor,
            modes,
            logging,
        })
    }
}

/// Parse mode names, dropping duplicates and keeping first-seen order
pub fn parse_modes(names: &[String]) -> Result<Vec<VariantMode>> {
    let mut modes = Vec::with_capacity(names.len());
    for name in names {
        let Some(mode) = VariantMode::from_str(name) else {
            bail!(
                "unknown mode '{}' (expected manual, auto or combined)",
                name
            );
        };
        if !modes.contains(&mode) {
            modes.push(mode);
        }
    }
    if modes.is_empty() {
        bail!("no variant modes selected");
    }
    Ok(modes)
}
