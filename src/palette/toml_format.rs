// TOML palette format parser
//
// Each flavor file declares its metadata and every color role explicitly.
// Nothing is derived: a role missing here is missing from the flavor.
//
// Format version: 1

use indexmap::IndexMap;
use serde::Deserialize;

/// Root structure for TOML flavor files
#[derive(Debug, Clone, Deserialize)]
pub struct TomlFlavor {
    pub meta: FlavorMeta,
    pub colors: IndexMap<String, TomlColor>,
}

/// Flavor metadata
#[derive(Debug, Clone, Deserialize)]
pub struct FlavorMeta {
    /// Lowercase key used in theme names and output paths ("frappe")
    pub identifier: String,
    /// Display name used in descriptions ("Frappé")
    pub name: String,
    /// Position in the flavor list (latte first)
    #[serde(default)]
    pub order: u32,
    pub dark: bool,
}

/// A single named color role
#[derive(Debug, Clone, Deserialize)]
pub struct TomlColor {
    pub name: String,
    pub hex: String,
}

impl TomlFlavor {
    /// Parse a TOML flavor from string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Check a color string is `#RRGGBB`
    pub fn is_valid_hex(value: &str) -> bool {
        match value.strip_prefix('#') {
            Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
            None => false,
        }
    }
}
