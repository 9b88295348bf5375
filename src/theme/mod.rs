// Theme manifest builder
//
// Turns (flavor, accent, variant mode) into a Thunderbird theme manifest.
// Pure: no IO, no shared state. The same inputs always produce the same
// manifest, down to the serialized bytes.
//
// Variant modes:
// - Manual:   light and dark dictionaries both come from the flavor
// - Auto:     light comes from the reference flavor, scheme follows the OS
// - Combined: dark flavor paired with the reference flavor as its light half

mod accent;
mod colors;
mod identity;

pub use accent::Accent;
pub use colors::{COLOR_KEYS, EXPERIMENT_COLORS, ICONS};
pub use identity::gecko_id;

use crate::palette::{Flavor, Palette};
use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

pub const MANIFEST_VERSION: u32 = 2;
pub const THEME_VERSION: &str = "1.0.0";
pub const STRICT_MIN_VERSION: &str = "60.0";
pub const EXPERIMENT_STYLESHEET: &str = "styles.css";

// ─────────────────────────────────────────────────────────────────────────────
// Variant Mode
// ─────────────────────────────────────────────────────────────────────────────

/// How the light half of a theme is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum VariantMode {
    /// Light and dark both use the flavor itself
    Manual,
    /// Light uses the reference flavor; Thunderbird follows the OS setting
    Auto,
    /// Dark flavors only: reference flavor for light, flavor for dark
    Combined,
}

impl VariantMode {
    pub const ALL: [VariantMode; 3] = [Self::Manual, Self::Auto, Self::Combined];

    /// Parse a mode name from config (accepts output directory names too)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "manual" | "default" => Some(Self::Manual),
            "auto" => Some(Self::Auto),
            "combined" | "dark-light" => Some(Self::Combined),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Auto => "auto",
            Self::Combined => "combined",
        }
    }

    /// Output subdirectory under the themes root
    pub fn output_dir(&self) -> &'static str {
        match self {
            Self::Manual => "default",
            Self::Auto => "auto",
            Self::Combined => "dark-light",
        }
    }
}

impl fmt::Display for VariantMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Manifest Types (field order is serialization order)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
    Auto,
}

/// Root of `manifest.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeManifest {
    pub manifest_version: u32,
    pub name: String,
    pub version: String,
    pub applications: Applications,
    pub description: String,
    pub icons: IndexMap<String, String>,
    pub theme_experiment: ThemeExperiment,
    pub theme: ThemeVariant,
    pub dark_theme: ThemeVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applications {
    pub gecko: Gecko,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gecko {
    pub id: String,
    pub strict_min_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeExperiment {
    pub stylesheet: String,
    pub colors: IndexMap<String, String>,
}

/// One appearance (light `theme` or `dark_theme`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeVariant {
    pub colors: IndexMap<String, String>,
    pub properties: ThemeProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeProperties {
    pub color_scheme: ColorScheme,
}

impl ThemeManifest {
    /// Pretty JSON with 2-space indentation
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    #[allow(dead_code)] // Round-trip checks in tests
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Builder
// ─────────────────────────────────────────────────────────────────────────────

/// `catppuccin-<identifier>-<accent>`
pub fn theme_name(identifier: &str, accent: Accent) -> String {
    format!("catppuccin-{}-{}", identifier, accent)
}

/// Resolve every manifest color key against a flavor
pub fn resolve_colors(accent: Accent, flavor: &Flavor) -> Result<IndexMap<String, String>> {
    COLOR_KEYS
        .iter()
        .map(|(key, role)| {
            let hex = flavor.hex(role.palette_key(accent))?;
            Ok((key.to_string(), hex.to_string()))
        })
        .collect()
}

fn table(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Build the manifest for one (flavor, accent, mode).
///
/// Returns `Ok(None)` when the mode does not apply to the flavor: auto mode
/// on the reference flavor itself, or combined mode on a light flavor.
/// A role missing from the palette is an error.
pub fn build_manifest(
    palette: &Palette,
    flavor: &Flavor,
    accent: Accent,
    mode: VariantMode,
) -> Result<Option<ThemeManifest>> {
    let reference = palette.reference();

    let light_source = match mode {
        VariantMode::Manual => flavor,
        VariantMode::Auto if palette.is_reference(flavor) => return Ok(None),
        VariantMode::Combined if !flavor.dark => return Ok(None),
        VariantMode::Auto | VariantMode::Combined => reference,
    };

    let (light_scheme, dark_scheme) = match mode {
        VariantMode::Manual if flavor.dark => (ColorScheme::Dark, ColorScheme::Dark),
        VariantMode::Manual => (ColorScheme::Light, ColorScheme::Light),
        VariantMode::Auto => (ColorScheme::Auto, ColorScheme::Auto),
        VariantMode::Combined => (ColorScheme::Light, ColorScheme::Dark),
    };

    let dark_colors = resolve_colors(accent, flavor)?;
    let light_colors = if std::ptr::eq(light_source, flavor) {
        dark_colors.clone()
    } else {
        resolve_colors(accent, light_source)?
    };

    let name = theme_name(&flavor.identifier, accent);
    let accent_name = &flavor.color(accent.as_str())?.name;

    Ok(Some(ThemeManifest {
        manifest_version: MANIFEST_VERSION,
        version: THEME_VERSION.to_string(),
        applications: Applications {
            gecko: Gecko {
                id: gecko_id(&name),
                strict_min_version: STRICT_MIN_VERSION.to_string(),
            },
        },
        description: format!(
            "Soothing pastel theme for Thunderbird - {} {}",
            flavor.name, accent_name
        ),
        name,
        icons: table(ICONS),
        theme_experiment: ThemeExperiment {
            stylesheet: EXPERIMENT_STYLESHEET.to_string(),
            colors: table(EXPERIMENT_COLORS),
        },
        theme: ThemeVariant {
            colors: light_colors,
            properties: ThemeProperties {
                color_scheme: light_scheme,
            },
        },
        dark_theme: ThemeVariant {
            colors: dark_colors,
            properties: ThemeProperties {
                color_scheme: dark_scheme,
            },
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::DEFAULT_REFERENCE_FLAVOR;

    fn palette() -> Palette {
        Palette::bundled(DEFAULT_REFERENCE_FLAVOR).unwrap()
    }

    fn build(
        palette: &Palette,
        flavor: &str,
        accent: Accent,
        mode: VariantMode,
    ) -> Option<ThemeManifest> {
        let flavor = palette.flavor(flavor).unwrap();
        build_manifest(palette, flavor, accent, mode).unwrap()
    }

    #[test]
    fn test_mocha_mauve_manual() {
        let palette = palette();
        let mocha = palette.flavor("mocha").unwrap();
        let manifest = build(&palette, "mocha", Accent::Mauve, VariantMode::Manual).unwrap();

        assert_eq!(manifest.name, "catppuccin-mocha-mauve");
        assert_eq!(manifest.manifest_version, 2);
        assert_eq!(manifest.version, "1.0.0");
        assert_eq!(manifest.applications.gecko.strict_min_version, "60.0");
        assert_eq!(
            manifest.applications.gecko.id,
            "{47f5c9df-1d03-5424-ae9e-0613b69a9d2f}"
        );
        assert_eq!(
            manifest.description,
            "Soothing pastel theme for Thunderbird - Mocha Mauve"
        );
        assert_eq!(manifest.theme.properties.color_scheme, ColorScheme::Dark);
        assert_eq!(manifest.theme.colors["frame"], mocha.hex("base").unwrap());
        assert_eq!(
            manifest.theme.colors["button_background_active"],
            mocha.hex("mauve").unwrap()
        );
        assert_eq!(manifest.theme.colors["color_gray_50"], mocha.hex("surface1").unwrap());
        assert_eq!(manifest.theme.colors.len(), COLOR_KEYS.len());
    }

    #[test]
    fn test_manual_light_and_dark_match_for_every_flavor() {
        let palette = palette();
        for flavor in palette.flavors() {
            for accent in Accent::ALL {
                let manifest = build_manifest(&palette, flavor, accent, VariantMode::Manual)
                    .unwrap()
                    .expect("manual mode always applies");
                assert_eq!(manifest.name, format!("catppuccin-{}-{}", flavor.identifier, accent));
                assert_eq!(manifest.theme.colors, manifest.dark_theme.colors);
            }
        }
    }

    #[test]
    fn test_latte_manual_is_light() {
        let palette = palette();
        let manifest = build(&palette, "latte", Accent::Blue, VariantMode::Manual).unwrap();
        assert_eq!(manifest.theme.properties.color_scheme, ColorScheme::Light);
        assert_eq!(manifest.dark_theme.properties.color_scheme, ColorScheme::Light);
    }

    #[test]
    fn test_auto_uses_reference_for_light() {
        let palette = palette();
        let latte = build(&palette, "latte", Accent::Teal, VariantMode::Manual).unwrap();
        let mocha = build(&palette, "mocha", Accent::Teal, VariantMode::Manual).unwrap();

        let auto = build(&palette, "mocha", Accent::Teal, VariantMode::Auto).unwrap();
        assert_eq!(auto.theme.colors, latte.theme.colors);
        assert_eq!(auto.dark_theme.colors, mocha.dark_theme.colors);
        assert_eq!(auto.theme.properties.color_scheme, ColorScheme::Auto);
        assert_eq!(auto.dark_theme.properties.color_scheme, ColorScheme::Auto);
        assert_eq!(auto.name, mocha.name);
    }

    #[test]
    fn test_auto_on_reference_flavor_is_absent() {
        let palette = palette();
        for accent in Accent::ALL {
            assert!(build(&palette, "latte", accent, VariantMode::Auto).is_none());
        }
    }

    #[test]
    fn test_combined_requires_dark_flavor() {
        let palette = palette();
        assert!(build(&palette, "latte", Accent::Red, VariantMode::Combined).is_none());

        let latte = build(&palette, "latte", Accent::Red, VariantMode::Manual).unwrap();
        let frappe = build(&palette, "frappe", Accent::Red, VariantMode::Manual).unwrap();
        let combined = build(&palette, "frappe", Accent::Red, VariantMode::Combined).unwrap();

        assert_eq!(combined.theme.colors, latte.theme.colors);
        assert_eq!(combined.dark_theme.colors, frappe.dark_theme.colors);
        assert_eq!(combined.theme.properties.color_scheme, ColorScheme::Light);
        assert_eq!(combined.dark_theme.properties.color_scheme, ColorScheme::Dark);
    }

    #[test]
    fn test_missing_accent_is_an_error() {
        let flavor = Flavor::from_str(
            r##"
[meta]
identifier = "partial"
name = "Partial"
dark = true

[colors]
base = { name = "Base", hex = "#000000" }
"##,
        )
        .unwrap();
        let latte = palette().reference().clone();
        let palette = Palette::new(vec![latte, flavor.clone()], "latte").unwrap();

        let err = build_manifest(&palette, &flavor, Accent::Mauve, VariantMode::Manual)
            .unwrap_err();
        assert!(err.to_string().contains("partial"), "{err}");
    }

    #[test]
    fn test_json_layout() {
        let palette = palette();
        let manifest = build(&palette, "mocha", Accent::Mauve, VariantMode::Manual).unwrap();
        let json = manifest.to_json().unwrap();

        assert!(json.starts_with(
            "{\n  \"manifest_version\": 2,\n  \"name\": \"catppuccin-mocha-mauve\","
        ));
        assert!(json.contains("\"icons\": {\n    \"16\": \"images/icon16.png\",\n    \"48\""));
        assert!(json.contains("\"color_scheme\": \"dark\""));

        let order = [
            "\"version\"",
            "\"applications\"",
            "\"description\"",
            "\"icons\"",
            "\"theme_experiment\"",
            "\"theme\"",
            "\"dark_theme\"",
        ];
        let positions: Vec<_> = order.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_json_round_trip_is_byte_identical() {
        let palette = palette();
        let manifest = build(&palette, "frappe", Accent::Sapphire, VariantMode::Combined).unwrap();
        let json = manifest.to_json().unwrap();
        let parsed = ThemeManifest::from_json(&json).unwrap();

        assert_eq!(parsed, manifest);
        assert_eq!(parsed.to_json().unwrap(), json);
    }

    #[test]
    fn test_variant_mode_names() {
        assert_eq!(VariantMode::from_str("default"), Some(VariantMode::Manual));
        assert_eq!(VariantMode::from_str("dark-light"), Some(VariantMode::Combined));
        assert_eq!(VariantMode::from_str("AUTO"), Some(VariantMode::Auto));
        assert_eq!(VariantMode::from_str("sepia"), None);
        assert_eq!(VariantMode::Combined.output_dir(), "dark-light");
    }
}
