// Palette - the flavors and named color roles every theme is built from
//
// Loading priority:
// 1. External TOML flavors from `palette_dir` (every *.toml file)
// 2. Bundled flavors (compiled into the binary)
//
// A palette is immutable once loaded and shared read-only across build tasks.

mod bundled;
mod toml_format;

pub use toml_format::TomlFlavor;

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use std::path::Path;

/// Identifier of the always-light flavor used for the light half of
/// auto and combined themes.
pub const DEFAULT_REFERENCE_FLAVOR: &str = "latte";

/// A named color slot in a flavor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    /// Display name ("Mauve", "Surface 0")
    pub name: String,
    /// `#rrggbb`
    pub hex: String,
}

/// A complete palette variant
#[derive(Debug, Clone)]
pub struct Flavor {
    pub identifier: String,
    pub name: String,
    pub order: u32,
    pub dark: bool,
    colors: IndexMap<String, ColorEntry>,
}

impl Flavor {
    /// Build a flavor from its TOML form, rejecting malformed hex values
    pub fn from_toml(toml: TomlFlavor) -> Result<Self> {
        let identifier = toml.meta.identifier;
        let mut colors = IndexMap::with_capacity(toml.colors.len());

        for (role, color) in toml.colors {
            if !TomlFlavor::is_valid_hex(&color.hex) {
                bail!(
                    "flavor '{}': role '{}' has invalid hex value '{}'",
                    identifier,
                    role,
                    color.hex
                );
            }
            colors.insert(
                role,
                ColorEntry {
                    name: color.name,
                    hex: color.hex.to_lowercase(),
                },
            );
        }

        Ok(Self {
            identifier,
            name: toml.meta.name,
            order: toml.meta.order,
            dark: toml.meta.dark,
            colors,
        })
    }

    /// Parse a flavor from TOML text
    pub fn from_str(content: &str) -> Result<Self> {
        Self::from_toml(TomlFlavor::from_str(content)?)
    }

    /// Look up a role. A missing role is a defect in the palette data.
    pub fn color(&self, role: &str) -> Result<&ColorEntry> {
        self.colors
            .get(role)
            .with_context(|| format!("flavor '{}' has no color role '{}'", self.identifier, role))
    }

    /// Hex value of a role
    pub fn hex(&self, role: &str) -> Result<&str> {
        self.color(role).map(|c| c.hex.as_str())
    }

    /// Number of color roles defined
    pub fn role_count(&self) -> usize {
        self.colors.len()
    }
}

/// The full set of flavors plus the designated light reference flavor
#[derive(Debug, Clone)]
pub struct Palette {
    flavors: Vec<Flavor>,
    reference: String,
}

impl Palette {
    /// Assemble a palette, ordering flavors and validating the reference flavor
    pub fn new(mut flavors: Vec<Flavor>, reference: &str) -> Result<Self> {
        if flavors.is_empty() {
            bail!("palette contains no flavors");
        }

        flavors.sort_by(|a, b| {
            a.order
                .cmp(&b.order)
                .then_with(|| a.identifier.cmp(&b.identifier))
        });

        for pair in flavors.windows(2) {
            if pair[0].identifier == pair[1].identifier {
                bail!("flavor '{}' is defined twice", pair[0].identifier);
            }
        }

        let Some(light) = flavors.iter().find(|f| f.identifier == reference) else {
            bail!("reference flavor '{}' is not in the palette", reference);
        };
        if light.dark {
            tracing::warn!(
                "Reference flavor '{}' is marked dark; auto themes will have no light variant",
                reference
            );
        }

        Ok(Self {
            flavors,
            reference: reference.to_string(),
        })
    }

    /// The flavors compiled into the binary
    pub fn bundled(reference: &str) -> Result<Self> {
        let flavors = bundled::BUNDLED_FLAVORS
            .iter()
            .map(|b| {
                Flavor::from_str(b.content)
                    .with_context(|| format!("bundled flavor {} is malformed", b.filename))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(flavors, reference)
    }

    /// Load every `*.toml` file in a directory as a flavor
    pub fn from_dir(dir: &Path, reference: &str) -> Result<Self> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("cannot read palette directory {}", dir.display()))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "toml") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut flavors = Vec::with_capacity(paths.len());
        for path in paths {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read flavor file {}", path.display()))?;
            let flavor = Flavor::from_str(&contents)
                .with_context(|| format!("invalid flavor file {}", path.display()))?;
            tracing::debug!("Loaded flavor '{}' from {}", flavor.identifier, path.display());
            flavors.push(flavor);
        }

        Self::new(flavors, reference)
    }

    /// Load from `palette_dir` when set, bundled flavors otherwise
    pub fn load(palette_dir: Option<&Path>, reference: &str) -> Result<Self> {
        match palette_dir {
            Some(dir) => Self::from_dir(dir, reference),
            None => Self::bundled(reference),
        }
    }

    pub fn flavors(&self) -> &[Flavor] {
        &self.flavors
    }

    #[allow(dead_code)] // Lookup by name for tests and tooling
    pub fn flavor(&self, identifier: &str) -> Option<&Flavor> {
        self.flavors.iter().find(|f| f.identifier == identifier)
    }

    /// The always-light reference flavor (presence checked in `new`)
    pub fn reference(&self) -> &Flavor {
        self.flavors
            .iter()
            .find(|f| f.identifier == self.reference)
            .unwrap_or(&self.flavors[0])
    }

    pub fn is_reference(&self, flavor: &Flavor) -> bool {
        flavor.identifier == self.reference
    }
}
