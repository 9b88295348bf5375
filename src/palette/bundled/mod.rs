//! Bundled TOML palettes (compiled into binary)
//!
//! Each flavor lives in its own module file so a palette bump touches one
//! file. An external palette directory (see `Config::palette_dir`) replaces
//! this set entirely.

// ─────────────────────────────────────────────────────────────────────────────
// Flavor modules (one per flavor)
// ─────────────────────────────────────────────────────────────────────────────

mod frappe;
mod latte;
mod macchiato;
mod mocha;

pub use frappe::FLAVOR as FRAPPE;
pub use latte::FLAVOR as LATTE;
pub use macchiato::FLAVOR as MACCHIATO;
pub use mocha::FLAVOR as MOCHA;

// ─────────────────────────────────────────────────────────────────────────────
// Bundled flavor collection
// ─────────────────────────────────────────────────────────────────────────────

/// Bundled flavor: source name and TOML content
pub struct BundledFlavor {
    pub filename: &'static str,
    pub content: &'static str,
}

/// All bundled flavors
pub const BUNDLED_FLAVORS: &[BundledFlavor] = &[
    BundledFlavor {
        filename: "latte.toml",
        content: LATTE,
    },
    BundledFlavor {
        filename: "frappe.toml",
        content: FRAPPE,
    },
    BundledFlavor {
        filename: "macchiato.toml",
        content: MACCHIATO,
    },
    BundledFlavor {
        filename: "mocha.toml",
        content: MOCHA,
    },
];
