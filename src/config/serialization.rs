//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        let palette_dir = match &self.palette_dir {
            Some(dir) => format!("palette_dir = \"{}\"", dir.display()),
            None => "# palette_dir = \"palettes\"".to_string(),
        };
        let modes: Vec<_> = self.modes.iter().map(|m| m.as_str()).collect();

        format!(
            r#"# catppuccin-thunderbird configuration

# Root directory for generated packages
output_dir = "{output_dir}"

# Directory holding icon16.png, icon48.png and icon128.png
assets_dir = "{assets_dir}"

# Directory of *.toml flavor files replacing the bundled palette
{palette_dir}

# Always-light flavor used for the light half of auto and combined themes
reference_flavor = "{reference_flavor}"

# Variant modes to build: manual (themes/default), auto (themes/auto),
# combined (themes/dark-light)
modes = {modes:?}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            output_dir = self.output_dir.display(),
            assets_dir = self.assets_dir.display(),
            palette_dir = palette_dir,
            reference_flavor = self.reference_flavor,
            modes = modes,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
