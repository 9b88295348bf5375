// Startup module - build banner and summary
//
// Shows what a build is about to do (config source, palette, modes) and
// what it did (packages written, elapsed time).

use crate::config::{Config, VERSION};
use crate::generator::BuildReport;
use crate::palette::Palette;
use crate::theme::VariantMode;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Mode line for display
pub struct ModeStatus {
    pub mode: VariantMode,
    pub enabled: bool,
    pub description: &'static str,
}

/// Print the banner before building
pub fn print_startup(config: &Config, palette: &Palette) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}Catppuccin for Thunderbird{RESET} {DIM}v{VERSION}{RESET}");
    println!();

    // Config file status
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }

    let source = match &config.palette_dir {
        Some(dir) => dir.display().to_string(),
        None => "bundled".to_string(),
    };
    let flavors: Vec<_> = palette
        .flavors()
        .iter()
        .map(|f| f.identifier.as_str())
        .collect();
    println!(
        "  {DIM}Palette:{RESET} {} {DIM}({source}){RESET}",
        flavors.join(", ")
    );
    println!();

    for status in get_mode_status(config) {
        print_mode_status(&status);
    }
    println!();
}

/// Status of every mode based on config
pub fn get_mode_status(config: &Config) -> Vec<ModeStatus> {
    VariantMode::ALL
        .into_iter()
        .map(|mode| ModeStatus {
            mode,
            enabled: config.modes.contains(&mode),
            description: match mode {
                VariantMode::Manual => "light and dark from the flavor",
                VariantMode::Auto => "light half follows the system",
                VariantMode::Combined => "dark flavor with light counterpart",
            },
        })
        .collect()
}

fn print_mode_status(status: &ModeStatus) {
    use colors::*;

    if status.enabled {
        println!(
            "  {GREEN}✓{RESET} {:<10} {DIM}{:<12} {}{RESET}",
            status.mode.as_str(),
            status.mode.output_dir(),
            status.description
        );
    } else {
        println!(
            "  {DIM}○ {:<10} {:<12} (disabled){RESET}",
            status.mode.as_str(),
            status.mode.output_dir()
        );
    }
}

/// Print the result of a build
pub fn print_summary(config: &Config, report: &BuildReport) {
    use colors::*;

    println!(
        "  {MAGENTA}▸{RESET} Built {BOLD}{}{RESET} package(s) into {} in {:.1?}",
        report.written,
        config.output_dir.display(),
        report.elapsed
    );
    if report.skipped > 0 {
        println!(
            "  {DIM}  {} combination(s) skipped (mode not applicable){RESET}",
            report.skipped
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_status_follows_config() {
        let mut config = Config::default();
        config.modes = vec![VariantMode::Auto];

        let status = get_mode_status(&config);
        assert_eq!(status.len(), 3);
        let enabled: Vec<_> = status.iter().filter(|s| s.enabled).map(|s| s.mode).collect();
        assert_eq!(enabled, vec![VariantMode::Auto]);
    }
}
