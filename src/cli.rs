// CLI module - command-line argument parsing and handlers
//
// Running with no arguments builds every package, same as `build`.
// Subcommands:
// - build [--output DIR] [--mode MODE]...: build packages
// - list: show flavors and accents from the active palette
// - config --show | --path | --init: inspect or create the config file

use crate::config::{Config, LOCAL_CONFIG_FILE, VERSION};
use crate::palette::Palette;
use crate::theme::{Accent, VariantMode};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Catppuccin theme generator for Thunderbird
#[derive(Parser)]
#[command(name = "catppuccin-thunderbird")]
#[command(version = VERSION)]
#[command(about = "Generate Catppuccin theme packages for Thunderbird", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build theme packages (the default)
    Build(BuildArgs),

    /// List flavors and accents
    List,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Write a default config file to the current directory
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Output root (overrides config and environment)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Variant mode to build; repeat for several (default: from config)
    #[arg(long = "mode", value_enum)]
    pub modes: Vec<VariantMode>,
}

impl BuildArgs {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if !self.modes.is_empty() {
            let mut modes = Vec::with_capacity(self.modes.len());
            for mode in &self.modes {
                if !modes.contains(mode) {
                    modes.push(*mode);
                }
            }
            config.modes = modes;
        }
    }
}

pub fn handle_list(config: &Config) -> Result<()> {
    let palette = Palette::load(config.palette_dir.as_deref(), &config.reference_flavor)?;

    println!("Flavors:");
    for flavor in palette.flavors() {
        let kind = if flavor.dark { "dark" } else { "light" };
        let reference = if palette.is_reference(flavor) {
            " (reference)"
        } else {
            ""
        };
        println!(
            "  {:<10} {:<10} {:<5} {} roles{}",
            flavor.identifier,
            flavor.name,
            kind,
            flavor.role_count(),
            reference
        );
    }

    println!();
    println!("Accents:");
    for accent in Accent::ALL {
        println!("  {}", accent);
    }
    Ok(())
}

pub fn handle_config(config: &Config, show: bool, path: bool, init: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show(config);
        Ok(())
    } else if init {
        handle_config_init()
    } else {
        // No flag provided, show help
        println!("Usage: catppuccin-thunderbird config [--show|--path|--init]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
        println!("  --init    Write {} with defaults", LOCAL_CONFIG_FILE);
        Ok(())
    }
}

fn handle_config_path() -> Result<()> {
    match Config::config_path() {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => bail!("could not determine config path"),
    }
}

fn handle_config_show(config: &Config) {
    println!("# Effective configuration (flags > env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
}

fn handle_config_init() -> Result<()> {
    let path = PathBuf::from(LOCAL_CONFIG_FILE);
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("cannot write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_build() {
        let cli = Cli::try_parse_from(["catppuccin-thunderbird"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_build_args_override_config() {
        let cli = Cli::try_parse_from([
            "catppuccin-thunderbird",
            "build",
            "--output",
            "dist",
            "--mode",
            "auto",
            "--mode",
            "combined",
            "--mode",
            "auto",
        ])
        .unwrap();

        let Some(Commands::Build(args)) = cli.command else {
            panic!("expected build command");
        };
        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.output_dir, PathBuf::from("dist"));
        assert_eq!(config.modes, vec![VariantMode::Auto, VariantMode::Combined]);
    }

    #[test]
    fn test_build_without_flags_keeps_config() {
        let mut config = Config::default();
        BuildArgs::default().apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let parsed = Cli::try_parse_from(["catppuccin-thunderbird", "build", "--mode", "sepia"]);
        assert!(parsed.is_err());
    }
}
