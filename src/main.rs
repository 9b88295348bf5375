// Catppuccin for Thunderbird - theme package generator
//
// Builds one .xpi theme package per (flavor, accent, variant mode).
//
// Architecture:
// - Palette: flavors and their named color roles (bundled TOML or external dir)
// - Theme: pure builder from (flavor, accent, mode) to a manifest
// - Package: zips manifest.json and the icons, writes the archive
// - Generator: fans out one tokio task per flavor

mod cli;
mod config;
mod generator;
mod logging;
mod package;
mod palette;
mod startup;
mod theme;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{BuildArgs, Cli, Commands};
use config::Config;
use generator::Generator;
use package::Icons;
use palette::Palette;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;

    let build_args = match cli.command {
        Some(Commands::List) => return cli::handle_list(&config),
        Some(Commands::Config { show, path, init }) => {
            return cli::handle_config(&config, show, path, init)
        }
        Some(Commands::Build(args)) => args,
        None => BuildArgs::default(),
    };
    build_args.apply(&mut config);

    // The guard must stay alive until exit so file logs flush
    let _log_guard = logging::init(&config.logging);

    run_build(&config).await
}

async fn run_build(config: &Config) -> Result<()> {
    let palette = Palette::load(config.palette_dir.as_deref(), &config.reference_flavor)?;
    startup::print_startup(config, &palette);

    let icons = Icons::load(&config.assets_dir)
        .await
        .with_context(|| format!("loading icons from {}", config.assets_dir.display()))?;

    tracing::info!(
        "Building {} flavor(s) x {} accent(s) into {}",
        palette.flavors().len(),
        theme::Accent::ALL.len(),
        config.output_dir.display()
    );

    let generator = Generator::new(palette, icons, config.output_dir.clone(), &config.modes);
    let report = generator.run().await?;

    tracing::info!(
        written = report.written,
        skipped = report.skipped,
        "Built in {} ms",
        report.elapsed.as_millis()
    );
    startup::print_summary(config, &report);
    Ok(())
}
