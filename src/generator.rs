// Generator - builds every (flavor, accent, mode) package
//
// One tokio task per flavor. Tasks share the palette and icons read-only and
// write to disjoint directories, so they need no coordination. The first
// failure aborts the build; remaining tasks are cancelled when the JoinSet
// is dropped.

use crate::package::{self, Icons};
use crate::palette::Palette;
use crate::theme::{self, Accent, VariantMode};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;

/// `<identifier>-<accent>.xpi`
pub fn package_file_name(identifier: &str, accent: Accent) -> String {
    format!("{}-{}.xpi", identifier, accent)
}

/// `<output_dir>/<mode dir>/<identifier>`
pub fn package_dir(output_dir: &Path, mode: VariantMode, identifier: &str) -> PathBuf {
    output_dir.join(mode.output_dir()).join(identifier)
}

/// Outcome of a build
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Packages written
    pub written: usize,
    /// (flavor, accent, mode) combinations the mode does not apply to
    pub skipped: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Default)]
struct FlavorReport {
    written: usize,
    skipped: usize,
}

pub struct Generator {
    palette: Arc<Palette>,
    icons: Arc<Icons>,
    output_dir: PathBuf,
    modes: Arc<[VariantMode]>,
}

impl Generator {
    pub fn new(palette: Palette, icons: Icons, output_dir: PathBuf, modes: &[VariantMode]) -> Self {
        Self {
            palette: Arc::new(palette),
            icons: Arc::new(icons),
            output_dir,
            modes: modes.into(),
        }
    }

    /// Build every package
    pub async fn run(&self) -> Result<BuildReport> {
        let start = Instant::now();
        let mut tasks = JoinSet::new();

        for index in 0..self.palette.flavors().len() {
            let palette = self.palette.clone();
            let icons = self.icons.clone();
            let output_dir = self.output_dir.clone();
            let modes = self.modes.clone();

            tasks.spawn(async move {
                generate_flavor(&palette, index, &icons, &output_dir, &modes).await
            });
        }

        let mut report = BuildReport::default();
        while let Some(joined) = tasks.join_next().await {
            let flavor = joined.context("flavor build task panicked")??;
            report.written += flavor.written;
            report.skipped += flavor.skipped;
        }

        report.elapsed = start.elapsed();
        Ok(report)
    }
}

async fn generate_flavor(
    palette: &Palette,
    index: usize,
    icons: &Icons,
    output_dir: &Path,
    modes: &[VariantMode],
) -> Result<FlavorReport> {
    let flavor = &palette.flavors()[index];
    let mut report = FlavorReport::default();

    for accent in Accent::ALL {
        let file_name = package_file_name(&flavor.identifier, accent);

        for &mode in modes {
            let manifest = theme::build_manifest(palette, flavor, accent, mode).with_context(
                || format!("building {} {} ({} mode)", flavor.identifier, accent, mode),
            )?;

            let dir = package_dir(output_dir, mode, &flavor.identifier);
            match package::write_theme(&file_name, manifest.as_ref(), &dir, icons).await? {
                Some(_) => report.written += 1,
                None => {
                    tracing::debug!(
                        "Skipping {} {}: {} mode does not apply",
                        flavor.identifier,
                        accent,
                        mode
                    );
                    report.skipped += 1;
                }
            }
        }
    }

    tracing::info!(
        "Built flavor '{}': {} package(s)",
        flavor.identifier,
        report.written
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::DEFAULT_REFERENCE_FLAVOR;
    use crate::theme::{ColorScheme, ThemeManifest};
    use std::io::{Cursor, Read};

    fn generator(output_dir: &Path, modes: &[VariantMode]) -> Generator {
        let palette = Palette::bundled(DEFAULT_REFERENCE_FLAVOR).unwrap();
        let icons = Icons::from_bytes([vec![1], vec![2], vec![3]]);
        Generator::new(palette, icons, output_dir.to_path_buf(), modes)
    }

    fn read_manifest(path: &Path) -> ThemeManifest {
        let bytes = std::fs::read(path).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut json = String::new();
        archive
            .by_name("manifest.json")
            .unwrap()
            .read_to_string(&mut json)
            .unwrap();
        ThemeManifest::from_json(&json).unwrap()
    }

    #[test]
    fn test_paths() {
        assert_eq!(package_file_name("mocha", Accent::Mauve), "mocha-mauve.xpi");
        assert_eq!(
            package_dir(Path::new("themes"), VariantMode::Manual, "mocha"),
            Path::new("themes/default/mocha")
        );
        assert_eq!(
            package_dir(Path::new("themes"), VariantMode::Combined, "frappe"),
            Path::new("themes/dark-light/frappe")
        );
    }

    #[tokio::test]
    async fn test_full_build() {
        let dir = tempfile::tempdir().unwrap();
        let report = generator(dir.path(), &VariantMode::ALL).run().await.unwrap();

        // manual: 4 flavors, auto and combined: 3 dark flavors each
        assert_eq!(report.written, 14 * (4 + 3 + 3));
        assert_eq!(report.skipped, 14 * 2);

        let mocha = read_manifest(&dir.path().join("default/mocha/mocha-mauve.xpi"));
        assert_eq!(mocha.name, "catppuccin-mocha-mauve");
        assert_eq!(mocha.theme.properties.color_scheme, ColorScheme::Dark);
        assert_eq!(mocha.theme.colors["frame"], "#1e1e2e");
        assert_eq!(mocha.theme.colors["button_background_active"], "#cba6f7");

        let latte = read_manifest(&dir.path().join("default/latte/latte-peach.xpi"));
        assert_eq!(latte.theme.properties.color_scheme, ColorScheme::Light);

        assert!(dir.path().join("auto/macchiato/macchiato-sky.xpi").exists());
        assert!(dir.path().join("dark-light/frappe/frappe-blue.xpi").exists());
        assert!(!dir.path().join("auto/latte").exists());
        assert!(!dir.path().join("dark-light/latte").exists());
    }

    #[tokio::test]
    async fn test_rebuild_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auto/frappe/frappe-lavender.xpi");

        generator(dir.path(), &[VariantMode::Auto]).run().await.unwrap();
        let first = std::fs::read(&path).unwrap();
        generator(dir.path(), &[VariantMode::Auto]).run().await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), first);
    }

    #[tokio::test]
    async fn test_only_selected_modes_are_built() {
        let dir = tempfile::tempdir().unwrap();
        let report = generator(dir.path(), &[VariantMode::Manual]).run().await.unwrap();

        assert_eq!(report.written, 14 * 4);
        assert_eq!(report.skipped, 0);
        assert!(!dir.path().join("auto").exists());
        assert!(!dir.path().join("dark-light").exists());
    }

    #[tokio::test]
    async fn test_unwritable_output_fails_the_build() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("themes");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let result = generator(&blocker, &[VariantMode::Manual]).run().await;
        assert!(result.is_err());
    }
}
