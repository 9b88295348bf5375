//! Theme packages (.xpi)
//!
//! A package is a zip archive holding `manifest.json` and the three icons
//! under `images/`. Archives are assembled in memory with a fixed entry
//! timestamp, so rebuilding unchanged input reproduces the same bytes.

use crate::theme::ThemeManifest;
use anyhow::{Context, Result};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Icon file names, looked up in the assets directory and stored under `images/`
pub const ICON_FILES: [&str; 3] = ["icon16.png", "icon48.png", "icon128.png"];

/// Directory entry holding the icons inside the archive
pub const IMAGES_DIR: &str = "images/";

pub const MANIFEST_FILE: &str = "manifest.json";

/// Icon bytes shared by every package of a build
#[derive(Debug, Clone)]
pub struct Icons {
    files: Vec<(&'static str, Vec<u8>)>,
}

impl Icons {
    /// Read all icons from the assets directory
    pub async fn load(dir: &Path) -> Result<Self> {
        let mut files = Vec::with_capacity(ICON_FILES.len());
        for name in ICON_FILES {
            let path = dir.join(name);
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("cannot read icon {}", path.display()))?;
            files.push((name, bytes));
        }
        Ok(Self { files })
    }

    /// Icons from in-memory bytes, in `ICON_FILES` order
    #[cfg(test)]
    pub fn from_bytes(bytes: [Vec<u8>; 3]) -> Self {
        Self {
            files: ICON_FILES.into_iter().zip(bytes).collect(),
        }
    }
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
}

/// Assemble the archive bytes for a manifest
pub fn build_archive(manifest_json: &str, icons: &Icons) -> Result<Vec<u8>> {
    let options = entry_options();
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    writer.start_file(MANIFEST_FILE, options)?;
    writer.write_all(manifest_json.as_bytes())?;

    writer.add_directory(IMAGES_DIR, options)?;
    for (name, bytes) in &icons.files {
        writer.start_file(format!("{IMAGES_DIR}{name}"), options)?;
        writer.write_all(bytes)?;
    }

    Ok(writer.finish()?.into_inner())
}

/// Write a theme package to `<dir>/<file_name>`.
///
/// `None` is a no-op: nothing is created, not even the directory. The
/// archive is written to a temporary sibling and renamed into place, so the
/// final path never holds a partial archive.
pub async fn write_theme(
    file_name: &str,
    manifest: Option<&ThemeManifest>,
    dir: &Path,
    icons: &Icons,
) -> Result<Option<PathBuf>> {
    let Some(manifest) = manifest else {
        return Ok(None);
    };

    let json = manifest
        .to_json()
        .with_context(|| format!("cannot serialize manifest for {}", manifest.name))?;
    let bytes = build_archive(&json, icons)
        .with_context(|| format!("cannot build archive for {}", manifest.name))?;

    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("cannot create output directory {}", dir.display()))?;

    let dest = dir.join(file_name);
    let tmp = dir.join(format!("{file_name}.tmp"));

    if let Err(e) = tokio::fs::write(&tmp, &bytes).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e).with_context(|| format!("cannot write {}", tmp.display()));
    }
    tokio::fs::rename(&tmp, &dest)
        .await
        .with_context(|| format!("cannot move archive into place at {}", dest.display()))?;

    tracing::debug!("Wrote {} ({} bytes)", dest.display(), bytes.len());
    Ok(Some(dest))
}
