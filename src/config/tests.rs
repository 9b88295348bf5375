//! Configuration tests

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// The serialized default config parses back to the same config
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let reloaded = Config::from_sources(parsed.unwrap(), no_env).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_config_roundtrip_customized() {
    let mut config = Config::default();
    config.output_dir = PathBuf::from("dist/themes");
    config.palette_dir = Some(PathBuf::from("palettes"));
    config.modes = vec![VariantMode::Combined];
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Daily;

    let toml_str = config.to_toml();
    let reloaded = Config::from_sources(parse(&toml_str), no_env).unwrap();
    assert_eq!(reloaded, config, "TOML:\n{}", toml_str);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_gives_defaults() {
    let config = Config::from_sources(FileConfig::default(), no_env).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.modes, VariantMode::ALL.to_vec());
    assert_eq!(config.reference_flavor, "latte");
}

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
output_dir = "from-file"
assets_dir = "file-assets"
"#,
    );
    let env: HashMap<&str, &str> = HashMap::from([(ENV_OUTPUT_DIR, "from-env")]);

    let config = Config::from_sources(file, |k| env.get(k).map(|v| v.to_string())).unwrap();
    assert_eq!(config.output_dir, PathBuf::from("from-env"));
    assert_eq!(config.assets_dir, PathBuf::from("file-assets"));
}

#[test]
fn test_empty_palette_dir_means_bundled() {
    let config = Config::from_sources(FileConfig::default(), |k| {
        (k == ENV_PALETTE_DIR).then(String::new)
    })
    .unwrap();
    assert!(config.palette_dir.is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_mode_aliases_and_duplicates() {
    let file = parse(r#"modes = ["default", "dark-light", "manual"]"#);
    let config = Config::from_sources(file, no_env).unwrap();
    assert_eq!(config.modes, vec![VariantMode::Manual, VariantMode::Combined]);
}

#[test]
fn test_unknown_mode_is_an_error() {
    let file = parse(r#"modes = ["manual", "sepia"]"#);
    let err = Config::from_sources(file, no_env).unwrap_err();
    assert!(err.to_string().contains("sepia"));
}

#[test]
fn test_empty_modes_is_an_error() {
    let file = parse("modes = []");
    assert!(Config::from_sources(file, no_env).is_err());
}

#[test]
fn test_unknown_key_is_rejected() {
    let parsed: Result<FileConfig, _> = toml::from_str("ouput_dir = \"typo\"");
    assert!(parsed.is_err());
}

#[test]
fn test_log_rotation_parsing() {
    assert_eq!(LogRotation::from_str("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::from_str("daily"), LogRotation::Daily);
    assert_eq!(LogRotation::from_str("weekly"), LogRotation::Never);
}
