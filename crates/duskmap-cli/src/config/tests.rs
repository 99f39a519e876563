use std::io::Write;

use duskmap_core::models::FilterMode;
use tempfile::NamedTempFile;

use super::*;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn test_loads_explicit_path() {
    let file = write_config(
        "defaults:\n  mode: light\n  brightness: 110\n  contrast: 90\n  sepia: 10\n",
    );
    let handle = load_config(Some(file.path()));

    assert!(handle.source.is_some(), "warnings: {:?}", handle.warnings);
    let defaults = &handle.config.defaults;
    assert_eq!(defaults.mode, FilterMode::Light);
    assert_eq!(defaults.brightness, 110.0);
    assert_eq!(defaults.contrast, 90.0);
    assert_eq!(defaults.sepia, 10.0);
    assert_eq!(defaults.grayscale, 0.0, "missing keys keep their default");
    assert!(handle.warnings.is_empty());
}

#[test]
fn test_empty_sections_use_defaults() {
    let file = write_config("defaults: {}\n");
    let handle = load_config(Some(file.path()));
    assert_eq!(handle.config, DuskmapConfig::default());
}

#[test]
fn test_out_of_range_values_are_clamped() {
    let file = write_config("defaults:\n  brightness: 500\n  grayscale: -20\n");
    let handle = load_config(Some(file.path()));

    assert_eq!(handle.config.defaults.brightness, 200.0);
    assert_eq!(handle.config.defaults.grayscale, 0.0);
    assert_eq!(handle.warnings.len(), 2, "warnings: {:?}", handle.warnings);
    assert!(handle.warnings[0].contains("brightness"));
    assert!(handle.warnings[1].contains("grayscale"));
}

#[test]
fn test_invalid_yaml_is_reported() {
    let file = write_config("defaults:\n  mode: dusk\n");
    let handle = load_config(Some(file.path()));

    let first = handle.warnings.first().expect("at least one warning");
    assert!(
        first.starts_with("Failed to parse config"),
        "unexpected warning: {}",
        first
    );
}

#[test]
fn test_sanitize_keeps_valid_values() {
    let mut defaults = FilterDefaults {
        brightness: 150.0,
        contrast: 50.0,
        grayscale: 100.0,
        sepia: 0.0,
        mode: FilterMode::Dark,
    };
    let before = defaults.clone();
    assert!(defaults.sanitize().is_empty());
    assert_eq!(defaults, before);
}

#[test]
fn test_sanitize_replaces_nan() {
    let mut defaults = FilterDefaults {
        contrast: f64::NAN,
        ..FilterDefaults::default()
    };
    let warnings = defaults.sanitize();
    assert_eq!(defaults.contrast, 100.0);
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_defaults_to_filter_config() {
    let defaults = FilterDefaults {
        mode: FilterMode::Light,
        sepia: 25.0,
        ..FilterDefaults::default()
    };
    let filter = defaults.to_filter_config();
    assert_eq!(filter.mode, FilterMode::Light);
    assert_eq!(filter.sepia, 25.0);
    assert_eq!(filter.brightness, 100.0);
    assert!(!filter.use_font);
}

#[test]
fn test_log_level_for_verbosity() {
    assert_eq!(log_level_for(0), log::LevelFilter::Off);
    assert_eq!(log_level_for(1), log::LevelFilter::Debug);
    assert_eq!(log_level_for(2), log::LevelFilter::Trace);
    assert_eq!(log_level_for(5), log::LevelFilter::Trace);
}

#[test]
fn test_init_logging_sets_level() {
    init_logging(2);
    assert!(is_verbose());
    assert_eq!(log::max_level(), log::LevelFilter::Trace);
    assert!(log::log_enabled!(log::Level::Trace));

    init_logging(1);
    assert_eq!(log::max_level(), log::LevelFilter::Debug);
    assert!(!log::log_enabled!(log::Level::Trace));
    assert!(log::log_enabled!(log::Level::Debug));

    init_logging(0);
    assert!(!is_verbose());
    assert!(!log::log_enabled!(log::Level::Debug));
}
