// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use perfhint::config::Settings;
use perfhint::PerfHintError;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_settings_default_values() {
    let settings = Settings::default();

    assert_eq!(settings.platform.sysfs_root, PathBuf::from("/sys"));
    assert_eq!(settings.platform.governor_cpus, vec![0, 1, 2, 3]);
    assert_eq!(settings.platform.interactive_governor, "interactive");
    assert!(settings.platform.soc_id_override.is_none());
}

#[test]
fn test_settings_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("settings.json");

    let mut settings = Settings::default();
    settings.platform.governor_cpus = vec![4, 5, 6, 7];
    settings.platform.soc_id_override = Some(385);
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.platform.governor_cpus, vec![4, 5, 6, 7]);
    assert_eq!(loaded.platform.soc_id_override, Some(385));
}

#[test]
fn test_settings_missing_file_is_default() {
    let temp_dir = TempDir::new().unwrap();
    let loaded = Settings::load_from(&temp_dir.path().join("absent.json")).unwrap();
    assert_eq!(loaded.platform.governor_cpus, vec![0, 1, 2, 3]);
}

#[test]
fn test_settings_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        Settings::load_from(&path),
        Err(PerfHintError::Json(_))
    ));
}

#[test]
fn test_settings_load_validates() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, r#"{"platform": {"governor_cpus": []}}"#).unwrap();

    assert!(matches!(
        Settings::load_from(&path),
        Err(PerfHintError::Config(_))
    ));
}

#[test]
fn test_default_path_is_settings_json() {
    let path = Settings::default_path();
    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("settings.json")
    );
}
