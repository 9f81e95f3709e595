// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::{Path, PathBuf};

use crate::error::Result;

use super::Settings;

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::perfhint_home().join("settings.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the perfhint home directory (~/.perfhint or $PERFHINT_HOME).
    pub fn perfhint_home() -> PathBuf {
        if let Ok(home) = std::env::var("PERFHINT_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".perfhint")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PerfHintError;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&temp_dir.path().join("missing.json")).unwrap();
        assert_eq!(settings.platform.governor_cpus, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.platform.soc_id_override = Some(385);
        settings.platform.governor_cpus = vec![2];
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.platform.soc_id_override, Some(385));
        assert_eq!(loaded.platform.governor_cpus, vec![2]);
    }

    #[test]
    fn test_load_corrupt_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(PerfHintError::Json(_))
        ));
    }

    #[test]
    fn test_load_invalid_settings_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{"platform": {"governor_cpus": []}}"#).unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(PerfHintError::Config(_))
        ));
    }

    #[test]
    fn test_default_path_file_name() {
        assert!(Settings::default_path().ends_with("settings.json"));
    }
}
