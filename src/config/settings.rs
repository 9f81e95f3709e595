// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for perfhint
//!
//! Handles loading and saving settings from ~/.perfhint/settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::hints::display::{DEFAULT_GOVERNOR_CPUS, INTERACTIVE_GOVERNOR};
use crate::platform::DEFAULT_SYSFS_ROOT;

mod io;
mod validation;

/// Main settings structure, stored in ~/.perfhint/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Platform probing settings
    #[serde(default)]
    pub platform: PlatformConfig,
}

/// Where and how the platform is probed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Mount point of sysfs
    #[serde(default = "default_sysfs_root")]
    pub sysfs_root: PathBuf,

    /// CPUs probed for the scaling governor, in order
    #[serde(default = "default_governor_cpus")]
    pub governor_cpus: Vec<u32>,

    /// Governor name the display tables apply under
    #[serde(default = "default_interactive_governor")]
    pub interactive_governor: String,

    /// Fixed SoC id, bypassing the sysfs probe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soc_id_override: Option<u32>,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            sysfs_root: default_sysfs_root(),
            governor_cpus: default_governor_cpus(),
            interactive_governor: default_interactive_governor(),
            soc_id_override: None,
        }
    }
}

fn default_sysfs_root() -> PathBuf {
    PathBuf::from(DEFAULT_SYSFS_ROOT)
}

fn default_governor_cpus() -> Vec<u32> {
    DEFAULT_GOVERNOR_CPUS.to_vec()
}

fn default_interactive_governor() -> String {
    INTERACTIVE_GOVERNOR.to_string()
}
