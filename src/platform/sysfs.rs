// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! sysfs-backed platform probe

use std::fs;
use std::path::{Path, PathBuf};

use super::PlatformProbe;
use crate::error::{PerfHintError, Result};

/// Default mount point of sysfs
pub const DEFAULT_SYSFS_ROOT: &str = "/sys";

const SOC_ID_PATHS: [&str; 2] = ["devices/soc0/soc_id", "devices/system/soc/soc0/id"];

/// Reads SoC id and CPU governors from a sysfs tree
#[derive(Debug, Clone)]
pub struct SysfsProbe {
    root: PathBuf,
}

impl Default for SysfsProbe {
    fn default() -> Self {
        Self::new(DEFAULT_SYSFS_ROOT)
    }
}

impl SysfsProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn cpu_dir(&self, cpu: u32) -> PathBuf {
        self.root
            .join("devices/system/cpu")
            .join(format!("cpu{}", cpu))
    }

    /// Offline CPUs have no readable cpufreq policy. A missing `online` file
    /// (cpu0 on most kernels) counts as online.
    fn is_cpu_online(&self, cpu: u32) -> bool {
        match fs::read_to_string(self.cpu_dir(cpu).join("online")) {
            Ok(raw) => raw.trim() != "0",
            Err(_) => true,
        }
    }
}

impl PlatformProbe for SysfsProbe {
    fn soc_id(&self) -> Option<u32> {
        SOC_ID_PATHS.iter().find_map(|relative| {
            let raw = fs::read_to_string(self.root.join(relative)).ok()?;
            parse_soc_id(&raw)
        })
    }

    fn scaling_governor(&self, cpu: u32) -> Result<String> {
        if !self.is_cpu_online(cpu) {
            return Err(PerfHintError::GovernorUnreadable(format!(
                "cpu{} is offline",
                cpu
            )));
        }

        let path = self.cpu_dir(cpu).join("cpufreq/scaling_governor");
        let raw = fs::read_to_string(&path).map_err(|err| {
            PerfHintError::GovernorUnreadable(format!("{}: {}", path.display(), err))
        })?;
        let governor = raw.trim();
        if governor.is_empty() {
            return Err(PerfHintError::GovernorUnreadable(format!(
                "{} is empty",
                path.display()
            )));
        }
        Ok(governor.to_string())
    }
}

fn parse_soc_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}
