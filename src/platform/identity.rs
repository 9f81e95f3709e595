// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! SoC variant classification, resolved once per resolver

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use super::PlatformProbe;

/// SoC ids of the SDM630 family (SDM630, SDM455 and the SDA variant)
pub const SDM630_SOC_IDS: [u32; 3] = [318, 327, 385];

/// Hardware variant the resource tables are calibrated for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformIdentity {
    /// SDM630 / SDM455
    Sdm630,
    /// SDM660, and the fallback for anything unrecognized
    #[default]
    Sdm660,
}

impl PlatformIdentity {
    /// Classify a raw SoC id. Unknown or missing ids fall back to SDM660.
    pub fn from_soc_id(soc_id: Option<u32>) -> Self {
        match soc_id {
            Some(id) if SDM630_SOC_IDS.contains(&id) => PlatformIdentity::Sdm630,
            _ => PlatformIdentity::Sdm660,
        }
    }
}

impl fmt::Display for PlatformIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformIdentity::Sdm630 => write!(f, "SDM630"),
            PlatformIdentity::Sdm660 => write!(f, "SDM660"),
        }
    }
}

/// Memoizes [`PlatformIdentity`] for the lifetime of its owner.
///
/// The probe is queried at most once even under concurrent first access.
#[derive(Debug, Default)]
pub struct IdentityResolver {
    cell: OnceLock<PlatformIdentity>,
    soc_id_override: Option<u32>,
}

impl IdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve from a fixed SoC id instead of probing
    pub fn with_soc_id_override(soc_id: u32) -> Self {
        Self {
            cell: OnceLock::new(),
            soc_id_override: Some(soc_id),
        }
    }

    pub fn identify(&self, probe: &dyn PlatformProbe) -> PlatformIdentity {
        *self.cell.get_or_init(|| {
            let soc_id = self.soc_id_override.or_else(|| probe.soc_id());
            let identity = PlatformIdentity::from_soc_id(soc_id);
            tracing::debug!(soc_id = ?soc_id, identity = %identity, "platform identified");
            identity
        })
    }

    /// Cached identity, if one has been resolved
    pub fn cached(&self) -> Option<PlatformIdentity> {
        self.cell.get().copied()
    }
}
