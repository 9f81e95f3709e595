// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Display-state resource applicator
//!
//! Display off applies the platform's resource table under the display-state
//! group; display on reverts that group. Both only act under the interactive
//! governor, which is what the tables are calibrated for.

use super::resources::{select_table, GovernorState};
use super::{HintCategory, HintStatus};
use crate::error::{PerfHintError, Result};
use crate::platform::{IdentityResolver, PlatformProbe};
use crate::tuning::{PerfTuner, ResourceGroupId};

/// Governor name the display tables are calibrated for
pub const INTERACTIVE_GOVERNOR: &str = "interactive";

/// CPUs probed for the governor, in order
pub const DEFAULT_GOVERNOR_CPUS: [u32; 4] = [0, 1, 2, 3];

#[derive(Debug, Clone)]
pub struct DisplayStateApplicator {
    governor_cpus: Vec<u32>,
    interactive_governor: String,
}

impl Default for DisplayStateApplicator {
    fn default() -> Self {
        Self::new(DEFAULT_GOVERNOR_CPUS.to_vec(), INTERACTIVE_GOVERNOR)
    }
}

impl DisplayStateApplicator {
    pub fn new(governor_cpus: Vec<u32>, interactive_governor: impl Into<String>) -> Self {
        Self {
            governor_cpus,
            interactive_governor: interactive_governor.into(),
        }
    }

    /// First governor any CPU in the probe list reports
    pub fn read_governor(&self, probe: &dyn PlatformProbe) -> Result<String> {
        for &cpu in &self.governor_cpus {
            match probe.scaling_governor(cpu) {
                Ok(governor) => return Ok(governor),
                Err(err) => tracing::debug!(cpu, error = %err, "governor probe failed"),
            }
        }
        Err(PerfHintError::GovernorUnreadable(format!(
            "no governor on cpus {:?}",
            self.governor_cpus
        )))
    }

    /// Classify a governor name; only an exact match counts as interactive
    pub fn governor_state(&self, governor: &str) -> GovernorState {
        if governor == self.interactive_governor {
            GovernorState::Interactive
        } else {
            GovernorState::Other
        }
    }

    pub fn on_display_state_change(
        &self,
        tuner: &dyn PerfTuner,
        probe: &dyn PlatformProbe,
        identity: &IdentityResolver,
        on: bool,
    ) -> HintStatus {
        let governor = match self.read_governor(probe) {
            Ok(governor) => governor,
            Err(err) => {
                tracing::error!(error = %err, "Can't obtain scaling governor");
                return HintStatus::None;
            }
        };

        let governor_state = self.governor_state(&governor);
        if governor_state != GovernorState::Interactive {
            tracing::debug!(governor = %governor, on, "display change ignored under governor");
            return HintStatus::Handled;
        }

        if on {
            tracing::info!(group = ResourceGroupId::DISPLAY_STATE.0, "display on, reverting");
            tuner.revert_resource_group(ResourceGroupId::DISPLAY_STATE);
        } else {
            let platform = identity.identify(probe);
            if let Some(table) = select_table(platform, HintCategory::DisplayState, governor_state)
            {
                tracing::info!(
                    platform = %platform,
                    table = table.name,
                    entries = table.entries.len(),
                    "display off, applying"
                );
                tuner.apply_resource_group(ResourceGroupId::DISPLAY_STATE, table);
            }
        }

        HintStatus::Handled
    }
}
