// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{PerfHintError, Result};

use super::Settings;

impl Settings {
    /// Reject settings the hint logic cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.platform.governor_cpus.is_empty() {
            return Err(PerfHintError::Config(
                "platform.governor_cpus must list at least one CPU".to_string(),
            ));
        }
        if self.platform.interactive_governor.trim().is_empty() {
            return Err(PerfHintError::Config(
                "platform.interactive_governor must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
