// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Fixed-answer probe for replays and tests

use std::collections::HashMap;

use super::PlatformProbe;
use crate::error::{PerfHintError, Result};

/// Probe that answers from fixed values instead of sysfs
#[derive(Debug, Clone, Default)]
pub struct ScriptedProbe {
    soc_id: Option<u32>,
    default_governor: Option<String>,
    per_cpu: HashMap<u32, Option<String>>,
}

impl ScriptedProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_soc_id(mut self, soc_id: u32) -> Self {
        self.soc_id = Some(soc_id);
        self
    }

    /// Governor reported for every CPU without a per-CPU answer
    pub fn with_governor(mut self, governor: impl Into<String>) -> Self {
        self.default_governor = Some(governor.into());
        self
    }

    pub fn with_cpu_governor(mut self, cpu: u32, governor: impl Into<String>) -> Self {
        self.per_cpu.insert(cpu, Some(governor.into()));
        self
    }

    /// Make one CPU fail its governor read
    pub fn with_unreadable_cpu(mut self, cpu: u32) -> Self {
        self.per_cpu.insert(cpu, None);
        self
    }
}

impl PlatformProbe for ScriptedProbe {
    fn soc_id(&self) -> Option<u32> {
        self.soc_id
    }

    fn scaling_governor(&self, cpu: u32) -> Result<String> {
        let answer = match self.per_cpu.get(&cpu) {
            Some(answer) => answer.clone(),
            None => self.default_governor.clone(),
        };
        answer.ok_or_else(|| PerfHintError::GovernorUnreadable(format!("cpu{}", cpu)))
    }
}
