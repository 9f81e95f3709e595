// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Launch boost
//!
//! One boost per launch episode. A start signal while a boost is engaged is a
//! no-op; only the explicit end signal releases it. There is no timer here: the
//! perf service enforces its own ceiling on the requested duration.

use std::sync::{Mutex, MutexGuard};

use super::{HintStatus, MAX_LAUNCH_DURATION_MS};
use crate::error::PerfHintError;
use crate::tuning::{BoostHandle, BoostKind, BoostSubtype, PerfTuner};

#[derive(Debug, Default)]
struct LaunchState {
    active_handle: Option<BoostHandle>,
    engaged: bool,
}

/// State machine for launch hints
#[derive(Debug, Default)]
pub struct LaunchBoost {
    state: Mutex<LaunchState>,
}

impl LaunchBoost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a launch signal. `started` is false for "launch ended".
    pub fn on_launch_signal(&self, tuner: &dyn PerfTuner, started: bool) -> HintStatus {
        let mut state = self.lock_state();

        if !started {
            if let Some(handle) = state.active_handle.take() {
                if tuner.is_valid_handle(handle) {
                    tuner.release_boost(handle);
                }
            }
            state.engaged = false;
            return HintStatus::Handled;
        }

        if state.engaged {
            tracing::debug!("launch boost already engaged, not renewing");
            return HintStatus::Handled;
        }

        let handle = tuner.request_boost(
            BoostKind::FirstLaunch,
            MAX_LAUNCH_DURATION_MS,
            BoostSubtype::LaunchV1,
        );
        if !tuner.is_valid_handle(handle) {
            let err = launch_boost_unavailable(handle);
            tracing::error!(error = %err, "Failed to perform launch boost");
            return HintStatus::NotHandled;
        }

        state.active_handle = Some(handle);
        state.engaged = true;
        HintStatus::Handled
    }

    pub fn is_engaged(&self) -> bool {
        self.lock_state().engaged
    }

    pub fn active_handle(&self) -> Option<BoostHandle> {
        self.lock_state().active_handle
    }

    fn lock_state(&self) -> MutexGuard<'_, LaunchState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("Launch boost state lock was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }
}

fn launch_boost_unavailable(handle: BoostHandle) -> PerfHintError {
    PerfHintError::ResourceUnavailable(format!(
        "first-launch boost returned handle {}",
        handle.0
    ))
}
