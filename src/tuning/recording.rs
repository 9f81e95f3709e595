// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Recording tuner
//!
//! A [`PerfTuner`] that performs no hardware writes. Every call is logged and
//! appended to a shared action log, which makes it the dry-run backend for the
//! CLI and the fake used by tests.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{BoostHandle, BoostKind, BoostSubtype, PerfTuner, ResourceGroupId};
use crate::hints::resources::{ResourceEntry, ResourceTable};

/// One call made against the tuner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TunerAction {
    RequestBoost {
        kind: BoostKind,
        duration_ms: u32,
        subtype: BoostSubtype,
        handle: BoostHandle,
    },
    ReleaseBoost {
        handle: BoostHandle,
    },
    ApplyResourceGroup {
        group: ResourceGroupId,
        table: &'static str,
        entries: Vec<ResourceEntry>,
    },
    RevertResourceGroup {
        group: ResourceGroupId,
    },
}

/// In-process tuner that records instead of applying
#[derive(Clone, Default)]
pub struct RecordingTuner {
    actions: Arc<Mutex<Vec<TunerAction>>>,
    next_handle: Arc<AtomicI32>,
    fail_requests: Arc<AtomicBool>,
}

impl RecordingTuner {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tuner whose boost requests all fail with the invalid sentinel
    pub fn failing() -> Self {
        let tuner = Self::new();
        tuner.set_fail_requests(true);
        tuner
    }

    pub fn set_fail_requests(&self, fail: bool) {
        self.fail_requests.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of every recorded action, oldest first
    pub fn actions(&self) -> Vec<TunerAction> {
        self.lock_actions().clone()
    }

    /// Drain the log, returning what was recorded since the last drain
    pub fn take_actions(&self) -> Vec<TunerAction> {
        std::mem::take(&mut *self.lock_actions())
    }

    /// Number of boost requests issued, including failed ones
    pub fn boost_requests(&self) -> usize {
        self.lock_actions()
            .iter()
            .filter(|action| matches!(action, TunerAction::RequestBoost { .. }))
            .count()
    }

    fn record(&self, action: TunerAction) {
        self.lock_actions().push(action);
    }

    fn lock_actions(&self) -> MutexGuard<'_, Vec<TunerAction>> {
        match self.actions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("Recording tuner action log was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }
}

impl PerfTuner for RecordingTuner {
    fn request_boost(
        &self,
        kind: BoostKind,
        duration_ms: u32,
        subtype: BoostSubtype,
    ) -> BoostHandle {
        let handle = if self.fail_requests.load(Ordering::SeqCst) {
            BoostHandle::INVALID
        } else {
            BoostHandle(self.next_handle.fetch_add(1, Ordering::SeqCst))
        };
        tracing::debug!(
            kind = ?kind,
            duration_ms,
            subtype = ?subtype,
            handle = handle.0,
            "boost requested"
        );
        self.record(TunerAction::RequestBoost {
            kind,
            duration_ms,
            subtype,
            handle,
        });
        handle
    }

    fn release_boost(&self, handle: BoostHandle) {
        tracing::debug!(handle = handle.0, "boost released");
        self.record(TunerAction::ReleaseBoost { handle });
    }

    fn apply_resource_group(&self, group: ResourceGroupId, table: &ResourceTable) {
        tracing::debug!(group = group.0, table = table.name, "resource group applied");
        self.record(TunerAction::ApplyResourceGroup {
            group,
            table: table.name,
            entries: table.entries.to_vec(),
        });
    }

    fn revert_resource_group(&self, group: ResourceGroupId) {
        tracing::debug!(group = group.0, "resource group reverted");
        self.record(TunerAction::RevertResourceGroup { group });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::resources::SDM630_DISPLAY_OFF;

    #[test]
    fn test_handles_increase_from_zero() {
        let tuner = RecordingTuner::new();
        let first = tuner.request_boost(BoostKind::Scroll, 400, BoostSubtype::ScrollVertical);
        let second = tuner.request_boost(BoostKind::Scroll, 400, BoostSubtype::ScrollVertical);
        assert_eq!(first, BoostHandle(0));
        assert_eq!(second, BoostHandle(1));
        assert!(tuner.is_valid_handle(second));
    }

    #[test]
    fn test_failing_tuner_returns_invalid_handle() {
        let tuner = RecordingTuner::failing();
        let handle = tuner.request_boost(BoostKind::FirstLaunch, 5000, BoostSubtype::LaunchV1);
        assert_eq!(handle, BoostHandle::INVALID);
        assert!(!tuner.is_valid_handle(handle));
        // Failed requests are still recorded
        assert_eq!(tuner.boost_requests(), 1);
    }

    #[test]
    fn test_clones_share_log() {
        let tuner = RecordingTuner::new();
        let observer = tuner.clone();
        tuner.revert_resource_group(ResourceGroupId::DISPLAY_STATE);
        assert_eq!(
            observer.actions(),
            vec![TunerAction::RevertResourceGroup {
                group: ResourceGroupId::DISPLAY_STATE
            }]
        );
    }

    #[test]
    fn test_take_actions_drains() {
        let tuner = RecordingTuner::new();
        tuner.apply_resource_group(ResourceGroupId::DISPLAY_STATE, &SDM630_DISPLAY_OFF);
        let taken = tuner.take_actions();
        assert_eq!(taken.len(), 1);
        match &taken[0] {
            TunerAction::ApplyResourceGroup { entries, table, .. } => {
                assert_eq!(entries.len(), 4);
                assert_eq!(*table, SDM630_DISPLAY_OFF.name);
            }
            other => panic!("unexpected action {:?}", other),
        }
        assert!(tuner.actions().is_empty());
    }

    #[test]
    fn test_action_serializes_with_tag() {
        let action = TunerAction::ReleaseBoost {
            handle: BoostHandle(2),
        };
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"action\":\"release_boost\""));
        assert!(json.contains("\"handle\":2"));
    }
}
