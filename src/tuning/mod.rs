// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Resource-tuning primitives consumed by the hint state machines
//!
//! The vendor performance service that actually writes tunables lives outside
//! this crate. [`PerfTuner`] is the narrow contract the hint logic needs from it;
//! [`RecordingTuner`] is the in-process implementation used for dry runs and tests.

pub mod recording;

pub use recording::*;

use serde::{Deserialize, Serialize};

use crate::hints::resources::ResourceTable;

/// Opaque token for an active boost reservation.
///
/// Negative values are the primitive's failure sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoostHandle(pub i32);

impl BoostHandle {
    /// Sentinel meaning "no active boost"
    pub const INVALID: BoostHandle = BoostHandle(-1);

    pub fn is_valid(&self) -> bool {
        self.0 >= 0
    }
}

/// Vendor boost kinds understood by the perf service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoostKind {
    Scroll,
    FirstLaunch,
}

impl BoostKind {
    /// Vendor hint id
    pub fn id(&self) -> u32 {
        match self {
            BoostKind::Scroll => 0x0000_1080,
            BoostKind::FirstLaunch => 0x0000_1081,
        }
    }
}

/// Sub-type passed alongside a [`BoostKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoostSubtype {
    ScrollVertical,
    LaunchV1,
}

impl BoostSubtype {
    pub fn id(&self) -> u32 {
        match self {
            BoostSubtype::ScrollVertical => 1,
            BoostSubtype::LaunchV1 => 1,
        }
    }
}

/// Identifier under which a resource table is applied and later reverted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceGroupId(pub u32);

impl ResourceGroupId {
    /// Group used for display on/off tunables
    pub const DISPLAY_STATE: ResourceGroupId = ResourceGroupId(0x0C00);
}

/// Contract with the external resource-tuning service.
///
/// Implementations must tolerate calls from several threads at once; the
/// state machines serialize their own bookkeeping but not calls across
/// categories.
#[cfg_attr(test, mockall::automock)]
pub trait PerfTuner: Send + Sync {
    /// Request a time-bounded boost. A negative handle means the request failed.
    fn request_boost(&self, kind: BoostKind, duration_ms: u32, subtype: BoostSubtype)
        -> BoostHandle;

    fn is_valid_handle(&self, handle: BoostHandle) -> bool {
        handle.is_valid()
    }

    fn release_boost(&self, handle: BoostHandle);

    /// Apply every entry of `table` as one request tagged with `group`.
    fn apply_resource_group(&self, group: ResourceGroupId, table: &ResourceTable);

    /// Undo whatever was applied under `group`. Must be safe when nothing was.
    fn revert_resource_group(&self, group: ResourceGroupId);
}
