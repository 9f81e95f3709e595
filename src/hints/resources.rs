// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Resource tables and their selection
//!
//! Values are hardware-calibrated constants for the vendor perf service. Each
//! table is applied as a single request, in order. Selection is a lookup over
//! static rows keyed by platform and hint category, gated on the governor.

use serde::Serialize;
use std::fmt;

use super::HintCategory;
use crate::platform::PlatformIdentity;

/// One tunable write: opaque resource id and the value to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    pub resource_id: u32,
    pub value: u32,
}

impl ResourceEntry {
    pub const fn new(resource_id: u32, value: u32) -> Self {
        Self { resource_id, value }
    }
}

impl fmt::Display for ResourceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}=0x{:X}", self.resource_id, self.value)
    }
}

/// Ordered list of tunables applied atomically
#[derive(Debug, PartialEq, Eq)]
pub struct ResourceTable {
    pub name: &'static str,
    pub entries: &'static [ResourceEntry],
}

/// Whether the active CPU governor is the one the tables are calibrated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GovernorState {
    Interactive,
    Other,
}

/// Display off on SDM630/SDM455.
///
/// Big cluster hispeed freq 1113MHz, go_hispeed_load 95, above_hispeed_delay
/// 40ms; BusDCVS v2 sample_ms 10.
pub static SDM630_DISPLAY_OFF: ResourceTable = ResourceTable {
    name: "sdm630-display-off",
    entries: &[
        ResourceEntry::new(0x4141_4000, 0x459),
        ResourceEntry::new(0x4141_0000, 0x5F),
        ResourceEntry::new(0x4140_0000, 0x4),
        ResourceEntry::new(0x4182_0000, 0xA),
    ],
};

/// Display off on SDM660.
///
/// Little cluster hispeed freq 902MHz, go_hispeed_load 95, above_hispeed_delay
/// 40ms; BusDCVS v2 sample_ms 10; sched group upmigrate 500.
pub static SDM660_DISPLAY_OFF: ResourceTable = ResourceTable {
    name: "sdm660-display-off",
    entries: &[
        ResourceEntry::new(0x4141_4100, 0x386),
        ResourceEntry::new(0x4141_0100, 0x5F),
        ResourceEntry::new(0x4140_0100, 0x4),
        ResourceEntry::new(0x4182_0000, 0xA),
        ResourceEntry::new(0x40C5_4000, 0x1F4),
    ],
};

struct TableRow {
    platform: PlatformIdentity,
    category: HintCategory,
    table: &'static ResourceTable,
}

static TABLES: &[TableRow] = &[
    TableRow {
        platform: PlatformIdentity::Sdm630,
        category: HintCategory::DisplayState,
        table: &SDM630_DISPLAY_OFF,
    },
    TableRow {
        platform: PlatformIdentity::Sdm660,
        category: HintCategory::DisplayState,
        table: &SDM660_DISPLAY_OFF,
    },
];

/// Pick the table for `(platform, category)` under the given governor.
///
/// Returns `None` when the governor is not interactive or no row matches.
pub fn select_table(
    platform: PlatformIdentity,
    category: HintCategory,
    governor: GovernorState,
) -> Option<&'static ResourceTable> {
    if governor != GovernorState::Interactive {
        return None;
    }
    TABLES
        .iter()
        .find(|row| row.platform == platform && row.category == category)
        .map(|row| row.table)
}
