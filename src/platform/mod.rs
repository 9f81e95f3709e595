// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Platform probing: SoC identity, CPU governor, and the monotonic clock
//!
//! The hint logic only sees these through [`PlatformProbe`] and [`Clock`], so
//! tests and the replay command can substitute scripted answers for sysfs.

pub mod clock;
pub mod identity;
pub mod scripted;
pub mod sysfs;

pub use clock::*;
pub use identity::*;
pub use scripted::*;
pub use sysfs::*;

use crate::error::Result;

/// Source of hardware facts the hint logic depends on
pub trait PlatformProbe: Send + Sync {
    /// Raw SoC id, or `None` if it cannot be read
    fn soc_id(&self) -> Option<u32>;

    /// Scaling governor name for one CPU
    fn scaling_governor(&self, cpu: u32) -> Result<String>;
}
