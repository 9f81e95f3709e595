// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Power hint handling
//!
//! Translates coarse behavioral signals from the power-management layer into
//! time-bounded requests against a [`PerfTuner`](crate::tuning::PerfTuner):
//! - `launch`: one boost per launch episode, released by an explicit end signal
//! - `interaction`: fire-and-forget boosts, suppressed while a longer one is live
//! - `display`: resource table applied on display off, reverted on display on
//! - `dispatcher`: the single routing entry point owning all of the above

pub mod display;
pub mod dispatcher;
pub mod interaction;
pub mod launch;
pub mod resources;

pub use dispatcher::HintDispatcher;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound for a launch boost
pub const MAX_LAUNCH_DURATION_MS: u32 = 5000;
/// Upper bound for an interaction boost
pub const MAX_INTERACTIVE_DURATION_MS: u32 = 5000;
/// Lower bound, and default, for an interaction boost
pub const MIN_INTERACTIVE_DURATION_MS: u32 = 400;

/// Kind of incoming hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintCategory {
    Vsync,
    Interaction,
    VideoEncode,
    VideoDecode,
    LowPower,
    SustainedPerformance,
    VrMode,
    Launch,
    DisableTouch,
    /// Display on/off; has no raw power hint id
    DisplayState,
}

impl HintCategory {
    /// Map a raw Android `power_hint_t` value
    pub fn from_raw(id: u32) -> Option<Self> {
        let category = match id {
            0x1 => HintCategory::Vsync,
            0x2 => HintCategory::Interaction,
            0x3 => HintCategory::VideoEncode,
            0x4 => HintCategory::VideoDecode,
            0x5 => HintCategory::LowPower,
            0x6 => HintCategory::SustainedPerformance,
            0x7 => HintCategory::VrMode,
            0x8 => HintCategory::Launch,
            0x9 => HintCategory::DisableTouch,
            _ => return None,
        };
        Some(category)
    }

    pub fn raw_id(&self) -> Option<u32> {
        match self {
            HintCategory::Vsync => Some(0x1),
            HintCategory::Interaction => Some(0x2),
            HintCategory::VideoEncode => Some(0x3),
            HintCategory::VideoDecode => Some(0x4),
            HintCategory::LowPower => Some(0x5),
            HintCategory::SustainedPerformance => Some(0x6),
            HintCategory::VrMode => Some(0x7),
            HintCategory::Launch => Some(0x8),
            HintCategory::DisableTouch => Some(0x9),
            HintCategory::DisplayState => None,
        }
    }
}

/// Optional data carried with a hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintPayload {
    /// Requested boost length in milliseconds (interaction)
    Duration(i64),
    /// Presence flag; for launch hints its absence means "launch ended"
    Present,
    /// Display is on
    Display(bool),
}

/// Outcome reported back to the power-management layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintStatus {
    Handled,
    NotHandled,
    /// Not owned here; the caller should fall back to its default handling
    None,
}

impl fmt::Display for HintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HintStatus::Handled => write!(f, "handled"),
            HintStatus::NotHandled => write!(f, "not handled"),
            HintStatus::None => write!(f, "none"),
        }
    }
}
