// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! perfhint - power hint dispatcher for Snapdragon 630/660 class devices.
//!
//! Turns Android power hints into CPU/bus boost requests and display-state
//! resource tables sent to a vendor perf service.
//!
//! Architecture highlights:
//! - `hints`: per-category state machines (launch, interaction, display) and the dispatcher
//! - `platform`: SoC identity, sysfs governor probing, clocks
//! - `tuning`: the perf service seam plus a recording implementation
//! - `config`, `cli`, `commands`: the `perfhint` binary surface

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod hints;
pub mod platform;
pub mod tuning;

pub use error::{PerfHintError, Result};
