// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Hint-sending commands run against a [`RecordingTuner`], so they report the
//! actions the perf service would receive without touching it.

pub mod hint;
pub mod platform;
pub mod replay;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::hints::HintStatus;
use crate::tuning::{RecordingTuner, TunerAction};

/// Result of one hint as shown to the user
#[derive(Debug, Clone, Serialize)]
pub struct HintOutcome {
    pub status: HintStatus,
    pub actions: Vec<TunerAction>,
}

impl HintOutcome {
    pub fn collect(status: HintStatus, tuner: &RecordingTuner) -> Self {
        Self {
            status,
            actions: tuner.take_actions(),
        }
    }
}

pub(crate) fn print_outcome(outcome: &HintOutcome, format: &OutputFormat) -> Result<()> {
    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    println!("Status: {}", outcome.status);
    if outcome.actions.is_empty() {
        println!("Actions: none");
    } else {
        println!("Actions:");
        for action in &outcome.actions {
            println!("  {}", describe_action(action));
        }
    }
    Ok(())
}

pub(crate) fn describe_action(action: &TunerAction) -> String {
    match action {
        TunerAction::RequestBoost {
            kind,
            duration_ms,
            subtype,
            handle,
        } => format!(
            "request boost 0x{:X}/{} for {}ms -> handle {}",
            kind.id(),
            subtype.id(),
            duration_ms,
            handle.0
        ),
        TunerAction::ReleaseBoost { handle } => format!("release handle {}", handle.0),
        TunerAction::ApplyResourceGroup {
            group,
            table,
            entries,
        } => {
            let values: Vec<String> = entries.iter().map(|entry| entry.to_string()).collect();
            format!(
                "apply group 0x{:04X} ({}): {}",
                group.0,
                table,
                values.join(", ")
            )
        }
        TunerAction::RevertResourceGroup { group } => format!("revert group 0x{:04X}", group.0),
    }
}
