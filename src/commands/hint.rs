// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! One-shot hint and display commands

use std::sync::Arc;

use super::{print_outcome, HintOutcome};
use crate::cli::args::{DisplayArgs, HintArgs, HintCommand, OutputFormat};
use crate::config::Settings;
use crate::error::Result;
use crate::hints::{HintCategory, HintDispatcher, HintPayload, HintStatus};
use crate::tuning::RecordingTuner;

/// Map a hint subcommand to the dispatcher call it stands for
pub fn send_hint(dispatcher: &HintDispatcher, command: &HintCommand) -> HintStatus {
    match command {
        HintCommand::Interaction { duration } => dispatcher.dispatch(
            HintCategory::Interaction,
            duration.map(HintPayload::Duration),
        ),
        HintCommand::Launch { end } => {
            let payload = if *end { None } else { Some(HintPayload::Present) };
            dispatcher.dispatch(HintCategory::Launch, payload)
        }
        HintCommand::Raw {
            id,
            duration,
            present,
        } => {
            let payload = duration
                .map(HintPayload::Duration)
                .or_else(|| present.then_some(HintPayload::Present));
            dispatcher.dispatch_raw(*id, payload)
        }
    }
}

/// Execute the hint command
pub fn execute(args: &HintArgs, settings: &Settings, format: &OutputFormat) -> Result<()> {
    let tuner = RecordingTuner::new();
    let dispatcher = HintDispatcher::from_settings(settings, Arc::new(tuner.clone()));

    let status = send_hint(&dispatcher, &args.command);
    print_outcome(&HintOutcome::collect(status, &tuner), format)
}

/// Execute the display command
pub fn execute_display(
    args: &DisplayArgs,
    settings: &Settings,
    format: &OutputFormat,
) -> Result<()> {
    let tuner = RecordingTuner::new();
    let dispatcher = HintDispatcher::from_settings(settings, Arc::new(tuner.clone()));

    let status = dispatcher.set_interactive(args.state.is_on());
    print_outcome(&HintOutcome::collect(status, &tuner), format)
}
