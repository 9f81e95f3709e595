// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Replay of timed hint scripts
//!
//! A script is JSON lines, one event per line:
//!
//! ```text
//! {"at_ms": 0, "event": "launch"}
//! {"at_ms": 120, "event": "interaction", "duration": 1500}
//! {"at_ms": 900, "event": "launch_end"}
//! {"at_ms": 5000, "event": "display", "on": false}
//! {"at_ms": 5010, "event": "raw", "id": 1}
//! {"at_ms": 6000, "event": "raw", "id": 8, "present": true}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Time is driven by a
//! [`ManualClock`], so suppression decisions are deterministic.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use super::{describe_action, HintOutcome};
use crate::cli::args::{OutputFormat, ReplayArgs};
use crate::error::{PerfHintError, Result};
use crate::hints::{HintCategory, HintDispatcher, HintPayload};
use crate::platform::{ManualClock, ScriptedProbe};
use crate::tuning::RecordingTuner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum EventKind {
    Interaction,
    Launch,
    LaunchEnd,
    Display,
    Raw,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScriptLine {
    at_ms: u64,
    event: EventKind,
    #[serde(default)]
    duration: Option<i64>,
    #[serde(default)]
    on: Option<bool>,
    #[serde(default)]
    id: Option<u32>,
    #[serde(default)]
    present: Option<bool>,
}

/// A hint to send at a point in the replay timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReplayEvent {
    Interaction { duration: Option<i64> },
    Launch,
    LaunchEnd,
    Display { on: bool },
    Raw {
        id: u32,
        duration: Option<i64>,
        present: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedEvent {
    /// 1-based line in the script
    pub line: usize,
    pub at_ms: u64,
    pub event: ReplayEvent,
}

/// One replayed event and what it caused
#[derive(Debug, Clone, Serialize)]
pub struct ReplayStep {
    pub line: usize,
    pub at_ms: u64,
    pub event: ReplayEvent,
    #[serde(flatten)]
    pub outcome: HintOutcome,
}

/// Parse a script, checking that time never goes backwards
pub fn parse_script(content: &str) -> Result<Vec<TimedEvent>> {
    let mut events = Vec::new();
    let mut last_at_ms = 0;

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parsed: ScriptLine =
            serde_json::from_str(trimmed).map_err(|err| PerfHintError::Replay {
                line,
                message: err.to_string(),
            })?;

        if parsed.at_ms < last_at_ms {
            return Err(PerfHintError::Replay {
                line,
                message: format!(
                    "at_ms {} is earlier than the previous event at {}",
                    parsed.at_ms, last_at_ms
                ),
            });
        }
        last_at_ms = parsed.at_ms;

        events.push(TimedEvent {
            line,
            at_ms: parsed.at_ms,
            event: to_event(&parsed, line)?,
        });
    }

    Ok(events)
}

fn to_event(parsed: &ScriptLine, line: usize) -> Result<ReplayEvent> {
    let missing = |field: &str| PerfHintError::Replay {
        line,
        message: format!("{:?} event requires \"{}\"", parsed.event, field),
    };

    let event = match parsed.event {
        EventKind::Interaction => ReplayEvent::Interaction {
            duration: parsed.duration,
        },
        EventKind::Launch => ReplayEvent::Launch,
        EventKind::LaunchEnd => ReplayEvent::LaunchEnd,
        EventKind::Display => ReplayEvent::Display {
            on: parsed.on.ok_or_else(|| missing("on"))?,
        },
        EventKind::Raw => ReplayEvent::Raw {
            id: parsed.id.ok_or_else(|| missing("id"))?,
            duration: parsed.duration,
            present: parsed.present.unwrap_or(false),
        },
    };
    Ok(event)
}

/// Run parsed events through a fresh dispatcher answering from `probe`
pub fn run_script(events: &[TimedEvent], probe: ScriptedProbe) -> Vec<ReplayStep> {
    let tuner = RecordingTuner::new();
    let clock = Arc::new(ManualClock::new());
    let dispatcher = HintDispatcher::new(Arc::new(probe), Arc::new(tuner.clone()), clock.clone());

    events
        .iter()
        .map(|timed| {
            clock.set(Duration::from_millis(timed.at_ms));
            let status = match timed.event {
                ReplayEvent::Interaction { duration } => dispatcher.dispatch(
                    HintCategory::Interaction,
                    duration.map(HintPayload::Duration),
                ),
                ReplayEvent::Launch => {
                    dispatcher.dispatch(HintCategory::Launch, Some(HintPayload::Present))
                }
                ReplayEvent::LaunchEnd => dispatcher.dispatch(HintCategory::Launch, None),
                ReplayEvent::Display { on } => dispatcher.set_interactive(on),
                ReplayEvent::Raw {
                    id,
                    duration,
                    present,
                } => {
                    let payload = duration
                        .map(HintPayload::Duration)
                        .or_else(|| present.then_some(HintPayload::Present));
                    dispatcher.dispatch_raw(id, payload)
                }
            };
            ReplayStep {
                line: timed.line,
                at_ms: timed.at_ms,
                event: timed.event,
                outcome: HintOutcome::collect(status, &tuner),
            }
        })
        .collect()
}

/// Read, parse and run a script file
pub fn replay_file(path: &Path, probe: ScriptedProbe) -> Result<Vec<ReplayStep>> {
    let content = std::fs::read_to_string(path)?;
    let events = parse_script(&content)?;
    Ok(run_script(&events, probe))
}

/// Execute the replay command
pub fn execute(args: &ReplayArgs, format: &OutputFormat) -> Result<()> {
    let mut probe = ScriptedProbe::new().with_governor(args.governor.clone());
    if let Some(soc_id) = args.soc_id {
        probe = probe.with_soc_id(soc_id);
    }

    let steps = replay_file(&args.script, probe)?;

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    for step in &steps {
        println!(
            "[{:>6}ms] line {:<3} {:<28} {}",
            step.at_ms,
            step.line,
            format!("{:?}", step.event),
            step.outcome.status
        );
        for action in &step.outcome.actions {
            println!("             {}", describe_action(action));
        }
    }
    Ok(())
}
