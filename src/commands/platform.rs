// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Platform information command

use serde::Serialize;
use std::sync::Arc;
use sysinfo::System;

use crate::cli::args::OutputFormat;
use crate::config::Settings;
use crate::error::Result;
use crate::hints::resources::{select_table, GovernorState, ResourceEntry};
use crate::hints::{HintCategory, HintDispatcher};
use crate::tuning::RecordingTuner;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformReport {
    pub soc_id: Option<u32>,
    pub identity: String,
    pub cpu_brand: String,
    pub cpu_count: usize,
    pub governors: Vec<CpuGovernor>,
    pub governor_state: Option<GovernorState>,
    pub display_off_table: Option<String>,
    pub display_off_entries: Vec<ResourceEntry>,
}

#[derive(Debug, Serialize)]
pub struct CpuGovernor {
    pub cpu: u32,
    pub governor: Option<String>,
}

/// Gather everything the hint logic would see on this device
pub fn build_report(settings: &Settings, dispatcher: &HintDispatcher) -> PlatformReport {
    let probe = dispatcher.probe();
    let soc_id = settings.platform.soc_id_override.or_else(|| probe.soc_id());
    let identity = dispatcher.identity();

    let governors: Vec<CpuGovernor> = settings
        .platform
        .governor_cpus
        .iter()
        .map(|&cpu| CpuGovernor {
            cpu,
            governor: probe.scaling_governor(cpu).ok(),
        })
        .collect();

    let governor_state = dispatcher
        .display()
        .read_governor(probe)
        .ok()
        .map(|governor| dispatcher.display().governor_state(&governor));

    let table = governor_state
        .and_then(|state| select_table(identity, HintCategory::DisplayState, state));

    let sys = System::new_all();
    let cpu_brand = sys
        .cpus()
        .first()
        .map(|cpu| cpu.brand().to_string())
        .unwrap_or_else(|| "Unknown CPU".to_string());

    PlatformReport {
        soc_id,
        identity: identity.to_string(),
        cpu_brand,
        cpu_count: sys.cpus().len(),
        governors,
        governor_state,
        display_off_table: table.map(|table| table.name.to_string()),
        display_off_entries: table.map(|table| table.entries.to_vec()).unwrap_or_default(),
    }
}

/// Execute the platform command
pub fn execute(settings: &Settings, format: &OutputFormat) -> Result<()> {
    let dispatcher = HintDispatcher::from_settings(settings, Arc::new(RecordingTuner::new()));
    let report = build_report(settings, &dispatcher);

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n=== perfhint Platform Profile ===\n");
    match report.soc_id {
        Some(id) => println!("SoC id: {} ({})", id, report.identity),
        None => println!("SoC id: unreadable ({} assumed)", report.identity),
    }
    println!("CPU: {} ({} cores)", report.cpu_brand, report.cpu_count);

    println!("\nGovernors:");
    for entry in &report.governors {
        println!(
            "  cpu{}: {}",
            entry.cpu,
            entry.governor.as_deref().unwrap_or("unreadable")
        );
    }

    match report.governor_state {
        Some(GovernorState::Interactive) => println!("\nDisplay tuning: active"),
        Some(GovernorState::Other) => {
            println!("\nDisplay tuning: inactive (governor is not interactive)")
        }
        None => println!("\nDisplay tuning: unavailable (governor unreadable)"),
    }

    if let Some(name) = &report.display_off_table {
        println!("Display-off table {}:", name);
        for entry in &report.display_off_entries {
            println!("  {}", entry);
        }
    }
    println!();

    Ok(())
}
