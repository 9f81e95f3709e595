// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! perfhint - power hint dispatcher
//!
//! Entry point for the perfhint CLI application.

use clap::Parser;

use perfhint::cli::{Cli, Commands};
use perfhint::commands;
use perfhint::config::Settings;
use perfhint::error::Result;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on hint decisions, `-vv` everything in the crate. `RUST_LOG` still applies.
    if cli.verbose > 0 {
        let directive = if cli.verbose > 1 {
            "perfhint=trace"
        } else {
            "perfhint=debug"
        };
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load settings
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    tracing::debug!(?settings, "settings loaded");

    // Dispatch to appropriate command
    match &cli.command {
        Commands::Platform => {
            commands::platform::execute(&settings, &cli.format)?;
        }
        Commands::Hint(args) => {
            commands::hint::execute(args, &settings, &cli.format)?;
        }
        Commands::Display(args) => {
            commands::hint::execute_display(args, &settings, &cli.format)?;
        }
        Commands::Replay(args) => {
            commands::replay::execute(args, &cli.format)?;
        }
    }

    Ok(())
}
