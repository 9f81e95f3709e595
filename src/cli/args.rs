// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for perfhint.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// perfhint - power hint dispatcher for CPU/bus boosts
#[derive(Parser, Debug)]
#[command(name = "perfhint")]
#[command(version, about = "Power hint dispatcher for CPU/bus boosts")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show SoC identity, governors and the display table in effect
    #[command(alias = "hw")]
    Platform,

    /// Send one power hint through the dispatcher
    Hint(HintArgs),

    /// Signal a display state change
    Display(DisplayArgs),

    /// Replay a JSON-lines script of timed hints
    Replay(ReplayArgs),
}

/// Arguments for the hint subcommand
#[derive(clap::Args, Debug)]
pub struct HintArgs {
    #[command(subcommand)]
    pub command: HintCommand,
}

#[derive(Subcommand, Debug)]
pub enum HintCommand {
    /// User interaction (touch, scroll)
    Interaction {
        /// Requested boost duration in milliseconds
        #[arg(short, long, allow_negative_numbers = true)]
        duration: Option<i64>,
    },

    /// Activity launch started, or ended with --end
    Launch {
        /// Signal that the launch has finished
        #[arg(long)]
        end: bool,
    },

    /// Raw Android power hint id
    Raw {
        /// Hint id (decimal or 0x-prefixed hex)
        #[arg(value_parser = parse_hint_id)]
        id: u32,

        /// Attach a duration payload in milliseconds
        #[arg(short, long, allow_negative_numbers = true, conflicts_with = "present")]
        duration: Option<i64>,

        /// Attach a bare presence payload
        #[arg(long)]
        present: bool,
    },
}

/// Arguments for the display subcommand
#[derive(clap::Args, Debug)]
pub struct DisplayArgs {
    /// New display state
    pub state: DisplayState,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayState {
    On,
    Off,
}

impl DisplayState {
    pub fn is_on(&self) -> bool {
        matches!(self, DisplayState::On)
    }
}

/// Arguments for the replay subcommand
#[derive(clap::Args, Debug)]
pub struct ReplayArgs {
    /// Path to the JSON-lines script
    pub script: PathBuf,

    /// Governor every CPU reports during the replay
    #[arg(long, default_value = "interactive")]
    pub governor: String,

    /// SoC id reported during the replay (unset resolves to SDM660)
    #[arg(long)]
    pub soc_id: Option<u32>,
}

/// Output format for command results
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}

fn parse_hint_id(raw: &str) -> Result<u32, String> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => raw.parse(),
    };
    parsed.map_err(|err| format!("invalid hint id '{}': {}", raw, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hint_id() {
        assert_eq!(parse_hint_id("2"), Ok(2));
        assert_eq!(parse_hint_id("0x8"), Ok(8));
        assert_eq!(parse_hint_id("0X1A"), Ok(26));
        assert!(parse_hint_id("launch").is_err());
        assert!(parse_hint_id("0xZZ").is_err());
    }

    #[test]
    fn test_display_state_is_on() {
        assert!(DisplayState::On.is_on());
        assert!(!DisplayState::Off.is_on());
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
