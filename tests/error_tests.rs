// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use perfhint::error::PerfHintError;
use std::io;

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let error: PerfHintError = io_error.into();

    match error {
        PerfHintError::Io(_) => {} // Expected
        _ => panic!("Expected Io error, got different error type"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: PerfHintError = json_error.into();
    assert!(matches!(error, PerfHintError::Json(_)));
    assert!(error.to_string().starts_with("JSON error: "));
}

#[test]
fn test_config_error_display() {
    let error = PerfHintError::Config("governor_cpus is empty".to_string());
    assert_eq!(
        error.to_string(),
        "Configuration error: governor_cpus is empty"
    );
}

#[test]
fn test_replay_error_display() {
    let error = PerfHintError::Replay {
        line: 7,
        message: "unknown event".to_string(),
    };
    assert_eq!(error.to_string(), "Replay error at line 7: unknown event");
}
