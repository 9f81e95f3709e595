// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for perfhint
//!
//! Hint handling never returns these to the dispatcher caller; they are logged
//! and degraded to a [`HintStatus`](crate::hints::HintStatus). They surface from
//! the ambient layers: configuration, sysfs probing, and replay scripts.

use thiserror::Error;

/// Main error type for perfhint operations
#[derive(Error, Debug)]
pub enum PerfHintError {
    /// The boost primitive handed back an invalid handle
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// No CPU in the probe list reported a scaling governor
    #[error("Governor unreadable: {0}")]
    GovernorUnreadable(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed or out-of-order replay script
    #[error("Replay error at line {line}: {message}")]
    Replay { line: usize, message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for perfhint operations
pub type Result<T> = std::result::Result<T, PerfHintError>;
