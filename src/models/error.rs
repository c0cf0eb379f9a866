// nmcli-client - Error Types
// Copyright (C) 2026 nmcli-client contributors
// SPDX-License-Identifier: MIT

//! Shared error types for nmcli operations.

use thiserror::Error;

/// Result type alias for nmcli operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for nmcli operations.
#[derive(Debug, Error)]
pub enum Error {
    // ========================================
    // Validation Errors (raised before invocation)
    // ========================================
    #[error("{token} is not a valid argument for '{command}'. Parameters: {allowed}")]
    ArgumentNotAllowed {
        token: String,
        command: String,
        allowed: String,
    },

    #[error("Unknown command '{command}' for object '{object}'")]
    UnknownCommand { object: String, command: String },

    #[error("No field set registered for path '{0}' or any prefix of it")]
    FieldResolution(String),

    #[error("Failed to tokenize command string: {0}")]
    CommandParse(String),

    // ========================================
    // Invocation Errors
    // ========================================
    #[error("nmcli exited with code {code}. STDERR='{stderr}'")]
    ProcessFailure { code: i32, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an argument-validation error naming the offending token, the
    /// command it was supplied to, and the full allowed set.
    pub fn argument_not_allowed(
        token: impl Into<String>,
        command: impl Into<String>,
        allowed: &[&str],
    ) -> Self {
        Self::ArgumentNotAllowed {
            token: token.into(),
            command: command.into(),
            allowed: format!("[{}]", allowed.join(", ")),
        }
    }

    /// Check if this error was raised before any external process ran.
    pub fn is_pre_invocation(&self) -> bool {
        matches!(
            self,
            Self::ArgumentNotAllowed { .. }
                | Self::UnknownCommand { .. }
                | Self::FieldResolution(_)
                | Self::CommandParse(_)
        )
    }
}
