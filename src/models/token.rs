// nmcli-client - Argument Tokens
// Copyright (C) 2026 nmcli-client contributors
// SPDX-License-Identifier: MIT

//! Argument token values accepted by nmcli actions.

use serde::{Deserialize, Serialize};

/// A single argument value supplied to an action.
///
/// nmcli's own grammar treats booleans, integers and bare words uniformly
/// once rendered on the command line, so every variant carries its own
/// normalization rule instead of relying on runtime type inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// Boolean switch, rendered as `true`/`false`.
    Bool(bool),
    /// Integer value, rendered in decimal.
    Int(i64),
    /// Free-form text, lower-cased before validation and rendering.
    Text(String),
    /// No value supplied.
    Absent,
}

impl Token {
    /// Normalize this token into its command-line form.
    ///
    /// Returns `None` for [`Token::Absent`]; everything else becomes the
    /// string nmcli expects: `Bool(true)` → `"true"`, `Int(5)` → `"5"`,
    /// `Text("ID")` → `"id"`.
    pub fn normalize(&self) -> Option<String> {
        match self {
            Self::Bool(b) => Some(b.to_string()),
            Self::Int(i) => Some(i.to_string()),
            Self::Text(s) => Some(s.to_lowercase()),
            Self::Absent => None,
        }
    }

    /// Human-readable form for error messages.
    pub fn describe(&self) -> String {
        self.normalize().unwrap_or_else(|| "none".to_string())
    }
}

impl From<bool> for Token {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Token {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
