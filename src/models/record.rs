// nmcli-client - Output Records
// Copyright (C) 2026 nmcli-client contributors
// SPDX-License-Identifier: MIT

//! Structured rows parsed out of nmcli's terse output.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One row of structured nmcli output: field name → value.
///
/// In tabular (single-line) mode every record carries exactly the keys of the
/// field set the query was made with. In multiline mode a query yields a
/// single record accumulating `section.property:value` lines, keyed by the
/// property name alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(HashMap<String, String>);

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a field value by name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Set a field value, returning any previous value for the same name.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(field.into(), value.into())
    }

    /// Number of fields in this record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record holds no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(field, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
