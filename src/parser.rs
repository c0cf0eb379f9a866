// nmcli-client - Terse Output Parsing
// Copyright (C) 2026 nmcli-client contributors
// SPDX-License-Identifier: MIT

//! Parsing of nmcli's terse (colon-delimited) output into records.
//!
//! Two fixed shapes exist. Tabular output carries one row per line with
//! positional colon-separated columns. Multiline output carries one
//! `section.property:value` pair per line and describes a single object.

use crate::models::Record;

/// Parse terse stdout into records.
///
/// `fields` is the ordered column list the query was made with; `multiline`
/// selects the parsing mode resolved for that query.
pub fn parse(stdout: &str, fields: &[&str], multiline: bool) -> Vec<Record> {
    if multiline {
        vec![parse_sections(stdout)]
    } else {
        parse_tabular(stdout, fields)
    }
}

/// Tabular mode: one record per line, columns zipped positionally onto
/// `fields`. Lines whose column count differs from the field count are
/// dropped; nmcli pads and varies trailing output, so this leniency is
/// load-bearing rather than a defect.
fn parse_tabular(stdout: &str, fields: &[&str]) -> Vec<Record> {
    let mut records = Vec::new();
    for line in stdout.lines() {
        let values: Vec<&str> = line.split(':').collect();
        if values.len() != fields.len() {
            continue;
        }
        let record = fields
            .iter()
            .zip(values)
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect();
        records.push(record);
    }
    records
}

/// Multiline mode: accumulate `section.property:value` lines into one
/// record keyed by property name. The section prefix is discarded, so a
/// property appearing under several sections keeps only the last value.
/// Lines without a colon, or whose key carries no dot, are skipped. Exactly
/// one record is emitted even when nothing matched.
fn parse_sections(stdout: &str) -> Record {
    let mut record = Record::new();
    for line in stdout.lines() {
        let Some((multikey, value)) = line.split_once(':') else {
            continue;
        };
        let Some((_section, property)) = multikey.split_once('.') else {
            continue;
        };
        record.set(property, value);
    }
    record
}
