// nmcli-client - Field Resolution
// Copyright (C) 2026 nmcli-client contributors
// SPDX-License-Identifier: MIT

//! Registered field sets and the prefix-fallback resolver.
//!
//! Every query sends an explicit `--fields` list so nmcli's terse output has
//! a known column layout. The table below maps command paths to the field
//! set to request; fine-grained paths that have no entry of their own fall
//! back to the nearest registered ancestor prefix (`con up id` shares the
//! `con` field set, while `con list id` narrows it).

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::models::{Error, Result};

/// Field list plus parsing mode for one registered command path.
pub struct FieldSpec {
    /// Ordered column names passed via `--fields` and used as record keys.
    pub fields: &'static [&'static str],
    /// Whether output arrives as `section.property:value` lines that
    /// accumulate into a single record.
    pub multiline: bool,
}

static FIELD_TABLE: Lazy<HashMap<&'static str, FieldSpec>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert(
        "nm",
        FieldSpec {
            fields: &["RUNNING", "STATE", "WIFI-HARDWARE", "WIFI", "WWAN-HARDWARE", "WWAN"],
            multiline: false,
        },
    );
    table.insert(
        "dev",
        FieldSpec {
            fields: &["DEVICE", "TYPE", "STATE"],
            multiline: false,
        },
    );
    table.insert(
        "con",
        FieldSpec {
            fields: &["NAME", "UUID", "TYPE", "TIMESTAMP-REAL"],
            multiline: false,
        },
    );
    table.insert(
        "con status",
        FieldSpec {
            fields: &["NAME", "UUID", "DEVICES", "DEFAULT", "VPN", "MASTER-PATH"],
            multiline: false,
        },
    );
    table.insert(
        "con list id",
        FieldSpec {
            fields: &[
                "connection",
                "802-3-ethernet",
                "802-1x",
                "802-11-wireless",
                "802-11-wireless-security",
                "ipv4",
                "ipv6",
                "serial",
                "ppp",
                "pppoe",
                "gsm",
                "cdma",
                "bluetooth",
                "802-11-olpc-mesh",
                "vpn",
                "infiniband",
                "bond",
                "vlan",
            ],
            multiline: true,
        },
    );
    table
});

/// Resolve the field set and parsing mode for a command path.
///
/// Tries the space-joined path, then successively shorter prefixes, and fails
/// with [`Error::FieldResolution`] once no tokens remain. The `explicit_*`
/// parameters exist for signature compatibility with the query entry point
/// and are deliberately inert: the registered table always wins, and the
/// multiline flag comes solely from the matched key.
pub fn resolve(
    path: &[&str],
    explicit_fields: Option<&[String]>,
    explicit_multiline: bool,
) -> Result<(&'static [&'static str], bool)> {
    if explicit_fields.is_some() || explicit_multiline {
        debug!("explicit field overrides are ignored; using the registered table");
    }

    for end in (1..=path.len()).rev() {
        let key = path[..end].join(" ");
        if let Some(spec) = FIELD_TABLE.get(key.as_str()) {
            debug!(key = %key, multiline = spec.multiline, "resolved field set");
            return Ok((spec.fields, spec.multiline));
        }
    }

    Err(Error::FieldResolution(path.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_keys_resolve() {
        let (fields, multiline) = resolve(&["nm"], None, false).unwrap();
        assert_eq!(
            fields,
            &["RUNNING", "STATE", "WIFI-HARDWARE", "WIFI", "WWAN-HARDWARE", "WWAN"]
        );
        assert!(!multiline);

        let (fields, multiline) = resolve(&["dev"], None, false).unwrap();
        assert_eq!(fields, &["DEVICE", "TYPE", "STATE"]);
        assert!(!multiline);

        let (fields, multiline) = resolve(&["con"], None, false).unwrap();
        assert_eq!(fields, &["NAME", "UUID", "TYPE", "TIMESTAMP-REAL"]);
        assert!(!multiline);

        let (fields, multiline) = resolve(&["con", "status"], None, false).unwrap();
        assert_eq!(fields, &["NAME", "UUID", "DEVICES", "DEFAULT", "VPN", "MASTER-PATH"]);
        assert!(!multiline);

        let (fields, multiline) = resolve(&["con", "list", "id"], None, false).unwrap();
        assert_eq!(fields.len(), 18);
        assert_eq!(fields[0], "connection");
        assert!(multiline);
    }

    #[test]
    fn test_prefix_fallback() {
        // "con up id eth0" has no entry of its own; falls back to "con".
        let (fields, multiline) = resolve(&["con", "up", "id", "eth0"], None, false).unwrap();
        assert_eq!(fields, &["NAME", "UUID", "TYPE", "TIMESTAMP-REAL"]);
        assert!(!multiline);

        // "dev wifi list" falls back to "dev".
        let (fields, _) = resolve(&["dev", "wifi", "list"], None, false).unwrap();
        assert_eq!(fields, &["DEVICE", "TYPE", "STATE"]);
    }

    #[test]
    fn test_unregistered_path_fails() {
        let err = resolve(&["radio", "wifi"], None, false).unwrap_err();
        assert!(matches!(err, Error::FieldResolution(ref path) if path == "radio wifi"));
    }

    #[test]
    fn test_explicit_overrides_are_inert() {
        let explicit = vec!["A".to_string(), "B".to_string()];
        let (fields, multiline) = resolve(&["dev"], Some(&explicit), true).unwrap();
        assert_eq!(fields, &["DEVICE", "TYPE", "STATE"]);
        assert!(!multiline);
    }
}
