// nmcli-client - Action Registry
// Copyright (C) 2026 nmcli-client contributors
// SPDX-License-Identifier: MIT

//! Static per-object command vocabularies.
//!
//! Each nmcli object carries a closed set of commands, and each command a
//! closed set of acceptable argument tokens. The tables are built at compile
//! time and never mutated; extending the vocabulary means adding entries
//! here, not mutating at runtime.

/// Allowed-argument declaration for one command of one object.
pub struct ActionSpec {
    /// Command name as passed to nmcli.
    pub command: &'static str,
    /// Whether calling with no argument at all is acceptable.
    pub allows_absent: bool,
    /// Acceptable argument tokens, already normalized (lowercase; booleans
    /// rendered as "true"/"false"). Empty means no token is ever accepted.
    pub allowed: &'static [&'static str],
}

/// Command vocabulary for one top-level nmcli object.
pub struct ObjectSpec {
    /// Object name as passed to nmcli (`nm`, `con`, `dev`).
    pub name: &'static str,
    pub actions: &'static [ActionSpec],
}

/// NetworkManager daemon status and radio switches.
pub static NM: ObjectSpec = ObjectSpec {
    name: "nm",
    actions: &[
        ActionSpec { command: "status", allows_absent: true, allowed: &[] },
        ActionSpec { command: "enable", allows_absent: false, allowed: &["true", "false"] },
        ActionSpec { command: "sleep", allows_absent: false, allowed: &["true", "false"] },
        ActionSpec { command: "wifi", allows_absent: false, allowed: &["on", "off"] },
        ActionSpec { command: "wwan", allows_absent: false, allowed: &["on", "off"] },
    ],
};

/// Connection profiles.
pub static CON: ObjectSpec = ObjectSpec {
    name: "con",
    actions: &[
        ActionSpec { command: "list", allows_absent: true, allowed: &["id", "uuid"] },
        ActionSpec { command: "status", allows_absent: true, allowed: &["id", "uuid", "path"] },
        ActionSpec { command: "up", allows_absent: false, allowed: &["id", "uuid", "iface", "ap"] },
        ActionSpec { command: "down", allows_absent: false, allowed: &["id", "uuid"] },
        ActionSpec { command: "delete", allows_absent: false, allowed: &["id", "uuid"] },
    ],
};

/// Network devices.
pub static DEV: ObjectSpec = ObjectSpec {
    name: "dev",
    actions: &[
        ActionSpec { command: "status", allows_absent: true, allowed: &[] },
        ActionSpec { command: "list", allows_absent: true, allowed: &["iface"] },
        ActionSpec { command: "disconnect", allows_absent: false, allowed: &["iface"] },
        ActionSpec { command: "wifi", allows_absent: false, allowed: &["list"] },
    ],
};

/// All registered objects.
pub static OBJECTS: &[&ObjectSpec] = &[&NM, &CON, &DEV];

/// Look up the spec for an `(object, command)` pair.
pub fn lookup(object: &str, command: &str) -> Option<&'static ActionSpec> {
    OBJECTS
        .iter()
        .find(|spec| spec.name == object)?
        .actions
        .iter()
        .find(|action| action.command == command)
}
