// nmcli-client - Action Validation & Serialization
// Copyright (C) 2026 nmcli-client contributors
// SPDX-License-Identifier: MIT

//! Turns caller-supplied arguments into a validated nmcli command string.
//!
//! Validation happens against the command's closed allow-list before any
//! process is spawned, so a rejected call has zero side effects. The
//! serialized form mirrors nmcli's own `command option value option value`
//! grammar: the dispatcher only pairs names with values, it knows nothing
//! about what the options mean.

use std::collections::HashMap;

use crate::models::{Error, Result, Token};
use crate::registry::ActionSpec;

/// Validate `positional` tokens and `named` pairs against `spec`, then
/// serialize them into the command string to hand to the query engine.
///
/// Positional tokens and named *values* are normalized per [`Token`]
/// variant; named argument *names* are matched against the allow-list
/// as-is. A positional token that matches a named argument name renders as
/// a `name value` pair; all other tokens render bare. [`Token::Absent`] is
/// accepted only for commands that declare it and contributes nothing to
/// the serialized string.
pub fn build_command(
    spec: &ActionSpec,
    positional: &[Token],
    named: &[(&str, Token)],
) -> Result<String> {
    let mut tokens: Vec<String> = Vec::new();

    for token in positional {
        match token.normalize() {
            Some(value) => {
                if !spec.allowed.contains(&value.as_str()) {
                    return Err(Error::argument_not_allowed(value, spec.command, spec.allowed));
                }
                tokens.push(value);
            }
            None => {
                if !spec.allows_absent {
                    return Err(Error::argument_not_allowed(
                        token.describe(),
                        spec.command,
                        spec.allowed,
                    ));
                }
            }
        }
    }

    // Named argument names join the token stream unchanged; only their
    // values get normalized, at render time.
    for (name, _) in named {
        if !spec.allowed.contains(name) {
            return Err(Error::argument_not_allowed(*name, spec.command, spec.allowed));
        }
        tokens.push((*name).to_string());
    }

    if tokens.is_empty() {
        return Ok(spec.command.to_string());
    }

    let values: HashMap<&str, Option<String>> = named
        .iter()
        .map(|(name, value)| (*name, value.normalize()))
        .collect();

    let mut parts = vec![spec.command.to_string()];
    for token in tokens {
        match values.get(token.as_str()) {
            Some(Some(value)) => parts.push(format!("{} {}", token, value)),
            _ => parts.push(token),
        }
    }

    Ok(parts.join(" "))
}
