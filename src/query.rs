// nmcli-client - Query Engine
// Copyright (C) 2026 nmcli-client contributors
// SPDX-License-Identifier: MIT

//! Composes field resolution, invocation and parsing into one call.

use tracing::{debug, warn};

use crate::fields;
use crate::invoker::Invoker;
use crate::models::{Error, Record, Result};
use crate::parser;

/// Resolve the field set for `[object] ++ command tokens`, invoke the tool
/// with `--terse --fields`, and parse the output.
///
/// Exit code 0 yields parsed records; anything else is
/// [`Error::ProcessFailure`] carrying the code and stderr verbatim. No
/// retries. `explicit_fields`/`explicit_multiline` are forwarded to the
/// resolver, which treats them as inert (see [`fields::resolve`]).
pub(crate) fn run_query<I: Invoker>(
    invoker: &I,
    tool: &str,
    object: &str,
    command: Option<&str>,
    explicit_fields: Option<&[String]>,
    explicit_multiline: bool,
) -> Result<Vec<Record>> {
    let mut path = vec![object];
    if let Some(command) = command {
        path.extend(command.split_whitespace());
    }
    let (fields, multiline) = fields::resolve(&path, explicit_fields, explicit_multiline)?;

    let mut argv: Vec<String> = vec![
        tool.to_string(),
        "--terse".to_string(),
        "--fields".to_string(),
        fields.join(","),
        object.to_string(),
    ];
    if let Some(command) = command {
        let tokens =
            shell_words::split(command).map_err(|e| Error::CommandParse(e.to_string()))?;
        argv.extend(tokens);
    }

    debug!(?argv, "querying");
    let invocation = invoker.invoke(&argv)?;

    if invocation.status != 0 {
        let stderr = String::from_utf8_lossy(&invocation.stderr).into_owned();
        warn!(code = invocation.status, "nmcli returned a non-zero exit code");
        return Err(Error::ProcessFailure {
            code: invocation.status,
            stderr,
        });
    }

    let stdout = String::from_utf8_lossy(&invocation.stdout);
    Ok(parser::parse(&stdout, fields, multiline))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoker::doubles::RecordingInvoker;

    #[test]
    fn test_argv_shape() {
        let invoker = RecordingInvoker::returning("");
        run_query(&invoker, "nmcli", "dev", Some("status"), None, false).unwrap();
        assert_eq!(
            invoker.last_argv(),
            vec!["nmcli", "--terse", "--fields", "DEVICE,TYPE,STATE", "dev", "status"]
        );
    }

    #[test]
    fn test_quoted_command_tokens_split_shell_style() {
        let invoker = RecordingInvoker::returning("");
        run_query(&invoker, "nmcli", "con", Some("up id 'Home Wifi'"), None, false).unwrap();
        let argv = invoker.last_argv();
        assert_eq!(&argv[argv.len() - 3..], ["up", "id", "Home Wifi"]);
    }

    #[test]
    fn test_unbalanced_quote_is_parse_error_before_invoking() {
        let invoker = RecordingInvoker::returning("");
        let err = run_query(&invoker, "nmcli", "con", Some("up id 'oops"), None, false).unwrap_err();
        assert!(matches!(err, Error::CommandParse(_)));
        assert_eq!(invoker.call_count(), 0);
    }

    #[test]
    fn test_nonzero_exit_raises_process_failure() {
        let invoker = RecordingInvoker::failing(10, "Error: nmcli is not running.");
        let err = run_query(&invoker, "nmcli", "nm", Some("status"), None, false).unwrap_err();
        match err {
            Error::ProcessFailure { code, stderr } => {
                assert_eq!(code, 10);
                assert_eq!(stderr, "Error: nmcli is not running.");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unresolved_path_prevents_invocation() {
        let invoker = RecordingInvoker::returning("");
        let err = run_query(&invoker, "nmcli", "radio", None, None, false).unwrap_err();
        assert!(matches!(err, Error::FieldResolution(_)));
        assert_eq!(invoker.call_count(), 0);
    }

    #[test]
    fn test_multiline_mode_follows_resolved_key() {
        let invoker = RecordingInvoker::returning("connection.id:home\nipv4.addresses:192.168.1.2\n");
        let records =
            run_query(&invoker, "nmcli", "con", Some("list id home"), None, false).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("id"), Some("home"));
        assert_eq!(records[0].get("addresses"), Some("192.168.1.2"));
    }
}
