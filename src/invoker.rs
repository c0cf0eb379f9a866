// nmcli-client - Process Invocation
// Copyright (C) 2026 nmcli-client contributors
// SPDX-License-Identifier: MIT

//! The subprocess boundary: run an argument vector, collect its output.
//!
//! The core never retries, never times out and never inspects argv beyond
//! what validation already guaranteed. Anything that needs a timeout or a
//! different spawning mechanism supplies its own [`Invoker`].

use std::io;
use std::process::Command;

use tracing::debug;

/// Outcome of one external process run. Ephemeral: only the parsed records
/// outlive it.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Process exit code; `-1` when the process was killed by a signal.
    pub status: i32,
    /// Captured standard output, raw bytes.
    pub stdout: Vec<u8>,
    /// Captured standard error, raw bytes.
    pub stderr: Vec<u8>,
}

/// Executes an argument vector and returns its exit status and captured
/// streams. Failure to start the process at all surfaces as the underlying
/// `io::Error`.
pub trait Invoker {
    fn invoke(&self, argv: &[String]) -> io::Result<Invocation>;
}

/// Default invoker: spawns the real process via `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInvoker;

impl Invoker for SystemInvoker {
    fn invoke(&self, argv: &[String]) -> io::Result<Invocation> {
        debug!(?argv, "spawning");
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty argument vector"))?;

        let output = Command::new(program).args(args).output()?;

        Ok(Invocation {
            status: output.status.code().unwrap_or(-1),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
