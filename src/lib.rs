// nmcli-client - Library Root
// Copyright (C) 2026 nmcli-client contributors
// SPDX-License-Identifier: MIT

//! # nmcli-client
//!
//! A typed Rust façade over the `nmcli` NetworkManager command-line tool:
//! query device and connection status, bring connections up or down, and
//! toggle wifi without building raw command lines or hand-parsing nmcli's
//! terse colon-delimited output.
//!
//! Two engines do the work. A field-resolution/output-parsing engine picks
//! the `--fields` list for each command path and turns both tabular
//! (`value:value:value`) and sectioned (`section.property:value`) output
//! into [`Record`]s. An action-validation engine checks caller arguments
//! against each command's closed allow-list *before* anything is spawned
//! and serializes them back into nmcli's `command option value` grammar.
//!
//! # Example
//!
//! ```no_run
//! use nmcli_client::NmcliClient;
//!
//! fn main() -> nmcli_client::Result<()> {
//!     let nmcli = NmcliClient::new();
//!
//!     for device in nmcli.dev().status()? {
//!         println!("{:?}: {:?}", device.get("DEVICE"), device.get("STATE"));
//!     }
//!
//!     nmcli.con().up("id", "home")?;
//!     nmcli.nm().wifi("off")?;
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every operation returns [`Result`]. Argument and field-resolution
//! failures are reported before any process runs; a non-zero nmcli exit
//! surfaces as [`Error::ProcessFailure`] with the exit code and stderr.
//! Nothing is retried and nothing is swallowed.
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (resolved field sets, spawned argv,
//! non-zero exits) and never installs a subscriber; enable one in the host
//! application, e.g. `tracing_subscriber::fmt()` with
//! `RUST_LOG=nmcli_client=debug`.

mod client;
mod dispatch;
mod fields;
mod invoker;
mod models;
mod objects;
mod parser;
mod query;
mod registry;

pub use client::NmcliClient;
pub use invoker::{Invocation, Invoker, SystemInvoker};
pub use models::{Error, Record, Result, Token};
pub use objects::{Con, Dev, Nm};
pub use registry::{ActionSpec, ObjectSpec, OBJECTS};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
