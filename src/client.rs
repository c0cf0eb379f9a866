// nmcli-client - Client
// Copyright (C) 2026 nmcli-client contributors
// SPDX-License-Identifier: MIT

//! The public entry object tying the registry, dispatcher and query engine
//! together.

use crate::dispatch;
use crate::invoker::{Invoker, SystemInvoker};
use crate::models::{Error, Record, Result, Token};
use crate::objects::{Con, Dev, Nm};
use crate::query;
use crate::registry;

/// Façade over the nmcli executable.
///
/// Holds the invoker and the tool name; all lookup tables are static, so a
/// client is cheap and safe to share across threads. Calls block for the
/// duration of one subprocess invocation.
pub struct NmcliClient<I: Invoker = SystemInvoker> {
    invoker: I,
    tool: String,
}

impl NmcliClient<SystemInvoker> {
    /// Client that spawns the real `nmcli` binary.
    pub fn new() -> Self {
        Self::with_invoker(SystemInvoker)
    }
}

impl Default for NmcliClient<SystemInvoker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Invoker> NmcliClient<I> {
    /// Client with a custom invocation mechanism (timeouts, sandboxing,
    /// test doubles).
    pub fn with_invoker(invoker: I) -> Self {
        Self {
            invoker,
            tool: "nmcli".to_string(),
        }
    }

    /// Override the tool name or path invoked (default `nmcli`).
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// NetworkManager daemon operations (`nm status`, radio switches).
    pub fn nm(&self) -> Nm<'_, I> {
        Nm::new(self)
    }

    /// Connection profile operations (`con list/up/down/delete`).
    pub fn con(&self) -> Con<'_, I> {
        Con::new(self)
    }

    /// Device operations (`dev status/list/disconnect`).
    pub fn dev(&self) -> Dev<'_, I> {
        Dev::new(self)
    }

    #[cfg(test)]
    pub(crate) fn invoker(&self) -> &I {
        &self.invoker
    }

    /// Run a registered action: validate the arguments against the
    /// command's allow-list, serialize them, and query.
    ///
    /// This is the extension seam behind the typed facades; prefer those
    /// for the stock vocabulary.
    pub fn call(
        &self,
        object: &str,
        command: &str,
        positional: &[Token],
        named: &[(&str, Token)],
    ) -> Result<Vec<Record>> {
        let spec = registry::lookup(object, command).ok_or_else(|| Error::UnknownCommand {
            object: object.to_string(),
            command: command.to_string(),
        })?;
        let command = dispatch::build_command(spec, positional, named)?;
        self.query(object, Some(&command), None, false)
    }

    /// Run a raw query without action validation.
    ///
    /// The field set and parsing mode come from the registered tables keyed
    /// by `[object] ++ command tokens`; `fields` and `multiline` are
    /// accepted for compatibility but never override the tables.
    pub fn query(
        &self,
        object: &str,
        command: Option<&str>,
        fields: Option<&[String]>,
        multiline: bool,
    ) -> Result<Vec<Record>> {
        query::run_query(&self.invoker, &self.tool, object, command, fields, multiline)
    }
}
