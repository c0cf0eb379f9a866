// nmcli-client - Object Facades
// Copyright (C) 2026 nmcli-client contributors
// SPDX-License-Identifier: MIT

//! Typed facades exposing each nmcli object's vocabulary as named methods.
//!
//! Every method funnels through the same validate → serialize → query path
//! as [`NmcliClient::call`]; the facades only fix the object name and shape
//! the arguments. Selector-taking methods (`up`, `down`, …) accept the
//! selector as a name/value pair, e.g. `con().up("id", "eth0")` runs
//! `nmcli con up id eth0`.

use crate::client::NmcliClient;
use crate::invoker::Invoker;
use crate::models::{Record, Result, Token};

/// NetworkManager daemon status and radio switches (`nm`).
pub struct Nm<'a, I: Invoker> {
    client: &'a NmcliClient<I>,
}

impl<'a, I: Invoker> Nm<'a, I> {
    pub(crate) fn new(client: &'a NmcliClient<I>) -> Self {
        Self { client }
    }

    /// Overall daemon status: running state, wifi/wwan hardware switches.
    pub fn status(&self) -> Result<Vec<Record>> {
        self.client.call("nm", "status", &[], &[])
    }

    /// Enable or disable networking.
    pub fn enable(&self, enabled: bool) -> Result<Vec<Record>> {
        self.client.call("nm", "enable", &[Token::Bool(enabled)], &[])
    }

    /// Put networking to sleep or wake it.
    pub fn sleep(&self, sleep: bool) -> Result<Vec<Record>> {
        self.client.call("nm", "sleep", &[Token::Bool(sleep)], &[])
    }

    /// Switch wifi `"on"` or `"off"`.
    pub fn wifi(&self, switch: &str) -> Result<Vec<Record>> {
        self.client.call("nm", "wifi", &[Token::from(switch)], &[])
    }

    /// Switch wwan (mobile broadband) `"on"` or `"off"`.
    pub fn wwan(&self, switch: &str) -> Result<Vec<Record>> {
        self.client.call("nm", "wwan", &[Token::from(switch)], &[])
    }
}

/// Connection profile operations (`con`).
pub struct Con<'a, I: Invoker> {
    client: &'a NmcliClient<I>,
}

impl<'a, I: Invoker> Con<'a, I> {
    pub(crate) fn new(client: &'a NmcliClient<I>) -> Self {
        Self { client }
    }

    /// List all configured connections.
    pub fn list(&self) -> Result<Vec<Record>> {
        self.client.call("con", "list", &[], &[])
    }

    /// List details of one connection selected by `"id"` or `"uuid"`.
    ///
    /// Detail output is sectioned (`connection.id:...`), so this yields a
    /// single accumulated record.
    pub fn list_by(&self, selector: &str, value: &str) -> Result<Vec<Record>> {
        self.client
            .call("con", "list", &[], &[(selector, Token::from(value))])
    }

    /// Status of active connections.
    pub fn status(&self) -> Result<Vec<Record>> {
        self.client.call("con", "status", &[], &[])
    }

    /// Status of one active connection selected by `"id"`, `"uuid"` or
    /// `"path"`.
    pub fn status_by(&self, selector: &str, value: &str) -> Result<Vec<Record>> {
        self.client
            .call("con", "status", &[], &[(selector, Token::from(value))])
    }

    /// Activate a connection selected by `"id"`, `"uuid"`, `"iface"` or
    /// `"ap"`.
    pub fn up(&self, selector: &str, value: &str) -> Result<Vec<Record>> {
        self.client
            .call("con", "up", &[], &[(selector, Token::from(value))])
    }

    /// Deactivate a connection selected by `"id"` or `"uuid"`.
    pub fn down(&self, selector: &str, value: &str) -> Result<Vec<Record>> {
        self.client
            .call("con", "down", &[], &[(selector, Token::from(value))])
    }

    /// Delete a connection selected by `"id"` or `"uuid"`.
    pub fn delete(&self, selector: &str, value: &str) -> Result<Vec<Record>> {
        self.client
            .call("con", "delete", &[], &[(selector, Token::from(value))])
    }
}

/// Network device operations (`dev`).
pub struct Dev<'a, I: Invoker> {
    client: &'a NmcliClient<I>,
}

impl<'a, I: Invoker> Dev<'a, I> {
    pub(crate) fn new(client: &'a NmcliClient<I>) -> Self {
        Self { client }
    }

    /// Status of all devices.
    pub fn status(&self) -> Result<Vec<Record>> {
        self.client.call("dev", "status", &[], &[])
    }

    /// List all devices.
    pub fn list(&self) -> Result<Vec<Record>> {
        self.client.call("dev", "list", &[], &[])
    }

    /// List one device by interface name.
    pub fn list_iface(&self, iface: &str) -> Result<Vec<Record>> {
        self.client
            .call("dev", "list", &[], &[("iface", Token::from(iface))])
    }

    /// Disconnect a device by interface name.
    pub fn disconnect(&self, iface: &str) -> Result<Vec<Record>> {
        self.client
            .call("dev", "disconnect", &[], &[("iface", Token::from(iface))])
    }

    /// Scan for visible wifi access points.
    pub fn wifi_list(&self) -> Result<Vec<Record>> {
        self.client.call("dev", "wifi", &[Token::from("list")], &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoker::doubles::RecordingInvoker;
    use crate::models::Error;

    fn client_returning(stdout: &str) -> NmcliClient<RecordingInvoker> {
        NmcliClient::with_invoker(RecordingInvoker::returning(stdout))
    }

    fn tail(argv: &[String], n: usize) -> Vec<String> {
        argv[argv.len() - n..].to_vec()
    }

    #[test]
    fn test_nm_switches_serialize_booleans() {
        let client = client_returning("");
        client.nm().enable(true).unwrap();
        assert_eq!(tail(&client.invoker().last_argv(), 3), ["nm", "enable", "true"]);

        client.nm().sleep(false).unwrap();
        assert_eq!(tail(&client.invoker().last_argv(), 3), ["nm", "sleep", "false"]);
    }

    #[test]
    fn test_nm_wifi_normalizes_switch_token() {
        let client = client_returning("");
        client.nm().wifi("OFF").unwrap();
        assert_eq!(tail(&client.invoker().last_argv(), 3), ["nm", "wifi", "off"]);

        let err = client.nm().wifi("sideways").unwrap_err();
        assert!(matches!(err, Error::ArgumentNotAllowed { .. }));
    }

    #[test]
    fn test_con_selector_pairs() {
        let client = client_returning("");
        client.con().up("id", "eth0").unwrap();
        assert_eq!(tail(&client.invoker().last_argv(), 4), ["con", "up", "id", "eth0"]);

        client.con().delete("uuid", "6b028256").unwrap();
        assert_eq!(
            tail(&client.invoker().last_argv(), 4),
            ["con", "delete", "uuid", "6b028256"]
        );

        let err = client.con().up("ssid", "home").unwrap_err();
        assert!(matches!(err, Error::ArgumentNotAllowed { .. }));
    }

    #[test]
    fn test_con_list_by_uses_detail_field_set() {
        let client = client_returning("connection.id:home\n");
        let records = client.con().list_by("id", "home").unwrap();
        let argv = client.invoker().last_argv();
        assert!(argv[3].starts_with("connection,802-3-ethernet,"));
        assert_eq!(tail(&argv, 4), ["con", "list", "id", "home"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("id"), Some("home"));
    }

    #[test]
    fn test_dev_vocabulary() {
        let client = client_returning("");
        client.dev().wifi_list().unwrap();
        assert_eq!(tail(&client.invoker().last_argv(), 3), ["dev", "wifi", "list"]);

        client.dev().disconnect("wlan0").unwrap();
        assert_eq!(
            tail(&client.invoker().last_argv(), 4),
            ["dev", "disconnect", "iface", "wlan0"]
        );

        client.dev().list_iface("eth0").unwrap();
        assert_eq!(
            tail(&client.invoker().last_argv(), 4),
            ["dev", "list", "iface", "eth0"]
        );
    }

    #[test]
    fn test_dev_status_parses_rows() {
        let client = client_returning("eth0:ethernet:connected\nwlan0:wifi:disconnected\n");
        let records = client.dev().status().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("DEVICE"), Some("eth0"));
        assert_eq!(records[1].get("STATE"), Some("disconnected"));
    }
}
