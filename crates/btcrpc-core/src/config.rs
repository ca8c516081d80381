//! Client configuration.
//!
//! [`RpcOptions`] is the partial, user-facing form: every field may be
//! omitted. [`ClientConfig`] is what a client actually runs with, produced by
//! merging options over the defaults field by field.

use serde::Deserialize;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8332;
pub const DEFAULT_USER: &str = "user";
pub const DEFAULT_PASS: &str = "pass";
pub const DEFAULT_PROTOCOL: &str = "http";

/// Partial connection settings. Unset fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RpcOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub protocol: Option<String>,
}

/// Fully resolved connection settings, fixed for the lifetime of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub protocol: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        resolve(RpcOptions::default())
    }
}

impl ClientConfig {
    /// Endpoint URL the client POSTs to. There is no path component.
    ///
    /// `protocol` may be stored either as a bare scheme (`http`) or in the
    /// URL-parser form with a trailing colon (`http:`); both produce the same
    /// endpoint.
    pub fn endpoint(&self) -> String {
        let scheme = self.protocol.trim_end_matches(['/', ':']);
        format!("{scheme}://{}:{}", self.host, self.port)
    }
}

/// Shallow merge of `options` over the defaults.
pub fn resolve(options: RpcOptions) -> ClientConfig {
    ClientConfig {
        host: options.host.unwrap_or_else(|| DEFAULT_HOST.to_owned()),
        port: options.port.unwrap_or(DEFAULT_PORT),
        user: options.user.unwrap_or_else(|| DEFAULT_USER.to_owned()),
        pass: options.pass.unwrap_or_else(|| DEFAULT_PASS.to_owned()),
        protocol: options
            .protocol
            .unwrap_or_else(|| DEFAULT_PROTOCOL.to_owned()),
    }
}
