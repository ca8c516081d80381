//! Bitcoin Core RPC client layer.
//!
//! Defines the [`Transport`] trait that carries one HTTP POST, the
//! [`RpcClient`] that builds envelopes and classifies replies, and the method
//! catalog generated on top of it. `mock::MockTransport` stands in for the
//! network in unit tests.

pub mod catalog;
mod http_adapter;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use http_adapter::{basic_auth_digest, read_cookie_file, HttpTransport, RpcClient};
pub use http_adapter::{RpcRequest, RpcResponse};
pub use types::ChainInfo;

use async_trait::async_trait;

use crate::error::RpcError;

/// An outbound POST, fully prepared by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    /// Header name/value pairs, in the order they should be sent.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// What came back: status line and the raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    /// Reason phrase for `status`, e.g. `"Not Found"`.
    pub status_text: String,
    pub body: String,
}

/// Carries a single request/response exchange.
///
/// Implementations only move bytes; they never look at the status code or
/// body. All classification lives in [`RpcClient::call`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, request: HttpRequest) -> Result<HttpReply, RpcError>;
}
