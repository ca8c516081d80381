//! JSON-RPC over HTTP for Bitcoin Core compatible endpoints.
//!
//! Builds Basic-auth POST requests with `reqwest`, classifies replies by
//! status, and resolves connection settings from URLs and cookie files.

mod client;
mod connection;
mod protocol;
mod transport;

pub use client::RpcClient;
pub use connection::{basic_auth_digest, read_cookie_file};
pub use protocol::{RpcRequest, RpcResponse};
pub use transport::HttpTransport;
