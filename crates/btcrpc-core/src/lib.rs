pub mod config;
pub mod error;
pub mod rpc;

pub use config::{ClientConfig, RpcOptions};
pub use error::RpcError;
pub use rpc::{RpcClient, RpcRequest, RpcResponse};
