use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::RpcError;

/// Upper bound (exclusive) for generated request ids.
const REQUEST_ID_RANGE: u64 = 100_000;

/// A single JSON-RPC request envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub method: String,
    pub params: Vec<serde_json::Value>,
    pub id: u64,
}

impl RpcRequest {
    /// Build an envelope with a fresh id. `method` is lower-cased here, so
    /// every request built through this constructor goes out lower-case.
    pub fn new(method: &str, params: Vec<serde_json::Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            method: method.to_lowercase(),
            params,
            id: random_request_id(),
        }
    }
}

pub(crate) fn random_request_id() -> u64 {
    rand::thread_rng().gen_range(0..REQUEST_ID_RANGE)
}

/// Standard `{result, error, id}` response shape.
///
/// [`RpcClient::call`](super::RpcClient::call) hands back the body untouched;
/// this type is for callers that want the envelope checked.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default)]
    pub id: serde_json::Value,
}

impl RpcResponse {
    pub fn from_value(value: serde_json::Value) -> Result<Self, RpcError> {
        serde_json::from_value(value)
            .map_err(|e| RpcError::InvalidResponse(format!("not a JSON-RPC response: {e}")))
    }

    /// `result` on success, or the server's `error` as a typed failure.
    /// A missing or null `result` with no error yields `Value::Null`.
    pub fn into_result(self) -> Result<serde_json::Value, RpcError> {
        match self.error {
            Some(err) if !err.is_null() => Err(parse_jsonrpc_error(err)),
            _ => Ok(self.result.unwrap_or(serde_json::Value::Null)),
        }
    }
}

/// Parse a JSON-RPC error value into a structured `RpcError`.
///
/// Errors shaped `{"code": <int>, "message": <string>}` become `Server`;
/// anything else becomes `InvalidResponse` with the raw JSON.
pub(crate) fn parse_jsonrpc_error(err: serde_json::Value) -> RpcError {
    #[derive(Deserialize)]
    struct JsonRpcError {
        code: i64,
        message: String,
    }

    match serde_json::from_value::<JsonRpcError>(err.clone()) {
        Ok(parsed) => RpcError::Server {
            code: parsed.code,
            message: parsed.message,
        },
        Err(_) => RpcError::InvalidResponse(format!("non-standard JSON-RPC error: {err}")),
    }
}
