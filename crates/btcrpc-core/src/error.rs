/// Prefix carried by every [`RpcError`] message, so callers can tell
/// failures from this client apart from other sources.
pub const ERROR_PREFIX: &str = "Bitcoin JSON-RPC: ";

/// Body Bitcoin Core sends with a 500 when its HTTP work queue is full.
pub const WORK_QUEUE_EXCEEDED: &str = "Work queue depth exceeded";

/// HTTP 429 Too Many Requests, reported for work queue overload.
pub const OVERLOAD_CODE: u16 = 429;

#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("Bitcoin JSON-RPC: Connection Rejected: 401 Unauthorized")]
    Authentication,

    #[error("Bitcoin JSON-RPC: Connection Rejected: 403 Forbidden")]
    Authorization,

    /// The node answered 500 with [`WORK_QUEUE_EXCEEDED`]. Reported with
    /// code [`OVERLOAD_CODE`] so it can share 429 backoff handling.
    #[error("Bitcoin JSON-RPC: Work queue depth exceeded")]
    Overload,

    #[error("Bitcoin JSON-RPC: Error: {status_text}")]
    Request {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("Bitcoin JSON-RPC: Error Parsing JSON")]
    ResponseParse(#[source] serde_json::Error),

    #[error("Bitcoin JSON-RPC: invalid connection URL `{url}`: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Bitcoin JSON-RPC: cookie file {path}: {message}")]
    Cookie { path: String, message: String },

    #[error("Bitcoin JSON-RPC: Connection Failed")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Bitcoin JSON-RPC: could not encode request")]
    Serialize(#[source] serde_json::Error),

    #[error("Bitcoin JSON-RPC: server error {code}: {message}")]
    Server { code: i64, message: String },

    #[error("Bitcoin JSON-RPC: invalid response: {0}")]
    InvalidResponse(String),
}

impl RpcError {
    /// Machine-readable code. Only the overload case carries one.
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Overload => Some(OVERLOAD_CODE),
            _ => None,
        }
    }

    /// Whether a caller may back off and retry. The client never retries
    /// on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Overload)
    }
}
