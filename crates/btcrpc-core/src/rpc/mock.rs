use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::RpcError;

use super::{HttpReply, HttpRequest, Transport};

enum Canned {
    Reply(HttpReply),
    Fail(String),
}

/// A recording transport for tests. Replays canned replies in order and
/// keeps every request it was handed.
pub struct MockTransport {
    replies: Mutex<VecDeque<Canned>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            replies: VecDeque::new(),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("mock lock poisoned").clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("mock lock poisoned").len()
    }
}

pub struct MockTransportBuilder {
    replies: VecDeque<Canned>,
}

impl MockTransportBuilder {
    /// Queue a reply. The reason phrase is filled in from `status`.
    pub fn reply(mut self, status: u16, body: &str) -> Self {
        let status_text = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_owned();
        self.replies.push_back(Canned::Reply(HttpReply {
            status,
            status_text,
            body: body.to_owned(),
        }));
        self
    }

    /// Queue a transport-level failure.
    pub fn fail(mut self, message: &str) -> Self {
        self.replies.push_back(Canned::Fail(message.to_owned()));
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            replies: Mutex::new(self.replies),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpReply, RpcError> {
        self.requests
            .lock()
            .expect("mock lock poisoned")
            .push(request);

        match self.replies.lock().expect("mock lock poisoned").pop_front() {
            Some(Canned::Reply(reply)) => Ok(reply),
            Some(Canned::Fail(message)) => Err(RpcError::Transport(message.into())),
            None => Err(RpcError::Transport("mock transport has no reply queued".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: &str) -> HttpRequest {
        HttpRequest {
            url: "http://127.0.0.1:8332".into(),
            headers: vec![("Content-Type".into(), "application/json".into())],
            body: body.into(),
        }
    }

    #[tokio::test]
    async fn replays_in_order_and_records() {
        let mock = MockTransport::builder()
            .reply(200, "1")
            .reply(404, "")
            .build();

        let first = mock.post(request("a")).await.expect("first reply");
        assert_eq!(first.status, 200);
        let second = mock.post(request("b")).await.expect("second reply");
        assert_eq!(second.status_text, "Not Found");

        assert!(mock.post(request("c")).await.is_err());
        let bodies: Vec<_> = mock.requests().into_iter().map(|r| r.body).collect();
        assert_eq!(bodies, vec!["a", "b", "c"]);
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = request("");
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("authorization"), None);
    }
}
