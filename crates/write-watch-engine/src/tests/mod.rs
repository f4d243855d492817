use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::VecDeque;
use tempfile::TempDir;

use crate::enhance::{EnhancementClient, EnhancementSettings, HttpReply, Transport, TransportError};

/// A request captured by [`StubTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub bearer_token: String,
    pub body: Option<Value>,
}

/// Transport that replays queued replies and records what was sent.
#[derive(Default)]
pub struct StubTransport {
    replies: RefCell<VecDeque<Result<HttpReply, TransportError>>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an HTTP reply.
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(HttpReply {
            status,
            body: body.to_string(),
        }));
        self
    }

    /// Queues a successful chat completion carrying `content`.
    pub fn completion(self, content: &str) -> Self {
        let body = json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        });
        self.reply(200, &body.to_string())
    }

    /// Queues a transport failure.
    pub fn fail(self, error: TransportError) -> Self {
        self.replies.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    fn next_reply(&self) -> Result<HttpReply, TransportError> {
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no stub reply queued".to_string())))
    }
}

impl Transport for StubTransport {
    fn post_json(
        &self,
        url: &str,
        bearer_token: &str,
        body: &Value,
    ) -> Result<HttpReply, TransportError> {
        self.requests.borrow_mut().push(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            bearer_token: bearer_token.to_string(),
            body: Some(body.clone()),
        });
        self.next_reply()
    }

    fn get(&self, url: &str, bearer_token: &str) -> Result<HttpReply, TransportError> {
        self.requests.borrow_mut().push(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            bearer_token: bearer_token.to_string(),
            body: None,
        });
        self.next_reply()
    }
}

pub const TEST_API_URL: &str = "https://llm.test/v1/chat/completions";
pub const TEST_MODELS_URL: &str = "https://llm.test/v1/models";
pub const TEST_MODEL: &str = "test-model";

pub fn test_settings() -> EnhancementSettings {
    EnhancementSettings::new(TEST_API_URL, TEST_MODELS_URL, TEST_MODEL)
}

/// Client over `transport` with a fixed test key.
pub fn test_client(transport: StubTransport) -> EnhancementClient<StubTransport> {
    EnhancementClient::new(transport, test_settings(), "test-key")
}

/// Temporary directory for export and I/O tests.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}
