//! Scripted `HttpClient` for unit tests

use crate::error::TransportError;
use crate::http::HttpClient;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A recorded request
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Get { url: String, ttl_secs: u64 },
    Post { url: String, body: Value },
}

/// Replies with queued responses in order and records every request
#[derive(Default)]
pub struct ScriptedHttp {
    replies: Mutex<VecDeque<Result<Value, TransportError>>>,
    requests: Mutex<Vec<Request>>,
}

impl ScriptedHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, response: Result<Value, TransportError>) -> Self {
        self.replies.lock().unwrap().push_back(response);
        self
    }

    pub fn ok(self, body: Value) -> Self {
        self.reply(Ok(body))
    }

    pub fn fail(self, error: TransportError) -> Self {
        self.reply(Err(error))
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    fn next(&self) -> Result<Value, TransportError> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_string())))
    }
}

#[async_trait::async_trait]
impl HttpClient for ScriptedHttp {
    async fn get(&self, url: &str, ttl_secs: u64) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(Request::Get {
            url: url.to_string(),
            ttl_secs,
        });
        self.next()
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(Request::Post {
            url: url.to_string(),
            body: body.clone(),
        });
        self.next()
    }
}
