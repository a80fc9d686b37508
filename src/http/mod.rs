pub mod cache;
pub mod client;
#[cfg(test)]
pub(crate) mod testing;

use crate::error::TransportError;
use serde_json::Value;

pub use cache::{CacheStats, ResponseCache};
pub use client::ReqwestHttpClient;

/// Request interface the API facade talks through.
///
/// Implementations own connection handling and response caching. A failed
/// request is reported as an error value, never a panic.
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    /// GET `url` and parse the body as JSON.
    ///
    /// `ttl_secs` is how long the response may be served from cache;
    /// `0` bypasses the cache entirely. A 204 or an empty 2xx body yields
    /// `Value::Null`. Any non-success status, 404 included, is
    /// `TransportError::Status`.
    async fn get(&self, url: &str, ttl_secs: u64) -> Result<Value, TransportError>;

    /// POST `body` as JSON to `url` and parse the response as JSON.
    /// Empty bodies and statuses map as for `get`.
    async fn post(&self, url: &str, body: &Value) -> Result<Value, TransportError>;
}

#[async_trait::async_trait]
impl<T: HttpClient + ?Sized> HttpClient for std::sync::Arc<T> {
    async fn get(&self, url: &str, ttl_secs: u64) -> Result<Value, TransportError> {
        (**self).get(url, ttl_secs).await
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value, TransportError> {
        (**self).post(url, body).await
    }
}
