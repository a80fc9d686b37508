use crate::config::ClientConfig;
use crate::error::{AppError, AppResult, TransportError};
use crate::http::{HttpClient, ResponseCache};
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;

/// `HttpClient` backed by reqwest with an in-memory TTL cache for GETs
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    cache: Arc<ResponseCache>,
}

impl ReqwestHttpClient {
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        // Timeouts prevent hanging requests
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            cache: Arc::new(ResponseCache::new()),
        }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    async fn read_json(url: &str, response: reqwest::Response) -> Result<Value, TransportError> {
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            tracing::warn!("{} returned status {}", url, status);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| TransportError::InvalidBody(e.to_string()))
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, ttl_secs: u64) -> Result<Value, TransportError> {
        if ttl_secs > 0 {
            if let Some(body) = self.cache.get(url).await {
                return Ok(body);
            }
        }

        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("GET {} failed: {}", url, e);
                TransportError::Network(e.to_string())
            })?;

        let body = Self::read_json(url, response).await?;
        self.cache.insert(url, body.clone(), ttl_secs).await;
        Ok(body)
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value, TransportError> {
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("POST {} failed: {}", url, e);
                TransportError::Network(e.to_string())
            })?;

        Self::read_json(url, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Base URL on a local port that was bound and then released, so nothing listens
    fn closed_base() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}", port)
    }

    #[tokio::test]
    async fn test_cached_get_skips_network() {
        let http = ReqwestHttpClient::new(&ClientConfig::default()).unwrap();
        // A network attempt would fail
        let url = format!("{}/session/minecraft/profile/abc", closed_base());
        let url = url.as_str();
        http.cache().insert(url, json!({"id": "abc"}), 60).await;

        let body = http.get(url, 60).await.unwrap();
        assert_eq!(body, json!({"id": "abc"}));
    }

    #[tokio::test]
    async fn test_zero_ttl_bypasses_cache() {
        let http = ReqwestHttpClient::new(&ClientConfig::default()).unwrap();
        let url = format!("{}/check", closed_base());
        let url = url.as_str();
        http.cache().insert(url, json!([]), 60).await;

        let err = http.get(url, 0).await.unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }
}
