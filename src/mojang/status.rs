use crate::error::{AppResult, DecodeError};
use crate::http::HttpClient;
use crate::mojang::MojangClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Health colour reported per service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceHealth {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceStatus {
    pub service: String,
    pub status: ServiceHealth,
}

impl<C: HttpClient> MojangClient<C> {
    /// Health of each Mojang service
    pub async fn status(&self) -> AppResult<Vec<ServiceStatus>> {
        let url = format!("{}/check", self.config.status_base);
        let body = self.http.get(&url, self.config.status_ttl_secs).await?;
        Ok(parse_status(body)?)
    }
}

/// Flatten `[{"minecraft.net": "green"}, ...]` into one entry per service
fn parse_status(body: Value) -> Result<Vec<ServiceStatus>, DecodeError> {
    let entries: Vec<BTreeMap<String, ServiceHealth>> = serde_json::from_value(body)
        .map_err(|e| DecodeError::Shape(format!("Invalid status response: {}", e)))?;

    Ok(entries
        .into_iter()
        .flatten()
        .map(|(service, status)| ServiceStatus { service, status })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::error::{AppError, TransportError};
    use crate::http::testing::{Request, ScriptedHttp};
    use serde_json::json;

    #[tokio::test]
    async fn test_status() {
        let http = ScriptedHttp::new().ok(json!([
            {"minecraft.net": "green"},
            {"session.minecraft.net": "yellow"},
            {"api.mojang.com": "red"}
        ]));
        let client = MojangClient::with_http(http, ClientConfig::default());

        let status = client.status().await.unwrap();
        assert_eq!(status.len(), 3);
        assert_eq!(status[0].service, "minecraft.net");
        assert_eq!(status[0].status, ServiceHealth::Green);
        assert_eq!(status[2].status, ServiceHealth::Red);

        // Status is never served from cache by default
        assert_eq!(
            client.http().requests(),
            vec![Request::Get {
                url: "https://status.mojang.com/check".to_string(),
                ttl_secs: 0,
            }]
        );
    }

    #[tokio::test]
    async fn test_status_transport_error() {
        let http = ScriptedHttp::new().fail(TransportError::Network("offline".to_string()));
        let client = MojangClient::with_http(http, ClientConfig::default());
        assert!(matches!(client.status().await, Err(AppError::Transport(_))));
    }

    #[test]
    fn test_parse_status_rejects_unknown_colour() {
        assert!(parse_status(json!([{"minecraft.net": "blue"}])).is_err());
    }
}
