use crate::error::{AppError, AppResult, DecodeError, TransportError};
use crate::http::HttpClient;
use crate::mojang::MojangClient;
use crate::utils::Identifier;
use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upstream limit on names per bulk lookup
pub const MAX_BULK_NAMES: usize = 10;

/// Username to identifier mapping
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerId {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub legacy: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub demo: bool,
}

/// Entry of an account's username history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameChange {
    pub name: String,
    /// Milliseconds since epoch; absent for the original name
    #[serde(rename = "changedToAt", default, skip_serializing_if = "Option::is_none")]
    pub changed_to_at: Option<i64>,
}

impl NameChange {
    pub fn changed_at(&self) -> Option<DateTime<Utc>> {
        self.changed_to_at
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }
}

impl<C: HttpClient> MojangClient<C> {
    /// Identifier currently (or at `at`) owning `username`
    pub async fn username_to_uuid(
        &self,
        username: &str,
        at: Option<DateTime<Utc>>,
    ) -> AppResult<Option<PlayerId>> {
        let mut url = format!(
            "{}/users/profiles/minecraft/{}",
            self.config.api_base,
            urlencoding::encode(username)
        );
        if let Some(at) = at {
            url.push_str(&format!("?at={}", at.timestamp()));
        }

        match self.http.get(&url, self.config.lookup_ttl_secs).await {
            Ok(Value::Null) => Ok(None),
            Ok(body) => Ok(Some(from_body(body, "username lookup")?)),
            Err(TransportError::Status { status: 404, .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Identifiers for up to `MAX_BULK_NAMES` usernames. Unknown names are omitted.
    pub async fn usernames_to_uuids(&self, usernames: &[&str]) -> AppResult<Vec<PlayerId>> {
        if usernames.len() > MAX_BULK_NAMES {
            return Err(AppError::InvalidRequest(format!(
                "At most {} usernames per request, got {}",
                MAX_BULK_NAMES,
                usernames.len()
            )));
        }
        if usernames.is_empty() {
            return Ok(vec![]);
        }

        let url = format!("{}/profiles/minecraft", self.config.api_base);
        let body = self.http.post(&url, &serde_json::json!(usernames)).await?;
        if body.is_null() {
            return Ok(vec![]);
        }
        from_body(body, "bulk lookup")
    }

    /// Every username `id` has held, oldest first
    pub async fn name_history(&self, id: &str) -> AppResult<Vec<NameChange>> {
        let id = Identifier::parse(id)?;
        let url = format!("{}/user/profiles/{}/names", self.config.api_base, id);

        let body = self.http.get(&url, self.config.lookup_ttl_secs).await?;
        if body.is_null() {
            return Err(AppError::NotFound(format!("No name history for {}", id)));
        }
        from_body(body, "name history")
    }
}

fn from_body<T: DeserializeOwned>(body: Value, what: &str) -> AppResult<T> {
    serde_json::from_value(body)
        .map_err(|e| DecodeError::Shape(format!("Invalid {} response: {}", what, e)).into())
}
