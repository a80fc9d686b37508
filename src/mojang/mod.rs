pub mod lookup;
pub mod status;

use crate::config::ClientConfig;
use crate::error::AppResult;
use crate::http::{HttpClient, ReqwestHttpClient};
use crate::skins::{self, SessionProfile, SkinVariant};
use crate::utils::Identifier;
use std::sync::Arc;

pub use lookup::{NameChange, PlayerId, MAX_BULK_NAMES};
pub use status::{ServiceHealth, ServiceStatus};

/// Mojang account API facade.
///
/// Holds no per-request state; clones share the underlying HTTP client.
pub struct MojangClient<C: HttpClient = ReqwestHttpClient> {
    http: Arc<C>,
    config: Arc<ClientConfig>,
}

impl<C: HttpClient> Clone for MojangClient<C> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            config: Arc::clone(&self.config),
        }
    }
}

impl MojangClient<ReqwestHttpClient> {
    /// Client with production endpoints and default timeouts
    pub fn new() -> AppResult<Self> {
        Self::from_config(ClientConfig::default())
    }

    pub fn from_config(mut config: ClientConfig) -> AppResult<Self> {
        config.validate()?;
        let http = ReqwestHttpClient::new(&config)?;
        Ok(Self::with_http(http, config))
    }
}

impl<C: HttpClient> MojangClient<C> {
    /// Client over a caller-supplied transport
    pub fn with_http(http: C, config: ClientConfig) -> Self {
        Self {
            http: Arc::new(http),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    /// Session profile of `id` with decoded (or default) textures
    pub async fn profile(&self, id: &str) -> AppResult<SessionProfile> {
        let id = Identifier::parse(id)?;
        self.profile_by_id(&id).await
    }

    pub async fn profile_by_id(&self, id: &Identifier) -> AppResult<SessionProfile> {
        skins::resolve_profile(
            &*self.http,
            &self.config.session_base,
            id,
            self.config.profile_ttl_secs,
        )
        .await
    }

    /// Default skin shape of `id`. No network call.
    pub fn default_variant(&self, id: &str) -> AppResult<SkinVariant> {
        Ok(skins::classify(&Identifier::parse(id)?))
    }
}
