use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.mojang.com";
pub const DEFAULT_SESSION_BASE: &str = "https://sessionserver.mojang.com";
pub const DEFAULT_STATUS_BASE: &str = "https://status.mojang.com";
pub const DEFAULT_USER_AGENT: &str = concat!("mojang-client/", env!("CARGO_PKG_VERSION"));

/// Client configuration: endpoints, HTTP timeouts and per-endpoint cache TTLs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base: String,
    pub session_base: String,
    pub status_base: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Session profiles
    pub profile_ttl_secs: u64,
    /// Username/uuid lookups and name history
    pub lookup_ttl_secs: u64,
    /// Service status (0 = always fresh)
    pub status_ttl_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            session_base: DEFAULT_SESSION_BASE.to_string(),
            status_base: DEFAULT_STATUS_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            profile_ttl_secs: 60,
            lookup_ttl_secs: 60,
            status_ttl_secs: 0,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `MOJANG_*` environment variables
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("MOJANG_API_BASE") {
            config.api_base = v;
        }
        if let Some(v) = lookup("MOJANG_SESSION_BASE") {
            config.session_base = v;
        }
        if let Some(v) = lookup("MOJANG_STATUS_BASE") {
            config.status_base = v;
        }
        if let Some(v) = lookup("MOJANG_USER_AGENT") {
            config.user_agent = v;
        }
        for (key, field) in [
            ("MOJANG_TIMEOUT_SECS", &mut config.timeout_secs),
            ("MOJANG_CONNECT_TIMEOUT_SECS", &mut config.connect_timeout_secs),
            ("MOJANG_PROFILE_TTL_SECS", &mut config.profile_ttl_secs),
            ("MOJANG_LOOKUP_TTL_SECS", &mut config.lookup_ttl_secs),
            ("MOJANG_STATUS_TTL_SECS", &mut config.status_ttl_secs),
        ] {
            if let Some(v) = lookup(key) {
                *field = v.trim().parse().map_err(|e| {
                    AppError::Config(format!("{} must be an integer: {}", key, e))
                })?;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Check base URLs parse, strip trailing slashes and require positive timeouts
    pub fn validate(&mut self) -> AppResult<()> {
        for (name, base) in [
            ("api_base", &mut self.api_base),
            ("session_base", &mut self.session_base),
            ("status_base", &mut self.status_base),
        ] {
            let parsed = url::Url::parse(base)
                .map_err(|e| AppError::Config(format!("Invalid {} '{}': {}", name, base, e)))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(AppError::Config(format!(
                    "Invalid {} '{}': scheme must be http or https",
                    name, base
                )));
            }
            let trimmed = base.trim_end_matches('/').len();
            base.truncate(trimmed);
        }

        if self.timeout_secs == 0 {
            return Err(AppError::Config("timeout_secs must be positive".to_string()));
        }
        if self.connect_timeout_secs == 0 {
            return Err(AppError::Config(
                "connect_timeout_secs must be positive".to_string(),
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
