//! Session profile resolution
//!
//! Fetches a session profile, decodes the texture property and falls back to
//! the stock skin the account is entitled to when no custom texture is set.
//!
//! Upstream contract: the first property of a session profile carries the
//! base64-encoded texture payload. No other property is inspected.

use crate::error::{AppError, AppResult, DecodeError};
use crate::http::HttpClient;
use crate::skins::{
    classify, default_textures, Property, SessionProfile, SessionProfileResponse, TextureSet,
};
use crate::utils::Identifier;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::Value;

/// Session profile endpoint for `id` under `session_base`
pub fn profile_url(session_base: &str, id: &Identifier) -> String {
    format!("{}/session/minecraft/profile/{}", session_base, id)
}

/// Fetch and augment the session profile of `id`.
///
/// Transport failures are returned unchanged and nothing is decoded.
pub async fn resolve_profile<C>(
    http: &C,
    session_base: &str,
    id: &Identifier,
    ttl_secs: u64,
) -> AppResult<SessionProfile>
where
    C: HttpClient + ?Sized,
{
    let body = http.get(&profile_url(session_base, id), ttl_secs).await?;

    if body.is_null() {
        return Err(AppError::NotFound(format!("No session profile for {}", id)));
    }

    let upstream: SessionProfileResponse = serde_json::from_value(body)
        .map_err(|e| DecodeError::Shape(format!("Invalid session profile: {}", e)))?;

    Ok(augment_profile(upstream, id)?)
}

/// Build the augmented profile from an upstream response
pub fn augment_profile(
    upstream: SessionProfileResponse,
    id: &Identifier,
) -> Result<SessionProfile, DecodeError> {
    let decoded = decode_textures(&upstream.properties)?;

    let textures = if decoded.is_empty() {
        let variant = classify(id);
        tracing::info!("No custom textures for {}, using default {} skin", id, variant);
        default_textures(variant)
    } else {
        decoded
    };

    Ok(SessionProfile {
        id: upstream.id,
        name: upstream.name,
        properties: upstream.properties,
        textures,
    })
}

/// Decode `properties[0].value`: base64, then JSON, then its `textures` field
pub fn decode_textures(properties: &[Property]) -> Result<TextureSet, DecodeError> {
    let property = properties
        .first()
        .ok_or(DecodeError::MissingTextureProperty)?;

    let bytes = STANDARD
        .decode(property.value.trim())
        .map_err(|e| DecodeError::Base64(e.to_string()))?;

    let payload: Value =
        serde_json::from_slice(&bytes).map_err(|e| DecodeError::Json(e.to_string()))?;

    let textures = match payload.get("textures") {
        Some(v) if !v.is_null() => v.clone(),
        _ => return Err(DecodeError::MissingTextures),
    };

    serde_json::from_value(textures).map_err(|e| DecodeError::Json(e.to_string()))
}
