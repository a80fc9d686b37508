use serde::Serialize;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Top-level error returned by every public client operation
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failure reported by the HTTP collaborator
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response body is not valid JSON: {0}")]
    InvalidBody(String),
}

/// Failure while decoding the texture property of a session profile
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DecodeError {
    #[error("Profile has no texture property")]
    MissingTextureProperty,

    #[error("Texture property is not valid base64: {0}")]
    Base64(String),

    #[error("Texture payload is not valid JSON: {0}")]
    Json(String),

    #[error("Texture payload has no textures field")]
    MissingTextures,

    #[error("Unexpected response shape: {0}")]
    Shape(String),
}

impl AppError {
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, AppError::Decode(_))
    }
}

// Errors cross API boundaries as plain strings
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
