//! Mojang account API client
//!
//! Service status, username/UUID lookups and session profile retrieval.
//! Session profiles come back with their texture property decoded; accounts
//! without a custom skin get the stock Steve or Alex texture their UUID is
//! entitled to.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod mojang;
pub mod skins;
pub mod utils;

pub use config::ClientConfig;
pub use error::{AppError, AppResult, DecodeError, TransportError};
pub use http::{HttpClient, ReqwestHttpClient};
pub use mojang::MojangClient;
pub use skins::{
    classify, Property, SessionProfile, SkinVariant, TextureEntry, TextureMetadata, TextureSet,
};
pub use utils::Identifier;
