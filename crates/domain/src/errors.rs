//! Error types used throughout the workspace

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the SOC Portal reporting workspace
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SocPortalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for SOC Portal operations
pub type Result<T> = std::result::Result<T, SocPortalError>;
