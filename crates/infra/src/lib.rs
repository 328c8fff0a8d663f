//! # SOC Portal Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The reqwest-based HTTP client with retry/backoff
//! - The portal API adapter implementing the core port traits
//! - Configuration loading (environment variables with file fallback)
//! - Conversions from transport errors into domain errors
//!
//! ## Architecture
//! - Implements traits defined in `socportal-core`
//! - Contains all "impure" code (I/O, environment access)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::PortalApiClient;
pub use errors::InfraError;
pub use http::HttpClient;
