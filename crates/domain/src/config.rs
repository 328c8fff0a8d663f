//! Configuration structures
//!
//! Deserialized from environment variables or a config file by the
//! infrastructure layer (see `socportal-infra::config`).

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Upstream portal API settings
    pub api: ApiConfig,
    /// Roster reporting settings
    pub roster: RosterConfig,
}

/// Upstream portal API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the portal API (e.g. "https://portal.example.com/api")
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// Total request attempts (initial try + retries)
    pub max_attempts: u32,
}

/// Roster reporting settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Team-member short names whose roster columns are aggregated
    pub members: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: String::new(), timeout_seconds: 30, max_attempts: 3 }
    }
}
