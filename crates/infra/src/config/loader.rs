//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. `.env` is read into the process environment if present
//! 2. First, attempts to load from environment variables
//! 3. If incomplete, falls back to loading from file
//! 4. Probes multiple paths for config files
//! 5. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `SOCPORTAL_API_BASE_URL`: Base URL of the portal API (required)
//! - `SOCPORTAL_API_TIMEOUT`: Per-request timeout in seconds (default 30)
//! - `SOCPORTAL_API_MAX_ATTEMPTS`: Request attempts incl. retries (default 3)
//! - `SOCPORTAL_ROSTER_MEMBERS`: Comma-separated member short names
//!
//! ## File Locations
//! The loader probes `config.{json,toml}` and `socportal.{json,toml}` in the
//! working directory, up to two parent directories, and next to the
//! executable.

use std::path::{Path, PathBuf};

use socportal_domain::{ApiConfig, Config, Result, RosterConfig, SocPortalError};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `SocPortalError::Config` if configuration cannot be loaded from
/// either source.
pub fn load() -> Result<Config> {
    // Pick up a local .env before reading the environment
    dotenvy::dotenv().ok();

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `SOCPORTAL_API_BASE_URL` is required; the remaining variables have
/// defaults.
///
/// # Errors
/// Returns `SocPortalError::Config` if the base URL is missing or a numeric
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("SOCPORTAL_API_BASE_URL")?;
    let timeout_seconds = env_parsed("SOCPORTAL_API_TIMEOUT", 30)?;
    let max_attempts = env_parsed("SOCPORTAL_API_MAX_ATTEMPTS", 3)?;

    let members = std::env::var("SOCPORTAL_ROSTER_MEMBERS")
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(Config {
        api: ApiConfig { base_url, timeout_seconds, max_attempts },
        roster: RosterConfig { members },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `SocPortalError::Config` if no file is found or the file cannot
/// be parsed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SocPortalError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SocPortalError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SocPortalError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, format detected by extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SocPortalError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SocPortalError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(SocPortalError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe standard locations for a configuration file, first hit wins.
pub fn probe_config_paths() -> Option<PathBuf> {
    let names = ["config.json", "config.toml", "socportal.json", "socportal.toml"];
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        for prefix in ["", "../", "../../"] {
            for name in names {
                candidates.push(cwd.join(format!("{prefix}{name}")));
            }
        }
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            for name in names {
                candidates.push(exe_dir.join(name));
            }
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        SocPortalError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse a numeric environment variable, falling back to `default` when the
/// variable is not set.
fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| SocPortalError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_env() {
        for key in [
            "SOCPORTAL_API_BASE_URL",
            "SOCPORTAL_API_TIMEOUT",
            "SOCPORTAL_API_MAX_ATTEMPTS",
            "SOCPORTAL_ROSTER_MEMBERS",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn loads_complete_environment() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("SOCPORTAL_API_BASE_URL", "https://portal.example.com/api");
        std::env::set_var("SOCPORTAL_API_TIMEOUT", "10");
        std::env::set_var("SOCPORTAL_API_MAX_ATTEMPTS", "2");
        std::env::set_var("SOCPORTAL_ROSTER_MEMBERS", "tanvir, sizan ,rafi,");

        let config = load_from_env().expect("config from env");
        assert_eq!(config.api.base_url, "https://portal.example.com/api");
        assert_eq!(config.api.timeout_seconds, 10);
        assert_eq!(config.api.max_attempts, 2);
        assert_eq!(config.roster.members, vec!["tanvir", "sizan", "rafi"]);

        clear_env();
    }

    #[test]
    fn optional_variables_get_defaults() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("SOCPORTAL_API_BASE_URL", "https://portal.example.com/api");

        let config = load_from_env().expect("config from env");
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.api.max_attempts, 3);
        assert!(config.roster.members.is_empty());

        clear_env();
    }

    #[test]
    fn missing_base_url_is_a_config_error() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, SocPortalError::Config(_)));
    }

    #[test]
    fn invalid_timeout_is_a_config_error() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("SOCPORTAL_API_BASE_URL", "https://portal.example.com/api");
        std::env::set_var("SOCPORTAL_API_TIMEOUT", "soon");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, SocPortalError::Config(_)));

        clear_env();
    }

    #[test]
    fn loads_json_file() {
        let json_content = r#"{
            "api": {
                "base_url": "https://portal.example.com/api",
                "timeout_seconds": 15,
                "max_attempts": 4
            },
            "roster": {
                "members": ["tanvir", "sizan"]
            }
        }"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).expect("config from json");
        assert_eq!(config.api.timeout_seconds, 15);
        assert_eq!(config.roster.members.len(), 2);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn loads_toml_file() {
        let toml_content = r#"
[api]
base_url = "https://portal.example.com/api"
timeout_seconds = 20
max_attempts = 2

[roster]
members = ["tanvir"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).expect("config from toml");
        assert_eq!(config.api.max_attempts, 2);
        assert_eq!(config.roster.members, vec!["tanvir"]);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = load_from_file(Some(PathBuf::from("/nonexistent/config.json"))).unwrap_err();
        assert!(matches!(err, SocPortalError::Config(_)));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = parse_config("whatever", &PathBuf::from("config.yaml")).unwrap_err();
        assert!(matches!(err, SocPortalError::Config(_)));
    }
}
