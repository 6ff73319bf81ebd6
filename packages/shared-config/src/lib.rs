//! Shared configuration types for the scrobble freshness checker
//!
//! This crate provides the per-service configuration types used by the
//! Last.fm and GroupMe clients and by the checker binary, together with the
//! environment helpers they are built from.

mod error;
mod groupme;
mod lastfm;

pub use error::{ConfigError, ConfigResult};
pub use groupme::GroupMeConfig;
pub use lastfm::LastfmConfig;

use std::env;

/// Helper function to get a required environment variable
///
/// Blank values are treated the same as an unset variable.
pub fn get_required_env(name: &str) -> ConfigResult<String> {
    match env::var(name) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

/// Helper function to get an optional environment variable
///
/// Returns `None` when the variable is unset or blank.
pub fn get_optional_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|val| !val.trim().is_empty())
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Helper function to parse an environment variable into a specific type
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .trim()
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}

/// Helper function to parse a request timeout in seconds
///
/// Zero is rejected: reqwest would fail every request immediately.
pub fn parse_timeout_env(name: &str, default: u64) -> ConfigResult<u64> {
    match parse_env(name, default)? {
        0 => Err(ConfigError::InvalidValue(
            name.to_string(),
            "timeout must be at least 1 second".to_string(),
        )),
        secs => Ok(secs),
    }
}

/// Helper function to parse a boolean flag from the environment
///
/// Accepts `true/false`, `1/0`, `yes/no` and `on/off` (case-insensitive).
pub fn parse_flag_env(name: &str, default: bool) -> ConfigResult<bool> {
    let Ok(val) = env::var(name) else {
        return Ok(default);
    };

    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        "" => Ok(default),
        other => Err(ConfigError::InvalidValue(
            name.to_string(),
            format!("expected a boolean, got '{}'", other),
        )),
    }
}

/// Validate that a value is an absolute http(s) URL
pub fn validate_http_url(name: &str, value: &str) -> ConfigResult<()> {
    let parsed =
        url::Url::parse(value).map_err(|e| ConfigError::InvalidUrl(name.to_string(), e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::InvalidUrl(
            name.to_string(),
            format!("unsupported scheme '{}'", scheme),
        )),
    }
}
