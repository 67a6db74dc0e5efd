//! Application configuration loaded from environment variables.
//!
//! The API key **must** be provided via an environment variable:
//! - `ALPHAVANTAGE_API_KEY` — key injected into every request
//!
//! An optional `ALPHAVANTAGE_QUERY_URL` overrides the default query
//! endpoint, which is mainly useful for pointing the client at a local
//! stub server in tests.

use crate::client::QUERY_URL;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub alphavantage: AlphaVantageConfig,
}

/// Alpha Vantage specific configuration values.
#[derive(Debug)]
pub struct AlphaVantageConfig {
    pub query_url: String,
    pub api_key: String,
}

/// Loads the application configuration from environment variables.
///
/// The query URL defaults to `https://www.alphavantage.co/query` and can be
/// overridden with `ALPHAVANTAGE_QUERY_URL`. The API key is required; the
/// upstream rejects unauthenticated requests.
///
/// # Errors
///
/// Returns [`VantageError::Config`](crate::VantageError::Config) if
/// `ALPHAVANTAGE_API_KEY` is unset or empty.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let query_url =
        non_empty_var("ALPHAVANTAGE_QUERY_URL").unwrap_or_else(|| QUERY_URL.to_string());

    let api_key = non_empty_var("ALPHAVANTAGE_API_KEY").ok_or_else(|| {
        crate::VantageError::Config("ALPHAVANTAGE_API_KEY is not set".to_string())
    })?;

    Ok(AppConfig {
        alphavantage: AlphaVantageConfig { query_url, api_key },
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
