//! Client configuration (environment-driven).

use std::time::Duration;

use url::Url;

use crate::ApiError;

pub const API_URL_ENV: &str = "COUNTYRISK_API_URL";
pub const TIMEOUT_ENV: &str = "COUNTYRISK_HTTP_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn parse(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self::new(parse_base_url(base_url)?))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(API_URL_ENV).unwrap_or_else(|| {
            tracing::info!("{API_URL_ENV} not set; using {DEFAULT_API_URL}");
            DEFAULT_API_URL.to_string()
        });

        let timeout_secs = match lookup(TIMEOUT_ENV) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ApiError::Config(format!("{TIMEOUT_ENV} must be a whole number of seconds: {e}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self::parse(&base_url)?.with_timeout(Duration::from_secs(timeout_secs)))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ApiError::Config(format!("invalid API URL '{raw}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ApiError::Config(format!("API URL '{raw}' cannot carry a path")));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = ApiConfig::from_lookup(lookup(&[
            (API_URL_ENV, "https://risk.example.org/api"),
            (TIMEOUT_ENV, "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url.path(), "/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_values_are_config_errors() {
        assert!(matches!(
            ApiConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "soon")])),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            ApiConfig::from_lookup(lookup(&[(API_URL_ENV, "not a url")])),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(ApiConfig::parse("mailto:ops@example.org"), Err(ApiError::Config(_))));
    }
}
