use std::time::Duration;

use anyhow::{bail, Context, Result};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Client configuration loaded from environment variables (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Url,
    /// `None` keeps the HTTP client defaults.
    pub timeout: Option<Duration>,
    /// Placeholder keyword when a page has no product name to offer.
    pub fallback_keyword: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup("MARKETMIND_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = parse_api_url(&api_url)?;

        let timeout = match lookup("MARKETMIND_TIMEOUT_SECS") {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };

        Ok(Config {
            api_url,
            timeout,
            fallback_keyword: lookup("MARKETMIND_FALLBACK_KEYWORD").filter(|k| !k.trim().is_empty()),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

pub fn parse_api_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .with_context(|| format!("MARKETMIND_API_URL '{raw}' is not a valid absolute URL"))?;
    if url.cannot_be_a_base() {
        bail!("MARKETMIND_API_URL '{raw}' cannot be used as a base URL");
    }
    Ok(url)
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .context("MARKETMIND_TIMEOUT_SECS must be a whole number of seconds")?;
    if secs == 0 {
        bail!("MARKETMIND_TIMEOUT_SECS must be greater than zero");
    }
    Ok(Duration::from_secs(secs))
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
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:8000/api/v1");
        assert!(config.timeout.is_none());
        assert!(config.fallback_keyword.is_none());
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("MARKETMIND_API_URL", "https://gen.example.com/api/v1/"),
            ("MARKETMIND_TIMEOUT_SECS", "30"),
            ("MARKETMIND_FALLBACK_KEYWORD", "coffee beans"),
        ]))
        .unwrap();
        assert_eq!(config.api_url.host_str(), Some("gen.example.com"));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.fallback_keyword.as_deref(), Some("coffee beans"));
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let err = Config::from_lookup(lookup(&[("MARKETMIND_API_URL", "/api/v1")])).unwrap_err();
        assert!(err.to_string().contains("MARKETMIND_API_URL"));
    }

    #[test]
    fn test_zero_or_garbage_timeout_is_rejected() {
        assert!(Config::from_lookup(lookup(&[("MARKETMIND_TIMEOUT_SECS", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("MARKETMIND_TIMEOUT_SECS", "soon")])).is_err());
    }
}
