use std::env::var;

use dotenvy::dotenv;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("An error occured while parsing PORT env param: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    /// Shared secret expected in `X-API-KEY`. `None` leaves the server misconfigured.
    pub api_key: Option<String>,
    pub log_filter: String,
}

impl Config {
    pub fn try_parse() -> Result<Config, ConfigError> {
        let _ = dotenv();
        Self::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        Ok(Config {
            port,
            scheme: lookup("SCHEME").unwrap_or_else(|| "http".to_string()),
            host: lookup("HOST").unwrap_or_else(|| "localhost".to_string()),
            api_key: lookup("API_KEY").filter(|key| !key.trim().is_empty()),
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = parse(&[]).unwrap();

        assert_eq!(config.server_url(), "http://localhost:8080");
        assert_eq!(config.api_key, None);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn reads_every_variable() {
        let config = parse(&[
            ("PORT", "3000"),
            ("SCHEME", "https"),
            ("HOST", "0.0.0.0"),
            ("API_KEY", "s3cret"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();

        assert_eq!(config.server_url(), "https://0.0.0.0:3000");
        assert_eq!(config.api_key.as_deref(), Some("s3cret"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn blank_api_key_counts_as_unset() {
        assert_eq!(parse(&[("API_KEY", "   ")]).unwrap().api_key, None);
    }

    #[test]
    fn api_key_is_kept_verbatim() {
        let config = parse(&[("API_KEY", " padded ")]).unwrap();
        assert_eq!(config.api_key.as_deref(), Some(" padded "));
    }

    #[test]
    fn rejects_unparsable_port() {
        assert!(matches!(
            parse(&[("PORT", "http")]),
            Err(ConfigError::InvalidPort(raw)) if raw == "http"
        ));
    }
}
