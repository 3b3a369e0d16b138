//! Server configuration

use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3001";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Startup configuration failures; the server must not start on any of these
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set in the environment")]
    MissingVar(&'static str),

    #[error("Invalid bind address '{0}'")]
    InvalidBindAddress(String),
}

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup("OPENAI_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingVar("OPENAI_API_KEY"))?;

        let bind = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.into());
        let bind_address = bind
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(bind))?;

        let openai_base_url = lookup("OPENAI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        Ok(Self {
            bind_address,
            openai_api_key,
            openai_base_url,
            cors_origins,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("OPENAI_API_KEY")));
    }

    #[test]
    fn empty_api_key_is_fatal() {
        let err = Config::from_lookup(lookup(&[("OPENAI_API_KEY", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("OPENAI_API_KEY")));
    }

    #[test]
    fn defaults_apply() {
        let config = Config::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.bind_address.port(), 3001);
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
    }

    #[test]
    fn overrides_apply() {
        let config = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("BIND_ADDRESS", "127.0.0.1:9000"),
            ("OPENAI_BASE_URL", "http://localhost:8000/v1/"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address.to_string(), "127.0.0.1:9000");
        assert_eq!(config.openai_base_url, "http://localhost:8000/v1");
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    fn invalid_bind_address_is_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("BIND_ADDRESS", "not-an-address"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddress(_)));
    }
}
