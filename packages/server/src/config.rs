use anyhow::{Context, Result};
use dotenvy::dotenv;
use secrecy::SecretString;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// ScrapingBee key for the primary page fetch.
    pub bee_key: SecretString,
    /// SerpApi key for the fallback search. Without it the fallback is unavailable.
    pub serp_key: Option<SecretString>,
    pub cache_ttl_secs: i64,
    pub min_primary_listings: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8888".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            bee_key: env::var("BEE_KEY")
                .context("BEE_KEY must be set")?
                .into(),
            serp_key: env::var("SERP_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .context("CACHE_TTL_SECS must be a valid number")?,
            min_primary_listings: env::var("MIN_PRIMARY_LISTINGS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .context("MIN_PRIMARY_LISTINGS must be a valid number")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn debug_output_hides_keys() {
        let config = Config {
            port: 8888,
            bee_key: SecretString::from("bee-secret"),
            serp_key: Some(SecretString::from("serp-secret")),
            cache_ttl_secs: 3600,
            min_primary_listings: 3,
        };

        let debug = format!("{config:?}");
        assert!(!debug.contains("bee-secret"));
        assert!(!debug.contains("serp-secret"));
        assert_eq!(config.bee_key.expose_secret(), "bee-secret");
    }
}
