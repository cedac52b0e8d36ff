//! Pure ScrapingBee REST API client.
//!
//! Fetches a target URL through the ScrapingBee proxy and returns the
//! response body untouched. Parsing is left to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use scrapingbee_client::ScrapingBeeClient;
//!
//! let client = ScrapingBeeClient::new("your-api-key");
//! let html = client.get("https://www.ebay.com/sch/i.html?_nkw=switch").await?;
//! ```

pub mod error;
pub mod types;

pub use error::{Result, ScrapingBeeError};
pub use types::ScrapeParams;

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

const BASE_URL: &str = "https://app.scrapingbee.com/api/v1/";

pub struct ScrapingBeeClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    render_js: bool,
    country_code: Option<String>,
}

impl ScrapingBeeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(90))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: SecretString::from(api_key.into()),
            base_url: BASE_URL.to_string(),
            render_js: false,
            country_code: None,
        }
    }

    /// Point the client at a different API root (used by tests and proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_render_js(mut self, render_js: bool) -> Self {
        self.render_js = render_js;
        self
    }

    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    fn params<'a>(&'a self, url: &'a str) -> ScrapeParams<'a> {
        ScrapeParams {
            api_key: self.api_key.expose_secret(),
            url,
            render_js: self.render_js,
            country_code: self.country_code.as_deref(),
        }
    }

    /// Fetch `url` through the proxy and return the body as text.
    pub async fn get(&self, url: &str) -> Result<String> {
        tracing::debug!(url, render_js = self.render_js, "Fetching page via ScrapingBee");

        let resp = self
            .client
            .get(&self.base_url)
            .query(&self.params(url))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ScrapingBeeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        tracing::debug!(url, bytes = body.len(), "ScrapingBee fetch complete");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_carry_target_url_and_flags() {
        let client = ScrapingBeeClient::new("bee-key").with_country_code("us");
        let params = client.params("https://www.ebay.com/sch/i.html?_nkw=a+b");
        let json = serde_json::to_value(&params).unwrap();

        assert_eq!(json["api_key"], "bee-key");
        assert_eq!(json["url"], "https://www.ebay.com/sch/i.html?_nkw=a+b");
        assert_eq!(json["render_js"], false);
        assert_eq!(json["country_code"], "us");
    }

    #[test]
    fn country_code_omitted_when_unset() {
        let client = ScrapingBeeClient::new("bee-key");
        let json = serde_json::to_value(client.params("https://example.com")).unwrap();
        assert!(json.get("country_code").is_none());
    }
}
