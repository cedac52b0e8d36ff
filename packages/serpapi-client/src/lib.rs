//! Pure SerpApi REST client.
//!
//! Only the eBay engine is wrapped, restricted to sold and completed
//! listings.
//!
//! # Example
//!
//! ```rust,ignore
//! use serpapi_client::SerpApiClient;
//!
//! let client = SerpApiClient::new("your-api-key");
//! let results = client.search_sold("nintendo switch oled").await?;
//! println!("{} results", results.len());
//! ```

pub mod error;
pub mod types;

pub use error::{Result, SerpApiError};
pub use types::{EbaySearchParams, SearchResponse};

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

const BASE_URL: &str = "https://serpapi.com/search.json";

pub struct SerpApiClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    ebay_domain: String,
}

impl SerpApiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: SecretString::from(api_key.into()),
            base_url: BASE_URL.to_string(),
            ebay_domain: "ebay.com".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_ebay_domain(mut self, domain: impl Into<String>) -> Self {
        self.ebay_domain = domain.into();
        self
    }

    fn params<'a>(&'a self, query: &'a str) -> EbaySearchParams<'a> {
        EbaySearchParams {
            engine: "ebay",
            ebay_domain: &self.ebay_domain,
            q: query,
            nkw: query,
            sold: true,
            completed: true,
            api_key: self.api_key.expose_secret(),
        }
    }

    /// Search sold listings and return the raw `organic_results` items.
    pub async fn search_sold(&self, query: &str) -> Result<Vec<serde_json::Value>> {
        tracing::info!(query, "Querying SerpApi for sold listings");

        let resp = self
            .client
            .get(&self.base_url)
            .query(&self.params(query))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "SerpApi request failed");
            return Err(SerpApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let response: SearchResponse = resp.json().await?;
        tracing::info!(count = response.organic_results.len(), "Fetched SerpApi results");
        Ok(response.organic_results)
    }
}
