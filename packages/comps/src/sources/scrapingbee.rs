//! ScrapingBee-backed primary fetcher.

use async_trait::async_trait;
use scrapingbee_client::{ScrapingBeeClient, ScrapingBeeError};

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::MarketplaceFetcher;

pub struct ScrapingBeeFetcher {
    client: ScrapingBeeClient,
}

impl ScrapingBeeFetcher {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_client(ScrapingBeeClient::new(api_key))
    }

    pub fn from_client(client: ScrapingBeeClient) -> Self {
        Self { client }
    }
}

impl From<ScrapingBeeError> for FetchError {
    fn from(e: ScrapingBeeError) -> Self {
        match e {
            ScrapingBeeError::Api { status, message } => FetchError::Api { status, message },
            ScrapingBeeError::Http(e) => FetchError::Http(Box::new(e)),
        }
    }
}

#[async_trait]
impl MarketplaceFetcher for ScrapingBeeFetcher {
    async fn fetch_page(&self, url: &str) -> FetchResult<String> {
        Ok(self.client.get(url).await?)
    }
}
