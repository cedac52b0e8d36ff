//! SerpApi-backed fallback search.

use async_trait::async_trait;
use serpapi_client::{SerpApiClient, SerpApiError};

use crate::error::{FetchError, FetchResult};
use crate::traits::sold_search::{SoldSearch, SoldSearchOutcome};

pub struct SerpApiSoldSearch {
    client: SerpApiClient,
}

impl SerpApiSoldSearch {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_client(SerpApiClient::new(api_key))
    }

    pub fn from_client(client: SerpApiClient) -> Self {
        Self { client }
    }
}

impl From<SerpApiError> for FetchError {
    fn from(e: SerpApiError) -> Self {
        match e {
            SerpApiError::Api { status, message } => FetchError::Api { status, message },
            SerpApiError::Http(e) if e.is_decode() => FetchError::Decode(e.to_string()),
            SerpApiError::Http(e) => FetchError::Http(Box::new(e)),
        }
    }
}

#[async_trait]
impl SoldSearch for SerpApiSoldSearch {
    async fn search_sold(&self, query: &str) -> FetchResult<SoldSearchOutcome> {
        let items = self.client.search_sold(query).await?;
        Ok(SoldSearchOutcome::Results(items))
    }
}
