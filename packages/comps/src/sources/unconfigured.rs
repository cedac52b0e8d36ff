use async_trait::async_trait;

use crate::error::FetchResult;
use crate::traits::sold_search::{SoldSearch, SoldSearchOutcome};

/// Fallback search used when no API key is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredSoldSearch;

#[async_trait]
impl SoldSearch for UnconfiguredSoldSearch {
    async fn search_sold(&self, _query: &str) -> FetchResult<SoldSearchOutcome> {
        tracing::warn!("UnconfiguredSoldSearch: fallback requested but no SerpApi key configured");
        Ok(SoldSearchOutcome::Unavailable)
    }
}
