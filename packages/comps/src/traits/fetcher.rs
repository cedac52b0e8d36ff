//! Primary transport: fetches a marketplace search page as markup.

use async_trait::async_trait;

use crate::error::FetchResult;

/// Fetches raw search-page markup.
///
/// # Implementations
///
/// - `ScrapingBeeFetcher` - ScrapingBee proxy (requires `scrapingbee` feature)
/// - `MockFetcher` - For testing
#[async_trait]
pub trait MarketplaceFetcher: Send + Sync {
    /// Fetch `url` and return the response body.
    async fn fetch_page(&self, url: &str) -> FetchResult<String>;
}
