//! Engine facade: fetch the primary page, then resolve comps.

use std::sync::Arc;

use tracing::info;

use super::extract::extract_active_listings;
use super::orchestrate::resolve_comps;
use crate::error::{CompsError, Result};
use crate::marketplace::{active_search_url, sold_search_url};
use crate::parse::{CurrencyParser, DefaultCurrencyParser};
use crate::traits::fetcher::MarketplaceFetcher;
use crate::traits::sold_search::SoldSearch;
use crate::types::config::PipelineConfig;
use crate::types::report::{ActiveListingsReport, CompsReport, SourceLabel};

/// Wires transport collaborators to the pipeline.
///
/// ```rust,ignore
/// let engine = CompsEngine::new(Arc::new(fetcher), Arc::new(UnconfiguredSoldSearch));
/// let report = engine.lookup("nintendo switch").await?;
/// ```
#[derive(Clone)]
pub struct CompsEngine {
    fetcher: Arc<dyn MarketplaceFetcher>,
    sold_search: Arc<dyn SoldSearch>,
    parser: Arc<dyn CurrencyParser>,
    config: PipelineConfig,
}

impl CompsEngine {
    pub fn new(fetcher: Arc<dyn MarketplaceFetcher>, sold_search: Arc<dyn SoldSearch>) -> Self {
        Self {
            fetcher,
            sold_search,
            parser: Arc::new(DefaultCurrencyParser),
            config: PipelineConfig::default(),
        }
    }

    pub fn with_parser(mut self, parser: Arc<dyn CurrencyParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn validate_query(query: &str) -> Result<&str> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CompsError::InvalidQuery {
                reason: "query is empty".to_string(),
            });
        }
        Ok(query)
    }

    /// Sold-listing comps for `query`.
    pub async fn lookup(&self, query: &str) -> Result<CompsReport> {
        let query = Self::validate_query(query)?;
        let url = sold_search_url(query, &self.config).map_err(|e| CompsError::InvalidQuery {
            reason: e.to_string(),
        })?;

        info!(query, url = %url, "Fetching sold listings page");
        let html = self
            .fetcher
            .fetch_page(url.as_str())
            .await
            .map_err(CompsError::PrimaryFetch)?;

        resolve_comps(
            query,
            &html,
            self.sold_search.as_ref(),
            self.parser.as_ref(),
            &self.config,
        )
        .await
    }

    /// Active listings for `query`, from the primary source only.
    pub async fn active_listings(&self, query: &str) -> Result<ActiveListingsReport> {
        let query = Self::validate_query(query)?;
        let url = active_search_url(query, &self.config).map_err(|e| CompsError::InvalidQuery {
            reason: e.to_string(),
        })?;

        info!(query, url = %url, "Fetching active listings page");
        let html = self
            .fetcher
            .fetch_page(url.as_str())
            .await
            .map_err(CompsError::PrimaryFetch)?;

        let items = extract_active_listings(&html, self.parser.as_ref(), &self.config);

        Ok(ActiveListingsReport {
            query: query.to_string(),
            items,
            source: SourceLabel::ScrapingBee,
            cached: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::testing::{search_page, CardFixture, MockFetcher, MockSoldSearch};

    fn engine(fetcher: &MockFetcher, search: &MockSoldSearch) -> CompsEngine {
        CompsEngine::new(Arc::new(fetcher.clone()), Arc::new(search.clone()))
    }

    #[tokio::test]
    async fn test_lookup_fetches_sold_url() {
        let html = search_page(&[
            CardFixture::sold("A", "$1.00"),
            CardFixture::sold("B", "$2.00"),
            CardFixture::sold("C", "$3.00"),
        ]);
        let fetcher = MockFetcher::with_default_page(html);
        let search = MockSoldSearch::unavailable();

        let report = engine(&fetcher, &search).lookup("  game boy ").await.unwrap();

        assert_eq!(report.query, "game boy");
        assert_eq!(report.statistics.count, 3);
        assert_eq!(
            fetcher.calls(),
            vec!["https://www.ebay.com/sch/i.html?_nkw=game+boy&_sop=12&LH_Sold=1&LH_Complete=1&_ipg=240".to_string()]
        );
    }

    #[tokio::test]
    async fn test_blank_query_rejected_before_fetch() {
        let fetcher = MockFetcher::with_default_page(String::new());
        let search = MockSoldSearch::unavailable();

        let err = engine(&fetcher, &search).lookup("   ").await.unwrap_err();

        assert!(matches!(err, CompsError::InvalidQuery { .. }));
        assert_eq!(fetcher.call_count(), 0);
    }

    #[tokio::test]
    async fn test_primary_failure_is_error() {
        let fetcher = MockFetcher::failing(403, "blocked");
        let search = MockSoldSearch::unavailable();

        let err = engine(&fetcher, &search).lookup("ps5").await.unwrap_err();

        assert!(matches!(
            err,
            CompsError::PrimaryFetch(FetchError::Api { status: 403, .. })
        ));
        assert_eq!(search.call_count(), 0);
    }

    #[tokio::test]
    async fn test_sold_and_active_pages_fetched_separately() {
        let search = MockSoldSearch::unavailable();
        let config = PipelineConfig::default().with_min_primary_listings(1);
        let base = CompsEngine::new(Arc::new(MockFetcher::new()), Arc::new(search.clone()))
            .with_config(config.clone());
        let sold_url = sold_search_url("ps5", base.config()).unwrap();
        let active_url = active_search_url("ps5", base.config()).unwrap();

        let fetcher = MockFetcher::new()
            .with_page(sold_url.as_str(), search_page(&[CardFixture::sold("Sold PS5", "$400.00")]))
            .with_page(
                active_url.as_str(),
                search_page(&[
                    CardFixture::active("Listed PS5", "$450.00"),
                    CardFixture::active("Listed PS5 Slim", "$420.00"),
                ]),
            );
        let engine = engine(&fetcher, &search).with_config(config);
        assert_eq!(engine.config().min_primary_listings, 1);

        let sold = engine.lookup("ps5").await.unwrap();
        let active = engine.active_listings("ps5").await.unwrap();

        assert_eq!(sold.source, SourceLabel::ScrapingBee);
        assert_eq!(sold.listings[0].title, "Sold PS5");
        assert_eq!(active.items.len(), 2);
        assert_eq!(fetcher.calls(), vec![sold_url.to_string(), active_url.to_string()]);
        assert_eq!(search.call_count(), 0);
    }

    #[tokio::test]
    async fn test_active_listings() {
        let html = search_page(&[CardFixture::active("Listed", "$5.00")]);
        let fetcher = MockFetcher::with_default_page(html);
        let search = MockSoldSearch::unavailable();

        let report = engine(&fetcher, &search)
            .active_listings("listed")
            .await
            .unwrap();

        assert_eq!(report.items.len(), 1);
        assert_eq!(report.source, SourceLabel::ScrapingBee);
        assert!(fetcher.calls()[0].contains("LH_Active=1"));
    }
}
