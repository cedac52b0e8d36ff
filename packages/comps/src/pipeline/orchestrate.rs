//! Primary/fallback source selection.
//!
//! Two states: the scraped page (primary) and the structured search API
//! (fallback, terminal). The fallback is only consulted when the primary
//! yields fewer than `min_primary_listings` usable listings.

use chrono::Utc;
use tracing::{info, warn};

use super::extract::extract_listings;
use super::fallback::map_fallback_results;
use super::stats::compute_statistics;
use crate::error::{CompsError, Result};
use crate::parse::CurrencyParser;
use crate::traits::sold_search::{SoldSearch, SoldSearchOutcome};
use crate::types::config::PipelineConfig;
use crate::types::listing::ListingRecord;
use crate::types::report::{CompsReport, SourceLabel};

/// Whether a primary yield is too thin to report on its own.
pub fn needs_fallback(primary_count: usize, config: &PipelineConfig) -> bool {
    primary_count < config.min_primary_listings
}

/// Build a report from already-fetched primary markup, consulting
/// `fallback` only when the primary yield is too thin.
///
/// An unconfigured fallback yields an empty report labeled with the
/// fallback source. A fallback request that fails is an error.
pub async fn resolve_comps(
    query: &str,
    primary_html: &str,
    fallback: &dyn SoldSearch,
    parser: &dyn CurrencyParser,
    config: &PipelineConfig,
) -> Result<CompsReport> {
    let primary = extract_listings(primary_html, parser, config);

    let (listings, statistics, source) = if needs_fallback(primary.len(), config) {
        info!(
            query,
            primary_count = primary.len(),
            threshold = config.min_primary_listings,
            "Primary yield too thin, switching to fallback source"
        );
        let listings = run_fallback(query, fallback, parser, config).await?;
        let statistics = compute_statistics(&listings);
        (listings, statistics, SourceLabel::SerpApi)
    } else {
        let statistics = compute_statistics(&primary);
        (primary, statistics, SourceLabel::ScrapingBee)
    };

    info!(
        query,
        source = source.as_str(),
        count = statistics.count,
        "Comps resolved"
    );

    Ok(CompsReport {
        query: query.to_string(),
        statistics,
        listings,
        source,
        cached: false,
    })
}

async fn run_fallback(
    query: &str,
    fallback: &dyn SoldSearch,
    parser: &dyn CurrencyParser,
    config: &PipelineConfig,
) -> Result<Vec<ListingRecord>> {
    match fallback
        .search_sold(query)
        .await
        .map_err(CompsError::FallbackFetch)?
    {
        SoldSearchOutcome::Results(items) => {
            Ok(map_fallback_results(&items, parser, config, Utc::now()))
        }
        SoldSearchOutcome::Unavailable => {
            warn!(query, "Fallback search not configured, returning empty result");
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::parse::DefaultCurrencyParser;
    use crate::types::stats::SalesStatistics;
    use crate::testing::{fallback_item, search_page, CardFixture, MockSoldSearch};

    fn primary_with(n: usize) -> String {
        let cards: Vec<_> = (0..n)
            .map(|i| CardFixture::sold(&format!("Item {i}"), &format!("${}.00", 10 + i)))
            .collect();
        search_page(&cards)
    }

    async fn resolve(html: &str, fallback: &MockSoldSearch) -> Result<CompsReport> {
        resolve_comps(
            "switch",
            html,
            fallback,
            &DefaultCurrencyParser,
            &PipelineConfig::default(),
        )
        .await
    }

    #[tokio::test]
    async fn test_thick_primary_skips_fallback() {
        let fallback = MockSoldSearch::with_results(vec![fallback_item("x", 1.0)]);

        let report = resolve(&primary_with(10), &fallback).await.unwrap();

        assert_eq!(report.source, SourceLabel::ScrapingBee);
        assert_eq!(report.statistics.count, 10);
        assert_eq!(fallback.call_count(), 0);
    }

    #[tokio::test]
    async fn test_thin_primary_uses_fallback() {
        let items = (0..5)
            .map(|i| fallback_item(&format!("Fallback {i}"), 20.0 + i as f64))
            .collect();
        let fallback = MockSoldSearch::with_results(items);

        let report = resolve(&primary_with(2), &fallback).await.unwrap();

        assert_eq!(report.source, SourceLabel::SerpApi);
        assert_eq!(report.statistics.count, 5);
        assert_eq!(report.statistics.median, Some(22.0));
        assert_eq!(report.listings.len(), 5);
        assert_eq!(fallback.calls(), vec!["switch".to_string()]);
    }

    #[tokio::test]
    async fn test_threshold_is_exclusive() {
        let fallback = MockSoldSearch::unavailable();
        let report = resolve(&primary_with(3), &fallback).await.unwrap();
        assert_eq!(report.source, SourceLabel::ScrapingBee);
        assert_eq!(fallback.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unavailable_fallback_is_soft() {
        let fallback = MockSoldSearch::unavailable();

        let report = resolve(&primary_with(1), &fallback).await.unwrap();

        assert_eq!(report.source, SourceLabel::SerpApi);
        assert!(report.listings.is_empty());
        assert!(report.statistics.is_empty());
        assert_eq!(report.statistics, SalesStatistics::empty());
    }

    #[tokio::test]
    async fn test_failed_fallback_is_error() {
        let fallback = MockSoldSearch::failing(500, "boom");

        let err = resolve(&primary_with(0), &fallback).await.unwrap_err();

        assert!(matches!(
            err,
            CompsError::FallbackFetch(FetchError::Api { status: 500, .. })
        ));
    }
}
