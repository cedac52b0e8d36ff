//! Configuration for the comps pipeline.

use serde::{Deserialize, Serialize};

/// Tunables for extraction, fallback and search URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Primary yields below this many listings trigger the fallback source.
    ///
    /// Default: 3.
    pub min_primary_listings: usize,

    /// Title the marketplace uses for promotional "shop" cards mixed into
    /// results. Cards with exactly this title are dropped.
    pub placeholder_title: String,

    /// Currency reported when the price text names none.
    pub default_currency: String,

    /// Marketplace host, without `www.`.
    pub marketplace_domain: String,

    /// Results requested per search page (single page only).
    pub results_per_page: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_primary_listings: 3,
            placeholder_title: "Shop on eBay".to_string(),
            default_currency: "USD".to_string(),
            marketplace_domain: "ebay.com".to_string(),
            results_per_page: 240,
        }
    }
}

impl PipelineConfig {
    /// Set the fallback threshold.
    pub fn with_min_primary_listings(mut self, min: usize) -> Self {
        self.min_primary_listings = min;
        self
    }

    pub fn with_placeholder_title(mut self, title: impl Into<String>) -> Self {
        self.placeholder_title = title.into();
        self
    }

    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into();
        self
    }

    pub fn with_marketplace_domain(mut self, domain: impl Into<String>) -> Self {
        self.marketplace_domain = domain.into();
        self
    }

    pub fn with_results_per_page(mut self, n: u32) -> Self {
        self.results_per_page = n;
        self
    }
}
