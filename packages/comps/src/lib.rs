//! Marketplace sold-listing comps.
//!
//! Turns a scraped search-results page (or, when that comes up thin, a
//! structured search API response) into normalized listing records and
//! price statistics.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use comps::{CompsEngine, UnconfiguredSoldSearch};
//! use comps::testing::MockFetcher;
//!
//! let engine = CompsEngine::new(
//!     Arc::new(MockFetcher::with_default_page(html)),
//!     Arc::new(UnconfiguredSoldSearch),
//! );
//! let report = engine.lookup("nintendo switch oled").await?;
//! println!("median: {:?}", report.statistics.median);
//! ```
//!
//! # Modules
//!
//! - [`parse`] - Price, date and shipping normalizers
//! - [`pipeline`] - Extraction, fallback mapping, statistics, orchestration
//! - [`traits`] - Transport and cache seams
//! - [`sources`] - Transport implementations
//! - [`stores`] - Cache implementations
//! - [`marketplace`] - Search URLs and page selectors
//! - [`testing`] - Mock transports and markup fixtures

pub mod error;
pub mod marketplace;
pub mod parse;
pub mod pipeline;
pub mod sources;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{CompsError, FetchError, FieldError};
pub use parse::{CurrencyParser, DefaultCurrencyParser, ParsedPrice};
pub use pipeline::{
    compute_statistics, extract_active_listings, extract_listings, map_fallback_results,
    quantile, resolve_comps, CompsEngine,
};
pub use sources::UnconfiguredSoldSearch;
pub use stores::MemoryCache;
pub use traits::{
    cache::{CacheEntry, ResultCache},
    fetcher::MarketplaceFetcher,
    sold_search::{SoldSearch, SoldSearchOutcome},
};
pub use types::{
    config::PipelineConfig,
    listing::{ActiveListing, ListingRecord, Shipping},
    report::{ActiveListingsReport, CompsReport, SourceLabel},
    stats::SalesStatistics,
};

#[cfg(feature = "scrapingbee")]
pub use sources::ScrapingBeeFetcher;

#[cfg(feature = "serpapi")]
pub use sources::SerpApiSoldSearch;
