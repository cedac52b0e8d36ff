//! Fallback transport: a structured search API for sold listings.
//!
//! "Not configured" is a normal outcome ([`SoldSearchOutcome::Unavailable`]),
//! distinct from a request that was made and failed (an error).

use async_trait::async_trait;

use crate::error::FetchResult;

/// What a fallback search produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SoldSearchOutcome {
    /// Raw `organic_results` items, unvalidated.
    Results(Vec<serde_json::Value>),
    /// The search backend is not configured (e.g. no API key).
    Unavailable,
}

/// Searches sold listings through a structured API.
///
/// # Implementations
///
/// - `SerpApiSoldSearch` - SerpApi eBay engine (requires `serpapi` feature)
/// - `UnconfiguredSoldSearch` - Always unavailable
/// - `MockSoldSearch` - For testing
#[async_trait]
pub trait SoldSearch: Send + Sync {
    async fn search_sold(&self, query: &str) -> FetchResult<SoldSearchOutcome>;
}
