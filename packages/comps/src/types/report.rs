//! Results handed to the response-shaping layer.

use serde::{Deserialize, Serialize};

use super::listing::{ActiveListing, ListingRecord};
use super::stats::SalesStatistics;

/// Which path produced the final listing set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceLabel {
    /// Scraped search page (primary).
    #[serde(rename = "scrapingbee")]
    ScrapingBee,
    /// Structured search API (fallback).
    #[serde(rename = "serpapi")]
    SerpApi,
}

impl SourceLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceLabel::ScrapingBee => "scrapingbee",
            SourceLabel::SerpApi => "serpapi",
        }
    }
}

/// Sold-listing comps for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompsReport {
    pub query: String,
    #[serde(rename = "stats")]
    pub statistics: SalesStatistics,
    #[serde(rename = "items")]
    pub listings: Vec<ListingRecord>,
    pub source: SourceLabel,
    pub cached: bool,
}

impl CompsReport {
    /// Mark a report as served from cache.
    pub fn into_cached(mut self) -> Self {
        self.cached = true;
        self
    }
}

/// Active listings for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveListingsReport {
    pub query: String,
    pub items: Vec<ActiveListing>,
    pub source: SourceLabel,
    pub cached: bool,
}

impl ActiveListingsReport {
    pub fn into_cached(mut self) -> Self {
        self.cached = true;
        self
    }
}
