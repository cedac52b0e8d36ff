//! Transport implementations.
//!
//! # Available Sources
//!
//! - `ScrapingBeeFetcher` - primary page fetch through ScrapingBee
//!   (requires `scrapingbee` feature)
//! - `SerpApiSoldSearch` - fallback search through SerpApi
//!   (requires `serpapi` feature)
//! - `UnconfiguredSoldSearch` - fallback stand-in when no key is set

mod unconfigured;

#[cfg(feature = "scrapingbee")]
mod scrapingbee;

#[cfg(feature = "serpapi")]
mod serpapi;

pub use unconfigured::UnconfiguredSoldSearch;

#[cfg(feature = "scrapingbee")]
pub use scrapingbee::ScrapingBeeFetcher;

#[cfg(feature = "serpapi")]
pub use serpapi::SerpApiSoldSearch;
