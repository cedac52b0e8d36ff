//! The comps pipeline: extraction, fallback mapping, statistics and source
//! selection.

pub mod engine;
pub mod extract;
pub mod fallback;
pub mod orchestrate;
pub mod stats;

pub use engine::CompsEngine;
pub use extract::{
    clean_condition, extract_active_listings, extract_listings, normalize_card, RawCard,
    SkipReason,
};
pub use fallback::{map_fallback_results, map_item, FallbackItem, UNKNOWN_CONDITION};
pub use orchestrate::{needs_fallback, resolve_comps};
pub use stats::{compute_statistics, quantile, summarize_prices};
