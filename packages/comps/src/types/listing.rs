//! Listing records produced by the extractor and the fallback mapper.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shipping cost as reported to clients.
///
/// Serialized as a string: the numeric cost (`"5"`, `"4.5"`) or the literal
/// `"Unknown"` when the cost exists but cannot be read (live auctions).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Shipping {
    Cost(f64),
    Unknown,
}

impl Shipping {
    pub const FREE: Shipping = Shipping::Cost(0.0);
}

impl fmt::Display for Shipping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shipping::Cost(c) => write!(f, "{}", c),
            Shipping::Unknown => f.write_str("Unknown"),
        }
    }
}

impl From<Shipping> for String {
    fn from(s: Shipping) -> Self {
        s.to_string()
    }
}

impl TryFrom<String> for Shipping {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s == "Unknown" {
            return Ok(Shipping::Unknown);
        }
        s.parse::<f64>()
            .map(Shipping::Cost)
            .map_err(|_| format!("invalid shipping value: {s}"))
    }
}

/// One sold listing, normalized from either source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub title: String,

    /// Currency-stripped, non-negative.
    pub price: f64,

    pub currency: String,

    /// ISO-8601 UTC with millisecond precision.
    pub sold_date: String,

    pub condition: String,

    pub image_url: Option<String>,

    pub item_url: Option<String>,

    /// `None` when the card carried no shipping block at all.
    pub shipping: Option<Shipping>,
}

/// An active (unsold) listing from the browse page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveListing {
    pub title: String,
    pub condition: String,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub image_url: Option<String>,
    pub item_url: Option<String>,
}
