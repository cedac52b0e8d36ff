//! Maps fallback search results into listing records.
//!
//! Items arrive as raw JSON. Each one is decoded on its own so a single
//! odd-shaped item is dropped without affecting the rest.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::parse::{
    canonical_timestamp, has_encoding_artifact, normalize_upstream_date, parse_price,
    CurrencyParser, ParsedPrice, ShippingField,
};
use crate::types::config::PipelineConfig;
use crate::types::listing::ListingRecord;

/// Condition reported when the API gives none.
pub const UNKNOWN_CONDITION: &str = "Unknown";

/// One `organic_results` item. Price and shipping stay as raw JSON because
/// their shape varies between items.
#[derive(Debug, Default, Deserialize)]
pub struct FallbackItem {
    pub title: Option<String>,
    pub price: Option<Value>,
    pub thumbnail: Option<String>,
    pub link: Option<String>,
    pub sold_at: Option<String>,
    pub shipping: Option<Value>,
    pub condition: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Price from `{raw, extracted}`, a bare string, or a bare number.
fn item_price(price: &Value, parser: &dyn CurrencyParser) -> Option<ParsedPrice> {
    match price {
        Value::String(text) => parse_price(parser, text),
        Value::Number(n) => n.as_f64().map(|value| ParsedPrice {
            value,
            currency_symbol: String::new(),
            currency_code: None,
        }),
        Value::Object(fields) => fields
            .get("raw")
            .and_then(Value::as_str)
            .and_then(|raw| parse_price(parser, raw))
            .or_else(|| {
                fields
                    .get("extracted")
                    .and_then(Value::as_f64)
                    .map(|value| ParsedPrice {
                        value,
                        currency_symbol: String::new(),
                        currency_code: None,
                    })
            }),
        _ => None,
    }
}

/// Map one decoded item. `None` means the item fails the validity filter.
pub fn map_item(
    item: &FallbackItem,
    parser: &dyn CurrencyParser,
    config: &PipelineConfig,
    now: DateTime<Utc>,
) -> Option<ListingRecord> {
    let title = non_empty(&item.title)?;
    let item_url = non_empty(&item.link)?;

    let price = item
        .price
        .as_ref()
        .and_then(|p| item_price(p, parser))
        .filter(|p| p.value > 0.0)?;

    let sold_date = match non_empty(&item.sold_at) {
        Some(raw) => match normalize_upstream_date(raw) {
            Ok(date) => date,
            Err(e) => {
                debug!(title, sold_at = raw, error = %e, "Dropping fallback item with bad date");
                return None;
            }
        },
        None => canonical_timestamp(now),
    };

    let shipping = item
        .shipping
        .clone()
        .and_then(|v| serde_json::from_value::<ShippingField>(v).ok())
        .map(|field| field.resolve(parser));

    let condition = non_empty(&item.condition)
        .filter(|c| !has_encoding_artifact(c))
        .unwrap_or(UNKNOWN_CONDITION)
        .to_string();

    Some(ListingRecord {
        title: title.to_string(),
        price: price.value,
        currency: price.currency_label(&config.default_currency),
        sold_date,
        condition,
        image_url: non_empty(&item.thumbnail).map(str::to_string),
        item_url: Some(item_url.to_string()),
        shipping,
    })
}

/// Map fallback results in order, keeping only valid records.
pub fn map_fallback_results(
    items: &[Value],
    parser: &dyn CurrencyParser,
    config: &PipelineConfig,
    now: DateTime<Utc>,
) -> Vec<ListingRecord> {
    let listings: Vec<ListingRecord> = items
        .iter()
        .enumerate()
        .filter_map(|(index, value)| {
            match serde_json::from_value::<FallbackItem>(value.clone()) {
                Ok(item) => map_item(&item, parser, config, now),
                Err(e) => {
                    debug!(index, error = %e, "Skipping undecodable fallback item");
                    None
                }
            }
        })
        .collect();

    info!(
        received = items.len(),
        kept = listings.len(),
        "Mapped fallback results"
    );
    listings
}
