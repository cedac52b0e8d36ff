//! Shipping cost resolution.
//!
//! Scraped cards describe shipping in free text (`Free delivery`,
//! `+$5.00 delivery`, or nothing at all on auctions with live bids). The
//! fallback API sends either text or a `{raw, extracted}` record.

use serde::Deserialize;

use super::price::{parse_price, CurrencyParser};
use crate::types::listing::Shipping;

/// Shipping as delivered by the fallback API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ShippingField {
    Structured {
        #[serde(default)]
        raw: Option<String>,
        extracted: f64,
    },
    /// A record with only the display text.
    RawOnly { raw: String },
    Text(String),
}

impl ShippingField {
    pub fn resolve(&self, parser: &dyn CurrencyParser) -> Shipping {
        match self {
            ShippingField::Structured { extracted, .. } => Shipping::Cost(*extracted),
            ShippingField::RawOnly { raw: text } | ShippingField::Text(text) => {
                resolve_shipping_text(parser, text)
            }
        }
    }
}

/// Resolve free-text shipping.
///
/// Auctions with bids report `Unknown` instead of zero: the buyer will pay
/// something, the card just does not say what.
pub fn resolve_shipping_text(parser: &dyn CurrencyParser, text: &str) -> Shipping {
    let lower = text.to_ascii_lowercase();

    if lower.contains("free") {
        return Shipping::FREE;
    }
    if lower.contains("bids") {
        return Shipping::Unknown;
    }

    let marker = lower.find("delivery").or_else(|| lower.find("shipping"));
    if let Some(idx) = marker {
        let amount = text[..idx].trim().trim_start_matches('+').trim();
        if let Some(parsed) = parse_price(parser, amount) {
            return Shipping::Cost(parsed.value);
        }
    }

    Shipping::FREE
}

/// Whether a line of card text is about shipping at all.
///
/// "Free" alone is not enough (`Free returns`); free shipping lines always
/// name delivery or shipping too.
pub(crate) fn mentions_shipping(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    ["delivery", "shipping", "bids"]
        .iter()
        .any(|kw| lower.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::price::DefaultCurrencyParser;

    fn resolve(text: &str) -> String {
        resolve_shipping_text(&DefaultCurrencyParser, text).to_string()
    }

    #[test]
    fn test_flat_delivery_fee() {
        assert_eq!(resolve("+$5.00 delivery"), "5");
        assert_eq!(resolve("+$12.35 delivery in 2-4 days"), "12.35");
        assert_eq!(resolve("+$4.99 shipping"), "4.99");
    }

    #[test]
    fn test_free_delivery() {
        assert_eq!(resolve("Free delivery"), "0");
        assert_eq!(resolve("Free 3 day delivery"), "0");
    }

    #[test]
    fn test_bids_mean_unknown() {
        assert_eq!(resolve("3 bids"), "Unknown");
        assert_eq!(resolve("12 bids · +$5.00 delivery"), "Unknown");
    }

    #[test]
    fn test_unrecognized_text_is_zero() {
        assert_eq!(resolve(""), "0");
        assert_eq!(resolve("Located in United States"), "0");
        assert_eq!(resolve("+ delivery"), "0");
    }

    #[test]
    fn test_structured_record() {
        let field: ShippingField =
            serde_json::from_str(r#"{"raw": "x", "extracted": 4.5}"#).unwrap();
        assert_eq!(field.resolve(&DefaultCurrencyParser).to_string(), "4.5");
    }

    #[test]
    fn test_record_without_extracted_amount_uses_text() {
        let free: ShippingField = serde_json::from_str(r#"{"raw": "Free shipping"}"#).unwrap();
        assert_eq!(free.resolve(&DefaultCurrencyParser), Shipping::FREE);

        let flat: ShippingField =
            serde_json::from_str(r#"{"raw": "+$7.25 shipping"}"#).unwrap();
        assert_eq!(flat.resolve(&DefaultCurrencyParser), Shipping::Cost(7.25));
    }

    #[test]
    fn test_text_variant_from_json() {
        let field: ShippingField = serde_json::from_str(r#""Free shipping""#).unwrap();
        assert_eq!(field, ShippingField::Text("Free shipping".to_string()));
        assert_eq!(field.resolve(&DefaultCurrencyParser), Shipping::FREE);
    }

    #[test]
    fn test_mentions_shipping() {
        assert!(mentions_shipping("+$5.00 delivery"));
        assert!(mentions_shipping("7 bids"));
        assert!(mentions_shipping("Free shipping"));
        assert!(!mentions_shipping("Buy It Now"));
        assert!(!mentions_shipping("Free returns"));
    }
}
