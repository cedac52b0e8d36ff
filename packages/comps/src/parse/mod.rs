//! Field normalizers shared by the extractor and the fallback mapper.

pub mod date;
pub mod price;
pub mod shipping;

pub use date::{canonical_timestamp, normalize_sold_date, normalize_upstream_date};
pub use price::{parse_price, CurrencyParser, DefaultCurrencyParser, ParsedPrice};
pub use shipping::{resolve_shipping_text, ShippingField};

/// Mis-decoded UTF-8 shows up as `Â` before punctuation (`Â·`) or as the
/// replacement character.
pub(crate) fn has_encoding_artifact(text: &str) -> bool {
    text.contains('\u{FFFD}') || text.contains('Â')
}
