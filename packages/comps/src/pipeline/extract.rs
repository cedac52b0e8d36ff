//! Listing extraction from scraped search-result markup.
//!
//! Each result card is read into a [`RawCard`] of plain strings first, then
//! normalized. A card that fails any step is skipped and logged; it never
//! aborts the rest of the page.

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::{debug, info};

use crate::error::FieldError;
use crate::marketplace::selectors;
use crate::parse::shipping::mentions_shipping;
use crate::parse::{
    has_encoding_artifact, normalize_sold_date, parse_price, resolve_shipping_text,
    CurrencyParser,
};
use crate::types::config::PipelineConfig;
use crate::types::listing::{ActiveListing, ListingRecord, Shipping};

/// Raw text pulled from one result card before any normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCard {
    pub title: String,
    pub price_text: String,
    pub sold_text: String,
    pub condition_text: String,
    pub image_url: Option<String>,
    pub item_url: Option<String>,
    /// Text of every child of the attributes block, in order.
    pub attribute_lines: Vec<String>,
}

/// Why a card was left out of the results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipReason {
    #[error("promotional placeholder card")]
    Placeholder,

    #[error("missing title")]
    MissingTitle,

    #[error("missing or unparseable price")]
    MissingPrice,

    #[error("missing sold date")]
    MissingSoldDate,

    #[error("missing condition")]
    MissingCondition,

    #[error("{0}")]
    Field(#[from] FieldError),
}

fn first_text(card: ElementRef<'_>, selector: &Selector) -> String {
    card.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn first_attr(card: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    card.select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl RawCard {
    pub fn read(card: ElementRef<'_>) -> Self {
        let attribute_lines = card
            .select(&selectors::ATTRIBUTES)
            .next()
            .map(|block| {
                block
                    .children()
                    .filter_map(ElementRef::wrap)
                    .map(|child| child.text().collect::<String>().trim().to_string())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            title: first_text(card, &selectors::TITLE),
            price_text: first_text(card, &selectors::PRICE),
            sold_text: first_text(card, &selectors::SOLD_CAPTION),
            condition_text: first_text(card, &selectors::CONDITION),
            image_url: first_attr(card, &selectors::IMAGE, "src"),
            item_url: first_attr(card, &selectors::LINK, "href"),
            attribute_lines,
        }
    }

    /// Shipping from the attributes block.
    ///
    /// The first child is the price line; shipping, when present, sits in
    /// one of the later children. Cards with fewer than two children carry
    /// no shipping information at all.
    fn shipping(&self, parser: &dyn CurrencyParser) -> Option<Shipping> {
        if self.attribute_lines.len() < 2 {
            return None;
        }
        let text = self.attribute_lines[1..]
            .iter()
            .find(|line| mentions_shipping(line))
            .map(String::as_str)
            .unwrap_or("");
        Some(resolve_shipping_text(parser, text))
    }
}

/// Strip the middle-dot separator the subtitle uses (`Pre-Owned · `).
pub fn clean_condition(text: &str) -> Result<String, FieldError> {
    if has_encoding_artifact(text) {
        return Err(FieldError::EncodingArtifact(text.to_string()));
    }
    let cleaned = text
        .split('·')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if cleaned.is_empty() {
        return Err(FieldError::Empty);
    }
    Ok(cleaned)
}

/// Turn one raw sold card into a listing, or say why not.
pub fn normalize_card(
    raw: &RawCard,
    parser: &dyn CurrencyParser,
    config: &PipelineConfig,
) -> Result<ListingRecord, SkipReason> {
    if raw.title == config.placeholder_title {
        return Err(SkipReason::Placeholder);
    }
    if raw.title.is_empty() {
        return Err(SkipReason::MissingTitle);
    }
    let price = parse_price(parser, &raw.price_text).ok_or(SkipReason::MissingPrice)?;
    if raw.sold_text.is_empty() {
        return Err(SkipReason::MissingSoldDate);
    }
    if raw.condition_text.is_empty() {
        return Err(SkipReason::MissingCondition);
    }

    // Only accepted cards get their date parsed.
    let condition = clean_condition(&raw.condition_text)?;
    let sold_date = normalize_sold_date(&raw.sold_text)?;

    Ok(ListingRecord {
        title: raw.title.clone(),
        price: price.value,
        currency: price.currency_label(&config.default_currency),
        sold_date,
        condition,
        image_url: raw.image_url.clone(),
        item_url: raw.item_url.clone(),
        shipping: raw.shipping(parser),
    })
}

/// Extract sold listings from a search results page, in document order.
pub fn extract_listings(
    html: &str,
    parser: &dyn CurrencyParser,
    config: &PipelineConfig,
) -> Vec<ListingRecord> {
    let document = Html::parse_document(html);
    let mut listings = Vec::new();
    let mut skipped = 0usize;

    for (index, card) in document.select(&selectors::CARD).enumerate() {
        let raw = RawCard::read(card);
        match normalize_card(&raw, parser, config) {
            Ok(listing) => {
                debug!(
                    index,
                    title = %listing.title,
                    price = listing.price,
                    sold_date = %listing.sold_date,
                    "Extracted listing"
                );
                listings.push(listing);
            }
            Err(reason) => {
                skipped += 1;
                debug!(index, title = %raw.title, %reason, "Skipping card");
            }
        }
    }

    info!(extracted = listings.len(), skipped, "Extracted listings from HTML");
    listings
}

/// Extract active listings. Price is optional here; title and condition
/// are not.
pub fn extract_active_listings(
    html: &str,
    parser: &dyn CurrencyParser,
    config: &PipelineConfig,
) -> Vec<ActiveListing> {
    let document = Html::parse_document(html);

    let items: Vec<ActiveListing> = document
        .select(&selectors::CARD)
        .map(RawCard::read)
        .filter(|raw| !raw.title.is_empty() && raw.title != config.placeholder_title)
        .filter_map(|raw| {
            let condition = clean_condition(&raw.condition_text).ok()?;
            let price = parse_price(parser, &raw.price_text);
            Some(ActiveListing {
                title: raw.title,
                condition,
                price: price.as_ref().map(|p| p.value),
                currency: price.map(|p| p.currency_label(&config.default_currency)),
                image_url: raw.image_url,
                item_url: raw.item_url,
            })
        })
        .collect();

    info!(extracted = items.len(), "Extracted active listings from HTML");
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::DefaultCurrencyParser;
    use crate::testing::{search_page, CardFixture};

    fn extract(html: &str) -> Vec<ListingRecord> {
        extract_listings(html, &DefaultCurrencyParser, &PipelineConfig::default())
    }

    #[test]
    fn test_extracts_complete_card() {
        let html = search_page(&[CardFixture::sold("Nintendo Switch OLED", "$245.00")
            .with_condition("Pre-Owned · ")
            .with_shipping("+$12.50 delivery")
            .with_item_id(1)]);

        let listings = extract(&html);
        assert_eq!(listings.len(), 1);

        let l = &listings[0];
        assert_eq!(l.title, "Nintendo Switch OLED");
        assert_eq!(l.price, 245.0);
        assert_eq!(l.currency, "$");
        assert_eq!(l.sold_date, "2025-09-23T00:00:00.000Z");
        assert_eq!(l.condition, "Pre-Owned");
        assert_eq!(l.shipping, Some(Shipping::Cost(12.5)));
        assert_eq!(l.image_url.as_deref(), Some("https://i.ebayimg.com/images/1.jpg"));
        assert_eq!(l.item_url.as_deref(), Some("https://www.ebay.com/itm/1"));
    }

    #[test]
    fn test_placeholder_card_is_excluded() {
        let html = search_page(&[
            CardFixture::sold("Shop on eBay", "$20.00"),
            CardFixture::sold("Real item", "$20.00"),
        ]);

        let listings = extract(&html);
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Real item");
    }

    #[test]
    fn test_cards_missing_required_fields_are_skipped() {
        let html = search_page(&[
            CardFixture::sold("No price", ""),
            CardFixture::sold("No date", "$5.00").with_sold_caption(""),
            CardFixture::sold("No condition", "$5.00").with_condition(""),
            CardFixture::sold("Kept", "$5.00"),
        ]);

        let titles: Vec<_> = extract(&html).into_iter().map(|l| l.title).collect();
        assert_eq!(titles, vec!["Kept"]);
    }

    #[test]
    fn test_bad_date_drops_only_that_card() {
        let html = search_page(&[
            CardFixture::sold("First", "$10.00"),
            CardFixture::sold("Bad date", "$10.00").with_sold_caption("Sold Smarch 3, 2025"),
            CardFixture::sold("Third", "$30.00"),
        ]);

        let titles: Vec<_> = extract(&html).into_iter().map(|l| l.title).collect();
        assert_eq!(titles, vec!["First", "Third"]);
    }

    #[test]
    fn test_mangled_separator_rejects_card() {
        let html = search_page(&[CardFixture::sold("Mojibake", "$10.00")
            .with_condition("Pre-Owned Â· ")]);
        assert!(extract(&html).is_empty());
    }

    #[test]
    fn test_shipping_absent_without_second_attribute() {
        let html = search_page(&[CardFixture::sold("Plain", "$10.00")]);
        assert_eq!(extract(&html)[0].shipping, None);
    }

    #[test]
    fn test_shipping_unknown_for_auctions_with_bids() {
        let html = search_page(&[CardFixture::sold("Auction", "$10.00").with_shipping("4 bids")]);
        assert_eq!(extract(&html)[0].shipping, Some(Shipping::Unknown));
    }

    #[test]
    fn test_free_returns_line_is_not_shipping() {
        let raw = RawCard {
            attribute_lines: vec![
                "$10.00".to_string(),
                "Free returns".to_string(),
                "+$5.00 delivery".to_string(),
            ],
            ..RawCard::default()
        };
        assert_eq!(raw.shipping(&DefaultCurrencyParser), Some(Shipping::Cost(5.0)));
    }

    #[test]
    fn test_shipping_zero_when_block_has_no_shipping_line() {
        let html = search_page(&[CardFixture::sold("Silent", "$10.00")
            .with_shipping("Located in United States")]);
        assert_eq!(extract(&html)[0].shipping, Some(Shipping::FREE));
    }

    #[test]
    fn test_document_order_preserved() {
        let html = search_page(&[
            CardFixture::sold("A", "$3.00"),
            CardFixture::sold("B", "$1.00"),
            CardFixture::sold("C", "$2.00"),
        ]);
        let titles: Vec<_> = extract(&html).into_iter().map(|l| l.title).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_page() {
        assert!(extract("<html><body><p>No results</p></body></html>").is_empty());
    }

    #[test]
    fn test_clean_condition() {
        assert_eq!(clean_condition("Brand New · Sony").unwrap(), "Brand New Sony");
        assert_eq!(clean_condition(" · "), Err(FieldError::Empty));
    }

    #[test]
    fn test_active_listings_keep_cards_without_price() {
        let html = search_page(&[
            CardFixture::active("Listed item", "").with_condition("New"),
            CardFixture::active("Shop on eBay", "$1.00"),
            CardFixture::active("Priced", "$9.99"),
        ]);

        let items =
            extract_active_listings(&html, &DefaultCurrencyParser, &PipelineConfig::default());
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Listed item");
        assert_eq!(items[0].price, None);
        assert_eq!(items[1].price, Some(9.99));
        assert_eq!(items[1].currency.as_deref(), Some("$"));
    }
}
