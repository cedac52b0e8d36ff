//! Testing utilities: mock transports and markup fixtures.
//!
//! Useful for exercising the pipeline without network calls.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::MarketplaceFetcher;
use crate::traits::sold_search::{SoldSearch, SoldSearchOutcome};

/// Mock primary fetcher.
///
/// Returns a page registered for the exact URL, else the default page.
/// Clones share state, so a test can keep a handle for call assertions.
#[derive(Clone, Default)]
pub struct MockFetcher {
    pages: Arc<RwLock<HashMap<String, String>>>,
    default_page: Option<String>,
    failure: Option<(u16, String)>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for every URL.
    pub fn with_default_page(html: impl Into<String>) -> Self {
        Self {
            default_page: Some(html.into()),
            ..Self::default()
        }
    }

    /// Fail every fetch with an upstream status.
    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self {
            failure: Some((status, message.into())),
            ..Self::default()
        }
    }

    /// Serve `html` for `url` (builder pattern).
    pub fn with_page(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.write().unwrap().insert(url.into(), html.into());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl MarketplaceFetcher for MockFetcher {
    async fn fetch_page(&self, url: &str) -> FetchResult<String> {
        self.calls.write().unwrap().push(url.to_string());

        if let Some((status, message)) = &self.failure {
            return Err(FetchError::Api {
                status: *status,
                message: message.clone(),
            });
        }

        self.pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .or_else(|| self.default_page.clone())
            .ok_or_else(|| FetchError::Api {
                status: 404,
                message: format!("no mock page for {url}"),
            })
    }
}

#[derive(Clone)]
enum MockOutcome {
    Results(Vec<Value>),
    Unavailable,
    Fail(u16, String),
}

/// Mock fallback search with call tracking.
#[derive(Clone)]
pub struct MockSoldSearch {
    outcome: MockOutcome,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockSoldSearch {
    fn from_outcome(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn with_results(items: Vec<Value>) -> Self {
        Self::from_outcome(MockOutcome::Results(items))
    }

    pub fn unavailable() -> Self {
        Self::from_outcome(MockOutcome::Unavailable)
    }

    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self::from_outcome(MockOutcome::Fail(status, message.into()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Queries searched so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl SoldSearch for MockSoldSearch {
    async fn search_sold(&self, query: &str) -> FetchResult<SoldSearchOutcome> {
        self.calls.write().unwrap().push(query.to_string());
        match &self.outcome {
            MockOutcome::Results(items) => Ok(SoldSearchOutcome::Results(items.clone())),
            MockOutcome::Unavailable => Ok(SoldSearchOutcome::Unavailable),
            MockOutcome::Fail(status, message) => Err(FetchError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// A fallback API item with the required fields filled in.
pub fn fallback_item(title: &str, price: f64) -> Value {
    let slug = title.to_lowercase().replace(' ', "-");
    json!({
        "title": title,
        "price": {"raw": format!("${price:.2}"), "extracted": price},
        "link": format!("https://www.ebay.com/itm/{slug}"),
        "thumbnail": format!("https://i.ebayimg.com/thumbs/{slug}.jpg"),
        "sold_at": "Sold  Sep 20, 2025",
        "shipping": {"raw": "Free delivery", "extracted": 0.0},
        "condition": "Pre-Owned"
    })
}

/// One search-result card in the marketplace's markup.
#[derive(Debug, Clone)]
pub struct CardFixture {
    pub title: String,
    pub price: String,
    pub sold_caption: Option<String>,
    pub condition: String,
    pub shipping: Option<String>,
    pub item_id: u32,
}

static NEXT_ITEM_ID: std::sync::atomic::AtomicU32 = std::sync::atomic::AtomicU32::new(1);

impl CardFixture {
    /// A sold card dated Sep 23, 2025, condition `Pre-Owned`.
    pub fn sold(title: &str, price: &str) -> Self {
        Self {
            title: title.to_string(),
            price: price.to_string(),
            sold_caption: Some("Sold Sep 23, 2025".to_string()),
            condition: "Pre-Owned".to_string(),
            shipping: None,
            item_id: NEXT_ITEM_ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed),
        }
    }

    /// An active card: no sold caption.
    pub fn active(title: &str, price: &str) -> Self {
        Self {
            sold_caption: None,
            ..Self::sold(title, price)
        }
    }

    pub fn with_sold_caption(mut self, caption: &str) -> Self {
        self.sold_caption = Some(caption.to_string());
        self
    }

    pub fn with_condition(mut self, condition: &str) -> Self {
        self.condition = condition.to_string();
        self
    }

    /// Add a second attributes row carrying shipping text.
    pub fn with_shipping(mut self, text: &str) -> Self {
        self.shipping = Some(text.to_string());
        self
    }

    pub fn with_item_id(mut self, id: u32) -> Self {
        self.item_id = id;
        self
    }

    pub fn to_html(&self) -> String {
        let caption = self
            .sold_caption
            .as_ref()
            .map(|c| format!(r#"<div class="s-card__caption"><span>{}</span></div>"#, escape(c)))
            .unwrap_or_default();
        let shipping = self
            .shipping
            .as_ref()
            .map(|s| format!(r#"<div class="s-card__attribute-row"><span>{}</span></div>"#, escape(s)))
            .unwrap_or_default();
        let id = self.item_id;

        format!(
            r#"<li class="s-card"><div class="su-card-container">
  <div class="su-card-container__media"><div class="su-media__image"><a href="https://www.ebay.com/itm/{id}"><img src="https://i.ebayimg.com/images/{id}.jpg" alt=""></a></div></div>
  <div class="su-card-container__content">
    <div class="su-card-container__header">
      {caption}
      <div class="s-card__title"><span class="primary default">{title}</span></div>
      <div class="s-card__subtitle"><span>{condition}</span></div>
    </div>
    <div class="su-card-container__attributes">
      <div class="su-card-container__attributes__primary">
        <div class="s-card__attribute-row"><span class="s-card__price">{price}</span></div>
        {shipping}
      </div>
    </div>
  </div>
</div></li>"#,
            title = escape(&self.title),
            condition = escape(&self.condition),
            price = escape(&self.price),
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Wrap cards in a minimal search results page.
pub fn search_page(cards: &[CardFixture]) -> String {
    let body: String = cards.iter().map(CardFixture::to_html).collect();
    format!(
        r#"<!DOCTYPE html><html><head><title>Search results</title></head><body><ul class="srp-results">{body}</ul></body></html>"#
    )
}
