//! Marketplace page contract: search URLs and the CSS selectors cards are
//! read with. A selector change upstream is a data-contract break, not a
//! parsing bug.

use url::Url;

use crate::types::config::PipelineConfig;

pub(crate) mod selectors {
    use scraper::Selector;
    use std::sync::LazyLock;

    pub static CARD: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".su-card-container").unwrap());

    pub static TITLE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".s-card__title .primary").unwrap());

    pub static PRICE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".s-card__price").unwrap());

    pub static SOLD_CAPTION: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".s-card__caption").unwrap());

    pub static CONDITION: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".s-card__subtitle span").unwrap());

    pub static IMAGE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".su-media__image img").unwrap());

    pub static LINK: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".su-media__image a").unwrap());

    pub static ATTRIBUTES: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".su-card-container__attributes__primary").unwrap());
}

fn search_base(config: &PipelineConfig) -> String {
    format!("https://www.{}/sch/i.html", config.marketplace_domain)
}

/// Search page for sold and completed listings, newest first.
pub fn sold_search_url(query: &str, config: &PipelineConfig) -> Result<Url, url::ParseError> {
    let per_page = config.results_per_page.to_string();
    Url::parse_with_params(
        &search_base(config),
        &[
            ("_nkw", query),
            ("_sop", "12"),
            ("LH_Sold", "1"),
            ("LH_Complete", "1"),
            ("_ipg", per_page.as_str()),
        ],
    )
}

/// Search page for active listings.
pub fn active_search_url(query: &str, config: &PipelineConfig) -> Result<Url, url::ParseError> {
    let per_page = config.results_per_page.to_string();
    Url::parse_with_params(
        &search_base(config),
        &[
            ("_nkw", query),
            ("_sop", "12"),
            ("LH_Active", "1"),
            ("_ipg", per_page.as_str()),
        ],
    )
}
