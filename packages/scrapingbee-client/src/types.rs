use serde::Serialize;

/// Query parameters for a single ScrapingBee page fetch.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeParams<'a> {
    pub api_key: &'a str,
    pub url: &'a str,
    /// Headless browser rendering. Search pages are server-rendered, so this
    /// defaults to off to save credits.
    pub render_js: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<&'a str>,
}
