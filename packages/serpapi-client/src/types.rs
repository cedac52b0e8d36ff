use serde::{Deserialize, Serialize};

/// Query parameters for the eBay engine.
#[derive(Debug, Clone, Serialize)]
pub struct EbaySearchParams<'a> {
    pub engine: &'static str,
    pub ebay_domain: &'a str,
    pub q: &'a str,
    #[serde(rename = "_nkw")]
    pub nkw: &'a str,
    pub sold: bool,
    pub completed: bool,
    pub api_key: &'a str,
}

/// Top-level search response.
///
/// Results are kept as raw JSON: item shapes vary (price ranges, string vs
/// structured shipping) and each item is validated downstream on its own.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic_results: Vec<serde_json::Value>,
}
