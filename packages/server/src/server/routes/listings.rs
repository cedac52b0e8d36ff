//! Active listings endpoint: GET /listings?q=<query>

use axum::{
    extract::{Extension, Query},
    Json,
};
use comps::{ActiveListingsReport, CacheEntry};

use super::{ApiError, SearchQuery};
use crate::server::app::AppState;

pub async fn listings_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<ActiveListingsReport>, ApiError> {
    let query = params.required()?;

    if let Some(entry) = state.listings_cache.get(query) {
        tracing::info!(query = %query, "Serving listings from cache");
        return Ok(Json(entry.value.into_cached()));
    }

    let report = state.engine.active_listings(query).await?;
    tracing::info!(query = %query, count = report.items.len(), "Listings lookup complete");

    state
        .listings_cache
        .set(query, CacheEntry::new(query, report.clone()));

    Ok(Json(report))
}
