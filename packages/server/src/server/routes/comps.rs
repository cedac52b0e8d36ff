//! Sold-listing comps endpoint.
//!
//! GET /comps?q=<query>
//!
//! Serves the last result from cache while it is fresh; otherwise runs the
//! full pipeline and stores the new report.

use axum::{
    extract::{Extension, Query},
    Json,
};
use comps::{CacheEntry, CompsReport};

use super::{ApiError, SearchQuery};
use crate::server::app::AppState;

pub async fn comps_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<CompsReport>, ApiError> {
    let query = params.required()?;

    if let Some(entry) = state.comps_cache.get(query) {
        tracing::info!(query = %query, "Serving comps from cache");
        return Ok(Json(entry.value.into_cached()));
    }

    let report = state.engine.lookup(query).await?;
    tracing::info!(
        query = %query,
        source = report.source.as_str(),
        count = report.statistics.count,
        "Comps lookup complete"
    );

    state
        .comps_cache
        .set(query, CacheEntry::new(query, report.clone()));

    Ok(Json(report))
}
