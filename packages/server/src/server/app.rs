//! Application setup and server configuration.

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use comps::{
    ActiveListingsReport, CompsEngine, CompsReport, MemoryCache, PipelineConfig,
    ResultCache, ScrapingBeeFetcher, SerpApiSoldSearch, SoldSearch, UnconfiguredSoldSearch,
};
use secrecy::ExposeSecret;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::server::routes::{comps_handler, health_handler, listings_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<CompsEngine>,
    pub comps_cache: Arc<dyn ResultCache<CompsReport>>,
    pub listings_cache: Arc<dyn ResultCache<ActiveListingsReport>>,
}

impl AppState {
    /// State with fresh in-memory caches sharing one TTL.
    pub fn new(engine: CompsEngine, cache_ttl: chrono::Duration) -> Self {
        Self {
            engine: Arc::new(engine),
            comps_cache: Arc::new(MemoryCache::<CompsReport>::new(cache_ttl)),
            listings_cache: Arc::new(MemoryCache::<ActiveListingsReport>::new(cache_ttl)),
        }
    }

    /// Wire the real transports from configuration.
    pub fn from_config(config: &Config) -> Self {
        let fetcher = Arc::new(ScrapingBeeFetcher::new(config.bee_key.expose_secret()));

        let sold_search: Arc<dyn SoldSearch> = match &config.serp_key {
            Some(key) => Arc::new(SerpApiSoldSearch::new(key.expose_secret())),
            None => {
                tracing::warn!("SERP_KEY not set, fallback search disabled");
                Arc::new(UnconfiguredSoldSearch)
            }
        };

        let engine = CompsEngine::new(fetcher, sold_search).with_config(
            PipelineConfig::default().with_min_primary_listings(config.min_primary_listings),
        );

        Self::new(engine, chrono::Duration::seconds(config.cache_ttl_secs))
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/comps", get(comps_handler))
        .route("/listings", get(listings_handler))
        .route("/health", get(health_handler))
        // Layers run bottom-up: trace wraps CORS wraps state
        .layer(Extension(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
