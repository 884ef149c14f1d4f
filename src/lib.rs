use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use rand::{rngs::StdRng, SeedableRng};
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod store;

use config::Config;
use store::MemoryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: MemoryStore,
    pub config: Arc<Config>,
    pub rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Seeded variant so tests can pin template selection.
    pub fn with_rng(config: Config, rng: StdRng) -> Self {
        Self {
            store: MemoryStore::new(),
            config: Arc::new(config),
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let allowed_origins: Vec<axum::http::HeaderValue> = {
        let mut origins = vec![state
            .config
            .frontend_url
            .parse::<axum::http::HeaderValue>()
            .unwrap()];
        // In dev, also allow LAN access (e.g. testing from another device)
        if let Ok(extra) = std::env::var("CORS_EXTRA_ORIGINS") {
            for o in extra.split(',') {
                if let Ok(hv) = o.trim().parse::<axum::http::HeaderValue>() {
                    origins.push(hv);
                }
            }
        }
        origins
    };
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        // Journal
        .route("/api/journal/entry", post(handlers::journal::submit_entry))
        .route("/api/journal/:user_id", get(handlers::journal::list_entries))
        // Schedule
        .route(
            "/api/schedule/create",
            post(handlers::schedule::create_schedule),
        )
        .route(
            "/api/schedule/:user_id",
            get(handlers::schedule::today_schedule),
        )
        // Emotional support
        .route("/api/support/check-in", post(handlers::support::check_in))
        .route(
            "/api/support/check-ins/:user_id",
            get(handlers::support::list_check_ins),
        )
        .route(
            "/api/support/breathing-exercise",
            get(handlers::support::breathing_exercise),
        )
        // Quote of the day
        .route("/api/quote/daily", get(handlers::quote::daily_quote))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
