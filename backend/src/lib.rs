use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod server;
pub mod startup;
pub mod store;

use crate::handlers::health;
use crate::store::ProviderStore;

/// State of the SQL-backed `users-api`. Cheap to clone: the pool is an `Arc` inside.
#[derive(Clone)]
pub struct UsersState {
    pub db: sqlx::PgPool,
}

/// State of the in-memory `providers-api`. Each instance owns its own store.
#[derive(Clone)]
pub struct ProvidersState {
    pub providers: Arc<RwLock<ProviderStore>>,
}

impl ProvidersState {
    pub fn new(store: ProviderStore) -> Self {
        Self {
            providers: Arc::new(RwLock::new(store)),
        }
    }
}

pub fn users_router(state: UsersState) -> Router {
    Router::new()
        // ── Probes ──────────────────────────────────────────────────────────
        .route("/", get(handlers::root))
        .route("/healthz", get(|| health::liveness(health::USERS_LIVENESS)))
        .route("/readyz", get(health::readiness))

        // ── Diagnostics ─────────────────────────────────────────────────────
        .route("/db-test", get(handlers::users::db_test))

        // ── Users ───────────────────────────────────────────────────────────
        .route("/users/", post(handlers::users::create_user))
        .route("/users", post(handlers::users::create_user))

        // ── Items ───────────────────────────────────────────────────────────
        .route("/items/:item_id", get(handlers::items::read_item))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub fn providers_router(state: ProvidersState) -> Router {
    Router::new()
        // ── Probes ──────────────────────────────────────────────────────────
        .route("/", get(handlers::root))
        .route("/healthz", get(|| health::liveness(health::PROVIDERS_LIVENESS)))
        .route("/readyz", get(health::readiness))

        // ── Providers ───────────────────────────────────────────────────────
        .route(
            "/providers",
            get(handlers::providers::list_providers).post(handlers::providers::create_provider),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
