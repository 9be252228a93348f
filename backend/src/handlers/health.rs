//! Kubernetes probe endpoints. Neither touches the data store.
//!
//! - `/healthz`: liveness, the process is up and serving
//! - `/readyz`: readiness, traffic may be routed here

use axum::{http::StatusCode, Json};
use serde_json::json;

/// Liveness payload of the SQL-backed service.
pub const USERS_LIVENESS: &str = "ok";
/// Liveness payload of the in-memory service.
pub const PROVIDERS_LIVENESS: &str = "healthy";

pub async fn liveness(status: &'static str) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": status })))
}

pub async fn readiness() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ready" })))
}
