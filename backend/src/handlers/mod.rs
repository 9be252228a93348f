pub mod health;
pub mod items;
pub mod providers;
pub mod users;

use axum::{http::StatusCode, Json};
use serde_json::json;

pub async fn root() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "message": "Hello from your k8s cluster!" })))
}
