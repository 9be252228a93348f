use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ItemQuery {
    pub q: Option<String>,
}

// ── GET /items/:item_id ───────────────────────────────────────────────────────

/// Echoes the path id and the optional `q` query parameter.
pub async fn read_item(
    item_id: Result<Path<i64>, PathRejection>,
    query: Result<Query<ItemQuery>, QueryRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Path(item_id) = item_id.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    Ok((
        StatusCode::OK,
        Json(json!({ "item_id": item_id, "query": query.q })),
    ))
}
