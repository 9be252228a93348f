use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{CreateProvider, Provider},
    ProvidersState,
};

// ── GET /providers ────────────────────────────────────────────────────────────

pub async fn list_providers(State(state): State<ProvidersState>) -> (StatusCode, Json<Vec<Provider>>) {
    let providers = state.providers.read().await.list_all();

    info!(count = providers.len(), "Listed providers");

    (StatusCode::OK, Json(providers))
}

// ── POST /providers ───────────────────────────────────────────────────────────

pub async fn create_provider(
    State(state): State<ProvidersState>,
    payload: Result<Json<CreateProvider>, JsonRejection>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Provider>)> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let provider = Provider::try_from(payload)?;

    // Check-then-append happens under one write guard.
    let provider = state.providers.write().await.create(provider)?;

    info!(id = provider.id, name = %provider.name, "Created provider");

    let location = format!("/providers/{}", provider.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(provider)))
}
