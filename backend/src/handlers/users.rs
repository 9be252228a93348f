use std::time::Instant;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::info;

use crate::{
    db,
    error::{AppError, AppResult},
    models::{CreateUser, User},
    UsersState,
};

// ── GET /db-test ──────────────────────────────────────────────────────────────

pub async fn db_test(
    State(state): State<UsersState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let start = Instant::now();
    let result = db::query_health(&state.db).await?;

    info!(elapsed_ms = start.elapsed().as_millis(), "Database round-trip ok");

    Ok((
        StatusCode::OK,
        Json(json!({
            "database_status": "Connected",
            "result": result,
        })),
    ))
}

// ── POST /users/ ──────────────────────────────────────────────────────────────

pub async fn create_user(
    State(state): State<UsersState>,
    payload: Result<Query<CreateUser>, QueryRejection>,
) -> AppResult<(StatusCode, Json<User>)> {
    let Query(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let user = db::insert_user(&state.db, &payload).await?;

    info!(id = user.id, email = %user.email, "Created user");

    Ok((StatusCode::OK, Json(user)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::handlers::testing::{get, post, send, unreachable_users_state};
    use crate::users_router;

    #[tokio::test]
    async fn db_test_reports_unreachable_database() {
        let app = users_router(unreachable_users_state());
        let (status, _, body) = send(&app, get("/db-test")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.starts_with("Database connection failed: "), "got: {detail}");
    }

    #[tokio::test]
    async fn create_user_requires_email() {
        let app = users_router(unreachable_users_state());
        let (status, _, body) = send(&app, post("/users/?name=Ada")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("email"), "got: {body}");
    }

    #[tokio::test]
    async fn create_user_requires_name() {
        let app = users_router(unreachable_users_state());
        let (status, _, _) = send(&app, post("/users/?email=ada@example.com")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    mod live {
        //! Run with a reachable PostgreSQL in `DATABASE_URL`: `cargo test -- --ignored`.

        use super::*;
        use sqlx::postgres::PgPoolOptions;

        use crate::{db, UsersState};

        async fn live_app() -> axum::Router {
            let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
            let pool = PgPoolOptions::new().max_connections(2).connect(&url).await.unwrap();
            db::ensure_schema(&pool).await.unwrap();
            users_router(UsersState { db: pool })
        }

        #[tokio::test]
        #[ignore = "requires PostgreSQL"]
        async fn db_test_round_trips() {
            let app = live_app().await;
            let (status, _, body) = send(&app, get("/db-test")).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({ "database_status": "Connected", "result": 1 }));
        }

        #[tokio::test]
        #[ignore = "requires PostgreSQL"]
        async fn create_then_duplicate_email_conflicts() {
            let app = live_app().await;
            let email = format!("{}@x.com", uuid::Uuid::new_v4());
            let uri = format!("/users/?name=A&email={email}");

            let (status, _, body) = send(&app, post(&uri)).await;
            assert_eq!(status, StatusCode::OK);
            assert!(body["id"].as_i64().unwrap() > 0);
            assert_eq!(body["name"], "A");
            assert_eq!(body["email"], email.as_str());

            let (status, _, body) = send(&app, post(&uri)).await;
            assert_eq!(status, StatusCode::CONFLICT);
            assert!(body["message"].as_str().unwrap().contains("already exists"));
        }
    }
}
