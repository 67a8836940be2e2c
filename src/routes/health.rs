// src/routes/health.rs

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{db, AppState};
use super::internal_error;

#[derive(Serialize)]
pub struct HealthResp {
    pub status: &'static str,
    pub version: &'static str,
    pub checked_at: DateTime<Utc>,
}

fn ok() -> HealthResp {
    HealthResp { status: "ok", version: "v1", checked_at: Utc::now() }
}

pub async fn health() -> Json<HealthResp> {
    Json(ok())
}

/// Same as `/health`, but only after a round trip to Postgres.
pub async fn health_db(
    State(state): State<AppState>,
) -> Result<Json<HealthResp>, (StatusCode, String)> {
    db::ping(&state.pool).await.map_err(|e| {
        tracing::warn!(error = %e, "database health check failed");
        internal_error(e)
    })?;
    Ok(Json(ok()))
}
