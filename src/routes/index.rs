// src/routes/index.rs

use axum::Json;
use serde_json::{json, Value};

use crate::reports::Report;

pub async fn index() -> Json<Value> {
    let reports: Vec<String> = Report::ALL.iter().map(|r| r.path()).collect();
    Json(json!({
        "message": "API is running. See /api for endpoints.",
        "reports": reports,
    }))
}
