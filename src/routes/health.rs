use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::{AppState, database, error::Result};

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub async fn readiness_check(State(state): State<AppState>) -> Result<impl IntoResponse> {
    database::check_health(&state.db).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "database": "connected"
        })),
    ))
}

pub async fn service_info() -> impl IntoResponse {
    Json(json!({
        "name": "Sales Dashboard Backend",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "ready",
        "endpoints": {
            "auth": "/api/auth/login, /api/auth/register, /api/auth/logout, /api/auth/me",
            "sales": "/api/sales, /api/sales/{id}, /api/sales/metrics",
            "health": "/api/health"
        }
    }))
}
