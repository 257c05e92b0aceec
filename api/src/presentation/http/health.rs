use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use sqlx::PgPool;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Liveness probe; "degraded" when Postgres does not answer `SELECT 1`.
pub async fn health(State(pool): State<PgPool>) -> Json<HealthStatus> {
    let status = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&pool)
        .await
    {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!(error = ?e, "health_db_unreachable");
            "degraded"
        }
    };
    Json(HealthStatus { status })
}

pub fn routes(pool: PgPool) -> Router {
    Router::new().route("/health", get(health)).with_state(pool)
}
