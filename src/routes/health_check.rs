use axum::http::StatusCode;
use tracing::instrument;

#[instrument(name = "Health check")]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
