use axum::{http::Uri, response::IntoResponse};
use hyper::StatusCode;
use tracing::instrument;

#[instrument(name = "Not Found", skip_all, fields(uri = %uri))]
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404: Page Not Found")
}
