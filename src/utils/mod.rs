mod data;
mod server;

use std::fmt::{Debug, Display};

use axum::response::{IntoResponse, Response};
pub use data::Data;
use hyper::StatusCode;
pub use server::{shutdown_signal, Server};

/// Logs `e` with its cause chain and answers a bare 500.
pub fn e500<T>(e: T) -> Response
where
    T: Display + Debug + 'static,
{
    tracing::error!(error.cause_chain = ?e, error.message = %e, "Request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "500: Internal Server Error").into_response()
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
