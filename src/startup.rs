use std::future::IntoFuture;

use axum::{body::Body, http::Request, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    services::ServeDir,
    trace::{DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{
    appstate::AppState,
    configuration::Settings,
    routes::{health_check, home, not_found},
    templates::TeraRenderer,
    utils::{shutdown_signal, Server},
};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Loads the templates, binds the listener and wires the router.
    ///
    /// Port `0` asks the OS for a free port; read it back with [`Application::port`].
    pub async fn build(configuration: Settings) -> anyhow::Result<Self> {
        let renderer = TeraRenderer::from_settings(&configuration.templates)?;
        let state = AppState::new(renderer);

        let listener = TcpListener::bind(configuration.application.address()).await?;
        let port = listener.local_addr()?.port();
        tracing::info!(port, "Listening");

        let server = run(listener, state, &configuration.application.static_dir);

        Ok(Self { port, server })
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

pub fn app(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health_check", get(health_check))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(default_span)
                .on_request(DefaultOnRequest::new())
                .on_response(DefaultOnResponse::new())
                .on_failure(DefaultOnFailure::new()),
        )
        .with_state(state)
}

pub fn run(listener: TcpListener, state: AppState, static_dir: &str) -> Server {
    let app = app(state, static_dir);
    Server::new(
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .into_future(),
    )
}

fn default_span(request: &Request<Body>) -> tracing::Span {
    let request_id = uuid::Uuid::new_v4();
    tracing::span!(
        Level::DEBUG,
        "request",
        method = tracing::field::display(request.method()),
        uri = tracing::field::display(request.uri()),
        version = tracing::field::debug(request.version()),
        request_id = tracing::field::display(request_id),
    )
}
