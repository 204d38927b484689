pub mod config;
pub mod csv;
pub mod email;
pub mod error;
pub mod lead;
pub mod notion;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::Config;
use crate::email::Mailer;
use crate::notion::NotionClient;
use crate::state::{AppState, SharedState};

pub fn build_app(config: Config) -> Router {
    let notion = NotionClient::new(&config);

    let mailer = config.smtp.as_ref().and_then(|smtp| {
        match Mailer::new(&config, smtp) {
            Ok(mailer) => {
                tracing::info!("SMTP configured for {}", smtp.host);
                Some(mailer)
            }
            Err(e) => {
                tracing::warn!("SMTP not available: {e}");
                None
            }
        }
    });

    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        config,
        notion,
        mailer,
    });

    Router::new()
        .merge(routes::lead_routes())
        .route("/health", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        // Every response carries the open CORS header, error paths included.
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-origin"),
            HeaderValue::from_static("*"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
