pub mod lead;

use axum::routing::post;
use axum::Router;

use crate::state::SharedState;

pub fn lead_routes() -> Router<SharedState> {
    Router::new().route(
        "/api/lead",
        post(lead::submit)
            .options(lead::preflight)
            .fallback(lead::method_not_allowed),
    )
}
