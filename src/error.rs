use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    MethodNotAllowed,
    /// Record store credentials or database id missing from configuration.
    Config(String),
    /// Non-2xx from the record store; body text kept verbatim for diagnosis.
    Upstream {
        endpoint: String,
        method: &'static str,
        status: u16,
        body: String,
    },
    Http(reqwest::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "{msg}"),
            AppError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            AppError::Config(msg) => write!(f, "{msg}"),
            AppError::Upstream {
                endpoint,
                method,
                status,
                body,
            } => write!(f, "{method} /{endpoint} -> {status} {body}"),
            AppError::Http(err) => write!(f, "{err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Config(_) | AppError::Upstream { .. } | AppError::Http(_) => {
                // Message is returned to the caller verbatim, upstream status
                // and body included; this endpoint is internal-tool-facing.
                tracing::error!("lead handler error: {self}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = json!({ "ok": false, "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Http(err)
    }
}
