use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;

use crate::csv;
use crate::email::MailOutcome;
use crate::error::AppError;
use crate::lead::{self, text};
use crate::state::SharedState;

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let content_type = headers.get("content-type").and_then(|v| v.to_str().ok());

    let lead = lead::parse_body(content_type, &body).map_err(AppError::BadRequest)?;

    if !lead.has_required() {
        return Err(AppError::BadRequest(
            "Missing required fields (name, company, email)".to_string(),
        ));
    }

    // Record creation is the only fatal path; a failure here aborts the
    // request before any mail is attempted.
    let lead_id = state.notion.create_lead(&lead).await?;

    let now = Utc::now();
    let snapshot = csv::snapshot(&lead, now);

    let (team, customer) = match &state.mailer {
        Some(mailer) => (
            mailer.team_digest(&snapshot, now).await,
            mailer
                .customer_confirmation(text(&lead.name), text(&lead.email))
                .await,
        ),
        None => (
            MailOutcome::skipped("SMTP not configured"),
            MailOutcome::skipped("SMTP not configured"),
        ),
    };

    Ok((
        StatusCode::OK,
        Json(json!({
            "ok": true,
            "leadId": lead_id,
            "mail": {
                "team": team.to_json(),
                "customer": customer.to_json(),
            },
        })),
    )
        .into_response())
}

/// CORS preflight; the landing page posts from another origin.
pub async fn preflight() -> Response {
    (
        [
            ("Access-Control-Allow-Origin", "*"),
            ("Access-Control-Allow-Methods", "POST, OPTIONS"),
            ("Access-Control-Allow-Headers", "Content-Type"),
        ],
        StatusCode::NO_CONTENT,
    )
        .into_response()
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
