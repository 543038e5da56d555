use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;
use validator::Validate;

use crate::{
    error::ErrorResponse,
    run::AppState,
    services::{AnalyticsEvent, submit_lead, track_event},
};
use sala::dto::{LeadSubmission, flatten_errors};

/// JSON contact endpoint for client-side form submission.
///
/// Lives under the excluded `/api` prefix, so it answers with JSON rather
/// than localized pages.
pub async fn api_contact_handler(
    State(state): State<AppState>,
    Json(lead): Json<LeadSubmission>,
) -> Response {
    if let Err(errors) = lead.validate() {
        return error_response(StatusCode::BAD_REQUEST, flatten_errors(&errors));
    }

    if let Err(err) = submit_lead(&state, &lead).await {
        warn!("Lead submission failed: {}", err);
        return error_response(
            StatusCode::BAD_GATEWAY,
            "Unable to submit message".to_string(),
        );
    }

    track_event(
        &state,
        AnalyticsEvent::new("lead_submitted", lead.locale, "/api/contact"),
    );

    Json(json!({ "success": true })).into_response()
}

fn error_response(status: StatusCode, message: String) -> Response {
    let body = ErrorResponse {
        status_code: status.as_u16(),
        message,
        error: status
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string(),
    };
    (status, Json(body)).into_response()
}
