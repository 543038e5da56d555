use serde::Deserialize;
use snafu::ResultExt;

use crate::{
    Result,
    error::{HttpClientSnafu, HttpResponseParseSnafu, ServiceSnafu},
    run::AppState,
};
use sala::dto::LeadSubmission;

#[derive(Deserialize)]
struct LeadResponse {
    success: bool,
}

/// Forwards a validated lead to the contact backend.
///
/// The backend is an external collaborator; any non-success answer surfaces
/// as a service error so the form can show a retry message.
pub async fn submit_lead(state: &AppState, lead: &LeadSubmission) -> Result<()> {
    let response = state
        .client
        .post(&state.config.contact_api_url)
        .json(lead)
        .send()
        .await
        .context(HttpClientSnafu {
            msg: "Unable to submit lead".to_string(),
        })?;

    if !response.status().is_success() {
        return ServiceSnafu {
            msg: format!("Lead backend returned {}", response.status()),
        }
        .fail();
    }

    let body = response
        .json::<LeadResponse>()
        .await
        .context(HttpResponseParseSnafu {
            msg: "Unable to parse lead response".to_string(),
        })?;

    if !body.success {
        return ServiceSnafu {
            msg: "Lead backend rejected the submission".to_string(),
        }
        .fail();
    }

    Ok(())
}
