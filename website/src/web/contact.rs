use askama::Template;
use axum::{
    Extension, Form,
    body::Body,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use snafu::ResultExt;
use tracing::warn;
use validator::Validate;

use crate::{
    Result,
    error::TemplateSnafu,
    models::{ContactFormData, TemplateData},
    run::AppState,
    services::{AnalyticsEvent, submit_lead, track_event},
    web::html_response,
};
use sala::dto::flatten_errors;
use sala::locale::Locale;
use sala::security::CspNonce;

#[derive(Template)]
#[template(path = "pages/contact.html")]
struct ContactTemplate {
    t: TemplateData,
    error: Option<String>,
    name: String,
    email: String,
    company: String,
    message: String,
}

#[derive(Template)]
#[template(path = "pages/thanks.html")]
struct ThanksTemplate {
    t: TemplateData,
}

pub async fn contact_handler(
    Extension(locale): Extension<Locale>,
    nonce: Option<Extension<CspNonce>>,
    State(state): State<AppState>,
) -> Result<Response<Body>> {
    let mut t = TemplateData::new(&state, locale, nonce.map(|Extension(n)| n));
    t.title = t.msg("contact.title");

    let tpl = ContactTemplate {
        t,
        error: None,
        name: String::new(),
        email: String::new(),
        company: String::new(),
        message: String::new(),
    };

    html_response(StatusCode::OK, tpl.render().context(TemplateSnafu)?)
}

pub async fn post_contact_handler(
    Extension(locale): Extension<Locale>,
    nonce: Option<Extension<CspNonce>>,
    State(state): State<AppState>,
    Form(form): Form<ContactFormData>,
) -> Result<Response<Body>> {
    let t = TemplateData::new(&state, locale, nonce.map(|Extension(n)| n));
    let lead = form.clone().into_lead(locale);

    if let Err(errors) = lead.validate() {
        let detail = flatten_errors(&errors);
        let banner = format!("{} ({})", t.msg("contact.invalid"), detail);
        return render_form(t, form, banner, StatusCode::BAD_REQUEST);
    }

    if let Err(err) = submit_lead(&state, &lead).await {
        warn!("Lead submission failed: {}", err);
        let banner = t.msg("contact.failed");
        return render_form(t, form, banner, StatusCode::BAD_GATEWAY);
    }

    track_event(
        &state,
        AnalyticsEvent::new("lead_submitted", locale, "/contact"),
    );

    Ok(Redirect::to(&t.href("/contact/thanks")).into_response())
}

pub async fn contact_thanks_handler(
    Extension(locale): Extension<Locale>,
    nonce: Option<Extension<CspNonce>>,
    State(state): State<AppState>,
) -> Result<Response<Body>> {
    let mut t = TemplateData::new(&state, locale, nonce.map(|Extension(n)| n));
    t.title = t.msg("contact.success_title");

    let tpl = ThanksTemplate { t };

    html_response(StatusCode::OK, tpl.render().context(TemplateSnafu)?)
}

fn render_form(
    mut t: TemplateData,
    form: ContactFormData,
    banner: String,
    status: StatusCode,
) -> Result<Response<Body>> {
    t.title = t.msg("contact.title");

    let tpl = ContactTemplate {
        t,
        error: Some(banner),
        name: form.name,
        email: form.email,
        company: form.company.unwrap_or_default(),
        message: form.message,
    };

    html_response(status, tpl.render().context(TemplateSnafu)?)
}
