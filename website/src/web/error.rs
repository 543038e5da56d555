use askama::Template;
use axum::{
    Extension,
    body::Body,
    extract::State,
    http::{StatusCode, header},
    response::Response,
};

use crate::{
    error::ErrorInfo,
    models::TemplateData,
    run::AppState,
};
use sala::locale::Locale;
use sala::security::CspNonce;

#[derive(Clone, Template)]
#[template(path = "pages/error.html")]
struct ErrorTemplate {
    t: TemplateData,
    heading: String,
    message: String,
}

/// Top-level fallback for unmatched routes
pub async fn not_found_handler(
    State(state): State<AppState>,
    locale: Option<Extension<Locale>>,
    nonce: Option<Extension<CspNonce>>,
) -> Response<Body> {
    handle_error(
        &state,
        locale.map(|Extension(l)| l).unwrap_or(Locale::DEFAULT),
        nonce.map(|Extension(n)| n),
        ErrorInfo {
            status_code: StatusCode::NOT_FOUND,
            title: String::from("Not Found"),
            message: String::from("The page you are looking for cannot be found."),
        },
    )
}

/// Render a localized error page
///
/// User-facing copy comes from the message catalog keyed on the status
/// class; the internal error message is never shown.
pub fn handle_error(
    state: &AppState,
    locale: Locale,
    nonce: Option<CspNonce>,
    error: ErrorInfo,
) -> Response<Body> {
    let status_code = error.status_code;
    let (heading_key, body_key) = if status_code == StatusCode::NOT_FOUND {
        ("error.not_found_title", "error.not_found_body")
    } else {
        ("error.server_title", "error.server_body")
    };

    let mut t = TemplateData::new(state, locale, nonce);
    let heading = t.msg(heading_key);
    let message = t.msg(body_key);
    t.title = heading.clone();

    let tpl = ErrorTemplate {
        t,
        heading,
        message,
    };

    Response::builder()
        .status(status_code)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Body::from(
            tpl.render().expect("Error template must render"),
        ))
        .expect("Response builder must succeed")
}
