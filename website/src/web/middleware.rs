use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::error;

use crate::run::AppState;
use sala::exclude::is_excluded;
use sala::locale::{Resolution, resolve_locale};
use sala::security::compose_headers;

/// Response header echoing the per-request CSP nonce for the render layer
pub const CSP_NONCE_HEADER: &str = "x-csp-nonce";

/// Decides the request locale from the path prefix.
///
/// Excluded paths pass through untouched. Paths without a usable locale
/// segment are redirected to their default-locale equivalent; everything
/// else gets the resolved locale inserted as a request extension so page
/// handlers never re-parse the path.
pub async fn locale_middleware(mut req: Request, next: Next) -> Response {
    match resolve_locale(req.uri().path()) {
        Resolution::Bypass => next.run(req).await,
        Resolution::Locale(locale) => {
            req.extensions_mut().insert(locale);
            next.run(req).await
        }
        Resolution::Redirect { location, .. } => Redirect::temporary(&location).into_response(),
    }
}

/// Attaches the hardening header set to every non-excluded response.
///
/// This layer wraps the locale layer, so locale redirects carry the full
/// set as well. The nonce goes into request extensions before the inner
/// stack runs, letting templates emit matching `nonce` attributes.
pub async fn security_headers_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response<Body> {
    if is_excluded(req.uri().path()) {
        return next.run(req).await;
    }

    let composed = match compose_headers(state.config.security_mode) {
        Ok(composed) => composed,
        Err(err) => {
            // Fail closed: never serve a page with a weak or missing nonce
            error!("Security header composition failed: {}", err);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if let Some(nonce) = &composed.nonce {
        req.extensions_mut().insert(nonce.clone());
    }

    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    for (name, value) in composed.headers {
        headers.insert(name, value);
    }

    if let Some(nonce) = &composed.nonce {
        if let Ok(value) = HeaderValue::from_str(nonce.value()) {
            headers.insert(HeaderName::from_static(CSP_NONCE_HEADER), value);
        }
    }

    response
}
