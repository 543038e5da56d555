use axum::http::header::{self, HeaderName, HeaderValue};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::RngCore;
use rand::rngs::OsRng;
use snafu::ResultExt;

use crate::Result;
use crate::error::{HeaderValueSnafu, NonceSourceSnafu};

/// Hardening behavior of the header composer.
///
/// `Development` skips nonce generation and emits no hardening headers.
/// It must be opted into explicitly; anything ambiguous maps to `Production`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityMode {
    Development,
    Production,
}

impl SecurityMode {
    pub fn from_env_name(name: &str) -> Self {
        match name {
            "development" | "dev" => SecurityMode::Development,
            _ => SecurityMode::Production,
        }
    }
}

const NONCE_LEN: usize = 16;

/// Per-request CSP nonce, 128 bits from the OS CSPRNG, base64-encoded.
///
/// Generated fresh for every hardened request and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CspNonce(String);

impl CspNonce {
    /// Fails when the OS random source is unavailable. Callers must treat
    /// that as fatal rather than fall back to a predictable value.
    pub fn generate() -> Result<Self> {
        let mut bytes = [0u8; NONCE_LEN];
        OsRng
            .try_fill_bytes(&mut bytes)
            .context(NonceSourceSnafu)?;
        Ok(CspNonce(STANDARD.encode(bytes)))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Header set composed for a single response.
pub struct ComposedHeaders {
    pub nonce: Option<CspNonce>,
    pub headers: Vec<(HeaderName, HeaderValue)>,
}

impl ComposedHeaders {
    fn empty() -> Self {
        ComposedHeaders {
            nonce: None,
            headers: Vec::new(),
        }
    }
}

/// Builds the hardening header set for one response.
///
/// Static values are identical on every call; only the CSP changes, carrying
/// the fresh nonce in its script-src and style-src directives.
pub fn compose_headers(mode: SecurityMode) -> Result<ComposedHeaders> {
    if mode == SecurityMode::Development {
        return Ok(ComposedHeaders::empty());
    }

    let nonce = CspNonce::generate()?;
    let csp = HeaderValue::from_str(&csp_value(&nonce)).context(HeaderValueSnafu)?;

    let headers = vec![
        (header::CONTENT_SECURITY_POLICY, csp),
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
        (
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ),
        (
            HeaderName::from_static("permissions-policy"),
            HeaderValue::from_static(
                "camera=(), microphone=(), geolocation=(), payment=(), usb=()",
            ),
        ),
        (
            HeaderName::from_static("cross-origin-opener-policy"),
            HeaderValue::from_static("same-origin"),
        ),
        (
            HeaderName::from_static("cross-origin-resource-policy"),
            HeaderValue::from_static("same-site"),
        ),
        (
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        ),
    ];

    Ok(ComposedHeaders {
        nonce: Some(nonce),
        headers,
    })
}

/// CSP with the nonce templated in, same-origin defaults and the fixed
/// analytics/tag-manager allow list.
fn csp_value(nonce: &CspNonce) -> String {
    format!(
        "default-src 'self'; \
         script-src 'self' 'nonce-{n}' https://www.googletagmanager.com https://www.google-analytics.com; \
         style-src 'self' 'nonce-{n}'; \
         img-src 'self' data: https://www.google-analytics.com; \
         font-src 'self' data:; \
         connect-src 'self' https://www.google-analytics.com; \
         frame-ancestors 'none'; \
         base-uri 'self'; \
         form-action 'self'",
        n = nonce.value()
    )
}
