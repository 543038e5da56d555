use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::response::Response;
use snafu::ResultExt;

use crate::Result;
use crate::error::ResponseBuilderSnafu;

pub mod api;
pub mod blog;
pub mod cases;
pub mod contact;
pub mod error;
pub mod index;
pub mod middleware;
pub mod pricing;
pub mod products;
pub mod routes;

pub use error::*;
pub use routes::*;

/// Wraps rendered template output into an HTML response
pub fn html_response(status: StatusCode, body: String) -> Result<Response<Body>> {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Body::from(body))
        .context(ResponseBuilderSnafu)
}
