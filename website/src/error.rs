use axum::http::{self, StatusCode};
use axum::{
    body::Body,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to render template: {}", source))]
    Template { source: askama::Error },

    #[snafu(display("Response builder error: {}", source))]
    ResponseBuilder { source: http::Error },

    #[snafu(display("{}", msg))]
    Validation { msg: String },

    #[snafu(display("{}", msg))]
    NotFound { msg: String },

    #[snafu(display("{}: {}", msg, source))]
    HttpClient { msg: String, source: reqwest::Error },

    #[snafu(display("{}: {}", msg, source))]
    HttpResponseParse { msg: String, source: reqwest::Error },

    #[snafu(display("{}", msg))]
    Service { msg: String },

    #[snafu(display("{}", source))]
    CatalogLoad { source: sala::Error },
}

/// Allow Error to be converted to StatusCode
impl From<&Error> for StatusCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Service { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Allow errors to be rendered as response
//
// The body stays empty here; the response mapper picks up the ErrorInfo
// extension and renders the localized error page.
impl IntoResponse for Error {
    fn into_response(self) -> Response<Body> {
        let status_code = StatusCode::from(&self);
        let title = status_code
            .canonical_reason()
            .expect("status_code must be valid")
            .to_string();

        let message = format!("{}", self);

        let mut res = Response::builder()
            .status(status_code)
            .body(Body::empty())
            .expect("Response builder must succeed");

        res.extensions_mut().insert(ErrorInfo {
            status_code,
            title,
            message,
        });

        res
    }
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
    pub error: String,
}

#[derive(Clone)]
pub struct ErrorInfo {
    pub status_code: StatusCode,
    pub title: String,
    pub message: String,
}

impl From<&Error> for ErrorInfo {
    fn from(e: &Error) -> Self {
        let status_code = e.into();
        let msg = e.to_string();
        Self {
            status_code,
            title: status_code
                .canonical_reason()
                .expect("status_code must be valid")
                .to_string(),
            message: msg,
        }
    }
}
