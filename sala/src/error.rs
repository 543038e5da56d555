use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to parse message catalog for {}: {}", locale, source))]
    CatalogParse {
        locale: String,
        source: serde_json::Error,
    },

    #[snafu(display("Failed to parse site catalog: {}", source))]
    SiteCatalogParse { source: serde_json::Error },

    #[snafu(display("Secure random source unavailable: {}", source))]
    NonceSource { source: rand::Error },

    #[snafu(display("Invalid header value: {}", source))]
    HeaderValue {
        source: axum::http::header::InvalidHeaderValue,
    },
}
