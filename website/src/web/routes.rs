use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get, get_service, post};
use axum::{Extension, Router, extract::State, middleware};
use std::path::PathBuf;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::error::ErrorInfo;
use crate::run::AppState;
use crate::web::api::api_contact_handler;
use crate::web::blog::{blog_handler, post_page_handler};
use crate::web::cases::{case_page_handler, cases_handler};
use crate::web::contact::{contact_handler, contact_thanks_handler, post_contact_handler};
use crate::web::index::index_handler;
use crate::web::middleware::{locale_middleware, security_headers_middleware};
use crate::web::pricing::pricing_handler;
use crate::web::products::{product_page_handler, products_handler};
use crate::web::{handle_error, not_found_handler};
use sala::locale::Locale;
use sala::security::CspNonce;

pub fn all_routes(state: AppState, frontend_dir: &PathBuf) -> Router {
    Router::new()
        .merge(page_routes(state.clone()))
        .merge(api_routes(state.clone()))
        .merge(assets_routes(frontend_dir))
        .fallback(any(not_found_handler).with_state(state.clone()))
        .layer(middleware::from_fn(locale_middleware))
        .layer(middleware::from_fn_with_state(
            state,
            security_headers_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}

fn page_routes(state: AppState) -> Router {
    Router::new()
        .nest("/{locale}", localized_routes(state.clone()))
        .layer(middleware::map_response_with_state(
            state.clone(),
            response_mapper,
        ))
}

fn localized_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/cases", get(cases_handler))
        .route("/cases/{slug}", get(case_page_handler))
        .route("/blog", get(blog_handler))
        .route("/blog/{slug}", get(post_page_handler))
        .route("/pricing", get(pricing_handler))
        .route("/products", get(products_handler))
        .route("/products/{slug}", get(product_page_handler))
        .route(
            "/contact",
            get(contact_handler).post(post_contact_handler),
        )
        .route("/contact/thanks", get(contact_thanks_handler))
        .with_state(state)
}

fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/contact", post(api_contact_handler))
        .with_state(state)
}

pub fn assets_routes(dir: &PathBuf) -> Router {
    let target_dir = dir.join("public");
    Router::new()
        .route(
            "/manifest.json",
            get_service(ServeFile::new(target_dir.join("manifest.json"))),
        )
        .route(
            "/favicon.ico",
            get_service(ServeFile::new(target_dir.join("favicon.ico"))),
        )
        .route(
            "/robots.txt",
            get_service(ServeFile::new(target_dir.join("robots.txt"))),
        )
        .route(
            "/sitemap.xml",
            get_service(ServeFile::new(target_dir.join("sitemap.xml"))),
        )
        .nest_service(
            "/assets",
            get_service(
                ServeDir::new(target_dir.join("assets"))
                    .not_found_service(file_not_found.into_service()),
            ),
        )
}

async fn file_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "File not found")
}

async fn response_mapper(
    State(state): State<AppState>,
    locale: Option<Extension<Locale>>,
    nonce: Option<Extension<CspNonce>>,
    res: Response,
) -> Response {
    let error = res.extensions().get::<ErrorInfo>();
    if let Some(e) = error {
        if e.status_code.is_server_error() {
            error!("{}", e.message);
        }

        return handle_error(
            &state,
            locale.map(|Extension(l)| l).unwrap_or(Locale::DEFAULT),
            nonce.map(|Extension(n)| n),
            e.clone(),
        );
    }
    res
}
