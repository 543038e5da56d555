use axum::Router;
use axum::extract::FromRef;
use reqwest::{Client, ClientBuilder};
use snafu::ResultExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

use crate::Result;
use crate::config::Config;
use crate::error::CatalogLoadSnafu;
use crate::web::all_routes;
use sala::catalog::SiteCatalog;
use sala::i18n::Catalogs;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Client,
    pub messages: Arc<Catalogs>,
    pub catalog: Arc<SiteCatalog>,
}

impl AppState {
    /// Loads catalogs and builds shared state. Called once before the
    /// server accepts requests.
    pub fn build(config: Config) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("HTTP Client is required");

        let messages = Catalogs::load().context(CatalogLoadSnafu)?;
        let catalog = SiteCatalog::load().context(CatalogLoadSnafu)?;

        Ok(AppState {
            config: Arc::new(config),
            client,
            messages: Arc::new(messages),
            catalog: Arc::new(catalog),
        })
    }
}

pub async fn run(config: Config) -> Result<()> {
    let port = config.server.port;
    let frontend_dir = config.frontend_dir.clone();
    let state = AppState::build(config)?;

    let routes_all: Router = all_routes(state, &frontend_dir);

    // Setup the server
    let ip = "127.0.0.1";
    let addr = format!("{}:{}", ip, port);
    info!("HTTP Server running on {}", addr);

    let listener = TcpListener::bind(addr).await.expect("Failed to bind");
    axum::serve(listener, routes_all.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server must start");

    info!("HTTP Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
