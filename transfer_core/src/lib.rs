//! Core library for the zip transfer server: storage, handlers and routing.

pub mod config;
pub mod error;
pub mod files;
pub mod handlers;
pub mod middleware;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use files::{FileStore, FileUpload, StoredFile, UploadResponse};
pub use handlers::routes::create_routes;

use axum::{extract::DefaultBodyLimit, Router};
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub file_store: FileStore,
    pub index_page: Arc<PathBuf>,
}

impl AppState {
    pub fn new(upload_dir: impl Into<PathBuf>, index_page: impl Into<PathBuf>) -> Self {
        Self {
            app_name: "Zip Transfer Server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            file_store: FileStore::new(upload_dir),
            index_page: Arc::new(index_page.into()),
        }
    }

    pub fn from_config(config: &AppConfig, upload_dir: &Path) -> Self {
        Self::new(upload_dir, config.storage.index_page.clone())
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, &AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new().merge(create_routes());

    router = router.layer(DefaultBodyLimit::max(config.max_upload_bytes()));

    router = router.layer(middleware::cors::cors_layer());

    router = middleware::logging::with_request_tracing(router);

    router.with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
