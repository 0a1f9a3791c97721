use axum::{
    routing::{get, post},
    Router,
};

use super::{docs, files, health, pages};
use crate::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::serve_index))
        .route("/list-files", get(files::list_files))
        .route("/upload", post(files::upload_file))
        .route("/download/:filename", get(files::download_file))
        .route("/openapi.json", get(docs::openapi_spec))
        .route("/health", get(health::handle_health))
}
