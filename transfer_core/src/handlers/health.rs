use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::warn;

use crate::AppState;

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    let storage_available = state.file_store.is_available().await;

    let status_code = if storage_available {
        StatusCode::OK
    } else {
        warn!(
            "Storage directory {} is unavailable",
            state.file_store.root().display()
        );
        StatusCode::SERVICE_UNAVAILABLE
    };

    let status = if storage_available { "healthy" } else { "unhealthy" };

    let body = serde_json::json!({
        "status": status,
        "timestamp": chrono::Utc::now().timestamp(),
        "app": state.app_name,
        "version": state.version,
        "storage_dir": state.file_store.root().display().to_string(),
        "storage_available": storage_available,
    });

    (status_code, Json(body))
}
