//! Application error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage write failure: {0}")]
    StorageWrite(#[source] std::io::Error),

    #[error("Storage read failure: {0}")]
    StorageRead(#[source] std::io::Error),

    #[error("Asset missing: {0}")]
    AssetMissing(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::NotFound(_) => "not_found",
            AppError::StorageWrite(_) => "storage_write_failure",
            AppError::StorageRead(_) => "storage_read_failure",
            AppError::AssetMissing(_) => "asset_missing",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StorageWrite(_) | AppError::StorageRead(_) | AppError::AssetMissing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let error_message = match self {
            AppError::InvalidInput(msg) => msg,
            AppError::NotFound(msg) => msg,
            AppError::StorageWrite(err) => {
                tracing::error!("Storage write error: {:?}", err);
                "Failed to store file".to_string()
            }
            AppError::StorageRead(err) => {
                tracing::error!("Storage read error: {:?}", err);
                "Failed to read storage".to_string()
            }
            AppError::AssetMissing(msg) => {
                tracing::error!("Asset missing: {}", msg);
                "Landing page unavailable".to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
            "code": code,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::InvalidInput("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("gone".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::StorageWrite(io::Error::new(io::ErrorKind::Other, "disk full")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::StorageRead(io::Error::from(io::ErrorKind::PermissionDenied)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::AssetMissing("index.html".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_payload_shape() {
        let response = AppError::InvalidInput("Only .zip files are allowed".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Only .zip files are allowed");
        assert_eq!(body["code"], "invalid_input");
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_server_errors_hide_details() {
        let err = io::Error::new(io::ErrorKind::Other, "/secret/path is read-only");
        let response = AppError::StorageWrite(err).into_response();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Failed to store file");
        assert_eq!(body["code"], "storage_write_failure");
    }
}
