use axum::body::Bytes;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const UPLOAD_STATUS: &str = "uploaded successfully";

#[derive(Debug)]
pub struct FileUpload {
    pub original_filename: String,
    pub data: Bytes,
}

impl FileUpload {
    pub fn new(original_filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            original_filename: original_filename.into(),
            data: data.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoredFile {
    pub filename: String,
    pub path: PathBuf,
    pub size: u64,
}

/// An opened archive ready to be streamed back to a client.
#[derive(Debug)]
pub struct FileDownload {
    pub filename: String,
    pub size: u64,
    pub file: tokio::fs::File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
    pub status: String,
}

impl From<StoredFile> for UploadResponse {
    fn from(stored: StoredFile) -> Self {
        Self {
            filename: stored.filename,
            status: UPLOAD_STATUS.to_string(),
        }
    }
}
