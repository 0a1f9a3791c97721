use axum::{
    body::Body,
    extract::{Multipart, Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tokio_util::io::ReaderStream;
use tracing::{info, warn};

use crate::{
    error::{AppError, Result},
    files::{FileUpload, UploadResponse},
    AppState,
};

pub const ZIP_MEDIA_TYPE: &str = "application/zip";

pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let mut file_upload: Option<FileUpload> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::InvalidInput(format!("Failed to read multipart field: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();

        if name == "file" {
            let filename = field
                .file_name()
                .ok_or_else(|| AppError::InvalidInput("Missing filename".to_string()))?
                .to_string();

            let data = field.bytes().await.map_err(|e| {
                AppError::InvalidInput(format!("Failed to read file data: {}", e))
            })?;

            file_upload = Some(FileUpload::new(filename, data));
            break;
        }
    }

    let upload = file_upload.ok_or_else(|| {
        AppError::InvalidInput("No file found in request".to_string())
    })?;

    info!("POST /upload - {} ({} bytes)", upload.original_filename, upload.data.len());

    let stored = state.file_store.store_file(upload).await.map_err(|e| {
        if let AppError::InvalidInput(msg) = &e {
            warn!("Rejected upload: {}", msg);
        }
        e
    })?;

    Ok(Json(stored.into()))
}

pub async fn list_files(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let files = state.file_store.list_files().await?;
    info!("GET /list-files - {} archives", files.len());
    Ok(Json(files))
}

pub async fn download_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response> {
    let download = state.file_store.open_file(&filename).await?;

    info!("GET /download/{} - {} bytes", download.filename, download.size);

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(ZIP_MEDIA_TYPE));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(download.size));
    headers.insert(
        header::CONTENT_DISPOSITION,
        attachment_disposition(&download.filename),
    );

    let stream = ReaderStream::new(download.file);

    Ok((StatusCode::OK, headers, Body::from_stream(stream)).into_response())
}

/// Plain `filename="..."` for printable ASCII names, RFC 5987 `filename*`
/// otherwise.
pub fn attachment_disposition(filename: &str) -> HeaderValue {
    let printable = filename.chars().all(|c| c.is_ascii_graphic() || c == ' ');

    let disposition = if printable {
        format!(
            "attachment; filename=\"{}\"",
            filename.replace('\\', "\\\\").replace('"', "\\\"")
        )
    } else {
        format!("attachment; filename*=utf-8''{}", percent_encode(filename))
    };

    HeaderValue::from_str(&disposition).unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

fn percent_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len() * 3);
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'.' | b'-' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
