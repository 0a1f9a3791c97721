use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs as async_fs;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use uuid::Uuid;

use super::models::{FileDownload, FileUpload, StoredFile};
use super::validation::{is_zip_name, validate_file_name, validate_upload_name};
use crate::error::{AppError, Result};

/// Flat directory of uploaded zip archives.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: Arc<PathBuf>,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn is_available(&self) -> bool {
        async_fs::metadata(self.root.as_path())
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }

    pub async fn store_file(&self, upload: FileUpload) -> Result<StoredFile> {
        validate_upload_name(&upload.original_filename)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        let filename = unique_filename(&upload.original_filename);
        let path = self.root.join(&filename);

        let mut file = async_fs::File::create(&path)
            .await
            .map_err(AppError::StorageWrite)?;
        file.write_all(&upload.data)
            .await
            .map_err(AppError::StorageWrite)?;
        file.sync_all().await.map_err(AppError::StorageWrite)?;

        tracing::info!(
            filename = %filename,
            original = %upload.original_filename,
            size = upload.data.len(),
            "stored uploaded archive"
        );

        Ok(StoredFile {
            filename,
            path,
            size: upload.data.len() as u64,
        })
    }

    /// Names of every `.zip` entry, in directory enumeration order.
    pub async fn list_files(&self) -> Result<Vec<String>> {
        let mut entries = async_fs::read_dir(self.root.as_path())
            .await
            .map_err(AppError::StorageRead)?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(AppError::StorageRead)? {
            match entry.file_name().into_string() {
                Ok(name) if is_zip_name(&name) => names.push(name),
                Ok(_) => {}
                Err(raw) => tracing::debug!("Skipping non UTF-8 entry {:?}", raw),
            }
        }

        Ok(names)
    }

    pub async fn open_file(&self, filename: &str) -> Result<FileDownload> {
        validate_file_name(filename).map_err(|e| AppError::InvalidInput(e.to_string()))?;

        let path = self.root.join(filename);
        let file = match async_fs::File::open(&path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AppError::NotFound("File not found".to_string()));
            }
            Err(e) => return Err(AppError::StorageRead(e)),
        };

        let metadata = file.metadata().await.map_err(AppError::StorageRead)?;
        if !metadata.is_file() {
            return Err(AppError::NotFound("File not found".to_string()));
        }

        Ok(FileDownload {
            filename: filename.to_string(),
            size: metadata.len(),
            file,
        })
    }

    pub async fn read_file(&self, filename: &str) -> Result<Vec<u8>> {
        let mut download = self.open_file(filename).await?;
        let mut data = Vec::with_capacity(download.size as usize);
        download
            .file
            .read_to_end(&mut data)
            .await
            .map_err(AppError::StorageRead)?;
        Ok(data)
    }
}

pub fn unique_filename(original_filename: &str) -> String {
    format!("{}_{}", Uuid::new_v4(), original_filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        (store, temp_dir)
    }

    #[test]
    fn test_unique_filename_shape() {
        let name = unique_filename("a.zip");
        let (prefix, rest) = name.split_once('_').unwrap();
        assert!(Uuid::parse_str(prefix).is_ok());
        assert_eq!(rest, "a.zip");
        assert_ne!(unique_filename("a.zip"), unique_filename("a.zip"));
    }

    #[tokio::test]
    async fn test_store_and_read_file() {
        let (store, _temp_dir) = create_test_store();

        let stored = store
            .store_file(FileUpload::new("bundle.zip", b"PK\x03\x04payload".to_vec()))
            .await
            .unwrap();

        assert!(stored.filename.ends_with("_bundle.zip"));
        assert_eq!(stored.size, 11);
        assert!(stored.path.exists());

        let data = store.read_file(&stored.filename).await.unwrap();
        assert_eq!(data, b"PK\x03\x04payload");
    }

    #[tokio::test]
    async fn test_same_name_twice_does_not_overwrite() {
        let (store, _temp_dir) = create_test_store();

        let first = store.store_file(FileUpload::new("same.zip", b"one".to_vec())).await.unwrap();
        let second = store.store_file(FileUpload::new("same.zip", b"two".to_vec())).await.unwrap();

        assert_ne!(first.filename, second.filename);
        assert_eq!(store.read_file(&first.filename).await.unwrap(), b"one");
        assert_eq!(store.read_file(&second.filename).await.unwrap(), b"two");
    }

    #[tokio::test]
    async fn test_rejects_non_zip_without_writing() {
        let (store, temp_dir) = create_test_store();

        let result = store.store_file(FileUpload::new("report.pdf", b"%PDF".to_vec())).await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_rejects_traversal_upload() {
        let (store, temp_dir) = create_test_store();

        let result = store.store_file(FileUpload::new("../escape.zip", b"x".to_vec())).await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_list_filters_to_zip() {
        let (store, temp_dir) = create_test_store();
        assert!(store.list_files().await.unwrap().is_empty());

        let a = store.store_file(FileUpload::new("a.zip", b"a".to_vec())).await.unwrap();
        let b = store.store_file(FileUpload::new("b.zip", b"b".to_vec())).await.unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), b"ignored").unwrap();

        let mut listed = store.list_files().await.unwrap();
        listed.sort();
        let mut expected = vec![a.filename, b.filename];
        expected.sort();

        assert_eq!(listed, expected);
    }

    #[tokio::test]
    async fn test_list_missing_directory_is_read_failure() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("gone"));

        assert!(matches!(store.list_files().await, Err(AppError::StorageRead(_))));
    }

    #[tokio::test]
    async fn test_open_missing_file() {
        let (store, _temp_dir) = create_test_store();

        let result = store.open_file("nonexistent.zip").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_open_directory_is_not_found() {
        let (store, temp_dir) = create_test_store();
        std::fs::create_dir(temp_dir.path().join("folder.zip")).unwrap();

        let result = store.open_file("folder.zip").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_open_traversal_rejected() {
        let (store, _temp_dir) = create_test_store();

        let result = store.open_file("../Cargo.toml").await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_is_available() {
        let (store, temp_dir) = create_test_store();
        assert!(store.is_available().await);

        let missing = FileStore::new(temp_dir.path().join("missing"));
        assert!(!missing.is_available().await);
    }
}
