pub mod models;
pub mod store;
pub mod validation;

pub use models::{FileDownload, FileUpload, StoredFile, UploadResponse};
pub use store::{unique_filename, FileStore};
pub use validation::{is_zip_name, ValidationError};
