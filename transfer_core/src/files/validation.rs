use std::path::{Component, Path};
use thiserror::Error;

pub const ZIP_EXTENSION: &str = ".zip";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing filename")]
    EmptyFilename,

    #[error("Only .zip files are allowed")]
    NotZip { filename: String },

    #[error("Invalid filename: {filename}")]
    InvalidFilename { filename: String },
}

/// Suffix match only; the check is case-sensitive so `ARCHIVE.ZIP` is not
/// an archive here.
pub fn is_zip_name(filename: &str) -> bool {
    filename.ends_with(ZIP_EXTENSION)
}

/// Accepts names that resolve to exactly one normal component inside the
/// storage directory.
pub fn validate_file_name(filename: &str) -> Result<(), ValidationError> {
    if filename.is_empty() {
        return Err(ValidationError::EmptyFilename);
    }

    if filename.contains('\0') || filename.contains('/') || filename.contains('\\') {
        return Err(ValidationError::InvalidFilename {
            filename: filename.to_string(),
        });
    }

    let mut components = Path::new(filename).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(ValidationError::InvalidFilename {
            filename: filename.to_string(),
        }),
    }
}

pub fn validate_upload_name(filename: &str) -> Result<(), ValidationError> {
    if filename.is_empty() {
        return Err(ValidationError::EmptyFilename);
    }

    if !is_zip_name(filename) {
        return Err(ValidationError::NotZip {
            filename: filename.to_string(),
        });
    }

    validate_file_name(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_suffix() {
        assert!(is_zip_name("a.zip"));
        assert!(is_zip_name("backup.tar.zip"));
        assert!(!is_zip_name("report.pdf"));
        assert!(!is_zip_name("ARCHIVE.ZIP"));
        assert!(!is_zip_name("a.zip.bak"));
    }

    #[test]
    fn test_upload_name_requires_zip() {
        assert_eq!(validate_upload_name("data.zip"), Ok(()));
        assert_eq!(
            validate_upload_name("report.pdf"),
            Err(ValidationError::NotZip {
                filename: "report.pdf".to_string()
            })
        );
        assert_eq!(validate_upload_name(""), Err(ValidationError::EmptyFilename));
    }

    #[test]
    fn test_path_traversal_rejected() {
        for name in ["../evil.zip", "..\\evil.zip", "dir/evil.zip", "/etc/evil.zip", "nul\0.zip"] {
            assert!(
                matches!(
                    validate_upload_name(name),
                    Err(ValidationError::InvalidFilename { .. })
                ),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_dot_names_rejected() {
        assert!(validate_file_name(".").is_err());
        assert!(validate_file_name("..").is_err());
        assert!(validate_file_name("..zip").is_ok());
        assert!(validate_file_name(".zip").is_ok());
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::NotZip {
            filename: "x.txt".to_string(),
        };
        assert_eq!(err.to_string(), "Only .zip files are allowed");
    }
}
