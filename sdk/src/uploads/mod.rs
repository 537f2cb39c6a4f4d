// Copyright 2024 HerbsTrace Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Storage of uploaded batch images, certificates and product images.
//!
//! Files are written to a single local directory and referenced by records through a url of the
//! form `/uploads/<file name>`, which the REST API serves statically.

mod error;

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{
    ConstraintViolationError, ConstraintViolationType, InternalError, InvalidArgumentError,
};

pub use error::UploadError;

/// The url prefix under which stored files are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// A file written to the upload directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredFile {
    file_name: String,
    url: String,
}

impl StoredFile {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The url the file is served at, e.g. `/uploads/1717171717171-tulsi.jpg`
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Clone, Debug)]
pub struct UploadDirectory {
    path: PathBuf,
}

impl UploadDirectory {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        UploadDirectory { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the upload directory, and any missing parents, if it does not exist.
    pub fn ensure_exists(&self) -> Result<(), UploadError> {
        fs::create_dir_all(&self.path).map_err(|err| {
            UploadError::InternalError(InternalError::from_source_with_prefix(
                Box::new(err),
                format!("Unable to create upload directory {}", self.path.display()),
            ))
        })
    }

    /// Writes `contents` to a new file named `file_name`.
    ///
    /// An existing file is never overwritten; if `file_name` is already taken a
    /// `ConstraintViolationError` is returned and the existing file is left untouched.
    pub fn save(&self, file_name: &str, contents: &[u8]) -> Result<StoredFile, UploadError> {
        if sanitize_file_name(file_name).as_deref() != Some(file_name) {
            return Err(UploadError::InvalidArgumentError(InvalidArgumentError::new(
                "file_name".to_string(),
                format!("'{}' is not a plain file name", file_name),
            )));
        }

        self.ensure_exists()?;

        let path = self.path.join(file_name);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|err| match err.kind() {
                io::ErrorKind::AlreadyExists => UploadError::ConstraintViolationError(
                    ConstraintViolationError::from_source_with_violation_type(
                        ConstraintViolationType::Unique,
                        Box::new(err),
                    ),
                ),
                _ => UploadError::InternalError(InternalError::from_source_with_prefix(
                    Box::new(err),
                    format!("Unable to create {}", path.display()),
                )),
            })?;

        if let Err(err) = file.write_all(contents).and_then(|_| file.sync_all()) {
            if let Err(remove_err) = fs::remove_file(&path) {
                warn!(
                    "Unable to remove partially written upload {}: {}",
                    path.display(),
                    remove_err
                );
            }
            return Err(UploadError::InternalError(
                InternalError::from_source_with_prefix(
                    Box::new(err),
                    format!("Unable to write {}", path.display()),
                ),
            ));
        }

        debug!("Stored upload {} ({} bytes)", path.display(), contents.len());

        Ok(StoredFile {
            file_name: file_name.to_string(),
            url: format!("{}/{}", UPLOADS_URL_PREFIX, file_name),
        })
    }

    /// Removes a previously stored file.
    pub fn remove(&self, stored: &StoredFile) -> Result<(), UploadError> {
        let path = self.path.join(&stored.file_name);
        fs::remove_file(&path).map_err(|err| {
            UploadError::InternalError(InternalError::from_source_with_prefix(
                Box::new(err),
                format!("Unable to remove {}", path.display()),
            ))
        })
    }

    /// Removes every file in `stored`, logging the files that could not be removed.
    pub fn remove_all(&self, stored: &[StoredFile]) {
        for file in stored {
            if let Err(err) = self.remove(file) {
                warn!("{}", err);
            }
        }
    }
}

/// Reduces a client supplied file name to its final path component.
///
/// Both `/` and `\` are treated as separators. Returns `None` if nothing usable remains.
pub fn sanitize_file_name(name: &str) -> Option<String> {
    let last = name
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or("")
        .trim();

    match last {
        "" | "." | ".." => None,
        _ if last.contains('\0') => None,
        _ => Some(last.to_string()),
    }
}

/// `<batch id>-<name>`
pub fn batch_image_file_name(batch_id: i64, original_name: &str) -> String {
    format!("{}-{}", batch_id, original_name)
}

/// `cert-<batch id>-<index>-<name>`
pub fn batch_certificate_file_name(batch_id: i64, index: usize, original_name: &str) -> String {
    format!("cert-{}-{}-{}", batch_id, index, original_name)
}

/// `cert-<upload time in ms>-<name>`
pub fn certificate_file_name(uploaded_at_ms: i64, original_name: &str) -> String {
    format!("cert-{}-{}", uploaded_at_ms, original_name)
}

/// `product-<batch id>-<upload time in ms>-<index>-<name>`
pub fn product_image_file_name(
    batch_id: i64,
    uploaded_at_ms: i64,
    index: usize,
    original_name: &str,
) -> String {
    format!(
        "product-{}-{}-{}-{}",
        batch_id, uploaded_at_ms, index, original_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("tulsi.jpg").as_deref(), Some("tulsi.jpg"));
        assert_eq!(
            sanitize_file_name("../../etc/passwd").as_deref(),
            Some("passwd")
        );
        assert_eq!(
            sanitize_file_name("C:\\Users\\asha\\leaf.png").as_deref(),
            Some("leaf.png")
        );
        assert_eq!(sanitize_file_name("photos/"), None);
        assert_eq!(sanitize_file_name(".."), None);
        assert_eq!(sanitize_file_name(""), None);
    }

    #[test]
    fn test_file_names() {
        assert_eq!(batch_image_file_name(17, "a.jpg"), "17-a.jpg");
        assert_eq!(batch_certificate_file_name(17, 2, "b.pdf"), "cert-17-2-b.pdf");
        assert_eq!(certificate_file_name(99, "c.pdf"), "cert-99-c.pdf");
        assert_eq!(product_image_file_name(17, 99, 0, "d.png"), "product-17-99-0-d.png");
    }

    /// Saving creates the missing directory and returns the url the file is served at.
    #[test]
    fn test_save_creates_directory() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let uploads = UploadDirectory::new(temp_dir.path().join("uploads"));

        let stored = uploads.save("1-tulsi.jpg", b"leaf")?;

        assert_eq!(stored.url(), "/uploads/1-tulsi.jpg");
        assert_eq!(fs::read(temp_dir.path().join("uploads/1-tulsi.jpg"))?, b"leaf");

        Ok(())
    }

    /// An existing file is never overwritten.
    #[test]
    fn test_save_does_not_overwrite() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let uploads = UploadDirectory::new(temp_dir.path());

        uploads.save("1-tulsi.jpg", b"first")?;
        match uploads.save("1-tulsi.jpg", b"second") {
            Err(UploadError::ConstraintViolationError(err)) => {
                assert_eq!(err.violation_type(), &ConstraintViolationType::Unique)
            }
            other => panic!("expected a constraint violation, got {:?}", other),
        }
        assert_eq!(fs::read(temp_dir.path().join("1-tulsi.jpg"))?, b"first");

        Ok(())
    }

    #[test]
    fn test_save_rejects_paths() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let uploads = UploadDirectory::new(temp_dir.path());

        assert!(matches!(
            uploads.save("../escape.jpg", b"x"),
            Err(UploadError::InvalidArgumentError(_))
        ));

        Ok(())
    }

    #[test]
    fn test_remove_all() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let uploads = UploadDirectory::new(temp_dir.path());

        let stored = vec![
            uploads.save("cert-1-0-a.pdf", b"a")?,
            uploads.save("cert-1-1-b.pdf", b"b")?,
        ];
        uploads.remove_all(&stored);

        assert!(!temp_dir.path().join("cert-1-0-a.pdf").exists());
        assert!(!temp_dir.path().join("cert-1-1-b.pdf").exists());

        Ok(())
    }
}
