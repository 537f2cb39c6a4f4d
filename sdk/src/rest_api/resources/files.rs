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

//! Writing the files of a multipart form to the upload directory.

use crate::uploads::{sanitize_file_name, StoredFile, UploadDirectory, UploadError};

use super::error::ErrorResponse;
use super::form::UploadedFile;

/// Returns the client supplied name of an uploaded file, reduced to its final path component.
pub(in crate::rest_api) fn original_file_name(
    file: &UploadedFile,
) -> Result<String, ErrorResponse> {
    file.file_name
        .as_deref()
        .and_then(sanitize_file_name)
        .ok_or_else(|| {
            ErrorResponse::new(
                400,
                &format!("A file name is required for field '{}'", file.field_name),
            )
        })
}

/// Saves each `(file name, contents)` pair in order.
///
/// If any file can not be saved, the files already written by this call are removed again so a
/// failed request leaves nothing behind.
pub(in crate::rest_api) fn save_files(
    uploads: &UploadDirectory,
    files: &[(String, &[u8])],
) -> Result<Vec<StoredFile>, ErrorResponse> {
    let mut stored = Vec::with_capacity(files.len());
    for (file_name, contents) in files {
        match uploads.save(file_name, contents) {
            Ok(file) => stored.push(file),
            Err(err) => {
                uploads.remove_all(&stored);
                return Err(upload_error_response(err));
            }
        }
    }
    Ok(stored)
}

pub(in crate::rest_api) fn upload_error_response(err: UploadError) -> ErrorResponse {
    match err {
        UploadError::InternalError(err) => ErrorResponse::internal_error(Box::new(err)),
        UploadError::ConstraintViolationError(_) => {
            ErrorResponse::new(409, "A file with the same name has already been uploaded")
        }
        UploadError::InvalidArgumentError(err) => ErrorResponse::new(400, err.message()),
    }
}
