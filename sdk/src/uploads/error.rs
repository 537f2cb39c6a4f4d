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

use std::error::Error;
use std::fmt;

use crate::error::{ConstraintViolationError, InternalError, InvalidArgumentError};

/// Represents errors raised while storing an uploaded file
#[derive(Debug)]
pub enum UploadError {
    InternalError(InternalError),
    /// Returned when a file with the same name already exists in the upload directory
    ConstraintViolationError(ConstraintViolationError),
    /// Returned when the client supplied file name can not be used
    InvalidArgumentError(InvalidArgumentError),
}

impl Error for UploadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            UploadError::InternalError(err) => Some(err),
            UploadError::ConstraintViolationError(err) => Some(err),
            UploadError::InvalidArgumentError(err) => Some(err),
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UploadError::InternalError(err) => err.fmt(f),
            UploadError::ConstraintViolationError(err) => err.fmt(f),
            UploadError::InvalidArgumentError(err) => err.fmt(f),
        }
    }
}
