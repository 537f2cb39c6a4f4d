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

#[cfg(any(feature = "postgres", feature = "sqlite"))]
use diesel::r2d2::PoolError;
#[cfg(any(feature = "postgres", feature = "sqlite"))]
use diesel::result::{DatabaseErrorKind, Error as diesel_error};
use std::error::Error;
use std::fmt;

#[cfg(any(feature = "postgres", feature = "sqlite"))]
use crate::error::ConstraintViolationType;
use crate::error::{
    ConstraintViolationError, InternalError, ResourceTemporarilyUnavailableError,
};

/// Represents UserStore errors
#[derive(Debug)]
pub enum UserStoreError {
    InternalError(InternalError),
    ConstraintViolationError(ConstraintViolationError),
    ResourceTemporarilyUnavailableError(ResourceTemporarilyUnavailableError),
    NotFoundError(String),
}

impl Error for UserStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            UserStoreError::InternalError(err) => Some(err),
            UserStoreError::ConstraintViolationError(err) => Some(err),
            UserStoreError::ResourceTemporarilyUnavailableError(err) => Some(err),
            UserStoreError::NotFoundError(_) => None,
        }
    }
}

impl fmt::Display for UserStoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UserStoreError::InternalError(err) => err.fmt(f),
            UserStoreError::ConstraintViolationError(err) => err.fmt(f),
            UserStoreError::ResourceTemporarilyUnavailableError(err) => err.fmt(f),
            UserStoreError::NotFoundError(ref s) => write!(f, "User not found: {}", s),
        }
    }
}

#[cfg(any(feature = "postgres", feature = "sqlite"))]
impl From<diesel_error> for UserStoreError {
    fn from(err: diesel_error) -> UserStoreError {
        match err {
            diesel_error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                UserStoreError::ConstraintViolationError(
                    ConstraintViolationError::from_source_with_violation_type(
                        ConstraintViolationType::Unique,
                        Box::new(err),
                    ),
                )
            }
            diesel_error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                UserStoreError::ConstraintViolationError(
                    ConstraintViolationError::from_source_with_violation_type(
                        ConstraintViolationType::ForeignKey,
                        Box::new(err),
                    ),
                )
            }
            _ => UserStoreError::InternalError(InternalError::from_source(Box::new(err))),
        }
    }
}

#[cfg(any(feature = "postgres", feature = "sqlite"))]
impl From<PoolError> for UserStoreError {
    fn from(err: PoolError) -> UserStoreError {
        UserStoreError::ResourceTemporarilyUnavailableError(
            ResourceTemporarilyUnavailableError::from_source(Box::new(err)),
        )
    }
}

#[derive(Debug)]
pub enum UserBuilderError {
    /// Returned when a required field was not set
    MissingRequiredField(String),
}

impl Error for UserBuilderError {}

impl fmt::Display for UserBuilderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            UserBuilderError::MissingRequiredField(ref s) => {
                write!(f, "missing required field `{}`", s)
            }
        }
    }
}
