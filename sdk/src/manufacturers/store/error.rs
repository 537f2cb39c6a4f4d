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

/// Represents ManufacturerStore errors
#[derive(Debug)]
pub enum ManufacturerStoreError {
    InternalError(InternalError),
    ConstraintViolationError(ConstraintViolationError),
    ResourceTemporarilyUnavailableError(ResourceTemporarilyUnavailableError),
    NotFoundError(String),
}

impl Error for ManufacturerStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ManufacturerStoreError::InternalError(err) => Some(err),
            ManufacturerStoreError::ConstraintViolationError(err) => Some(err),
            ManufacturerStoreError::ResourceTemporarilyUnavailableError(err) => Some(err),
            ManufacturerStoreError::NotFoundError(_) => None,
        }
    }
}

impl fmt::Display for ManufacturerStoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ManufacturerStoreError::InternalError(err) => err.fmt(f),
            ManufacturerStoreError::ConstraintViolationError(err) => err.fmt(f),
            ManufacturerStoreError::ResourceTemporarilyUnavailableError(err) => err.fmt(f),
            ManufacturerStoreError::NotFoundError(ref s) => {
                write!(f, "Manufacturer not found: {}", s)
            }
        }
    }
}

#[cfg(any(feature = "postgres", feature = "sqlite"))]
impl From<diesel_error> for ManufacturerStoreError {
    fn from(err: diesel_error) -> ManufacturerStoreError {
        match err {
            diesel_error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                ManufacturerStoreError::ConstraintViolationError(
                    ConstraintViolationError::from_source_with_violation_type(
                        ConstraintViolationType::Unique,
                        Box::new(err),
                    ),
                )
            }
            diesel_error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                ManufacturerStoreError::ConstraintViolationError(
                    ConstraintViolationError::from_source_with_violation_type(
                        ConstraintViolationType::ForeignKey,
                        Box::new(err),
                    ),
                )
            }
            _ => ManufacturerStoreError::InternalError(InternalError::from_source(Box::new(err))),
        }
    }
}

#[cfg(any(feature = "postgres", feature = "sqlite"))]
impl From<PoolError> for ManufacturerStoreError {
    fn from(err: PoolError) -> ManufacturerStoreError {
        ManufacturerStoreError::ResourceTemporarilyUnavailableError(
            ResourceTemporarilyUnavailableError::from_source(Box::new(err)),
        )
    }
}

#[derive(Debug)]
pub enum ManufacturerBuilderError {
    /// Returned when a required field was not set
    MissingRequiredField(String),
}

impl Error for ManufacturerBuilderError {}

impl fmt::Display for ManufacturerBuilderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ManufacturerBuilderError::MissingRequiredField(ref s) => {
                write!(f, "missing required field `{}`", s)
            }
        }
    }
}
