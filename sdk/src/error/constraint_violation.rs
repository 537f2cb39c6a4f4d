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

use std::error;
use std::fmt;

/// The type of constraint that was violated.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintViolationType {
    Unique,
    ForeignKey,
    NotFound,
    Other(String),
}

impl fmt::Display for ConstraintViolationType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConstraintViolationType::Unique => f.write_str("Unique"),
            ConstraintViolationType::ForeignKey => f.write_str("Foreign Key"),
            ConstraintViolationType::NotFound => f.write_str("Not Found"),
            ConstraintViolationType::Other(ref msg) => f.write_str(msg),
        }
    }
}

/// An error which is returned because of a storage constraint violation.
///
/// Emails, manufacturer license numbers, batch identifiers and the product of a batch are all
/// unique; inserting a second record with the same value produces this error with
/// `ConstraintViolationType::Unique`.
#[derive(Debug)]
pub struct ConstraintViolationError {
    violation_type: ConstraintViolationType,
    source: Option<Box<dyn error::Error>>,
}

impl ConstraintViolationError {
    /// Constructs a new `ConstraintViolationError` from a specified violation type.
    ///
    /// # Examples
    ///
    /// ```
    /// use herbstrace_sdk::error::{ConstraintViolationError, ConstraintViolationType};
    ///
    /// let err = ConstraintViolationError::with_violation_type(ConstraintViolationType::Unique);
    /// assert_eq!(format!("{}", err), "Unique constraint violated");
    /// ```
    pub fn with_violation_type(violation_type: ConstraintViolationType) -> Self {
        Self {
            violation_type,
            source: None,
        }
    }

    /// Constructs a new `ConstraintViolationError` from a specified source error and violation
    /// type. The display of this error is the display of the source.
    pub fn from_source_with_violation_type(
        violation_type: ConstraintViolationType,
        source: Box<dyn error::Error>,
    ) -> Self {
        Self {
            violation_type,
            source: Some(source),
        }
    }

    /// Returns the type of constraint that was violated.
    pub fn violation_type(&self) -> &ConstraintViolationType {
        &self.violation_type
    }
}

impl error::Error for ConstraintViolationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.source.as_deref()
    }
}

impl fmt::Display for ConstraintViolationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "{} constraint violated", self.violation_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::InternalError;

    #[test]
    fn test_display_with_violation_type() {
        let err = ConstraintViolationError::with_violation_type(
            ConstraintViolationType::ForeignKey,
        );
        assert_eq!(format!("{}", err), "Foreign Key constraint violated");
        assert_eq!(err.violation_type(), &ConstraintViolationType::ForeignKey);
    }

    #[test]
    fn test_display_from_source_with_violation_type() {
        let err = ConstraintViolationError::from_source_with_violation_type(
            ConstraintViolationType::Unique,
            Box::new(InternalError::with_message(
                "UNIQUE constraint failed: herbstrace_user.email".to_string(),
            )),
        );
        assert_eq!(
            format!("{}", err),
            "UNIQUE constraint failed: herbstrace_user.email"
        );
    }
}
