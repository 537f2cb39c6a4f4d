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

/// An error returned when an argument passed to a function does not conform to the expected
/// format, such as an unknown user type or an empty upload file name.
#[derive(Debug)]
pub struct InvalidArgumentError {
    argument: String,
    message: String,
}

impl InvalidArgumentError {
    /// Constructs a new `InvalidArgumentError` with a specified argument and message string.
    ///
    /// The message should explain why the argument is invalid and should not repeat the name of
    /// the argument, since the display combines both.
    ///
    /// # Examples
    ///
    /// ```
    /// use herbstrace_sdk::error::InvalidArgumentError;
    ///
    /// let err =
    ///     InvalidArgumentError::new("userType".to_string(), "unknown user type".to_string());
    /// assert_eq!(format!("{}", err), "unknown user type (userType)");
    /// ```
    pub fn new(argument: String, message: String) -> Self {
        Self { argument, message }
    }

    pub fn argument(&self) -> &str {
        &self.argument
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl error::Error for InvalidArgumentError {}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", &self.message, &self.argument)
    }
}
