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

struct Source {
    prefix: Option<String>,
    source: Box<dyn error::Error>,
}

/// An error which is returned for reasons internal to the function.
///
/// This error is produced when a failure occurred within the function but the failure is due to
/// an internal implementation detail of the function, such as a database query failing or a file
/// write being refused. The caller can not correct it by changing the arguments.
pub struct InternalError {
    message: Option<String>,
    source: Option<Source>,
}

impl InternalError {
    /// Constructs a new `InternalError` from a specified source error.
    ///
    /// The display of this error passes through the display of the source unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use herbstrace_sdk::error::InternalError;
    ///
    /// let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    /// let internal_error = InternalError::from_source(Box::new(io_err));
    /// assert_eq!(format!("{}", internal_error), "disk full");
    /// ```
    pub fn from_source(source: Box<dyn error::Error>) -> Self {
        Self {
            message: None,
            source: Some(Source {
                prefix: None,
                source,
            }),
        }
    }

    /// Constructs a new `InternalError` from a specified source error, displayed as
    /// `"{prefix}: {source}"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use herbstrace_sdk::error::InternalError;
    ///
    /// let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    /// let internal_error =
    ///     InternalError::from_source_with_prefix(Box::new(io_err), "Unable to save image".into());
    /// assert_eq!(format!("{}", internal_error), "Unable to save image: disk full");
    /// ```
    pub fn from_source_with_prefix(source: Box<dyn error::Error>, prefix: String) -> Self {
        Self {
            message: None,
            source: Some(Source {
                prefix: Some(prefix),
                source,
            }),
        }
    }

    /// Constructs a new `InternalError` with a specified message string.
    pub fn with_message(message: String) -> Self {
        Self {
            message: Some(message),
            source: None,
        }
    }
}

impl error::Error for InternalError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.source.as_ref().map(|s| s.source.as_ref())
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.message, &self.source) {
            (Some(m), _) => write!(f, "{}", m),
            (None, Some(Source {
                prefix: Some(p),
                source,
            })) => write!(f, "{}: {}", p, source),
            (None, Some(Source { prefix: None, source })) => write!(f, "{}", source),
            (None, None) => f.write_str("InternalError"),
        }
    }
}

impl fmt::Debug for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut debug = f.debug_struct("InternalError");
        if let Some(message) = &self.message {
            debug.field("message", message);
        }
        if let Some(source) = &self.source {
            if let Some(prefix) = &source.prefix {
                debug.field("prefix", prefix);
            }
            debug.field("source", &source.source);
        }
        debug.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A message takes precedence over the source when displayed.
    #[test]
    fn test_display_with_message() {
        let err = InternalError::with_message("batch table is missing".to_string());
        assert_eq!(format!("{}", err), "batch table is missing");
        assert!(error::Error::source(&err).is_none());
    }

    /// The prefix and source are joined with a colon and the source stays reachable.
    #[test]
    fn test_display_from_source_with_prefix() {
        let err = InternalError::from_source_with_prefix(
            Box::new(InternalError::with_message("no space left".to_string())),
            "Unable to write certificate".to_string(),
        );
        assert_eq!(
            format!("{}", err),
            "Unable to write certificate: no space left"
        );
        assert!(error::Error::source(&err).is_some());
    }

    #[test]
    fn test_debug_from_source() {
        let err = InternalError::from_source(Box::new(InternalError::with_message(
            "inner".to_string(),
        )));
        assert_eq!(
            format!("{:?}", err),
            "InternalError { source: InternalError { message: \"inner\" } }"
        );
    }
}
