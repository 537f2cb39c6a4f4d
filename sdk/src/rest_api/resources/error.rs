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

/// The failure of a REST resource, carrying the status code and message sent to the client.
///
/// Serializes as `{"statusCode": 404, "error": "Batch not found"}`. The underlying cause, if
/// any, is kept for logging and never serialized.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    status_code: u16,
    #[serde(rename = "error")]
    message: String,
    #[serde(skip_serializing)]
    source: Option<Box<dyn error::Error>>,
}

impl ErrorResponse {
    /// Rejects a request with `status_code` and a message the client may see.
    ///
    /// # Examples
    /// ```
    /// use herbstrace_sdk::rest_api::resources::error::ErrorResponse;
    ///
    /// let response = ErrorResponse::new(400, "Herb name and quantity are required");
    ///
    /// assert_eq!(response.status_code(), 400);
    /// assert_eq!(response.message(), "Herb name and quantity are required");
    /// ```
    pub fn new(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            message: message.to_string(),
            source: None,
        }
    }

    /// Logs `source` and answers 500 with a generic message, so storage and file system details
    /// stay on the server.
    ///
    /// # Examples
    /// ```
    /// use herbstrace_sdk::rest_api::resources::error::ErrorResponse;
    ///
    /// let io_err = std::io::Error::new(std::io::ErrorKind::Other, "uploads is read-only");
    /// let response = ErrorResponse::internal_error(Box::new(io_err));
    ///
    /// assert_eq!(response.status_code(), 500);
    /// assert_eq!(response.message(), "An internal error occurred");
    /// ```
    pub fn internal_error(source: Box<dyn error::Error>) -> Self {
        error!("{}", source);
        Self {
            status_code: 500,
            message: "An internal error occurred".to_string(),
            source: Some(source),
        }
    }

    /// Answers 503, e.g. when every pooled database connection is busy.
    pub fn service_unavailable(source: Box<dyn error::Error>) -> Self {
        warn!("{}", source);
        Self {
            status_code: 503,
            message: "Service Unavailable".to_string(),
            source: Some(source),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl error::Error for ErrorResponse {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.source.as_deref()
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}", source),
            None => write!(f, "{} ({})", self.message, self.status_code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io;

    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields, rename_all = "camelCase")]
    struct Body {
        status_code: u16,
        error: String,
    }

    fn read_only_uploads() -> Box<io::Error> {
        Box::new(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "uploads is read-only",
        ))
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ErrorResponse::new(404, "Batch not found").to_string(),
            "Batch not found (404)"
        );
        assert_eq!(
            ErrorResponse::internal_error(read_only_uploads()).to_string(),
            "uploads is read-only"
        );
    }

    #[test]
    fn test_client_error_body() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&ErrorResponse::new(400, "Image is required"))?;
        let body: Body = serde_json::from_str(&json)?;

        assert_eq!(body.status_code, 400);
        assert_eq!(body.error, "Image is required");

        Ok(())
    }

    /// Only the generic message of a server-side failure reaches the client.
    #[test]
    fn test_internal_error_body() -> Result<(), serde_json::Error> {
        let response = ErrorResponse::internal_error(read_only_uploads());
        let body: Body = serde_json::from_str(&serde_json::to_string(&response)?)?;

        assert_eq!(body.status_code, 500);
        assert_eq!(body.error, "An internal error occurred");
        assert!(error::Error::source(&response).is_some());

        Ok(())
    }

    #[test]
    fn test_service_unavailable() {
        let response = ErrorResponse::service_unavailable(read_only_uploads());

        assert_eq!(response.status_code(), 503);
        assert_eq!(response.message(), "Service Unavailable");
    }
}
