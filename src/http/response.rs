//! The outbound response value.

use super::StatusCode;

/// A status plus a text body, returned by every handler.
///
/// # Examples
///
/// ```
/// use waypost::http::{Response, StatusCode};
///
/// let response = Response::new(StatusCode::Ok).body("This is Imperial.");
///
/// assert_eq!(response.status(), StatusCode::Ok);
/// assert_eq!(response.text(), "This is Imperial.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    body: String,
}

impl Response {
    /// Creates a new response with the given status and an empty body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    /// Shorthand for a `200 OK` response carrying `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::Ok).body(body)
    }

    /// Sets the response body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the status code of this response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the body text.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Consumes the response, returning the body.
    pub fn into_body(self) -> String {
        self.body
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new(StatusCode::Ok)
    }
}
