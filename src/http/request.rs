//! The inbound request value.

use super::url::{self, ParseError, ParsedUrl};
use super::QueryParams;

/// A request as handed over by the transport layer: a URL plus an optional
/// auth token.
///
/// Immutable once built. Handlers only ever see `&Request`.
///
/// # Examples
///
/// ```
/// use waypost::http::Request;
///
/// let request = Request::new("http://www.imperial.ac.uk/exam-marks").with_token("password1");
///
/// assert_eq!(request.url(), "http://www.imperial.ac.uk/exam-marks");
/// assert_eq!(request.auth_token(), Some("password1"));
/// assert_eq!(request.path().unwrap(), "/exam-marks");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    url: String,
    auth_token: Option<String>,
}

impl Request {
    /// Creates a request for `url` with no auth token.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth_token: None,
        }
    }

    /// Attaches an auth token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Returns the raw URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the auth token, if one was supplied.
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Returns the path part of the URL (no query string).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the URL is outside the supported grammar.
    pub fn path(&self) -> Result<&str, ParseError> {
        url::path(&self.url)
    }

    /// Returns the query parameters of the URL in order of appearance.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the URL is outside the supported grammar.
    pub fn query_params(&self) -> Result<QueryParams, ParseError> {
        url::query_params(&self.url)
    }

    /// Parses the whole URL. Recomputed on every call.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the URL is outside the supported grammar.
    pub fn parse_url(&self) -> Result<ParsedUrl, ParseError> {
        ParsedUrl::parse(&self.url)
    }
}
