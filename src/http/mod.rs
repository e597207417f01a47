//! Request/response primitives and URL parsing.
//!
//! This module provides the values that flow through the routing core:
//! [`Request`], [`Response`], [`StatusCode`], plus the restricted URL parser
//! ([`url`]) and the ordered query multi-map ([`QueryParams`]).

use std::fmt;

pub mod query;
pub mod request;
pub mod response;
pub mod url;

pub use query::QueryParams;
pub use request::Request;
pub use response::Response;
pub use url::{ParseError, ParsedUrl};

/// A response status code.
///
/// Every handler picks from this one shared enumeration, so the dispatcher and
/// tests can compare statuses by value.
///
/// # Examples
///
/// ```
/// use waypost::http::StatusCode;
///
/// let status = StatusCode::Forbidden;
/// assert_eq!(status.as_u16(), 403);
/// assert_eq!(status.canonical_reason(), "Forbidden");
/// assert!(status.is_client_error());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum StatusCode {
    // 2xx Success
    Ok = 200,

    // 4xx Client Error
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,

    // 5xx Server Error
    InternalServerError = 500,
}

impl StatusCode {
    /// Returns the numeric status code as a `u16`.
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Returns the canonical reason phrase for this status code.
    pub fn canonical_reason(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::InternalServerError => "Internal Server Error",
        }
    }

    /// Returns `true` for 2xx codes.
    pub fn is_success(self) -> bool {
        (200..300).contains(&self.as_u16())
    }

    /// Returns `true` for 4xx codes.
    pub fn is_client_error(self) -> bool {
        (400..500).contains(&self.as_u16())
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.canonical_reason())
    }
}

impl From<StatusCode> for u16 {
    fn from(code: StatusCode) -> u16 {
        code.as_u16()
    }
}
