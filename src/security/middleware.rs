use std::fmt;

use tracing::warn;

use crate::middleware::{Middleware, Wrapped};
use crate::router::Handler;
use crate::{Request, Response, StatusCode};

/// Body of every response produced by a rejected token check.
pub const FORBIDDEN_BODY: &str = "Forbidden: a valid auth token is required.";

/// Token gate — lets a request through only when its auth token equals the
/// expected one.
///
/// # Behavior
///
/// - Token present and equal to the expected token → the inner handler runs
///   and its response is returned unchanged.
/// - Token absent or different → `403 Forbidden` with [`FORBIDDEN_BODY`]. The
///   inner handler is **not** called.
///
/// Comparison is exact, byte for byte. Neither token is ever logged.
///
/// # Examples
///
/// ```
/// use waypost::{Request, Response, StatusCode};
/// use waypost::middleware::HandlerExt;
/// use waypost::router::Handler;
/// use waypost::security::RequireToken;
///
/// let secret = (|_: &Request| Response::ok("secret")).with(RequireToken::new("password1"));
///
/// let denied = secret.handle(&Request::new("http://h/exam-marks"));
/// assert_eq!(denied.status(), StatusCode::Forbidden);
///
/// let allowed = secret.handle(&Request::new("http://h/exam-marks").with_token("password1"));
/// assert_eq!(allowed.text(), "secret");
/// ```
#[derive(Clone)]
pub struct RequireToken {
    expected: String,
}

impl RequireToken {
    /// Creates a gate that accepts only `expected`.
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    // Absent tokens never match.
    fn accepts(&self, request: &Request) -> bool {
        request.auth_token() == Some(self.expected.as_str())
    }
}

impl fmt::Debug for RequireToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequireToken")
            .field("expected", &"<redacted>")
            .finish()
    }
}

impl Middleware for RequireToken {
    fn handle(&self, request: &Request, next: &dyn Handler) -> Response {
        if self.accepts(request) {
            return next.handle(request);
        }

        warn!(
            url = %request.url(),
            token_present = request.auth_token().is_some(),
            "auth token rejected — sending 403"
        );
        Response::new(StatusCode::Forbidden).body(FORBIDDEN_BODY)
    }
}

/// Wrap `inner` so it only runs for requests carrying `expected` as their
/// auth token.
///
/// The result is an ordinary [`Handler`] and can be registered in a route
/// table like any other.
pub fn require_token<H: Handler>(expected: impl Into<String>, inner: H) -> Wrapped<RequireToken, H> {
    Wrapped::new(RequireToken::new(expected), inner)
}
