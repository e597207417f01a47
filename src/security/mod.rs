//! Security middleware — access control for protected handlers.
//!
//! Currently implemented:
//!
//! - [`RequireToken`] / [`require_token`] — exact-match token gate that
//!   short-circuits with `403 Forbidden`.

mod middleware;

pub use middleware::{FORBIDDEN_BODY, RequireToken, require_token};
