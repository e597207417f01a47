//! # waypost
//!
//! A minimal, synchronous request-routing core: restricted URL parsing,
//! exact-path dispatch, and composable handler middleware.
//!
//! The transport layer is not part of this crate. Something else accepts
//! connections and turns them into [`Request`] values; waypost turns each
//! request into a [`Response`].
//!
//! ## Quick Start
//!
//! ```rust
//! use waypost::{Request, Response, StatusCode};
//! use waypost::router::{Handler, Routes, configure_routes};
//! use waypost::security::require_token;
//!
//! fn home(_: &Request) -> Response {
//!     Response::ok("This is Imperial.")
//! }
//!
//! fn marks(_: &Request) -> Response {
//!     Response::ok("This is very secret.")
//! }
//!
//! let app = configure_routes(
//!     Routes::new()
//!         .route("/", home)
//!         .route("/exam-marks", require_token("password1", marks)),
//! );
//!
//! let res = app.handle(&Request::new("http://www.imperial.ac.uk/"));
//! assert_eq!(res.text(), "This is Imperial.");
//!
//! let res = app.handle(&Request::new("http://www.imperial.ac.uk/exam-marks"));
//! assert_eq!(res.status(), StatusCode::Forbidden);
//!
//! let res = app.handle(&Request::new("http://www.imperial.ac.uk/not-here"));
//! assert_eq!(res.status(), StatusCode::NotFound);
//! ```

pub mod http;
pub mod middleware;
pub mod pipeline;
pub mod router;
pub mod security;
pub mod site;

// ── Convenience re-exports ────────────────────────────────────────────────────
pub use http::{ParseError, ParsedUrl, QueryParams, Request, Response, StatusCode};
pub use router::{Dispatcher, Handler, Routes, configure_routes};
