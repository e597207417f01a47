//! Request routing — map exact URL paths to handlers.
//!
//! A [`Routes`] table binds path strings to [`Handler`]s. [`configure_routes`]
//! turns the table into a [`Dispatcher`], which is itself a `Handler`: it
//! parses the request path, looks it up, and either calls the bound handler or
//! falls back to a `404 Not Found` response.
//!
//! | Registered path | Request path    | Match? |
//! |-----------------|-----------------|--------|
//! | `/computing`    | `/computing`    | yes    |
//! | `/computing`    | `/computing/`   | no     |
//! | `/computing`    | `/computing/ai` | no     |
//!
//! Matching is exact string equality. Trailing slashes are significant and
//! there is no prefix or pattern matching.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::{Request, Response, StatusCode};

/// The unit of behavior: turns a [`Request`] into a [`Response`].
///
/// Any `Fn(&Request) -> Response + Send + Sync` implements this trait
/// automatically via the blanket impl below, so plain functions and closures
/// can be registered directly. Middleware-wrapped handlers implement it too,
/// which is what lets the route table treat wrapped and unwrapped entries the
/// same way.
///
/// # Contract
///
/// - Implementations **must** be `Send + Sync`; one dispatcher may serve
///   requests from many threads at once.
/// - `handle` takes the request by shared reference and **must not** rely on
///   state from previous calls.
pub trait Handler: Send + Sync {
    /// Produce the response for `request`.
    fn handle(&self, request: &Request) -> Response;
}

impl<F> Handler for F
where
    F: Fn(&Request) -> Response + Send + Sync,
{
    fn handle(&self, request: &Request) -> Response {
        (self)(request)
    }
}

/// Type-erased, reference-counted handler.
///
/// Every entry in a [`Routes`] table is stored as a `BoxHandler`. The [`Arc`]
/// makes cloning a table cheap and keeps the stored handlers shareable across
/// threads.
#[derive(Clone)]
pub struct BoxHandler(Arc<dyn Handler>);

impl BoxHandler {
    /// Erase the concrete type of `handler`.
    pub fn new(handler: impl Handler + 'static) -> Self {
        Self(Arc::new(handler))
    }
}

impl Handler for BoxHandler {
    fn handle(&self, request: &Request) -> Response {
        self.0.handle(request)
    }
}

impl fmt::Debug for BoxHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxHandler")
    }
}

/// Errors raised by route lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no route matched path {path:?}")]
    NotFound { path: String },
}

/// A mapping from exact path strings to handlers.
///
/// Paths are unique; registering the same path twice replaces the earlier
/// handler. Built once during application wiring and read-only afterwards.
///
/// # Examples
///
/// ```
/// use waypost::{Request, Response, router::Routes};
///
/// let routes = Routes::new()
///     .route("/", |_: &Request| Response::ok("home"))
///     .route("/about", |_: &Request| Response::ok("about"));
///
/// assert_eq!(routes.len(), 2);
/// assert!(routes.lookup("/about").is_ok());
/// assert!(routes.lookup("/about/").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Routes {
    table: HashMap<String, BoxHandler>,
}

impl Routes {
    /// Create a new, empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `path`, builder style.
    #[must_use]
    pub fn route(mut self, path: impl Into<String>, handler: impl Handler + 'static) -> Self {
        self.insert(path, handler);
        self
    }

    /// Register `handler` for `path`, returning the handler it replaced, if any.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        handler: impl Handler + 'static,
    ) -> Option<BoxHandler> {
        self.table.insert(path.into(), BoxHandler::new(handler))
    }

    /// Look up the handler bound to exactly `path`.
    ///
    /// # Errors
    ///
    /// [`RouteError::NotFound`] when no handler is registered for `path`.
    pub fn lookup(&self, path: &str) -> Result<&BoxHandler, RouteError> {
        self.table.get(path).ok_or_else(|| RouteError::NotFound {
            path: path.to_owned(),
        })
    }

    /// Returns `true` if a handler is registered for exactly `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.table.contains_key(path)
    }

    /// Return the number of registered paths.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Return `true` if no routes have been registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<P> FromIterator<(P, BoxHandler)> for Routes
where
    P: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, BoxHandler)>>(iter: I) -> Self {
        Self {
            table: iter.into_iter().map(|(p, h)| (p.into(), h)).collect(),
        }
    }
}

/// The default fallback: `404 Not Found` naming the unmatched path.
pub fn not_found(request: &Request) -> Response {
    let path = request.path().unwrap_or(request.url());
    Response::new(StatusCode::NotFound).body(format!("No route found for {path}"))
}

/// A route table plus a fallback, composed into one top-level [`Handler`].
///
/// The dispatcher is total: it always returns a [`Response`].
///
/// - Path bound in the table → the bound handler's response, unchanged.
/// - Path not bound → the fallback's response ([`not_found`] by default).
/// - URL outside the parser grammar → `400 Bad Request`.
///
/// # Examples
///
/// ```
/// use waypost::{Request, Response, StatusCode};
/// use waypost::router::{Handler, Routes, configure_routes};
///
/// let app = configure_routes(Routes::new().route("/", |_: &Request| Response::ok("home")));
///
/// let res = app.handle(&Request::new("http://www.imperial.ac.uk/"));
/// assert_eq!(res.text(), "home");
///
/// let res = app.handle(&Request::new("http://www.imperial.ac.uk/not-here"));
/// assert_eq!(res.status(), StatusCode::NotFound);
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher {
    routes: Routes,
    fallback: BoxHandler,
}

/// Compose `routes` into a [`Dispatcher`] with the default `404` fallback.
pub fn configure_routes(routes: Routes) -> Dispatcher {
    Dispatcher::new(routes)
}

impl Dispatcher {
    /// Create a dispatcher over `routes` with [`not_found`] as the fallback.
    pub fn new(routes: Routes) -> Self {
        Self {
            routes,
            fallback: BoxHandler::new(not_found),
        }
    }

    /// Replace the handler used when no route matches.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Handler + 'static) -> Self {
        self.fallback = BoxHandler::new(fallback);
        self
    }

    /// Returns the route table this dispatcher serves.
    pub fn routes(&self) -> &Routes {
        &self.routes
    }
}

impl Handler for Dispatcher {
    fn handle(&self, request: &Request) -> Response {
        let path = match request.path() {
            Ok(path) => path,
            Err(e) => {
                warn!(url = %request.url(), error = %e, "unroutable URL — sending 400");
                return Response::new(StatusCode::BadRequest).body(format!("Bad Request: {e}"));
            }
        };

        match self.routes.lookup(path) {
            Ok(handler) => {
                debug!(path = %path, "dispatching request");
                handler.handle(request)
            }
            Err(e) => {
                debug!(error = %e, "using fallback handler");
                self.fallback.handle(request)
            }
        }
    }
}
