//! Middleware — handler decorators for cross-cutting behavior.
//!
//! A middleware sits in front of a handler. For each request it may:
//!
//! - **Pass through** — call `next.handle(request)` and return the result.
//! - **Short-circuit** — return its own [`Response`] without calling `next`.
//! - **Decorate** — call `next`, then inspect or replace the response.
//!
//! ## Core types
//!
//! - [`Middleware`] — trait implemented by all middleware.
//! - [`Wrapped`] — a middleware bound to the handler it guards. `Wrapped` is
//!   itself a [`Handler`], so it can be registered in a route table or wrapped
//!   again.
//! - [`HandlerExt::with`] — the combinator that builds a `Wrapped`.
//! - [`LoggerMiddleware`] — built-in request/response logger.
//!
//! Wrapping is referentially transparent:
//! `h.with(a).with(b)` behaves exactly like `b` running in front of `a` in
//! front of `h`, on every call.

use std::time::Instant;

use crate::router::Handler;
use crate::{Request, Response};

/// The core trait for all middleware.
///
/// # Contract
///
/// - Implementations **must** be `Send + Sync`, because a wrapped handler may
///   be invoked from several threads at once.
/// - When short-circuiting, an implementation **must not** call `next`; the
///   wrapped handler then has no observable effect for that request.
pub trait Middleware: Send + Sync {
    /// Handle `request`, optionally delegating to `next`.
    fn handle(&self, request: &Request, next: &dyn Handler) -> Response;
}

/// A handler guarded by a middleware.
///
/// Built with [`HandlerExt::with`] or by a middleware-specific constructor
/// such as [`crate::security::require_token`].
#[derive(Debug, Clone)]
pub struct Wrapped<M, H> {
    middleware: M,
    inner: H,
}

impl<M, H> Wrapped<M, H>
where
    M: Middleware,
    H: Handler,
{
    /// Bind `middleware` in front of `inner`.
    pub fn new(middleware: M, inner: H) -> Self {
        Self { middleware, inner }
    }

    /// Returns the wrapped handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<M, H> Handler for Wrapped<M, H>
where
    M: Middleware,
    H: Handler,
{
    fn handle(&self, request: &Request) -> Response {
        self.middleware.handle(request, &self.inner)
    }
}

/// Extension methods available on every sized [`Handler`].
pub trait HandlerExt: Handler + Sized {
    /// Put `middleware` in front of this handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypost::{Request, Response};
    /// use waypost::middleware::{HandlerExt, LoggerMiddleware};
    /// use waypost::router::Handler;
    ///
    /// let hello = (|_: &Request| Response::ok("hello")).with(LoggerMiddleware);
    /// assert_eq!(hello.handle(&Request::new("http://h/")).text(), "hello");
    /// ```
    fn with<M: Middleware>(self, middleware: M) -> Wrapped<M, Self> {
        Wrapped::new(middleware, self)
    }
}

impl<H: Handler> HandlerExt for H {}

/// Built-in middleware that logs each request's path, status, and duration.
///
/// Emits a single `tracing::info!` line after the inner handler returns:
///
/// ```text
/// /path - STATUS (duration)
/// ```
///
/// Never short-circuits and returns the inner response unmodified.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerMiddleware;

impl Middleware for LoggerMiddleware {
    fn handle(&self, request: &Request, next: &dyn Handler) -> Response {
        let start = Instant::now();
        let response = next.handle(request);
        let duration = start.elapsed();

        let path = request.path().unwrap_or(request.url());
        tracing::info!("{} - {} ({:?})", path, response.status().as_u16(), duration);

        response
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::StatusCode;

    // Records its tag into a shared log, then delegates.
    struct Tag {
        name: &'static str,
        log: &'static Mutex<Vec<&'static str>>,
    }

    impl Middleware for Tag {
        fn handle(&self, request: &Request, next: &dyn Handler) -> Response {
            self.log.lock().unwrap().push(self.name);
            next.handle(request)
        }
    }

    struct Deny;

    impl Middleware for Deny {
        fn handle(&self, _request: &Request, _next: &dyn Handler) -> Response {
            Response::new(StatusCode::Forbidden)
        }
    }

    struct Shout;

    impl Middleware for Shout {
        fn handle(&self, request: &Request, next: &dyn Handler) -> Response {
            let response = next.handle(request);
            let status = response.status();
            Response::new(status).body(response.text().to_uppercase())
        }
    }

    fn hello(_: &Request) -> Response {
        Response::ok("hello")
    }

    fn req() -> Request {
        Request::new("http://www.imperial.ac.uk/")
    }

    #[test]
    fn wrapped_handler_is_a_handler() {
        let h = hello.with(LoggerMiddleware);
        assert_eq!(h.handle(&req()), hello(&req()));
    }

    #[test]
    fn short_circuit_returns_middleware_response() {
        let h = hello.with(Deny);
        assert_eq!(h.handle(&req()).status(), StatusCode::Forbidden);
    }

    #[test]
    fn decorator_sees_inner_response() {
        let h = hello.with(Shout);
        assert_eq!(h.handle(&req()).text(), "HELLO");
    }

    #[test]
    fn outermost_middleware_runs_first() {
        static LOG: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

        let h = hello
            .with(Tag { name: "inner", log: &LOG })
            .with(Tag { name: "outer", log: &LOG });

        h.handle(&req());
        assert_eq!(*LOG.lock().unwrap(), vec!["outer", "inner"]);
    }

    #[test]
    fn wrapping_is_repeatable() {
        let h = hello.with(Shout).with(LoggerMiddleware);
        let first = h.handle(&req());
        let second = h.handle(&req());
        assert_eq!(first, second);
        assert_eq!(first.text(), "HELLO");
    }

    #[test]
    fn inner_is_reachable() {
        let h = hello.with(Deny);
        assert_eq!(h.inner().handle(&req()).text(), "hello");
    }
}
