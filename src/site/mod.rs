//! Example site — leaf handlers and the route table that wires them up.
//!
//! | Path          | Handler                    | Guard                   |
//! |---------------|----------------------------|-------------------------|
//! | `/`           | [`home_page_handler`]      | —                       |
//! | `/computing`  | [`computing_page_handler`] | —                       |
//! | `/say-hello`  | [`HelloHandler`]           | —                       |
//! | `/exam-marks` | [`exam_marks_handler`]     | [`require_token`]       |
//!
//! [`mapping`] builds the table from a [`SiteConfig`]; [`app`] composes it into
//! a logged dispatcher.

pub mod config;

pub use config::{ConfigError, SiteConfig};

use std::sync::LazyLock;

use crate::http::ParseError;
use crate::middleware::{HandlerExt, LoggerMiddleware, Wrapped};
use crate::pipeline::ParamPipeline;
use crate::router::{Dispatcher, Handler, Routes, configure_routes};
use crate::security::require_token;
use crate::{Request, Response, StatusCode};

/// Route table and greeter for the default [`SiteConfig`], built on first use.
static SITE: LazyLock<Dispatcher> =
    LazyLock::new(|| configure_routes(mapping(&SiteConfig::default())));
static DEFAULT_HELLO: LazyLock<HelloHandler> = LazyLock::new(HelloHandler::default);

/// The landing page.
///
/// # Examples
///
/// ```
/// use waypost::Request;
/// use waypost::site::home_page_handler;
///
/// let res = home_page_handler(&Request::new("http://www.imperial.ac.uk/"));
/// assert_eq!(res.text(), "This is Imperial.");
/// ```
pub fn home_page_handler(_request: &Request) -> Response {
    Response::ok("This is Imperial.")
}

/// The department page.
pub fn computing_page_handler(_request: &Request) -> Response {
    Response::ok("This is DoC.")
}

/// The protected page. [`mapping`] puts it behind [`require_token`]; called
/// directly it performs no check of its own.
pub fn exam_marks_handler(_request: &Request) -> Response {
    Response::ok("This is very secret.")
}

/// Greets according to the `name` and `style` query parameters.
///
/// See [`ParamPipeline::greeting`] for how the parameters combine.
#[derive(Debug)]
pub struct HelloHandler {
    pipeline: ParamPipeline,
}

impl HelloHandler {
    /// Creates a greeter whose body is `default_greeting` until a query
    /// parameter changes it.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypost::Request;
    /// use waypost::router::Handler;
    /// use waypost::site::HelloHandler;
    ///
    /// let hello = HelloHandler::new("Howdy!");
    /// assert_eq!(hello.handle(&Request::new("http://h/say-hello")).text(), "Howdy!");
    /// ```
    pub fn new(default_greeting: impl Into<String>) -> Self {
        Self {
            pipeline: ParamPipeline::greeting(default_greeting),
        }
    }
}

impl Default for HelloHandler {
    fn default() -> Self {
        Self::new(SiteConfig::default().default_greeting)
    }
}

impl Handler for HelloHandler {
    fn handle(&self, request: &Request) -> Response {
        match request.query_params() {
            Ok(params) => Response::ok(self.pipeline.fold(&params)),
            Err(e) => bad_request(&e),
        }
    }
}

/// [`HelloHandler`] with the default greeting.
pub fn hello_handler(request: &Request) -> Response {
    DEFAULT_HELLO.handle(request)
}

fn bad_request(error: &ParseError) -> Response {
    Response::new(StatusCode::BadRequest).body(format!("Bad Request: {error}"))
}

/// The site's route table.
pub fn mapping(config: &SiteConfig) -> Routes {
    Routes::new()
        .route("/", home_page_handler)
        .route("/computing", computing_page_handler)
        .route("/say-hello", HelloHandler::new(config.default_greeting.clone()))
        .route(
            "/exam-marks",
            require_token(config.secret_token.clone(), exam_marks_handler),
        )
}

/// The site as a single handler: the dispatcher over [`mapping`], with
/// request logging.
pub fn app(config: &SiteConfig) -> Wrapped<LoggerMiddleware, Dispatcher> {
    configure_routes(mapping(config)).with(LoggerMiddleware)
}

/// Route `request` through the default site configuration.
pub fn route(request: &Request) -> Response {
    SITE.handle(request)
}
