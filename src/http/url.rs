//! Restricted URL parsing for `scheme://host/path?k=v&k=v`.
//!
//! This is not an RFC 3986 parser. Fragments, user-info, ports and percent
//! encoding are not recognised; the functions slice the input string on the
//! separators of the grammar above and nothing more.
//!
//! | URL                                        | scheme  | host                 | path      | query           |
//! |--------------------------------------------|---------|----------------------|-----------|-----------------|
//! | `https://www.google.com/search?q=rust&x=1` | `https` | `www.google.com`     | `/search` | `q=rust`, `x=1` |
//! | `http://www.imperial.ac.uk/`               | `http`  | `www.imperial.ac.uk` | `/`       | *(empty)*       |
//! | `https://ipv6.google.com`                  | `https` | `ipv6.google.com`    | `/`       | *(empty)*       |
//!
//! A host-only URL is normalized to path `/` here, in the parser. Callers
//! (including the dispatcher) use the returned path verbatim.

use std::fmt;

use thiserror::Error;

use super::QueryParams;

const SCHEME_SEPARATOR: &str = "://";

/// Errors produced for URLs outside the supported grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("URL has no scheme separator `://`: {url:?}")]
    MissingSchemeSeparator { url: String },
}

// Everything after the first `://`.
fn authority_and_rest(url: &str) -> Result<&str, ParseError> {
    url.find(SCHEME_SEPARATOR)
        .map(|pos| &url[pos + SCHEME_SEPARATOR.len()..])
        .ok_or_else(|| ParseError::MissingSchemeSeparator {
            url: url.to_owned(),
        })
}

/// Returns the text before the first `:`.
///
/// No validation is performed: when `url` contains no `:` at all the whole
/// string is returned.
///
/// # Examples
///
/// ```
/// use waypost::http::url::scheme;
///
/// assert_eq!(scheme("https://www.google.com/search?q=rust"), "https");
/// ```
pub fn scheme(url: &str) -> &str {
    url.split_once(':').map_or(url, |(scheme, _)| scheme)
}

/// Returns the text after `://` up to (excluding) the next `/`.
///
/// When no `/` follows, the host is the rest of the string.
///
/// # Errors
///
/// [`ParseError::MissingSchemeSeparator`] if `url` has no `://`.
///
/// # Examples
///
/// ```
/// use waypost::http::url::host;
///
/// assert_eq!(host("https://www.google.com/search?q=rust").unwrap(), "www.google.com");
/// assert_eq!(host("https://ipv6.google.com").unwrap(), "ipv6.google.com");
/// ```
pub fn host(url: &str) -> Result<&str, ParseError> {
    let rest = authority_and_rest(url)?;
    Ok(match rest.find('/') {
        Some(end) => &rest[..end],
        None => rest,
    })
}

/// Returns the text after the host up to (excluding) the first `?`.
///
/// A URL with nothing after the host yields `/`.
///
/// # Errors
///
/// [`ParseError::MissingSchemeSeparator`] if `url` has no `://`.
///
/// # Examples
///
/// ```
/// use waypost::http::url::path;
///
/// assert_eq!(path("https://www.imperial.ac.uk/computing?q=abc").unwrap(), "/computing");
/// assert_eq!(path("https://ipv6.google.com").unwrap(), "/");
/// ```
pub fn path(url: &str) -> Result<&str, ParseError> {
    let rest = authority_and_rest(url)?;
    Ok(match rest.find('/') {
        Some(start) => {
            let tail = &rest[start..];
            tail.split_once('?').map_or(tail, |(path, _)| path)
        }
        None => "/",
    })
}

/// Returns the query parameters in order of appearance.
///
/// The result is empty when nothing follows the host or when there is no `?`.
/// Repeated keys are all kept.
///
/// # Errors
///
/// [`ParseError::MissingSchemeSeparator`] if `url` has no `://`.
///
/// # Examples
///
/// ```
/// use waypost::http::url::query_params;
///
/// let params = query_params("http://www.imperial.ac.uk/?a=1&a=2").unwrap();
/// let pairs: Vec<_> = params.iter().collect();
/// assert_eq!(pairs, vec![("a", "1"), ("a", "2")]);
/// ```
pub fn query_params(url: &str) -> Result<QueryParams, ParseError> {
    let rest = authority_and_rest(url)?;
    let Some(start) = rest.find('/') else {
        return Ok(QueryParams::new());
    };

    Ok(match rest[start..].split_once('?') {
        Some((_, query)) => QueryParams::parse(query),
        None => QueryParams::new(),
    })
}

/// The decomposed view of a URL string.
///
/// Built fresh for every request with [`ParsedUrl::parse`]; nothing is cached.
///
/// # Examples
///
/// ```
/// use waypost::http::ParsedUrl;
///
/// let url = ParsedUrl::parse("https://www.google.com/search?q=rust&safe=active").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host(), "www.google.com");
/// assert_eq!(url.path(), "/search");
/// assert_eq!(url.query().get("safe"), Some("active"));
/// assert_eq!(url.to_string(), "https://www.google.com/search?q=rust&safe=active");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    scheme: String,
    host: String,
    path: String,
    query: QueryParams,
}

impl ParsedUrl {
    /// Parses `url` into its parts.
    ///
    /// # Errors
    ///
    /// [`ParseError::MissingSchemeSeparator`] if `url` has no `://`.
    pub fn parse(url: &str) -> Result<Self, ParseError> {
        Ok(Self {
            scheme: scheme(url).to_owned(),
            host: host(url)?.to_owned(),
            path: path(url)?.to_owned(),
            query: query_params(url)?,
        })
    }

    /// Returns the text before the first `:`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the host, without scheme or path.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Always starts with `/`; never contains the query string.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypost::http::ParsedUrl;
    ///
    /// let url = ParsedUrl::parse("https://ipv6.google.com").unwrap();
    /// assert_eq!(url.path(), "/");
    /// ```
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query parameters in order of appearance; empty when the
    /// URL has no `?`.
    pub fn query(&self) -> &QueryParams {
        &self.query
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SCHEME_SEPARATOR}{}{}", self.scheme, self.host, self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        Ok(())
    }
}
