//! Ordered query-parameter multi-map.
//!
//! Query parameters keep the order they appear in the URL and keep every
//! occurrence of a repeated key. Handlers that fold over the sequence (see
//! [`crate::pipeline`]) depend on both properties.

use std::fmt;

/// An order-preserving, multi-value sequence of `(key, value)` pairs.
///
/// # Examples
///
/// ```
/// use waypost::http::QueryParams;
///
/// let params: QueryParams = [("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
///
/// assert_eq!(params.get("a"), Some("1"));
/// let all: Vec<_> = params.get_all("a").collect();
/// assert_eq!(all, vec!["1", "3"]);
/// assert_eq!(params.to_string(), "a=1&b=2&a=3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    inner: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the text after `?` into pairs.
    ///
    /// Tokens are separated by `&` and split on their first `=`. A token with
    /// no `=` yields an empty value. Empty tokens are skipped.
    pub(crate) fn parse(query: &str) -> Self {
        query
            .split('&')
            .filter(|token| !token.is_empty())
            .map(|token| match token.split_once('=') {
                Some((key, value)) => (key, value),
                None => (token, ""),
            })
            .collect()
    }

    /// Appends a pair. Repeated keys are preserved.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.push((key.into(), value.into()));
    }

    /// Returns the first value for `key`, or `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value for `key`, in order of appearance.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.inner
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over all pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of pairs (not unique keys).
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the pairs as a slice.
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.inner
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.inner.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_order_and_duplicates() {
        let params = QueryParams::parse("a=1&b=2&a=3");
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2"), ("a", "3")]);
    }

    #[test]
    fn token_without_equals_has_empty_value() {
        let params = QueryParams::parse("flag");
        assert_eq!(params.get("flag"), Some(""));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn value_keeps_text_after_first_equals() {
        let params = QueryParams::parse("expr=a=b");
        assert_eq!(params.get("expr"), Some("a=b"));
    }

    #[test]
    fn empty_tokens_are_skipped() {
        let params = QueryParams::parse("a=1&&b=2&");
        assert_eq!(params.len(), 2);
        assert!(QueryParams::parse("").is_empty());
    }

    #[test]
    fn get_returns_first_occurrence() {
        let mut params = QueryParams::new();
        params.push("style", "shouting");
        params.push("style", "whispering");
        assert_eq!(params.get("style"), Some("shouting"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn display_rebuilds_query_string() {
        let params = QueryParams::parse("q=kotlin&safe=active");
        assert_eq!(params.to_string(), "q=kotlin&safe=active");
        assert_eq!(QueryParams::new().to_string(), "");
    }
}
