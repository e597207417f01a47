//! Param pipeline — fold query parameters into a response body.
//!
//! A [`ParamPipeline`] starts from a default body and walks the query
//! parameters in the order they appear in the URL. Each pair whose key has a
//! registered transformer replaces the running body with
//! `transformer(body, value)`. Keys without a transformer are skipped.
//!
//! Because the fold is ordered, repeated keys compose left to right:
//!
//! | Query                                       | Body            |
//! |---------------------------------------------|-----------------|
//! | *(none)*                                    | `Hello, World!` |
//! | `name=Fred`                                 | `Hello, Fred!`  |
//! | `name=Fred&style=shouting`                  | `HELLO, FRED!`  |
//! | `name=Fred&style=shouting&style=whispering` | `hello, fred!`  |
//! | `style=shouting&name=Fred`                  | `Hello, Fred!`  |

use std::collections::HashMap;
use std::fmt;

use crate::http::QueryParams;

/// A body transformer: `(current_body, param_value) -> new_body`.
pub type Transformer = Box<dyn Fn(&str, &str) -> String + Send + Sync>;

/// Ordered fold over query parameters.
///
/// # Examples
///
/// ```
/// use waypost::http::QueryParams;
/// use waypost::pipeline::ParamPipeline;
///
/// let pipeline = ParamPipeline::new("")
///     .transformer("append", |body: &str, value: &str| format!("{body}{value}"));
///
/// let params: QueryParams = [("append", "a"), ("skip", "x"), ("append", "b")].into_iter().collect();
/// assert_eq!(pipeline.fold(&params), "ab");
/// ```
pub struct ParamPipeline {
    default_body: String,
    transformers: HashMap<String, Transformer>,
}

impl ParamPipeline {
    /// Create a pipeline with no transformers.
    pub fn new(default_body: impl Into<String>) -> Self {
        Self {
            default_body: default_body.into(),
            transformers: HashMap::new(),
        }
    }

    /// The greeting pipeline: `name` and `style` transformers over
    /// `default_body`.
    pub fn greeting(default_body: impl Into<String>) -> Self {
        Self::new(default_body)
            .transformer("name", greet)
            .transformer("style", apply_style)
    }

    /// Register `transformer` for `key`, replacing any earlier one.
    #[must_use]
    pub fn transformer(
        mut self,
        key: impl Into<String>,
        transformer: impl Fn(&str, &str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.transformers.insert(key.into(), Box::new(transformer));
        self
    }

    /// Returns the body used when no transformer applies.
    pub fn default_body(&self) -> &str {
        &self.default_body
    }

    /// Fold `params` into a body, in order of appearance.
    pub fn fold(&self, params: &QueryParams) -> String {
        params
            .iter()
            .fold(self.default_body.clone(), |body, (key, value)| {
                match self.transformers.get(key) {
                    Some(transform) => transform(body.as_str(), value),
                    None => body,
                }
            })
    }
}

impl fmt::Debug for ParamPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.transformers.keys().collect();
        keys.sort();
        f.debug_struct("ParamPipeline")
            .field("default_body", &self.default_body)
            .field("transformers", &keys)
            .finish()
    }
}

/// `name` transformer: discards the current body and greets `name` verbatim.
pub fn greet(_body: &str, name: &str) -> String {
    format!("Hello, {name}!")
}

/// `style` transformer.
///
/// `shouting` uppercases the body and `whispering` lowercases it. Any other
/// value leaves the body unchanged.
pub fn apply_style(body: &str, style: &str) -> String {
    match style {
        "shouting" => body.to_uppercase(),
        "whispering" => body.to_lowercase(),
        _ => body.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> QueryParams {
        pairs.iter().copied().collect()
    }

    #[test]
    fn no_params_yields_default_body() {
        let p = ParamPipeline::greeting("Hello, World!");
        assert_eq!(p.fold(&QueryParams::new()), "Hello, World!");
    }

    #[test]
    fn name_replaces_subject_verbatim() {
        let p = ParamPipeline::greeting("Hello, World!");
        assert_eq!(p.fold(&query(&[("name", "Fred")])), "Hello, Fred!");
        assert_eq!(p.fold(&query(&[("name", "mcLAREN")])), "Hello, mcLAREN!");
    }

    #[test]
    fn styles_apply_after_name() {
        let p = ParamPipeline::greeting("Hello, World!");
        assert_eq!(
            p.fold(&query(&[("name", "Fred"), ("style", "shouting")])),
            "HELLO, FRED!"
        );
        assert_eq!(
            p.fold(&query(&[("name", "Carol"), ("style", "whispering")])),
            "hello, carol!"
        );
    }

    #[test]
    fn repeated_style_applies_in_order() {
        let p = ParamPipeline::greeting("Hello, World!");
        assert_eq!(
            p.fold(&query(&[("style", "shouting"), ("style", "whispering")])),
            "hello, world!"
        );
        assert_eq!(
            p.fold(&query(&[("style", "whispering"), ("style", "shouting")])),
            "HELLO, WORLD!"
        );
    }

    #[test]
    fn name_after_style_resets_case() {
        let p = ParamPipeline::greeting("Hello, World!");
        assert_eq!(
            p.fold(&query(&[("style", "shouting"), ("name", "Fred")])),
            "Hello, Fred!"
        );
    }

    /// An unrecognised style is a no-op. The alternative policy, answering
    /// with an "Invalid Response" body, is deliberately not implemented: a
    /// typo in one parameter should not discard the rest of the greeting.
    #[test]
    fn unrecognised_style_leaves_body_unchanged() {
        let p = ParamPipeline::greeting("Hello, World!");
        let body = p.fold(&query(&[("name", "Fred"), ("style", "singing")]));
        assert_eq!(body, "Hello, Fred!");
        assert_ne!(body, "Invalid Response");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let p = ParamPipeline::greeting("Hello, World!");
        assert_eq!(
            p.fold(&query(&[("lang", "fr"), ("name", "Ryan"), ("x", "")])),
            "Hello, Ryan!"
        );
    }

    #[test]
    fn later_registration_replaces_transformer() {
        let p = ParamPipeline::new("x")
            .transformer("k", |_: &str, _: &str| "first".to_owned())
            .transformer("k", |_: &str, _: &str| "second".to_owned());
        assert_eq!(p.fold(&query(&[("k", "")])), "second");
    }

    #[test]
    fn debug_lists_transformer_keys() {
        let p = ParamPipeline::greeting("hi");
        assert_eq!(
            format!("{p:?}"),
            r#"ParamPipeline { default_body: "hi", transformers: ["name", "style"] }"#
        );
    }
}
