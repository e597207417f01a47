//! Site configuration, loaded from JSON.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a [`SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize site configuration: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("`secret_token` must not be empty")]
    EmptyToken,
}

/// Settings for the example site.
///
/// Missing fields fall back to [`SiteConfig::default`].
///
/// # Examples
///
/// ```
/// use waypost::site::SiteConfig;
///
/// let config = SiteConfig::from_json(r#"{ "secret_token": "hunter2" }"#).unwrap();
/// assert_eq!(config.secret_token, "hunter2");
/// assert_eq!(config.default_greeting, "Hello, World!");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Token required by protected pages.
    pub secret_token: String,
    /// Body of `/say-hello` when no query parameter changes it.
    pub default_greeting: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            secret_token: "password1".to_owned(),
            default_greeting: "Hello, World!".to_owned(),
        }
    }
}

impl fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteConfig")
            .field("secret_token", &"<redacted>")
            .field("default_greeting", &self.default_greeting)
            .finish()
    }
}

impl SiteConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Parse`] — the document is not valid JSON for this shape.
    /// - [`ConfigError::EmptyToken`] — `secret_token` is the empty string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make a protected page unreachable or open.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyToken`] when `secret_token` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret_token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(())
    }

    /// Serialize to pretty JSON.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn overrides_fields() {
        let config =
            SiteConfig::from_json(r#"{ "secret_token": "s3cret", "default_greeting": "Hi!" }"#)
                .unwrap();
        assert_eq!(config.secret_token, "s3cret");
        assert_eq!(config.default_greeting, "Hi!");
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            SiteConfig::from_json("{ secret_token: "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn wrong_type_is_parse_error() {
        assert!(matches!(
            SiteConfig::from_json(r#"{ "secret_token": 7 }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn empty_token_is_rejected() {
        assert!(matches!(
            SiteConfig::from_json(r#"{ "secret_token": "" }"#),
            Err(ConfigError::EmptyToken)
        ));
    }

    #[test]
    fn serialize_error_is_not_reported_as_parse() {
        let inner = serde_json::from_str::<SiteConfig>("[").unwrap_err();
        let err = ConfigError::Serialize(inner);
        assert!(err.to_string().starts_with("failed to serialize site configuration: "));
        assert!(!matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn parse_error_message_names_configuration() {
        let err = SiteConfig::from_json("nope").unwrap_err();
        assert!(err.to_string().starts_with("invalid site configuration: "));
    }

    #[test]
    fn debug_output_hides_token() {
        let config = SiteConfig {
            secret_token: "hunter2".to_owned(),
            default_greeting: "Hi!".to_owned(),
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("Hi!"));
    }

    #[test]
    fn json_round_trip() {
        let config = SiteConfig {
            secret_token: "abc".to_owned(),
            default_greeting: "Yo!".to_owned(),
        };
        let json = config.to_json().unwrap();
        assert_eq!(SiteConfig::from_json(&json).unwrap(), config);
    }
}
