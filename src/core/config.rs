use std::env;
use std::time::Duration;

use crate::errors::SlackError;

pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub token: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// # Errors
    ///
    /// Returns an error if `SLACK_API_TOKEN` is unset or a numeric setting cannot be parsed.
    pub fn from_env() -> Result<Self, SlackError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, with the same keys and defaults as
    /// [`ClientConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or empty, or the timeout is not a number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SlackError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("SLACK_API_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| SlackError::ConfigError("SLACK_API_TOKEN: not set".to_string()))?;

        let base_url = lookup("SLACK_API_BASE_URL")
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match lookup("SLACK_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                SlackError::ConfigError(format!("SLACK_HTTP_TIMEOUT_SECS: {e}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            token,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_apply_when_only_token_is_set() {
        let config =
            ClientConfig::from_lookup(lookup_from(&[("SLACK_API_TOKEN", "xoxb-1")])).unwrap();
        assert_eq!(config.token, "xoxb-1");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_overrides_are_read() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("SLACK_API_TOKEN", "xoxb-1"),
            ("SLACK_API_BASE_URL", "http://localhost:9000/api"),
            ("SLACK_HTTP_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_token_is_rejected() {
        let err = ClientConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, SlackError::ConfigError(msg) if msg.contains("SLACK_API_TOKEN")));
    }

    #[test]
    fn test_bad_timeout_is_rejected() {
        let err = ClientConfig::from_lookup(lookup_from(&[
            ("SLACK_API_TOKEN", "xoxb-1"),
            ("SLACK_HTTP_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SlackError::ConfigError(_)));
    }
}
