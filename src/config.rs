//! Client configuration.

use std::env;
use std::time::Duration;

use crate::error::{Result, SuperthreadError};

pub const DEFAULT_BASE_URL: &str = "https://api.superthread.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_OPEN_TIMEOUT: Duration = Duration::from_secs(10);

pub const API_KEY_VAR: &str = "SUPERTHREAD_API_KEY";
pub const BASE_URL_VAR: &str = "SUPERTHREAD_API_BASE_URL";
pub const WORKSPACE_VAR: &str = "SUPERTHREAD_WORKSPACE_ID";
pub const TIMEOUT_VAR: &str = "SUPERTHREAD_TIMEOUT";
pub const OPEN_TIMEOUT_VAR: &str = "SUPERTHREAD_OPEN_TIMEOUT";

/// Connection settings for a [`SuperthreadClient`](crate::SuperthreadClient).
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    /// Default workspace for calls that take one.
    pub workspace: Option<String>,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Connect timeout.
    pub open_timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("workspace", &self.workspace)
            .field("timeout", &self.timeout)
            .field("open_timeout", &self.open_timeout)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            workspace: None,
            timeout: DEFAULT_TIMEOUT,
            open_timeout: DEFAULT_OPEN_TIMEOUT,
        }
    }

    /// Read configuration from `SUPERTHREAD_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`SuperthreadError::ConfigMissing`] if `SUPERTHREAD_API_KEY`
    /// is unset or empty, and [`SuperthreadError::InvalidArgument`] for a
    /// timeout that is not a whole number of seconds.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(lookup(API_KEY_VAR).unwrap_or_default());

        if let Some(base_url) = non_empty(lookup(BASE_URL_VAR)) {
            config.base_url = base_url;
        }
        config.workspace = non_empty(lookup(WORKSPACE_VAR));
        if let Some(raw) = non_empty(lookup(TIMEOUT_VAR)) {
            config.timeout = parse_seconds(TIMEOUT_VAR, &raw)?;
        }
        if let Some(raw) = non_empty(lookup(OPEN_TIMEOUT_VAR)) {
            config.open_timeout = parse_seconds(OPEN_TIMEOUT_VAR, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }

    #[must_use]
    pub fn with_timeouts(mut self, timeout: Duration, open_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.open_timeout = open_timeout;
        self
    }

    /// Fails if no API key is set.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(SuperthreadError::ConfigMissing(format!(
                "API key is required. Set the {API_KEY_VAR} environment variable"
            )));
        }
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_seconds(name: &str, raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| SuperthreadError::InvalidArgument(format!("{name} must be whole seconds, got {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[(API_KEY_VAR, "stk_1")])).unwrap();
        assert_eq!(config.api_key, "stk_1");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.workspace, None);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.open_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (API_KEY_VAR, "k"),
            (BASE_URL_VAR, "http://localhost:9000/v1"),
            (WORKSPACE_VAR, "ws_1"),
            (TIMEOUT_VAR, "5"),
            (OPEN_TIMEOUT_VAR, " 2 "),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.workspace.as_deref(), Some("ws_1"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.open_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_missing_key() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, SuperthreadError::ConfigMissing(_)));
        assert!(err.to_string().contains(API_KEY_VAR));

        let err = Config::from_lookup(lookup(&[(API_KEY_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, SuperthreadError::ConfigMissing(_)));
    }

    #[test]
    fn test_bad_timeout() {
        let err = Config::from_lookup(lookup(&[(API_KEY_VAR, "k"), (TIMEOUT_VAR, "soon")])).unwrap_err();
        assert!(matches!(err, SuperthreadError::InvalidArgument(_)));
    }

    #[test]
    fn test_debug_hides_key() {
        let debug = format!("{:?}", Config::new("secret-key"));
        assert!(debug.contains("base_url"));
        assert!(!debug.contains("secret-key"));
    }
}
