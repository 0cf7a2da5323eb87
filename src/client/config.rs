//! Client configuration options.

use std::time::Duration;

use url::Url;

use crate::{Error, Result};

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_VAR: &str = "USERHUB_BACKEND_URL";
/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_VAR: &str = "USERHUB_TIMEOUT_SECS";
/// Backend used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Configuration for the UserHub client.
///
/// # Example
///
/// ```
/// use userhub_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("https://users.example.org")?
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// # Ok::<(), userhub_rs::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL; API paths are appended below it
    pub backend_url: Url,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: Url::parse(DEFAULT_BACKEND_URL).expect("default backend URL is valid"),
            timeout: Duration::from_secs(30),
            user_agent: format!("userhub-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at the given backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or cannot carry a path
    /// (e.g. `mailto:` URLs).
    pub fn new(backend_url: &str) -> Result<Self> {
        Ok(Self::default().with_backend_url(parse_backend_url(backend_url)?))
    }

    /// Build a configuration from `USERHUB_BACKEND_URL` and
    /// `USERHUB_TIMEOUT_SECS`, falling back to defaults for unset or blank
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the timeout is not a whole
    /// number of seconds.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(BACKEND_URL_VAR, TIMEOUT_VAR)
    }

    fn from_vars(url_var: &str, timeout_var: &str) -> Result<Self> {
        let mut config = match env_value(url_var) {
            Some(url) => Self::new(&url)?,
            None => Self::default(),
        };

        if let Some(secs) = env_value(timeout_var) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                Error::Config(format!("{} must be a whole number of seconds, got {:?}", timeout_var, secs))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Set the backend base URL.
    pub fn with_backend_url(mut self, backend_url: Url) -> Self {
        self.backend_url = backend_url;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn env_value(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn parse_backend_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        return Err(Error::Config(format!("backend URL cannot carry a path: {}", raw)));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.backend_url.as_str(), "http://localhost:8080/");
        assert!(config.user_agent.starts_with("userhub-rs/"));
    }

    #[test]
    fn test_new_rejects_bad_urls() {
        assert!(matches!(ClientConfig::new("not a url"), Err(Error::UrlParse(_))));
        assert!(matches!(ClientConfig::new("mailto:ops@example.org"), Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_setters() {
        let config = ClientConfig::new("https://users.example.org/backend")
            .unwrap()
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("tests");
        assert_eq!(config.backend_url.path(), "/backend");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "tests");
    }

    #[test]
    fn test_from_env_defaults_when_unset() {
        let (url_var, timeout_var) = ("USERHUB_TEST_CFG_UNSET_URL", "USERHUB_TEST_CFG_UNSET_SECS");
        std::env::remove_var(url_var);
        std::env::remove_var(timeout_var);

        let config = ClientConfig::from_vars(url_var, timeout_var).unwrap();
        assert_eq!(config.backend_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_from_env_blank_values_fall_back() {
        let (url_var, timeout_var) = ("USERHUB_TEST_CFG_BLANK_URL", "USERHUB_TEST_CFG_BLANK_SECS");
        std::env::set_var(url_var, "");
        std::env::set_var(timeout_var, "   ");

        let config = ClientConfig::from_vars(url_var, timeout_var).unwrap();
        assert_eq!(config.backend_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_from_env_overrides() {
        let (url_var, timeout_var) = ("USERHUB_TEST_CFG_SET_URL", "USERHUB_TEST_CFG_SET_SECS");
        std::env::set_var(url_var, "https://users.example.org/backend");
        std::env::set_var(timeout_var, " 5 ");

        let config = ClientConfig::from_vars(url_var, timeout_var).unwrap();
        assert_eq!(config.backend_url.path(), "/backend");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_from_env_rejects_bad_values() {
        let (url_var, timeout_var) = ("USERHUB_TEST_CFG_BAD_URL", "USERHUB_TEST_CFG_BAD_SECS");
        std::env::remove_var(url_var);
        std::env::set_var(timeout_var, "soon");

        let err = ClientConfig::from_vars(url_var, timeout_var).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains(timeout_var));

        std::env::set_var(timeout_var, "-1");
        assert!(matches!(ClientConfig::from_vars(url_var, timeout_var), Err(Error::Config(_))));

        std::env::remove_var(timeout_var);
        std::env::set_var(url_var, "not a url");
        assert!(matches!(ClientConfig::from_vars(url_var, timeout_var), Err(Error::UrlParse(_))));
    }

    #[test]
    fn test_from_env_reads_userhub_vars() {
        // Only test touching the real variable names.
        std::env::set_var(BACKEND_URL_VAR, "");
        std::env::remove_var(TIMEOUT_VAR);
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.backend_url.as_str(), "http://localhost:8080/");
    }
}
