//! Application constants and the endpoint configuration

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/books/v1";
pub const API_URL_ENV: &str = "BOOK_EXPLORER_API_URL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = concat!("book-explorer/", env!("CARGO_PKG_VERSION"));

/// How long the event loop waits for a key press before redrawing
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub const LOG_DIR: &str = ".logs";
pub const LOG_DIR_ENV: &str = "BOOK_EXPLORER_LOG_DIR";
pub const LOG_FILE_PREFIX: &str = "book-explorer";

/// Settings for the catalog HTTP client
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    /// Build the config, honoring `BOOK_EXPLORER_API_URL` when it is set and non-empty.
    pub fn from_env() -> Self {
        Self::from_override(std::env::var(API_URL_ENV).ok())
    }

    fn from_override(base_url: Option<String>) -> Self {
        match base_url.as_deref().map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => {
                tracing::info!(base_url = url, "Using catalog endpoint from environment");
                Self::with_base_url(url)
            }
            None => Self::default(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_google_books() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout, REQUEST_TIMEOUT);
        assert!(config.user_agent.starts_with("book-explorer/"));
    }

    #[test]
    fn override_replaces_only_the_endpoint() {
        let config = ClientConfig::from_override(Some(" http://127.0.0.1:9000 ".to_string()));
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.user_agent, USER_AGENT);
    }

    #[test]
    fn blank_or_missing_override_keeps_default_endpoint() {
        assert_eq!(ClientConfig::from_override(None).base_url, DEFAULT_API_BASE_URL);
        assert_eq!(
            ClientConfig::from_override(Some("   ".to_string())).base_url,
            DEFAULT_API_BASE_URL
        );
    }

    #[test]
    fn with_base_url_keeps_other_defaults() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:9000");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, REQUEST_TIMEOUT);
    }
}
