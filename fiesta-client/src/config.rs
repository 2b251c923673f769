//! Client configuration

use std::path::PathBuf;

/// Client configuration for reaching the remote cart store
///
/// # Environment variables
///
/// | Variable | Default |
/// |----------|---------|
/// | FIESTA_API_URL | http://localhost:3000 |
/// | FIESTA_SESSION_DIR | .fiesta |
/// | FIESTA_TIMEOUT_SECS | 30 |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Directory holding the session file
    pub session_dir: PathBuf,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            session_dir: PathBuf::from(".fiesta"),
            timeout: 30,
        }
    }

    /// Load from environment, reading `.env` first when present
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let mut config = Self::new(
            std::env::var("FIESTA_API_URL").unwrap_or_else(|_| "http://localhost:3000".into()),
        );
        if let Ok(dir) = std::env::var("FIESTA_SESSION_DIR") {
            config.session_dir = PathBuf::from(dir);
        }
        if let Some(secs) = std::env::var("FIESTA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.timeout = secs;
        }
        config
    }

    pub fn with_session_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session_dir = dir.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }

    pub fn session_store(&self) -> crate::SessionStore {
        crate::SessionStore::new(&self.session_dir)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
