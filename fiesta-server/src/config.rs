//! Server configuration
//!
//! # Environment variables
//!
//! | Variable | Default |
//! |----------|---------|
//! | FIESTA_HTTP_PORT | 3000 |
//! | FIESTA_LOG_LEVEL | info |
//! | FIESTA_LOG_DIR | (stdout only) |
//! | FIESTA_REQUEST_TIMEOUT_MS | 30000 |

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub log_level: String,
    /// Daily rolling log files go here when set
    pub log_dir: Option<String>,
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load from environment, reading `.env` first when present
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            http_port: std::env::var("FIESTA_HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            log_level: std::env::var("FIESTA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_dir: std::env::var("FIESTA_LOG_DIR").ok().filter(|d| !d.is_empty()),
            request_timeout_ms: std::env::var("FIESTA_REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30_000),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 3000,
            log_level: "info".to_string(),
            log_dir: None,
            request_timeout_ms: 30_000,
        }
    }
}
