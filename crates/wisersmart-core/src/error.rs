// ── Core error types ──
//
// User-facing errors from wisersmart-core. Consumers never see reqwest or
// serde errors directly: the `From<wisersmart_api::Error>` impl folds
// transport-layer failures into this taxonomy.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to hub at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Hub request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Server errors ────────────────────────────────────────────────
    #[error("Hub endpoint not found: {path}")]
    NotFound { path: String },

    #[error("Unexpected hub response for {path}: {message}")]
    UnknownServer {
        path: String,
        message: String,
        /// HTTP status code (if one was received).
        status: Option<u16>,
    },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Controller data unavailable even after refresh")]
    DataUnavailable,

    #[error("Could not parse hub response: {message}")]
    Parse { message: String },

    // ── Input / configuration errors ─────────────────────────────────
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Returns `true` if the hub could not be reached in time or at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::ConnectionFailed { .. } | Self::Timeout { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<wisersmart_api::Error> for CoreError {
    fn from(err: wisersmart_api::Error) -> Self {
        match err {
            wisersmart_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            wisersmart_api::Error::Transport(ref e) => {
                let url = e
                    .url()
                    .map_or_else(|| "<unknown>".into(), ToString::to_string);
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url,
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::UnknownServer {
                        path: e.url().map(|u| u.path().to_string()).unwrap_or_default(),
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            wisersmart_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid hub address: {e}"),
            },
            wisersmart_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            wisersmart_api::Error::NotFound { path } => CoreError::NotFound { path },
            wisersmart_api::Error::Http { status, path } => CoreError::UnknownServer {
                path,
                message: format!("HTTP {status}"),
                status: Some(status),
            },
            wisersmart_api::Error::Deserialization { message, body: _ } => {
                CoreError::Parse { message }
            }
        }
    }
}
