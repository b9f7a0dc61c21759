// ── Runtime connection configuration ──
//
// These types describe *how* to reach a hub. They carry credential data
// and connection tuning, but never touch disk. The CLI constructs a
// `HubConfig` and hands it in.

use std::time::Duration;

use secrecy::SecretString;
pub use wisersmart_api::DEFAULT_TIMEOUT_SECS;

/// Configuration for connecting to a single hub.
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Hub address: `192.168.1.50`, `hub.lan:8080`, or a full `http://` URL.
    pub host: String,
    /// Basic-auth user name.
    pub username: String,
    /// Basic-auth password.
    pub password: SecretString,
    /// Per-request timeout.
    pub timeout: Duration,
    /// How often to refresh the snapshot in the background (seconds). 0 = never.
    pub refresh_interval_secs: u64,
}

impl HubConfig {
    pub fn new(host: impl Into<String>, username: impl Into<String>, password: SecretString) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            password,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            refresh_interval_secs: 0,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_refresh_interval(mut self, secs: u64) -> Self {
        self.refresh_interval_secs = secs;
        self
    }
}
