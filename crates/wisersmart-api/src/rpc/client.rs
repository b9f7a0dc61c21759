// Hub RPC HTTP client
//
// Wraps `reqwest::Client` with hub URL construction, Basic auth, and
// status/timeout translation. The endpoint modules (system, mode, rooms,
// devices, appliances) are implemented as inherent methods in separate
// files to keep this module focused on transport mechanics.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// The hub insists on the charset parameter.
const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Raw HTTP client for the hub's `/rpc/...` interface.
///
/// Every call is a JSON `POST` carrying a Basic `Authorization` header.
/// Read methods return the decoded payload; write methods discard the
/// reply body.
pub struct WiserClient {
    http: reqwest::Client,
    base_url: Url,
    username: String,
    password: SecretString,
    timeout: Duration,
}

impl WiserClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the hub root, e.g. `http://192.168.1.50`.
    pub fn new(
        base_url: Url,
        username: String,
        password: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            username,
            password,
            timeout: transport.timeout,
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// The timeout is only used for error reporting; the supplied client
    /// enforces its own.
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        username: String,
        password: SecretString,
    ) -> Self {
        Self {
            http,
            base_url,
            username,
            password,
            timeout: TransportConfig::default().timeout,
        }
    }

    /// Build the hub root URL from a configured host.
    ///
    /// Accepts `192.168.1.50`, `hub.lan:8080`, or a full `http://...` URL.
    pub fn base_url_for_host(host: &str) -> Result<Url, Error> {
        let host = host.trim().trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            Ok(Url::parse(host)?)
        } else {
            Ok(Url::parse(&format!("http://{host}"))?)
        }
    }

    /// The hub base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The Basic-auth user name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for an RPC path such as `/rpc/mode/get_home_mode`.
    pub(crate) fn rpc_url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// POST a JSON body and decode the JSON reply.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        let resp = self.send(path, body).await?;
        let text = resp.text().await.map_err(|e| self.translate(e))?;
        trace!(path, body = %text, "hub reply");

        serde_json::from_str(&text).map_err(|e| {
            let preview: String = text.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{path}: {e} (body preview: {preview:?})"),
                body: text.clone(),
            }
        })
    }

    /// POST a JSON command body; the reply body is not interpreted.
    pub(crate) async fn post_command(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<(), Error> {
        self.send(path, body).await?;
        Ok(())
    }

    async fn send(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<reqwest::Response, Error> {
        let url = self.rpc_url(path)?;
        debug!("POST {}", url);

        let resp = self
            .http
            .post(url)
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(body)
            .send()
            .await
            .map_err(|e| self.translate(e))?;

        check_status(resp.status(), path)?;
        Ok(resp)
    }

    /// Fold reqwest timeouts into [`Error::Timeout`]; keep everything else.
    fn translate(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            Error::Transport(err)
        }
    }
}

fn check_status(status: StatusCode, path: &str) -> Result<(), Error> {
    if status.is_success() {
        return Ok(());
    }
    Err(match status {
        StatusCode::UNAUTHORIZED => Error::Authentication {
            message: "hub rejected the user name or password".into(),
        },
        StatusCode::NOT_FOUND => Error::NotFound { path: path.into() },
        other => Error::Http {
            status: other.as_u16(),
            path: path.into(),
        },
    })
}
