//! Configuration for the wisersmart CLI.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `wisersmart_core::HubConfig`. The CLI layers its
//! global-flag overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use wisersmart_core::HubConfig;

/// Keyring service name for stored hub passwords.
pub const KEYRING_SERVICE: &str = "wisersmart";

/// Overrides the config file location when set.
pub const CONFIG_PATH_ENV: &str = "WISERSMART_CONFIG";

const ENV_PREFIX: &str = "WISERSMART_";
const PASSWORD_ENV: &str = "WISERSMART_PASSWORD";
const USERNAME_ENV: &str = "WISERSMART_USERNAME";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no password configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named hub profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Name of the profile to use when none is given explicitly.
    pub fn active_profile_name(&self) -> &str {
        self.default_profile.as_deref().unwrap_or("default")
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    wisersmart_core::config::DEFAULT_TIMEOUT_SECS
}

/// A named hub profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Hub address (e.g., "192.168.1.50" or "http://hub.lan:8080").
    pub host: String,

    /// Basic-auth user name.
    pub username: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Password (plaintext; prefer keyring or env var).
    pub password: Option<String>,

    /// Override timeout (seconds).
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path: `WISERSMART_CONFIG`, else the
/// platform config directory.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    ProjectDirs::from("com", "wisersmart", "wisersmart").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("wisersmart");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load Config from `path`, then overlay `WISERSMART_` env vars.
///
/// Nested keys use a double underscore: `WISERSMART_DEFAULTS__TIMEOUT`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution (without CLI flags) ───────────────────────

/// Resolve the user name: profile, then `WISERSMART_USERNAME`.
pub fn resolve_username(profile: &Profile, profile_name: &str) -> Result<String, ConfigError> {
    profile
        .username
        .clone()
        .or_else(|| std::env::var(USERNAME_ENV).ok())
        .ok_or_else(|| ConfigError::Validation {
            field: "username".into(),
            reason: format!("no username configured for profile '{profile_name}'"),
        })
}

/// Resolve the hub password from the credential chain.
pub fn resolve_password(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's password_env → env var lookup
    if let Some(ref env_name) = profile.password_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. Global env var
    if let Ok(val) = std::env::var(PASSWORD_ENV) {
        return Ok(SecretString::from(val));
    }

    // 3. System keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &keyring_user(profile_name)) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 4. Plaintext in config
    if let Some(ref pw) = profile.password {
        return Ok(SecretString::from(pw.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Store a profile's password in the system keyring.
pub fn store_password(profile_name: &str, password: &str) -> Result<(), ConfigError> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, &keyring_user(profile_name))?;
    entry.set_password(password)?;
    Ok(())
}

fn keyring_user(profile_name: &str) -> String {
    format!("{profile_name}/password")
}

/// Build a `HubConfig` from a profile; no CLI flag overrides.
pub fn profile_to_hub_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<HubConfig, ConfigError> {
    validate_host(profile, profile_name)?;
    let password = resolve_password(profile, profile_name)?;
    hub_config_with_password(profile, profile_name, defaults, password)
}

/// Build a `HubConfig` from a profile with an already-known password.
pub fn hub_config_with_password(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
    password: SecretString,
) -> Result<HubConfig, ConfigError> {
    validate_host(profile, profile_name)?;
    let username = resolve_username(profile, profile_name)?;
    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));

    Ok(HubConfig::new(profile.host.clone(), username, password).with_timeout(timeout))
}

fn validate_host(profile: &Profile, profile_name: &str) -> Result<(), ConfigError> {
    if profile.host.trim().is_empty() {
        return Err(ConfigError::Validation {
            field: "host".into(),
            reason: format!("profile '{profile_name}' has no host"),
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    use super::*;

    const SAMPLE: &str = r#"
        default_profile = "home"

        [defaults]
        timeout = 7

        [profiles.home]
        host = "192.168.1.50"
        username = "admin"
        password_env = "HOME_HUB_PASSWORD"
    "#;

    #[test]
    fn loads_profiles_from_toml() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", SAMPLE)?;
            let cfg = load_config_from(Path::new("config.toml")).map_err(|e| e.to_string())?;

            assert_eq!(cfg.active_profile_name(), "home");
            assert_eq!(cfg.defaults.timeout, 7);
            assert_eq!(cfg.defaults.output, "table");
            let home = &cfg.profiles["home"];
            assert_eq!(home.host, "192.168.1.50");
            assert_eq!(home.username.as_deref(), Some("admin"));
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", SAMPLE)?;
            jail.set_env("WISERSMART_DEFAULTS__TIMEOUT", "12");
            jail.set_env("WISERSMART_DEFAULT_PROFILE", "office");

            let cfg = load_config_from(Path::new("config.toml")).map_err(|e| e.to_string())?;
            assert_eq!(cfg.defaults.timeout, 12);
            assert_eq!(cfg.active_profile_name(), "office");
            Ok(())
        });
    }

    #[test]
    fn missing_file_yields_defaults() {
        Jail::expect_with(|_| {
            let cfg = load_config_from(Path::new("absent.toml")).map_err(|e| e.to_string())?;
            assert_eq!(cfg.active_profile_name(), "default");
            assert_eq!(cfg.defaults.timeout, 5);
            assert!(cfg.profiles.is_empty());
            Ok(())
        });
    }

    #[test]
    fn password_env_wins_over_plaintext() {
        Jail::expect_with(|jail| {
            jail.set_env("HOME_HUB_PASSWORD", "from-env");
            let profile = Profile {
                host: "hub.lan".into(),
                username: Some("admin".into()),
                password_env: Some("HOME_HUB_PASSWORD".into()),
                password: Some("plaintext".into()),
                ..Profile::default()
            };

            let pw = resolve_password(&profile, "home").map_err(|e| e.to_string())?;
            assert_eq!(pw.expose_secret(), "from-env");
            Ok(())
        });
    }

    #[test]
    fn hub_config_from_profile() {
        Jail::expect_with(|jail| {
            jail.set_env("WISERSMART_PASSWORD", "secret");
            let profile = Profile {
                host: "192.168.1.50".into(),
                username: Some("admin".into()),
                timeout: Some(3),
                ..Profile::default()
            };

            let hub = profile_to_hub_config(&profile, "home", &Defaults::default())
                .map_err(|e| e.to_string())?;
            assert_eq!(hub.host, "192.168.1.50");
            assert_eq!(hub.username, "admin");
            assert_eq!(hub.password.expose_secret(), "secret");
            assert_eq!(hub.timeout, Duration::from_secs(3));
            assert_eq!(hub.refresh_interval_secs, 0);
            Ok(())
        });
    }

    #[test]
    fn empty_host_is_rejected() {
        let profile = Profile::default();
        let err = profile_to_hub_config(&profile, "home", &Defaults::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "host"));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.profiles.insert(
            "home".into(),
            Profile {
                host: "hub.lan".into(),
                username: Some("admin".into()),
                ..Profile::default()
            },
        );
        save_config_to(&cfg, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.profiles["home"].host, "hub.lan");
        assert_eq!(loaded.profiles["home"].password, None);
    }
}
