//! CLI configuration: thin wrapper around `wisersmart_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--host, --username, --password, --timeout), and applies the file's
//! `[defaults]` where no output or color flag was given.

use clap::ArgMatches;
use clap::ValueEnum;
use clap::parser::ValueSource;
use secrecy::SecretString;

use wisersmart_core::HubConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use wisersmart_config::{
    Config, Defaults, Profile, config_path, load_config, load_config_or_default, save_config,
};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .unwrap_or_else(|| config.active_profile_name().to_owned())
}

/// Comma-separated profile names, for help text.
pub fn available_profiles(config: &Config) -> String {
    let mut names: Vec<_> = config.profiles.keys().cloned().collect();
    names.sort();
    if names.is_empty() {
        "(none)".into()
    } else {
        names.join(", ")
    }
}

/// Replace clap's built-in `--output` / `--color` defaults with the
/// config file's `[defaults]`. Explicit flags and env vars still win.
pub fn apply_output_defaults(global: &mut GlobalOpts, matches: &ArgMatches, defaults: &Defaults) {
    if matches.value_source("output") == Some(ValueSource::DefaultValue) {
        match OutputFormat::from_str(&defaults.output, true) {
            Ok(format) => global.output = format,
            Err(_) => tracing::warn!(value = %defaults.output, "ignoring unknown defaults.output"),
        }
    }
    if matches.value_source("color") == Some(ValueSource::DefaultValue) {
        match ColorMode::from_str(&defaults.color, true) {
            Ok(mode) => global.color = mode,
            Err(_) => tracing::warn!(value = %defaults.color, "ignoring unknown defaults.color"),
        }
    }
}

/// Build a `HubConfig` from the loaded config, the named profile, and flags.
///
/// CLI flag overrides take priority over profile values. Without a
/// profile, `--host` is required.
pub fn build_hub_config(
    global: &GlobalOpts,
    cfg: &Config,
    profile_name: &str,
) -> Result<HubConfig, CliError> {
    let mut profile = match cfg.profiles.get(profile_name) {
        Some(profile) => profile.clone(),
        None if global.host.is_some() => Profile::default(),
        None if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                name: profile_name.to_owned(),
                available: available_profiles(cfg),
            });
        }
        None => {
            return Err(CliError::NoConfig {
                path: config_path().display().to_string(),
            });
        }
    };

    if let Some(ref host) = global.host {
        profile.host.clone_from(host);
    }
    if let Some(ref username) = global.username {
        profile.username = Some(username.clone());
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }

    let hub = match global.password {
        Some(ref password) => wisersmart_config::hub_config_with_password(
            &profile,
            profile_name,
            &cfg.defaults,
            SecretString::from(password.clone()),
        )?,
        None => wisersmart_config::profile_to_hub_config(&profile, profile_name, &cfg.defaults)?,
    };

    tracing::debug!(profile = %profile_name, host = %hub.host, "resolved hub config");
    Ok(hub)
}
