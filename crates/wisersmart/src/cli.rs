//! Clap derive structures for the `wisersmart` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use wisersmart_core::{HcMode, HomeMode};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// wisersmart -- control a Wiser Smart hub from the command line
#[derive(Debug, Parser)]
#[command(
    name = "wisersmart",
    version,
    about = "Monitor and control Wiser Smart heating hubs",
    long_about = "Talks to a Schneider Electric Wiser Smart hub over its local\n\
        HTTP interface: room temperatures, paired devices, appliances,\n\
        and the house-wide heating mode.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Hub profile to use
    #[arg(long, short = 'p', env = "WISERSMART_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Hub address (overrides profile)
    #[arg(long, short = 'H', env = "WISERSMART_HOST", global = true)]
    pub host: Option<String>,

    /// Hub user name (overrides profile)
    #[arg(long, short = 'u', env = "WISERSMART_USERNAME", global = true)]
    pub username: Option<String>,

    /// Hub password
    #[arg(long, env = "WISERSMART_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "WISERSMART_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (default: profile, then 5)
    #[arg(long, env = "WISERSMART_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show hub name, cloud connection, and home mode
    Status,

    /// List and inspect paired devices
    #[command(alias = "dev", alias = "d")]
    Devices(DevicesArgs),

    /// Room temperatures and set-points
    #[command(alias = "r")]
    Rooms(RoomsArgs),

    /// Switchable appliances
    #[command(alias = "a")]
    Appliances(AppliancesArgs),

    /// House-wide heating mode
    Mode(ModeArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Devices ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DevicesArgs {
    #[command(subcommand)]
    pub command: DevicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DevicesCommand {
    /// List paired devices
    #[command(alias = "ls")]
    List,

    /// Show one device by name
    Get {
        /// Device name (exact match)
        name: String,
    },
}

// ── Rooms ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RoomsArgs {
    #[command(subcommand)]
    pub command: RoomsCommand,
}

#[derive(Debug, Subcommand)]
pub enum RoomsCommand {
    /// List rooms with current and target temperature
    #[command(alias = "ls")]
    List,

    /// Show one room by name
    Get {
        /// Room name (exact match)
        name: String,
    },

    /// Set a room's target temperature (°C, clamped to 0.5..35)
    SetTemp {
        /// Room name (not checked against the hub)
        name: String,

        /// Target temperature in °C
        #[arg(allow_negative_numbers = true)]
        temperature: f64,
    },
}

// ── Appliances ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AppliancesArgs {
    #[command(subcommand)]
    pub command: AppliancesCommand,
}

#[derive(Debug, Subcommand)]
pub enum AppliancesCommand {
    /// List appliances with state and power draw
    #[command(alias = "ls")]
    List,

    /// Show one appliance by name
    Get {
        /// Appliance name (exact match)
        name: String,
    },

    /// Switch an appliance on
    On {
        /// Appliance name (exact match)
        name: String,
    },

    /// Switch an appliance off
    Off {
        /// Appliance name (exact match)
        name: String,
    },
}

// ── Mode ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ModeArgs {
    #[command(subcommand)]
    pub command: ModeCommand,
}

#[derive(Debug, Subcommand)]
pub enum ModeCommand {
    /// Show the current home mode
    Get,

    /// Change the home mode
    Set {
        /// New home mode
        mode: ModeArg,

        /// Heating or cooling
        #[arg(long, default_value = "heating")]
        hc: HcArg,

        /// Return time for holiday mode (RFC 3339, e.g. 2026-12-27T18:00:00Z)
        #[arg(long, value_parser = parse_rfc3339)]
        until: Option<DateTime<Utc>>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Manual,
    Schedule,
    #[value(alias = "energy-saver")]
    Energysaver,
    Holiday,
}

impl From<ModeArg> for HomeMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Manual => HomeMode::Manual,
            ModeArg::Schedule => HomeMode::Schedule,
            ModeArg::Energysaver => HomeMode::EnergySaver,
            ModeArg::Holiday => HomeMode::Holiday,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HcArg {
    Heating,
    Cooling,
}

impl From<HcArg> for HcMode {
    fn from(arg: HcArg) -> Self {
        match arg {
            HcArg::Heating => HcMode::Heating,
            HcArg::Cooling => HcMode::Cooling,
        }
    }
}

fn parse_rfc3339(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,

    /// Show the current configuration (passwords redacted)
    Show,

    /// Interactive setup wizard
    Init,

    /// List configured profiles (* marks the default)
    Profiles,

    /// Make a profile the default
    Use {
        /// Profile name
        name: String,
    },

    /// Store a profile's password in the system keyring
    SetPassword {
        /// Profile name (default: active profile)
        #[arg(long)]
        profile: Option<String>,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
