// ── Command API ──
//
// Write operations as data, so callers (the CLI, scripts) can build a
// command once and hand it to `Hub::execute`.

use chrono::{DateTime, Utc};

use crate::model::{HcMode, HomeMode};

/// A write operation against the hub.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetHomeMode {
        hc_mode: HcMode,
        home_mode: HomeMode,
        /// Return time for holiday mode.
        come_back: Option<DateTime<Utc>>,
    },
    SetRoomTemperature {
        room: String,
        temperature: f64,
    },
    SetApplianceState {
        appliance: String,
        on: bool,
    },
}

/// Outcome of a successfully executed [`Command`].
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// The hub accepted the request.
    Ok,
    /// The room target actually sent, after clamping.
    TargetTemperature(f64),
    /// No request was sent (e.g. unknown appliance).
    NoOp,
}
