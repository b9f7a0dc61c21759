// ── Paired devices ──

use std::fmt;

use serde::{Serialize, Serializer};
use strum::EnumString;

/// How a device is powered.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum PowerType {
    Mains,
    Battery,
    #[strum(default)]
    Other(String),
}

impl PowerType {
    pub fn from_wire(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| Self::Other(raw.to_owned()))
    }
}

impl fmt::Display for PowerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mains => f.write_str("Mains"),
            Self::Battery => f.write_str("Battery"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for PowerType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A paired device: thermostat, radiator valve, smart plug, etc.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    pub name: String,
    pub model_id: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub power_type: Option<PowerType>,
    /// Only populated for battery-powered devices.
    pub battery_level: Option<String>,
}

impl Device {
    pub fn is_battery_powered(&self) -> bool {
        matches!(self.power_type, Some(PowerType::Battery))
    }
}
