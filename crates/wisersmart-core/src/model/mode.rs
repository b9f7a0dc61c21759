// ── Operating modes ──

use std::fmt;

use serde::{Serialize, Serializer};
use strum::{Display, EnumString};

/// House-wide operating mode reported by `get_home_mode`.
///
/// Unrecognised firmware values are preserved in [`HomeMode::Other`]
/// rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum HomeMode {
    #[strum(serialize = "manual")]
    Manual,
    #[strum(serialize = "schedule")]
    Schedule,
    #[strum(serialize = "energysaver")]
    EnergySaver,
    #[strum(serialize = "holiday")]
    Holiday,
    #[strum(default)]
    Other(String),
}

impl HomeMode {
    /// The string the hub uses for this mode.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Manual => "manual",
            Self::Schedule => "schedule",
            Self::EnergySaver => "energysaver",
            Self::Holiday => "holiday",
            Self::Other(raw) => raw,
        }
    }

    /// Holiday mode is the only one that engages frost protection.
    pub fn is_holiday(&self) -> bool {
        matches!(self, Self::Holiday)
    }

    /// Parse a firmware value; never fails.
    pub fn from_wire(raw: &str) -> Self {
        raw.parse()
            .unwrap_or_else(|_| Self::Other(raw.to_owned()))
    }
}

impl fmt::Display for HomeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HomeMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Heating/cooling selector sent alongside a home mode change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum HcMode {
    #[default]
    Heating,
    Cooling,
}
