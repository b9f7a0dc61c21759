// Hub RPC wire types
//
// Request and response bodies for the `/rpc/...` endpoints. The hub
// firmware is loose about scalar types (numbers arrive as strings and
// vice versa), so every scalar is optional and decoded leniently. Only
// presence is checked.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ── Lenient scalar decoding ─────────────────────────────────────────

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_bool<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => n.as_i64().map(|v| v != 0),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "on" | "true" | "1" => Some(true),
            "off" | "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

// ── System properties ───────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PropertiesResponse {
    #[serde(default)]
    pub property_details: Vec<PropertyDetail>,
}

/// One `{name, value}` entry from `get_properties`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PropertyDetail {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: Option<String>,
}

// ── Home mode ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HomeModeResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub home_mode: Option<String>,
}

/// Body of `set_home_mode`. `end_time` is sent as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetHomeModeRequest {
    pub hc_mode: String,
    pub home_mode: String,
    pub anti_freeze: bool,
    pub end_time: Option<i64>,
}

// ── Rooms (device groups) and temperatures ──────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GroupsResponse {
    #[serde(default)]
    pub group_details: Vec<GroupDetail>,
}

/// A device group; visible groups are the house's rooms.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GroupDetail {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LocationTempResponse {
    #[serde(default)]
    pub location_temp_details: Vec<LocationTemp>,
}

/// Current and target temperature of one location (room).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationTemp {
    #[serde(default)]
    pub location_name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub current_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub target_value: Option<f64>,
}

/// Body of `set_loc_temp`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLocationTempRequest {
    pub target_temp: Vec<LocationTarget>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationTarget {
    pub location_id: String,
    pub target_value: f64,
}

// ── Devices ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DeviceListResponse {
    #[serde(default)]
    pub device: Vec<DeviceDetail>,
}

/// A paired device (thermostat, valve, smart plug, ...).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDetail {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub model_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub power_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub battery_level: Option<String>,
}

// ── Appliances ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AppliancesResponse {
    #[serde(default)]
    pub appliance_details: Vec<ApplianceDetail>,
}

/// Hub-internal appliance key.
///
/// Echoed back to the hub in the same JSON form it was received in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ApplianceId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ApplianceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A load-managed appliance (smart plug or switched circuit).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceDetail {
    #[serde(default)]
    pub appliance_name: String,
    #[serde(default)]
    pub appliance_id: Option<ApplianceId>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub state: Option<bool>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub power_consump: Option<f64>,
}

/// Body of `set_appliance_state`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetApplianceStateRequest {
    pub appliance_state: Vec<ApplianceStateChange>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceStateChange {
    pub appliance_id: ApplianceId,
    pub state: bool,
}
