// ── Load-managed appliances ──

use serde::Serialize;

pub use wisersmart_api::ApplianceId;

/// A switchable appliance (smart plug or switched circuit).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Appliance {
    pub name: String,
    /// Hub-internal key, required to switch the appliance.
    pub id: Option<ApplianceId>,
    pub on: Option<bool>,
    /// Instantaneous power draw in watts.
    pub power_consumption: Option<f64>,
}
