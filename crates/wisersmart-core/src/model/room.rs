// ── Rooms ──

use serde::Serialize;

/// A device group as listed by the hub. Visible groups are rooms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomGroup {
    pub name: String,
    pub visible: bool,
}

/// Current and target temperature of a room (°C).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    pub name: String,
    pub current_temperature: Option<f64>,
    pub target_temperature: Option<f64>,
}
