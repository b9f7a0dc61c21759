// ── Controller snapshot ──
//
// One coherent view of the hub, assembled from the six read endpoints.
// A snapshot is immutable once built; refreshes replace it wholesale.

use chrono::{DateTime, Utc};
use serde::Serialize;
use wisersmart_api::{PROP_CLOUD_STATUS, PROP_HOST_NAME, PROP_MAC_ADDRESS};

use crate::model::{Appliance, Device, HomeMode, Room, RoomGroup, SystemProperty};

/// Everything the hub reported during one refresh.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub properties: Vec<SystemProperty>,
    pub home_mode: Option<HomeMode>,
    pub groups: Vec<RoomGroup>,
    pub devices: Vec<Device>,
    pub temperatures: Vec<Room>,
    pub appliances: Vec<Appliance>,
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    /// Value of the named system property, if the hub reported one.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.value.as_deref())
    }

    pub fn controller_name(&self) -> Option<&str> {
        self.property(PROP_HOST_NAME)
    }

    pub fn cloud_connection(&self) -> Option<&str> {
        self.property(PROP_CLOUD_STATUS)
    }

    pub fn mac_address(&self) -> Option<&str> {
        self.property(PROP_MAC_ADDRESS)
    }

    /// Names of visible groups, in hub order.
    pub fn room_names(&self) -> Vec<String> {
        self.groups
            .iter()
            .filter(|g| g.visible)
            .map(|g| g.name.clone())
            .collect()
    }

    /// Temperature entry for a room, by exact name.
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.temperatures.iter().find(|r| r.name == name)
    }

    /// First device with the given name.
    pub fn device(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.name == name)
    }

    /// First appliance with the given name.
    pub fn appliance(&self, name: &str) -> Option<&Appliance> {
        self.appliances.iter().find(|a| a.name == name)
    }
}
