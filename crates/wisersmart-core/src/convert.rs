// ── Wire → domain conversions ──
//
// Bridges the loosely-typed hub payloads in wisersmart-api to the domain
// model. Missing fields stay `None`; nothing here fails.

use wisersmart_api::{ApplianceDetail, DeviceDetail, GroupDetail, LocationTemp, PropertyDetail};

use crate::model::{Appliance, Device, PowerType, Room, RoomGroup, SystemProperty};

impl From<PropertyDetail> for SystemProperty {
    fn from(p: PropertyDetail) -> Self {
        Self {
            name: p.name,
            value: p.value,
        }
    }
}

impl From<GroupDetail> for RoomGroup {
    fn from(g: GroupDetail) -> Self {
        Self {
            name: g.name,
            visible: g.visible.unwrap_or(false),
        }
    }
}

impl From<LocationTemp> for Room {
    fn from(t: LocationTemp) -> Self {
        Self {
            name: t.location_name,
            current_temperature: t.current_value,
            target_temperature: t.target_value,
        }
    }
}

impl From<DeviceDetail> for Device {
    fn from(d: DeviceDetail) -> Self {
        let power_type = d.power_type.as_deref().map(PowerType::from_wire);
        // Mains devices report a meaningless battery level.
        let battery_level = match power_type {
            Some(PowerType::Battery) => d.battery_level,
            _ => None,
        };

        Self {
            name: d.name,
            model_id: d.model_id,
            location: d.location,
            status: d.status,
            power_type,
            battery_level,
        }
    }
}

impl From<ApplianceDetail> for Appliance {
    fn from(a: ApplianceDetail) -> Self {
        Self {
            name: a.appliance_name,
            id: a.appliance_id,
            on: a.state,
            power_consumption: a.power_consump,
        }
    }
}
