// ── Snapshot refresh ──
//
// Pulls every read endpoint and assembles a `Snapshot`. Any failure
// aborts the whole refresh so the caller never publishes a partial view.

use chrono::Utc;
use tracing::debug;
use wisersmart_api::{CONTROLLER_PROPERTIES, WiserClient};

use super::Snapshot;
use crate::error::CoreError;
use crate::model::HomeMode;

pub(crate) async fn fetch_snapshot(client: &WiserClient) -> Result<Snapshot, CoreError> {
    let properties = client.get_properties(&CONTROLLER_PROPERTIES).await?;
    let home_mode = client.get_home_mode().await?;
    let groups = client.get_groups().await?;
    let devices = client.device_list().await?;
    let temperatures = client.get_all_loc_temp().await?;
    let appliances = client.get_appliances().await?;

    debug!(
        properties = properties.len(),
        groups = groups.len(),
        devices = devices.len(),
        rooms = temperatures.len(),
        appliances = appliances.len(),
        "fetched hub snapshot"
    );

    Ok(Snapshot {
        properties: properties.into_iter().map(Into::into).collect(),
        home_mode: home_mode.as_deref().map(HomeMode::from_wire),
        groups: groups.into_iter().map(Into::into).collect(),
        devices: devices.into_iter().map(Into::into).collect(),
        temperatures: temperatures.into_iter().map(Into::into).collect(),
        appliances: appliances.into_iter().map(Into::into).collect(),
        fetched_at: Utc::now(),
    })
}
