// Room endpoints
//
// Rooms are visible device groups; their temperatures come from the
// HVAC location list, joined by name.

use serde_json::json;
use tracing::debug;

use crate::error::Error;
use crate::rpc::client::WiserClient;
use crate::rpc::models::{
    GroupDetail, GroupsResponse, LocationTarget, LocationTemp, LocationTempResponse,
    SetLocationTempRequest,
};
use crate::rpc::paths;

impl WiserClient {
    /// List device groups, visible or not.
    ///
    /// `POST /rpc/devicegroup/get_groups` with `{}`
    pub async fn get_groups(&self) -> Result<Vec<GroupDetail>, Error> {
        debug!("fetching device groups");
        let resp: GroupsResponse = self.post(paths::GET_GROUPS, &json!({})).await?;
        Ok(resp.group_details)
    }

    /// Current and target temperature for every location.
    ///
    /// `POST /rpc/hvac/get_all_loc_temp` with `{}`
    pub async fn get_all_loc_temp(&self) -> Result<Vec<LocationTemp>, Error> {
        debug!("fetching location temperatures");
        let resp: LocationTempResponse = self.post(paths::GET_ALL_LOC_TEMP, &json!({})).await?;
        Ok(resp.location_temp_details)
    }

    /// Set the target temperature of one location. No range checks here.
    ///
    /// `POST /rpc/hvac/set_loc_temp` with
    /// `{"targetTemp": [{"locationId": ..., "targetValue": ...}]}`
    pub async fn set_loc_temp(&self, location: &str, target: f64) -> Result<(), Error> {
        debug!(location, target, "setting location temperature");
        let body = SetLocationTempRequest {
            target_temp: vec![LocationTarget {
                location_id: location.to_owned(),
                target_value: target,
            }],
        };
        self.post_command(paths::SET_LOC_TEMP, &body).await
    }
}
