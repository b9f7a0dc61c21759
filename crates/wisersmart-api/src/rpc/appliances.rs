// Load-management endpoints

use serde_json::json;
use tracing::debug;

use crate::error::Error;
use crate::rpc::client::WiserClient;
use crate::rpc::models::{
    ApplianceDetail, ApplianceId, ApplianceStateChange, AppliancesResponse,
    SetApplianceStateRequest,
};
use crate::rpc::paths;

impl WiserClient {
    /// List load-managed appliances.
    ///
    /// `POST /rpc/loadmanagement/get_appliances` with `{}`
    pub async fn get_appliances(&self) -> Result<Vec<ApplianceDetail>, Error> {
        debug!("fetching appliances");
        let resp: AppliancesResponse = self.post(paths::GET_APPLIANCES, &json!({})).await?;
        Ok(resp.appliance_details)
    }

    /// Switch one appliance on or off by its hub identifier.
    ///
    /// `POST /rpc/loadmanagement/set_appliance_state` with
    /// `{"applianceState": [{"applianceId": ..., "state": ...}]}`
    pub async fn set_appliance_state(&self, id: &ApplianceId, on: bool) -> Result<(), Error> {
        debug!(appliance_id = %id, on, "setting appliance state");
        let body = SetApplianceStateRequest {
            appliance_state: vec![ApplianceStateChange {
                appliance_id: id.clone(),
                state: on,
            }],
        };
        self.post_command(paths::SET_APPLIANCE_STATE, &body).await
    }
}
