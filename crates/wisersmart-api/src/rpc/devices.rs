// Paired device endpoints

use serde_json::json;
use tracing::debug;

use crate::error::Error;
use crate::rpc::client::WiserClient;
use crate::rpc::models::{DeviceDetail, DeviceListResponse};
use crate::rpc::paths;

impl WiserClient {
    /// List every device paired with the hub.
    ///
    /// `POST /rpc/homedevice/device_list` with `{}`
    pub async fn device_list(&self) -> Result<Vec<DeviceDetail>, Error> {
        debug!("fetching device list");
        let resp: DeviceListResponse = self.post(paths::DEVICE_LIST, &json!({})).await?;
        Ok(resp.device)
    }
}
