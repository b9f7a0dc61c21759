// Home mode endpoints

use serde_json::json;
use tracing::debug;

use crate::error::Error;
use crate::rpc::client::WiserClient;
use crate::rpc::models::{HomeModeResponse, SetHomeModeRequest};
use crate::rpc::paths;

impl WiserClient {
    /// Get the house-wide operating mode as the raw hub string.
    ///
    /// `POST /rpc/mode/get_home_mode` with `{}`
    pub async fn get_home_mode(&self) -> Result<Option<String>, Error> {
        debug!("fetching home mode");
        let resp: HomeModeResponse = self.post(paths::GET_HOME_MODE, &json!({})).await?;
        Ok(resp.home_mode)
    }

    /// Change the house-wide operating mode.
    ///
    /// `POST /rpc/mode/set_home_mode`
    pub async fn set_home_mode(&self, request: &SetHomeModeRequest) -> Result<(), Error> {
        debug!(
            home_mode = %request.home_mode,
            hc_mode = %request.hc_mode,
            anti_freeze = request.anti_freeze,
            "setting home mode"
        );
        self.post_command(paths::SET_HOME_MODE, request).await
    }
}
