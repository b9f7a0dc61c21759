// Diagnostic endpoints
//
// Controller-level properties: host name, cloud link, MAC address.

use serde_json::json;
use tracing::debug;

use crate::error::Error;
use crate::rpc::client::WiserClient;
use crate::rpc::models::{PropertiesResponse, PropertyDetail};
use crate::rpc::paths;

/// Gateway host name (the controller's display name).
pub const PROP_HOST_NAME: &str = "ehc.gw.host.name";
/// Cloud connection status.
pub const PROP_CLOUD_STATUS: &str = "ehc.wcs2.cloud.status";
/// Gateway MAC address.
pub const PROP_MAC_ADDRESS: &str = "ehc.version.macaddress";

/// The property set requested on every refresh.
pub const CONTROLLER_PROPERTIES: [&str; 3] = [PROP_HOST_NAME, PROP_CLOUD_STATUS, PROP_MAC_ADDRESS];

impl WiserClient {
    /// Fetch named system properties.
    ///
    /// `POST /rpc/diagnostic/get_properties` with `{"propertyNames": [...]}`
    pub async fn get_properties(&self, names: &[&str]) -> Result<Vec<PropertyDetail>, Error> {
        debug!(count = names.len(), "fetching system properties");
        let resp: PropertiesResponse = self
            .post(paths::GET_PROPERTIES, &json!({ "propertyNames": names }))
            .await?;
        Ok(resp.property_details)
    }
}
