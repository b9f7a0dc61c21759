// wisersmart-api: Async Rust client for the Wiser Smart hub's local RPC interface

pub mod error;
pub mod rpc;
pub mod transport;

pub use error::Error;
pub use rpc::models::{
    ApplianceDetail, ApplianceId, DeviceDetail, GroupDetail, LocationTemp, PropertyDetail,
    SetHomeModeRequest,
};
pub use rpc::system::{CONTROLLER_PROPERTIES, PROP_CLOUD_STATUS, PROP_HOST_NAME, PROP_MAC_ADDRESS};
pub use rpc::{WiserClient, paths};
pub use transport::{DEFAULT_TIMEOUT_SECS, TransportConfig};
