// Hub RPC surface
//
// One `WiserClient` plus the endpoint groups the hub exposes under `/rpc`.

pub mod appliances;
pub mod client;
pub mod devices;
pub mod mode;
pub mod models;
pub mod rooms;
pub mod system;

pub use client::WiserClient;
pub use models::{
    ApplianceDetail, ApplianceId, ApplianceStateChange, DeviceDetail, GroupDetail, LocationTarget,
    LocationTemp, PropertyDetail, SetApplianceStateRequest, SetHomeModeRequest,
    SetLocationTempRequest,
};

/// RPC paths, relative to the hub root.
pub mod paths {
    pub const GET_PROPERTIES: &str = "/rpc/diagnostic/get_properties";
    pub const GET_HOME_MODE: &str = "/rpc/mode/get_home_mode";
    pub const SET_HOME_MODE: &str = "/rpc/mode/set_home_mode";
    pub const GET_GROUPS: &str = "/rpc/devicegroup/get_groups";
    pub const DEVICE_LIST: &str = "/rpc/homedevice/device_list";
    pub const GET_ALL_LOC_TEMP: &str = "/rpc/hvac/get_all_loc_temp";
    pub const SET_LOC_TEMP: &str = "/rpc/hvac/set_loc_temp";
    pub const GET_APPLIANCES: &str = "/rpc/loadmanagement/get_appliances";
    pub const SET_APPLIANCE_STATE: &str = "/rpc/loadmanagement/set_appliance_state";
}
