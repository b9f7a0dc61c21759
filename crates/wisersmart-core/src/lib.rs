// wisersmart-core: Cached hub facade between wisersmart-api and consumers.

pub mod command;
pub mod config;
pub mod convert;
pub mod error;
pub mod hub;
pub mod model;
pub mod store;
pub mod temperature;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::{Command, CommandResult};
pub use config::HubConfig;
pub use error::CoreError;
pub use hub::Hub;
pub use store::{Snapshot, SnapshotStore};
pub use temperature::{TEMP_MAXIMUM, TEMP_MINIMUM, TEMP_OFF, clamp_temperature, is_valid_temperature};

pub use model::{
    Appliance, ApplianceId, Device, HcMode, HomeMode, PowerType, Room, RoomGroup, SystemProperty,
};
