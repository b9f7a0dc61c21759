// ── Domain model ──
//
// Canonical types exposed to consumers. Wire payloads from
// wisersmart-api are converted into these in `crate::convert`.

pub mod appliance;
pub mod device;
pub mod mode;
pub mod room;
pub mod system;

pub use appliance::{Appliance, ApplianceId};
pub use device::{Device, PowerType};
pub use mode::{HcMode, HomeMode};
pub use room::{Room, RoomGroup};
pub use system::SystemProperty;
