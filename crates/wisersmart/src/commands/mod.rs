//! Command dispatch: bridges CLI args -> Hub calls -> output formatting.

pub mod appliances;
pub mod config_cmd;
pub mod devices;
pub mod mode;
pub mod rooms;
pub mod status;

use wisersmart_core::Hub;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a hub-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, hub: &Hub, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Status => status::handle(hub, global).await,
        Command::Devices(args) => devices::handle(hub, args, global).await,
        Command::Rooms(args) => rooms::handle(hub, args, global).await,
        Command::Appliances(args) => appliances::handle(hub, args, global).await,
        Command::Mode(args) => mode::handle(hub, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
