//! `status`: hub identity and house-wide mode.

use serde::Serialize;
use wisersmart_core::Hub;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct StatusView {
    controller_name: Option<String>,
    cloud_connection: Option<String>,
    mac_address: Option<String>,
    home_mode: Option<String>,
}

fn detail(s: &StatusView) -> String {
    [
        format!("Hub:       {}", s.controller_name.as_deref().unwrap_or("-")),
        format!("Cloud:     {}", s.cloud_connection.as_deref().unwrap_or("-")),
        format!("MAC:       {}", s.mac_address.as_deref().unwrap_or("-")),
        format!("Home mode: {}", s.home_mode.as_deref().unwrap_or("-")),
    ]
    .join("\n")
}

pub async fn handle(hub: &Hub, global: &GlobalOpts) -> Result<(), CliError> {
    let view = StatusView {
        controller_name: hub.controller_name().await?,
        cloud_connection: hub.cloud_connection().await?,
        mac_address: hub.mac_address().await?,
        home_mode: hub.home_mode().await?.map(|m| m.to_string()),
    };

    let out = output::render_single(&global.output, &view, detail, |s| {
        s.controller_name.clone().unwrap_or_default()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
