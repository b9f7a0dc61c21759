//! Device command handlers.

use tabled::Tabled;
use wisersmart_core::{Device, Hub};

use crate::cli::{DevicesArgs, DevicesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Room")]
    location: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Power")]
    power: String,
    #[tabled(rename = "Battery")]
    battery: String,
}

impl From<&Device> for DeviceRow {
    fn from(d: &Device) -> Self {
        Self {
            name: d.name.clone(),
            model: d.model_id.clone().unwrap_or_default(),
            location: d.location.clone().unwrap_or_default(),
            status: d.status.clone().unwrap_or_default(),
            power: d.power_type.as_ref().map(ToString::to_string).unwrap_or_default(),
            battery: d.battery_level.clone().unwrap_or_default(),
        }
    }
}

fn detail(d: &Device) -> String {
    let mut lines = vec![
        format!("Name:     {}", d.name),
        format!("Model:    {}", d.model_id.as_deref().unwrap_or("-")),
        format!("Room:     {}", d.location.as_deref().unwrap_or("-")),
        format!("Status:   {}", d.status.as_deref().unwrap_or("-")),
        format!(
            "Power:    {}",
            d.power_type
                .as_ref()
                .map_or_else(|| "-".into(), ToString::to_string)
        ),
    ];
    if let Some(ref level) = d.battery_level {
        lines.push(format!("Battery:  {level}"));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(hub: &Hub, args: DevicesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        DevicesCommand::List => {
            let devices = hub.devices().await?;
            let out = output::render_list(&global.output, &devices, |d| DeviceRow::from(d), |d| {
                d.name.clone()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DevicesCommand::Get { name } => {
            let device = hub
                .device(&name)
                .await?
                .ok_or_else(|| CliError::not_found("device", &name, "devices list"))?;
            let out = output::render_single(&global.output, &device, detail, |d| d.name.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
