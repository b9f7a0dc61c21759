//! Appliance command handlers.

use tabled::Tabled;
use wisersmart_core::{Appliance, Hub};

use crate::cli::{AppliancesArgs, AppliancesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output::{self, on_off, should_color};

#[derive(Tabled)]
struct ApplianceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Power (W)")]
    power: String,
}

fn row(a: &Appliance, color: bool) -> ApplianceRow {
    ApplianceRow {
        name: a.name.clone(),
        id: a.id.as_ref().map(ToString::to_string).unwrap_or_default(),
        state: on_off(a.on, color),
        power: a.power_consumption.map(|w| format!("{w:.0}")).unwrap_or_default(),
    }
}

fn detail(a: &Appliance) -> String {
    [
        format!("Name:  {}", a.name),
        format!(
            "ID:    {}",
            a.id.as_ref().map_or_else(|| "-".into(), ToString::to_string)
        ),
        format!("State: {}", on_off(a.on, false)),
        format!(
            "Power: {}",
            a.power_consumption
                .map_or_else(|| "-".into(), |w| format!("{w:.0} W"))
        ),
    ]
    .join("\n")
}

pub async fn handle(
    hub: &Hub,
    args: AppliancesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AppliancesCommand::List => {
            let color = should_color(&global.color);
            let appliances = hub.appliances().await?;
            let out = output::render_list(
                &global.output,
                &appliances,
                |a| row(a, color),
                |a| a.name.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AppliancesCommand::Get { name } => {
            let appliance = hub
                .appliance(&name)
                .await?
                .ok_or_else(|| CliError::not_found("appliance", &name, "appliances list"))?;
            let out = output::render_single(&global.output, &appliance, detail, |a| {
                on_off(a.on, false)
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AppliancesCommand::On { name } => switch(hub, &name, true, global).await,
        AppliancesCommand::Off { name } => switch(hub, &name, false, global).await,
    }
}

async fn switch(hub: &Hub, name: &str, on: bool, global: &GlobalOpts) -> Result<(), CliError> {
    // The hub facade treats an unknown name as a no-op; the CLI reports it.
    if !hub.set_appliance_state(name, on).await? {
        return Err(CliError::not_found("appliance", name, "appliances list"));
    }
    if !global.quiet {
        eprintln!("{name} switched {}", on_off(Some(on), false));
    }
    Ok(())
}
