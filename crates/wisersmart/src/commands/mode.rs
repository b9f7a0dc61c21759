//! Home mode command handlers.

use serde::Serialize;
use wisersmart_core::{Command as HubCommand, HcMode, HomeMode, Hub};

use crate::cli::{GlobalOpts, ModeArgs, ModeCommand};
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct ModeView {
    home_mode: Option<HomeMode>,
}

pub async fn handle(hub: &Hub, args: ModeArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ModeCommand::Get => {
            let view = ModeView {
                home_mode: hub.home_mode().await?,
            };
            let render = |v: &ModeView| {
                v.home_mode
                    .as_ref()
                    .map_or_else(|| "-".into(), ToString::to_string)
            };
            let out = output::render_single(&global.output, &view, render, render);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ModeCommand::Set { mode, hc, until } => {
            let home_mode = HomeMode::from(mode);
            let hc_mode = HcMode::from(hc);
            if until.is_some() && !home_mode.is_holiday() {
                tracing::warn!(mode = %home_mode, "--until only affects holiday mode");
            }

            hub.execute(HubCommand::SetHomeMode {
                hc_mode,
                home_mode: home_mode.clone(),
                come_back: until,
            })
            .await?;

            if !global.quiet {
                match until {
                    Some(t) => eprintln!(
                        "Home mode set to {home_mode} ({hc_mode}) until {}",
                        t.to_rfc3339()
                    ),
                    None => eprintln!("Home mode set to {home_mode} ({hc_mode})"),
                }
            }
            Ok(())
        }
    }
}
