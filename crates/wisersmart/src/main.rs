mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::{CommandFactory, FromArgMatches};
use tracing_subscriber::EnvFilter;

use wisersmart_core::Hub;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments, keeping the matches to tell flags from defaults
    let matches = Cli::command().get_matches();
    let mut cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    let defaults = config::load_config_or_default().defaults;
    config::apply_output_defaults(&mut cli.global, &matches, &defaults);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a hub
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "wisersmart", &mut std::io::stdout());
            Ok(())
        }

        // All other commands talk to the hub
        cmd => {
            let cfg = config::load_config()?;
            let profile_name = config::active_profile_name(&cli.global, &cfg);
            let hub_config = config::build_hub_config(&cli.global, &cfg, &profile_name)?;
            let hub = Hub::new(hub_config)?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &hub, &cli.global)
                .await
                .map_err(|e| e.for_profile(&profile_name))
        }
    }
}
