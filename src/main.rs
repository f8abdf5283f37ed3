//! esmc CLI - incremental dual-target build orchestrator
//!
//! Usage: esmc [COMMAND] [FLAGS]
//!
//! Commands:
//!   (none)  Type check, lint, compile both targets, generate bridge files
//!   lint    Lint changed sources only
//!   build   Compile changed sources for both targets only

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use esmc::infrastructure::events::command_name;
use esmc::presentation::Cli;

mod commands;
mod ui;

const LOG_ENV: &str = "ESMC_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match commands::cmd_pipeline(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, cli.json, command_name(cli.pipeline_command()));
            ExitCode::FAILURE
        }
    }
}

/// Diagnostic logs go to stderr; `ESMC_LOG` takes precedence over `-v`
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "warn,esmc=debug",
            _ => "warn,esmc=trace",
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
