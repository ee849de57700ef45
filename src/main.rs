mod app;
mod cli;
mod config;
mod consts;
mod core;
mod engine;
mod error;
mod output;
mod pricing;
mod source;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use app::{CommandContext, build_engine, run_command};
use cli::{Cli, Commands, LogLevel};
use config::Config;
use output::error_json;

/// Structured logs go to stderr; stdout is reserved for reports.
fn init_logging(level: LogLevel) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));
    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);
    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

fn main() -> ExitCode {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    init_logging(cli.effective_log_level());
    if let Some(path) = &config.loaded_from {
        tracing::info!(path = %path.display(), "loaded config");
    }
    for problem in &config.problems {
        tracing::warn!(%problem, "skipped config file");
    }

    let ctx = CommandContext::from_cli(&cli);
    let command = Commands::resolve(cli.command);
    let result = build_engine(&cli, &config).and_then(|engine| run_command(command, &engine, &ctx));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "query failed");
            if cli.json {
                println!("{}", error_json(&e.to_string()));
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
