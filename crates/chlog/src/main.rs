//! chlog - Append release entries to a changelog

mod cli;
mod exit_codes;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use cli::{output, Cli, LogFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match cli.execute() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(err) => {
            output::error(&err);
            ExitCode::from(exit_codes::for_error(&err))
        }
    }
}

/// Set up a single stdout layer.
///
/// The level comes from RUST_LOG, else from the verbosity flags (default: info).
fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match cli.log_format {
        LogFormat::Text => fmt::layer()
            .with_target(false)
            .with_ansi(console::colors_enabled())
            .with_writer(std::io::stdout)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stdout)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .init();
}
