//! ghenv - sync .env files with GitHub repository secrets and variables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ghenv::cli::output;
use ghenv::cli::{execute, Cli};
use ghenv::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("GHENV_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ghenv=debug")
        } else {
            EnvFilter::new("ghenv=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::GhNotFound => Some("install it from https://cli.github.com"),
            Error::Unauthenticated => Some("run: gh auth login"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
