use retail_ledger::{config::Config, run};

use clap::Parser;
use std::fs::File;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// Diagnostics go to stderr, so stdout only ever carries the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), run::Error> {
    let config = Config::parse();
    init_tracing();

    let stdout = std::io::stdout();
    match &config.input {
        Some(path) => run::run(File::open(path)?, stdout.lock(), &config),
        None => run::run_demo(stdout.lock(), &config),
    }
}
