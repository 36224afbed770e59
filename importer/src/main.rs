use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use translation_importer::{Cli, run};

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    Ok(run(cli)?)
}
