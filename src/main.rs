//! Binary entry point: parse arguments, run, print the change set.

use std::io;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use git_changeset::cli::{Cli, OutputFormat};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();
    let config = cli.to_config()?;
    let report = git_changeset::run(&config, &cli.run_options())?;

    let stdout = io::stdout().lock();
    match cli.format {
        OutputFormat::Text => git_changeset::write_text(&report, stdout)?,
        OutputFormat::Json => git_changeset::write_json(&report, stdout)?,
    }
    Ok(())
}
