mod cli;
mod commands;
mod errors;
mod save;
mod utils;
mod walk;

use crate::errors::{SaveNameError, SaveNameResult};
use crate::utils::Config;
use clap::Parser;
use cli::Cli;
use directories::ProjectDirs;
use std::fs;
use tracing_subscriber::fmt::time;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

fn init_tracing() {
    let fmt_layer = fmt::layer()
        .pretty()
        .with_writer(std::io::stderr)
        .with_thread_ids(true)
        .with_timer(time::UtcTime::rfc_3339());

    Registry::default()
        .with(EnvFilter::from_default_env())
        .with(fmt_layer)
        .init();
}

fn main() -> SaveNameResult<()> {
    init_tracing();

    tracing::debug!("CLI starting up");
    let cli = Cli::parse();

    let proj_dirs = ProjectDirs::from("dev", "savename", "savename")
        .ok_or_else(|| SaveNameError::Other("Unable to determine project directories".into()))?;

    let config_dir = proj_dirs.config_dir();
    fs::create_dir_all(config_dir)?;

    let mut config = Config::load(config_dir)?;

    commands::handle_command(cli.command, &mut config)
}
