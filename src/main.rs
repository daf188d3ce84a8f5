mod catalog;
mod cli;
mod commands;
mod config;
mod game_data;
mod gpu;
mod logging;
mod paths;
mod progress;
mod runner;
mod swap;
mod tuning;

use crate::cli::Cli;
use crate::config::{load_cfg, load_cfg_from};
use crate::logging::init_logger;

use clap::Parser;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => load_cfg_from(path),
        None => load_cfg(),
    };

    match commands::run(cli.command, &config, cli.config.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
