//! romcheck CLI
//!
//! Command-line interface for checking ROM collections against DAT catalogs
//! and generating fixdats of what is missing.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_path, run_config_show};
use commands::fixdat::run_fixdat;
use commands::status::run_status;

pub(crate) use error::CliError;
pub(crate) use logger::log_blank;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Status(args) => run_status(args),
        Commands::Fixdat {
            dat,
            candidates,
            output,
        } => run_fixdat(dat, candidates, output),
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => run_config_show(),
                ConfigAction::Path => run_config_path(),
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
