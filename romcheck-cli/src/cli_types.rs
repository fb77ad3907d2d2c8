//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use romcheck_lib::ReportOptions;
use romcheck_lib::settings::Settings;

#[derive(Parser)]
#[command(name = "romcheck")]
#[command(about = "Report ROM collection completeness against DAT catalogs", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// ROM type filters shared by commands that report on games.
#[derive(Args, Clone, Default)]
pub(crate) struct FilterArgs {
    /// Only report BIOS games
    #[arg(long, conflicts_with_all = ["only_device", "only_retail", "no_bios"])]
    pub only_bios: bool,

    /// Only report device games
    #[arg(long, conflicts_with_all = ["only_retail", "no_device"])]
    pub only_device: bool,

    /// Only report retail releases
    #[arg(long)]
    pub only_retail: bool,

    /// Don't report BIOS games separately
    #[arg(long)]
    pub no_bios: bool,

    /// Don't report device games separately
    #[arg(long)]
    pub no_device: bool,
}

#[derive(Args, Clone)]
pub(crate) struct StatusArgs {
    /// DAT files to check the collection against
    #[arg(short, long = "dat", required = true)]
    pub dats: Vec<PathBuf>,

    /// Candidate manifests, one per --dat in the same order (omit to treat every game as unmatched)
    #[arg(short, long = "candidates")]
    pub candidates: Vec<PathBuf>,

    /// Candidates were written: report output paths
    #[arg(short, long)]
    pub write: bool,

    /// Files were listed rather than matched against the DATs
    #[arg(long)]
    pub no_match: bool,

    /// Generate a fixdat for every DAT with missing games
    #[arg(long)]
    pub fixdat: bool,

    /// Directory to write fixdats to
    #[arg(long)]
    pub fixdat_dir: Option<PathBuf>,

    /// Path of the CSV report (defaults to a timestamped file in the current directory)
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Files reported as duplicates
    #[arg(long, value_delimiter = ',')]
    pub duplicate: Vec<PathBuf>,

    /// Files reported as unused
    #[arg(long, value_delimiter = ',')]
    pub unused: Vec<PathBuf>,

    /// Files reported as deleted
    #[arg(long, value_delimiter = ',')]
    pub deleted: Vec<PathBuf>,

    #[command(flatten)]
    pub filters: FilterArgs,
}

impl StatusArgs {
    /// Report options from `settings`, overridden by these arguments.
    pub(crate) fn report_options(&self, settings: &Settings) -> ReportOptions {
        let mut options = settings.report_options();
        options.dat_matching = !self.no_match;
        options.write |= self.write;
        options.fixdat |= self.fixdat;
        if let Some(dir) = &self.fixdat_dir {
            options.fixdat_dir = dir.clone();
        }
        if let Some(report) = &self.report {
            options.report_output = Some(report.clone());
        }
        self.filters.apply(&mut options);
        options
    }
}

impl FilterArgs {
    pub(crate) fn apply(&self, options: &mut ReportOptions) {
        options.only_bios |= self.only_bios;
        options.only_device |= self.only_device;
        options.only_retail |= self.only_retail;
        options.no_bios |= self.no_bios;
        options.no_device |= self.no_device;
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Report found, incomplete and missing games for one or more DATs
    Status(StatusArgs),

    /// Write a fixdat of the games a collection is missing
    Fixdat {
        /// DAT file the collection was matched against
        #[arg(short, long)]
        dat: PathBuf,

        /// Candidate manifest for the DAT (omit to treat every game as missing)
        #[arg(short, long)]
        candidates: Option<PathBuf>,

        /// Directory to write the fixdat to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the options it produces
    Show,
    /// Print the settings file path
    Path,
}
