use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romcheck_lib::generate_fixdat;
use romcheck_lib::settings::load_settings;

use crate::CliError;

use super::{load_catalog, runtime};

/// Run the fixdat command.
pub(crate) fn run_fixdat(
    dat: PathBuf,
    candidates: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let mut options = load_settings().report_options();
    options.fixdat = true;
    if let Some(dir) = output {
        options.fixdat_dir = dir;
    }

    let catalog = load_catalog(&dat, candidates.as_deref())?;
    let name = catalog.dat.display_name();

    let rt = runtime()?;
    match rt.block_on(generate_fixdat(&catalog.dat, &catalog.candidates, &options))? {
        Some(path) => {
            log::info!(
                "{} {}",
                "Wrote".if_supports_color(Stdout, |t| t.bold()),
                path.display().if_supports_color(Stdout, |t| t.cyan()),
            );
        }
        None => {
            log::info!(
                "{}: {}",
                name,
                "every game was found, no fixdat needed".if_supports_color(Stdout, |t| t.green()),
            );
        }
    }

    Ok(())
}
