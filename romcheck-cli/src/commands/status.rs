use std::path::PathBuf;

use futures::future::join_all;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romcheck_lib::report::default_report_path;
use romcheck_lib::settings::load_settings;
use romcheck_lib::{
    DatStatus, GameStatus, ReportError, ReportOptions, build_report, generate_fixdat,
    write_report,
};

use crate::CliError;
use crate::cli_types::StatusArgs;

use super::{Catalog, load_catalog, runtime};

/// Status and fixdat outcome for one catalog.
struct CatalogResult<'a> {
    status: DatStatus<'a>,
    fixdat: Result<Option<PathBuf>, ReportError>,
}

async fn check_catalog<'a>(catalog: &'a Catalog, options: &ReportOptions) -> CatalogResult<'a> {
    let status = DatStatus::new(&catalog.dat, &catalog.candidates);
    let fixdat = generate_fixdat(&catalog.dat, &catalog.candidates, options).await;
    CatalogResult { status, fixdat }
}

/// Run the status command.
pub(crate) fn run_status(args: StatusArgs) -> Result<(), CliError> {
    let settings = load_settings();
    let options = args.report_options(&settings);

    if !args.candidates.is_empty() && args.candidates.len() != args.dats.len() {
        return Err(CliError::usage(format!(
            "Got {} candidate manifests for {} DATs; pass one --candidates per --dat",
            args.candidates.len(),
            args.dats.len(),
        )));
    }

    let catalogs = args
        .dats
        .iter()
        .enumerate()
        .map(|(i, dat)| load_catalog(dat, args.candidates.get(i).map(PathBuf::as_path)))
        .collect::<Result<Vec<_>, _>>()?;

    log::info!(
        "Checking {} {}",
        catalogs.len(),
        if catalogs.len() == 1 { "DAT" } else { "DATs" },
    );
    crate::log_blank();

    let rt = runtime()?;
    let results = rt.block_on(join_all(
        catalogs.iter().map(|catalog| check_catalog(catalog, &options)),
    ));

    let mut fixdat_failures = 0;
    for result in &results {
        let name = result.status.dat_name();
        let summary = result.status.render_console(&options);
        if summary.is_empty() {
            log::info!(
                "{}: {}",
                name.if_supports_color(Stdout, |t| t.bold()),
                "no games to report".if_supports_color(Stdout, |t| t.dimmed()),
            );
        } else {
            log::info!("{}: {}", name.if_supports_color(Stdout, |t| t.bold()), summary);
        }
        log::debug!(
            "{}: {} input files used",
            name,
            result.status.input_files().len(),
        );

        match &result.fixdat {
            Ok(Some(path)) => {
                log::info!(
                    "  Fixdat: {}",
                    path.display().if_supports_color(Stdout, |t| t.cyan()),
                );
            }
            Ok(None) => {}
            Err(e) => {
                fixdat_failures += 1;
                log::warn!("{}: failed to write fixdat: {}", name, e);
            }
        }
    }

    let loose_files: Vec<(GameStatus, Vec<PathBuf>)> = [
        (GameStatus::Duplicate, args.duplicate),
        (GameStatus::Unused, args.unused),
        (GameStatus::Deleted, args.deleted),
    ]
    .into_iter()
    .filter(|(_, files)| !files.is_empty())
    .collect();

    let statuses: Vec<DatStatus<'_>> = results.into_iter().map(|r| r.status).collect();
    let csv = build_report(&statuses, &loose_files, &options)?;
    let report_path = options
        .report_output
        .clone()
        .unwrap_or_else(default_report_path);
    rt.block_on(write_report(&report_path, &csv))?;

    crate::log_blank();
    if !statuses.iter().any(|s| s.any_games_found(&options)) {
        log::warn!("No games were found in any DAT");
    }
    if fixdat_failures > 0 {
        log::warn!(
            "{} fixdat(s) could not be written",
            fixdat_failures.if_supports_color(Stdout, |t| t.yellow()),
        );
    }

    Ok(())
}
