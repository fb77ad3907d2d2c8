pub(crate) mod config;
pub(crate) mod fixdat;
pub(crate) mod status;

use std::path::Path;

use romcheck_dat::DatFile;
use romcheck_lib::WriteCandidate;
use romcheck_lib::manifest::{load_manifest, resolve_manifest};

use crate::CliError;

/// A parsed DAT with the candidates resolved against it.
pub(crate) struct Catalog {
    pub dat: DatFile,
    pub candidates: Vec<WriteCandidate>,
}

/// Read `dat_path` and, if given, resolve the manifest at `manifest_path` against it.
pub(crate) fn load_catalog(
    dat_path: &Path,
    manifest_path: Option<&Path>,
) -> Result<Catalog, CliError> {
    let dat = romcheck_dat::parse_dat_file(dat_path)?;
    log::debug!(
        "Loaded {} ({} games) from {}",
        dat.display_name(),
        dat.games.len(),
        dat_path.display(),
    );

    let candidates = match manifest_path {
        Some(path) => {
            let entries = load_manifest(path)?;
            resolve_manifest(&dat, &entries)?
        }
        None => Vec::new(),
    };

    Ok(Catalog { dat, candidates })
}

fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))
}
