//! Fixdat generation: a reduced DAT of the games that weren't fully found.

use std::collections::HashSet;
use std::path::PathBuf;

use romcheck_dat::{DatFile, DatGame, DatHeader};

use crate::candidate::WriteCandidate;
use crate::error::ReportError;
use crate::options::ReportOptions;

/// Author recorded in generated fixdat headers.
const FIXDAT_AUTHOR: &str = "romcheck";

/// Games from `dat` with at least one ROM that no candidate resolved.
///
/// Every candidate counts, not only the first one proposed for a game.
pub fn missing_games<'a>(dat: &'a DatFile, candidates: &[WriteCandidate]) -> Vec<&'a DatGame> {
    let resolved: HashSet<String> = candidates
        .iter()
        .flat_map(|c| c.roms_with_files.iter())
        .map(|rwf| rwf.rom.hash_code())
        .collect();

    dat.games
        .iter()
        .filter(|game| {
            game.roms
                .iter()
                .any(|rom| !resolved.contains(&rom.hash_code()))
        })
        .collect()
}

/// Build the fixdat for `dat`, or `None` if nothing is missing.
pub fn build_fixdat(dat: &DatFile, candidates: &[WriteCandidate]) -> Option<DatFile> {
    let games: Vec<DatGame> = missing_games(dat, candidates)
        .into_iter()
        .cloned()
        .collect();
    if games.is_empty() {
        return None;
    }

    let now = chrono::Local::now();
    let source = &dat.header;
    let header = DatHeader {
        name: "fixdat".to_string(),
        description: format!("{} fixdat", source.qualified_name()),
        version: now.format("%Y%m%d-%H%M%S").to_string(),
        date: now.format("%Y-%m-%d").to_string(),
        author: FIXDAT_AUTHOR.to_string(),
        source: Some(Box::new(source.clone())),
        ..Default::default()
    };

    Some(DatFile::new(header, games))
}

/// Generate and write the fixdat for `dat` into `options.fixdat_dir`.
///
/// Returns the written path, or `None` when fixdats are disabled or every
/// game was fully found. Directory creation and write failures are returned
/// as-is.
pub async fn generate_fixdat(
    dat: &DatFile,
    candidates: &[WriteCandidate],
    options: &ReportOptions,
) -> Result<Option<PathBuf>, ReportError> {
    if !options.fixdat {
        return Ok(None);
    }

    let Some(fixdat) = build_fixdat(dat, candidates) else {
        log::debug!("{}: no missing games, skipping fixdat", dat.display_name());
        return Ok(None);
    };

    let dir = &options.fixdat_dir;
    if !tokio::fs::try_exists(dir).await? {
        tokio::fs::create_dir_all(dir).await?;
    }

    let xml = romcheck_dat::to_xml_string(&fixdat)?;
    let path = dir.join(fixdat.filename());
    tokio::fs::write(&path, xml).await?;

    log::debug!(
        "{}: wrote fixdat with {} games to {}",
        dat.display_name(),
        fixdat.games.len(),
        path.display(),
    );
    Ok(Some(path))
}

#[cfg(test)]
#[path = "tests/fixdat_tests.rs"]
mod tests;
