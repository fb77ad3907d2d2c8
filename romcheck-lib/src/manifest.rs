//! JSON candidate manifests.
//!
//! Candidate resolution happens upstream; its output reaches the reporting
//! stage as a manifest naming games and ROMs from the DAT:
//!
//! ```json
//! [
//!   {
//!     "game": "Tetris (World)",
//!     "patched": false,
//!     "roms": [
//!       { "rom": "Tetris (World).gb", "input": "/in/tetris.zip", "output": "/out/Tetris (World).gb" }
//!     ]
//!   }
//! ]
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use romcheck_dat::{DatFile, DatGame};

use crate::candidate::{RomWithFiles, WriteCandidate};
use crate::error::ReportError;

/// One candidate as written in a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Name of the game in the DAT
    pub game: String,
    #[serde(default)]
    pub patched: bool,
    /// Name of the patched game, when patching produced a differently named game
    #[serde(default)]
    pub patched_name: Option<String>,
    #[serde(default)]
    pub roms: Vec<ManifestRom>,
}

/// One resolved ROM as written in a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestRom {
    /// Name of the ROM within its game
    pub rom: String,
    pub input: PathBuf,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Parse manifest JSON text.
pub fn parse_manifest(json: &str) -> Result<Vec<ManifestEntry>, ReportError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a manifest file.
pub fn load_manifest(path: &Path) -> Result<Vec<ManifestEntry>, ReportError> {
    let contents = std::fs::read_to_string(path)?;
    parse_manifest(&contents)
}

/// Turn manifest entries into candidates against `dat`.
///
/// Entries naming games that aren't in `dat` are an error, as are ROMs their
/// game doesn't declare.
pub fn resolve_manifest(
    dat: &DatFile,
    entries: &[ManifestEntry],
) -> Result<Vec<WriteCandidate>, ReportError> {
    let games_by_name: HashMap<&str, &DatGame> =
        dat.games.iter().map(|g| (g.name.as_str(), g)).collect();

    entries
        .iter()
        .map(|entry| -> Result<WriteCandidate, ReportError> {
            let game = games_by_name
                .get(entry.game.as_str())
                .ok_or_else(|| ReportError::unknown_game(dat.display_name(), &entry.game))?;

            let roms_with_files = entry
                .roms
                .iter()
                .map(|m| -> Result<RomWithFiles, ReportError> {
                    let rom = game
                        .roms
                        .iter()
                        .find(|r| r.name == m.rom)
                        .ok_or_else(|| ReportError::unknown_rom(&game.name, &m.rom))?;
                    let mut rwf = RomWithFiles::new(rom.clone(), &m.input);
                    rwf.output_file = m.output.clone();
                    Ok(rwf)
                })
                .collect::<Result<Vec<_>, _>>()?;

            let mut game = (*game).clone();
            if let Some(name) = &entry.patched_name {
                game.name = name.clone();
                game.description = name.clone();
            }

            Ok(WriteCandidate::new(game, roms_with_files).patched(entry.patched))
        })
        .collect()
}
