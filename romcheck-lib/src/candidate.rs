//! Resolved write candidates handed to the reporting stage.

use std::path::{Path, PathBuf};

use romcheck_dat::{DatGame, DatRom};

/// A ROM paired with the file that satisfied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomWithFiles {
    pub rom: DatRom,
    /// File the ROM was found in
    pub input_file: PathBuf,
    /// File the ROM was written to, if a write occurred
    pub output_file: Option<PathBuf>,
}

impl RomWithFiles {
    pub fn new(rom: DatRom, input_file: impl Into<PathBuf>) -> Self {
        Self {
            rom,
            input_file: input_file.into(),
            output_file: None,
        }
    }

    pub fn with_output(mut self, output_file: impl Into<PathBuf>) -> Self {
        self.output_file = Some(output_file.into());
        self
    }

    /// Path to report for this ROM: the written file if there is one,
    /// otherwise the input file.
    pub fn reported_file(&self) -> &Path {
        self.output_file.as_deref().unwrap_or(&self.input_file)
    }
}

/// A proposed match between one game and the files resolved for its ROMs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteCandidate {
    pub game: DatGame,
    /// Whether the files were produced by applying a patch
    pub patched: bool,
    pub roms_with_files: Vec<RomWithFiles>,
}

impl WriteCandidate {
    pub fn new(game: DatGame, roms_with_files: Vec<RomWithFiles>) -> Self {
        Self {
            game,
            patched: false,
            roms_with_files,
        }
    }

    pub fn patched(mut self, patched: bool) -> Self {
        self.patched = patched;
        self
    }

    /// Fewer ROMs were resolved than the game declares.
    pub fn is_incomplete(&self) -> bool {
        self.roms_with_files.len() < self.game.roms.len()
    }
}
