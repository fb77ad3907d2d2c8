use thiserror::Error;

use romcheck_dat::DatError;

/// Errors that can occur while building reports and fixdats.
#[derive(Debug, Error)]
pub enum ReportError {
    /// I/O error while creating directories or writing files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// DAT reading or serialization failed
    #[error("DAT error: {0}")]
    Dat(#[from] DatError),

    /// Candidate manifest could not be parsed
    #[error("Manifest error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generated output was not valid UTF-8
    #[error("Output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A candidate refers to a game the DAT doesn't contain
    #[error("Unknown game in {dat}: {game}")]
    UnknownGame { dat: String, game: String },

    /// A candidate refers to a ROM its game doesn't contain
    #[error("Unknown ROM in {game}: {rom}")]
    UnknownRom { game: String, rom: String },
}

impl ReportError {
    pub fn unknown_game(dat: impl Into<String>, game: impl Into<String>) -> Self {
        Self::UnknownGame {
            dat: dat.into(),
            game: game.into(),
        }
    }

    pub fn unknown_rom(game: impl Into<String>, rom: impl Into<String>) -> Self {
        Self::UnknownRom {
            game: game.into(),
            rom: rom.into(),
        }
    }
}

/// Errors that can occur while loading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
}
