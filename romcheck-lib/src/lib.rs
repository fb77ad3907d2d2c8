//! Collection status reporting and fixdat generation for resolved DAT
//! candidates.

pub mod candidate;
pub mod display;
pub mod error;
pub mod fixdat;
pub mod manifest;
pub mod options;
pub mod report;
pub mod settings;
pub mod status;

pub use candidate::{RomWithFiles, WriteCandidate};
pub use error::{ReportError, SettingsError};
pub use fixdat::{build_fixdat, generate_fixdat};
pub use options::{ReportOptions, RomType};
pub use report::{CsvRow, build_report, write_report};
pub use status::{DatStatus, GameStatus};
