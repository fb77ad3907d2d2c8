//! Options controlling report and fixdat generation.

use std::fmt;
use std::path::PathBuf;

/// A (non-exclusive) ROM-type bucket that games are counted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RomType {
    Games,
    Bioses,
    Devices,
    Retail,
    Patched,
}

impl RomType {
    /// Label used in console summaries.
    pub fn label(&self) -> &'static str {
        match self {
            RomType::Games => "games",
            RomType::Bioses => "BIOSes",
            RomType::Devices => "devices",
            RomType::Retail => "retail releases",
            RomType::Patched => "patched games",
        }
    }
}

impl fmt::Display for RomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Options controlling reporting behavior.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Games are being matched against DATs (false = plain listing)
    pub dat_matching: bool,
    /// Files are being written, not just scanned
    pub write: bool,
    /// Generate a fixdat per DAT
    pub fixdat: bool,
    /// Directory fixdats are written to
    pub fixdat_dir: PathBuf,
    /// Report CSV path (None = default timestamped name)
    pub report_output: Option<PathBuf>,
    pub only_bios: bool,
    pub only_device: bool,
    pub only_retail: bool,
    pub no_bios: bool,
    pub no_device: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            dat_matching: true,
            write: false,
            fixdat: false,
            fixdat_dir: PathBuf::from("."),
            report_output: None,
            only_bios: false,
            only_device: false,
            only_retail: false,
            no_bios: false,
            no_device: false,
        }
    }
}

impl ReportOptions {
    /// ROM types evaluated under the current filters, in display order.
    pub fn allowed_types(&self) -> Vec<RomType> {
        let mut types = Vec::with_capacity(5);

        if !(self.only_bios || self.only_device || self.only_retail) {
            types.push(RomType::Games);
        }
        if self.only_bios || (!self.no_bios && !self.only_device) {
            types.push(RomType::Bioses);
        }
        if self.only_device || (!self.no_device && !self.only_bios) {
            types.push(RomType::Devices);
        }
        if self.only_retail || (!self.only_bios && !self.only_device) {
            types.push(RomType::Retail);
        }
        types.push(RomType::Patched);

        types
    }
}
