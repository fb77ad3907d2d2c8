//! CSV report rows and whole-run report assembly.

use std::path::{Path, PathBuf};

use romcheck_dat::GameFlags;

use crate::display::compare_names;
use crate::error::ReportError;
use crate::options::ReportOptions;
use crate::status::{DatStatus, GameStatus};

/// Column headers of the CSV report.
///
/// Four text columns, `Patched`, then all thirteen game flags, so `Device`
/// sits between `BIOS` and `Retail Release`.
pub const CSV_HEADERS: [&str; 18] = [
    "DAT Name",
    "Game Name",
    "Status",
    "ROM Files",
    "Patched",
    "BIOS",
    "Device",
    "Retail Release",
    "Unlicensed",
    "Debug",
    "Demo",
    "Beta",
    "Sample",
    "Prototype",
    "Program",
    "Aftermarket",
    "Homebrew",
    "Bad",
];

/// One row of the CSV report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub dat_name: String,
    pub game_name: String,
    pub status: GameStatus,
    /// Deduplicated file paths, joined with `|` in the output
    pub files: Vec<String>,
    pub patched: bool,
    pub flags: GameFlags,
}

impl CsvRow {
    /// Row for a file that isn't tied to any DAT or game.
    pub fn loose_file(path: &Path, status: GameStatus) -> Self {
        Self {
            dat_name: String::new(),
            game_name: String::new(),
            status,
            files: vec![path.display().to_string()],
            patched: false,
            flags: GameFlags::default(),
        }
    }

    pub fn to_record(&self) -> Vec<String> {
        let f = &self.flags;
        let mut record = vec![
            self.dat_name.clone(),
            self.game_name.clone(),
            self.status.label().to_string(),
            self.files.join("|"),
        ];
        record.extend(
            [
                self.patched,
                f.bios,
                f.device,
                f.retail,
                f.unlicensed,
                f.debug,
                f.demo,
                f.beta,
                f.sample,
                f.prototype,
                f.program,
                f.aftermarket,
                f.homebrew,
                f.bad,
            ]
            .iter()
            .map(bool::to_string),
        );
        record
    }
}

/// Serialize records to CSV text, optionally preceded by [`CSV_HEADERS`].
pub fn write_csv<I>(records: I, with_header: bool) -> Result<String, ReportError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    if with_header {
        writer.write_record(CSV_HEADERS)?;
    }
    for record in records {
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Assemble the report for a whole run.
///
/// DATs are ordered by name. `loose_files` adds rows for files that were
/// classified outside of any DAT (duplicates, unused, deleted), one block
/// per status in the order given.
pub fn build_report<P: AsRef<Path>>(
    statuses: &[DatStatus<'_>],
    loose_files: &[(GameStatus, Vec<P>)],
    options: &ReportOptions,
) -> Result<String, ReportError> {
    let mut ordered: Vec<&DatStatus<'_>> = statuses.iter().collect();
    ordered.sort_by(|a, b| compare_names(a.dat_name(), b.dat_name()));

    let dat_rows = ordered
        .into_iter()
        .flat_map(|status| status.csv_rows(options))
        .map(|row| row.to_record());
    let file_rows = loose_files.iter().flat_map(|(status, paths)| {
        paths
            .iter()
            .map(move |p| CsvRow::loose_file(p.as_ref(), *status).to_record())
    });

    write_csv(dat_rows.chain(file_rows), true)
}

/// Write a report, creating missing parent directories.
pub async fn write_report(path: &Path, contents: &str) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await?;
    log::info!("Wrote report: {}", path.display());
    Ok(())
}

/// `romcheck_<timestamp>.csv` in the working directory.
pub fn default_report_path() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y-%m-%dT%H%M%S");
    PathBuf::from(format!("romcheck_{stamp}.csv"))
}
