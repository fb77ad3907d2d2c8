//! Persistent settings (`~/.config/romcheck/settings.toml`).
//!
//! Settings supply defaults for report and fixdat options; command-line
//! flags override them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::options::ReportOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub filters: FilterSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Generate fixdats for incomplete DATs
    #[serde(default)]
    pub fixdat: bool,
    pub fixdat_dir: Option<PathBuf>,
    pub report_output: Option<PathBuf>,
    /// Report output paths instead of input paths
    #[serde(default)]
    pub write: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSettings {
    #[serde(default)]
    pub only_bios: bool,
    #[serde(default)]
    pub only_device: bool,
    #[serde(default)]
    pub only_retail: bool,
    #[serde(default)]
    pub no_bios: bool,
    #[serde(default)]
    pub no_device: bool,
}

impl Settings {
    /// Report options seeded from these settings.
    pub fn report_options(&self) -> ReportOptions {
        let defaults = ReportOptions::default();
        ReportOptions {
            write: self.report.write,
            fixdat: self.report.fixdat,
            fixdat_dir: self
                .report
                .fixdat_dir
                .clone()
                .unwrap_or(defaults.fixdat_dir),
            report_output: self.report.report_output.clone(),
            only_bios: self.filters.only_bios,
            only_device: self.filters.only_device,
            only_retail: self.filters.only_retail,
            no_bios: self.filters.no_bios,
            no_device: self.filters.no_device,
            ..defaults
        }
    }
}

/// Canonical path to the settings file: `~/.config/romcheck/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("romcheck").join("settings.toml")
}

/// Read settings from `path`. A missing file yields the defaults.
pub fn read_settings(path: &Path) -> Result<Settings, SettingsError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
        Err(e) => Err(e.into()),
    }
}

/// Load settings from the canonical path, returning defaults if missing or corrupt.
pub fn load_settings() -> Settings {
    let path = settings_path();
    read_settings(&path).unwrap_or_else(|e| {
        log::warn!("Failed to read settings at {}: {}", path.display(), e);
        Settings::default()
    })
}

/// Load the settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
