use thiserror::Error;

use romcheck_dat::DatError;
use romcheck_lib::ReportError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// DAT file could not be read
    #[error("DAT error: {0}")]
    Dat(#[from] DatError),

    /// Status, report or fixdat generation failed
    #[error("{0}")]
    Report(#[from] ReportError),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Arguments that parse but don't make sense together
    #[error("{0}")]
    Usage(String),

    /// Logger could not be installed
    #[error("Logging error: {0}")]
    Logger(String),
}

impl CliError {
    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub(crate) fn logger(msg: impl Into<String>) -> Self {
        Self::Logger(msg.into())
    }
}
