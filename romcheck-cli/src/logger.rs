//! Console logger: everything the CLI prints goes through the `log` macros.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Writes to stdout and mirrors the text, minus ANSI escapes, into a file.
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}

fn level_filter(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn level_prefix(level: Level) -> String {
    match level {
        Level::Error => format!("{} ", "error:".if_supports_color(Stdout, |t| t.red())),
        Level::Warn => format!("{} ", "warning:".if_supports_color(Stdout, |t| t.yellow())),
        _ => String::new(),
    }
}

/// Verbose lines already name the level, so they carry no prefix.
fn verbose_line(level: Level, message: impl fmt::Display) -> String {
    format!("{:<5} {}", level, message)
}

fn plain_line(level: Level, message: impl fmt::Display) -> String {
    format!("{}{}", level_prefix(level), message)
}

/// Install the global logger.
///
/// `--quiet` wins over `--verbose`. Verbose output carries timestamps and
/// levels; normal output is the bare message.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let mut builder = Builder::new();
    builder.filter_level(level_filter(quiet, verbose));

    if verbose && !quiet {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                verbose_line(record.level(), record.args()),
            )
        });
    } else {
        builder.format(|buf, record| {
            writeln!(buf, "{}", plain_line(record.level(), record.args()))
        });
    }

    match logfile {
        Some(path) => {
            let file = File::create(path)?;
            builder.target(Target::Pipe(Box::new(Tee { file })));
        }
        None => {
            builder.target(Target::Stdout);
        }
    }

    builder
        .try_init()
        .map_err(|e| CliError::logger(e.to_string()))
}

/// Log an empty line.
pub(crate) fn log_blank() {
    log::info!("");
}
