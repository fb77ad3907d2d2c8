use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romcheck_lib::settings::{load_settings, load_settings_string, settings_path};

/// Show the settings file and the report options it produces.
pub(crate) fn run_config_show() {
    let path = settings_path();

    log::info!(
        "{}",
        "romcheck Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Config file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Config file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    if let Some(contents) = load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("    {}", line);
        }
    }
    crate::log_blank();

    let options = load_settings().report_options();
    let report_output = options
        .report_output
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "romcheck_<timestamp>.csv".to_string());
    let types: Vec<&str> = options
        .allowed_types()
        .iter()
        .map(|t| t.label())
        .collect();

    log::info!("  {:<16} {}", "Fixdat:", options.fixdat);
    log::info!("  {:<16} {}", "Fixdat dir:", options.fixdat_dir.display());
    log::info!("  {:<16} {}", "Report:", report_output);
    log::info!("  {:<16} {}", "Write mode:", options.write);
    log::info!("  {:<16} {}", "Reported types:", types.join(", "));
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}
