//! Display helpers shared by console summaries and reports.
//!
//! Pure data-transformation logic (color bands, count formatting, name
//! ordering) kept apart from the status engine so each piece can be tested
//! on its own.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

// ---------------------------------------------------------------------------
// Color bands
// ---------------------------------------------------------------------------

/// Color used for a found/total fraction in console summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBand {
    /// 100%
    BrightGreen,
    /// [75%, 100%)
    Yellow,
    /// [50%, 75%)
    Olive,
    /// [25%, 50%)
    Orange,
    /// (0%, 25%)
    RedOrange,
    /// 0%
    Red,
}

impl ColorBand {
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            ColorBand::BrightGreen
        } else if percentage >= 75.0 {
            ColorBand::Yellow
        } else if percentage >= 50.0 {
            ColorBand::Olive
        } else if percentage >= 25.0 {
            ColorBand::Orange
        } else if percentage > 0.0 {
            ColorBand::RedOrange
        } else {
            ColorBand::Red
        }
    }

    /// Colorize `text` for stdout (no-op when stdout doesn't support color).
    pub fn paint(&self, text: &str) -> String {
        match self {
            ColorBand::BrightGreen => text
                .if_supports_color(Stdout, |t| t.bright_green())
                .to_string(),
            ColorBand::Yellow => text.if_supports_color(Stdout, |t| t.yellow()).to_string(),
            ColorBand::Olive => text
                .if_supports_color(Stdout, |t| t.truecolor(128, 128, 0))
                .to_string(),
            ColorBand::Orange => text
                .if_supports_color(Stdout, |t| t.truecolor(255, 165, 0))
                .to_string(),
            ColorBand::RedOrange => text
                .if_supports_color(Stdout, |t| t.truecolor(255, 69, 0))
                .to_string(),
            ColorBand::Red => text.if_supports_color(Stdout, |t| t.red()).to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Counts
// ---------------------------------------------------------------------------

/// Format a count with `,` thousands separators (`1234567` → `1,234,567`).
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ---------------------------------------------------------------------------
// Name ordering
// ---------------------------------------------------------------------------

thread_local! {
    /// Root-locale collator at tertiary strength, built once per thread.
    static COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        Collator::try_new(&Default::default(), options)
            .inspect_err(|e| log::warn!("Unicode collation unavailable, using case folding: {e}"))
            .ok()
    };
}

/// Compare names in Unicode collation order (root locale), falling back to
/// the exact text so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let collated = COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase)),
    });
    collated.then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_band_boundaries() {
        assert_eq!(ColorBand::for_percentage(100.0), ColorBand::BrightGreen);
        assert_eq!(ColorBand::for_percentage(99.9), ColorBand::Yellow);
        assert_eq!(ColorBand::for_percentage(75.0), ColorBand::Yellow);
        assert_eq!(ColorBand::for_percentage(74.9), ColorBand::Olive);
        assert_eq!(ColorBand::for_percentage(50.0), ColorBand::Olive);
        assert_eq!(ColorBand::for_percentage(49.9), ColorBand::Orange);
        assert_eq!(ColorBand::for_percentage(25.0), ColorBand::Orange);
        assert_eq!(ColorBand::for_percentage(24.9), ColorBand::RedOrange);
        assert_eq!(ColorBand::for_percentage(0.1), ColorBand::RedOrange);
        assert_eq!(ColorBand::for_percentage(0.0), ColorBand::Red);
    }

    #[test]
    fn test_paint_keeps_text() {
        let painted = ColorBand::Olive.paint("42");
        let plain = strip_ansi_escapes::strip_str(&painted);
        assert_eq!(plain, "42");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_compare_names_case_insensitive() {
        let mut names = vec!["beta", "Alpha", "alpha", "Gamma"];
        names.sort_by(|a, b| compare_names(a, b));
        // Case only breaks ties, lowercase first
        assert_eq!(names, vec!["alpha", "Alpha", "beta", "Gamma"]);
    }

    #[test]
    fn test_compare_names_accents_sort_with_base_letter() {
        let mut names = vec!["Frogger (USA)", "Éclair (France)", "Zoo (USA)", "Eclair (USA)"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(
            names,
            vec!["Éclair (France)", "Eclair (USA)", "Frogger (USA)", "Zoo (USA)"]
        );
    }

    #[test]
    fn test_compare_names_total_order() {
        assert_eq!(compare_names("Game", "Game"), Ordering::Equal);
        assert_ne!(compare_names("e\u{301}", "\u{e9}"), Ordering::Equal);
    }
}
