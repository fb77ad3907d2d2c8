//! Collection status for one DAT: which games were found, incomplete, or
//! missing, broken down by ROM type.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use romcheck_dat::{DatFile, DatGame};

use crate::candidate::WriteCandidate;
use crate::display::{ColorBand, compare_names, format_count};
use crate::error::ReportError;
use crate::options::{ReportOptions, RomType};
use crate::report::{self, CsvRow};

/// Completeness of a game (or the classification of a loose file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Found,
    Incomplete,
    Missing,
    Duplicate,
    Unused,
    Deleted,
}

impl GameStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GameStatus::Found => "FOUND",
            GameStatus::Incomplete => "INCOMPLETE",
            GameStatus::Missing => "MISSING",
            GameStatus::Duplicate => "DUPLICATE",
            GameStatus::Unused => "UNUSED",
            GameStatus::Deleted => "DELETED",
        }
    }
}

/// Decide a game's status from its partition membership.
///
/// Checked in precedence order: FOUND beats INCOMPLETE beats MISSING. A game
/// with no ROMs is always FOUND.
pub fn resolve_status(found: bool, incomplete: bool, has_roms: bool) -> GameStatus {
    if found || !has_roms {
        GameStatus::Found
    } else if incomplete {
        GameStatus::Incomplete
    } else {
        GameStatus::Missing
    }
}

/// Every ROM type a game is counted under. `Patched` is never included:
/// patched games are recorded from their candidates.
pub fn rom_types_for(game: &DatGame) -> Vec<RomType> {
    let flags = game.flags();
    let mut types = vec![RomType::Games];
    if flags.bios {
        types.push(RomType::Bioses);
    }
    if flags.device {
        types.push(RomType::Devices);
    }
    if flags.retail {
        types.push(RomType::Retail);
    }
    types
}

/// A game together with the candidate that resolved it (absent for
/// ROM-less games that were never proposed).
#[derive(Debug, Clone, Copy)]
pub struct ResolvedGame<'a> {
    pub game: &'a DatGame,
    pub candidate: Option<&'a WriteCandidate>,
}

#[derive(Debug)]
struct Bucket<T> {
    index: HashMap<String, usize>,
    entries: Vec<T>,
}

impl<T> Default for Bucket<T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

/// Per-ROM-type lists, ordered by insertion and unique by game identity.
#[derive(Debug)]
struct Partition<T> {
    buckets: BTreeMap<RomType, Bucket<T>>,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }
}

impl<T> Partition<T> {
    fn insert(&mut self, rom_type: RomType, key: &str, value: T) {
        let bucket = self.buckets.entry(rom_type).or_default();
        if !bucket.index.contains_key(key) {
            bucket.index.insert(key.to_string(), bucket.entries.len());
            bucket.entries.push(value);
        }
    }

    fn entries(&self, rom_type: RomType) -> &[T] {
        self.buckets
            .get(&rom_type)
            .map(|b| b.entries.as_slice())
            .unwrap_or_default()
    }

    fn len(&self, rom_type: RomType) -> usize {
        self.entries(rom_type).len()
    }

    fn find(&self, rom_type: RomType, key: &str) -> Option<&T> {
        let bucket = self.buckets.get(&rom_type)?;
        bucket.index.get(key).map(|&i| &bucket.entries[i])
    }

    fn all_entries(&self) -> impl Iterator<Item = &T> {
        self.buckets.values().flat_map(|b| b.entries.iter())
    }
}

/// Found/incomplete/missing classification of one DAT's games.
///
/// Built once from a fully resolved set of candidates and read-only
/// afterwards.
#[derive(Debug)]
pub struct DatStatus<'a> {
    dat_name: String,
    all: Partition<&'a DatGame>,
    found: Partition<ResolvedGame<'a>>,
    incomplete: Partition<ResolvedGame<'a>>,
}

impl<'a> DatStatus<'a> {
    pub fn new(dat: &'a DatFile, candidates: &'a [WriteCandidate]) -> Self {
        // Only the first candidate proposed for a game counts
        let mut first_candidates: HashMap<String, &'a WriteCandidate> = HashMap::new();
        for candidate in candidates {
            first_candidates
                .entry(candidate.game.hash_code())
                .or_insert(candidate);
        }

        let mut status = Self {
            dat_name: dat.display_name(),
            all: Partition::default(),
            found: Partition::default(),
            incomplete: Partition::default(),
        };

        for game in &dat.games {
            let key = game.hash_code();
            let types = rom_types_for(game);
            for &rom_type in &types {
                status.all.insert(rom_type, &key, game);
            }

            let candidate = first_candidates.get(&key).copied();
            if candidate.is_none() && !game.roms.is_empty() {
                continue;
            }

            let resolved = ResolvedGame { game, candidate };
            let partition = if candidate.is_some_and(WriteCandidate::is_incomplete) {
                &mut status.incomplete
            } else {
                &mut status.found
            };
            for &rom_type in &types {
                partition.insert(rom_type, &key, resolved);
            }
        }

        // Patched output is always complete
        for candidate in candidates.iter().filter(|c| c.patched) {
            let key = candidate.game.hash_code();
            status.all.insert(RomType::Patched, &key, &candidate.game);
            status.found.insert(
                RomType::Patched,
                &key,
                ResolvedGame {
                    game: &candidate.game,
                    candidate: Some(candidate),
                },
            );
        }

        debug_assert!(
            status.games_in_both().is_empty(),
            "games classified as both found and incomplete in {}",
            status.dat_name,
        );

        log::debug!(
            "{}: {} of {} games found, {} incomplete",
            status.dat_name,
            status.found.len(RomType::Games),
            status.all.len(RomType::Games),
            status.incomplete.len(RomType::Games),
        );

        status
    }

    pub fn dat_name(&self) -> &str {
        &self.dat_name
    }

    /// Whether any game was found under any of `rom_types`.
    pub fn any_found(&self, rom_types: &[RomType]) -> bool {
        rom_types.iter().any(|&t| self.found.len(t) > 0)
    }

    /// Whether any game was found under the types allowed by `options`.
    pub fn any_games_found(&self, options: &ReportOptions) -> bool {
        self.any_found(&options.allowed_types())
    }

    /// Every input file used by a found or incomplete game, deduplicated
    /// in first-seen order.
    pub fn input_files(&self) -> Vec<PathBuf> {
        let mut seen: HashSet<&Path> = HashSet::new();
        self.found
            .all_entries()
            .chain(self.incomplete.all_entries())
            .filter_map(|r| r.candidate)
            .flat_map(|c| c.roms_with_files.iter())
            .map(|rwf| rwf.input_file.as_path())
            .filter(|p| seen.insert(*p))
            .map(Path::to_path_buf)
            .collect()
    }

    pub fn all_games(&self, rom_type: RomType) -> Vec<&'a DatGame> {
        self.all.entries(rom_type).to_vec()
    }

    pub fn found_games(&self, rom_type: RomType) -> Vec<&'a DatGame> {
        self.found.entries(rom_type).iter().map(|r| r.game).collect()
    }

    pub fn incomplete_games(&self, rom_type: RomType) -> Vec<&'a DatGame> {
        self.incomplete
            .entries(rom_type)
            .iter()
            .map(|r| r.game)
            .collect()
    }

    /// Games recorded as both found and incomplete under the same ROM type.
    /// Always empty for a consistent set of candidates.
    pub fn games_in_both(&self) -> Vec<&'a DatGame> {
        let mut overlap = Vec::new();
        for (rom_type, bucket) in &self.incomplete.buckets {
            for (key, &i) in &bucket.index {
                if self.found.find(*rom_type, key).is_some() {
                    overlap.push(bucket.entries[i].game);
                }
            }
        }
        overlap
    }

    /// One-line console summary, e.g. `"12/20 games, 1/1 BIOSes, 12/19 retail releases found"`.
    ///
    /// Returns an empty string when no allowed type has any games.
    pub fn render_console(&self, options: &ReportOptions) -> String {
        let segments: Vec<String> = options
            .allowed_types()
            .into_iter()
            .filter_map(|rom_type| {
                let all = self.all.len(rom_type);
                if all == 0 {
                    return None;
                }
                let found = self.found.len(rom_type);

                if !options.dat_matching || rom_type == RomType::Patched {
                    return Some(format!("{} {}", format_count(found), rom_type));
                }

                let percentage = found as f64 / all as f64 * 100.0;
                let band = ColorBand::for_percentage(percentage);
                Some(format!(
                    "{}/{} {}",
                    band.paint(&format_count(found)),
                    format_count(all),
                    rom_type,
                ))
            })
            .collect();

        if segments.is_empty() {
            return String::new();
        }

        let verb = if options.write { "written" } else { "found" };
        format!("{} {}", segments.join(", "), verb)
    }

    /// One row per game under the allowed types, sorted by name.
    pub fn csv_rows(&self, options: &ReportOptions) -> Vec<CsvRow> {
        let rom_types = options.allowed_types();

        let mut seen = HashSet::new();
        let mut games: Vec<&'a DatGame> = Vec::new();
        for &rom_type in &rom_types {
            let classified = self
                .all
                .entries(rom_type)
                .iter()
                .copied()
                .chain(self.found.entries(rom_type).iter().map(|r| r.game))
                .chain(self.incomplete.entries(rom_type).iter().map(|r| r.game));
            for game in classified {
                if seen.insert(game.hash_code()) {
                    games.push(game);
                }
            }
        }
        games.sort_by(|a, b| compare_names(&a.name, &b.name));

        games
            .into_iter()
            .map(|game| self.csv_row(game, &rom_types))
            .collect()
    }

    fn csv_row(&self, game: &DatGame, rom_types: &[RomType]) -> CsvRow {
        let key = game.hash_code();
        let incomplete = rom_types
            .iter()
            .find_map(|&t| self.incomplete.find(t, &key));
        let found = rom_types.iter().find_map(|&t| self.found.find(t, &key));

        let status = resolve_status(found.is_some(), incomplete.is_some(), !game.roms.is_empty());

        let mut seen = HashSet::new();
        let files = [incomplete, found]
            .into_iter()
            .flatten()
            .filter_map(|r| r.candidate)
            .flat_map(|c| c.roms_with_files.iter())
            .map(|rwf| rwf.reported_file().display().to_string())
            .filter(|path| seen.insert(path.clone()))
            .collect();

        CsvRow {
            dat_name: self.dat_name.clone(),
            game_name: game.name.clone(),
            status,
            files,
            patched: found.and_then(|r| r.candidate).is_some_and(|c| c.patched),
            flags: game.flags(),
        }
    }

    /// Full CSV for this DAT: header plus [`csv_rows`](Self::csv_rows).
    pub fn to_csv(&self, options: &ReportOptions) -> Result<String, ReportError> {
        let rows = self.csv_rows(options);
        report::write_csv(rows.iter().map(CsvRow::to_record), true)
    }

    /// Header-less CSV rows for files that never matched a game, all with
    /// the same `status` (e.g. DUPLICATE, UNUSED, DELETED).
    pub fn files_to_csv<P: AsRef<Path>>(
        file_paths: &[P],
        status: GameStatus,
    ) -> Result<String, ReportError> {
        let rows = file_paths
            .iter()
            .map(|p| CsvRow::loose_file(p.as_ref(), status).to_record());
        report::write_csv(rows, false)
    }
}

#[cfg(test)]
#[path = "tests/status_tests.rs"]
mod tests;
