use std::io::BufRead;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::DatError;
use crate::flags::GameFlags;

/// A parsed Logiqx DAT file.
#[derive(Debug, Clone, Default)]
pub struct DatFile {
    pub header: DatHeader,
    pub games: Vec<DatGame>,
}

/// The `<header>` block of a DAT file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatHeader {
    pub name: String,
    pub description: String,
    pub version: String,
    pub date: String,
    pub author: String,
    pub homepage: String,
    pub url: String,
    pub comment: String,
    /// Header of the DAT this one was derived from (set on fixdats).
    pub source: Option<Box<DatHeader>>,
}

/// A single game entry from a DAT file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatGame {
    pub name: String,
    pub description: String,
    /// Parent game name, for clones.
    pub clone_of: Option<String>,
    /// `isbios="yes"`
    pub bios: bool,
    /// `isdevice="yes"`
    pub device: bool,
    pub roms: Vec<DatRom>,
}

/// A single ROM entry within a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatRom {
    pub name: String,
    pub size: u64,
    /// CRC32 checksum (lowercase hex)
    pub crc: String,
    /// MD5 checksum (lowercase hex), if present
    pub md5: Option<String>,
    /// SHA1 checksum (lowercase hex), if present
    pub sha1: Option<String>,
    /// Dump status (`baddump`, `nodump`, `verified`), if present
    pub status: Option<String>,
}

impl DatHeader {
    /// Name including the source DAT's name for derived DATs
    /// (e.g. `"Nintendo - Game Boy fixdat"`).
    pub fn qualified_name(&self) -> String {
        match &self.source {
            Some(source) => format!("{} {}", source.name, self.name),
            None => self.name.clone(),
        }
    }
}

impl DatFile {
    pub fn new(header: DatHeader, games: Vec<DatGame>) -> Self {
        Self { header, games }
    }

    pub fn name(&self) -> &str {
        &self.header.name
    }

    /// Name used in console output and reports.
    pub fn display_name(&self) -> String {
        self.header.qualified_name()
    }

    /// Canonical file name for writing this DAT to disk.
    pub fn filename(&self) -> String {
        let mut stem = self.header.qualified_name();
        if !self.header.version.is_empty() {
            stem.push_str(&format!(" ({})", self.header.version));
        }
        let stem: String = stem
            .trim()
            .chars()
            .map(|c| match c {
                '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();
        format!("{stem}.dat")
    }
}

impl DatGame {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            description: name.clone(),
            name,
            ..Default::default()
        }
    }

    pub fn with_rom(mut self, rom: DatRom) -> Self {
        self.roms.push(rom);
        self
    }

    /// Stable content identity: the name plus the sorted ROM identities.
    pub fn hash_code(&self) -> String {
        let mut rom_codes: Vec<String> = self.roms.iter().map(DatRom::hash_code).collect();
        rom_codes.sort();
        format!("{}|{}", self.name, rom_codes.join(","))
    }

    pub fn flags(&self) -> GameFlags {
        GameFlags::for_game(self)
    }

    pub fn is_bios(&self) -> bool {
        self.flags().bios
    }

    pub fn is_retail(&self) -> bool {
        self.flags().retail
    }
}

impl DatRom {
    pub fn new(name: impl Into<String>, size: u64, crc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            crc: crc.into().to_lowercase(),
            ..Default::default()
        }
    }

    /// Stable content identity: the strongest available hash.
    pub fn hash_code(&self) -> String {
        if let Some(sha1) = &self.sha1 {
            sha1.clone()
        } else if let Some(md5) = &self.md5 {
            md5.clone()
        } else {
            format!("{}|{}", self.crc, self.size)
        }
    }
}

/// Parse a Logiqx XML DAT.
pub fn parse_dat<R: BufRead>(reader: R) -> Result<DatFile, DatError> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut dat = DatFile::default();

    let mut in_header = false;
    let mut current_tag = String::new();
    let mut current_game: Option<DatGame> = None;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match tag_name.as_str() {
                    "header" => in_header = true,
                    "game" | "machine" => current_game = Some(parse_game_attributes(e)?),
                    "rom" => {
                        if let Some(ref mut game) = current_game {
                            game.roms.push(parse_rom_attributes(e)?);
                        }
                    }
                    _ => current_tag = tag_name,
                }
            }
            Event::Empty(ref e) => {
                let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match tag_name.as_str() {
                    "rom" => {
                        if let Some(ref mut game) = current_game {
                            game.roms.push(parse_rom_attributes(e)?);
                        }
                    }
                    "game" | "machine" => dat.games.push(parse_game_attributes(e)?),
                    _ => {}
                }
            }
            Event::Text(ref e) => {
                let text = e.unescape()?.to_string();
                if let Some(ref mut game) = current_game {
                    if current_tag == "description" {
                        game.description = text;
                    }
                } else if in_header {
                    let header = &mut dat.header;
                    match current_tag.as_str() {
                        "name" => header.name = text,
                        "description" => header.description = text,
                        "version" => header.version = text,
                        "date" => header.date = text,
                        "author" => header.author = text,
                        "homepage" => header.homepage = text,
                        "url" => header.url = text,
                        "comment" => header.comment = text,
                        _ => {}
                    }
                }
            }
            Event::End(ref e) => {
                let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match tag_name.as_str() {
                    "header" => in_header = false,
                    "game" | "machine" => {
                        if let Some(game) = current_game.take() {
                            dat.games.push(game);
                        }
                    }
                    _ => current_tag.clear(),
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if dat.header.name.is_empty() && dat.games.is_empty() {
        return Err(DatError::invalid_dat(
            "No header or games found in XML DAT file",
        ));
    }

    Ok(dat)
}

/// Parse a DAT file from a file path.
pub fn parse_dat_file(path: &Path) -> Result<DatFile, DatError> {
    let file = std::fs::File::open(path)?;
    parse_dat(std::io::BufReader::new(file))
}

fn parse_game_attributes(e: &BytesStart<'_>) -> Result<DatGame, DatError> {
    let mut game = DatGame::default();

    for attr in e.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?.to_string();
        match attr.key.as_ref() {
            b"name" => game.name = value,
            b"cloneof" => game.clone_of = Some(value),
            b"isbios" => game.bios = value.eq_ignore_ascii_case("yes"),
            b"isdevice" => game.device = value.eq_ignore_ascii_case("yes"),
            _ => {}
        }
    }

    if game.description.is_empty() {
        game.description = game.name.clone();
    }
    Ok(game)
}

fn parse_rom_attributes(e: &BytesStart<'_>) -> Result<DatRom, DatError> {
    let mut rom = DatRom::default();

    for attr in e.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?.to_string();
        match attr.key.as_ref() {
            b"name" => rom.name = value,
            b"size" => {
                rom.size = value
                    .parse()
                    .map_err(|_| DatError::invalid_dat(format!("Invalid ROM size: {value}")))?;
            }
            b"crc" => rom.crc = value.to_lowercase(),
            b"md5" => rom.md5 = Some(value.to_lowercase()),
            b"sha1" => rom.sha1 = Some(value.to_lowercase()),
            b"status" => rom.status = Some(value),
            _ => {}
        }
    }

    Ok(rom)
}

#[cfg(test)]
#[path = "tests/dat_tests.rs"]
mod tests;
