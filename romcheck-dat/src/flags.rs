//! Game classification flags derived from DAT attributes and naming tags.
//!
//! No-Intro and Redump names encode release metadata in parenthesized and
//! bracketed tags:
//! ```text
//! Game Name (USA) (Beta 2) (Unl) [b1]
//! ```
//! Only the tags that decide whether a release is "retail" are recognized
//! here; regions, languages, and revisions are ignored.

use crate::dat::DatGame;

/// Boolean classification flags for a single game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameFlags {
    pub bios: bool,
    pub device: bool,
    pub retail: bool,
    pub unlicensed: bool,
    pub debug: bool,
    pub demo: bool,
    pub beta: bool,
    pub sample: bool,
    pub prototype: bool,
    pub program: bool,
    pub aftermarket: bool,
    pub homebrew: bool,
    pub bad: bool,
}

impl GameFlags {
    /// Compute the flags for a game from its attributes, name, and ROMs.
    pub fn for_game(game: &DatGame) -> Self {
        let mut flags = GameFlags {
            bios: game.bios,
            device: game.device,
            ..Default::default()
        };

        for tag in name_tags(&game.name) {
            match tag {
                Tag::Paren(content) => classify_paren_tag(content, &mut flags),
                Tag::Bracket(content) => classify_bracket_tag(content, &mut flags),
            }
        }

        if game
            .roms
            .iter()
            .any(|rom| rom.status.as_deref() == Some("baddump"))
        {
            flags.bad = true;
        }

        flags.retail = !(flags.unlicensed
            || flags.debug
            || flags.demo
            || flags.beta
            || flags.sample
            || flags.prototype
            || flags.program
            || flags.aftermarket
            || flags.homebrew
            || flags.bad);

        flags
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Tag<'a> {
    Paren(&'a str),
    Bracket(&'a str),
}

/// Collect every top-level `(...)` and `[...]` tag in a name, in order.
fn name_tags<'a>(name: &'a str) -> Vec<Tag<'a>> {
    let mut tags = Vec::new();
    let mut chars = name.char_indices();

    while let Some((i, ch)) = chars.next() {
        let (open, close, make_tag): (char, char, fn(&'a str) -> Tag<'a>) = match ch {
            '(' => ('(', ')', Tag::Paren),
            '[' => ('[', ']', Tag::Bracket),
            _ => continue,
        };

        let start = i + open.len_utf8();
        let mut end = name.len();
        let mut depth = 1u32;
        for (j, c) in chars.by_ref() {
            if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
                if depth == 0 {
                    end = j;
                    break;
                }
            }
        }

        let content = name[start..end].trim();
        if !content.is_empty() {
            tags.push(make_tag(content));
        }
    }

    tags
}

/// True if `content` is `word` optionally followed by a space-separated
/// qualifier such as a number or date (`Beta`, `Beta 2`, `Proto 1999-01-01`).
fn tag_is(content: &str, word: &str) -> bool {
    match content.get(..word.len()) {
        Some(head) if head.eq_ignore_ascii_case(word) => {
            let rest = &content[word.len()..];
            rest.is_empty() || rest.starts_with(' ')
        }
        _ => false,
    }
}

fn classify_paren_tag(content: &str, flags: &mut GameFlags) {
    if tag_is(content, "Unl") || tag_is(content, "Unlicensed") {
        flags.unlicensed = true;
    } else if tag_is(content, "Debug") {
        flags.debug = true;
    } else if tag_is(content, "Demo") || tag_is(content, "Kiosk") {
        flags.demo = true;
    } else if tag_is(content, "Beta") {
        flags.beta = true;
    } else if tag_is(content, "Sample") {
        flags.sample = true;
    } else if tag_is(content, "Proto") || tag_is(content, "Prototype") {
        flags.prototype = true;
    } else if ["Program", "Test Program", "SDK Build"]
        .iter()
        .any(|p| content.eq_ignore_ascii_case(p))
    {
        flags.program = true;
    } else if tag_is(content, "Aftermarket") {
        flags.aftermarket = true;
    } else if tag_is(content, "Homebrew") {
        flags.homebrew = true;
    }
}

fn classify_bracket_tag(content: &str, flags: &mut GameFlags) {
    if content.eq_ignore_ascii_case("BIOS") {
        flags.bios = true;
    } else if let Some(rest) = content.strip_prefix('b') {
        // [b], [b1], [b2] ... but not [bios] or other words
        if rest.chars().all(|c| c.is_ascii_digit()) {
            flags.bad = true;
        }
    }
}
