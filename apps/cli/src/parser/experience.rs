use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::models::resume::ExperienceEntry;
use crate::parser::lists::strip_bullet;

/// Header shape (a): optional `N.` numbering, role text, bracketed company,
/// optional parenthesized dates. The bracketed company is what commits a
/// line to this shape; the role may capture empty.
static HEADER_BRACKETED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+\.\s*)?(.*?),?\s*\[([^\]]+)\]\s*,?\s*(?:\(([^)]+)\))?\s*$")
        .expect("static regex must compile")
});

/// Header shape (b): `, at Company (Dates)`. No role in this shape.
static HEADER_AT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r", at (.*?) \((.*?)\)").expect("static regex must compile"));

static ACHIEVEMENT_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^\{\s*achievement\s*\}")
        .case_insensitive(true)
        .build()
        .expect("static regex must compile")
});

/// Closing marker, either `{:achievement}` or `{/achievement}`.
static ACHIEVEMENT_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^\{\s*[:/]\s*achievement\s*\}")
        .case_insensitive(true)
        .build()
        .expect("static regex must compile")
});

/// Line-scan mode. Marker lines flip between the two; everything else is
/// interpreted according to the current mode.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Normal,
    InAchievements,
}

/// Parses the experience section into ordered job entries.
///
/// A single pass over the lines with an explicit mode and one entry under
/// construction. Header lines open a new entry, closing out the previous
/// one; `{achievement}` blocks append bullets to the current entry; a line
/// matching neither grammar shape is unparseable noise and is dropped.
/// Shape (a) is tried before shape (b), first match wins.
///
/// Never fails on malformed input. The worst case is an empty list, which
/// keeps partial extraction from free-form text ahead of strictness.
pub fn parse_experience(section_text: &str) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();
    let mut current: Option<ExperienceEntry> = None;
    let mut mode = Mode::Normal;

    for line in section_text.split(['\r', '\n']) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // Markers are recognized in either mode, so a stray marker line
        // never leaks into achievement text.
        if ACHIEVEMENT_OPEN.is_match(trimmed) {
            mode = Mode::InAchievements;
            continue;
        }
        if ACHIEVEMENT_CLOSE.is_match(trimmed) {
            mode = Mode::Normal;
            continue;
        }

        if mode == Mode::InAchievements {
            let bullet = strip_bullet(trimmed);
            if !bullet.is_empty() {
                if let Some(entry) = current.as_mut() {
                    entry.achievements.push(bullet.to_string());
                }
            }
            continue;
        }

        if let Some(header) = match_header(trimmed) {
            if let Some(finished) = current.replace(header) {
                entries.push(finished);
            }
        }
        // No match in normal mode: noise, dropped without error.
    }

    if let Some(finished) = current {
        entries.push(finished);
    }
    entries
}

/// Tries the two header shapes in fixed order and builds an entry from the
/// first that matches. Empty captures become empty strings.
fn match_header(line: &str) -> Option<ExperienceEntry> {
    if let Some(caps) = HEADER_BRACKETED.captures(line) {
        return Some(ExperienceEntry {
            role: caps.get(1).map_or("", |m| m.as_str()).trim().to_string(),
            company: caps[2].trim().to_string(),
            dates: caps.get(3).map_or("", |m| m.as_str()).trim().to_string(),
            achievements: Vec::new(),
        });
    }
    if let Some(caps) = HEADER_AT.captures(line) {
        return Some(ExperienceEntry {
            role: String::new(),
            company: caps[1].trim().to_string(),
            dates: caps[2].trim().to_string(),
            achievements: Vec::new(),
        });
    }
    None
}
