// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Loading of metric names from plain-text lists.
//!
//! Each line holds one metric name. Surrounding whitespace is trimmed, lines
//! that end up empty are skipped, and everything else is kept verbatim in
//! order of appearance, duplicates included.

use std::{fs, path::Path};

use tracing::debug;

use crate::error::{self, Error};

/// Returns `true` for every character that terminates a line.
///
/// Besides `\n` and `\r` this covers the vertical tab, form feed, the ASCII
/// file/group/record separators and the Unicode NEL, LS and PS characters.
fn is_line_break(candidate: char) -> bool {
    matches!(
        candidate,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Returns `true` for every character stripped from the ends of a line.
///
/// This is Unicode whitespace plus the ASCII information separators
/// `\x1c`..=`\x1f`.
fn is_blank(candidate: char) -> bool {
    candidate.is_whitespace() || ('\x1c'..='\x1f').contains(&candidate)
}

/// Extracts metric names from `text`.
///
/// A `\r\n` pair splits into a line and an empty fragment; the fragment is
/// dropped together with the blank lines.
///
/// # Examples
///
/// ```
/// use rdoc_counters::parse_metric_names;
///
/// let names = parse_metric_names("GPU Time\n\n  SM Active  \r\n");
/// assert_eq!(names, ["GPU Time", "SM Active"]);
/// ```
pub fn parse_metric_names(text: &str) -> Vec<String> {
    text.split(is_line_break)
        .map(|line| line.trim_matches(is_blank))
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Reads the metric names file at `path`.
///
/// # Errors
///
/// Returns [`Error::InputNotFound`] when `path` does not exist and
/// [`Error::Read`] when the file cannot be read or is not valid UTF-8.
pub fn load_metric_names(path: &Path) -> Result<Vec<String>, Error> {
    if !path.exists() {
        return Err(Error::input_not_found(path));
    }

    let contents = fs::read_to_string(path).map_err(|source| error::read_error(path, source))?;
    let names = parse_metric_names(&contents);
    debug!("Read {} metric names from {}", names.len(), path.display());

    Ok(names)
}
