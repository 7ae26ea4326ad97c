// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Text rendering of performance counter settings documents.
//!
//! The layout must match the settings files produced by the capture tool
//! byte for byte: four-space indentation, one integer per line, no trailing
//! commas and a single terminating newline. A generic pretty printer does not
//! reproduce it, so the text is assembled by hand.

use std::io;

use serde::Serialize;

use crate::entry::CounterRecord;

/// Value of the constant settings marker emitted after the counters.
const SETTINGS_MARKER: u32 = 1;
/// Indentation applied per nesting level.
const INDENT: &str = "    ";

/// Complete settings document written to the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterDocument {
    /// Counter records in input order.
    pub counters: Vec<CounterRecord>,
    #[serde(rename = "rdocPerformanceCounterSettings")]
    settings: u32
}

impl CounterDocument {
    /// Creates a document holding `counters` in the given order.
    pub fn new(counters: Vec<CounterRecord>) -> Self {
        Self {
            counters,
            settings: SETTINGS_MARKER
        }
    }
}

impl FromIterator<CounterRecord> for CounterDocument {
    fn from_iter<I: IntoIterator<Item = CounterRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Renders `document` into its exact textual form.
///
/// # Examples
///
/// ```
/// use rdoc_counters::{CounterDocument, render_document};
///
/// let text = render_document(&CounterDocument::new(Vec::new()));
/// assert_eq!(
///     text,
///     "{\n    \"counters\": [\n    ],\n    \"rdocPerformanceCounterSettings\": 1\n}\n"
/// );
/// ```
pub fn render_document(document: &CounterDocument) -> String {
    let mut out = String::with_capacity(96 + document.counters.len() * 120);

    out.push_str("{\n");
    push_line(&mut out, 1, "\"counters\": [", "");

    let last_record = document.counters.len().saturating_sub(1);
    for (index, record) in document.counters.iter().enumerate() {
        push_line(&mut out, 2, "[", "");
        let values = record.values();
        for (position, value) in values.iter().enumerate() {
            let comma = if position + 1 < values.len() { "," } else { "" };
            push_line(&mut out, 3, &value.to_string(), comma);
        }
        let comma = if index < last_record { "," } else { "" };
        push_line(&mut out, 2, "]", comma);
    }

    push_line(&mut out, 1, "]", ",");
    push_line(
        &mut out,
        1,
        &format!("\"rdocPerformanceCounterSettings\": {}", document.settings),
        ""
    );
    out.push_str("}\n");
    out
}

/// Streams the rendered form of `document` into `writer`.
///
/// # Errors
///
/// Propagates I/O errors reported by `writer`.
pub fn write_document<W: io::Write>(writer: &mut W, document: &CounterDocument) -> io::Result<()> {
    writer.write_all(render_document(document).as_bytes())
}

fn push_line(out: &mut String, depth: usize, body: &str, suffix: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(body);
    out.push_str(suffix);
    out.push('\n');
}
