// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation of RenderDoc performance counter settings from metric names.
//!
//! A plain-text list of metric names is turned into a settings document in
//! which every counter is identified by three fixed prefix values and a key
//! derived from a djb2-style hash of the metric name. The document is
//! rendered by hand so that its layout matches the files written by the
//! capture tool byte for byte.

mod convert;
mod entry;
mod error;
mod hash;
mod names;
mod render;

pub use convert::{ConversionSummary, convert_file};
pub use entry::{CounterRecord, PREFIX_0, PREFIX_1, PREFIX_2, XOR_MASK, counter_entry};
pub use error::{Error, read_error, write_error};
pub use hash::{DEFAULT_SEED, strhash, strhash_bytes, strhash_with_seed};
pub use names::{load_metric_names, parse_metric_names};
pub use render::{CounterDocument, render_document, write_document};
