#![allow(non_shorthand_field_patterns)]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error type shared by the conversion pipeline and the CLI.
//!
//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint, so the lint is disabled
//! for this module.

use std::path::{Path, PathBuf};

/// Unified error type returned by the converter.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// The metric names file does not exist.
    #[error("input file not found: {path:?}")]
    InputNotFound {
        /// Path supplied for the metric names file.
        path: PathBuf
    },
    /// Wraps I/O and decoding errors raised while reading the metric names.
    #[error("failed to read metric names from {path:?}: {source}")]
    Read {
        /// Location of the metric names file.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps I/O errors raised while writing the settings document.
    #[error("failed to write counter settings to {path:?}: {source}")]
    Write {
        /// Destination of the settings document.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    }
}

impl Error {
    /// Constructs an [`Error::InputNotFound`] for `path`.
    pub fn input_not_found(path: &Path) -> Self {
        Self::InputNotFound {
            path: path.to_path_buf()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

/// Creates an [`Error::Read`] variant capturing the failing path and source.
///
/// Missing files are reported as [`Error::InputNotFound`] instead.
pub fn read_error(path: &Path, source: std::io::Error) -> Error {
    if source.kind() == std::io::ErrorKind::NotFound {
        return Error::input_not_found(path);
    }

    Error::Read {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::Write`] variant capturing the failing path and source.
pub fn write_error(path: &Path, source: std::io::Error) -> Error {
    Error::Write {
        path: path.to_path_buf(),
        source
    }
}
