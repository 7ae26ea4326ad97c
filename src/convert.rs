// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! End-to-end conversion of a metric names file into a settings document.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf}
};

use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::{
    entry::counter_entry,
    error::{self, Error},
    names::load_metric_names,
    render::{CounterDocument, write_document}
};

/// Mode requested for newly created documents before the umask applies.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o666;

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Metric names file that was read.
    pub input:   PathBuf,
    /// Settings document that was written.
    pub output:  PathBuf,
    /// Number of counter records in the document.
    pub records: usize
}

/// Converts the metric names at `input` into a settings document at `output`.
///
/// The document is staged in a temporary file next to the resolved `output`
/// and then moved over it, so `output` either receives the complete document
/// or keeps its previous contents. A symlinked `output` is written through,
/// and the permissions of an existing `output` are kept.
///
/// # Errors
///
/// Returns [`Error::InputNotFound`] before touching `output` when `input` does
/// not exist, [`Error::Read`] when it cannot be read and [`Error::Write`] when
/// the document cannot be stored.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use rdoc_counters::convert_file;
///
/// # fn example() -> Result<(), rdoc_counters::Error> {
/// let summary = convert_file(Path::new("metrics.txt"), Path::new("counters.json"))?;
/// println!("wrote {} counters", summary.records);
/// # Ok(())
/// # }
/// ```
pub fn convert_file(input: &Path, output: &Path) -> Result<ConversionSummary, Error> {
    let names = load_metric_names(input)?;
    let document: CounterDocument = names.iter().map(|name| counter_entry(name)).collect();

    persist(output, &document)?;
    debug!("Wrote {} counters to {}", document.counters.len(), output.display());

    Ok(ConversionSummary {
        input:   input.to_path_buf(),
        output:  output.to_path_buf(),
        records: document.counters.len()
    })
}

fn persist(output: &Path, document: &CounterDocument) -> Result<(), Error> {
    // Symlinks are followed so the link target receives the document.
    let destination = fs::canonicalize(output).unwrap_or_else(|_| output.to_path_buf());
    let parent = match destination.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new(".")
    };

    debug!("Staging document for {} in {}", destination.display(), parent.display());
    let mut staged =
        staging_file(parent, &destination).map_err(|source| error::write_error(output, source))?;
    write_document(&mut staged, document)
        .and_then(|()| staged.flush())
        .map_err(|source| error::write_error(output, source))?;
    staged
        .persist(&destination)
        .map_err(|failure| error::write_error(output, failure.error))?;

    Ok(())
}

/// Creates the temporary file that will replace `destination`.
///
/// New documents get the regular `0o666` creation mode filtered by the
/// process umask; existing documents keep their current permissions.
fn staging_file(parent: &Path, destination: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        builder.permissions(fs::Permissions::from_mode(NEW_FILE_MODE));
    }
    let staged = builder.tempfile_in(parent)?;

    if let Ok(metadata) = fs::metadata(destination) {
        staged.as_file().set_permissions(metadata.permissions())?;
    }

    Ok(staged)
}
