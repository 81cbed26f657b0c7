use crate::core::models::grid::GridSeries;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Table serialization error: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes a series as one line per grid point: two tab-separated fields with
/// 17 decimal places, no header.
pub fn write_series(writer: impl Write, series: &GridSeries) -> Result<(), TableError> {
    let mut table = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);

    for (x, y) in series.points() {
        table.write_record([format!("{x:.17}"), format!("{y:.17}")])?;
    }
    table.flush()?;
    Ok(())
}

fn write_to_path(path: &Path, series: &GridSeries) -> Result<(), TableError> {
    let file = File::create(path)?;
    write_series(file, series)
}

/// Persists a series under `primary_dir`, retrying once in the working
/// directory if the primary path is unwritable.
///
/// Persistence is best-effort: if both attempts fail the failure is logged
/// and `None` is returned, leaving the caller's computed result intact.
pub fn save_with_fallback(
    primary_dir: &Path,
    file_name: &str,
    series: &GridSeries,
) -> Option<PathBuf> {
    let primary = primary_dir.join(file_name);
    match write_to_path(&primary, series) {
        Ok(()) => return Some(primary),
        Err(e) => {
            warn!(path = %primary.display(), error = %e, "Primary output path unwritable, falling back to working directory");
        }
    }

    let fallback = PathBuf::from(file_name);
    match write_to_path(&fallback, series) {
        Ok(()) => Some(fallback),
        Err(e) => {
            warn!(path = %fallback.display(), error = %e, "Fallback output path unwritable, result not persisted");
            None
        }
    }
}
