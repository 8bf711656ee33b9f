use std::path::PathBuf;

use thiserror::Error;

use crate::record::Metric;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("results folder '{}' does not exist", .0.display())]
    MissingDirectory(PathBuf),

    #[error("no result files for '{label}' under '{}'", .dir.display())]
    MissingLabel { label: String, dir: PathBuf },

    /// A numeric field could not be read at its fixed position. `line` is
    /// 1-based, columns are 0-based byte offsets.
    #[error(
        "malformed log '{}': {field} at line {line}, cols {col_start}..{col_end}: {reason}",
        .path.display()
    )]
    MalformedLog {
        path: PathBuf,
        field: Metric,
        line: usize,
        col_start: usize,
        col_end: usize,
        reason: String,
    },

    #[error("cannot determine app version from '{0}' (expected a leading major number like 5.1)")]
    InvalidVersion(String),

    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
