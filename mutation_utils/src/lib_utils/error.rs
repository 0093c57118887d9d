// errors raised while reading and writing mutation tables

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MutationError {
    #[error("Failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed table {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Required column '{column}' not found in {path:?}")]
    MissingColumn { path: PathBuf, column: String },
    #[error("None of the columns {columns:?} found in {path:?}")]
    MissingAnyColumn { path: PathBuf, columns: Vec<String> },
    #[error("Table {path:?} has no header row")]
    EmptyTable { path: PathBuf },
}

impl MutationError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MutationError::Io { path: path.into(), source }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        MutationError::Csv { path: path.into(), source }
    }
}
