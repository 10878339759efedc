//! Error types that cross the boundary between the conversion pipeline and its callers.

use std::{io, path::PathBuf};
use thiserror::Error;

/// A property value that could not be read as an ICS UTC timestamp.
///
/// This never aborts a conversion: row builders turn it into placeholder fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("timestamp {0:?} is not in the YYYYMMDDTHHMMSSZ format")]
    Format(String),
}

/// Failures of the output sink.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Failures that end a whole conversion run.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("could not read calendar file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not create output file {path:?}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write output file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: SinkError,
    },
}

/// Result type alias for whole conversion runs.
pub type ConversionResult<T> = Result<T, ConversionError>;
