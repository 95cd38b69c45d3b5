//! Error types for fontdex-core (made by FontLab https://www.fontlab.com/)

use std::io;
use std::path::PathBuf;

use read_fonts::ReadError;
use thiserror::Error;

/// A single face could not be opened or parsed.
///
/// These are recoverable: the sync pass logs them and moves on to the next
/// face, and the file stays "unknown" so the next pass tries again.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("reading font {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing face {index} of {path}: {source}")]
    Parse {
        path: PathBuf,
        index: u32,
        #[source]
        source: ReadError,
    },
    #[error("face index {index} out of range for {path} ({count} faces)")]
    FaceIndex {
        path: PathBuf,
        index: u32,
        count: u32,
    },
}

/// The persistent cache failed; fatal to the current sync pass.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("creating cache directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cache database error: {0}")]
    Database(#[from] heed::Error),
    #[error("encoding {what} row: {message}")]
    Encode { what: &'static str, message: String },
    #[error("decoding {what} row: {message}")]
    Decode { what: &'static str, message: String },
}

/// Font roots could not be walked.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("root path does not exist: {}", .0.display())]
    MissingRoot(PathBuf),
    #[error("walking font directories: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Anything that can stop a sync pass or a cache lookup.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    #[error("sync worker panicked")]
    WorkerPanicked,
}

impl From<heed::Error> for Error {
    fn from(err: heed::Error) -> Self {
        Error::Store(StoreError::Database(err))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
