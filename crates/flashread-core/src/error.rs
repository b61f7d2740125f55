//! Error types for the reader core.

use thiserror::Error;

/// Failure to turn raw text into a playable document.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    #[error("no readable text left after normalization")]
    EmptyContent,
}

/// Failure to parse a caller-supplied configuration value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown source format '{0}' (expected plain, markdown or pdf-extracted)")]
    UnknownFormat(String),

    #[error("unknown ORP mode '{0}' (expected spritz, center or first-vowel)")]
    UnknownOrpMode(String),
}
