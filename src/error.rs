use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while selecting, packing or emitting fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The requested counts cannot be satisfied.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A bit index lies outside `[0, total_cnt)`.
    #[error("bit index {index} out of range for a field of {total_cnt} bits")]
    OutOfRange { index: usize, total_cnt: usize },

    /// A fixture file or directory could not be accessed.
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The operating system could not provide seed material.
    #[error("failed to seed random source: {0}")]
    Entropy(String),

    /// A hex literal list could not be parsed.
    #[error("malformed hex list: {0}")]
    Parse(String),
}

pub type Result<T, E = FixtureError> = std::result::Result<T, E>;
