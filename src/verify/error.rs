use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by [`validate`](super::validate).
///
/// Validation is fail-fast: the first error stops the pass.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A piece hashed differently than the metadata declares.
    #[error("piece {piece} hash mismatch in {}", file.display())]
    PieceMismatch {
        /// The file whose bytes completed the failing piece.
        file: PathBuf,
        /// Index of the failing piece.
        piece: u32,
    },

    /// The files on disk and the declared metadata disagree about shape:
    /// piece count vs hash count, or a file shorter than its declared length.
    #[error("metadata mismatch: {0}")]
    MetadataMismatch(String),

    /// A file could not be opened or read.
    #[error("io error on {}: {source}", file.display())]
    Io {
        file: PathBuf,
        source: std::io::Error,
    },
}
