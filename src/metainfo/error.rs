use thiserror::Error;

use crate::bencode::DecodeError;

/// Errors that can occur when parsing torrent metadata.
#[derive(Debug, Error)]
pub enum MetainfoError {
    /// The torrent file contains invalid bencode.
    #[error("bencode error: {0}")]
    Bencode(#[from] DecodeError),

    /// A required field is missing from the torrent file.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A field has an invalid value or type.
    #[error("invalid field: {0}")]
    InvalidField(&'static str),

    /// The info hash has an invalid length (must be 20 bytes).
    #[error("invalid info hash length")]
    InvalidInfoHashLength,

    /// An I/O error occurred while reading the torrent file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
