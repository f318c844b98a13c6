//! Piece-level integrity validation of files on disk.
//!
//! A torrent's [`Info`](crate::metainfo::Info) record declares an ordered
//! file list and a SHA-1 hash for each fixed-size piece of the files'
//! concatenated contents. [`validate`] re-derives those hashes from disk and
//! compares them, failing fast with the offending file and piece index on
//! the first mismatch.
//!
//! # Examples
//!
//! ```no_run
//! use peerbit::metainfo::Metainfo;
//! use peerbit::verify::validate;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("example.torrent")?;
//! let metainfo = Metainfo::from_bytes(&data)?;
//!
//! match validate(&metainfo.info, Path::new("downloads")) {
//!     Ok(()) => println!("all pieces verified"),
//!     Err(e) => println!("verification failed: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::validate;

#[cfg(test)]
mod tests;
