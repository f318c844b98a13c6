//! peerbit - torrent metadata decoding and file validation
//!
//! This library decodes the bencode format used by `.torrent` files and
//! verifies downloaded files against the per-piece SHA-1 hashes the
//! metadata declares.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 bencode decoding with source-span tracking
//! - [`metainfo`] - Typed projection of torrent metadata, info hash
//! - [`verify`] - Piece-level integrity validation of files on disk
//!
//! # Example
//!
//! ```no_run
//! use peerbit::{Metainfo, validate};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("example.torrent")?;
//! let metainfo = Metainfo::from_bytes(&data)?;
//! validate(&metainfo.info, Path::new("downloads"))?;
//! # Ok(())
//! # }
//! ```

pub mod bencode;
pub mod metainfo;
pub mod verify;

pub use bencode::{decode, DecodeError, Dict, Span, Value, ValueKind};
pub use metainfo::{File, Info, InfoHash, Metainfo, MetainfoError};
pub use verify::{validate, ValidationError};
