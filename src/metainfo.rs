//! Torrent metainfo handling ([BEP-3]).
//!
//! A torrent file (`.torrent`) contains metadata about files to be shared:
//!
//! - File names, sizes, and directory structure
//! - Piece hashes for data integrity verification
//! - Tracker URLs for peer discovery
//!
//! The [`Metainfo`] struct is the typed projection of the decoded top-level
//! bencode dictionary. Its [`Info`] record (piece length, piece hashes, file
//! list) is what the [`verify`](crate::verify) module consumes to check
//! files on disk.
//!
//! The info hash is computed over the exact source bytes of the `info`
//! dictionary, located via the decoder's span tracking, so parsing never
//! needs to re-serialize anything.
//!
//! # Examples
//!
//! ```no_run
//! use peerbit::metainfo::Metainfo;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("example.torrent")?;
//! let torrent = Metainfo::from_bytes(&data)?;
//!
//! println!("Name: {}", torrent.info.name);
//! println!("Info hash: {}", torrent.info_hash);
//! println!("Pieces: {}", torrent.info.piece_count());
//!
//! for file in &torrent.info.files {
//!     println!("  {} ({} bytes)", file.path.display(), file.length);
//! }
//!
//! for tracker in torrent.trackers() {
//!     println!("Tracker: {}", tracker);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod error;
mod info_hash;
mod torrent;

pub use error::MetainfoError;
pub use info_hash::InfoHash;
pub use torrent::{File, Info, Metainfo};
