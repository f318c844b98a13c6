use super::error::MetainfoError;
use super::info_hash::InfoHash;
use crate::bencode::{decode, Value};
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::path::{Path, PathBuf};

/// A parsed torrent file.
///
/// Contains all metadata from a `.torrent` file, including file information,
/// piece hashes, and tracker URLs.
///
/// # Examples
///
/// ```no_run
/// use peerbit::metainfo::Metainfo;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let data = std::fs::read("example.torrent")?;
/// let metainfo = Metainfo::from_bytes(&data)?;
///
/// println!("Torrent: {}", metainfo.info.name);
/// println!("Size: {} bytes", metainfo.info.total_length);
/// println!("Info hash: {}", metainfo.info_hash);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Metainfo {
    /// The info dictionary containing file and piece information.
    pub info: Info,
    /// The unique identifier for this torrent (hash of the info dictionary).
    pub info_hash: InfoHash,
    /// Primary tracker URL.
    pub announce: Option<String>,
    /// Multi-tier tracker list ([BEP-12](http://bittorrent.org/beps/bep_0012.html)).
    pub announce_list: Vec<Vec<String>>,
    /// Unix timestamp when the torrent was created.
    pub creation_date: Option<i64>,
    /// Optional comment about the torrent.
    pub comment: Option<String>,
    /// Name/version of the program that created the torrent.
    pub created_by: Option<String>,
    raw_info: Bytes,
}

/// The info dictionary from a torrent file.
///
/// Contains the core metadata that identifies the torrent content.
/// The SHA-1 hash of this dictionary (in its original bencode form) is the
/// info hash.
#[derive(Debug, Clone)]
pub struct Info {
    /// Suggested name for the file or directory.
    pub name: String,
    /// Number of bytes per piece.
    pub piece_length: u64,
    /// SHA-1 hash of each piece (20 bytes each).
    pub pieces: Vec<[u8; 20]>,
    /// List of files in the torrent.
    pub files: Vec<File>,
    /// Total size of all files combined.
    pub total_length: u64,
    /// If true, clients should only use trackers in the metainfo (no DHT/PEX).
    pub private: bool,
}

/// A file within a torrent.
///
/// For single-file torrents, there is one file with the torrent name.
/// For multi-file torrents, paths are relative to the torrent's root directory.
#[derive(Debug, Clone)]
pub struct File {
    /// Path to the file (relative to torrent root).
    pub path: PathBuf,
    /// Size of the file in bytes.
    pub length: u64,
    /// Byte offset within the torrent's piece data.
    pub offset: u64,
}

impl Metainfo {
    /// Parses a torrent file from raw bytes.
    ///
    /// The info hash is computed over the exact bytes the `info` dictionary
    /// occupied in `data`, located via the decoder's span tracking. No
    /// re-serialization takes place, so torrents with unsorted or duplicate
    /// dictionary keys hash the same way other clients see them.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The data is not valid bencode
    /// - Required fields are missing (info, name, pieces, etc.)
    /// - The pieces field length is not a multiple of 20
    /// - The piece length is not positive
    pub fn from_bytes(data: &[u8]) -> Result<Self, MetainfoError> {
        let value = decode(data)?;
        let dict = value.as_dict().ok_or(MetainfoError::InvalidField("root"))?;

        let info_value = dict
            .get(b"info")
            .ok_or(MetainfoError::MissingField("info"))?;

        if info_value.as_dict().is_none() {
            return Err(MetainfoError::InvalidField("info"));
        }

        let raw_info = Bytes::copy_from_slice(info_value.span().slice(data));
        let info_hash = compute_info_hash(&raw_info);
        let info = parse_info(info_value)?;

        let announce = dict
            .get(b"announce")
            .and_then(|v| v.as_str())
            .map(String::from);

        let announce_list = dict
            .get(b"announce-list")
            .and_then(|v| v.as_list())
            .map(|list| {
                list.iter()
                    .filter_map(|tier| {
                        tier.as_list().map(|urls| {
                            urls.iter()
                                .filter_map(|u| u.as_str().map(String::from))
                                .collect()
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        let creation_date = dict.get(b"creation date").and_then(|v| v.as_integer());

        let comment = dict
            .get(b"comment")
            .and_then(|v| v.as_str())
            .map(String::from);

        let created_by = dict
            .get(b"created by")
            .and_then(|v| v.as_str())
            .map(String::from);

        tracing::debug!(
            name = %info.name,
            pieces = info.pieces.len(),
            files = info.files.len(),
            total_length = info.total_length,
            "parsed torrent metainfo"
        );

        Ok(Self {
            info,
            info_hash,
            announce,
            announce_list,
            creation_date,
            comment,
            created_by,
            raw_info,
        })
    }

    /// Reads and parses a torrent file from disk.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use peerbit::metainfo::Metainfo;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let metainfo = Metainfo::from_file("example.torrent")?;
    /// println!("Name: {}", metainfo.info.name);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MetainfoError> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Returns the raw bencoded info dictionary, exactly as it appeared in
    /// the source file.
    pub fn raw_info(&self) -> &Bytes {
        &self.raw_info
    }

    /// Returns all tracker URLs from both `announce` and `announce-list`.
    ///
    /// The primary tracker (from `announce`) comes first, followed by
    /// trackers from `announce-list`. Duplicates are removed.
    pub fn trackers(&self) -> Vec<String> {
        let mut trackers = Vec::new();

        if let Some(ref announce) = self.announce {
            trackers.push(announce.clone());
        }

        for tier in &self.announce_list {
            for tracker in tier {
                if !trackers.contains(tracker) {
                    trackers.push(tracker.clone());
                }
            }
        }

        trackers
    }
}

impl Info {
    /// Returns the number of pieces in the torrent.
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }
}

fn parse_info(value: &Value) -> Result<Info, MetainfoError> {
    let dict = value.as_dict().ok_or(MetainfoError::InvalidField("info"))?;

    let name = dict
        .get(b"name")
        .and_then(|v| v.as_str())
        .ok_or(MetainfoError::MissingField("name"))?
        .to_string();

    let piece_length = dict
        .get(b"piece length")
        .and_then(|v| v.as_integer())
        .ok_or(MetainfoError::MissingField("piece length"))?;

    if piece_length <= 0 {
        return Err(MetainfoError::InvalidField("piece length"));
    }
    let piece_length = piece_length as u64;

    let pieces_bytes = dict
        .get(b"pieces")
        .and_then(|v| v.as_bytes())
        .ok_or(MetainfoError::MissingField("pieces"))?;

    if pieces_bytes.len() % 20 != 0 {
        return Err(MetainfoError::InvalidField("pieces"));
    }

    let pieces: Vec<[u8; 20]> = pieces_bytes
        .chunks_exact(20)
        .map(|chunk| {
            let mut arr = [0u8; 20];
            arr.copy_from_slice(chunk);
            arr
        })
        .collect();

    let private = dict
        .get(b"private")
        .and_then(|v| v.as_integer())
        .map(|v| v == 1)
        .unwrap_or(false);

    let (files, total_length) = if let Some(length) =
        dict.get(b"length").and_then(|v| v.as_integer())
    {
        if length < 0 {
            return Err(MetainfoError::InvalidField("length"));
        }
        let length = length as u64;
        let file = File {
            path: PathBuf::from(&name),
            length,
            offset: 0,
        };
        (vec![file], length)
    } else if let Some(files_list) = dict.get(b"files").and_then(|v| v.as_list()) {
        let mut files = Vec::new();
        let mut offset = 0u64;

        for file_value in files_list {
            let file_dict = file_value
                .as_dict()
                .ok_or(MetainfoError::InvalidField("files"))?;

            let length = file_dict
                .get(b"length")
                .and_then(|v| v.as_integer())
                .ok_or(MetainfoError::MissingField("file length"))?;

            if length < 0 {
                return Err(MetainfoError::InvalidField("file length"));
            }
            let length = length as u64;

            let path_list = file_dict
                .get(b"path")
                .and_then(|v| v.as_list())
                .ok_or(MetainfoError::MissingField("file path"))?;

            let path: PathBuf = std::iter::once(name.clone())
                .chain(
                    path_list
                        .iter()
                        .filter_map(|p| p.as_str().map(String::from)),
                )
                .collect();

            files.push(File {
                path,
                length,
                offset,
            });

            offset = offset
                .checked_add(length)
                .ok_or(MetainfoError::InvalidField("file length"))?;
        }

        let total = offset;
        (files, total)
    } else {
        return Err(MetainfoError::MissingField("length or files"));
    };

    Ok(Info {
        name,
        piece_length,
        pieces,
        files,
        total_length,
        private,
    })
}

fn compute_info_hash(raw_info: &[u8]) -> InfoHash {
    let mut hasher = Sha1::new();
    hasher.update(raw_info);
    InfoHash::new(hasher.finalize().into())
}
