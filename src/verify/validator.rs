use super::error::ValidationError;
use crate::metainfo::Info;
use sha1::{Digest, Sha1};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Checks the files described by `info` against their declared piece hashes.
///
/// The declared files are treated as one logical byte stream, read in
/// declared order with each file contributing exactly its declared length,
/// and split into `piece_length`-sized pieces (the last possibly shorter).
/// Each piece is hashed with SHA-1 and compared against the declared hash
/// for its index. Pieces routinely span file boundaries.
///
/// File paths are resolved relative to `root`. Files are opened one at a
/// time; a handle is released before the next file is opened, on every exit
/// path. The pass is synchronous and touches no state outside its own piece
/// buffer.
///
/// Zero-length files must exist and be openable even though they contribute
/// no bytes.
///
/// The piece buffer is allocated at `piece_length` bytes up front. That
/// value comes straight from the metadata, so callers validating torrents
/// from untrusted sources should bound `info.piece_length` to something
/// sane before calling; this function imposes no ceiling of its own.
///
/// # Errors
///
/// Stops at the first failure:
///
/// - [`ValidationError::PieceMismatch`] names the file whose bytes completed
///   the failing piece and the piece index.
/// - [`ValidationError::MetadataMismatch`] when a file is shorter on disk
///   than declared, or the piece count and hash count disagree.
/// - [`ValidationError::Io`] when a file cannot be opened or read.
pub fn validate(info: &Info, root: &Path) -> Result<(), ValidationError> {
    let piece_length = info.piece_length as usize;
    let mut piece = vec![0u8; piece_length];
    let mut filled = 0usize;
    let mut piece_index = 0usize;

    tracing::debug!(
        pieces = info.pieces.len(),
        files = info.files.len(),
        piece_length,
        "validating files"
    );

    // The file whose bytes most recently landed in the piece buffer; a
    // partial final piece is attributed to it.
    let mut last_read: Option<&crate::metainfo::File> = None;

    for entry in &info.files {
        let path = root.join(&entry.path);
        let mut file = fs::File::open(&path).map_err(|source| ValidationError::Io {
            file: entry.path.clone(),
            source,
        })?;

        tracing::trace!(file = %entry.path.display(), length = entry.length, "reading file");

        let mut remaining = entry.length;
        while remaining > 0 {
            let want = ((piece_length - filled) as u64).min(remaining) as usize;
            let n = file
                .read(&mut piece[filled..filled + want])
                .map_err(|source| ValidationError::Io {
                    file: entry.path.clone(),
                    source,
                })?;

            if n == 0 {
                return Err(ValidationError::MetadataMismatch(format!(
                    "file {} is shorter than its declared length of {} bytes",
                    entry.path.display(),
                    entry.length
                )));
            }

            filled += n;
            remaining -= n as u64;
            last_read = Some(entry);

            if filled == piece_length {
                check_piece(info, piece_index, &piece, entry)?;
                piece_index += 1;
                filled = 0;
            }
        }
    }

    // The stream need not end on a piece boundary; the remainder is the
    // final, shorter piece.
    if filled > 0 {
        if let Some(entry) = last_read {
            check_piece(info, piece_index, &piece[..filled], entry)?;
            piece_index += 1;
        }
    }

    if piece_index != info.pieces.len() {
        return Err(ValidationError::MetadataMismatch(format!(
            "declared {} piece hashes but files produce {} pieces",
            info.pieces.len(),
            piece_index
        )));
    }

    tracing::debug!(pieces = piece_index, "validation complete");
    Ok(())
}

fn check_piece(
    info: &Info,
    index: usize,
    data: &[u8],
    entry: &crate::metainfo::File,
) -> Result<(), ValidationError> {
    let expected = info.pieces.get(index).ok_or_else(|| {
        ValidationError::MetadataMismatch(format!(
            "files produce more pieces than the {} declared hashes",
            info.pieces.len()
        ))
    })?;

    let mut hasher = Sha1::new();
    hasher.update(data);
    let actual: [u8; 20] = hasher.finalize().into();

    if actual != *expected {
        tracing::debug!(piece = index, file = %entry.path.display(), "piece hash mismatch");
        return Err(ValidationError::PieceMismatch {
            file: entry.path.clone(),
            piece: index as u32,
        });
    }

    Ok(())
}
