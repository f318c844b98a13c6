use super::*;
use crate::metainfo::{File, Info};
use sha1::{Digest, Sha1};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn sha1(data: &[u8]) -> [u8; 20] {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Builds an `Info` whose piece hashes match the given file contents.
fn info_for(piece_length: u64, files: &[(&str, &[u8])]) -> Info {
    let mut stream = Vec::new();
    let mut entries = Vec::new();
    let mut offset = 0u64;

    for (name, contents) in files {
        entries.push(File {
            path: PathBuf::from(name),
            length: contents.len() as u64,
            offset,
        });
        offset += contents.len() as u64;
        stream.extend_from_slice(contents);
    }

    let pieces = stream.chunks(piece_length as usize).map(sha1).collect();

    Info {
        name: "test".to_string(),
        piece_length,
        pieces,
        files: entries,
        total_length: offset,
        private: false,
    }
}

fn write_files(temp: &TempDir, files: &[(&str, &[u8])]) {
    for (name, contents) in files {
        fs::write(temp.path().join(name), contents).unwrap();
    }
}

#[test]
fn test_validate_single_file() {
    let temp = TempDir::new().unwrap();
    let data: Vec<u8> = (0..64u8).collect();
    let files: &[(&str, &[u8])] = &[("test.dat", &data)];

    write_files(&temp, files);
    let info = info_for(16, files);

    validate(&info, temp.path()).unwrap();
}

#[test]
fn test_validate_short_final_piece() {
    let temp = TempDir::new().unwrap();
    let files: &[(&str, &[u8])] = &[("test.dat", b"abcdefghij")];

    write_files(&temp, files);
    let info = info_for(4, files);
    assert_eq!(info.pieces.len(), 3);

    validate(&info, temp.path()).unwrap();
}

#[test]
fn test_validate_two_files() {
    // Piece size 4 over a 4-byte and a 2-byte file: piece 0 is all of "a",
    // piece 1 is the 2-byte remainder from "b", hashed without padding.
    let temp = TempDir::new().unwrap();
    let files: &[(&str, &[u8])] = &[("a", b"abcd"), ("b", b"ef")];

    write_files(&temp, files);
    let info = info_for(4, files);
    assert_eq!(info.pieces.len(), 2);
    assert_eq!(info.pieces[1], sha1(b"ef"));

    validate(&info, temp.path()).unwrap();
}

#[test]
fn test_corruption_fails_fast_with_file_and_piece() {
    let temp = TempDir::new().unwrap();
    let files: &[(&str, &[u8])] = &[("a", b"abcd"), ("b", b"ef")];
    let info = info_for(4, files);

    // Corrupt a byte inside piece 0 of file "a".
    write_files(&temp, &[("a", b"aXcd"), ("b", b"ef")]);

    match validate(&info, temp.path()) {
        Err(ValidationError::PieceMismatch { file, piece }) => {
            assert_eq!(file, PathBuf::from("a"));
            assert_eq!(piece, 0);
        }
        other => panic!("expected piece mismatch, got {:?}", other),
    }
}

#[test]
fn test_final_partial_piece_attributed_to_last_file() {
    let temp = TempDir::new().unwrap();
    let files: &[(&str, &[u8])] = &[("a", b"abcd"), ("b", b"ef")];
    let info = info_for(4, files);

    // Corrupt the 2-byte remainder that forms the final piece.
    write_files(&temp, &[("a", b"abcd"), ("b", b"eX")]);

    match validate(&info, temp.path()) {
        Err(ValidationError::PieceMismatch { file, piece }) => {
            assert_eq!(file, PathBuf::from("b"));
            assert_eq!(piece, 1);
        }
        other => panic!("expected piece mismatch, got {:?}", other),
    }
}

#[test]
fn test_piece_spanning_file_boundary() {
    let temp = TempDir::new().unwrap();
    let files: &[(&str, &[u8])] = &[("a", b"abc"), ("b", b"defgh")];

    write_files(&temp, files);
    let info = info_for(4, files);

    validate(&info, temp.path()).unwrap();

    // A piece completed by the second file is attributed to it on mismatch.
    write_files(&temp, &[("a", b"abc"), ("b", b"Xefgh")]);
    match validate(&info, temp.path()) {
        Err(ValidationError::PieceMismatch { file, piece }) => {
            assert_eq!(file, PathBuf::from("b"));
            assert_eq!(piece, 0);
        }
        other => panic!("expected piece mismatch, got {:?}", other),
    }
}

#[test]
fn test_zero_length_file() {
    let temp = TempDir::new().unwrap();
    let files: &[(&str, &[u8])] = &[("empty", b""), ("data", b"abcd")];

    write_files(&temp, files);
    let info = info_for(4, files);

    validate(&info, temp.path()).unwrap();
}

#[test]
fn test_zero_length_file_must_exist() {
    let temp = TempDir::new().unwrap();
    let files: &[(&str, &[u8])] = &[("empty", b""), ("data", b"abcd")];
    let info = info_for(4, files);

    // Only write the non-empty file; the empty entry must still be openable.
    write_files(&temp, &[("data", b"abcd")]);

    match validate(&info, temp.path()) {
        Err(ValidationError::Io { file, .. }) => assert_eq!(file, PathBuf::from("empty")),
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let temp = TempDir::new().unwrap();
    let files: &[(&str, &[u8])] = &[("gone.dat", b"abcd")];
    let info = info_for(4, files);

    match validate(&info, temp.path()) {
        Err(ValidationError::Io { file, .. }) => assert_eq!(file, PathBuf::from("gone.dat")),
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn test_file_shorter_than_declared() {
    let temp = TempDir::new().unwrap();
    let files: &[(&str, &[u8])] = &[("test.dat", b"abcdefgh")];
    let info = info_for(4, files);

    write_files(&temp, &[("test.dat", b"abcde")]);

    assert!(matches!(
        validate(&info, temp.path()),
        Err(ValidationError::MetadataMismatch(_))
    ));
}

#[test]
fn test_file_longer_than_declared() {
    // Only the declared length is consumed; trailing bytes on disk are
    // ignored.
    let temp = TempDir::new().unwrap();
    let files: &[(&str, &[u8])] = &[("test.dat", b"abcd")];
    let info = info_for(4, files);

    write_files(&temp, &[("test.dat", b"abcdEXTRA")]);

    validate(&info, temp.path()).unwrap();
}

#[test]
fn test_hash_list_too_long() {
    let temp = TempDir::new().unwrap();
    let files: &[(&str, &[u8])] = &[("test.dat", b"abcdefgh")];

    write_files(&temp, files);
    let mut info = info_for(4, files);
    info.pieces.push([0u8; 20]);

    assert!(matches!(
        validate(&info, temp.path()),
        Err(ValidationError::MetadataMismatch(_))
    ));
}

#[test]
fn test_hash_list_too_short() {
    let temp = TempDir::new().unwrap();
    let files: &[(&str, &[u8])] = &[("test.dat", b"abcdefgh")];

    write_files(&temp, files);
    let mut info = info_for(4, files);
    info.pieces.pop();

    assert!(matches!(
        validate(&info, temp.path()),
        Err(ValidationError::MetadataMismatch(_))
    ));
}

#[test]
fn test_validate_subdirectory_paths() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("dir")).unwrap();

    let files: &[(&str, &[u8])] = &[("dir/a.dat", b"abcdefgh")];
    write_files(&temp, files);
    let info = info_for(4, files);

    validate(&info, temp.path()).unwrap();
}
