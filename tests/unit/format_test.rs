// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::io::Write;

use cryptolab::{CryptoError, DataFormat, InputFormat};

#[test]
fn test_hex_validation_rules() {
    assert!(InputFormat::validate(DataFormat::HexString, "ab12"));
    assert!(InputFormat::validate(DataFormat::HexString, "AB12cd"));
    // Odd length.
    assert!(!InputFormat::validate(DataFormat::HexString, "ab1"));
    // Non-hex characters.
    assert!(!InputFormat::validate(DataFormat::HexString, "zz"));
    assert!(!InputFormat::validate(DataFormat::HexString, "12 34"));
}

#[test]
fn test_hex_conversion_is_case_insensitive() {
    let lower = InputFormat::to_bytes(DataFormat::HexString, "deadbeef").unwrap();
    let upper = InputFormat::to_bytes(DataFormat::HexString, "DEADBEEF").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower, vec![0xde, 0xad, 0xbe, 0xef]);
}

#[test]
fn test_plain_text_rules() {
    assert!(InputFormat::validate(DataFormat::PlainText, "x"));
    assert!(!InputFormat::validate(DataFormat::PlainText, ""));
    assert!(matches!(
        InputFormat::to_bytes(DataFormat::PlainText, ""),
        Err(CryptoError::InvalidFormat(_))
    ));
    // UTF-8 passes through unchanged.
    assert_eq!(
        InputFormat::to_bytes(DataFormat::PlainText, "héllo").unwrap(),
        "héllo".as_bytes()
    );
}

#[test]
fn test_file_rules() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0x00, 0x01, 0xff]).unwrap();
    let path = file.path().to_str().unwrap();

    assert!(InputFormat::validate(DataFormat::File, path));
    assert_eq!(
        InputFormat::to_bytes(DataFormat::File, path).unwrap(),
        vec![0x00, 0x01, 0xff]
    );

    assert!(!InputFormat::validate(DataFormat::File, "/no/such/path"));
    assert!(matches!(
        InputFormat::to_bytes(DataFormat::File, "/no/such/path"),
        Err(CryptoError::InvalidFormat(_))
    ));

    // A directory is not a valid file input.
    let dir = tempfile::tempdir().unwrap();
    assert!(!InputFormat::validate(
        DataFormat::File,
        dir.path().to_str().unwrap()
    ));
}

#[test]
fn test_validation_does_not_create_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never-created");
    let path = path.to_str().unwrap();
    assert!(!InputFormat::validate(DataFormat::File, path));
    assert!(!std::path::Path::new(path).exists());
}
