#![cfg(test)]

use std::{
    io::{Cursor, Write},
    path::Path,
};

use test_case::test_case;

use super::{from_inline, from_path, from_path_or, from_reader, Source, STDIN_PATH};
use crate::Error;

#[test_case("10.0.0.1", &["10.0.0.1"] ; "single")]
#[test_case("10.0.0.1,10.1.0.0/16", &["10.0.0.1", "10.1.0.0/16"] ; "two")]
#[test_case(" 10.0.0.1 , 10.0.0.2", &["10.0.0.1", "10.0.0.2"] ; "padded")]
#[test_case("10.0.0.1,", &["10.0.0.1", ""] ; "trailing comma")]
fn inline(list: &str, expected: &[&str]) {
    assert_eq!(from_inline(list), expected);
}

#[test]
fn reader_skips_blank_and_comments() {
    let input = "# office\n10.0.0.1\n\n  10.1.0.0/16  \n\t\n# vpn\n172.16.0.0/12\n";
    let addresses = from_reader(Cursor::new(input)).unwrap();
    assert_eq!(addresses, ["10.0.0.1", "10.1.0.0/16", "172.16.0.0/12"]);
}

#[test]
fn reader_handles_crlf_and_missing_newline() {
    let addresses = from_reader(Cursor::new("10.0.0.1\r\n10.0.0.2")).unwrap();
    assert_eq!(addresses, ["10.0.0.1", "10.0.0.2"]);
}

#[test]
fn reader_rejects_invalid_utf8() {
    let err = from_reader(Cursor::new(b"10.0.0.1\n\xff\xfe\n".to_vec())).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn file_source() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "10.0.0.1").unwrap();
    writeln!(file, "10.2.0.0/16").unwrap();

    let source = Source::File(file.path().to_path_buf());
    assert_eq!(source.addresses().unwrap(), ["10.0.0.1", "10.2.0.0/16"]);
}

#[test]
fn empty_file_source() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let source = Source::File(file.path().to_path_buf());
    assert!(source.addresses().unwrap().is_empty());
}

#[test]
fn missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let err = from_path(&path).unwrap_err();
    assert_eq!(err.to_string(), format!("Failed to read {}", path.display()));
    assert!(matches!(
        err,
        Error::SourceFile { source, .. } if source.kind() == std::io::ErrorKind::NotFound
    ));
}

#[test]
fn dash_reads_stdin() {
    let addresses = from_path_or(Path::new(STDIN_PATH), || {
        Cursor::new("10.0.0.1\n# vpn\n10.8.0.0/24\n")
    })
    .unwrap();
    assert_eq!(addresses, ["10.0.0.1", "10.8.0.0/24"]);
}

#[test]
fn stdin_untouched_for_files() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "10.0.0.7").unwrap();
    let addresses = from_path_or(file.path(), || -> Cursor<Vec<u8>> {
        panic!("stdin opened for a file source")
    })
    .unwrap();
    assert_eq!(addresses, ["10.0.0.7"]);
}

#[test]
fn stdin_errors_name_dash() {
    let err =
        from_path_or(Path::new(STDIN_PATH), || Cursor::new(b"\xff\n".to_vec())).unwrap_err();
    assert_eq!(err.to_string(), "Failed to read -");
    assert!(matches!(
        err,
        Error::SourceFile { source, .. } if source.kind() == std::io::ErrorKind::InvalidData
    ));
}
