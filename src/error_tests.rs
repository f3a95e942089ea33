use std::path::PathBuf;

use super::*;

#[test]
fn error_display_file_read() {
    let err = StyleGuardError::FileRead {
        path: PathBuf::from("main.cpp"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("main.cpp"));
}

#[test]
fn error_file_read_preserves_source() {
    let err = StyleGuardError::FileRead {
        path: PathBuf::from("main.cpp"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    let source = std::error::Error::source(&err);
    assert!(source.is_some());
}

#[test]
fn error_display_io() {
    let err = StyleGuardError::from(std::io::Error::new(
        std::io::ErrorKind::BrokenPipe,
        "broken pipe",
    ));
    assert!(err.to_string().contains("broken pipe"));
}
