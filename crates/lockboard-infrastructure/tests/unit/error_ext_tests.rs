//! Error Extension Tests

use lockboard_domain::Error;
use lockboard_infrastructure::error_ext::ErrorContext;
use std::io;

fn io_failure() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
}

#[test]
fn test_io_context() {
    let err = io_failure().io_context("Failed to read file").unwrap_err();
    match err {
        Error::Io { message, source } => {
            assert_eq!(message, "Failed to read file: missing");
            assert!(source.is_some());
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context() {
    let err = io_failure().config_context("Bad config").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("Bad config: missing"));
}

#[test]
fn test_with_config_context_is_lazy() {
    let mut called = false;
    let ok: Result<u8, io::Error> = Ok(7);
    let value = ok
        .with_config_context(|| {
            called = true;
            "unused"
        })
        .unwrap();

    assert_eq!(value, 7);
    assert!(!called);
}
