//! Integration tests for Error types

use lectio_foundation::{Error, ErrorKind};

#[test]
fn unknown_names_carry_the_name() {
    let err = Error::unknown_book("Jhn");
    assert!(matches!(err.kind, ErrorKind::UnknownBook(_)));
    assert!(err.to_string().contains("Jhn"));

    let err = Error::unknown_versification("lxx");
    assert!(matches!(err.kind, ErrorKind::UnknownVersification(_)));
    assert!(err.to_string().contains("lxx"));

    let err = Error::unknown_language("xx");
    assert!(err.to_string().contains("xx"));
}

#[test]
fn invalid_option_lists_expected_values() {
    let err = Error::invalid_option("ps151_strategy", "c", "b | bc");
    let msg = err.to_string();
    assert!(msg.contains("ps151_strategy"));
    assert!(msg.contains("'c'"));
    assert!(msg.contains("b | bc"));
    assert!(!err.is_parse_error());
}

#[test]
fn io_and_serialization_errors_display() {
    let err = Error::new(ErrorKind::IoError("disk full".to_string()));
    assert!(err.to_string().contains("disk full"));
    let err = Error::new(ErrorKind::SerializationError("bad tag".to_string()));
    assert!(err.to_string().contains("bad tag"));
}
