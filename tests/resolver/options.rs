//! Option handling and versification systems

use crate::{osis, parser};
use lectio_foundation::ErrorKind;

#[test]
fn versification_changes_validity() {
    assert_eq!(osis("Ps 10:18", &[]), "Ps.10.18");
    assert_eq!(osis("Ps 10:18", &[("versification_system", "vulgate")]), "");
    assert_eq!(osis("Ps 3:9", &[]), "");
    assert_eq!(
        osis("Ps 3:9", &[("versification_system", "vulgate")]),
        "Ps.3.9"
    );
}

#[test]
fn compaction_strategies() {
    assert_eq!(osis("Gen 1", &[]), "Gen.1");
    assert_eq!(osis("Gen 1-50", &[]), "Gen");
    assert_eq!(osis("Gen 1-50", &[("osis_compaction_strategy", "bc")]), "Gen.1-Gen.50");
    assert_eq!(
        osis("Gen 1", &[("osis_compaction_strategy", "bcv")]),
        "Gen.1.1-Gen.1.31"
    );
}

#[test]
fn european_punctuation() {
    assert_eq!(
        osis("John 3,16.18", &[("punctuation_strategy", "eu")]),
        "John.3.16,John.3.18"
    );
}

#[test]
fn bad_options_are_rejected() {
    let mut parser = parser(&[]);
    let err = parser.set_option("osis_compaction_strategy", "bcvx").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidOption { .. }));
    assert!(parser.set_option("versification_system", "septuagint").is_err());
    assert!(parser.set_option("no_such_option", "1").is_err());
    assert_eq!(parser.config().option("osis_compaction_strategy").as_deref(), Some("b"));
}
