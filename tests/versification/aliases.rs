//! Integration tests for the translation store

use lectio_foundation::{Book, ErrorKind};
use lectio_versification::{TranslationStore, VersificationSystem};

#[test]
fn builtin_aliases_pick_systems() {
    let store = TranslationStore::builtin();
    for (alias, system) in [
        ("ESV", "default"),
        ("NIV", "default"),
        ("KJV", "kjv"),
        ("NRSV", "nrsv"),
        ("NABRE", "nab"),
        ("DRA", "vulgate"),
        ("VULGATE", "vulgate"),
        ("JLB", "default"),
        ("新共同訳", "nrsv"),
    ] {
        let found = store.system_for_alias(alias).unwrap().unwrap();
        assert_eq!(found.name(), system, "{alias}");
    }
}

#[test]
fn missing_systems_are_errors() {
    let store = TranslationStore::builtin();
    let err = store.system("septuagint").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownVersification(_)));
}

#[test]
fn custom_systems_and_aliases() {
    let custom = VersificationSystem::default_system()
        .derive("short-mal")
        .with_chapter(Book::Malachi, 4, 1);
    let store = TranslationStore::builtin()
        .with_system(custom)
        .with_alias("SML", "short-mal");
    let system = store.system_for_alias("sml").unwrap().unwrap();
    assert_eq!(system.verse_count(Book::Malachi, 4), Some(1));
    assert!(store.system_names().contains(&"short-mal"));
}
