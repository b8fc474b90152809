//! Translations attached to sequences

use crate::parser;

#[test]
fn translations_group_passages() {
    let result = parser(&[]).parse("Lev 1 (KJV), Gen 2 NIV").unwrap();
    assert_eq!(
        result.osis_and_translations(),
        vec![
            ("Lev.1".to_string(), "KJV".to_string()),
            ("Gen.2".to_string(), "NIV".to_string()),
        ]
    );
}

#[test]
fn several_translations_share_a_sequence() {
    let result = parser(&[]).parse("John 3:16 (KJV, NIV)").unwrap();
    assert_eq!(
        result.osis_and_translations(),
        vec![("John.3.16".to_string(), "KJV,NIV".to_string())]
    );
}

#[test]
fn translation_system_is_used_for_validation() {
    assert_eq!(parser(&[]).parse("Ps 3:9 (Vulgate)").unwrap().osis(), "Ps.3.9");
    assert_eq!(parser(&[]).parse("Ps 3:9 (NIV)").unwrap().osis(), "");
}

#[test]
fn unknown_translations_warn_with_their_span() {
    let text = "Ps 3:1 (LXX)";
    let result = parser(&[]).parse(text).unwrap();
    assert_eq!(result.osis(), "Ps.3.1");
    assert_eq!(result.warnings().len(), 1);
    let lectio_parser::Warning::UnrecognizedTranslation { alias, span } = &result.warnings()[0];
    assert_eq!(alias, "LXX");
    assert_eq!(span.text(text), "LXX");
}

#[test]
fn indices_cover_the_citation() {
    let text = "Read John 3:16 (NIV) today.";
    let entries = parser(&[]).parse(text).unwrap().osis_and_indices();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].osis, "John.3.16");
    assert_eq!(entries[0].translations, vec!["NIV".to_string()]);
    assert!(entries[0].span.text(text).starts_with("John 3:16"));
}
