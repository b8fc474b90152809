//! OSIS ids read back as themselves

use crate::parser;
use lectio_foundation::Book;

#[test]
fn every_osis_id_reads_back() {
    let parser = parser(&[
        ("testaments", "ona"),
        ("ps151_strategy", "b"),
        ("osis_compaction_strategy", "bc"),
    ]);
    for book in Book::ALL {
        let id = book.osis();
        for text in [
            format!("{id}.1"),
            format!("{id}.1.1"),
            format!("{id}.1.1-{id}.1.2"),
        ] {
            assert_eq!(parser.parse(&text).unwrap().osis(), text, "{book:?}");
        }
    }
}

#[test]
fn isaiah_is_not_a_spaced_first_samuel() {
    assert_eq!(crate::osis("Isa 1:1", &[]), "Isa.1.1");
    assert_eq!(crate::osis("I Sa 1:1", &[]), "1Sam.1.1");
    assert_eq!(crate::osis("Isaiah 53:5", &[]), "Isa.53.5");
}
