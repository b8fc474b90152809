//! Integration tests for the Japanese table
//!
//! The Japanese table recognizes OSIS ids and CJK keywords alongside
//! Japanese book names, so most cases are written with OSIS ids.

use lectio_foundation::{Book, Testament};
use lectio_parser::BcvParser;

fn parser(options: &[(&str, &str)]) -> BcvParser {
    let mut parser = BcvParser::for_language("ja").unwrap();
    parser.set_option("osis_compaction_strategy", "bc").unwrap();
    for (name, value) in options {
        parser.set_option(name, value).unwrap();
    }
    parser
}

fn osis(text: &str) -> String {
    parser(&[]).parse(text).unwrap().osis()
}

#[test]
fn every_osis_id_reads_back() {
    let parser = parser(&[("testaments", "ona"), ("ps151_strategy", "b")]);
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
fn apocrypha_needs_its_testament() {
    let parser = parser(&[("testaments", "on")]);
    for book in Book::ALL.iter().filter(|b| b.testament() == Testament::Apocrypha) {
        let text = format!("{}.1", book.osis());
        assert_eq!(parser.parse(&text).unwrap().osis(), "", "{book:?}");
    }
}

#[test]
fn glued_books_and_digit_prefixes() {
    assert_eq!(osis("Matt5John3"), "Matt.5,John.3");
    assert_eq!(osis("1Ps 1"), "");
    assert_eq!(osis("11Sam 1"), "");
}

#[test]
fn wave_dash_is_a_range() {
    assert_eq!(osis("Titus 1:1 ～ 2"), "Titus.1.1-Titus.1.2");
    assert_eq!(osis("Matt 1～2"), "Matt.1-Matt.2");
    assert_eq!(osis("Phlm 2 ～ 3"), "Phlm.1.2-Phlm.1.3");
}

#[test]
fn chapter_and_verse_keywords() {
    assert_eq!(osis("Titus 1:1, 章 2"), "Titus.1.1,Titus.2");
    assert_eq!(osis("Exod 1:1 節 3"), "Exod.1.1,Exod.1.3");
    assert_eq!(osis("Phlm 節 6"), "Phlm.1.6");
    assert_eq!(osis("Phlm 2 AND 6"), "Phlm.1.2,Phlm.1.6");
    assert_eq!(osis("Matt 3:4 章 6"), "Matt.3.4,Matt.6");
    assert_eq!(osis("Exod 1:1 and 3"), "Exod.1.1,Exod.1.3");
}

#[test]
fn ff_ignores_case() {
    for text in ["Rev 3ff, 4:2ff", "REV 3 FF, 4:2 FF", "rev 3 ff, 4:2 ff"] {
        assert_eq!(osis(text), "Rev.3-Rev.22,Rev.4.2-Rev.4.11", "{text}");
    }
}

#[test]
fn titles_read_as_first_verses() {
    assert_eq!(osis("Ps 3 title, 4:2, 5:title"), "Ps.3.1,Ps.4.2,Ps.5.1");
}

#[test]
fn psalm_151_folds_into_psalms() {
    let parser = parser(&[("testaments", "ona")]);
    let osis = |text: &str| parser.parse(text).unwrap().osis();
    assert_eq!(osis("Ps151.1"), "Ps.151");
    assert_eq!(osis("Ps151.1.1"), "Ps.151.1");
    assert_eq!(osis("Ps151.1-Ps151.2"), "Ps.151.1-Ps.151.2");
}

#[test]
fn lowercase_ids_and_translations() {
    let result = parser(&[]).parse("lev 1 jlb").unwrap();
    assert_eq!(
        result.osis_and_translations(),
        vec![("Lev.1".to_string(), "JLB".to_string())]
    );
    assert!(result.warnings().is_empty());

    let enclosed = parser(&[]).parse("Lev 1 (JLB)").unwrap();
    assert_eq!(
        enclosed.osis_and_translations(),
        vec![("Lev.1".to_string(), "JLB".to_string())]
    );
}

#[test]
fn surrounding_punctuation_is_ignored() {
    let full = parser(&[("book_alone_strategy", "full")]);
    assert_eq!(full.parse("\u{2014}Matt\u{2014}").unwrap().osis(), "Matt.1-Matt.28");
    assert_eq!(osis("\u{201c}Matt 1:1\u{201d}"), "Matt.1.1");
}
