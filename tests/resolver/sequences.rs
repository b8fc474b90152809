//! Sequences, ranges, and context inheritance

use crate::osis;
use proptest::prelude::*;

#[test]
fn verses_after_a_verse_stay_in_the_chapter() {
    assert_eq!(osis("John 3:16, 18", &[]), "John.3.16,John.3.18");
    assert_eq!(osis("John 3:16; 4:2", &[]), "John.3.16,John.4.2");
    assert_eq!(osis("John 3:16; 4", &[]), "John.3.16,John.4");
}

#[test]
fn ff_runs_to_the_end() {
    assert_eq!(
        osis("Rev 4:2ff", &[("osis_compaction_strategy", "bcv")]),
        "Rev.4.2-Rev.4.11"
    );
    assert_eq!(osis("Rev 3ff, 4:2ff", &[]), "Rev.3-Rev.22,Rev.4.2-Rev.4.11");
}

#[test]
fn ranges_across_chapters_and_books() {
    assert_eq!(osis("Gen 1:1-3", &[]), "Gen.1.1-Gen.1.3");
    assert_eq!(osis("Gen 1:31-2:3", &[]), "Gen.1.31-Gen.2.3");
    assert_eq!(osis("Matt-John", &[]), "Matt-John");
    assert_eq!(osis("chapters 3-4 of John", &[]), "John.3-John.4");
    assert_eq!(osis("Gen 1:5-1", &[]), "Gen.1.5,Gen.1.1");
}

#[test]
fn touching_passages_combine_unless_separated() {
    assert_eq!(osis("John 3:16, 17", &[]), "John.3.16-John.3.17");
    assert_eq!(
        osis("John 3:16, 17", &[("sequence_combination_strategy", "separate")]),
        "John.3.16,John.3.17"
    );
}

#[test]
fn books_alone() {
    assert_eq!(osis("Jude", &[]), "");
    assert_eq!(osis("Jude", &[("book_alone_strategy", "full")]), "Jude");
    assert_eq!(
        osis("Gen", &[("book_alone_strategy", "first_chapter")]),
        "Gen.1"
    );
}

#[test]
fn invalid_passages_are_hidden_by_default() {
    assert_eq!(osis("John 3:99", &[]), "");
    assert_eq!(
        osis("John 3:99", &[("invalid_passage_strategy", "include")]),
        "John.3.99"
    );
    assert_eq!(osis("Gen 1:0", &[]), "");
    assert_eq!(
        osis("Gen 1:0", &[("invalid_passage_strategy", "include")]),
        "Gen.1.0"
    );
    assert_eq!(osis("Ps 3 title", &[]), "Ps.3.1");
    let result = crate::parser(&[]).parse("John 3:99").unwrap();
    assert_eq!(result.passages().len(), 1);
    assert!(!result.passages()[0].is_valid());
}

#[test]
fn testament_filter_drops_books() {
    assert_eq!(osis("Tob 1:1", &[]), "");
    assert_eq!(osis("Tob 1:1", &[("testaments", "ona")]), "Tob.1.1");
    assert_eq!(osis("Matt 1:1", &[("testaments", "o")]), "");
}

#[test]
fn psalm_151_follows_its_strategy() {
    let apocrypha = ("testaments", "ona");
    assert_eq!(osis("Ps151 1:1", &[apocrypha]), "Ps.151.1");
    assert_eq!(
        osis("Ps151 1:1", &[apocrypha, ("ps151_strategy", "b")]),
        "Ps151.1.1"
    );
}

proptest! {
    #[test]
    fn verse_lists_stay_in_one_chapter(verses in prop::collection::btree_set(1u32..=20, 1..6)) {
        let list: Vec<String> = verses.iter().map(ToString::to_string).collect();
        let text = format!("Gen 1:{}", list.join(", "));
        let result = crate::parser(&[("sequence_combination_strategy", "separate")])
            .parse(&text)
            .unwrap();
        prop_assert_eq!(result.passages().len(), verses.len());
        for (passage, verse) in result.passages().iter().zip(&verses) {
            prop_assert_eq!(passage.osis(lectio_parser::OsisCompaction::B), format!("Gen.1.{verse}"));
        }
    }

    #[test]
    fn forward_verse_ranges_stay_in_the_chapter(a in 1u32..=30, len in 1u32..=10) {
        let b = (a + len).min(31);
        let result = crate::parser(&[]).parse(&format!("Gen 1:{a}-{b}")).unwrap();
        prop_assert_eq!(result.osis(), format!("Gen.1.{a}-Gen.1.{b}"));
    }

    #[test]
    fn smaller_range_ends_are_chapters(a in 3u32..=31, b in 2u32..=50) {
        prop_assume!(b <= a);
        let result = crate::parser(&[]).parse(&format!("Gen 1:{a}-{b}")).unwrap();
        let passages = result.passages();
        prop_assert_eq!(passages.len(), 1);
        prop_assert!(passages[0].is_valid());
        prop_assert_eq!(passages[0].end.chapter, b);
    }

    #[test]
    fn parsing_never_fails_on_text(text in "[ -~]{0,40}") {
        prop_assert!(crate::parser(&[]).parse(&text).is_ok());
    }
}
