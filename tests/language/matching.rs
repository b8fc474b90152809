//! Integration tests for book matching with the English table

use lectio_foundation::{Book, Testaments};
use lectio_language::{BOOK_MARKER, BookMatcher};

fn books(text: &str) -> Vec<Vec<Book>> {
    lectio_stdlib::language("en")
        .unwrap()
        .find_books(text, Testaments::default())
        .into_iter()
        .map(|c| c.books)
        .collect()
}

#[test]
fn common_names_and_abbreviations() {
    assert_eq!(books("Genesis 1"), vec![vec![Book::Genesis]]);
    assert_eq!(books("Gen 1"), vec![vec![Book::Genesis]]);
    assert_eq!(books("1 Cor 13"), vec![vec![Book::FirstCorinthians]]);
    assert_eq!(books("Rev 4"), vec![vec![Book::Revelation]]);
}

#[test]
fn ambiguous_abbreviations_keep_both_books() {
    let found = books("Jud 1");
    assert_eq!(found.len(), 1);
    assert!(found[0].contains(&Book::Judges));
    assert!(found[0].contains(&Book::Jude));
}

#[test]
fn digits_before_names() {
    assert_eq!(books("Matt5John3"), vec![vec![Book::Matthew], vec![Book::John]]);
    assert!(books("1Ps 1").is_empty());
    assert!(books("11Sam 1").is_empty());
}

#[test]
fn annotation_preserves_offsets() {
    let matcher = lectio_stdlib::language("en").unwrap();
    let annotated = matcher.annotate("see John 3:16", Testaments::default());
    assert!(annotated.text().contains(BOOK_MARKER));
    let candidate = annotated.book(0).unwrap();
    assert_eq!(candidate.span.text("see John 3:16"), "John");
}
