//! Integration tests for book identifiers and points

use lectio_foundation::{Bcv, Book, Testament};
use proptest::prelude::*;

#[test]
fn osis_ids_round_trip() {
    for book in Book::ALL {
        assert_eq!(Book::from_osis(book.osis()), Some(*book));
        assert_eq!(book.osis().parse::<Book>().unwrap(), *book);
    }
}

#[test]
fn lookup_ignores_case() {
    assert_eq!(Book::from_osis("1COR"), Some(Book::FirstCorinthians));
    assert_eq!(Book::from_osis("ps151"), Some(Book::Psalm151));
    assert!("Jhn".parse::<Book>().is_err());
}

#[test]
fn testaments_are_assigned() {
    assert_eq!(Book::Genesis.testament(), Testament::Old);
    assert_eq!(Book::Revelation.testament(), Testament::New);
    assert_eq!(Book::Tobit.testament(), Testament::Apocrypha);
    assert!(Book::Psalm151.is_psalm_151());
}

#[test]
fn points_render_as_osis() {
    let point = Bcv::new(Book::FirstCorinthians, 13, 4);
    assert_eq!(point.to_string(), "1Cor.13.4");
    assert_eq!(point.with_verse(7).to_string(), "1Cor.13.7");
    assert!(Bcv::new(Book::Psalms, 3, Bcv::TITLE).is_title());
}

proptest! {
    #[test]
    fn any_book_displays_its_osis(index in 0..Book::ALL.len()) {
        let book = Book::ALL[index];
        prop_assert_eq!(book.to_string(), book.osis());
    }
}
