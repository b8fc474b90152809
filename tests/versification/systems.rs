//! Integration tests for versification systems

use std::cmp::Ordering;

use lectio_foundation::{Bcv, Book};
use lectio_versification::VersificationSystem;
use proptest::prelude::*;

#[test]
fn psalm_verse_counts_depend_on_the_system() {
    let default = VersificationSystem::default_system();
    let vulgate = VersificationSystem::vulgate();
    assert_eq!(default.verse_count(Book::Psalms, 10), Some(18));
    assert!(vulgate.verse_count(Book::Psalms, 10).is_some_and(|n| n < 18));
    assert_eq!(vulgate.verse_count(Book::Psalms, 3), Some(9));
}

#[test]
fn derived_systems_leave_the_base_alone() {
    let base = VersificationSystem::default_system();
    let custom = base.derive("custom").with_chapter(Book::Malachi, 3, 24);
    assert_eq!(custom.verse_count(Book::Malachi, 3), Some(24));
    assert_ne!(base.verse_count(Book::Malachi, 3), Some(24));
    assert_eq!(custom.verse_count(Book::John, 3), base.verse_count(Book::John, 3));
}

#[test]
fn book_end_is_the_last_verse() {
    let system = VersificationSystem::default_system();
    assert_eq!(system.book_end(Book::Revelation), Some(Bcv::new(Book::Revelation, 22, 21)));
    assert_eq!(system.book_end(Book::Jude), Some(Bcv::new(Book::Jude, 1, 25)));
}

#[test]
fn one_chapter_books() {
    let system = VersificationSystem::default_system();
    for book in [Book::Obadiah, Book::Philemon, Book::SecondJohn, Book::ThirdJohn, Book::Jude] {
        assert!(system.is_single_chapter(book), "{book}");
    }
    assert!(!system.is_single_chapter(Book::John));
}

proptest! {
    #[test]
    fn comparison_follows_chapters_within_a_book(a in 1u32..20, b in 1u32..20) {
        let system = VersificationSystem::default_system();
        let first = Bcv::new(Book::Genesis, a, 1);
        let second = Bcv::new(Book::Genesis, b, 1);
        prop_assert_eq!(system.compare(&first, &second), a.cmp(&b));
        prop_assert_eq!(system.compare(&second, &first), b.cmp(&a));
        prop_assert_eq!(system.compare(&first, &first), Ordering::Equal);
    }
}
