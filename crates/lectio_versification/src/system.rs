//! Versification systems.
//!
//! A [`VersificationSystem`] knows the order of books and how many verses
//! each chapter of each book has. Systems are persistent values: deriving a
//! system for a translation shares every book table the derivation does not
//! touch.

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use lectio_foundation::{Bcv, Book, LtMap, LtVec};

use crate::data;

/// A named table of book order and per-chapter verse counts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VersificationSystem {
    /// System name (`default`, `vulgate`, ...).
    name: String,
    /// Book to position in canonical order.
    order: LtMap<Book, u16>,
    /// Book to verse counts, one entry per chapter.
    chapters: LtMap<Book, LtVec<u32>>,
}

impl VersificationSystem {
    /// Creates an empty system with the canonical book order.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            order: order_map(Book::ALL),
            chapters: LtMap::new(),
        }
    }

    /// The common English versification, including the Apocrypha.
    #[must_use]
    pub fn default_system() -> Self {
        data::DEFAULT_CHAPTERS
            .iter()
            .fold(Self::new("default"), |system, (book, verses)| {
                system.with_book(*book, verses)
            })
    }

    /// The Latin Vulgate: Greek psalm numbering and Catholic book order.
    #[must_use]
    pub fn vulgate() -> Self {
        Self::default_system()
            .derive("vulgate")
            .with_order(data::CATHOLIC_ORDER)
            .with_book(Book::Psalms, data::VULGATE_PSALMS)
    }

    /// The King James Version.
    #[must_use]
    pub fn kjv() -> Self {
        Self::default_system().derive_with("kjv", data::KJV_OVERRIDES)
    }

    /// The New Revised Standard Version.
    #[must_use]
    pub fn nrsv() -> Self {
        Self::default_system().derive_with("nrsv", data::NRSV_OVERRIDES)
    }

    /// The New American Bible.
    #[must_use]
    pub fn nab() -> Self {
        Self::default_system()
            .derive_with("nab", data::NAB_OVERRIDES)
            .with_order(data::CATHOLIC_ORDER)
    }

    /// Returns the system name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a copy of this system under a new name.
    ///
    /// The copy shares all tables with `self` until one of them is replaced.
    #[must_use]
    pub fn derive(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Derives a system and applies per-book overrides.
    #[must_use]
    pub fn derive_with(&self, name: impl Into<String>, overrides: &[(Book, &[u32])]) -> Self {
        overrides
            .iter()
            .fold(self.derive(name), |system, (book, verses)| {
                system.with_book(*book, verses)
            })
    }

    /// Sets the verse counts for every chapter of a book.
    #[must_use]
    pub fn with_book(mut self, book: Book, verses: &[u32]) -> Self {
        self.chapters = self.chapters.insert(book, LtVec::from(verses));
        self
    }

    /// Sets the verse count of a single chapter, if the chapter exists.
    #[must_use]
    pub fn with_chapter(mut self, book: Book, chapter: u32, verses: u32) -> Self {
        let updated = self
            .chapters
            .get(&book)
            .and_then(|counts| counts.update(chapter_index(chapter)?, verses));
        if let Some(counts) = updated {
            self.chapters = self.chapters.insert(book, counts);
        }
        self
    }

    /// Returns a system where Psalm 151 is also addressable as chapter 151
    /// of Psalms. Does nothing if either book is missing.
    #[must_use]
    pub fn with_psalm_151_folded(mut self) -> Self {
        let extended = self
            .chapters
            .get(&Book::Psalm151)
            .and_then(|extra| extra.get(0).copied())
            .zip(self.chapters.get(&Book::Psalms))
            .filter(|(_, psalms)| psalms.len() == 150)
            .map(|(verses, psalms)| psalms.push_back(verses));
        if let Some(psalms) = extended {
            self.chapters = self.chapters.insert(Book::Psalms, psalms);
        }
        self
    }

    /// Removes a book from the system.
    #[must_use]
    pub fn without_book(mut self, book: Book) -> Self {
        self.chapters = self.chapters.remove(&book);
        self
    }

    /// Replaces the book order. Books missing from `books` keep their
    /// relative order after the listed ones.
    #[must_use]
    pub fn with_order(mut self, books: &[Book]) -> Self {
        let rest = Book::ALL.iter().filter(|b| !books.contains(b)).copied();
        let ordered: Vec<Book> = books.iter().copied().chain(rest).collect();
        self.order = order_map(&ordered);
        self
    }

    /// Returns true if the system has a table for the book.
    #[must_use]
    pub fn contains(&self, book: Book) -> bool {
        self.chapters.contains_key(&book)
    }

    /// Returns the number of chapters in a book.
    #[must_use]
    pub fn chapter_count(&self, book: Book) -> Option<u32> {
        self.chapters
            .get(&book)
            .and_then(|counts| u32::try_from(counts.len()).ok())
    }

    /// Returns the number of verses in a chapter.
    #[must_use]
    pub fn verse_count(&self, book: Book, chapter: u32) -> Option<u32> {
        self.chapters
            .get(&book)?
            .get(chapter_index(chapter)?)
            .copied()
    }

    /// Returns the verse counts of every chapter of a book.
    #[must_use]
    pub fn verses(&self, book: Book) -> Option<&LtVec<u32>> {
        self.chapters.get(&book)
    }

    /// Returns the last point of a book.
    #[must_use]
    pub fn book_end(&self, book: Book) -> Option<Bcv> {
        let chapter = self.chapter_count(book)?;
        Some(Bcv::new(book, chapter, self.verse_count(book, chapter)?))
    }

    /// Returns true if the book has exactly one chapter.
    #[must_use]
    pub fn is_single_chapter(&self, book: Book) -> bool {
        self.chapter_count(book) == Some(1)
    }

    /// Returns the position of a book in this system's order.
    #[must_use]
    pub fn position(&self, book: Book) -> u16 {
        self.order.get(&book).copied().unwrap_or(u16::MAX)
    }

    /// Compares two points in book, chapter, verse order.
    #[must_use]
    pub fn compare(&self, a: &Bcv, b: &Bcv) -> Ordering {
        self.position(a.book)
            .cmp(&self.position(b.book))
            .then(a.chapter.cmp(&b.chapter))
            .then(a.verse.cmp(&b.verse))
    }

    /// Returns the point directly after `point` within the same book, or
    /// `None` at the end of the book or outside the table.
    #[must_use]
    pub fn next_in_book(&self, point: &Bcv) -> Option<Bcv> {
        let last = self.verse_count(point.book, point.chapter)?;
        if point.verse < last {
            return Some(point.with_verse(point.verse + 1));
        }
        let chapters = self.chapter_count(point.book)?;
        (point.chapter < chapters).then(|| point.with_chapter(point.chapter + 1, 1))
    }

    /// Iterates over the books this system has tables for, in order.
    pub fn books(&self) -> impl Iterator<Item = Book> + '_ {
        let mut books: Vec<Book> = self.chapters.keys().copied().collect();
        books.sort_by_key(|book| self.position(*book));
        books.into_iter()
    }
}

fn order_map(books: &[Book]) -> LtMap<Book, u16> {
    books
        .iter()
        .zip(0u16..)
        .map(|(book, position)| (*book, position))
        .collect()
}

fn chapter_index(chapter: u32) -> Option<usize> {
    usize::try_from(chapter.checked_sub(1)?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_has_every_book() {
        let system = VersificationSystem::default_system();
        assert_eq!(system.books().count(), Book::ALL.len());
        assert_eq!(system.chapter_count(Book::Psalms), Some(150));
        assert_eq!(system.verse_count(Book::Revelation, 4), Some(11));
        assert_eq!(system.verse_count(Book::Psalms, 119), Some(176));
    }

    #[test]
    fn out_of_range_lookups_are_none() {
        let system = VersificationSystem::default_system();
        assert_eq!(system.verse_count(Book::Genesis, 0), None);
        assert_eq!(system.verse_count(Book::Genesis, 51), None);
    }

    #[test]
    fn derived_system_shares_untouched_books() {
        let base = VersificationSystem::default_system();
        let kjv = VersificationSystem::kjv();
        assert_eq!(kjv.name(), "kjv");
        assert_eq!(kjv.verse_count(Book::ThirdJohn, 1), Some(14));
        assert_eq!(base.verse_count(Book::ThirdJohn, 1), Some(15));
        assert_eq!(kjv.verses(Book::Genesis), base.verses(Book::Genesis));
    }

    #[test]
    fn vulgate_psalms_differ() {
        let default = VersificationSystem::default_system();
        let vulgate = VersificationSystem::vulgate();
        assert_eq!(default.verse_count(Book::Psalms, 3), Some(8));
        assert_eq!(vulgate.verse_count(Book::Psalms, 3), Some(9));
        assert_eq!(default.verse_count(Book::Psalms, 10), Some(18));
        assert_eq!(vulgate.verse_count(Book::Psalms, 10), Some(8));
    }

    #[test]
    fn catholic_order_moves_tobit() {
        let vulgate = VersificationSystem::vulgate();
        let default = VersificationSystem::default_system();
        assert!(vulgate.position(Book::Tobit) < vulgate.position(Book::Job));
        assert!(default.position(Book::Tobit) > default.position(Book::Revelation));
    }

    #[test]
    fn compare_uses_book_order() {
        let system = VersificationSystem::default_system();
        let a = Bcv::new(Book::Genesis, 50, 26);
        let b = Bcv::new(Book::Exodus, 1, 1);
        assert_eq!(system.compare(&a, &b), Ordering::Less);
        assert_eq!(system.compare(&b, &b), Ordering::Equal);
    }

    #[test]
    fn next_in_book_crosses_chapters() {
        let system = VersificationSystem::default_system();
        let end_of_one = Bcv::new(Book::Genesis, 1, 31);
        assert_eq!(
            system.next_in_book(&end_of_one),
            Some(Bcv::new(Book::Genesis, 2, 1))
        );
        assert_eq!(system.next_in_book(&Bcv::new(Book::Genesis, 50, 26)), None);
    }

    #[test]
    fn psalm_151_folds_into_psalms() {
        let folded = VersificationSystem::default_system().with_psalm_151_folded();
        assert_eq!(folded.chapter_count(Book::Psalms), Some(151));
        assert_eq!(folded.verse_count(Book::Psalms, 151), Some(7));
        let twice = folded.clone().with_psalm_151_folded();
        assert_eq!(twice, folded);
    }

    proptest! {
        #[test]
        fn next_in_book_moves_forward(index in 0usize..66, chapter in 1u32..40, verse in 1u32..60) {
            let system = VersificationSystem::default_system();
            let point = Bcv::new(Book::ALL[index], chapter, verse);
            if let Some(next) = system.next_in_book(&point) {
                prop_assert_eq!(system.compare(&point, &next), Ordering::Less);
                prop_assert_eq!(next.book, point.book);
            }
        }
    }

    #[test]
    fn with_chapter_and_without_book() {
        let system = VersificationSystem::default_system()
            .derive("custom")
            .with_chapter(Book::Jude, 1, 26)
            .without_book(Book::Psalm151);
        assert_eq!(system.verse_count(Book::Jude, 1), Some(26));
        assert!(!system.contains(Book::Psalm151));
        assert!(system.is_single_chapter(Book::Jude));
        assert_eq!(system.book_end(Book::Jude), Some(Bcv::new(Book::Jude, 1, 26)));
    }
}
