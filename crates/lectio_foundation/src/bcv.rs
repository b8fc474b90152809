//! Book/chapter/verse points.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::book::Book;

/// A single location: book, chapter, and verse.
///
/// Ordering between points depends on a versification system's book order,
/// so `Bcv` deliberately has no `Ord` impl; compare through the system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bcv {
    /// The book.
    pub book: Book,
    /// The 1-based chapter.
    pub chapter: u32,
    /// The 1-based verse. In a title passage `0` stands for the title.
    pub verse: u32,
}

impl Bcv {
    /// The verse number used for a chapter title (Psalm superscriptions).
    pub const TITLE: u32 = 0;

    /// Creates a new point.
    #[must_use]
    pub const fn new(book: Book, chapter: u32, verse: u32) -> Self {
        Self {
            book,
            chapter,
            verse,
        }
    }

    /// Returns a copy with a different verse.
    #[must_use]
    pub const fn with_verse(self, verse: u32) -> Self {
        Self { verse, ..self }
    }

    /// Returns a copy with a different chapter and verse.
    #[must_use]
    pub const fn with_chapter(self, chapter: u32, verse: u32) -> Self {
        Self {
            chapter,
            verse,
            ..self
        }
    }
}

impl fmt::Display for Bcv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.book.osis(), self.chapter, self.verse)
    }
}
