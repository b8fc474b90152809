//! Resolver context: what a bare number inherits.

use lectio_foundation::Book;
use lectio_language::Separator;

/// The book and chapter most recently resolved within one citation.
///
/// Books are kept as written; Psalm 151 folding happens on the way out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Context {
    /// Last book.
    pub book: Option<Book>,
    /// Last chapter.
    pub chapter: Option<u32>,
    /// True if the last reference named a verse.
    pub verse_level: bool,
    /// True after a book was dropped; numbers that follow have nothing to
    /// attach to until another book is named.
    pub poisoned: bool,
}

/// What a bare number stands for in the current context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberRole {
    /// A chapter of the current book.
    Chapter,
    /// A verse of the current chapter.
    Verse,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current book, unless the context was poisoned.
    #[must_use]
    pub fn current_book(&self) -> Option<Book> {
        if self.poisoned { None } else { self.book }
    }

    /// A bare number after a verse reads as a verse unless a semicolon
    /// came between them.
    #[must_use]
    pub fn number_role(&self, separator: Separator) -> NumberRole {
        if self.verse_level && !separator.is_chapter_break() && self.chapter.is_some() {
            NumberRole::Verse
        } else {
            NumberRole::Chapter
        }
    }

    /// Records a book named on its own.
    pub fn set_book(&mut self, book: Book) {
        *self = Self {
            book: Some(book),
            ..Self::default()
        };
    }

    /// Records a chapter reference.
    pub fn set_chapter(&mut self, book: Book, chapter: u32) {
        *self = Self {
            book: Some(book),
            chapter: Some(chapter),
            verse_level: false,
            poisoned: false,
        };
    }

    /// Records a verse reference.
    pub fn set_verse(&mut self, book: Book, chapter: u32) {
        *self = Self {
            book: Some(book),
            chapter: Some(chapter),
            verse_level: true,
            poisoned: false,
        };
    }

    /// Forgets everything after a dropped book.
    pub fn poison(&mut self) {
        *self = Self {
            poisoned: true,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_after_verses_are_verses() {
        let mut context = Context::new();
        context.set_verse(Book::John, 3);
        assert_eq!(context.number_role(Separator::Comma), NumberRole::Verse);
        assert_eq!(context.number_role(Separator::And), NumberRole::Verse);
        assert_eq!(context.number_role(Separator::None), NumberRole::Verse);
        assert_eq!(context.number_role(Separator::Semicolon), NumberRole::Chapter);
    }

    #[test]
    fn numbers_after_chapters_are_chapters() {
        let mut context = Context::new();
        context.set_chapter(Book::John, 3);
        assert_eq!(context.number_role(Separator::Comma), NumberRole::Chapter);
        context.set_book(Book::John);
        assert_eq!(context.chapter, None);
        assert_eq!(context.number_role(Separator::Comma), NumberRole::Chapter);
    }

    #[test]
    fn poison_hides_the_book() {
        let mut context = Context::new();
        context.set_verse(Book::John, 3);
        context.poison();
        assert_eq!(context.current_book(), None);
        context.set_chapter(Book::Mark, 1);
        assert_eq!(context.current_book(), Some(Book::Mark));
    }
}
