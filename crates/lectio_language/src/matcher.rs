//! The book matcher contract.
//!
//! A [`BookMatcher`] finds book names and translation abbreviations in raw
//! text and replaces each with a marker the lexer understands:
//!
//! ```text
//! "see John 3:16 (NIV)"  ->  "see \x1f0\x1f 3:16 (\x1e0\x1e)"
//! ```
//!
//! The numbers index side tables of [`BookCandidate`]s and
//! [`TranslationCandidate`]s. Everything that is not a marker is copied
//! verbatim, so an offset map is enough to translate grammar spans back to
//! the caller's text.

use std::borrow::Cow;
use std::ops::Range;

use lectio_foundation::{Book, Testaments};
use tracing::trace;

use crate::keywords::Keywords;
use crate::span::Span;

/// Brackets a book index in annotated text.
pub const BOOK_MARKER: char = '\u{1f}';

/// Brackets a translation index in annotated text.
pub const TRANSLATION_MARKER: char = '\u{1e}';

/// Replaces marker characters already present in `text` with spaces.
///
/// The replacement keeps byte offsets unchanged.
#[must_use]
pub fn blank_markers(text: &str) -> Cow<'_, str> {
    if text.contains([BOOK_MARKER, TRANSLATION_MARKER]) {
        Cow::Owned(text.replace([BOOK_MARKER, TRANSLATION_MARKER], " "))
    } else {
        Cow::Borrowed(text)
    }
}

/// A matched book name and every book it may stand for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookCandidate {
    /// Plausible books, in table order.
    pub books: Vec<Book>,
    /// Location in the original text.
    pub span: Span,
}

impl BookCandidate {
    /// Creates a candidate.
    #[must_use]
    pub fn new(books: Vec<Book>, span: Span) -> Self {
        Self { books, span }
    }

    /// Returns the testaments of all plausible books.
    #[must_use]
    pub fn testaments(&self) -> Testaments {
        self.books
            .iter()
            .fold(Testaments::empty(), |acc, book| acc | book.testament().flag())
    }

    /// Picks the first book whose testament passes the filter.
    #[must_use]
    pub fn pick(&self, filter: Testaments) -> Option<Book> {
        self.books
            .iter()
            .copied()
            .find(|book| filter.allows(book.testament()))
    }

    /// Returns true if the name stands for more than one book.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.books.len() > 1
    }
}

/// A matched translation abbreviation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationCandidate {
    /// The alias as the language table spells it (`NIV`, `JLB`).
    pub alias: String,
    /// Location in the original text.
    pub span: Span,
}

/// One marker substitution.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Replacement {
    annotated: Range<usize>,
    original: Range<usize>,
}

/// Marker-annotated text plus its side tables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnnotatedText {
    text: String,
    books: Vec<BookCandidate>,
    translations: Vec<TranslationCandidate>,
    replacements: Vec<Replacement>,
}

impl AnnotatedText {
    /// Wraps text that contains no matches.
    #[must_use]
    pub fn plain(text: &str) -> Self {
        Self {
            text: blank_markers(text).into_owned(),
            ..Self::default()
        }
    }

    /// Returns the annotated text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the book side table.
    #[must_use]
    pub fn books(&self) -> &[BookCandidate] {
        &self.books
    }

    /// Returns one book candidate.
    #[must_use]
    pub fn book(&self, index: usize) -> Option<&BookCandidate> {
        self.books.get(index)
    }

    /// Returns the translation side table.
    #[must_use]
    pub fn translations(&self) -> &[TranslationCandidate] {
        &self.translations
    }

    /// Returns one translation candidate.
    #[must_use]
    pub fn translation(&self, index: usize) -> Option<&TranslationCandidate> {
        self.translations.get(index)
    }

    /// Maps an offset in the annotated text to an offset in the original.
    ///
    /// Offsets inside a marker map to the start of the replaced text.
    #[must_use]
    pub fn to_original(&self, offset: usize) -> usize {
        let mut mapped = offset;
        for replacement in &self.replacements {
            if offset <= replacement.annotated.start {
                break;
            }
            if offset < replacement.annotated.end {
                return replacement.original.start;
            }
            mapped = offset - replacement.annotated.end + replacement.original.end;
        }
        mapped
    }

    /// Maps an annotated span to the original text.
    #[must_use]
    pub fn original_span(&self, span: Span) -> Span {
        Span::new(self.to_original(span.start), self.to_original(span.end))
    }
}

/// Builds an [`AnnotatedText`] from left-to-right matches.
///
/// The source must already have its markers blanked.
#[derive(Debug)]
pub struct Annotator<'a> {
    source: &'a str,
    cursor: usize,
    out: AnnotatedText,
}

impl<'a> Annotator<'a> {
    /// Starts annotating `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            cursor: 0,
            out: AnnotatedText::default(),
        }
    }

    /// Returns the end of the most recent match.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces a book name with a marker. Returns false if the range
    /// overlaps an earlier match or is not a valid range of the source.
    pub fn book(&mut self, range: Range<usize>, books: Vec<Book>) -> bool {
        let index = self.out.books.len();
        if !self.mark(range.clone(), BOOK_MARKER, index) {
            return false;
        }
        trace!(?books, start = range.start, end = range.end, "book matched");
        self.out
            .books
            .push(BookCandidate::new(books, Span::new(range.start, range.end)));
        true
    }

    /// Replaces a translation abbreviation with a marker.
    pub fn translation(&mut self, range: Range<usize>, alias: impl Into<String>) -> bool {
        let index = self.out.translations.len();
        if !self.mark(range.clone(), TRANSLATION_MARKER, index) {
            return false;
        }
        let alias = alias.into();
        trace!(%alias, start = range.start, end = range.end, "translation matched");
        self.out.translations.push(TranslationCandidate {
            alias,
            span: Span::new(range.start, range.end),
        });
        true
    }

    fn mark(&mut self, range: Range<usize>, marker: char, index: usize) -> bool {
        if range.start < self.cursor || range.is_empty() {
            return false;
        }
        let (Some(before), Some(_)) = (
            self.source.get(self.cursor..range.start),
            self.source.get(range.clone()),
        ) else {
            return false;
        };
        self.out.text.push_str(before);
        let start = self.out.text.len();
        self.out.text.push(marker);
        self.out.text.push_str(&index.to_string());
        self.out.text.push(marker);
        self.out.replacements.push(Replacement {
            annotated: start..self.out.text.len(),
            original: range.clone(),
        });
        self.cursor = range.end;
        true
    }

    /// Copies the rest of the source and returns the result.
    #[must_use]
    pub fn finish(mut self) -> AnnotatedText {
        self.out
            .text
            .push_str(self.source.get(self.cursor..).unwrap_or_default());
        self.out
    }
}

/// A language's book table, selected by the caller.
///
/// Implementations are immutable data and may be shared across threads.
pub trait BookMatcher: Send + Sync {
    /// Returns the language code (`en`, `ja`).
    fn language(&self) -> &str;

    /// Returns the keyword spellings of this language.
    fn keywords(&self) -> &Keywords;

    /// Finds books and translations in `text` and replaces them with markers.
    ///
    /// The filter only breaks ties between names that match equally well;
    /// dropping books outside the filter is left to the resolver.
    fn annotate(&self, text: &str, filter: Testaments) -> AnnotatedText;

    /// Returns the book candidates found in `text`.
    fn find_books(&self, text: &str, filter: Testaments) -> Vec<BookCandidate> {
        self.annotate(text, filter).books
    }
}
