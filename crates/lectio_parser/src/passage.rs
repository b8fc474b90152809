//! Resolved passages and their validation.
//!
//! The resolver describes each citation as a [`Reference`]: two
//! [`Bound`]s that say how much was written ("John", "John 3",
//! "John 3:16"). [`validate`] turns a reference into concrete [`Bcv`]
//! points under one versification system. Keeping the unexpanded reference
//! on the passage lets the same citation be checked again under any other
//! system, where "the end of chapter 4" may be a different verse.

use std::cmp::Ordering;
use std::fmt;

use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use lectio_foundation::{Bcv, Book};
use lectio_language::Span;
use lectio_versification::VersificationSystem;

use crate::config::OsisCompaction;

/// One end of a reference, as precise as the citation was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bound {
    /// A whole book.
    Book(Book),
    /// A whole chapter.
    Chapter(Book, u32),
    /// One verse.
    Verse(Book, u32, u32),
    /// A chapter title (Psalm superscription).
    Title(Book, u32),
}

impl Bound {
    /// Returns the book.
    #[must_use]
    pub const fn book(self) -> Book {
        match self {
            Self::Book(book)
            | Self::Chapter(book, _)
            | Self::Verse(book, _, _)
            | Self::Title(book, _) => book,
        }
    }

    /// Rewrites a Psalm 151 bound as chapter 151 of Psalms.
    #[must_use]
    pub const fn fold_psalm_151(self) -> Self {
        const BASE: u32 = 150;
        match self {
            Self::Book(Book::Psalm151) => Self::Chapter(Book::Psalms, BASE + 1),
            Self::Chapter(Book::Psalm151, c) => Self::Chapter(Book::Psalms, BASE + c),
            Self::Verse(Book::Psalm151, c, v) => Self::Verse(Book::Psalms, BASE + c, v),
            Self::Title(Book::Psalm151, c) => Self::Title(Book::Psalms, BASE + c),
            other => other,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Book(b) => write!(f, "{b}"),
            Self::Chapter(b, c) => write!(f, "{b}.{c}"),
            Self::Verse(b, c, v) => write!(f, "{b}.{c}.{v}"),
            Self::Title(b, c) => write!(f, "{b}.{c}.title"),
        }
    }
}

/// What a citation asked for, before validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reference {
    /// First bound.
    pub start: Bound,
    /// Last bound.
    pub end: Bound,
}

impl Reference {
    /// A reference to exactly one bound.
    #[must_use]
    pub const fn single(bound: Bound) -> Self {
        Self {
            start: bound,
            end: bound,
        }
    }

    /// A reference from one bound to another.
    #[must_use]
    pub const fn range(start: Bound, end: Bound) -> Self {
        Self { start, end }
    }

    /// Applies [`Bound::fold_psalm_151`] to both ends.
    #[must_use]
    pub const fn fold_psalm_151(self) -> Self {
        Self {
            start: self.start.fold_psalm_151(),
            end: self.end.fold_psalm_151(),
        }
    }
}

/// The shape of a passage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PassageKind {
    /// A single book, chapter, or verse.
    Single,
    /// Start to end.
    Range,
    /// A reference running to the end of its chapter or book.
    Ff,
    /// A chapter title.
    Title,
}

/// Why a passage is invalid, or what was adjusted to keep it valid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValidationMessage {
    /// The system has no table for the book.
    MissingBook(Book),
    /// Chapter 0 or verse 0.
    Zero,
    /// The chapter does not exist.
    ChapterOutOfRange {
        /// Book.
        book: Book,
        /// Requested chapter.
        chapter: u32,
        /// Last chapter of the book.
        last: u32,
    },
    /// The verse does not exist.
    VerseOutOfRange {
        /// Book.
        book: Book,
        /// Chapter.
        chapter: u32,
        /// Requested verse.
        verse: u32,
        /// Last verse of the chapter.
        last: u32,
    },
    /// A range end chapter was past the end of the book and was clamped.
    EndChapterClamped {
        /// Book.
        book: Book,
        /// Requested chapter.
        chapter: u32,
        /// Chapter used instead.
        last: u32,
    },
    /// A range end verse was past the end of the chapter and was clamped.
    EndVerseClamped {
        /// Book.
        book: Book,
        /// Chapter.
        chapter: u32,
        /// Requested verse.
        verse: u32,
        /// Verse used instead.
        last: u32,
    },
    /// The end comes before the start in this system's order.
    Reversed,
}

impl ValidationMessage {
    /// Returns true if the message leaves the passage valid.
    #[must_use]
    pub const fn is_adjustment(&self) -> bool {
        matches!(
            self,
            Self::EndChapterClamped { .. } | Self::EndVerseClamped { .. }
        )
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBook(book) => write!(f, "{book} is not in this versification"),
            Self::Zero => f.write_str("chapter and verse numbers start at 1"),
            Self::ChapterOutOfRange {
                book,
                chapter,
                last,
            } => write!(f, "{book} has {last} chapters, not {chapter}"),
            Self::VerseOutOfRange {
                book,
                chapter,
                verse,
                last,
            } => write!(f, "{book}.{chapter} has {last} verses, not {verse}"),
            Self::EndChapterClamped {
                book,
                chapter,
                last,
            } => write!(f, "end chapter {chapter} clamped to {book}.{last}"),
            Self::EndVerseClamped {
                book,
                chapter,
                verse,
                last,
            } => write!(f, "end verse {verse} clamped to {book}.{chapter}.{last}"),
            Self::Reversed => f.write_str("range ends before it starts"),
        }
    }
}

/// The outcome of validating a reference under one system.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Validity {
    /// True if both ends exist and are in order.
    pub valid: bool,
    /// Problems and adjustments, in the order they were found.
    pub messages: Vec<ValidationMessage>,
}

impl Validity {
    fn record(&mut self, message: ValidationMessage) {
        if !message.is_adjustment() {
            self.valid = false;
        }
        self.messages.push(message);
    }

    /// Combines the outcomes of two merged passages.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            valid: self.valid && other.valid,
            messages: self.messages.iter().chain(&other.messages).cloned().collect(),
        }
    }

    /// Returns true if the reference was reversed under the system.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.messages.contains(&ValidationMessage::Reversed)
    }
}

bitflags! {
    /// Which whole units a passage covers. Rendering compacts on these.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Coverage: u8 {
        /// Starts at the beginning of a chapter.
        const CHAPTER_START = 0b0001;
        /// Ends at the end of a chapter.
        const CHAPTER_END = 0b0010;
        /// Starts at the beginning of a book.
        const BOOK_START = 0b0100;
        /// Ends at the end of a book.
        const BOOK_END = 0b1000;
    }
}

/// A reference made concrete under one system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checked {
    /// First verse (verse 0 for a title).
    pub start: Bcv,
    /// Last verse.
    pub end: Bcv,
    /// Outcome.
    pub validity: Validity,
    /// Whole units covered.
    pub coverage: Coverage,
}

/// Validates a reference under a system.
///
/// An invalid start makes the passage invalid. An end past the last
/// chapter or verse is clamped and recorded; a zero anywhere is invalid.
#[must_use]
pub fn validate(system: &VersificationSystem, reference: &Reference) -> Checked {
    let mut validity = Validity {
        valid: true,
        messages: Vec::new(),
    };
    let start = start_point(system, reference.start, &mut validity);
    let end = if validity.valid {
        end_point(system, reference.end, &mut validity)
    } else {
        unchecked_end(reference.end)
    };

    if validity.valid && system.compare(&start, &end) == Ordering::Greater {
        validity.record(ValidationMessage::Reversed);
    }

    let coverage = coverage(system, reference, &start, &end);
    Checked {
        start,
        end,
        validity,
        coverage,
    }
}

fn check_chapter(
    system: &VersificationSystem,
    book: Book,
    chapter: u32,
    validity: &mut Validity,
) -> Option<u32> {
    let Some(last) = system.chapter_count(book) else {
        validity.record(ValidationMessage::MissingBook(book));
        return None;
    };
    if chapter == 0 {
        validity.record(ValidationMessage::Zero);
        return None;
    }
    Some(last)
}

fn start_point(system: &VersificationSystem, bound: Bound, validity: &mut Validity) -> Bcv {
    match bound {
        Bound::Book(book) => {
            if !system.contains(book) {
                validity.record(ValidationMessage::MissingBook(book));
            }
            Bcv::new(book, 1, 1)
        }
        Bound::Chapter(book, chapter) | Bound::Title(book, chapter) => {
            let verse = if matches!(bound, Bound::Title(..)) {
                Bcv::TITLE
            } else {
                1
            };
            if let Some(last) = check_chapter(system, book, chapter, validity) {
                if chapter > last {
                    validity.record(ValidationMessage::ChapterOutOfRange {
                        book,
                        chapter,
                        last,
                    });
                }
            }
            Bcv::new(book, chapter, verse)
        }
        Bound::Verse(book, chapter, verse) => {
            let point = Bcv::new(book, chapter, verse);
            let Some(last) = check_chapter(system, book, chapter, validity) else {
                return point;
            };
            if chapter > last {
                validity.record(ValidationMessage::ChapterOutOfRange {
                    book,
                    chapter,
                    last,
                });
                return point;
            }
            let verses = system.verse_count(book, chapter).unwrap_or(0);
            if verse == 0 {
                validity.record(ValidationMessage::Zero);
            } else if verse > verses {
                validity.record(ValidationMessage::VerseOutOfRange {
                    book,
                    chapter,
                    verse,
                    last: verses,
                });
            }
            point
        }
    }
}

fn end_point(system: &VersificationSystem, bound: Bound, validity: &mut Validity) -> Bcv {
    match bound {
        Bound::Book(book) => system.book_end(book).unwrap_or_else(|| {
            validity.record(ValidationMessage::MissingBook(book));
            Bcv::new(book, 1, 1)
        }),
        Bound::Title(book, chapter) => {
            if let Some(last) = check_chapter(system, book, chapter, validity) {
                if chapter > last {
                    validity.record(ValidationMessage::ChapterOutOfRange {
                        book,
                        chapter,
                        last,
                    });
                }
            }
            Bcv::new(book, chapter, Bcv::TITLE)
        }
        Bound::Chapter(book, chapter) => {
            let Some(last) = check_chapter(system, book, chapter, validity) else {
                return Bcv::new(book, chapter, 1);
            };
            let chapter = clamp_chapter(book, chapter, last, validity);
            let verses = system.verse_count(book, chapter).unwrap_or(1);
            Bcv::new(book, chapter, verses)
        }
        Bound::Verse(book, chapter, verse) => {
            let Some(last) = check_chapter(system, book, chapter, validity) else {
                return Bcv::new(book, chapter, verse);
            };
            if verse == 0 {
                validity.record(ValidationMessage::Zero);
                return Bcv::new(book, chapter, verse);
            }
            if chapter > last {
                let chapter = clamp_chapter(book, chapter, last, validity);
                let verses = system.verse_count(book, chapter).unwrap_or(1);
                return Bcv::new(book, chapter, verses);
            }
            let verses = system.verse_count(book, chapter).unwrap_or(1);
            if verse > verses {
                validity.record(ValidationMessage::EndVerseClamped {
                    book,
                    chapter,
                    verse,
                    last: verses,
                });
                return Bcv::new(book, chapter, verses);
            }
            Bcv::new(book, chapter, verse)
        }
    }
}

fn unchecked_end(bound: Bound) -> Bcv {
    match bound {
        Bound::Book(book) => Bcv::new(book, 1, 1),
        Bound::Chapter(book, chapter) => Bcv::new(book, chapter, 1),
        Bound::Verse(book, chapter, verse) => Bcv::new(book, chapter, verse),
        Bound::Title(book, chapter) => Bcv::new(book, chapter, Bcv::TITLE),
    }
}

fn clamp_chapter(book: Book, chapter: u32, last: u32, validity: &mut Validity) -> u32 {
    if chapter > last {
        validity.record(ValidationMessage::EndChapterClamped {
            book,
            chapter,
            last,
        });
        last
    } else {
        chapter
    }
}

fn coverage(
    system: &VersificationSystem,
    reference: &Reference,
    start: &Bcv,
    end: &Bcv,
) -> Coverage {
    let mut coverage = Coverage::empty();
    let starts_chapter = match reference.start {
        Bound::Book(_) | Bound::Chapter(..) => true,
        Bound::Verse(..) => start.verse == 1,
        Bound::Title(..) => false,
    };
    if starts_chapter {
        coverage |= Coverage::CHAPTER_START;
        if start.chapter == 1 {
            coverage |= Coverage::BOOK_START;
        }
    }

    let ends_chapter = match reference.end {
        Bound::Book(_) | Bound::Chapter(..) => true,
        Bound::Verse(..) => system.verse_count(end.book, end.chapter) == Some(end.verse),
        Bound::Title(..) => false,
    };
    if ends_chapter {
        coverage |= Coverage::CHAPTER_END;
        let last = system.chapter_count(end.book);
        if matches!(reference.end, Bound::Book(_)) || last == Some(end.chapter) {
            coverage |= Coverage::BOOK_END;
        }
    }
    coverage
}

/// A translation attached to a passage and the outcome under its system.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TranslationBinding {
    /// The alias as the store spells it, or as written if unrecognized.
    pub alias: String,
    /// The system the alias selects, if recognized.
    pub system: Option<String>,
    /// Validity under that system, if recognized.
    pub validity: Option<Validity>,
}

/// One resolved citation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Passage {
    /// First verse (verse 0 for a title).
    pub start: Bcv,
    /// Last verse.
    pub end: Bcv,
    /// Shape.
    pub kind: PassageKind,
    /// Outcome under [`Passage::system`].
    pub validity: Validity,
    /// Location in the caller's text.
    pub span: Span,
    /// The unexpanded reference, for checking under other systems.
    pub requested: Reference,
    /// Name of the system the passage was resolved under.
    pub system: String,
    /// Attached translations.
    pub translations: Vec<TranslationBinding>,
    /// Index of the top-level citation the passage came from.
    pub sequence: usize,
    /// Whole units covered.
    pub coverage: Coverage,
}

impl Passage {
    /// Builds a passage by validating `requested` under `system`.
    #[must_use]
    pub fn new(
        system: &VersificationSystem,
        requested: Reference,
        kind: PassageKind,
        span: Span,
        sequence: usize,
    ) -> Self {
        let checked = validate(system, &requested);
        Self {
            start: checked.start,
            end: checked.end,
            kind,
            validity: checked.validity,
            span,
            requested,
            system: system.name().to_string(),
            translations: Vec::new(),
            sequence,
            coverage: checked.coverage,
        }
    }

    /// Returns true if the passage is valid under its own system.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validity.valid
    }

    /// Validates the same citation under another system.
    #[must_use]
    pub fn validate_in(&self, system: &VersificationSystem) -> Validity {
        validate(system, &self.requested).validity
    }

    /// Returns the attached aliases joined with commas.
    #[must_use]
    pub fn translation_list(&self) -> String {
        self.translations
            .iter()
            .map(|binding| binding.alias.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Renders the passage as an OSIS id or id range.
    #[must_use]
    pub fn osis(&self, compaction: OsisCompaction) -> String {
        let whole_books = compaction == OsisCompaction::B && self.coverage.is_all();
        let whole_chapters = compaction != OsisCompaction::Bcv
            && self
                .coverage
                .contains(Coverage::CHAPTER_START | Coverage::CHAPTER_END);

        let (first, last) = if whole_books {
            (
                self.start.book.osis().to_string(),
                self.end.book.osis().to_string(),
            )
        } else if whole_chapters {
            (
                format!("{}.{}", self.start.book, self.start.chapter),
                format!("{}.{}", self.end.book, self.end.chapter),
            )
        } else {
            let title = self.kind == PassageKind::Title;
            (verse_id(&self.start, title), verse_id(&self.end, title))
        };

        if first == last {
            first
        } else {
            format!("{first}-{last}")
        }
    }
}

/// Renders a point; titles read as verse 1. A verse 0 that is not a title
/// stays as written.
fn verse_id(point: &Bcv, title: bool) -> String {
    if title && point.verse == Bcv::TITLE {
        point.with_verse(1).to_string()
    } else {
        point.to_string()
    }
}
