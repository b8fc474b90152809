//! Abstract syntax tree for citations.
//!
//! Book components hold indices into the matched-book table of the annotated
//! text; the resolver picks the concrete book. Numbers are raw and unchecked.

use std::fmt;

use crate::span::Span;

/// An AST node with its span in the annotated text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// The production and its components.
    pub kind: NodeKind,
    /// Location in the annotated text.
    pub span: Span,
}

/// How a sequence item is joined to the item before it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Separator {
    /// Nothing but whitespace.
    #[default]
    None,
    /// A comma-like separator: same chapter, new verse.
    Comma,
    /// A semicolon: new chapter.
    Semicolon,
    /// The "and" keyword.
    And,
}

impl Separator {
    /// Returns true if the separator starts a new chapter.
    #[must_use]
    pub const fn is_chapter_break(self) -> bool {
        matches!(self, Self::Semicolon)
    }
}

/// One item of a citation sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceItem {
    /// Separator before the item.
    pub separator: Separator,
    /// The item.
    pub node: Node,
}

/// A translation marker attached to a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranslationRef {
    /// Index into the matched-translation table.
    pub index: usize,
    /// Location in the annotated text.
    pub span: Span,
}

/// AST node kinds, one per grammar production.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A run of citations, optionally followed by translations.
    Sequence {
        /// The citations, in order. The first has no separator.
        items: Vec<SequenceItem>,
        /// Translations attached to the whole run.
        translations: Vec<TranslationRef>,
    },
    /// `start - end`
    Range {
        /// Start of the range.
        start: Box<Node>,
        /// End of the range.
        end: Box<Node>,
    },
    /// A reference followed by "ff".
    Ff(Box<Node>),
    /// A chapter followed by "title".
    Title(Box<Node>),
    /// Book, chapter and verse.
    Bcv {
        /// Book index.
        book: usize,
        /// Chapter.
        chapter: u32,
        /// Verse.
        verse: u32,
    },
    /// Book and verse ("Phlm v 6").
    Bv {
        /// Book index.
        book: usize,
        /// Verse.
        verse: u32,
    },
    /// Book and chapter.
    Bc {
        /// Book index.
        book: usize,
        /// Chapter.
        chapter: u32,
    },
    /// A book alone.
    B {
        /// Book index.
        book: usize,
    },
    /// Chapter and verse with the book inherited.
    Cv {
        /// Chapter.
        chapter: u32,
        /// Verse.
        verse: u32,
    },
    /// A chapter marked with a chapter keyword.
    C(u32),
    /// A verse marked with a verse keyword.
    V(u32),
    /// A bare number whose role depends on context.
    Integer {
        /// The number.
        value: u32,
        /// True if letters are glued to the number ("18th").
        captive: bool,
    },
    /// "Chapter 3 of John".
    Cb {
        /// Book index.
        book: usize,
        /// Chapter.
        chapter: u32,
    },
    /// "Chapters 3-4 of John".
    CbRange {
        /// Book index.
        book: usize,
        /// First chapter.
        start: u32,
        /// Last chapter.
        end: u32,
    },
    /// Text that is not part of a citation.
    Word,
}

impl Node {
    /// Creates a node.
    #[must_use]
    pub const fn new(kind: NodeKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the production name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self.kind {
            NodeKind::Sequence { .. } => "sequence",
            NodeKind::Range { .. } => "range",
            NodeKind::Ff(_) => "ff",
            NodeKind::Title(_) => "title",
            NodeKind::Bcv { .. } => "bcv",
            NodeKind::Bv { .. } => "bv",
            NodeKind::Bc { .. } => "bc",
            NodeKind::B { .. } => "b",
            NodeKind::Cv { .. } => "cv",
            NodeKind::C(_) => "c",
            NodeKind::V(_) => "v",
            NodeKind::Integer { .. } => "integer",
            NodeKind::Cb { .. } => "cb",
            NodeKind::CbRange { .. } => "cb_range",
            NodeKind::Word => "word",
        }
    }

    /// Returns true if the node names a book.
    #[must_use]
    pub fn has_book(&self) -> bool {
        match &self.kind {
            NodeKind::Bcv { .. }
            | NodeKind::Bv { .. }
            | NodeKind::Bc { .. }
            | NodeKind::B { .. }
            | NodeKind::Cb { .. }
            | NodeKind::CbRange { .. } => true,
            NodeKind::Range { start, .. } => start.has_book(),
            NodeKind::Ff(inner) | NodeKind::Title(inner) => inner.has_book(),
            NodeKind::Sequence { items, .. } => items.first().is_some_and(|i| i.node.has_book()),
            _ => false,
        }
    }
}

/// S-expression rendering, used by the REPL's `:ast` command.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Sequence {
                items,
                translations,
            } => {
                f.write_str("(sequence")?;
                for item in items {
                    match item.separator {
                        Separator::None => {}
                        Separator::Comma => f.write_str(" ,")?,
                        Separator::Semicolon => f.write_str(" ;")?,
                        Separator::And => f.write_str(" &")?,
                    }
                    write!(f, " {}", item.node)?;
                }
                for translation in translations {
                    write!(f, " (translation #{})", translation.index)?;
                }
                f.write_str(")")
            }
            NodeKind::Range { start, end } => write!(f, "(range {start} {end})"),
            NodeKind::Ff(inner) => write!(f, "(ff {inner})"),
            NodeKind::Title(inner) => write!(f, "(title {inner})"),
            NodeKind::Bcv {
                book,
                chapter,
                verse,
            } => write!(f, "(bcv #{book} {chapter} {verse})"),
            NodeKind::Bv { book, verse } => write!(f, "(bv #{book} {verse})"),
            NodeKind::Bc { book, chapter } => write!(f, "(bc #{book} {chapter})"),
            NodeKind::B { book } => write!(f, "(b #{book})"),
            NodeKind::Cv { chapter, verse } => write!(f, "(cv {chapter} {verse})"),
            NodeKind::C(chapter) => write!(f, "(c {chapter})"),
            NodeKind::V(verse) => write!(f, "(v {verse})"),
            NodeKind::Integer { value, captive } => {
                if *captive {
                    write!(f, "(integer {value} captive)")
                } else {
                    write!(f, "(integer {value})")
                }
            }
            NodeKind::Cb { book, chapter } => write!(f, "(cb #{book} {chapter})"),
            NodeKind::CbRange { book, start, end } => {
                write!(f, "(cb_range #{book} {start} {end})")
            }
            NodeKind::Word => write!(f, "(word {}..{})", self.span.start, self.span.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(kind: NodeKind) -> Node {
        Node::new(kind, Span::default())
    }

    #[test]
    fn display_sequence() {
        let sequence = leaf(NodeKind::Sequence {
            items: vec![
                SequenceItem {
                    separator: Separator::None,
                    node: leaf(NodeKind::Bcv {
                        book: 0,
                        chapter: 3,
                        verse: 16,
                    }),
                },
                SequenceItem {
                    separator: Separator::Comma,
                    node: leaf(NodeKind::Integer {
                        value: 18,
                        captive: false,
                    }),
                },
            ],
            translations: vec![],
        });
        assert_eq!(sequence.to_string(), "(sequence (bcv #0 3 16) , (integer 18))");
        assert!(sequence.has_book());
    }

    #[test]
    fn names_and_books() {
        let range = leaf(NodeKind::Range {
            start: Box::new(leaf(NodeKind::Cv {
                chapter: 1,
                verse: 1,
            })),
            end: Box::new(leaf(NodeKind::B { book: 1 })),
        });
        assert_eq!(range.name(), "range");
        assert!(!range.has_book());
        assert!(Separator::Semicolon.is_chapter_break());
        assert!(!Separator::And.is_chapter_break());
    }
}
