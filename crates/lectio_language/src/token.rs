//! Token types for citation text.
//!
//! Tokens are the output of the lexer and input to the grammar. Localized
//! spellings are already normalized to roles here.

use crate::keywords::Keyword;
use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Location in the annotated text.
    pub span: Span,
    /// True if no whitespace separates this token from the previous one.
    pub joined: bool,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span, joined: bool) -> Self {
        Self { kind, span, joined }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

/// Token types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A book marker, holding an index into the matched-book table.
    Book(usize),
    /// A translation marker, holding an index into the matched-translation table.
    Translation(usize),
    /// A number of one to three digits.
    Integer(u32),
    /// A localized keyword.
    Keyword(Keyword),

    /// `-`, `–`, `~`, `～` and friends
    RangeSep,
    /// A comma-like sequence separator.
    Comma,
    /// `;`
    Semicolon,
    /// The chapter/verse separator (`:`, or `.` by default).
    CvSep,
    /// `(` or `[`
    LParen,
    /// `)` or `]`
    RParen,

    /// Any other run of text.
    Word,
    /// A malformed marker.
    Error(String),
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Book(_) => "book",
            Self::Translation(_) => "translation",
            Self::Integer(_) => "integer",
            Self::Keyword(keyword) => keyword.name(),
            Self::RangeSep => "range separator",
            Self::Comma => "comma",
            Self::Semicolon => "semicolon",
            Self::CvSep => "chapter/verse separator",
            Self::LParen => "opening parenthesis",
            Self::RParen => "closing parenthesis",
            Self::Word => "word",
            Self::Error(_) => "error",
            Self::Eof => "end of input",
        }
    }

    /// Returns true if this token separates items of a sequence.
    #[must_use]
    pub const fn is_separator(&self) -> bool {
        matches!(
            self,
            Self::Comma | Self::Semicolon | Self::Keyword(Keyword::And)
        )
    }
}
