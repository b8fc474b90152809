//! Lexer for annotated citation text.
//!
//! The lexer converts marker-annotated text into a stream of tokens,
//! normalizing localized keywords and punctuation to roles.

use std::fmt;
use std::str::FromStr;

use lectio_foundation::{Error, Result};

use crate::keywords::Keywords;
use crate::matcher::{BOOK_MARKER, TRANSLATION_MARKER};
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// How `,` and `.` are read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Punctuation {
    /// `:` and `.` separate chapter from verse; `,` separates items.
    #[default]
    Default,
    /// `,` separates chapter from verse; `.` separates items.
    Eu,
}

impl FromStr for Punctuation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "default" | "us" => Ok(Self::Default),
            "eu" => Ok(Self::Eu),
            _ => Err(Error::invalid_option(
                "punctuation_strategy",
                s,
                "default or eu",
            )),
        }
    }
}

impl fmt::Display for Punctuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Default => "default",
            Self::Eu => "eu",
        })
    }
}

/// Lexer for annotated text.
pub struct Lexer<'a> {
    /// Remaining text.
    rest: &'a str,
    /// Current byte offset.
    position: usize,
    /// End of the previous token, if any.
    previous_end: Option<usize>,
    keywords: &'a Keywords,
    punctuation: Punctuation,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer.
    #[must_use]
    pub fn new(source: &'a str, keywords: &'a Keywords, punctuation: Punctuation) -> Self {
        Self {
            rest: source,
            position: 0,
            previous_end: None,
            keywords,
            punctuation,
        }
    }

    /// Returns the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let joined = self.previous_end == Some(start);

        let kind = match self.peek_char() {
            None => TokenKind::Eof,
            Some(BOOK_MARKER) => self.scan_marker(BOOK_MARKER, TokenKind::Book),
            Some(TRANSLATION_MARKER) => {
                self.scan_marker(TRANSLATION_MARKER, TokenKind::Translation)
            }
            Some(c) if c.is_ascii_digit() => self.scan_number(),
            Some(c) => {
                if let Some((keyword, len)) = self.keywords.match_at(self.rest) {
                    self.advance_bytes(len);
                    TokenKind::Keyword(keyword)
                } else if let Some(kind) = self.punctuation_kind(c) {
                    self.advance();
                    kind
                } else {
                    self.scan_word(c)
                }
            }
        };

        self.previous_end = Some(self.position);
        Token::new(kind, Span::new(start, self.position), joined)
    }

    /// Tokenizes all text. The last token is always `Eof`.
    #[must_use]
    pub fn tokenize_all(
        source: &str,
        keywords: &Keywords,
        punctuation: Punctuation,
    ) -> Vec<Token> {
        let mut lexer = Lexer::new(source, keywords, punctuation);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks at the character after the next one.
    fn peek_second(&self) -> Option<char> {
        self.rest.chars().nth(1)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.advance_bytes(c.len_utf8());
        }
    }

    fn advance_bytes(&mut self, len: usize) {
        let len = len.min(self.rest.len());
        self.rest = &self.rest[len..];
        self.position += len;
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Scans `<marker><digits><marker>`.
    fn scan_marker(&mut self, marker: char, kind: fn(usize) -> TokenKind) -> TokenKind {
        self.advance();
        let digits = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        let index = self.rest[..digits].parse::<usize>();
        self.advance_bytes(digits);
        match (index, self.peek_char()) {
            (Ok(index), Some(c)) if c == marker => {
                self.advance();
                kind(index)
            }
            _ => TokenKind::Error(format!("malformed {} marker", kind(0).name())),
        }
    }

    /// Scans a digit run. Runs longer than three digits are words.
    fn scan_number(&mut self) -> TokenKind {
        let digits = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        let value = self.rest[..digits].parse::<u32>();
        self.advance_bytes(digits);

        match value {
            Ok(value) if digits <= 3 => {
                self.skip_verse_letter();
                TokenKind::Integer(value)
            }
            _ => TokenKind::Word,
        }
    }

    /// Absorbs a part-of-verse letter ("16a") that is not the start of a word.
    fn skip_verse_letter(&mut self) {
        let is_letter = self.peek_char().is_some_and(|c| matches!(c, 'a'..='e'));
        let ends_there = !self.peek_second().is_some_and(char::is_alphabetic);
        if is_letter && ends_there {
            self.advance();
        }
    }

    fn punctuation_kind(&self, c: char) -> Option<TokenKind> {
        let eu = self.punctuation == Punctuation::Eu;
        Some(match c {
            '-' | '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '~'
            | '\u{301c}' | '\u{ff5e}' => TokenKind::RangeSep,
            ',' if eu => TokenKind::CvSep,
            '.' if eu => TokenKind::Comma,
            ',' | '\u{ff0c}' | '\u{3001}' => TokenKind::Comma,
            ':' | '.' | '\u{ff1a}' => TokenKind::CvSep,
            ';' | '\u{ff1b}' => TokenKind::Semicolon,
            '(' | '[' | '\u{ff08}' => TokenKind::LParen,
            ')' | ']' | '\u{ff09}' => TokenKind::RParen,
            _ => return None,
        })
    }

    /// Scans a run of letters, or a single other character.
    fn scan_word(&mut self, first: char) -> TokenKind {
        self.advance();
        if first.is_alphabetic() {
            while self.peek_char().is_some_and(char::is_alphabetic)
                && !self.keywords.starts_unspaced(self.rest)
            {
                self.advance();
            }
        }
        TokenKind::Word
    }
}
