//! Grammar for citations.
//!
//! A recursive-descent parser with ordered choice: [`Parser::first_of`]
//! tries alternatives in order and backtracks on failure, so the most
//! specific shape wins. Productions return `None` when they do not match;
//! only malformed markers are fatal.
//!
//! ```text
//! citation := start (item | enclosed)* translations?
//! start    := range | ff | title | bcv | bv | bc | cb_range | cb | b
//! item     := separator? (range | ff | title | bcv | bv | bc | b | cv | c | v | integer)
//! ```

use lectio_foundation::{Error, Result};
use tracing::trace;

use crate::ast::{Node, NodeKind, SequenceItem, Separator, TranslationRef};
use crate::keywords::{Keyword, Keywords};
use crate::lexer::{Lexer, Punctuation};
use crate::matcher::AnnotatedText;
use crate::span::Span;
use crate::token::{Token, TokenKind};

type Production<'a> = fn(&mut Parser<'a>) -> Option<Node>;

/// Parser for annotated citation text.
pub struct Parser<'a> {
    /// Annotated text (for words and error messages).
    source: &'a str,
    /// All tokens, ending with `Eof`.
    tokens: Vec<Token>,
    /// Index of the current token.
    pos: usize,
    /// Size of the book side table.
    books: usize,
    /// Size of the translation side table.
    translations: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over annotated text.
    #[must_use]
    pub fn new(annotated: &'a AnnotatedText, keywords: &Keywords, punctuation: Punctuation) -> Self {
        let source = annotated.text();
        Self {
            source,
            tokens: Lexer::tokenize_all(source, keywords, punctuation),
            pos: 0,
            books: annotated.books().len(),
            translations: annotated.translations().len(),
        }
    }

    /// Parses the whole input into top-level sequences and words.
    ///
    /// # Errors
    /// Returns an error if the input holds a malformed or unknown marker.
    pub fn parse_all(&mut self) -> Result<Vec<Node>> {
        self.check_markers()?;

        let mut nodes: Vec<Node> = Vec::new();
        while !self.at_end() {
            if let Some(citation) = self.attempt(Self::citation) {
                nodes.push(citation);
                continue;
            }
            let span = self.bump().span;
            match nodes.last_mut() {
                Some(Node {
                    kind: NodeKind::Word,
                    span: word,
                }) => word.end = span.end,
                _ => nodes.push(Node::new(NodeKind::Word, span)),
            }
        }
        Ok(nodes)
    }

    /// Rejects malformed markers and markers with no side-table entry.
    fn check_markers(&self) -> Result<()> {
        for token in &self.tokens {
            let problem = match &token.kind {
                TokenKind::Error(message) => message.clone(),
                TokenKind::Book(index) if *index >= self.books => {
                    format!("unknown book marker {index}")
                }
                TokenKind::Translation(index) if *index >= self.translations => {
                    format!("unknown translation marker {index}")
                }
                _ => continue,
            };
            return Err(self.error_at(token.span, &problem));
        }
        Ok(())
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Runs a production, restoring the position if it fails.
    fn attempt<T>(&mut self, production: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let saved = self.pos;
        let result = production(self);
        if result.is_none() {
            self.pos = saved;
        }
        result
    }

    /// Ordered choice: the first alternative that matches wins.
    fn first_of(&mut self, alternatives: &[(&'static str, Production<'a>)]) -> Option<Node> {
        alternatives.iter().find_map(|(name, production)| {
            let node = self.attempt(*production)?;
            trace!(
                production = name,
                start = node.span.start,
                end = node.span.end,
                "matched"
            );
            Some(node)
        })
    }

    // =========================================================================
    // Citations and sequences
    // =========================================================================

    fn citation(&mut self) -> Option<Node> {
        let from = self.pos;
        let first = self.first_of(&[
            ("range", Self::book_range),
            ("ff", Self::book_ff),
            ("title", Self::book_title),
            ("bcv", Self::bcv),
            ("bv", Self::bv),
            ("bc", Self::bc),
            ("cb_range", Self::cb_range),
            ("cb", Self::cb),
            ("b", Self::b),
        ])?;

        let mut items = vec![SequenceItem {
            separator: Separator::None,
            node: first,
        }];
        let mut translations = Vec::new();
        loop {
            if let Some(found) = self.attempt(Self::translation_sequence) {
                translations = found;
                break;
            }
            if let Some(item) = self.attempt(Self::sequence_item) {
                items.push(item);
                continue;
            }
            if let Some(enclosed) = self.attempt(Self::enclosed_items) {
                items.extend(enclosed);
                continue;
            }
            break;
        }

        Some(self.node(
            NodeKind::Sequence {
                items,
                translations,
            },
            from,
        ))
    }

    fn sequence_item(&mut self) -> Option<SequenceItem> {
        let separator = self.separator();
        let node = self.element()?;
        Some(SequenceItem {
            separator,
            node,
        })
    }

    /// `( item (separator item)* )`
    fn enclosed_items(&mut self) -> Option<Vec<SequenceItem>> {
        self.eat(&TokenKind::LParen)?;
        let mut items = vec![self.sequence_item()?];
        while let Some(item) = self.attempt(Self::sequence_item) {
            items.push(item);
        }
        self.eat(&TokenKind::RParen)?;
        Some(items)
    }

    fn element(&mut self) -> Option<Node> {
        self.first_of(&[
            ("range", Self::any_range),
            ("ff", Self::any_ff),
            ("title", Self::any_title),
            ("bcv", Self::bcv),
            ("bv", Self::bv),
            ("bc", Self::bc),
            ("b", Self::b),
            ("cv", Self::cv),
            ("c", Self::c),
            ("v", Self::v),
            ("integer", Self::integer),
        ])
    }

    /// Consumes any run of separators. A semicolon anywhere in the run wins,
    /// then "and", then a comma.
    fn separator(&mut self) -> Separator {
        let mut separator = Separator::None;
        loop {
            let next = match self.peek() {
                TokenKind::Comma => Separator::Comma,
                TokenKind::Semicolon => Separator::Semicolon,
                TokenKind::Keyword(Keyword::And) => Separator::And,
                _ => return separator,
            };
            separator = match (separator, next) {
                (Separator::Semicolon, _) | (_, Separator::Semicolon) => Separator::Semicolon,
                (Separator::And, _) | (_, Separator::And) => Separator::And,
                _ => Separator::Comma,
            };
            self.bump();
        }
    }

    /// `(NIV, KJV)` or a bare `NIV`.
    fn translation_sequence(&mut self) -> Option<Vec<TranslationRef>> {
        self.separator();
        let enclosed = self.eat(&TokenKind::LParen).is_some();
        let mut found = vec![self.translation()?];
        while let Some(next) = self.attempt(|p| {
            p.separator();
            p.translation()
        }) {
            found.push(next);
        }
        if enclosed {
            self.eat(&TokenKind::RParen)?;
        }
        Some(found)
    }

    fn translation(&mut self) -> Option<TranslationRef> {
        let TokenKind::Translation(index) = *self.peek() else {
            return None;
        };
        let span = self.bump().span;
        Some(TranslationRef { index, span })
    }

    // =========================================================================
    // Compound productions
    // =========================================================================

    fn book_range(&mut self) -> Option<Node> {
        self.range_from(&[
            ("bcv", Self::bcv),
            ("bv", Self::bv),
            ("bc", Self::bc),
            ("b", Self::b),
        ])
    }

    fn any_range(&mut self) -> Option<Node> {
        self.range_from(&[
            ("bcv", Self::bcv),
            ("bv", Self::bv),
            ("bc", Self::bc),
            ("b", Self::b),
            ("cv", Self::cv),
            ("c", Self::c),
            ("v", Self::v),
            ("integer", Self::integer),
        ])
    }

    fn range_from(&mut self, starts: &[(&'static str, Production<'a>)]) -> Option<Node> {
        let from = self.pos;
        let start = self.first_of(starts)?;
        self.range_separator()?;
        let end = self.first_of(&[
            ("bcv", Self::bcv),
            ("bv", Self::bv),
            ("bc", Self::bc),
            ("b", Self::b),
            ("cv", Self::cv),
            ("c", Self::c),
            ("v", Self::v),
            ("integer", Self::integer),
        ])?;
        Some(self.node(
            NodeKind::Range {
                start: Box::new(start),
                end: Box::new(end),
            },
            from,
        ))
    }

    fn book_ff(&mut self) -> Option<Node> {
        self.ff_from(&[("bcv", Self::bcv), ("bv", Self::bv), ("bc", Self::bc)])
    }

    fn any_ff(&mut self) -> Option<Node> {
        self.ff_from(&[
            ("bcv", Self::bcv),
            ("bv", Self::bv),
            ("bc", Self::bc),
            ("cv", Self::cv),
            ("c", Self::c),
            ("v", Self::v),
            ("integer", Self::integer),
        ])
    }

    fn ff_from(&mut self, targets: &[(&'static str, Production<'a>)]) -> Option<Node> {
        let from = self.pos;
        let target = self.first_of(targets)?;
        self.eat_keyword(Keyword::Ff)?;
        Some(self.node(NodeKind::Ff(Box::new(target)), from))
    }

    fn book_title(&mut self) -> Option<Node> {
        self.title_from(&[("bc", Self::bc)])
    }

    fn any_title(&mut self) -> Option<Node> {
        self.title_from(&[("bc", Self::bc), ("c", Self::c), ("integer", Self::integer)])
    }

    /// A chapter followed by "title", optionally after a chapter/verse
    /// separator ("5:title").
    fn title_from(&mut self, targets: &[(&'static str, Production<'a>)]) -> Option<Node> {
        let from = self.pos;
        let target = self.first_of(targets)?;
        self.eat(&TokenKind::CvSep);
        self.eat_keyword(Keyword::Title)?;
        Some(self.node(NodeKind::Title(Box::new(target)), from))
    }

    // =========================================================================
    // Simple productions
    // =========================================================================

    /// `book sep? chapter? number (sep verse? | verse) number`
    fn bcv(&mut self) -> Option<Node> {
        let from = self.pos;
        let book = self.book()?;
        self.eat(&TokenKind::CvSep);
        self.eat_keyword(Keyword::Chapter);
        let chapter = self.chapter_number()?;
        self.verse_separator()?;
        let verse = self.number()?;
        Some(self.node(
            NodeKind::Bcv {
                book,
                chapter,
                verse,
            },
            from,
        ))
    }

    /// `book verse number`
    fn bv(&mut self) -> Option<Node> {
        let from = self.pos;
        let book = self.book()?;
        self.eat(&TokenKind::CvSep);
        self.eat_keyword(Keyword::Verse)?;
        let verse = self.number()?;
        Some(self.node(NodeKind::Bv { book, verse }, from))
    }

    /// `book sep? chapter? number`, not followed by `: number`.
    fn bc(&mut self) -> Option<Node> {
        let from = self.pos;
        let book = self.book()?;
        self.eat(&TokenKind::CvSep);
        self.eat_keyword(Keyword::Chapter);
        let chapter = self.chapter_number()?;
        if self.peek() == &TokenKind::CvSep && matches!(self.peek_nth(1), TokenKind::Integer(_))
        {
            return None;
        }
        Some(self.node(NodeKind::Bc { book, chapter }, from))
    }

    fn b(&mut self) -> Option<Node> {
        let from = self.pos;
        let book = self.book()?;
        Some(self.node(NodeKind::B { book }, from))
    }

    /// `number (sep verse? | verse) number`
    fn cv(&mut self) -> Option<Node> {
        let from = self.pos;
        let chapter = self.chapter_number()?;
        self.verse_separator()?;
        let verse = self.number()?;
        Some(self.node(NodeKind::Cv { chapter, verse }, from))
    }

    /// `chapter number`
    fn c(&mut self) -> Option<Node> {
        let from = self.pos;
        self.eat_keyword(Keyword::Chapter)?;
        let chapter = self.chapter_number()?;
        Some(self.node(NodeKind::C(chapter), from))
    }

    /// `verse number`
    fn v(&mut self) -> Option<Node> {
        let from = self.pos;
        self.eat_keyword(Keyword::Verse)?;
        let verse = self.number()?;
        Some(self.node(NodeKind::V(verse), from))
    }

    fn integer(&mut self) -> Option<Node> {
        let from = self.pos;
        let captive = self.is_captive();
        let value = self.number()?;
        Some(self.node(NodeKind::Integer { value, captive }, from))
    }

    /// `chapter? number of book`
    fn cb(&mut self) -> Option<Node> {
        let from = self.pos;
        self.eat_keyword(Keyword::Chapter);
        let chapter = self.chapter_number()?;
        self.eat_keyword(Keyword::Of)?;
        let book = self.book()?;
        Some(self.node(NodeKind::Cb { book, chapter }, from))
    }

    /// `chapter? number - number of book`
    fn cb_range(&mut self) -> Option<Node> {
        let from = self.pos;
        self.eat_keyword(Keyword::Chapter);
        let start = self.chapter_number()?;
        self.range_separator()?;
        let end = self.chapter_number()?;
        self.eat_keyword(Keyword::Of)?;
        let book = self.book()?;
        Some(self.node(NodeKind::CbRange { book, start, end }, from))
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn book(&mut self) -> Option<usize> {
        let TokenKind::Book(index) = *self.peek() else {
            return None;
        };
        self.bump();
        Some(index)
    }

    fn number(&mut self) -> Option<u32> {
        let TokenKind::Integer(value) = *self.peek() else {
            return None;
        };
        self.bump();
        Some(value)
    }

    /// A number in chapter position; glued letters disqualify it.
    fn chapter_number(&mut self) -> Option<u32> {
        if self.is_captive() {
            return None;
        }
        self.number()
    }

    /// True if the current token is a number with letters glued to it.
    fn is_captive(&self) -> bool {
        let Some(next) = self.tokens.get(self.pos + 1) else {
            return false;
        };
        matches!(self.peek(), TokenKind::Integer(_))
            && next.kind == TokenKind::Word
            && next.joined
            && next
                .text(self.source)
                .chars()
                .next()
                .is_some_and(char::is_alphabetic)
    }

    fn verse_separator(&mut self) -> Option<()> {
        if self.eat(&TokenKind::CvSep).is_some() {
            self.eat_keyword(Keyword::Verse);
            return Some(());
        }
        self.eat_keyword(Keyword::Verse).map(|_| ())
    }

    fn range_separator(&mut self) -> Option<Span> {
        self.eat(&TokenKind::RangeSep)
            .or_else(|| self.eat_keyword(Keyword::Range))
    }

    fn eat_keyword(&mut self, keyword: Keyword) -> Option<Span> {
        self.eat(&TokenKind::Keyword(keyword))
    }

    fn eat(&mut self, kind: &TokenKind) -> Option<Span> {
        (self.peek() == kind).then(|| self.bump().span)
    }

    fn peek(&self) -> &TokenKind {
        self.peek_nth(0)
    }

    fn peek_nth(&self, n: usize) -> &TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(&TokenKind::Eof, |token| &token.kind)
    }

    fn at_end(&self) -> bool {
        self.peek() == &TokenKind::Eof
    }

    /// Advances, returning the token that was current. Never moves past `Eof`.
    fn bump(&mut self) -> Token {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .unwrap_or_else(|| Token::new(TokenKind::Eof, Span::at(self.source.len()), false));
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Builds a node spanning from token `from` to the last consumed token.
    fn node(&self, kind: NodeKind, from: usize) -> Node {
        let start = self.tokens.get(from).map_or(0, |t| t.span.start);
        let end = self
            .pos
            .checked_sub(1)
            .and_then(|last| self.tokens.get(last))
            .map_or(start, |t| t.span.end);
        Node::new(kind, Span::new(start, end.max(start)))
    }

    fn error_at(&self, span: Span, message: &str) -> Error {
        Error::parse(
            message,
            span.start,
            "a book or translation marker",
            self.context_at(span),
        )
    }

    /// Gets the line around a span for error messages.
    fn context_at(&self, span: Span) -> String {
        let start = span.start.min(self.source.len());
        let line_start = self
            .source
            .get(..start)
            .and_then(|before| before.rfind('\n'))
            .map_or(0, |i| i + 1);
        let line_end = self
            .source
            .get(start..)
            .and_then(|after| after.find('\n'))
            .map_or(self.source.len(), |i| start + i);
        self.source
            .get(line_start..line_end)
            .unwrap_or_default()
            .to_string()
    }
}

/// Parses annotated text into top-level nodes.
///
/// # Errors
/// Returns an error if the text holds a malformed or unknown marker.
pub fn parse(
    annotated: &AnnotatedText,
    keywords: &Keywords,
    punctuation: Punctuation,
) -> Result<Vec<Node>> {
    Parser::new(annotated, keywords, punctuation).parse_all()
}
