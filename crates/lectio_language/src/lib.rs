//! Lexer, citation grammar, and book matcher contract for Lectio.
//!
//! This crate provides:
//! - [`BookMatcher`] - The contract language tables implement
//! - [`AnnotatedText`] - Text with book and translation markers
//! - [`Lexer`] - Tokenization of annotated text
//! - [`Parser`] - Ordered-choice grammar producing [`Node`] trees

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
mod fuzz_tests;
pub mod keywords;
pub mod lexer;
pub mod matcher;
pub mod parser;
pub mod span;
pub mod token;

pub use ast::{Node, NodeKind, SequenceItem, Separator, TranslationRef};
pub use keywords::{Keyword, Keywords};
pub use lexer::{Lexer, Punctuation};
pub use matcher::{
    AnnotatedText, Annotator, BOOK_MARKER, BookCandidate, BookMatcher, TRANSLATION_MARKER,
    TranslationCandidate, blank_markers,
};
pub use parser::{Parser, parse};
pub use span::Span;
pub use token::{Token, TokenKind};
