//! Integration tests for Layer 2: Language
//!
//! Tests for book matching, the lexer, and the citation grammar.

mod grammar;
mod matching;
