//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Book, Bcv, Testaments, and Error.

mod books;
mod errors;
mod testaments;
