//! Lectio - Scripture citation parser
//!
//! This crate re-exports all layers of the Lectio system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: lectio_runtime        REPL, CLI, serialization
//! Layer 3: lectio_parser         Resolution, validation, OSIS output
//! Layer 2: lectio_language       Lexer, grammar, book matcher contract
//!          lectio_stdlib         English and Japanese book tables
//! Layer 1: lectio_versification  Versification systems, translation aliases
//! Layer 0: lectio_foundation     Core types (Book, Bcv, Testaments, Error)
//! ```

pub use lectio_foundation as foundation;
pub use lectio_language as language;
pub use lectio_parser as parser;
pub use lectio_runtime as runtime;
pub use lectio_stdlib as stdlib;
pub use lectio_versification as versification;

pub use lectio_parser::{BcvParser, ParseResult, Passage, ResolverConfig};
