//! Citation resolution and OSIS output for Lectio.
//!
//! This crate provides:
//! - [`BcvParser`] - The whole pipeline from free text to passages
//! - [`ResolverConfig`] - Named options and their strategies
//! - [`Resolver`] - Grammar nodes to validated [`Passage`]s
//! - [`combine`] - Merging of touching passages
//! - [`ParseResult`] - Passages with OSIS renderings
//!
//! # Example
//!
//! ```
//! use lectio_parser::BcvParser;
//!
//! let mut parser = BcvParser::for_language("en").unwrap();
//! parser.set_option("osis_compaction_strategy", "bcv").unwrap();
//! let result = parser.parse("Rev 4:2ff").unwrap();
//! assert_eq!(result.osis(), "Rev.4.2-Rev.4.11");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod combine;
pub mod config;
pub mod context;
pub mod osis;
pub mod parser;
pub mod passage;
pub mod resolver;

pub use combine::combine;
pub use config::{
    BookAlone, CaptiveEndDigits, InvalidPassages, OsisCompaction, Psalm151Strategy,
    ResolverConfig, SequenceCombination,
};
pub use context::{Context, NumberRole};
pub use osis::OsisEntry;
pub use parser::{BcvParser, ParseResult};
pub use passage::{
    Bound, Checked, Coverage, Passage, PassageKind, Reference, TranslationBinding,
    ValidationMessage, Validity, validate,
};
pub use resolver::{Resolution, Resolver, Warning};
