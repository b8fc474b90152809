//! REPL, CLI, and versification serialization for Lectio.
//!
//! This crate provides:
//! - [`Repl`] - Interactive citation parsing
//! - [`Session`] - Parser state and `:` commands, shared by the REPL and CLI
//! - [`serialize`] - `MessagePack` save and load of versification systems
//! - [`init_tracing`] - Log output controlled by `RUST_LOG`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod highlight;
mod logging;
pub mod repl;
pub mod serialize;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::CitationHighlighter;
pub use logging::init_tracing;
pub use repl::Repl;
pub use session::{OutputMode, Session};
