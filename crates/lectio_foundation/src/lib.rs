//! Core types, book identifiers, and persistent collections for Lectio.
//!
//! This crate provides:
//! - [`Book`] - Canonical OSIS book identifiers
//! - [`Testament`] and [`Testaments`] - Testament membership and filters
//! - [`Bcv`] - A book/chapter/verse point
//! - [`Error`] - Rich error types with context
//! - Persistent collections ([`LtVec`], [`LtMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bcv;
pub mod book;
pub mod collections;
pub mod error;
pub mod testament;

pub use bcv::Bcv;
pub use book::Book;
pub use collections::{LtMap, LtVec};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use testament::{Testament, Testaments};
