//! Versification systems for Lectio.
//!
//! This crate provides:
//! - [`VersificationSystem`] - Book order and verse counts per chapter
//! - [`TranslationStore`] - Named systems plus translation aliases
//!
//! Systems are persistent: a translation's system is a base system with a
//! few overridden books, sharing the rest.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod data;
pub mod store;
pub mod system;

pub use store::{TranslationAlias, TranslationStore};
pub use system::VersificationSystem;
