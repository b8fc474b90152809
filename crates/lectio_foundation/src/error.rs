//! Error types for the Lectio system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Only conditions that abort a whole call are errors; soft outcomes such as
//! out-of-bounds references are reported as data by the resolver.

use std::fmt;

use thiserror::Error;

/// The main error type for Lectio operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a grammar error at a byte offset of the annotated input.
    #[must_use]
    pub fn parse(
        message: impl Into<String>,
        offset: usize,
        expected: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            offset,
            expected: expected.into(),
            context: context.into(),
        })
    }

    /// Creates an unknown book error.
    #[must_use]
    pub fn unknown_book(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownBook(id.into()))
    }

    /// Creates an unknown versification system error.
    #[must_use]
    pub fn unknown_versification(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownVersification(name.into()))
    }

    /// Creates an unknown language error.
    #[must_use]
    pub fn unknown_language(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownLanguage(code.into()))
    }

    /// Creates an invalid option error.
    #[must_use]
    pub fn invalid_option(
        name: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::InvalidOption {
            name: name.into(),
            value: value.into(),
            expected: expected.into(),
        })
    }

    /// Returns true if this is a grammar error.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self.kind, ErrorKind::ParseError { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The annotated input could not be consumed by the grammar.
    #[error("parse error at offset {offset}: {message} (expected {expected})")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Byte offset into the annotated input.
        offset: usize,
        /// One-line summary of what the grammar expected.
        expected: String,
        /// The input surrounding the offset.
        context: String,
    },

    /// A book identifier that is not a canonical OSIS id.
    #[error("unknown book: {0}")]
    UnknownBook(String),

    /// A versification system that is not loaded in the store.
    #[error("unknown versification system: {0}")]
    UnknownVersification(String),

    /// A language code with no book table.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// An option name or value that is not recognized.
    #[error("invalid value '{value}' for option {name} (expected {expected})")]
    InvalidOption {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
        /// The accepted values.
        expected: String,
    },

    /// I/O error (file read/write).
    #[error("I/O error: {0}")]
    IoError(String),

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The original input text, if known.
    pub source: Option<String>,
    /// Byte offset in the original input.
    pub offset: Option<usize>,
    /// Pipeline stages that were active, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source text.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the offset in the original input.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Adds a stage frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source:?}")?;
            if let Some(offset) = self.offset {
                write!(f, " at {offset}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias using the Lectio error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = Error::parse("unterminated book marker", 7, "book index", "\u{1f}12");
        assert!(err.is_parse_error());
        let msg = format!("{err}");
        assert!(msg.contains("offset 7"));
        assert!(msg.contains("book index"));
    }

    #[test]
    fn invalid_option_display() {
        let err = Error::invalid_option("osis_compaction_strategy", "cv", "b, bc, or bcv");
        let msg = format!("{err}");
        assert!(msg.contains("osis_compaction_strategy"));
        assert!(msg.contains("'cv'"));
        assert!(!err.is_parse_error());
    }

    #[test]
    fn error_with_context() {
        let err = Error::unknown_versification("lxx").with_context(
            ErrorContext::new()
                .with_source("Ps 151 (LXX)")
                .with_offset(8)
                .with_frame("resolve"),
        );

        let ctx = err.context.unwrap();
        assert_eq!(ctx.source.as_deref(), Some("Ps 151 (LXX)"));
        assert_eq!(ctx.offset, Some(8));
        assert_eq!(ctx.stack, vec!["resolve".to_string()]);
    }

    #[test]
    fn context_display() {
        let ctx = ErrorContext::new().with_source("Gen 1").with_offset(4);
        assert_eq!(ctx.to_string(), "in \"Gen 1\" at 4");
    }
}
