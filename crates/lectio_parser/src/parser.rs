//! The full pipeline: match books, parse, resolve, render.

use std::sync::Arc;

use lectio_foundation::Result;
use lectio_language::{AnnotatedText, BookMatcher, Node, parse};
use lectio_versification::TranslationStore;
use tracing::debug;

use crate::config::{InvalidPassages, OsisCompaction, ResolverConfig};
use crate::osis::{self, OsisEntry};
use crate::passage::Passage;
use crate::resolver::{Resolver, Warning};

/// Finds and resolves scripture citations in free text.
///
/// A parser holds no per-call state; one instance can serve any number of
/// threads.
///
/// # Example
///
/// ```
/// use lectio_parser::BcvParser;
///
/// let parser = BcvParser::for_language("en").unwrap();
/// let result = parser.parse("see John 3:16, 18; 4:2").unwrap();
/// assert_eq!(result.osis(), "John.3.16,John.3.18,John.4.2");
/// ```
#[derive(Clone)]
pub struct BcvParser {
    matcher: Arc<dyn BookMatcher>,
    store: TranslationStore,
    config: ResolverConfig,
}

impl std::fmt::Debug for BcvParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BcvParser")
            .field("language", &self.matcher.language())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl BcvParser {
    /// Creates a parser with the built-in systems and default options.
    #[must_use]
    pub fn new(matcher: Arc<dyn BookMatcher>) -> Self {
        Self {
            matcher,
            store: TranslationStore::builtin(),
            config: ResolverConfig::default(),
        }
    }

    /// Creates a parser for a built-in language.
    ///
    /// # Errors
    ///
    /// Returns an error if the language is unknown.
    pub fn for_language(code: &str) -> Result<Self> {
        Ok(Self::new(lectio_stdlib::language(code)?))
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the translation store.
    #[must_use]
    pub fn with_store(mut self, store: TranslationStore) -> Self {
        self.store = store;
        self
    }

    /// Returns the book matcher.
    #[must_use]
    pub fn matcher(&self) -> &Arc<dyn BookMatcher> {
        &self.matcher
    }

    /// Swaps the book matcher, keeping options and systems.
    pub fn set_matcher(&mut self, matcher: Arc<dyn BookMatcher>) {
        self.matcher = matcher;
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Returns the configuration for editing.
    pub fn config_mut(&mut self) -> &mut ResolverConfig {
        &mut self.config
    }

    /// Returns the translation store.
    #[must_use]
    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    /// Returns the translation store for editing.
    pub fn store_mut(&mut self) -> &mut TranslationStore {
        &mut self.store
    }

    /// Sets one option by name.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown option, a bad value, or a
    /// versification system that is not loaded.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        let mut config = self.config.clone();
        config.set_option(name, value)?;
        self.store.system(&config.versification)?;
        self.config = config;
        Ok(())
    }

    /// Runs the book matcher only.
    #[must_use]
    pub fn annotate(&self, text: &str) -> AnnotatedText {
        self.matcher.annotate(text, self.config.testaments)
    }

    /// Parses text into grammar nodes without resolving them.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar rejects the annotated text.
    pub fn parse_ast(&self, text: &str) -> Result<(AnnotatedText, Vec<Node>)> {
        let annotated = self.annotate(text);
        let nodes = parse(&annotated, self.matcher.keywords(), self.config.punctuation)?;
        Ok((annotated, nodes))
    }

    /// Finds every citation in `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured versification system is missing
    /// or the grammar rejects the annotated text. Text without citations is
    /// not an error.
    pub fn parse(&self, text: &str) -> Result<ParseResult> {
        let (annotated, nodes) = self.parse_ast(text)?;
        let resolution = Resolver::new(&annotated, &self.config, &self.store)?.resolve(&nodes);
        debug!(
            language = self.matcher.language(),
            books = annotated.books().len(),
            nodes = nodes.len(),
            passages = resolution.passages.len(),
            warnings = resolution.warnings.len(),
            "parsed"
        );
        Ok(ParseResult {
            passages: resolution.passages,
            warnings: resolution.warnings,
            compaction: self.config.osis_compaction,
            invalid_passages: self.config.invalid_passages,
        })
    }
}

/// Passages found in one text, with the options needed to render them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseResult {
    passages: Vec<Passage>,
    warnings: Vec<Warning>,
    compaction: OsisCompaction,
    invalid_passages: InvalidPassages,
}

impl ParseResult {
    /// Every passage, valid or not, in text order.
    #[must_use]
    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    /// Soft problems found while resolving.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Returns true if nothing was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    /// Consumes the result, returning its passages.
    #[must_use]
    pub fn into_passages(self) -> Vec<Passage> {
        self.passages
    }

    /// Comma-joined OSIS for the shown passages.
    #[must_use]
    pub fn osis(&self) -> String {
        osis::osis(&self.passages, self.compaction, self.invalid_passages)
    }

    /// OSIS grouped by consecutive translation lists.
    #[must_use]
    pub fn osis_and_translations(&self) -> Vec<(String, String)> {
        osis::osis_and_translations(&self.passages, self.compaction, self.invalid_passages)
    }

    /// OSIS, translations, and span for each shown passage.
    #[must_use]
    pub fn osis_and_indices(&self) -> Vec<OsisEntry> {
        osis::osis_and_indices(&self.passages, self.compaction, self.invalid_passages)
    }
}
