//! Turns grammar nodes into passages.
//!
//! Each top-level sequence is walked left to right with a fresh
//! [`Context`]. Bare numbers take their book and chapter from the context;
//! books outside the testament filter are dropped and take the numbers that
//! follow them down too. Resolution never fails: rejected readings produce
//! no passage, and out-of-bounds readings produce invalid passages.

use std::fmt;

use lectio_foundation::{Book, Result};
use lectio_language::{AnnotatedText, Node, NodeKind, SequenceItem, Separator, Span, TranslationRef};
use lectio_versification::{TranslationStore, VersificationSystem};
use tracing::debug;

use crate::combine::combine;
use crate::config::{BookAlone, CaptiveEndDigits, ResolverConfig, SequenceCombination};
use crate::context::{Context, NumberRole};
use crate::passage::{Bound, Passage, PassageKind, Reference, TranslationBinding};

/// A soft problem found while resolving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    /// A translation alias with no loaded versification system.
    UnrecognizedTranslation {
        /// The alias as matched.
        alias: String,
        /// Location in the caller's text.
        span: Span,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedTranslation { alias, span } => write!(
                f,
                "unrecognized translation {alias} at {}..{}",
                span.start, span.end
            ),
        }
    }
}

/// Passages and warnings from one resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Passages in text order.
    pub passages: Vec<Passage>,
    /// Soft problems in text order.
    pub warnings: Vec<Warning>,
}

/// Resolves the nodes of one annotated text.
pub struct Resolver<'a> {
    annotated: &'a AnnotatedText,
    config: &'a ResolverConfig,
    store: &'a TranslationStore,
    system: VersificationSystem,
}

/// A citation before validation.
#[derive(Clone, Copy, Debug)]
struct Resolved {
    reference: Reference,
    kind: PassageKind,
    span: Span,
    start_span: Span,
    end_span: Span,
}

impl Resolved {
    fn single(bound: Bound, kind: PassageKind, span: Span) -> Self {
        Self {
            reference: Reference::single(bound),
            kind,
            span,
            start_span: span,
            end_span: span,
        }
    }
}

/// A translation as attached to passages, with its prepared system.
struct Attached {
    binding: TranslationBinding,
    system: Option<VersificationSystem>,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured versification system is not in
    /// the store.
    pub fn new(
        annotated: &'a AnnotatedText,
        config: &'a ResolverConfig,
        store: &'a TranslationStore,
    ) -> Result<Self> {
        let system = prepare(store.system(&config.versification)?, config);
        Ok(Self {
            annotated,
            config,
            store,
            system,
        })
    }

    /// Resolves every top-level node.
    #[must_use]
    pub fn resolve(&self, nodes: &[Node]) -> Resolution {
        let mut resolution = Resolution::default();
        for (sequence, node) in nodes.iter().enumerate() {
            match &node.kind {
                NodeKind::Word => {}
                NodeKind::Sequence {
                    items,
                    translations,
                } => self.sequence(sequence, items, translations, &mut resolution),
                _ => {
                    let item = SequenceItem {
                        separator: Separator::None,
                        node: node.clone(),
                    };
                    self.sequence(sequence, &[item], &[], &mut resolution);
                }
            }
        }
        resolution
    }

    fn sequence(
        &self,
        sequence: usize,
        items: &[SequenceItem],
        translations: &[TranslationRef],
        resolution: &mut Resolution,
    ) {
        let attached = self.attach(translations, &mut resolution.warnings);
        let system = attached
            .iter()
            .find_map(|a| a.system.as_ref())
            .unwrap_or(&self.system);

        let mut walk = Walk {
            annotated: self.annotated,
            config: self.config,
            system,
            context: Context::new(),
        };
        let mut passages = Vec::new();
        for item in items {
            if let Some(resolved) = walk.item(item) {
                passages.extend(self.passages(system, resolved, sequence));
            }
        }

        if self.config.sequence_combination == SequenceCombination::Combine {
            passages = combine(passages, system);
        }
        for passage in &mut passages {
            passage.translations = attached
                .iter()
                .map(|a| TranslationBinding {
                    validity: a.system.as_ref().map(|s| passage.validate_in(s)),
                    ..a.binding.clone()
                })
                .collect();
        }
        resolution.passages.extend(passages);
    }

    /// Validates a citation, splitting reversed ranges into their ends.
    fn passages(
        &self,
        system: &VersificationSystem,
        resolved: Resolved,
        sequence: usize,
    ) -> Vec<Passage> {
        let reference = if self.config.folds_psalm_151() {
            resolved.reference.fold_psalm_151()
        } else {
            resolved.reference
        };
        let passage = Passage::new(system, reference, resolved.kind, resolved.span, sequence);
        if resolved.kind == PassageKind::Range && passage.validity.is_reversed() {
            debug!(
                start = %reference.start,
                end = %reference.end,
                "splitting reversed range"
            );
            return vec![
                Passage::new(
                    system,
                    Reference::single(reference.start),
                    PassageKind::Single,
                    resolved.start_span,
                    sequence,
                ),
                Passage::new(
                    system,
                    Reference::single(reference.end),
                    PassageKind::Single,
                    resolved.end_span,
                    sequence,
                ),
            ];
        }
        vec![passage]
    }

    fn attach(&self, translations: &[TranslationRef], warnings: &mut Vec<Warning>) -> Vec<Attached> {
        translations
            .iter()
            .filter_map(|reference| {
                let candidate = self.annotated.translation(reference.index)?;
                let known = self.store.alias(&candidate.alias).and_then(|alias| {
                    let system = self.store.system(&alias.system).ok()?;
                    Some((alias, system))
                });
                let attached = match known {
                    Some((alias, system)) => Attached {
                        binding: TranslationBinding {
                            alias: alias.name.clone(),
                            system: Some(system.name().to_string()),
                            validity: None,
                        },
                        system: Some(prepare(system, self.config)),
                    },
                    None => {
                        let span = self.annotated.original_span(reference.span);
                        debug!(alias = %candidate.alias, "unrecognized translation");
                        warnings.push(Warning::UnrecognizedTranslation {
                            alias: candidate.alias.clone(),
                            span,
                        });
                        Attached {
                            binding: TranslationBinding {
                                alias: candidate.alias.clone(),
                                system: None,
                                validity: None,
                            },
                            system: None,
                        }
                    }
                };
                Some(attached)
            })
            .collect()
    }
}

/// Applies the config's Psalm 151 folding to a system.
fn prepare(system: &VersificationSystem, config: &ResolverConfig) -> VersificationSystem {
    if config.folds_psalm_151() {
        system.clone().with_psalm_151_folded()
    } else {
        system.clone()
    }
}

/// Walks the items of one sequence.
struct Walk<'w> {
    annotated: &'w AnnotatedText,
    config: &'w ResolverConfig,
    system: &'w VersificationSystem,
    context: Context,
}

impl Walk<'_> {
    fn item(&mut self, item: &SequenceItem) -> Option<Resolved> {
        let resolved = self.node(&item.node, item.separator);
        match &resolved {
            Some(r) => debug!(
                node = item.node.name(),
                start = %r.reference.start,
                end = %r.reference.end,
                "resolved"
            ),
            None => debug!(node = item.node.name(), "no passage"),
        }
        resolved
    }

    fn span(&self, node: &Node) -> Span {
        self.annotated.original_span(node.span)
    }

    fn node(&mut self, node: &Node, separator: Separator) -> Option<Resolved> {
        let span = self.span(node);
        match &node.kind {
            NodeKind::Range { start, end } => self.range(start, end, separator, span),
            NodeKind::Ff(inner) => {
                let start = self.bound(inner, separator)?;
                let end = match start {
                    Bound::Verse(book, chapter, _) => Bound::Chapter(book, chapter),
                    Bound::Chapter(book, _) | Bound::Book(book) => Bound::Book(book),
                    Bound::Title(..) => start,
                };
                Some(Resolved {
                    reference: Reference::range(start, end),
                    ..Resolved::single(start, PassageKind::Ff, span)
                })
            }
            NodeKind::Title(inner) => {
                let title = self.title(inner)?;
                Some(Resolved::single(title, PassageKind::Title, span))
            }
            NodeKind::CbRange { book, start, end } => {
                let book = self.pick(*book)?;
                self.context.set_chapter(book, *end);
                Some(Resolved {
                    reference: Reference::range(
                        Bound::Chapter(book, *start),
                        Bound::Chapter(book, *end),
                    ),
                    ..Resolved::single(Bound::Book(book), PassageKind::Range, span)
                })
            }
            NodeKind::B { book } => {
                let book = self.pick(*book)?;
                self.context.set_book(book);
                match self.config.book_alone {
                    BookAlone::Ignore => None,
                    BookAlone::Full => {
                        Some(Resolved::single(Bound::Book(book), PassageKind::Single, span))
                    }
                    BookAlone::FirstChapter => {
                        self.context.set_chapter(book, 1);
                        Some(Resolved::single(
                            Bound::Chapter(book, 1),
                            PassageKind::Single,
                            span,
                        ))
                    }
                }
            }
            NodeKind::Sequence { .. } | NodeKind::Word => None,
            _ => {
                let bound = self.bound(node, separator)?;
                Some(Resolved::single(bound, PassageKind::Single, span))
            }
        }
    }

    fn range(
        &mut self,
        start: &Node,
        end: &Node,
        separator: Separator,
        span: Span,
    ) -> Option<Resolved> {
        let start_span = self.span(start);
        let end_span = self.span(end);
        let first = self.bound(start, separator)?;
        let Some(last) = self.range_end(end, first) else {
            debug!(start = %first, "range end dropped");
            return Some(Resolved::single(first, PassageKind::Single, start_span));
        };
        Some(Resolved {
            reference: Reference::range(first, last),
            kind: PassageKind::Range,
            span,
            start_span,
            end_span,
        })
    }

    /// Resolves a range end. A bare number that cannot be a later verse of
    /// the start's chapter ("John 3:16-4") is read as a chapter instead.
    fn range_end(&mut self, end: &Node, start: Bound) -> Option<Bound> {
        if let (
            NodeKind::Integer {
                value,
                captive: false,
            },
            Bound::Verse(book, chapter, verse),
        ) = (&end.kind, start)
        {
            let fits_chapter = self
                .system
                .chapter_count(book)
                .is_some_and(|last| *value <= last);
            if *value <= verse && *value > chapter && fits_chapter {
                self.context.set_chapter(book, *value);
                return Some(Bound::Chapter(book, *value));
            }
        }
        self.bound(end, Separator::None)
    }

    fn title(&mut self, inner: &Node) -> Option<Bound> {
        let (book, chapter) = match &inner.kind {
            NodeKind::Bc { book, chapter } => (self.pick(*book)?, *chapter),
            NodeKind::C(chapter)
            | NodeKind::Integer {
                value: chapter,
                captive: false,
            } => (self.inherited()?, *chapter),
            _ => return None,
        };
        self.context.set_chapter(book, chapter);
        Some(Bound::Title(book, chapter))
    }

    /// Resolves a node naming one book, chapter, or verse.
    fn bound(&mut self, node: &Node, separator: Separator) -> Option<Bound> {
        match &node.kind {
            NodeKind::Bcv {
                book,
                chapter,
                verse,
            } => {
                let book = self.pick(*book)?;
                self.context.set_verse(book, *chapter);
                Some(Bound::Verse(book, *chapter, *verse))
            }
            NodeKind::Bv { book, verse } => {
                let book = self.pick(*book)?;
                self.context.set_verse(book, 1);
                Some(Bound::Verse(book, 1, *verse))
            }
            NodeKind::Bc { book, chapter } | NodeKind::Cb { book, chapter } => {
                let book = self.pick(*book)?;
                Some(self.chapter(book, *chapter))
            }
            NodeKind::B { book } => {
                let book = self.pick(*book)?;
                self.context.set_book(book);
                Some(Bound::Book(book))
            }
            NodeKind::Cv { chapter, verse } => {
                let book = self.inherited()?;
                self.context.set_verse(book, *chapter);
                Some(Bound::Verse(book, *chapter, *verse))
            }
            NodeKind::C(chapter) => {
                let book = self.inherited()?;
                Some(self.chapter(book, *chapter))
            }
            NodeKind::V(verse) => {
                let book = self.inherited()?;
                let chapter = self.context.chapter.or_else(|| {
                    self.system.is_single_chapter(book).then_some(1)
                })?;
                self.context.set_verse(book, chapter);
                Some(Bound::Verse(book, chapter, *verse))
            }
            NodeKind::Integer { value, captive } => self.integer(*value, *captive, separator),
            _ => None,
        }
    }

    fn integer(&mut self, value: u32, captive: bool, separator: Separator) -> Option<Bound> {
        let book = self.inherited()?;
        match self.context.number_role(separator) {
            NumberRole::Verse => {
                if captive && self.config.captive_end_digits == CaptiveEndDigits::Delete {
                    debug!(value, "captive number dropped");
                    return None;
                }
                let chapter = self.context.chapter?;
                self.context.set_verse(book, chapter);
                Some(Bound::Verse(book, chapter, value))
            }
            NumberRole::Chapter if captive => {
                debug!(value, "captive number cannot be a chapter");
                None
            }
            NumberRole::Chapter => Some(self.chapter(book, value)),
        }
    }

    /// A chapter of a one-chapter book other than 1 means a verse
    /// ("Phlm 2" is Phlm.1.2).
    fn chapter(&mut self, book: Book, chapter: u32) -> Bound {
        if chapter != 1 && self.system.is_single_chapter(book) {
            self.context.set_verse(book, 1);
            Bound::Verse(book, 1, chapter)
        } else {
            self.context.set_chapter(book, chapter);
            Bound::Chapter(book, chapter)
        }
    }

    fn inherited(&self) -> Option<Book> {
        let book = self.context.current_book();
        if book.is_none() {
            debug!(poisoned = self.context.poisoned, "no book to inherit");
        }
        book
    }

    fn pick(&mut self, index: usize) -> Option<Book> {
        let candidate = self.annotated.book(index)?;
        let picked = candidate.pick(self.config.testaments);
        if picked.is_none() {
            debug!(
                books = ?candidate.books,
                testaments = %self.config.testaments,
                "book outside testament filter"
            );
            self.context.poison();
        }
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OsisCompaction;
    use lectio_foundation::Testaments;
    use lectio_language::{Annotator, Keywords, Punctuation, parse};

    /// Annotates `text`, marking each `(range, book)` in order.
    fn annotate(text: &str, books: &[(std::ops::Range<usize>, Vec<Book>)]) -> AnnotatedText {
        let mut annotator = Annotator::new(text);
        for (range, candidates) in books {
            assert!(annotator.book(range.clone(), candidates.clone()));
        }
        annotator.finish()
    }

    fn resolve_with(
        text: &str,
        books: &[(std::ops::Range<usize>, Vec<Book>)],
        config: &ResolverConfig,
    ) -> Vec<String> {
        let annotated = annotate(text, books);
        let nodes = parse(&annotated, &Keywords::english(), config.punctuation).unwrap();
        let store = TranslationStore::builtin();
        Resolver::new(&annotated, config, &store)
            .unwrap()
            .resolve(&nodes)
            .passages
            .iter()
            .map(|p| p.osis(config.osis_compaction))
            .collect()
    }

    fn resolve(text: &str, books: &[(std::ops::Range<usize>, Vec<Book>)]) -> Vec<String> {
        resolve_with(text, books, &ResolverConfig::default())
    }

    #[test]
    fn comma_keeps_the_chapter() {
        assert_eq!(
            resolve("John 3:16, 18", &[(0..4, vec![Book::John])]),
            vec!["John.3.16", "John.3.18"]
        );
    }

    #[test]
    fn semicolon_starts_a_chapter() {
        assert_eq!(
            resolve("John 3:16; 4", &[(0..4, vec![Book::John])]),
            vec!["John.3.16", "John.4"]
        );
    }

    #[test]
    fn touching_verses_combine() {
        assert_eq!(
            resolve("John 3:16, 17", &[(0..4, vec![Book::John])]),
            vec!["John.3.16-John.3.17"]
        );
        let separate = ResolverConfig::new().with_sequence_combination(SequenceCombination::Separate);
        assert_eq!(
            resolve_with("John 3:16, 17", &[(0..4, vec![Book::John])], &separate),
            vec!["John.3.16", "John.3.17"]
        );
    }

    #[test]
    fn testament_mismatch_drops_what_follows() {
        assert!(resolve("Tob 1:1, 2", &[(0..3, vec![Book::Tobit])]).is_empty());
        assert_eq!(
            resolve("Hb 2:4", &[(0..2, vec![Book::Hebrews, Book::Habakkuk])]),
            vec!["Heb.2.4"]
        );
        let old = ResolverConfig::new().with_testaments(Testaments::OLD);
        assert_eq!(
            resolve_with("Hb 2:4", &[(0..2, vec![Book::Hebrews, Book::Habakkuk])], &old),
            vec!["Hab.2.4"]
        );
    }

    #[test]
    fn reversed_range_is_split() {
        assert_eq!(
            resolve("John 3:16-John 2:1", &[(0..4, vec![Book::John]), (10..14, vec![Book::John])]),
            vec!["John.3.16", "John.2.1"]
        );
    }

    #[test]
    fn smaller_number_after_verse_range_is_a_chapter() {
        assert_eq!(
            resolve("John 3:16-4", &[(0..4, vec![Book::John])]),
            vec!["John.3.16-John.4.54"]
        );
        assert_eq!(
            resolve("John 3:16-18", &[(0..4, vec![Book::John])]),
            vec!["John.3.16-John.3.18"]
        );
    }

    #[test]
    fn single_chapter_books_read_chapters_as_verses() {
        assert_eq!(resolve("Phlm 2", &[(0..4, vec![Book::Philemon])]), vec!["Phlm.1.2"]);
        assert_eq!(resolve("Jude 1", &[(0..4, vec![Book::Jude])]), vec!["Jude"]);
        let bc = ResolverConfig::new().with_osis_compaction(OsisCompaction::Bc);
        assert_eq!(resolve_with("Jude 1", &[(0..4, vec![Book::Jude])], &bc), vec!["Jude.1"]);
    }

    #[test]
    fn book_alone_strategies() {
        let books = [(0..4, vec![Book::Matthew])];
        assert!(resolve("Matt", &books).is_empty());
        let full = ResolverConfig::new().with_book_alone(BookAlone::Full);
        assert_eq!(resolve_with("Matt", &books, &full), vec!["Matt"]);
        let first = ResolverConfig::new().with_book_alone(BookAlone::FirstChapter);
        assert_eq!(resolve_with("Matt", &books, &first), vec!["Matt.1"]);
    }

    #[test]
    fn ignored_book_still_sets_context() {
        assert_eq!(
            resolve("Matt, 5", &[(0..4, vec![Book::Matthew])]),
            vec!["Matt.5"]
        );
    }

    #[test]
    fn book_ranges_cover_whole_books() {
        assert_eq!(
            resolve("Matt-John", &[(0..4, vec![Book::Matthew]), (5..9, vec![Book::John])]),
            vec!["Matt-John"]
        );
    }

    #[test]
    fn captive_numbers() {
        let books = [(0..4, vec![Book::John])];
        assert_eq!(resolve("John 3:16, 18th", &books), vec!["John.3.16"]);
        let include = ResolverConfig::new().with_captive_end_digits(CaptiveEndDigits::Include);
        assert_eq!(
            resolve_with("John 3:16, 18th", &books, &include),
            vec!["John.3.16", "John.3.18"]
        );
        assert!(resolve_with("John 3rd", &books, &include).is_empty());
    }

    #[test]
    fn end_overflow_is_clamped() {
        assert_eq!(
            resolve("John 3:16-99", &[(0..4, vec![Book::John])]),
            vec!["John.3.16-John.3.36"]
        );
    }

    #[test]
    fn out_of_bounds_is_invalid_but_kept() {
        let annotated = annotate("John 30", &[(0..4, vec![Book::John])]);
        let nodes = parse(&annotated, &Keywords::english(), Punctuation::Default).unwrap();
        let store = TranslationStore::builtin();
        let config = ResolverConfig::default();
        let resolution = Resolver::new(&annotated, &config, &store).unwrap().resolve(&nodes);
        assert_eq!(resolution.passages.len(), 1);
        assert!(!resolution.passages[0].is_valid());
    }

    #[test]
    fn unknown_versification_is_an_error() {
        let annotated = AnnotatedText::plain("");
        let store = TranslationStore::builtin();
        let config = ResolverConfig::new().with_versification("lxx");
        assert!(Resolver::new(&annotated, &config, &store).is_err());
    }

    #[test]
    fn unrecognized_translation_warns() {
        let mut annotator = Annotator::new("Ps 3:9 (LXX)");
        annotator.book(0..2, vec![Book::Psalms]);
        annotator.translation(8..11, "LXX");
        let annotated = annotator.finish();
        let nodes = parse(&annotated, &Keywords::english(), Punctuation::Default).unwrap();
        let store = TranslationStore::builtin();
        let config = ResolverConfig::default();
        let resolution = Resolver::new(&annotated, &config, &store).unwrap().resolve(&nodes);
        assert_eq!(
            resolution.warnings,
            vec![Warning::UnrecognizedTranslation {
                alias: "LXX".to_string(),
                span: Span::new(8, 11),
            }]
        );
        let passage = &resolution.passages[0];
        assert_eq!(passage.system, "default");
        assert_eq!(passage.translations[0].system, None);
    }

    #[test]
    fn translation_picks_the_system() {
        let mut annotator = Annotator::new("Ps 3:9 (Vulgate, NIV)");
        annotator.book(0..2, vec![Book::Psalms]);
        annotator.translation(8..15, "VULGATE");
        annotator.translation(17..20, "NIV");
        let annotated = annotator.finish();
        let nodes = parse(&annotated, &Keywords::english(), Punctuation::Default).unwrap();
        let store = TranslationStore::builtin();
        let config = ResolverConfig::default();
        let resolution = Resolver::new(&annotated, &config, &store).unwrap().resolve(&nodes);
        let passage = &resolution.passages[0];
        assert_eq!(passage.system, "vulgate");
        assert!(passage.is_valid());
        let niv = &passage.translations[1];
        assert_eq!(niv.system.as_deref(), Some("default"));
        assert_eq!(niv.validity.as_ref().map(|v| v.valid), Some(false));
    }
}
