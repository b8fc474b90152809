//! Table-driven book matching.
//!
//! A [`LanguageTable`] is static data: book names, translation
//! abbreviations, and keyword spellings. [`TableMatcher`] compiles a table
//! into anchored, case-insensitive regexes and scans text left to right.
//!
//! At each position the longest acceptable name wins. Two names of equal
//! length are broken by the testament filter, then by a name spelled exactly
//! as written over one matched with its spaces dropped ("Isa" is Isaiah, not
//! "I Sa"), then by table order.

use std::ops::Range;

use lectio_foundation::{Book, Error, ErrorKind, Result, Testaments};
use lectio_language::{AnnotatedText, Annotator, BookMatcher, Keywords, blank_markers};
use regex::{Regex, RegexSet};
use tracing::debug;

/// Static book and translation names for one language.
#[derive(Debug)]
pub struct LanguageTable {
    /// Language code (`en`, `ja`).
    pub code: &'static str,
    /// Names, each standing for one or more books in preference order.
    pub books: &'static [(&'static [Book], &'static [&'static str])],
    /// Translation alias and the spellings that select it.
    pub translations: &'static [(&'static str, &'static [&'static str])],
    /// Builds the keyword spellings.
    pub keywords: fn() -> Keywords,
}

#[derive(Clone, Debug)]
enum Target {
    Books(Vec<Book>),
    Translation(&'static str),
}

#[derive(Debug)]
struct Entry {
    target: Target,
    names: Vec<&'static str>,
    regex: Regex,
}

/// A compiled [`LanguageTable`].
#[derive(Debug)]
pub struct TableMatcher {
    code: &'static str,
    keywords: Keywords,
    entries: Vec<Entry>,
    prefilter: RegexSet,
}

/// Orders candidate matches at one position; fields compare in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Rank {
    end: usize,
    preferred: bool,
    exact: bool,
}

struct Found<'m> {
    target: &'m Target,
    range: Range<usize>,
}

impl TableMatcher {
    /// Compiles a table. OSIS ids are always accepted as book names.
    ///
    /// # Errors
    ///
    /// Returns an error if a name does not compile.
    pub fn new(table: &LanguageTable) -> Result<Self> {
        let osis = Book::ALL
            .iter()
            .map(|book| (Target::Books(vec![*book]), vec![book.osis()]));
        let books = table
            .books
            .iter()
            .map(|(books, names)| (Target::Books(books.to_vec()), names.to_vec()));
        let translations = table
            .translations
            .iter()
            .map(|(alias, names)| (Target::Translation(alias), names.to_vec()));

        let mut patterns = Vec::new();
        let mut entries = Vec::new();
        for (target, names) in books.chain(osis).chain(translations) {
            let pattern = name_pattern(&names);
            let regex = Regex::new(&pattern).map_err(internal)?;
            patterns.push(pattern);
            entries.push(Entry {
                target,
                names,
                regex,
            });
        }
        let prefilter = RegexSet::new(&patterns).map_err(internal)?;
        debug!(language = table.code, entries = entries.len(), "compiled book table");

        Ok(Self {
            code: table.code,
            keywords: (table.keywords)(),
            entries,
            prefilter,
        })
    }

    fn best_at(
        &self,
        source: &str,
        start: usize,
        previous_book_end: Option<usize>,
        filter: Testaments,
    ) -> Option<Found<'_>> {
        let rest = source.get(start..)?;
        let mut best: Option<(Found<'_>, Rank)> = None;
        for index in self.prefilter.matches(rest).iter() {
            let entry = &self.entries[index];
            let Some(found) = entry.regex.find(rest) else {
                continue;
            };
            let range = start..start + found.end();
            if !accepts(source, range.clone(), previous_book_end) {
                continue;
            }
            let rank = Rank {
                end: range.end,
                preferred: match &entry.target {
                    Target::Books(books) => books.iter().any(|b| filter.allows(b.testament())),
                    Target::Translation(_) => true,
                },
                exact: entry
                    .names
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(found.as_str())),
            };
            if best.as_ref().is_none_or(|(_, current)| rank > *current) {
                best = Some((
                    Found {
                        target: &entry.target,
                        range,
                    },
                    rank,
                ));
            }
        }
        best.map(|(found, _)| found)
    }
}

impl BookMatcher for TableMatcher {
    fn language(&self) -> &str {
        self.code
    }

    fn keywords(&self) -> &Keywords {
        &self.keywords
    }

    fn annotate(&self, text: &str, filter: Testaments) -> AnnotatedText {
        let source = blank_markers(text);
        let mut annotator = Annotator::new(&source);
        let mut previous_book_end = None;
        let mut previous: Option<char> = None;
        let mut pos = 0;

        while let Some(c) = source[pos..].chars().next() {
            let word_interior =
                c.is_ascii_alphabetic() && previous.is_some_and(|p| p.is_ascii_alphabetic());
            if !c.is_whitespace() && !word_interior {
                if let Some(found) = self.best_at(&source, pos, previous_book_end, filter) {
                    let end = found.range.end;
                    let marked = match found.target {
                        Target::Books(books) => {
                            let marked = annotator.book(found.range.clone(), books.clone());
                            if marked {
                                previous_book_end = Some(end);
                            }
                            marked
                        }
                        Target::Translation(alias) => {
                            annotator.translation(found.range.clone(), *alias)
                        }
                    };
                    if marked {
                        previous = source[..end].chars().next_back();
                        pos = end;
                        continue;
                    }
                }
            }
            previous = Some(c);
            pos += c.len_utf8();
        }
        annotator.finish()
    }
}

/// Builds an anchored pattern accepting any of `names`, longest first.
/// Spaces inside a name match any amount of whitespace.
fn name_pattern(names: &[&str]) -> String {
    let mut sorted = names.to_vec();
    sorted.sort_by_key(|name| std::cmp::Reverse(name.len()));
    let alternatives: Vec<String> = sorted
        .iter()
        .map(|name| {
            name.split(' ')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s*")
        })
        .collect();
    format!("(?i)^(?:{})", alternatives.join("|"))
}

/// Checks the characters around a candidate match.
///
/// A name may not start or end inside an ASCII word, and may only follow a
/// digit when those digits directly trail the previous book ("Matt5John3").
fn accepts(source: &str, range: Range<usize>, previous_book_end: Option<usize>) -> bool {
    let Some(matched) = source.get(range.clone()) else {
        return false;
    };
    let before = source[..range.start].chars().next_back();
    let after = source[range.end..].chars().next();
    let ascii_letter = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphabetic());

    if ascii_letter(matched.chars().next()) && ascii_letter(before) {
        return false;
    }
    if ascii_letter(matched.chars().next_back()) && ascii_letter(after) {
        return false;
    }
    if before.is_some_and(|c| c.is_ascii_digit()) {
        let digits_start = source[..range.start]
            .trim_end_matches(|c: char| c.is_ascii_digit())
            .len();
        return previous_book_end == Some(digits_start);
    }
    true
}

fn internal(err: regex::Error) -> Error {
    Error::new(ErrorKind::Internal(err.to_string()))
}
