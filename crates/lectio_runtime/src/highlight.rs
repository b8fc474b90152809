//! Syntax highlighting for the REPL.

use std::borrow::Cow;
use std::sync::Arc;

use lectio_foundation::Testaments;
use lectio_language::BookMatcher;

const RESET: &str = "\x1b[0m";
const BOOK: &str = "\x1b[1;32m";
const NUMBER: &str = "\x1b[35m";
const PUNCT: &str = "\x1b[1m";
const COMMAND: &str = "\x1b[36m";

/// Highlights book names, numbers, and citation punctuation.
pub struct CitationHighlighter {
    matcher: Option<Arc<dyn BookMatcher>>,
}

impl CitationHighlighter {
    /// Creates a highlighter that colors numbers and punctuation only.
    #[must_use]
    pub const fn new() -> Self {
        Self { matcher: None }
    }

    /// Creates a highlighter that also colors book names.
    #[must_use]
    pub fn with_matcher(matcher: Arc<dyn BookMatcher>) -> Self {
        Self {
            matcher: Some(matcher),
        }
    }

    /// Replaces the matcher used for book names.
    pub fn set_matcher(&mut self, matcher: Arc<dyn BookMatcher>) {
        self.matcher = Some(matcher);
    }

    /// Highlight a line of input.
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.is_empty() {
            return Cow::Borrowed(line);
        }
        if line.starts_with(':') {
            let end = line.find(char::is_whitespace).unwrap_or(line.len());
            return Cow::Owned(format!("{COMMAND}{}{RESET}{}", &line[..end], &line[end..]));
        }

        let books: Vec<(usize, usize)> = self
            .matcher
            .as_ref()
            .map(|m| {
                m.find_books(line, Testaments::all())
                    .into_iter()
                    .map(|c| (c.span.start, c.span.end))
                    .collect()
            })
            .unwrap_or_default();

        let mut result = String::with_capacity(line.len() * 2);
        let mut books = books.into_iter().peekable();
        let mut chars = line.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            if let Some(&(start, end)) = books.peek() {
                if i == start {
                    books.next();
                    result.push_str(BOOK);
                    result.push_str(&line[start..end]);
                    result.push_str(RESET);
                    while chars.next_if(|&(j, _)| j < end).is_some() {}
                    continue;
                }
            }
            match c {
                c if c.is_ascii_digit() => {
                    result.push_str(NUMBER);
                    result.push(c);
                    while let Some((_, d)) = chars.next_if(|(_, d)| d.is_ascii_digit()) {
                        result.push(d);
                    }
                    result.push_str(RESET);
                }
                ':' | '-' | ',' | ';' | '.' | '\u{ff5e}' | '~' | '\u{2013}' | '\u{2014}' => {
                    result.push_str(PUNCT);
                    result.push(c);
                    result.push_str(RESET);
                }
                _ => result.push(c),
            }
        }
        Cow::Owned(result)
    }
}

impl Default for CitationHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
