//! Localized keyword spellings.
//!
//! Each language spells "chapter", "and", "ff" and the rest differently. The
//! grammar only sees the [`Keyword`] role; this table maps spellings to roles.

use std::fmt;

/// A keyword role the grammar understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// Joins sequence items ("and").
    And,
    /// Joins range ends ("through", "to").
    Range,
    /// Marks a chapter number.
    Chapter,
    /// Marks a verse number.
    Verse,
    /// "And following".
    Ff,
    /// A psalm superscription.
    Title,
    /// "Chapter 3 of John".
    Of,
}

impl Keyword {
    /// All keyword roles.
    pub const ALL: &'static [Keyword] = &[
        Self::And,
        Self::Range,
        Self::Chapter,
        Self::Verse,
        Self::Ff,
        Self::Title,
        Self::Of,
    ];

    /// Returns the role name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Range => "range",
            Self::Chapter => "chapter",
            Self::Verse => "verse",
            Self::Ff => "ff",
            Self::Title => "title",
            Self::Of => "of",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A table of keyword spellings.
///
/// Matching ignores ASCII case. A spelling that ends in an ASCII letter or
/// digit only matches when the next character is not alphanumeric, so `ff`
/// never matches the start of `ffoo`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Keywords {
    /// Spellings sorted longest first.
    spellings: Vec<(String, Keyword)>,
}

impl Keywords {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// English spellings.
    #[must_use]
    pub fn english() -> Self {
        Self::new()
            .with(Keyword::And, &["and", "&"])
            .with(Keyword::Range, &["through", "thru", "to"])
            .with(
                Keyword::Chapter,
                &[
                    "chapters", "chapter", "chap.", "chap", "chs.", "chs", "ch.", "ch",
                ],
            )
            .with(
                Keyword::Verse,
                &[
                    "verses", "verse", "ver.", "ver", "vss.", "vss", "vs.", "vs", "vv.", "vv",
                    "v.", "v",
                ],
            )
            .with(Keyword::Ff, &["ff.", "ff"])
            .with(Keyword::Title, &["title"])
            .with(Keyword::Of, &["of"])
    }

    /// Adds spellings for a role.
    #[must_use]
    pub fn with(mut self, keyword: Keyword, spellings: &[&str]) -> Self {
        self.spellings.extend(
            spellings
                .iter()
                .filter(|s| !s.is_empty())
                .map(|s| (s.to_ascii_lowercase(), keyword)),
        );
        self.spellings
            .sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        self.spellings.dedup();
        self
    }

    /// Returns the number of spellings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spellings.len()
    }

    /// Returns true if the table has no spellings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spellings.is_empty()
    }

    /// Returns the spellings of one role.
    pub fn spellings(&self, keyword: Keyword) -> impl Iterator<Item = &str> {
        self.spellings
            .iter()
            .filter(move |(_, k)| *k == keyword)
            .map(|(s, _)| s.as_str())
    }

    /// Matches a keyword at the start of `text`, returning the role and the
    /// matched length in bytes.
    #[must_use]
    pub fn match_at(&self, text: &str) -> Option<(Keyword, usize)> {
        self.spellings.iter().find_map(|(spelling, keyword)| {
            let prefix = text.get(..spelling.len())?;
            if !prefix.eq_ignore_ascii_case(spelling) {
                return None;
            }
            let needs_boundary = spelling
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_alphanumeric());
            let next = text[spelling.len()..].chars().next();
            if needs_boundary && next.is_some_and(char::is_alphanumeric) {
                return None;
            }
            Some((*keyword, spelling.len()))
        })
    }

    /// Returns true if a keyword that does not start with an ASCII character
    /// matches at the start of `text`. Such keywords may end a word run.
    #[must_use]
    pub fn starts_unspaced(&self, text: &str) -> bool {
        text.chars().next().is_some_and(|c| !c.is_ascii()) && self.match_at(text).is_some()
    }
}
