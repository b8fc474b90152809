//! Resolver configuration.
//!
//! Every option has a string name and string values so hosts can pass
//! settings through from a command line or a REPL:
//!
//! ```text
//! testaments                      o, n, a in any combination    (on)
//! sequence_combination_strategy   combine | separate            (combine)
//! osis_compaction_strategy        b | bc | bcv                  (b)
//! ps151_strategy                  b | bc                        (bc)
//! captive_end_digits_strategy     delete | include              (delete)
//! punctuation_strategy            default | eu                  (default)
//! versification_system            any loaded system name        (default)
//! book_alone_strategy             ignore | full | first_chapter (ignore)
//! invalid_passage_strategy        ignore | include              (ignore)
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use lectio_foundation::{Error, Result, Testaments};
use lectio_language::Punctuation;

macro_rules! strategy {
    (
        $(#[$meta:meta])*
        $name:ident, $option:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// The option name this strategy is set through.
            pub const OPTION: &'static str = $option;

            /// Every accepted value, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($text),+];
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s.to_ascii_lowercase().as_str() {
                    $( $text => Ok(Self::$variant), )+
                    _ => Err(Error::invalid_option($option, s, Self::VALUES.join(" | "))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(match self {
                    $( Self::$variant => $text, )+
                })
            }
        }
    };
}

strategy! {
    /// Whether touching passages of one sequence are merged.
    SequenceCombination, "sequence_combination_strategy" {
        /// Merge adjacent and overlapping passages.
        Combine => "combine",
        /// Keep every reference as its own passage.
        Separate => "separate",
    }
}

strategy! {
    /// How far OSIS output is shortened.
    OsisCompaction, "osis_compaction_strategy" {
        /// Whole books render as `Gen`, whole chapters as `Gen.1`.
        B => "b",
        /// Whole chapters render as `Gen.1`.
        Bc => "bc",
        /// Always render `Gen.1.1`.
        Bcv => "bcv",
    }
}

strategy! {
    /// How Psalm 151 is addressed.
    Psalm151Strategy, "ps151_strategy" {
        /// As its own book, `Ps151.1.1`.
        B => "b",
        /// As chapter 151 of Psalms, `Ps.151.1`.
        Bc => "bc",
    }
}

strategy! {
    /// What happens to a trailing number with letters glued to it ("18th").
    CaptiveEndDigits, "captive_end_digits_strategy" {
        /// Drop it.
        Delete => "delete",
        /// Keep it when it reads as a verse.
        Include => "include",
    }
}

strategy! {
    /// What a book named without any numbers produces.
    BookAlone, "book_alone_strategy" {
        /// Nothing, though later numbers still attach to the book.
        Ignore => "ignore",
        /// The whole book.
        Full => "full",
        /// Its first chapter.
        FirstChapter => "first_chapter",
    }
}

strategy! {
    /// Whether OSIS output includes passages that failed validation.
    InvalidPassages, "invalid_passage_strategy" {
        /// Leave them out.
        Ignore => "ignore",
        /// Render them like valid passages.
        Include => "include",
    }
}

/// Every setting that changes how a parse is resolved or rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolverConfig {
    /// Books outside these testaments are dropped.
    pub testaments: Testaments,
    /// Merging of touching passages.
    pub sequence_combination: SequenceCombination,
    /// OSIS shortening.
    pub osis_compaction: OsisCompaction,
    /// Psalm 151 addressing.
    pub ps151: Psalm151Strategy,
    /// Trailing glued numbers.
    pub captive_end_digits: CaptiveEndDigits,
    /// Reading of `,` and `.`.
    pub punctuation: Punctuation,
    /// Name of the system used when no translation picks one.
    pub versification: String,
    /// Bare book handling.
    pub book_alone: BookAlone,
    /// Invalid passages in OSIS output.
    pub invalid_passages: InvalidPassages,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            testaments: Testaments::default(),
            sequence_combination: SequenceCombination::Combine,
            osis_compaction: OsisCompaction::B,
            ps151: Psalm151Strategy::Bc,
            captive_end_digits: CaptiveEndDigits::Delete,
            punctuation: Punctuation::Default,
            versification: "default".to_string(),
            book_alone: BookAlone::Ignore,
            invalid_passages: InvalidPassages::Ignore,
        }
    }
}

impl ResolverConfig {
    /// Names of every option, in display order.
    pub const OPTIONS: &'static [&'static str] = &[
        "testaments",
        SequenceCombination::OPTION,
        OsisCompaction::OPTION,
        Psalm151Strategy::OPTION,
        CaptiveEndDigits::OPTION,
        "punctuation_strategy",
        "versification_system",
        BookAlone::OPTION,
        InvalidPassages::OPTION,
    ];

    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the testament filter.
    #[must_use]
    pub fn with_testaments(mut self, testaments: Testaments) -> Self {
        self.testaments = testaments;
        self
    }

    /// Sets the combination strategy.
    #[must_use]
    pub fn with_sequence_combination(mut self, strategy: SequenceCombination) -> Self {
        self.sequence_combination = strategy;
        self
    }

    /// Sets the OSIS compaction strategy.
    #[must_use]
    pub fn with_osis_compaction(mut self, strategy: OsisCompaction) -> Self {
        self.osis_compaction = strategy;
        self
    }

    /// Sets the Psalm 151 strategy.
    #[must_use]
    pub fn with_ps151(mut self, strategy: Psalm151Strategy) -> Self {
        self.ps151 = strategy;
        self
    }

    /// Sets the captive end digits strategy.
    #[must_use]
    pub fn with_captive_end_digits(mut self, strategy: CaptiveEndDigits) -> Self {
        self.captive_end_digits = strategy;
        self
    }

    /// Sets the punctuation strategy.
    #[must_use]
    pub fn with_punctuation(mut self, punctuation: Punctuation) -> Self {
        self.punctuation = punctuation;
        self
    }

    /// Sets the default versification system by name.
    #[must_use]
    pub fn with_versification(mut self, name: impl Into<String>) -> Self {
        self.versification = name.into();
        self
    }

    /// Sets the book alone strategy.
    #[must_use]
    pub fn with_book_alone(mut self, strategy: BookAlone) -> Self {
        self.book_alone = strategy;
        self
    }

    /// Sets the invalid passage strategy.
    #[must_use]
    pub fn with_invalid_passages(mut self, strategy: InvalidPassages) -> Self {
        self.invalid_passages = strategy;
        self
    }

    /// Sets an option from its string name and value.
    ///
    /// The versification name is not checked here; an unknown system is
    /// reported by the next parse.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown option or an unparsable value.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "testaments" => self.testaments = value.parse()?,
            SequenceCombination::OPTION => self.sequence_combination = value.parse()?,
            OsisCompaction::OPTION => self.osis_compaction = value.parse()?,
            Psalm151Strategy::OPTION => self.ps151 = value.parse()?,
            CaptiveEndDigits::OPTION => self.captive_end_digits = value.parse()?,
            "punctuation_strategy" => self.punctuation = value.parse()?,
            "versification_system" => {
                if value.trim().is_empty() {
                    return Err(Error::invalid_option(name, value, "a system name"));
                }
                self.versification = value.trim().to_string();
            }
            BookAlone::OPTION => self.book_alone = value.parse()?,
            InvalidPassages::OPTION => self.invalid_passages = value.parse()?,
            _ => {
                return Err(Error::invalid_option(
                    name,
                    value,
                    ResolverConfig::OPTIONS.join(", "),
                ));
            }
        }
        Ok(())
    }

    /// Returns the current value of an option as a string.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<String> {
        let value = match name {
            "testaments" => self.testaments.to_string(),
            SequenceCombination::OPTION => self.sequence_combination.to_string(),
            OsisCompaction::OPTION => self.osis_compaction.to_string(),
            Psalm151Strategy::OPTION => self.ps151.to_string(),
            CaptiveEndDigits::OPTION => self.captive_end_digits.to_string(),
            "punctuation_strategy" => self.punctuation.to_string(),
            "versification_system" => self.versification.clone(),
            BookAlone::OPTION => self.book_alone.to_string(),
            InvalidPassages::OPTION => self.invalid_passages.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Returns every option with its current value.
    #[must_use]
    pub fn options(&self) -> Vec<(&'static str, String)> {
        Self::OPTIONS
            .iter()
            .filter_map(|name| Some((*name, self.option(name)?)))
            .collect()
    }

    /// Returns true if Psalm 151 is folded into Psalms for this config.
    #[must_use]
    pub fn folds_psalm_151(&self) -> bool {
        self.ps151 == Psalm151Strategy::Bc && self.testaments.contains(Testaments::APOCRYPHA)
    }
}
