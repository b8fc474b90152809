//! Canonical book identifiers.
//!
//! Every book the system knows about has exactly one [`Book`] variant and one
//! OSIS id. Localized names are data in the language tables; this module only
//! knows the canonical ids and which testament each book belongs to.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::testament::Testament;

macro_rules! books {
    ($( $variant:ident => $osis:literal, $testament:ident, $name:literal; )*) => {
        /// A canonical book, identified by its OSIS id.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum Book {
            $(
                #[doc = $name]
                $variant,
            )*
        }

        impl Book {
            /// All books in canonical order (Old Testament, New Testament, Apocrypha).
            pub const ALL: &'static [Book] = &[$(Book::$variant),*];

            /// Returns the OSIS id (`Gen`, `1Cor`, `Ps151`).
            #[must_use]
            pub const fn osis(self) -> &'static str {
                match self {
                    $(Book::$variant => $osis,)*
                }
            }

            /// Returns the testament this book belongs to.
            #[must_use]
            pub const fn testament(self) -> Testament {
                match self {
                    $(Book::$variant => Testament::$testament,)*
                }
            }

            /// Returns the English display name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Book::$variant => $name,)*
                }
            }
        }
    };
}

books! {
    Genesis => "Gen", Old, "Genesis";
    Exodus => "Exod", Old, "Exodus";
    Leviticus => "Lev", Old, "Leviticus";
    Numbers => "Num", Old, "Numbers";
    Deuteronomy => "Deut", Old, "Deuteronomy";
    Joshua => "Josh", Old, "Joshua";
    Judges => "Judg", Old, "Judges";
    Ruth => "Ruth", Old, "Ruth";
    FirstSamuel => "1Sam", Old, "1 Samuel";
    SecondSamuel => "2Sam", Old, "2 Samuel";
    FirstKings => "1Kgs", Old, "1 Kings";
    SecondKings => "2Kgs", Old, "2 Kings";
    FirstChronicles => "1Chr", Old, "1 Chronicles";
    SecondChronicles => "2Chr", Old, "2 Chronicles";
    Ezra => "Ezra", Old, "Ezra";
    Nehemiah => "Neh", Old, "Nehemiah";
    Esther => "Esth", Old, "Esther";
    Job => "Job", Old, "Job";
    Psalms => "Ps", Old, "Psalms";
    Proverbs => "Prov", Old, "Proverbs";
    Ecclesiastes => "Eccl", Old, "Ecclesiastes";
    SongOfSongs => "Song", Old, "Song of Songs";
    Isaiah => "Isa", Old, "Isaiah";
    Jeremiah => "Jer", Old, "Jeremiah";
    Lamentations => "Lam", Old, "Lamentations";
    Ezekiel => "Ezek", Old, "Ezekiel";
    Daniel => "Dan", Old, "Daniel";
    Hosea => "Hos", Old, "Hosea";
    Joel => "Joel", Old, "Joel";
    Amos => "Amos", Old, "Amos";
    Obadiah => "Obad", Old, "Obadiah";
    Jonah => "Jonah", Old, "Jonah";
    Micah => "Mic", Old, "Micah";
    Nahum => "Nah", Old, "Nahum";
    Habakkuk => "Hab", Old, "Habakkuk";
    Zephaniah => "Zeph", Old, "Zephaniah";
    Haggai => "Hag", Old, "Haggai";
    Zechariah => "Zech", Old, "Zechariah";
    Malachi => "Mal", Old, "Malachi";
    Matthew => "Matt", New, "Matthew";
    Mark => "Mark", New, "Mark";
    Luke => "Luke", New, "Luke";
    John => "John", New, "John";
    Acts => "Acts", New, "Acts";
    Romans => "Rom", New, "Romans";
    FirstCorinthians => "1Cor", New, "1 Corinthians";
    SecondCorinthians => "2Cor", New, "2 Corinthians";
    Galatians => "Gal", New, "Galatians";
    Ephesians => "Eph", New, "Ephesians";
    Philippians => "Phil", New, "Philippians";
    Colossians => "Col", New, "Colossians";
    FirstThessalonians => "1Thess", New, "1 Thessalonians";
    SecondThessalonians => "2Thess", New, "2 Thessalonians";
    FirstTimothy => "1Tim", New, "1 Timothy";
    SecondTimothy => "2Tim", New, "2 Timothy";
    Titus => "Titus", New, "Titus";
    Philemon => "Phlm", New, "Philemon";
    Hebrews => "Heb", New, "Hebrews";
    James => "Jas", New, "James";
    FirstPeter => "1Pet", New, "1 Peter";
    SecondPeter => "2Pet", New, "2 Peter";
    FirstJohn => "1John", New, "1 John";
    SecondJohn => "2John", New, "2 John";
    ThirdJohn => "3John", New, "3 John";
    Jude => "Jude", New, "Jude";
    Revelation => "Rev", New, "Revelation";
    Tobit => "Tob", Apocrypha, "Tobit";
    Judith => "Jdt", Apocrypha, "Judith";
    GreekEsther => "GkEsth", Apocrypha, "Greek Esther";
    Wisdom => "Wis", Apocrypha, "Wisdom of Solomon";
    Sirach => "Sir", Apocrypha, "Sirach";
    Baruch => "Bar", Apocrypha, "Baruch";
    PrayerOfAzariah => "PrAzar", Apocrypha, "Prayer of Azariah";
    Susanna => "Sus", Apocrypha, "Susanna";
    BelAndTheDragon => "Bel", Apocrypha, "Bel and the Dragon";
    SongOfThree => "SgThree", Apocrypha, "Song of the Three Young Men";
    EpistleOfJeremiah => "EpJer", Apocrypha, "Epistle of Jeremiah";
    FirstMaccabees => "1Macc", Apocrypha, "1 Maccabees";
    SecondMaccabees => "2Macc", Apocrypha, "2 Maccabees";
    ThirdMaccabees => "3Macc", Apocrypha, "3 Maccabees";
    FourthMaccabees => "4Macc", Apocrypha, "4 Maccabees";
    FirstEsdras => "1Esd", Apocrypha, "1 Esdras";
    SecondEsdras => "2Esd", Apocrypha, "2 Esdras";
    PrayerOfManasseh => "PrMan", Apocrypha, "Prayer of Manasseh";
    Psalm151 => "Ps151", Apocrypha, "Psalm 151";
}

impl Book {
    /// Looks up a book by OSIS id, ignoring ASCII case.
    #[must_use]
    pub fn from_osis(id: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|book| book.osis().eq_ignore_ascii_case(id))
    }

    /// Returns true if this is the Psalm 151 pseudo-book.
    #[must_use]
    pub const fn is_psalm_151(self) -> bool {
        matches!(self, Self::Psalm151)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.osis())
    }
}

impl FromStr for Book {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_osis(s).ok_or_else(|| Error::unknown_book(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_count() {
        assert_eq!(Book::ALL.len(), 85);
        assert_eq!(
            Book::ALL
                .iter()
                .filter(|b| b.testament() == Testament::Old)
                .count(),
            39
        );
        assert_eq!(
            Book::ALL
                .iter()
                .filter(|b| b.testament() == Testament::New)
                .count(),
            27
        );
    }

    #[test]
    fn osis_round_trip() {
        for book in Book::ALL {
            assert_eq!(book.osis().parse::<Book>().unwrap(), *book);
        }
    }

    #[test]
    fn from_osis_ignores_case() {
        assert_eq!(Book::from_osis("1COR"), Some(Book::FirstCorinthians));
        assert_eq!(Book::from_osis("ps151"), Some(Book::Psalm151));
        assert_eq!(Book::from_osis("Genesis"), None);
    }

    #[test]
    fn unknown_book_is_error() {
        let err = "Hezekiah".parse::<Book>().unwrap_err();
        assert!(err.to_string().contains("Hezekiah"));
    }

    #[test]
    fn display_is_osis() {
        assert_eq!(Book::SongOfThree.to_string(), "SgThree");
        assert!(Book::Psalm151.is_psalm_151());
        assert!(!Book::Psalms.is_psalm_151());
    }
}
