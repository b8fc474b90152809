//! Testament membership and testament filters.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The testament a single book belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Testament {
    /// Old Testament.
    Old,
    /// New Testament.
    New,
    /// Deuterocanonical books and the Apocrypha.
    Apocrypha,
}

impl Testament {
    /// Returns the filter bit for this testament.
    #[must_use]
    pub const fn flag(self) -> Testaments {
        match self {
            Self::Old => Testaments::OLD,
            Self::New => Testaments::NEW,
            Self::Apocrypha => Testaments::APOCRYPHA,
        }
    }
}

bitflags! {
    /// A set of testaments, used to filter which books may match.
    ///
    /// Parsed from and displayed as a string of `o`, `n`, and `a`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Testaments: u8 {
        /// Old Testament books.
        const OLD = 0b001;
        /// New Testament books.
        const NEW = 0b010;
        /// Apocryphal books.
        const APOCRYPHA = 0b100;
    }
}

impl Testaments {
    /// Returns true if books of the given testament pass this filter.
    #[must_use]
    pub const fn allows(self, testament: Testament) -> bool {
        self.contains(testament.flag())
    }
}

impl Default for Testaments {
    fn default() -> Self {
        Self::OLD | Self::NEW
    }
}

impl FromStr for Testaments {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut flags = Self::empty();
        for c in s.chars() {
            flags |= match c.to_ascii_lowercase() {
                'o' => Self::OLD,
                'n' => Self::NEW,
                'a' => Self::APOCRYPHA,
                _ => return Err(Error::invalid_option("testaments", s, "letters from 'ona'")),
            };
        }
        if flags.is_empty() {
            return Err(Error::invalid_option("testaments", s, "letters from 'ona'"));
        }
        Ok(flags)
    }
}

impl fmt::Display for Testaments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contains(Self::OLD) {
            f.write_str("o")?;
        }
        if self.contains(Self::NEW) {
            f.write_str("n")?;
        }
        if self.contains(Self::APOCRYPHA) {
            f.write_str("a")?;
        }
        Ok(())
    }
}
