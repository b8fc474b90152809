//! Built-in book tables for Lectio.
//!
//! This crate provides:
//! - [`LanguageTable`] - Static book, translation, and keyword data
//! - [`TableMatcher`] - A [`BookMatcher`] compiled from a table
//! - [`language`] - Shared matchers for the built-in languages

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod en;
pub mod ja;
pub mod table;

use std::sync::Arc;

use lectio_foundation::{Error, Result};
use lectio_language::BookMatcher;
use once_cell::sync::Lazy;

pub use table::{LanguageTable, TableMatcher};

static TABLES: &[&LanguageTable] = &[&en::TABLE, &ja::TABLE];

static ENGLISH: Lazy<Arc<TableMatcher>> = Lazy::new(|| compiled(&en::TABLE));
static JAPANESE: Lazy<Arc<TableMatcher>> = Lazy::new(|| compiled(&ja::TABLE));

fn compiled(table: &LanguageTable) -> Arc<TableMatcher> {
    Arc::new(TableMatcher::new(table).expect("built-in book table compiles"))
}

/// Returns the shared matcher for a built-in language.
///
/// # Errors
///
/// Returns an error if no table exists for `code`.
pub fn language(code: &str) -> Result<Arc<dyn BookMatcher>> {
    match code.to_ascii_lowercase().as_str() {
        "en" => Ok(ENGLISH.clone()),
        "ja" => Ok(JAPANESE.clone()),
        _ => Err(Error::unknown_language(code)),
    }
}

/// Returns the codes of the built-in languages.
#[must_use]
pub fn languages() -> Vec<&'static str> {
    TABLES.iter().map(|table| table.code).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectio_foundation::{Book, Testaments};
    use proptest::prelude::*;

    fn first_book(code: &str, text: &str) -> Option<Vec<Book>> {
        language(code)
            .unwrap()
            .find_books(text, Testaments::all())
            .into_iter()
            .next()
            .map(|candidate| candidate.books)
    }

    #[test]
    fn unknown_language_is_error() {
        let err = language("tlh").err().unwrap();
        assert!(err.to_string().contains("tlh"));
        assert_eq!(languages(), vec!["en", "ja"]);
    }

    #[test]
    fn matchers_are_shared() {
        let a = language("en").unwrap();
        let b = language("EN").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.language(), "en");
    }

    #[test]
    fn english_names() {
        assert_eq!(first_book("en", "Matthew 5"), Some(vec![Book::Matthew]));
        assert_eq!(first_book("en", "2 Kings 4"), Some(vec![Book::SecondKings]));
        assert_eq!(first_book("en", "III John 2"), Some(vec![Book::ThirdJohn]));
        assert_eq!(
            first_book("en", "Song of Solomon 2"),
            Some(vec![Book::SongOfSongs])
        );
        assert_eq!(
            first_book("en", "Hb 2:4"),
            Some(vec![Book::Hebrews, Book::Habakkuk])
        );
    }

    #[test]
    fn english_ignores_common_words() {
        assert_eq!(first_book("en", "this is 3 am"), None);
    }

    #[test]
    fn japanese_names() {
        assert_eq!(first_book("ja", "創世記 1:1"), Some(vec![Book::Genesis]));
        assert_eq!(first_book("ja", "Matt5John3"), Some(vec![Book::Matthew]));
        assert_eq!(first_book("ja", "1Ps 1"), None);
        assert_eq!(first_book("ja", "11Sam 1"), None);
    }

    #[test]
    fn japanese_translations() {
        let annotated = language("ja").unwrap().annotate("Lev 1 (JLB)", Testaments::default());
        assert_eq!(annotated.translations().len(), 1);
        assert_eq!(annotated.translation(0).unwrap().alias, "JLB");
    }

    proptest! {
        #[test]
        fn every_osis_id_matches_itself(index in 0usize..85) {
            let book = Book::ALL[index];
            let text = format!("{} 1", book.osis());
            let found = language("en").unwrap().find_books(&text, Testaments::all());
            prop_assert_eq!(found.len(), 1);
            prop_assert!(found[0].books.contains(&book));
            prop_assert_eq!(found[0].span.end, book.osis().len());
        }
    }
}
