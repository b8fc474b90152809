//! Integration tests for the citation grammar over matched text

use lectio_foundation::Testaments;
use lectio_language::{BookMatcher, Punctuation, parse};

fn tree(text: &str, punctuation: Punctuation) -> Vec<String> {
    let matcher = lectio_stdlib::language("en").unwrap();
    let annotated = matcher.annotate(text, Testaments::default());
    parse(&annotated, matcher.keywords(), punctuation)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn sequences_keep_their_separators() {
    assert_eq!(
        tree("John 3:16, 18; 4:2", Punctuation::Default),
        vec!["(sequence (bcv #0 3 16) , (integer 18) ; (cv 4 2))"]
    );
}

#[test]
fn european_punctuation_swaps_comma_and_period() {
    assert_eq!(
        tree("John 3,16.18", Punctuation::Eu),
        vec!["(sequence (bcv #0 3 16) , (integer 18))"]
    );
}

#[test]
fn prose_becomes_words() {
    let nodes = tree("nothing to see", Punctuation::Default);
    assert_eq!(nodes.len(), 1);
    assert!(nodes[0].starts_with("(word"));
}

#[test]
fn translations_close_a_sequence() {
    assert_eq!(
        tree("John 3:16 (NIV)", Punctuation::Default),
        vec!["(sequence (bcv #0 3 16) (translation #0))"]
    );
}

#[test]
fn grammar_never_fails_on_prose() {
    for text in ["", ":::", "1 2 3", "-- , ; --", "(((", "v. 3 ff title"] {
        let matcher = lectio_stdlib::language("en").unwrap();
        let annotated = matcher.annotate(text, Testaments::default());
        assert!(parse(&annotated, matcher.keywords(), Punctuation::Default).is_ok(), "{text}");
    }
}
