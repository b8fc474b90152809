//! Fuzz tests for lexer and grammar crash resistance.
//!
//! The grammar never fails on text without markers, and every node it
//! returns lies inside the text in order.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{AnnotatedText, Annotator, Keywords, Lexer, Punctuation, TokenKind, parse};
    use lectio_foundation::Book;

    /// Strategy for citation-flavoured text.
    fn citation_like() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                Just("John".to_string()),
                Just(" ".to_string()),
                Just(":".to_string()),
                Just(",".to_string()),
                Just(";".to_string()),
                Just("-".to_string()),
                Just("ff".to_string()),
                Just("title".to_string()),
                Just("chapter".to_string()),
                Just("of".to_string()),
                Just("(".to_string()),
                Just(")".to_string()),
                (0u32..200).prop_map(|n| n.to_string()),
            ],
            0..30,
        )
        .prop_map(|parts| parts.concat())
    }

    /// Marks every "John" in `text`.
    fn annotate(text: &str) -> AnnotatedText {
        let mut annotator = Annotator::new(text);
        for (start, name) in text.match_indices("John") {
            assert!(annotator.book(start..start + name.len(), vec![Book::John]));
        }
        annotator.finish()
    }

    proptest! {
        #[test]
        fn lexer_always_reaches_eof(input in any::<String>()) {
            let keywords = Keywords::english();
            let tokens = Lexer::tokenize_all(&input, &keywords, Punctuation::Default);
            prop_assert_eq!(tokens.last().map(|t| &t.kind), Some(&TokenKind::Eof));
        }

        #[test]
        fn plain_text_always_parses(input in any::<String>()) {
            let annotated = AnnotatedText::plain(&input);
            prop_assert!(parse(&annotated, &Keywords::english(), Punctuation::Default).is_ok());
        }

        #[test]
        fn nodes_are_ordered_and_in_bounds(input in citation_like()) {
            let annotated = annotate(&input);
            let nodes = parse(&annotated, &Keywords::english(), Punctuation::Eu).unwrap();
            let mut previous_end = 0;
            for node in &nodes {
                prop_assert!(node.span.start >= previous_end);
                prop_assert!(node.span.end <= annotated.text().len());
                previous_end = node.span.end;
            }
        }
    }
}
