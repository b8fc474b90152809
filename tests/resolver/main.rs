//! Integration tests for Layer 3: Parser
//!
//! End-to-end tests through `BcvParser` with the English table: sequences,
//! ranges, versification, translations, and the output strategies.

mod options;
mod roundtrip;
mod sequences;
mod translations;

use lectio_parser::BcvParser;

/// An English parser with the given options applied.
pub fn parser(options: &[(&str, &str)]) -> BcvParser {
    let mut parser = BcvParser::for_language("en").unwrap();
    for (name, value) in options {
        parser.set_option(name, value).unwrap();
    }
    parser
}

/// Parses `text` and renders comma-joined OSIS.
pub fn osis(text: &str, options: &[(&str, &str)]) -> String {
    parser(options).parse(text).unwrap().osis()
}
