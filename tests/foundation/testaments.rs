//! Integration tests for testament filters

use lectio_foundation::{Testament, Testaments};

#[test]
fn default_filter_excludes_apocrypha() {
    let filter = Testaments::default();
    assert_eq!(filter.to_string(), "on");
    assert!(filter.allows(Testament::Old));
    assert!(filter.allows(Testament::New));
    assert!(!filter.allows(Testament::Apocrypha));
}

#[test]
fn filters_parse_in_any_order() {
    assert_eq!("ao".parse::<Testaments>().unwrap(), Testaments::OLD | Testaments::APOCRYPHA);
    assert_eq!("NOA".parse::<Testaments>().unwrap().to_string(), "ona");
}

#[test]
fn bad_filters_are_rejected() {
    assert!("".parse::<Testaments>().is_err());
    assert!("onx".parse::<Testaments>().is_err());
}
