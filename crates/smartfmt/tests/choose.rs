//! Tests for the choose extension.

use smartfmt::{FormatError, Formatter, Value};

fn fmt(template: &str, value: impl Into<Value>) -> Result<String, FormatError> {
    Formatter::default().format(template, &[value.into()])
}

#[test]
fn picks_matching_branch() {
    let template = "{0:choose(1|2|3):one|two|three}";
    assert_eq!(fmt(template, 1).unwrap(), "one");
    assert_eq!(fmt(template, 3).unwrap(), "three");
}

#[test]
fn short_alias() {
    assert_eq!(fmt("{0:c(a|b):A|B}", "b").unwrap(), "B");
}

#[test]
fn no_match_without_default() {
    let err = fmt("{0:choose(1|2|3):one|two|three}", 4).unwrap_err();
    assert_eq!(err, FormatError::NoDefaultChoice);
}

#[test]
fn no_match_uses_default() {
    let template = "{0:choose(1|2|3):one|two|three|other}";
    assert_eq!(fmt(template, 4).unwrap(), "other");
    assert_eq!(fmt(template, 2).unwrap(), "two");
}

#[test]
fn branch_count_mismatch() {
    let err = fmt("{0:choose(1|2):a|b|c|d}", 1).unwrap_err();
    assert_eq!(err, FormatError::ChoiceCount { expected: 2 });
    insta::assert_snapshot!(err, @"specify 2 or 3 choices");
}

#[test]
fn none_matches_null() {
    assert_eq!(fmt("{0:choose(null|x):empty|x}", Value::None).unwrap(), "empty");
}

#[test]
fn symbols_match_by_name() {
    let template = "{0:choose(Red|Green):stop|go}";
    assert_eq!(fmt(template, Value::symbol("Green")).unwrap(), "go");
}

#[test]
fn booleans_match_lowercase() {
    assert_eq!(fmt("{0:choose(true|false):yes|no}", false).unwrap(), "no");
}

#[test]
fn branches_format_the_value() {
    assert_eq!(fmt("{0:choose(a|b):A{}|B{}}", "b").unwrap(), "Bb");
}

#[test]
fn missing_option_declines() {
    assert_eq!(fmt("{0:choose:a|b}", 1).unwrap(), "1");
}

#[test]
fn single_branch_declines() {
    assert_eq!(fmt("{0:choose(1):a}", 1).unwrap(), "1");
}

#[test]
fn floats_match_with_their_fraction() {
    let template = "{0:choose(1|1.0|1.5):int|float|half|none}";
    assert_eq!(fmt(template, 1).unwrap(), "int");
    assert_eq!(fmt(template, 1.0).unwrap(), "float");
    assert_eq!(fmt(template, 1.5).unwrap(), "half");
}
