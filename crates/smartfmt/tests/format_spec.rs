//! Tests for the extension and numeric format-spec grammars.

use smartfmt::parse_format_spec;
use smartfmt::parser::{Align, NumericKind, NumericSpec, Sign, is_valid_name};

// =============================================================================
// Extension Form
// =============================================================================

#[test]
fn name_option_template() {
    let spec = parse_format_spec("choose(1|2|3):one|two|three|other");
    assert_eq!(spec.name, "choose");
    assert_eq!(spec.option, Some("1|2|3"));
    assert_eq!(spec.template, "one|two|three|other");
}

#[test]
fn name_without_option() {
    let spec = parse_format_spec("list:{}|, ");
    assert_eq!(spec.name, "list");
    assert_eq!(spec.option, None);
    assert_eq!(spec.template, "{}|, ");
}

#[test]
fn empty_option() {
    let spec = parse_format_spec("p():a|b");
    assert_eq!(spec.name, "p");
    assert_eq!(spec.option, Some(""));
}

#[test]
fn bare_template_is_unnamed() {
    for raw in ["one|many", "{}|, ", ",.2f", "", "n2", "p1", "c"] {
        let spec = parse_format_spec(raw);
        assert_eq!(spec.name, "", "{raw}");
        assert_eq!(spec.option, None, "{raw}");
        assert_eq!(spec.template, raw);
    }
}

#[test]
fn leading_colon_gives_empty_name() {
    // A name must be non-empty, so the colon is part of the template.
    let spec = parse_format_spec(":x");
    assert_eq!(spec.name, "");
    assert_eq!(spec.template, ":x");
}

#[test]
fn unclosed_option_is_template() {
    let spec = parse_format_spec("plural(en:a|b");
    assert_eq!(spec.name, "");
    assert_eq!(spec.template, "plural(en:a|b");
}

#[test]
fn valid_names() {
    assert!(is_valid_name("plural"));
    assert!(is_valid_name("my_ext"));
    assert!(is_valid_name(""));
    assert!(!is_valid_name("ext1"));
    assert!(!is_valid_name("a-b"));
}

// =============================================================================
// Numeric Form
// =============================================================================

#[test]
fn full_numeric_spec() {
    let spec = NumericSpec::parse("*=+#010,.3%").unwrap();
    assert_eq!(spec.fill, Some('*'));
    assert_eq!(spec.align, Some(Align::AfterSign));
    assert_eq!(spec.sign, Some(Sign::Always));
    assert!(spec.alternate);
    assert!(spec.zero);
    assert_eq!(spec.width, Some(10));
    assert!(spec.grouping);
    assert_eq!(spec.precision, Some(3));
    assert_eq!(spec.kind, Some(NumericKind::Percent));
}

#[test]
fn empty_spec_is_not_numeric() {
    let spec = NumericSpec::parse("").unwrap();
    assert_eq!(spec, NumericSpec::default());
    assert!(!spec.is_numeric());
    assert!(!spec.has_layout());
}

#[test]
fn layout_only_is_not_numeric() {
    let spec = NumericSpec::parse("_<8").unwrap();
    assert!(!spec.is_numeric());
    assert!(spec.has_layout());
}

#[test]
fn grouping_or_precision_makes_numeric() {
    assert!(NumericSpec::parse(",").unwrap().is_numeric());
    assert!(NumericSpec::parse(".2").unwrap().is_numeric());
    assert!(NumericSpec::parse("F").unwrap().is_numeric());
}

#[test]
fn space_sign() {
    let spec = NumericSpec::parse(" d").unwrap();
    assert_eq!(spec.sign, Some(Sign::Space));
    assert_eq!(spec.kind, Some(NumericKind::Decimal));
}

#[test]
fn non_numeric_specs_rejected() {
    for raw in ["n2", "x", "one|two", "{}|, ", "10s", ".f"] {
        assert!(NumericSpec::parse(raw).is_none(), "{raw}");
    }
}
