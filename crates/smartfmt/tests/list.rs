//! Tests for the list extension and the ambient index.

use std::collections::BTreeMap;

use smartfmt::{
    ErrorAction, Extension, FormatError, Formatter, FormatterContext, LocaleId, Value, args,
};

fn fmt(template: &str, value: impl Into<Value>) -> Result<String, FormatError> {
    Formatter::default().format(template, &[value.into()])
}

// =============================================================================
// Spacers
// =============================================================================

#[test]
fn final_spacer() {
    let text = fmt("{0:{}|, |, and }", vec![1, 2, 3, 4, 5]).unwrap();
    assert_eq!(text, "1, 2, 3, 4, and 5");
}

#[test]
fn two_item_spacer() {
    assert_eq!(fmt("{0:{}|, |, and | and }", vec!["A", "B"]).unwrap(), "A and B");
    assert_eq!(
        fmt("{0:{}|, |, and | and }", vec!["A", "B", "C"]).unwrap(),
        "A, B, and C"
    );
}

#[test]
fn two_items_fall_back_to_final_spacer() {
    assert_eq!(fmt("{0:{}|, |, and }", vec!["A", "B"]).unwrap(), "A, and B");
    assert_eq!(fmt("{0:{}| + }", vec!["A", "B"]).unwrap(), "A + B");
}

#[test]
fn single_and_empty_lists() {
    assert_eq!(fmt("{0:{}|, }", vec!["A"]).unwrap(), "A");
    assert_eq!(fmt("{0:{}|, }", Vec::<Value>::new()).unwrap(), "");
}

#[test]
fn named_list_extension() {
    assert_eq!(fmt("{0:list:<{}>|}", vec![1, 2]).unwrap(), "<1><2>");
    assert_eq!(fmt("{0:l:{}|-}", vec![1, 2]).unwrap(), "1-2");
}

#[test]
fn items_are_formatted_with_specs() {
    let text = Formatter::builder()
        .locale(LocaleId::parse("de").unwrap())
        .build()
        .format("{0:{:,.1f}|; }", &[Value::from(vec![1234.5, 0.26])])
        .unwrap();
    assert_eq!(text, "1.234,5; 0,3");
}

#[test]
fn map_items_with_keys() {
    let people: Vec<Value> = ["Ann", "Bob"]
        .into_iter()
        .map(|name| BTreeMap::from([("name".to_string(), Value::from(name))]).into())
        .collect();
    assert_eq!(fmt("{0:{0[name]}|, }", people).unwrap(), "Ann, Bob");
}

// =============================================================================
// Ambient Index
// =============================================================================

#[test]
fn index_is_available_to_items() {
    let text = fmt("{0:{} = {index}|, }", vec!["a", "b", "c"]).unwrap();
    assert_eq!(text, "a = 0, b = 1, c = 2");
}

#[test]
fn index_outside_list_is_context_error() {
    let err = fmt("{index}", 1).unwrap_err();
    assert_eq!(
        err,
        FormatError::Context {
            name: "index".to_string()
        }
    );
}

#[test]
fn named_index_argument_wins() {
    let text = Formatter::default()
        .format_args("{index}", &args!["index" => 7])
        .unwrap();
    assert_eq!(text, "7");
}

#[test]
fn index_after_list_is_gone() {
    let formatter = Formatter::builder().error_action(ErrorAction::Ignore).build();
    let text = formatter
        .format("{0:{index}|,}/{index}", &[Value::from(vec![1, 2])])
        .unwrap();
    assert_eq!(text, "0,1/");
}

fn twice(
    cx: &mut FormatterContext<'_>,
    value: &Value,
    spec: &smartfmt::FormatSpec<'_>,
) -> Result<Option<String>, FormatError> {
    let once = cx.format(spec.template, value)?;
    Ok(Some(format!("{once}{once}")))
}

#[test]
fn index_reaches_nested_branches() {
    let mut formatter = Formatter::default();
    formatter.register(vec![Extension::contextual(["twice"], twice).unwrap()]);
    let text = formatter
        .format("{0:{:twice:{index}}|; }", &[Value::from(vec!["x", "y"])])
        .unwrap();
    assert_eq!(text, "00; 11");
}

// =============================================================================
// Declining
// =============================================================================

#[test]
fn strings_are_not_lists() {
    assert_eq!(fmt("{0:{}|, }", "abc").unwrap(), "abc");
}

#[test]
fn single_branch_declines() {
    assert_eq!(fmt("{0:list:{}}", vec![1, 2]).unwrap(), "1, 2");
}
