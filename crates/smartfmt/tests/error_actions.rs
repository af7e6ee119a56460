//! Tests for the per-placeholder error actions.

use std::collections::BTreeMap;

use smartfmt::{ErrorAction, FormatError, Formatter, Value, args};

fn formatter(action: ErrorAction) -> Formatter {
    Formatter::builder().error_action(action).build()
}

#[test]
fn strict_aborts() {
    let err = formatter(ErrorAction::Strict)
        .format("a{missing}b", &[])
        .unwrap_err();
    assert!(matches!(err, FormatError::Lookup { key, .. } if key == "missing"));
}

#[test]
fn ignore_drops_the_placeholder() {
    let text = formatter(ErrorAction::Ignore)
        .format("a{missing}b", &[])
        .unwrap();
    assert_eq!(text, "ab");
}

#[test]
fn errmsg_substitutes_the_message() {
    let text = formatter(ErrorAction::ErrorMessage)
        .format("a{missing}b", &[])
        .unwrap();
    assert_eq!(text, "aargument not found: 'missing'b");
}

#[test]
fn skip_keeps_the_source() {
    let text = formatter(ErrorAction::Skip)
        .format("a{missing}b", &[])
        .unwrap();
    assert_eq!(text, "a{missing}b");
}

#[test]
fn skip_keeps_conversion_and_spec_verbatim() {
    let text = formatter(ErrorAction::Skip)
        .format("<{0!r:choose(1|2):a|b|c|d}>", &[Value::from(1)])
        .unwrap();
    assert_eq!(text, "<{0!r:choose(1|2):a|b|c|d}>");
}

#[test]
fn only_the_failing_placeholder_is_replaced() {
    let text = formatter(ErrorAction::Ignore)
        .format("{0:d} {1:d} {2:d}", &[Value::from(1), Value::from(2.5), Value::from(3)])
        .unwrap();
    assert_eq!(text, "1  3");
}

#[test]
fn syntax_errors_propagate_under_every_action() {
    for action in ErrorAction::ALL {
        let err = formatter(action).format("a{0", &[Value::from(1)]).unwrap_err();
        assert!(matches!(err, FormatError::Parse(_)), "{action}: {err}");
    }
}

#[test]
fn errors_inside_branches_use_the_same_action() {
    let text = formatter(ErrorAction::ErrorMessage)
        .format("{0:one {missing}|many}", &[Value::from(1)])
        .unwrap();
    assert_eq!(text, "one argument not found: 'missing'");
}

#[test]
fn unknown_conversion() {
    let err = formatter(ErrorAction::Strict)
        .format("{0!x}", &[Value::from(1)])
        .unwrap_err();
    assert_eq!(err, FormatError::Conversion { conversion: 'x' });
}

#[test]
fn conversions_apply_before_the_spec() {
    let formatter = formatter(ErrorAction::Strict);
    let value = [Value::from("hi")];
    assert_eq!(formatter.format("{0!r}", &value).unwrap(), "\"hi\"");
    assert_eq!(formatter.format("{0!s:>4}", &value).unwrap(), "  hi");
}

#[test]
fn conditional_is_retired() {
    let err = formatter(ErrorAction::Strict)
        .format("{0:cond:a|b}", &[Value::from(true)])
        .unwrap_err();
    assert!(matches!(err, FormatError::NotImplemented { .. }));
}

#[test]
fn lookup_suggests_close_names() {
    let err = formatter(ErrorAction::Strict)
        .format_args("{nmae}", &args!["name" => "Ann", "count" => 2])
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"argument not found: 'nmae'; did you mean: name?");
}

#[test]
fn missing_map_key_suggests_keys() {
    let person = Value::from(BTreeMap::from([("name".to_string(), "Ann")]));
    let err = formatter(ErrorAction::Strict)
        .format("{0.nam}", &[person])
        .unwrap_err();
    assert_eq!(
        err,
        FormatError::Lookup {
            key: "nam".to_string(),
            suggestions: vec!["name".to_string()],
        }
    );
}

#[test]
fn action_names_round_trip() {
    for action in ErrorAction::ALL {
        assert_eq!(action.name().parse::<ErrorAction>().unwrap(), action);
    }
    assert_eq!(
        "error_message".parse::<ErrorAction>().unwrap(),
        ErrorAction::ErrorMessage
    );
    let err = "loud".parse::<ErrorAction>().unwrap_err();
    assert_eq!(err.name, "loud");
}

#[test]
fn action_serde_names() {
    assert_eq!(
        serde_json::to_string(&ErrorAction::ErrorMessage).unwrap(),
        "\"errmsg\""
    );
    let action: ErrorAction = serde_json::from_str("\"skip\"").unwrap();
    assert_eq!(action, ErrorAction::Skip);
    assert!(serde_json::from_str::<ErrorAction>("\"Skip\"").is_err());
}

#[test]
fn oversized_layouts_are_placeholder_errors() {
    let formatter = formatter(ErrorAction::Ignore);
    for (template, value) in [
        ("[{0:18446744073709551615d}]", Value::from(1)),
        ("[{0:d18446744073709551615}]", Value::from(1)),
        ("[{0:.18446744073709551615%}]", Value::from(0.5)),
        ("[{0:n99999999}]", Value::from(0.5)),
        ("[{0:>18446744073709551615}]", Value::from("text")),
    ] {
        assert_eq!(formatter.format(template, &[value]).unwrap(), "[]", "{template}");
    }
}

#[test]
fn oversized_width_message() {
    let err = formatter(ErrorAction::Strict)
        .format("{0:100000d}", &[Value::from(1)])
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"width 100000 is too large, the limit is 65536");
}

#[test]
fn large_but_allowed_width() {
    let text = formatter(ErrorAction::Strict)
        .format("{0:65536d}", &[Value::from(7)])
        .unwrap();
    assert_eq!(text.len(), 65536);
    assert!(text.ends_with('7'));
}
