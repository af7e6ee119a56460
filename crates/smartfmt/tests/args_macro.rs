//! Tests for the `args!` macro.

use smartfmt::{Args, Formatter, Value, args};

#[test]
fn empty() {
    assert_eq!(args![], Args::new());
}

#[test]
fn positional_only() {
    let args = args![1, 2.5, "three"];
    assert_eq!(args.len(), 3);
    assert_eq!(args.positional(1), Some(&Value::Float(2.5)));
    assert!(args.names().is_empty());
}

#[test]
fn named_only() {
    let args = args!["b" => 2, "a" => "one",];
    assert_eq!(args.len(), 0);
    assert!(!args.is_empty());
    assert_eq!(args.names(), vec!["a", "b"]);
}

#[test]
fn mixed() {
    let args = args![vec!["x", "y"]; "count" => 2];
    let text = Formatter::default()
        .format_args("{count} {count:item|items}: {0:{}|, }", &args)
        .unwrap();
    assert_eq!(text, "2 items: x, y");
}

#[test]
fn later_name_replaces_earlier() {
    let args = args!["n" => 1, "n" => 2];
    assert_eq!(args.get("n"), Some(&Value::Int(2)));
}
