//! Tests for building formatters from settings and sharing them.

use std::thread;

use smartfmt::{ErrorAction, FormatError, Formatter, FormatterConfig, Value};

#[test]
fn default_config() {
    let config = FormatterConfig::default();
    assert_eq!(config.locale, "en");
    assert_eq!(config.errors, ErrorAction::Strict);
    assert!(config.builtin_extensions);

    let formatter = Formatter::from_config(&config).unwrap();
    assert_eq!(formatter.locale().to_string(), "en");
    assert_eq!(
        formatter.format("{0:one|many}", &[Value::from(2)]).unwrap(),
        "many"
    );
}

#[test]
fn config_from_json() {
    let config: FormatterConfig =
        serde_json::from_str(r#"{ "locale": "de_CH", "errors": "ignore" }"#).unwrap();
    let formatter = Formatter::from_config(&config).unwrap();
    assert_eq!(formatter.locale().region(), Some("CH"));
    assert_eq!(formatter.error_action(), ErrorAction::Ignore);
    assert_eq!(
        formatter.format("{0:,.2f}", &[Value::from(1234.5)]).unwrap(),
        "1’234.50"
    );
}

#[test]
fn unknown_fields_are_rejected() {
    let result = serde_json::from_str::<FormatterConfig>(r#"{ "colour": "red" }"#);
    assert!(result.is_err());
}

#[test]
fn bad_locale() {
    let config = FormatterConfig {
        locale: "!!".to_string(),
        ..FormatterConfig::default()
    };
    let Err(err) = Formatter::from_config(&config) else {
        panic!("expected a locale error");
    };
    assert_eq!(
        err,
        FormatError::Locale {
            locale: "!!".to_string()
        }
    );
}

#[test]
fn without_builtin_extensions() {
    let config = FormatterConfig {
        builtin_extensions: false,
        ..FormatterConfig::default()
    };
    let formatter = Formatter::from_config(&config).unwrap();
    assert_eq!(formatter.format("{0:a|b}", &[Value::from(1)]).unwrap(), "1");
}

#[test]
fn depth_limit_from_config() {
    let config = FormatterConfig {
        max_depth: 0,
        ..FormatterConfig::default()
    };
    let formatter = Formatter::from_config(&config).unwrap();
    let value = [Value::from(1)];
    assert_eq!(formatter.format("{0:n1}", &value).unwrap(), "1.0");
    assert_eq!(
        formatter.format("{0:a|b}", &value).unwrap_err(),
        FormatError::MaxDepthExceeded
    );
}

#[test]
fn formatter_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Formatter>();

    let formatter = Formatter::default();
    let results: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let formatter = &formatter;
                scope.spawn(move || {
                    formatter
                        .format("{0} {0:item|items}", &[Value::from(n)])
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, vec!["0 items", "1 item", "2 items", "3 items"]);
}
