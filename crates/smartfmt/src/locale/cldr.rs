//! Compiled CLDR number data for the built-in locales.

pub(crate) struct NumberData {
    pub tag: &'static str,
    pub decimal_pattern: &'static str,
    pub percent_pattern: &'static str,
    pub currency_pattern: &'static str,
    pub group: &'static str,
    pub decimal: &'static str,
    pub minus: &'static str,
    pub currency_symbol: &'static str,
    pub currency_digits: usize,
    pub min_grouping: usize,
}

const ENGLISH: NumberData = NumberData {
    tag: "en",
    decimal_pattern: "#,##0.###",
    percent_pattern: "#,##0%",
    currency_pattern: "¤#,##0.00",
    group: ",",
    decimal: ".",
    minus: "-",
    currency_symbol: "$",
    currency_digits: 2,
    min_grouping: 1,
};

const EURO_SUFFIXED: NumberData = NumberData {
    tag: "",
    decimal_pattern: "#,##0.###",
    percent_pattern: "#,##0\u{a0}%",
    currency_pattern: "#,##0.00\u{a0}¤",
    group: ".",
    decimal: ",",
    minus: "-",
    currency_symbol: "€",
    currency_digits: 2,
    min_grouping: 1,
};

pub(crate) static NUMBER_DATA: &[NumberData] = &[
    ENGLISH,
    NumberData {
        tag: "en-GB",
        currency_symbol: "£",
        ..ENGLISH
    },
    NumberData {
        tag: "en-IN",
        decimal_pattern: "#,##,##0.###",
        percent_pattern: "#,##,##0%",
        currency_pattern: "¤#,##,##0.00",
        currency_symbol: "₹",
        ..ENGLISH
    },
    NumberData {
        tag: "de",
        ..EURO_SUFFIXED
    },
    NumberData {
        tag: "de-CH",
        percent_pattern: "#,##0%",
        currency_pattern: "¤\u{a0}#,##0.00",
        group: "\u{2019}",
        decimal: ".",
        currency_symbol: "CHF",
        ..EURO_SUFFIXED
    },
    NumberData {
        tag: "es",
        min_grouping: 2,
        ..EURO_SUFFIXED
    },
    NumberData {
        tag: "fr",
        percent_pattern: "#,##0\u{202f}%",
        group: "\u{202f}",
        ..EURO_SUFFIXED
    },
    NumberData {
        tag: "hi",
        decimal_pattern: "#,##,##0.###",
        percent_pattern: "#,##,##0%",
        currency_pattern: "¤#,##,##0.00",
        currency_symbol: "₹",
        ..ENGLISH
    },
    NumberData {
        tag: "it",
        percent_pattern: "#,##0%",
        ..EURO_SUFFIXED
    },
    NumberData {
        tag: "ja",
        currency_symbol: "￥",
        currency_digits: 0,
        ..ENGLISH
    },
    NumberData {
        tag: "ko",
        currency_symbol: "₩",
        currency_digits: 0,
        ..ENGLISH
    },
    NumberData {
        tag: "nl",
        percent_pattern: "#,##0%",
        currency_pattern: "¤\u{a0}#,##0.00",
        ..EURO_SUFFIXED
    },
    NumberData {
        tag: "pl",
        percent_pattern: "#,##0%",
        group: "\u{a0}",
        currency_symbol: "zł",
        min_grouping: 2,
        ..EURO_SUFFIXED
    },
    NumberData {
        tag: "pt",
        percent_pattern: "#,##0%",
        currency_pattern: "¤\u{a0}#,##0.00",
        currency_symbol: "R$",
        ..EURO_SUFFIXED
    },
    NumberData {
        tag: "pt-PT",
        percent_pattern: "#,##0%",
        group: "\u{a0}",
        min_grouping: 2,
        ..EURO_SUFFIXED
    },
    NumberData {
        tag: "ru",
        group: "\u{a0}",
        currency_symbol: "₽",
        ..EURO_SUFFIXED
    },
    NumberData {
        tag: "sv",
        group: "\u{a0}",
        minus: "\u{2212}",
        currency_symbol: "kr",
        ..EURO_SUFFIXED
    },
    NumberData {
        tag: "tr",
        percent_pattern: "%#,##0",
        currency_pattern: "¤#,##0.00",
        currency_symbol: "₺",
        ..EURO_SUFFIXED
    },
    NumberData {
        tag: "uk",
        percent_pattern: "#,##0%",
        group: "\u{a0}",
        currency_symbol: "₴",
        ..EURO_SUFFIXED
    },
    NumberData {
        tag: "zh",
        currency_symbol: "¥",
        ..ENGLISH
    },
];

/// Find the entry for `language[-region]`, then `language`, then English.
pub(crate) fn lookup(language: &str, region: Option<&str>) -> &'static NumberData {
    let exact = region.and_then(|region| {
        NUMBER_DATA.iter().find(|entry| {
            entry
                .tag
                .split_once('-')
                .is_some_and(|(lang, reg)| lang == language && reg == region)
        })
    });
    exact
        .or_else(|| NUMBER_DATA.iter().find(|entry| entry.tag == language))
        .unwrap_or(&NUMBER_DATA[0])
}
