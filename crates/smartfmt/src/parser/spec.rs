//! Format-spec grammars.
//!
//! Two independent grammars read the raw text after a placeholder's `:`:
//!
//! - the extension form `name[(option)]:template`, split by
//!   [`parse_format_spec`], which never fails;
//! - the numeric layout form `[[fill]align][sign][#][0][width][,][.prec][type]`,
//!   parsed by [`NumericSpec::parse`], which yields `None` on any mismatch.

use winnow::ascii::digit1;
use winnow::combinator::{alt, eof, opt, preceded, terminated};
use winnow::prelude::*;
use winnow::token::{any, one_of};

/// A format-spec split into its extension parts.
///
/// Borrowed from the raw spec text; built once per placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec<'a> {
    /// Extension name, possibly empty.
    pub name: &'a str,
    /// Parenthesized option after the name, if any.
    pub option: Option<&'a str>,
    /// Everything after the separating `:` (or the whole spec).
    pub template: &'a str,
}

impl<'a> FormatSpec<'a> {
    /// A spec with no extension name.
    pub fn unnamed(template: &'a str) -> Self {
        Self {
            name: "",
            option: None,
            template,
        }
    }
}

/// Split a raw format-spec into `(name, option, template)`.
///
/// The name is the longest leading run of ASCII letters and underscores. An
/// optional `(option)` may follow, and a `:` must separate it from the
/// template. Any other shape degrades to an unnamed spec.
///
/// # Example
///
/// ```
/// use smartfmt::parser::parse_format_spec;
///
/// let spec = parse_format_spec("plural(fr):un|des");
/// assert_eq!(spec.name, "plural");
/// assert_eq!(spec.option, Some("fr"));
/// assert_eq!(spec.template, "un|des");
///
/// let spec = parse_format_spec(",.2f");
/// assert_eq!(spec.name, "");
/// assert_eq!(spec.template, ",.2f");
/// ```
pub fn parse_format_spec(raw: &str) -> FormatSpec<'_> {
    let name_len = raw
        .bytes()
        .take_while(|b| b.is_ascii_alphabetic() || *b == b'_')
        .count();
    if name_len == 0 {
        return FormatSpec::unnamed(raw);
    }
    let (name, rest) = raw.split_at(name_len);

    if let Some(template) = rest.strip_prefix(':') {
        return FormatSpec {
            name,
            option: None,
            template,
        };
    }

    // The option runs to the last `):` so it may itself contain parentheses.
    if let Some(inner) = rest.strip_prefix('(')
        && let Some(close) = inner.rfind("):")
    {
        let option = &inner[..close];
        if !option.contains('\n') {
            return FormatSpec {
                name,
                option: Some(option),
                template: &inner[close + 2..],
            };
        }
    }

    FormatSpec::unnamed(raw)
}

/// Check that an extension alias matches `[A-Za-z_]*`.
pub fn is_valid_name(name: &str) -> bool {
    name.bytes().all(|b| b.is_ascii_alphabetic() || b == b'_')
}

/// Alignment of a padded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `<`
    Left,
    /// `>`
    Right,
    /// `^`
    Center,
    /// `=`: padding goes between the sign and the digits.
    AfterSign,
}

/// Sign display of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// `-`: only negative numbers carry a sign.
    Negative,
    /// `+`: both signs are shown.
    Always,
    /// ` `: positive numbers get a leading space.
    Space,
}

/// The locale-aware presentation types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    /// `d`: integer.
    Decimal,
    /// `f` or `F`: fixed point.
    Fixed,
    /// `%`: percentage.
    Percent,
}

/// A parsed numeric layout spec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericSpec {
    pub fill: Option<char>,
    pub align: Option<Align>,
    pub sign: Option<Sign>,
    /// `#`; accepted and ignored.
    pub alternate: bool,
    pub zero: bool,
    pub width: Option<usize>,
    pub grouping: bool,
    pub precision: Option<usize>,
    pub kind: Option<NumericKind>,
}

impl NumericSpec {
    /// Parse the whole of `raw` as a numeric layout spec.
    ///
    /// # Example
    ///
    /// ```
    /// use smartfmt::parser::{Align, NumericKind, NumericSpec};
    ///
    /// let spec = NumericSpec::parse("_^20,.5f").unwrap();
    /// assert_eq!(spec.fill, Some('_'));
    /// assert_eq!(spec.align, Some(Align::Center));
    /// assert_eq!(spec.width, Some(20));
    /// assert!(spec.grouping);
    /// assert_eq!(spec.precision, Some(5));
    /// assert_eq!(spec.kind, Some(NumericKind::Fixed));
    ///
    /// assert!(NumericSpec::parse("n2").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<NumericSpec> {
        let mut input = raw;
        numeric_spec(&mut input).ok()
    }

    /// True when the spec asks for locale-aware numeric rendering.
    pub fn is_numeric(&self) -> bool {
        self.kind.is_some() || self.grouping || self.precision.is_some()
    }

    /// True when the spec sets any fill, alignment, zero padding or width.
    pub fn has_layout(&self) -> bool {
        self.fill.is_some() || self.align.is_some() || self.zero || self.width.is_some()
    }
}

fn numeric_spec(input: &mut &str) -> ModalResult<NumericSpec> {
    let fill_align = opt(fill_align).parse_next(input)?;
    let sign = opt(sign).parse_next(input)?;
    let alternate = opt('#').parse_next(input)?;
    let zero = opt('0').parse_next(input)?;
    let width = opt(number).parse_next(input)?;
    let grouping = opt(',').parse_next(input)?;
    let precision = opt(preceded('.', number)).parse_next(input)?;
    let kind = terminated(opt(kind), eof).parse_next(input)?;
    let (fill, align) = fill_align.map_or((None, None), |(fill, align)| (fill, Some(align)));
    Ok(NumericSpec {
        fill,
        align,
        sign,
        alternate: alternate.is_some(),
        zero: zero.is_some(),
        width,
        grouping: grouping.is_some(),
        precision,
        kind,
    })
}

/// Parse `[fill]align`; a fill is only recognized when an align follows it.
fn fill_align(input: &mut &str) -> ModalResult<(Option<char>, Align)> {
    alt((
        (any, align).map(|(fill, align)| (Some(fill), align)),
        align.map(|align| (None, align)),
    ))
    .parse_next(input)
}

fn align(input: &mut &str) -> ModalResult<Align> {
    one_of(['<', '>', '^', '='])
        .map(|c: char| match c {
            '<' => Align::Left,
            '^' => Align::Center,
            '=' => Align::AfterSign,
            _ => Align::Right,
        })
        .parse_next(input)
}

fn sign(input: &mut &str) -> ModalResult<Sign> {
    one_of(['+', '-', ' '])
        .map(|c: char| match c {
            '+' => Sign::Always,
            ' ' => Sign::Space,
            _ => Sign::Negative,
        })
        .parse_next(input)
}

fn kind(input: &mut &str) -> ModalResult<NumericKind> {
    one_of(['d', 'f', 'F', '%'])
        .map(|c: char| match c {
            'd' => NumericKind::Decimal,
            '%' => NumericKind::Percent,
            _ => NumericKind::Fixed,
        })
        .parse_next(input)
}

fn number(input: &mut &str) -> ModalResult<usize> {
    digit1.try_map(str::parse).parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_runs_to_last_separator() {
        let spec = parse_format_spec("choose(a):x(b):y");
        assert_eq!(spec.name, "choose");
        assert_eq!(spec.option, Some("a):x(b"));
        assert_eq!(spec.template, "y");
    }

    #[test]
    fn name_without_separator_is_template() {
        let spec = parse_format_spec("plural");
        assert_eq!(spec, FormatSpec::unnamed("plural"));
        let spec = parse_format_spec("c(1|2)");
        assert_eq!(spec, FormatSpec::unnamed("c(1|2)"));
    }

    #[test]
    fn zero_flag_and_width_split() {
        let spec = NumericSpec::parse("020%").unwrap();
        assert!(spec.zero);
        assert_eq!(spec.width, Some(20));
        assert_eq!(spec.kind, Some(NumericKind::Percent));

        let spec = NumericSpec::parse("0").unwrap();
        assert!(spec.zero);
        assert_eq!(spec.width, None);
    }

    #[test]
    fn align_without_fill() {
        let spec = NumericSpec::parse("^020,.5f").unwrap();
        assert_eq!(spec.fill, None);
        assert_eq!(spec.align, Some(Align::Center));
        assert!(spec.zero);
    }

    #[test]
    fn trailing_garbage_rejected() {
        assert!(NumericSpec::parse(",.2fx").is_none());
        assert!(NumericSpec::parse(".f").is_none());
        assert!(NumericSpec::parse("\u{0}").is_none());
    }
}
