//! # Literal Conversion
//!
//! Leaf converters for identifiers, literals and comments, plus the pure
//! text helpers behind them (numeric parsing, escape cooking).

use super::Dispatcher;
use crate::ast::{
    Comment, CommentKind, Identifier, Literal, LiteralValue, PrivateIdentifier, RegExpLiteral,
};
use crate::error::ConvertResult;
use ecma_cst::{CstNode, NodeKind};

// =============================================================================
// NUMBERS
// =============================================================================

/// Value of a numeric literal.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericValue {
    Number(f64),
    /// Source digits of a bigint, without `_` or the `n` suffix.
    BigInt(String),
}

/// Parses the raw text of a numeric literal.
///
/// Handles decimal with fraction/exponent, `0x`/`0o`/`0b` prefixes,
/// legacy octal (`017`), `_` separators and the bigint `n` suffix.
///
/// ## Example
///
/// ```rust
/// use ecma_ast::convert::{parse_numeric, NumericValue};
///
/// assert_eq!(parse_numeric("1_000"), Some(NumericValue::Number(1000.0)));
/// assert_eq!(parse_numeric("0x1F"), Some(NumericValue::Number(31.0)));
/// assert_eq!(parse_numeric("017"), Some(NumericValue::Number(15.0)));
/// assert_eq!(parse_numeric("10n"), Some(NumericValue::BigInt("10".into())));
/// assert_eq!(parse_numeric("abc"), None);
/// ```
pub fn parse_numeric(raw: &str) -> Option<NumericValue> {
    let digits: String = raw.chars().filter(|&c| c != '_').collect();
    if let Some(bigint) = digits.strip_suffix('n') {
        return Some(NumericValue::BigInt(bigint.to_string()));
    }
    let radix_body = |prefixes: [&str; 2]| {
        prefixes
            .iter()
            .find_map(|p| digits.strip_prefix(p))
    };
    let value = if let Some(body) = radix_body(["0x", "0X"]) {
        parse_radix(body, 16)?
    } else if let Some(body) = radix_body(["0o", "0O"]) {
        parse_radix(body, 8)?
    } else if let Some(body) = radix_body(["0b", "0B"]) {
        parse_radix(body, 2)?
    } else if is_legacy_octal(&digits) {
        parse_radix(&digits[1..], 8)?
    } else {
        if !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
            return None;
        }
        digits.parse::<f64>().ok()?
    };
    Some(NumericValue::Number(value))
}

fn is_legacy_octal(digits: &str) -> bool {
    digits.len() > 1
        && digits.starts_with('0')
        && digits.bytes().all(|b| (b'0'..=b'7').contains(&b))
}

fn parse_radix(body: &str, radix: u32) -> Option<f64> {
    if body.is_empty() {
        return None;
    }
    body.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

// =============================================================================
// ESCAPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum EscapeMode {
    String,
    Template,
}

/// Cooks the body of a string literal (quotes already removed).
///
/// ## Returns
///
/// `None` if an escape sequence is malformed.
///
/// ## Example
///
/// ```rust
/// use ecma_ast::convert::cook_string;
///
/// assert_eq!(cook_string(r"a\nb").as_deref(), Some("a\nb"));
/// assert_eq!(cook_string(r"\x41B\u{43}").as_deref(), Some("ABC"));
/// assert_eq!(cook_string(r"\101").as_deref(), Some("A"));
/// assert_eq!(cook_string(r"\x4"), None);
/// assert_eq!(cook_string(r"\x+1"), None);
/// ```
pub fn cook_string(body: &str) -> Option<String> {
    cook(body, EscapeMode::String)
}

/// Cooks a template chunk; legacy octal escapes make it uncookable.
pub(crate) fn cook_template(raw: &str) -> Option<String> {
    cook(raw, EscapeMode::Template)
}

fn cook(body: &str, mode: EscapeMode) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escaped = chars.next()?;
        match escaped {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            'x' => {
                let hex: String = (0..2).filter_map(|_| chars.next()).collect();
                out.push(hex_char(&hex, 2)?);
            }
            'u' => {
                let unit = read_unicode_escape(&mut chars)?;
                push_code_unit(&mut out, unit, &mut chars)?;
            }
            '0' if !chars.peek().is_some_and(|c| c.is_ascii_digit()) => out.push('\0'),
            '0'..='7' => {
                if mode == EscapeMode::Template {
                    return None;
                }
                out.push(legacy_octal(escaped, &mut chars));
            }
            '8' | '9' => {
                if mode == EscapeMode::Template {
                    return None;
                }
                out.push(escaped);
            }
            other => out.push(other),
        }
    }
    Some(out)
}

fn hex_char(hex: &str, len: usize) -> Option<char> {
    if hex.len() != len || !is_hex_digits(hex) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

/// Reads `XXXX` or `{X...}` after `\u`, returning the code point or unit.
fn read_unicode_escape(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<u32> {
    if chars.peek() == Some(&'{') {
        chars.next();
        let mut hex = String::new();
        loop {
            match chars.next()? {
                '}' => break,
                c => hex.push(c),
            }
        }
        if !is_hex_digits(&hex) {
            return None;
        }
        let value = u32::from_str_radix(&hex, 16).ok()?;
        return (value <= 0x10FFFF).then_some(value);
    }
    let hex: String = (0..4).filter_map(|_| chars.next()).collect();
    if hex.len() != 4 || !is_hex_digits(&hex) {
        return None;
    }
    u32::from_str_radix(&hex, 16).ok()
}

/// `from_str_radix` also takes a leading sign, which escapes never allow.
fn is_hex_digits(hex: &str) -> bool {
    !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Pushes a code point, pairing a high surrogate with a following
/// `\uDC00`-range escape. Unpaired surrogates become U+FFFD.
fn push_code_unit(
    out: &mut String,
    unit: u32,
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Option<()> {
    if (0xD800..0xDC00).contains(&unit) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            if let Some(low) = read_unicode_escape(&mut lookahead) {
                if (0xDC00..0xE000).contains(&low) {
                    let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                    *chars = lookahead;
                    out.push(char::from_u32(combined)?);
                    return Some(());
                }
            }
        }
    }
    out.push(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER));
    Some(())
}

fn legacy_octal(first: char, chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> char {
    let max_len = if first <= '3' { 3 } else { 2 };
    let mut value = first.to_digit(8).unwrap_or(0);
    for _ in 1..max_len {
        match chars.peek().and_then(|c| c.to_digit(8)) {
            Some(d) => {
                value = value * 8 + d;
                chars.next();
            }
            None => break,
        }
    }
    char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn strip_quotes(raw: &str) -> Option<&str> {
    let quote = raw.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    raw.strip_prefix(quote)?.strip_suffix(quote)
}

// =============================================================================
// CONVERTERS
// =============================================================================

impl Dispatcher {
    /// Converts anything that names an identifier: `IdentifierReference`,
    /// `BindingIdentifier`, `LabelIdentifier`, or a bare name terminal.
    pub(crate) fn identifier(&self, node: &CstNode) -> ConvertResult<Identifier> {
        let text = node
            .token_text()
            .ok_or_else(|| self.malformed(node, "expected a single identifier token"))?;
        let name = if text.contains('\\') {
            cook_string(text).ok_or_else(|| self.malformed(node, "invalid identifier escape"))?
        } else {
            text.to_string()
        };
        Ok(Identifier::new(name, node.loc))
    }

    pub(crate) fn private_identifier(&self, node: &CstNode) -> ConvertResult<PrivateIdentifier> {
        let text = node.token_text().unwrap_or_default();
        let name = text
            .strip_prefix('#')
            .ok_or_else(|| self.malformed(node, "private name must start with `#`"))?;
        Ok(PrivateIdentifier {
            name: name.to_string(),
            loc: node.loc,
        })
    }

    /// Converts `Literal`, its alternatives, or a literal terminal.
    pub(crate) fn literal(&self, node: &CstNode) -> ConvertResult<Literal> {
        if !node.is_terminal() {
            let only = self.require(node.only_child(), node, "literal token")?;
            return self.literal(only);
        }
        let raw = node.text_or_empty();
        match node.kind {
            NodeKind::NumericLiteral => self.numeric_literal(node, raw),
            NodeKind::StringLiteral => self.string_literal(node, raw),
            NodeKind::RegularExpressionLiteral => self.regex_literal(node, raw),
            _ => match raw {
                "null" => Ok(self.plain_literal(LiteralValue::Null, raw, node)),
                "true" => Ok(self.plain_literal(LiteralValue::Boolean(true), raw, node)),
                "false" => Ok(self.plain_literal(LiteralValue::Boolean(false), raw, node)),
                _ if raw.starts_with(&['"', '\''][..]) => self.string_literal(node, raw),
                _ if raw.starts_with(|c: char| c.is_ascii_digit() || c == '.') => {
                    self.numeric_literal(node, raw)
                }
                _ => Err(self.malformed(node, "unrecognised literal")),
            },
        }
    }

    fn plain_literal(&self, value: LiteralValue, raw: &str, node: &CstNode) -> Literal {
        Literal {
            value,
            raw: raw.to_string(),
            regex: None,
            bigint: None,
            loc: node.loc,
        }
    }

    fn numeric_literal(&self, node: &CstNode, raw: &str) -> ConvertResult<Literal> {
        match parse_numeric(raw) {
            Some(NumericValue::Number(n)) => Ok(self.plain_literal(LiteralValue::Number(n), raw, node)),
            Some(NumericValue::BigInt(digits)) => Ok(Literal {
                bigint: Some(digits),
                ..self.plain_literal(LiteralValue::Null, raw, node)
            }),
            None => Err(self.malformed(node, "invalid numeric literal")),
        }
    }

    pub(crate) fn string_literal(&self, node: &CstNode, raw: &str) -> ConvertResult<Literal> {
        let body = strip_quotes(raw).ok_or_else(|| self.malformed(node, "unterminated string"))?;
        let value = cook_string(body).ok_or_else(|| self.malformed(node, "invalid escape sequence"))?;
        Ok(self.plain_literal(LiteralValue::String(value), raw, node))
    }

    fn regex_literal(&self, node: &CstNode, raw: &str) -> ConvertResult<Literal> {
        let (pattern, flags) = raw
            .strip_prefix('/')
            .and_then(|rest| rest.rsplit_once('/'))
            .ok_or_else(|| self.malformed(node, "regular expression must be `/pattern/flags`"))?;
        Ok(Literal {
            regex: Some(RegExpLiteral {
                pattern: pattern.to_string(),
                flags: flags.to_string(),
            }),
            ..self.plain_literal(LiteralValue::Null, raw, node)
        })
    }

    /// Converts a hoisted comment terminal.
    pub(crate) fn comment(&self, node: &CstNode) -> ConvertResult<Comment> {
        let raw = node.text_or_empty();
        let (kind, value) = if let Some(line) = raw.strip_prefix("//") {
            (CommentKind::Line, line)
        } else if let Some(block) = raw.strip_prefix("/*").and_then(|b| b.strip_suffix("*/")) {
            (CommentKind::Block, block)
        } else {
            return Err(self.malformed(node, "comment must start with `//` or `/*`"));
        };
        Ok(Comment {
            kind,
            value: value.to_string(),
            loc: node.loc,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecma_cst::CstBuilder;

    #[test]
    fn test_decimal_forms() {
        assert_eq!(parse_numeric("1.5e3"), Some(NumericValue::Number(1500.0)));
        assert_eq!(parse_numeric(".5"), Some(NumericValue::Number(0.5)));
        assert_eq!(parse_numeric("5."), Some(NumericValue::Number(5.0)));
        assert_eq!(parse_numeric("0"), Some(NumericValue::Number(0.0)));
        assert_eq!(parse_numeric("089"), Some(NumericValue::Number(89.0)));
    }

    #[test]
    fn test_radix_forms() {
        assert_eq!(parse_numeric("0b1010"), Some(NumericValue::Number(10.0)));
        assert_eq!(parse_numeric("0O17"), Some(NumericValue::Number(15.0)));
        assert_eq!(parse_numeric("0xff_ff"), Some(NumericValue::Number(65535.0)));
        assert_eq!(parse_numeric("0x"), None);
        assert_eq!(parse_numeric("0b12"), None);
    }

    #[test]
    fn test_bigint_keeps_source_digits() {
        assert_eq!(
            parse_numeric("0x1_0n"),
            Some(NumericValue::BigInt("0x10".to_string()))
        );
    }

    #[test]
    fn test_escapes() {
        assert_eq!(cook_string(r"\'\\").as_deref(), Some("'\\"));
        assert_eq!(cook_string("a\\\nb").as_deref(), Some("ab"));
        assert_eq!(cook_string(r"\0").as_deref(), Some("\0"));
        assert_eq!(cook_string(r"😀").as_deref(), Some("😀"));
        assert_eq!(cook_string(r"\uD83D").as_deref(), Some("\u{FFFD}"));
        assert_eq!(cook_string(r"\u{110000}"), None);
        assert_eq!(cook_string(r"\8").as_deref(), Some("8"));
    }

    #[test]
    fn test_signed_hex_escapes_are_rejected() {
        assert_eq!(cook_string(r"\x+1"), None);
        assert_eq!(cook_string(r"\x-1"), None);
        assert_eq!(cook_string(r"\u+041"), None);
        assert_eq!(cook_string(r"\u{+41}"), None);
        assert_eq!(cook_string(r"\u{}"), None);
        assert_eq!(cook_template(r"\x+1"), None);
        assert_eq!(cook_template(r"\u{41}").as_deref(), Some("A"));
    }

    #[test]
    fn test_template_cooking_rejects_octal() {
        assert_eq!(cook_template(r"\01"), None);
        assert_eq!(cook_template(r"\0").as_deref(), Some("\0"));
        assert_eq!(cook_template(r"a${").as_deref(), Some("a${"));
    }

    #[test]
    fn test_literal_nodes() {
        let b = CstBuilder::new();
        let d = Dispatcher::default();

        let lit = d.literal(&b.rule(NodeKind::Literal, vec![b.string("'hi'")])).unwrap();
        assert_eq!(lit.value, LiteralValue::String("hi".to_string()));
        assert_eq!(lit.raw, "'hi'");

        let null = b.rule(NodeKind::NullLiteral, vec![b.tok("null")]);
        assert_eq!(d.literal(&null).unwrap().value, LiteralValue::Null);

        let regex = b.term(NodeKind::RegularExpressionLiteral, "/a\\/b/gi");
        let lit = d.literal(&regex).unwrap();
        let re = lit.regex.unwrap();
        assert_eq!(re.pattern, "a\\/b");
        assert_eq!(re.flags, "gi");
    }

    #[test]
    fn test_identifier_escapes_are_cooked() {
        let b = CstBuilder::new();
        let id = Dispatcher::default().identifier(&b.ident(r"a\u0062")).unwrap();
        assert_eq!(id.name, "ab");
    }

    #[test]
    fn test_comments() {
        let b = CstBuilder::new();
        let d = Dispatcher::default();
        let line = d.comment(&b.comment("// note")).unwrap();
        assert_eq!(line.kind, CommentKind::Line);
        assert_eq!(line.value, " note");
        let block = d.comment(&b.comment("/*x*/")).unwrap();
        assert_eq!(block.kind, CommentKind::Block);
        assert_eq!(block.value, "x");
    }
}
