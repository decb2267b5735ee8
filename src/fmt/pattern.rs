//! The date/time pattern interpreter.
//!
//! Patterns come from provider data as CLDR-style field-symbol strings;
//! this module tokenizes them, adapts them to the requested field set
//! and time precision, and renders field values through a locale's
//! symbol tables.

use alloc::string::String;
use alloc::vec::Vec;

use crate::options::{Alignment, TimePrecision};
use crate::provider::DateTimeNames;

/// One parsed unit of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// Literal text, quoting already resolved.
    Literal(String),
    /// A field symbol and its repeat count.
    Field(char, u8),
}

/// Splits a pattern string into tokens, resolving `'…'` quoting.
pub(crate) fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            // A doubled quote is a literal apostrophe; anything else
            // starts a quoted span.
            if chars.peek() == Some(&'\'') {
                chars.next();
                literal.push('\'');
                continue;
            }
            for q in chars.by_ref() {
                if q == '\'' {
                    break;
                }
                literal.push(q);
            }
        } else if c.is_ascii_alphabetic() {
            if !literal.is_empty() {
                tokens.push(Token::Literal(core::mem::take(&mut literal)));
            }
            let mut count = 1u8;
            while chars.peek() == Some(&c) {
                chars.next();
                count += 1;
            }
            tokens.push(Token::Field(c, count));
        } else {
            literal.push(c);
        }
    }
    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    tokens
}

/// Removes a field from a token stream along with its attached literal.
///
/// Date patterns attach separators after a field (`y年`), time patterns
/// before (`:ss`); callers pick the preference that matches.
pub(crate) fn drop_field(tokens: &mut Vec<Token>, symbol: char, prefer_following: bool) {
    while let Some(idx) = tokens
        .iter()
        .position(|t| matches!(t, Token::Field(c, _) if *c == symbol))
    {
        let following_literal =
            matches!(tokens.get(idx + 1), Some(Token::Literal(_)));
        let preceding_literal = idx > 0 && matches!(tokens.get(idx - 1), Some(Token::Literal(_)));
        tokens.remove(idx);
        if prefer_following && following_literal {
            tokens.remove(idx);
        } else if preceding_literal {
            tokens.remove(idx - 1);
        } else if following_literal {
            tokens.remove(idx);
        }
    }
}

/// The resolved values a pattern renders.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PatternValues<'a> {
    /// The year digits to render (era-relative when `era` is set).
    pub(crate) year: i32,
    /// The era display string, rendered by `G` or appended when the
    /// pattern carries no era field.
    pub(crate) era: Option<&'a str>,
    pub(crate) month: u8,
    /// Month display names, when the symbol tables cover this calendar's
    /// month; the month code string otherwise.
    pub(crate) month_long: &'a str,
    pub(crate) month_short: &'a str,
    pub(crate) day: u8,
    /// ISO weekday, Monday = 1 .. Sunday = 7.
    pub(crate) weekday: u8,
    pub(crate) hour: u8,
    pub(crate) minute: u8,
    pub(crate) second: u8,
    pub(crate) subsecond: u32,
}

impl Default for PatternValues<'_> {
    fn default() -> Self {
        Self {
            year: 0,
            era: None,
            month: 1,
            month_long: "",
            month_short: "",
            day: 1,
            weekday: 1,
            hour: 0,
            minute: 0,
            second: 0,
            subsecond: 0,
        }
    }
}

/// Rendering configuration carried alongside the values.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RenderOptions {
    pub(crate) alignment: Alignment,
    pub(crate) precision: TimePrecision,
}

fn push_number(out: &mut String, value: u32, min_width: u8) {
    let mut digits = 1u8;
    let mut probe = value;
    while probe >= 10 {
        probe /= 10;
        digits += 1;
    }
    for _ in digits..min_width {
        out.push('0');
    }
    let mut divisor = 1u32;
    for _ in 1..digits {
        divisor *= 10;
    }
    let mut rest = value;
    while divisor > 0 {
        out.push((b'0' + (rest / divisor) as u8) as char);
        rest %= divisor;
        divisor /= 10;
    }
}

/// Renders a token stream. Any era string that found no `G` field in the
/// pattern is appended at the end, separated by a space.
pub(crate) fn render(
    tokens: &[Token],
    values: &PatternValues<'_>,
    names: &DateTimeNames,
    options: &RenderOptions,
    out: &mut String,
) {
    let column = options.alignment == Alignment::Column;
    let mut rendered_era = false;

    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Field(symbol, count) => match symbol {
                'G' => {
                    if let Some(era) = values.era {
                        out.push_str(era);
                    }
                    rendered_era = true;
                }
                'y' => {
                    let year = values.year;
                    if *count == 2 {
                        push_number(out, year.rem_euclid(100) as u32, 2);
                    } else {
                        if year < 0 {
                            out.push('-');
                        }
                        let min = if column { 4 } else { *count };
                        push_number(out, year.unsigned_abs(), min);
                    }
                }
                'M' => match count {
                    3 => out.push_str(values.month_short),
                    4.. => out.push_str(values.month_long),
                    _ => push_number(
                        out,
                        u32::from(values.month),
                        if column { 2 } else { *count },
                    ),
                },
                'd' => push_number(out, u32::from(values.day), if column { 2 } else { *count }),
                'E' => {
                    let idx = usize::from(values.weekday - 1) % 7;
                    if *count >= 4 {
                        out.push_str(names.weekdays_long[idx]);
                    } else {
                        out.push_str(names.weekdays_short[idx]);
                    }
                }
                'H' => push_number(out, u32::from(values.hour), if column { 2 } else { *count }),
                'h' => {
                    let hour12 = match values.hour % 12 {
                        0 => 12,
                        h => h,
                    };
                    push_number(out, u32::from(hour12), if column { 2 } else { *count });
                }
                'm' => push_number(out, u32::from(values.minute), *count),
                's' => {
                    push_number(out, u32::from(values.second), *count);
                    if let TimePrecision::Subsecond(digits) = options.precision {
                        let digits = digits.clamp(1, 9);
                        out.push('.');
                        let mut value = values.subsecond;
                        for _ in digits..9 {
                            value /= 10;
                        }
                        push_number(out, value, digits);
                    }
                }
                'a' => {
                    out.push_str(if values.hour < 12 {
                        names.day_periods.0
                    } else {
                        names.day_periods.1
                    });
                }
                _ => {}
            },
        }
    }

    if !rendered_era {
        if let Some(era) = values.era {
            out.push(' ');
            out.push_str(era);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_quoting() {
        let tokens = tokenize("d 'de' MMMM");
        assert_eq!(
            tokens,
            alloc::vec![
                Token::Field('d', 1),
                Token::Literal(" de ".into()),
                Token::Field('M', 4),
            ]
        );
    }

    #[test]
    fn drop_field_prefers_the_requested_side() {
        // Time patterns shed the separator before the field.
        let mut tokens = tokenize("HH:mm:ss");
        drop_field(&mut tokens, 's', false);
        assert_eq!(tokens, tokenize("HH:mm"));

        // Date patterns shed the separator after the field.
        let mut tokens = tokenize("y'年'M'月'd'日'");
        drop_field(&mut tokens, 'M', true);
        drop_field(&mut tokens, 'd', true);
        assert_eq!(tokens, tokenize("y'年'"));
    }

    #[test]
    fn renders_en_medium_shape() {
        let names = kairos_provider::DATETIME_NAMES
            .iter()
            .find(|n| n.locale == "en")
            .unwrap();
        let tokens = tokenize("MMM d, y");
        let values = PatternValues {
            year: 2024,
            month: 7,
            month_long: names.months_long[6],
            month_short: names.months_short[6],
            day: 4,
            ..Default::default()
        };
        let mut out = String::new();
        render(&tokens, &values, names, &RenderOptions::default(), &mut out);
        assert_eq!(out, "Jul 4, 2024");
    }

    #[test]
    fn twelve_hour_clock_wraps_midnight() {
        let names = kairos_provider::DATETIME_NAMES
            .iter()
            .find(|n| n.locale == "en")
            .unwrap();
        let tokens = tokenize("h:mm a");
        let mut values = PatternValues {
            hour: 0,
            minute: 5,
            ..Default::default()
        };
        let mut out = String::new();
        render(&tokens, &values, names, &RenderOptions::default(), &mut out);
        assert_eq!(out, "12:05 AM");

        values.hour = 13;
        out.clear();
        render(&tokens, &values, names, &RenderOptions::default(), &mut out);
        assert_eq!(out, "1:05 PM");
    }
}
