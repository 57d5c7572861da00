//! Literal parsing
//!
//! Turns a word that matched no builtin into a value. The grammar covers
//! integers, floats, rationals, complex numbers in rectangular `(re,im)` or
//! polar `(r@theta)` form, binary words `#digits[hdob]` and quoted strings.

use std::str::FromStr;
use std::sync::OnceLock;

use core_types::{Base, ClacError, ClacResult, DisplayState, Value};
use num_bigint::BigInt;
use regex::Regex;

static INTEGER: OnceLock<Option<Regex>> = OnceLock::new();
static FLOAT: OnceLock<Option<Regex>> = OnceLock::new();
static RATIONAL: OnceLock<Option<Regex>> = OnceLock::new();
static COMPLEX: OnceLock<Option<Regex>> = OnceLock::new();
static BINARY: OnceLock<Option<Regex>> = OnceLock::new();

fn matcher(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(pattern).ok()).as_ref()
}

fn integer_re() -> Option<&'static Regex> {
    matcher(&INTEGER, r"^[+-]?\d+$")
}

fn float_re() -> Option<&'static Regex> {
    matcher(
        &FLOAT,
        r"^[+-]?(\d+\.\d*([eE][+-]?\d+)?|\.\d+([eE][+-]?\d+)?|\d+[eE][+-]?\d+)$",
    )
}

fn rational_re() -> Option<&'static Regex> {
    matcher(&RATIONAL, r"^([+-]?\d+)/(\d+)$")
}

fn complex_re() -> Option<&'static Regex> {
    matcher(&COMPLEX, r"^\(([^,@()]+)([,@])([^,@()]+)\)$")
}

fn binary_re() -> Option<&'static Regex> {
    matcher(&BINARY, r"^#([0-9A-Fa-f]+?)([hdob])?$")
}

fn is_match(re: Option<&'static Regex>, word: &str) -> bool {
    re.map_or(false, |re| re.is_match(word))
}

/// Parse `word` as a literal value
///
/// ```
/// use core_types::{DisplayState, Value};
/// use interpreter::literal::parse_literal;
///
/// let state = DisplayState::new();
/// assert_eq!(parse_literal("42", &state).unwrap(), Value::integer(42));
/// assert_eq!(parse_literal("#ffh", &state).unwrap(), Value::Binary(255));
/// assert!(parse_literal("bogus", &state).is_err());
/// ```
pub fn parse_literal(word: &str, state: &DisplayState) -> ClacResult<Value> {
    if let Some(text) = word.strip_prefix('"') {
        let text = text.strip_suffix('"').unwrap_or(text);
        return Ok(Value::string(text));
    }
    if is_match(integer_re(), word) {
        return parse_integer(word)
            .map(Value::Integer)
            .ok_or_else(|| ClacError::malformed_literal(word));
    }
    if is_match(float_re(), word) {
        return parse_real(word)
            .map(Value::Float)
            .ok_or_else(|| ClacError::malformed_literal(word));
    }
    if let Some(caps) = rational_re().and_then(|re| re.captures(word)) {
        let numerator = parse_integer(&caps[1]);
        let denominator = parse_integer(&caps[2]);
        return match (numerator, denominator) {
            (Some(n), Some(d)) => Value::rational(n, d),
            _ => Err(ClacError::malformed_literal(word)),
        };
    }
    if let Some(caps) = complex_re().and_then(|re| re.captures(word)) {
        let first = parse_real(caps[1].trim());
        let second = parse_real(caps[3].trim());
        let (first, second) = match (first, second) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(ClacError::malformed_literal(word)),
        };
        return Ok(if &caps[2] == "@" {
            let angle = state.to_radians(second);
            Value::complex(first * angle.cos(), first * angle.sin())
        } else {
            Value::complex(first, second)
        });
    }
    if let Some(caps) = binary_re().and_then(|re| re.captures(word)) {
        let base = caps
            .get(2)
            .and_then(|suffix| suffix.as_str().chars().next())
            .and_then(Base::from_suffix)
            .unwrap_or(state.base);
        return u64::from_str_radix(&caps[1], base.radix())
            .map(|bits| Value::binary(bits, state))
            .map_err(|_| ClacError::malformed_literal(word));
    }
    Err(ClacError::malformed_literal(word))
}

fn parse_integer(text: &str) -> Option<BigInt> {
    BigInt::from_str(text.strip_prefix('+').unwrap_or(text)).ok()
}

fn parse_real(text: &str) -> Option<f64> {
    f64::from_str(text).ok().filter(|x| x.is_finite())
}
