//! Rendering values to text under the current display state.

use crate::display::{ComplexMode, FloatMode};
use crate::{Base, DisplayState, Value};

impl Value {
    /// Format this value for display
    ///
    /// ```
    /// use core_types::{Base, DisplayState, Value};
    ///
    /// let mut state = DisplayState::new();
    /// assert_eq!(Value::Binary(31).render(&state), "#1Fh");
    /// state.base = Base::Decimal;
    /// assert_eq!(Value::Binary(31).render(&state), "#31d");
    /// ```
    pub fn render(&self, state: &DisplayState) -> String {
        match self {
            Value::Binary(bits) => render_binary(*bits, state),
            Value::Complex(z) => match state.complex_mode {
                ComplexMode::Rectangular => format!(
                    "({}, {})",
                    render_float(z.re, state),
                    render_float(z.im, state)
                ),
                ComplexMode::Polar => format!(
                    "({} @ {})",
                    render_float(z.norm(), state),
                    render_float(state.from_radians(z.arg()), state)
                ),
            },
            Value::Directory(entries) => {
                let mut out = String::from("DIR {");
                for (name, value) in entries {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str(": ");
                    out.push_str(&value.render(state));
                }
                out.push_str(" }");
                out
            }
            Value::Float(x) => render_float(*x, state),
            Value::Integer(n) => n.to_string(),
            Value::Labeled(label, value) => format!("{}: {}", label, value.render(state)),
            Value::List(items) => render_sequence('{', '}', items, state),
            Value::Matrix(rows) => {
                let mut out = String::from("[");
                for row in rows {
                    out.push(' ');
                    out.push_str(&render_sequence('[', ']', row, state));
                }
                out.push_str(" ]");
                out
            }
            Value::Program(text) => format!("<< {} >>", text),
            Value::Rational(r) => format!("{}/{}", r.numer(), r.denom()),
            Value::String(text) => text.clone(),
            Value::Vector(items) => render_sequence('[', ']', items, state),
        }
    }
}

fn render_sequence(open: char, close: char, items: &[Value], state: &DisplayState) -> String {
    let mut out = String::new();
    out.push(open);
    for item in items {
        out.push(' ');
        out.push_str(&item.render(state));
    }
    out.push(' ');
    out.push(close);
    out
}

fn render_binary(bits: u32, state: &DisplayState) -> String {
    let word = state.word(bits);
    let digits = match state.base {
        Base::Decimal => format!("{}", word),
        Base::Binary => format!("{:b}", word),
        Base::Hex => format!("{:X}", word),
        Base::Octal => format!("{:o}", word),
    };
    format!("#{}{}", digits, state.base.suffix())
}

/// Format a float under the current float mode
pub(crate) fn render_float(x: f64, state: &DisplayState) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let decimals = state.decimal_count;
    match state.float_mode {
        FloatMode::Fixed => format!("{:.*}", decimals, x),
        FloatMode::Scientific => scientific(x, decimals),
        FloatMode::Engineering => engineering(x, decimals),
    }
}

fn with_exponent(mantissa: &str, exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}E{}{:02}", mantissa, sign, exponent.abs())
}

/// `d.dddE+XX`, as C's `%E` writes it
fn scientific(x: f64, decimals: usize) -> String {
    let formatted = format!("{:.*e}", decimals, x);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            with_exponent(mantissa, exponent.parse::<i32>().unwrap_or(0))
        }
        None => formatted,
    }
}

fn engineering(x: f64, decimals: usize) -> String {
    if x == 0.0 {
        return with_exponent(&format!("{:.*}", decimals, 0.0), 0);
    }
    let mut exponent = (x.abs().log10().floor() as i32).div_euclid(3) * 3;
    let mut mantissa = x / 10f64.powi(exponent);
    let mut text = format!("{:.*}", decimals, mantissa);
    // Rounding can carry the mantissa up to 1000.
    if text.trim_start_matches('-').starts_with("1000") {
        exponent += 3;
        mantissa = x / 10f64.powi(exponent);
        text = format!("{:.*}", decimals, mantissa);
    }
    with_exponent(&text, exponent)
}
