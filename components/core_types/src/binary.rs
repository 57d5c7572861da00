//! Binary operations and the mixed-kind operator protocol.
//!
//! [`apply_binary`] looks up the coercion for the operand kinds, converts both
//! sides to the common kind and combines the converted pair. The per-kind
//! arithmetic lives in the `combine_*` functions below.

use std::borrow::Cow;
use std::cmp::Ordering;

use num_bigint::BigInt;
use num_complex::Complex64;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::{coercion, ClacError, ClacResult, DisplayState, Kind, Value};

/// A binary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Addition
    Add,
    /// Subtraction
    Sub,
    /// Multiplication
    Mul,
    /// Division
    Div,
    /// Modulo
    Mod,
    /// Power
    Pow,
    /// Equal
    Eq,
    /// Not equal
    Ne,
    /// Less than
    Lt,
    /// Less than or equal
    Le,
    /// Greater than
    Gt,
    /// Greater than or equal
    Ge,
    /// Bitwise and
    And,
    /// Bitwise or
    Or,
    /// Bitwise exclusive or
    Xor,
}

impl BinaryOp {
    /// Verb phrase used in error messages
    pub fn description(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "subtract",
            BinaryOp::Mul => "multiply",
            BinaryOp::Div => "divide",
            BinaryOp::Mod => "take the modulus of",
            BinaryOp::Pow => "raise",
            BinaryOp::Eq | BinaryOp::Ne => "test equality of",
            BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => "compare",
            BinaryOp::And | BinaryOp::Or | BinaryOp::Xor => "combine the bits of",
        }
    }

    fn is_ordering(self) -> bool {
        matches!(
            self,
            BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge
        )
    }

    /// Whether an ordering comparison holds for `ordering`
    fn holds(self, ordering: Ordering) -> bool {
        match self {
            BinaryOp::Lt => ordering == Ordering::Less,
            BinaryOp::Le => ordering != Ordering::Greater,
            BinaryOp::Gt => ordering == Ordering::Greater,
            BinaryOp::Ge => ordering != Ordering::Less,
            BinaryOp::Eq => ordering == Ordering::Equal,
            BinaryOp::Ne => ordering != Ordering::Equal,
            _ => false,
        }
    }
}

/// Apply `op` to `left` and `right`, coercing both to their common kind.
///
/// # Examples
///
/// ```
/// use core_types::{apply_binary, BinaryOp, DisplayState, Value};
///
/// let state = DisplayState::new();
/// let sum = apply_binary(BinaryOp::Add, &Value::integer(3), &Value::Float(0.5), &state).unwrap();
/// assert_eq!(sum, Value::Float(3.5));
/// ```
pub fn apply_binary(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    state: &DisplayState,
) -> ClacResult<Value> {
    let pair = coercion(left.kind(), right.kind())
        .ok_or_else(|| ClacError::conversion_unavailable(left.kind(), right.kind()))?;
    let left = coerce(left, pair.left, state)?;
    let right = coerce(right, pair.right, state)?;
    combine(op, &left, &right, state)
}

fn coerce<'a>(value: &'a Value, target: Kind, state: &DisplayState) -> ClacResult<Cow<'a, Value>> {
    if value.kind() == target {
        Ok(Cow::Borrowed(value))
    } else {
        value.convert(target, state).map(Cow::Owned)
    }
}

fn combine(op: BinaryOp, left: &Value, right: &Value, state: &DisplayState) -> ClacResult<Value> {
    if let (Value::Binary(a), Value::Binary(b)) = (left, right) {
        let (a, b) = (state.word(*a), state.word(*b));
        match op {
            BinaryOp::Eq => return Ok(Value::truth(a == b)),
            BinaryOp::Ne => return Ok(Value::truth(a != b)),
            _ if op.is_ordering() => return Ok(Value::truth(op.holds(a.cmp(&b)))),
            _ => {}
        }
    }
    match op {
        BinaryOp::Eq => return Ok(Value::truth(left == right)),
        BinaryOp::Ne => return Ok(Value::truth(left != right)),
        _ => {}
    }
    if op.is_ordering() {
        return compare(op, left, right);
    }
    match (left, right) {
        (Value::Binary(a), Value::Binary(b)) => combine_binary(op, *a, *b, state),
        (Value::Complex(a), Value::Complex(b)) => combine_complex(op, *a, *b),
        (Value::Float(a), Value::Float(b)) => combine_float(op, *a, *b),
        (Value::Integer(a), Value::Integer(b)) => combine_integer(op, a, b),
        (Value::Rational(a), Value::Rational(b)) => combine_rational(op, a, b),
        (Value::String(a), Value::String(b)) if op == BinaryOp::Add => {
            Ok(Value::String(format!("{}{}", a, b)))
        }
        (Value::List(a), Value::List(b)) if op == BinaryOp::Add => {
            Ok(Value::List(a.iter().chain(b).cloned().collect()))
        }
        (Value::Vector(a), Value::Vector(b)) => combine_vector(op, a, b, state),
        (Value::Matrix(a), Value::Matrix(b)) => combine_matrix(op, a, b, state),
        _ => Err(ClacError::unsupported(op.description(), left.kind())),
    }
}

fn compare(op: BinaryOp, left: &Value, right: &Value) -> ClacResult<Value> {
    let ordering = match (left, right) {
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Rational(a), Value::Rational(b)) => Some(a.cmp(b)),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => return Err(ClacError::unsupported(op.description(), left.kind())),
    };
    // NaN compares false under every ordering.
    Ok(Value::truth(ordering.map_or(false, |o| op.holds(o))))
}

fn divide_by_zero() -> ClacError {
    ClacError::domain("Division by zero")
}

fn combine_binary(op: BinaryOp, a: u32, b: u32, state: &DisplayState) -> ClacResult<Value> {
    let (a, b) = (state.word(a), state.word(b));
    let result = match op {
        BinaryOp::Add => a.wrapping_add(b),
        BinaryOp::Sub => a.wrapping_sub(b),
        BinaryOp::Mul => a.wrapping_mul(b),
        BinaryOp::Div | BinaryOp::Mod if b == 0 => return Err(divide_by_zero()),
        BinaryOp::Div => a / b,
        BinaryOp::Mod => a % b,
        BinaryOp::Pow => a.wrapping_pow(u32::try_from(b).unwrap_or(u32::MAX)),
        BinaryOp::And => a & b,
        BinaryOp::Or => a | b,
        BinaryOp::Xor => a ^ b,
        _ => return Err(ClacError::unsupported(op.description(), Kind::Binary)),
    };
    Ok(Value::binary(result, state))
}

fn combine_complex(op: BinaryOp, a: Complex64, b: Complex64) -> ClacResult<Value> {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div if b.is_zero() => return Err(divide_by_zero()),
        BinaryOp::Div => a / b,
        BinaryOp::Pow => a.powc(b),
        _ => return Err(ClacError::unsupported(op.description(), Kind::Complex)),
    };
    Ok(Value::Complex(result))
}

fn combine_float(op: BinaryOp, a: f64, b: f64) -> ClacResult<Value> {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div | BinaryOp::Mod if b == 0.0 => return Err(divide_by_zero()),
        BinaryOp::Div => a / b,
        BinaryOp::Mod => a - b * (a / b).floor(),
        BinaryOp::Pow if a < 0.0 && b.fract() != 0.0 => {
            return Ok(Value::Complex(Complex64::new(a, 0.0).powc(Complex64::new(b, 0.0))))
        }
        BinaryOp::Pow => a.powf(b),
        _ => return Err(ClacError::unsupported(op.description(), Kind::Float)),
    };
    Ok(Value::Float(result))
}

fn combine_integer(op: BinaryOp, a: &BigInt, b: &BigInt) -> ClacResult<Value> {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div | BinaryOp::Mod if b.is_zero() => return Err(divide_by_zero()),
        BinaryOp::Div => {
            let (quotient, remainder) = a.div_rem(b);
            if remainder.is_zero() {
                quotient
            } else {
                return Value::rational(a.clone(), b.clone());
            }
        }
        BinaryOp::Mod => a.mod_floor(b),
        BinaryOp::Pow => return integer_pow(a, b),
        BinaryOp::And => a & b,
        BinaryOp::Or => a | b,
        BinaryOp::Xor => a ^ b,
        _ => return Err(ClacError::unsupported(op.description(), Kind::Integer)),
    };
    Ok(Value::Integer(result))
}

/// Largest power result, in bits, that `^` will build
const MAX_POWER_BITS: u64 = 1 << 20;

fn exponent_too_large() -> ClacError {
    ClacError::domain("Exponent too large")
}

/// Reject powers whose result would exceed [`MAX_POWER_BITS`]
fn check_power_size(base_bits: u64, exponent: u64) -> ClacResult<()> {
    if base_bits > 1 && base_bits.saturating_mul(exponent) > MAX_POWER_BITS {
        return Err(exponent_too_large());
    }
    Ok(())
}

fn integer_pow(base: &BigInt, exponent: &BigInt) -> ClacResult<Value> {
    let magnitude = exponent
        .abs()
        .to_u32()
        .ok_or_else(exponent_too_large)?;
    check_power_size(base.bits(), u64::from(magnitude))?;
    let power = num_traits::pow(base.clone(), magnitude as usize);
    if !exponent.is_negative() {
        return Ok(Value::Integer(power));
    }
    if base.is_zero() {
        return Err(divide_by_zero());
    }
    Value::rational(BigInt::from(1), power)
}

fn combine_rational(op: BinaryOp, a: &BigRational, b: &BigRational) -> ClacResult<Value> {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div | BinaryOp::Mod if b.is_zero() => return Err(divide_by_zero()),
        BinaryOp::Div => a / b,
        BinaryOp::Mod => a - b * (a / b).floor(),
        BinaryOp::Pow if b.is_integer() => {
            let exponent = b
                .to_integer()
                .to_i32()
                .ok_or_else(exponent_too_large)?;
            let base_bits = a.numer().bits().max(a.denom().bits());
            check_power_size(base_bits, u64::from(exponent.unsigned_abs()))?;
            if a.is_zero() && exponent < 0 {
                return Err(divide_by_zero());
            }
            a.pow(exponent)
        }
        BinaryOp::Pow => {
            let (a, b) = (
                a.to_f64().unwrap_or(f64::NAN),
                b.to_f64().unwrap_or(f64::NAN),
            );
            return combine_float(op, a, b);
        }
        _ => return Err(ClacError::unsupported(op.description(), Kind::Rational)),
    };
    Ok(Value::Rational(result))
}

fn length_mismatch() -> ClacError {
    ClacError::domain("Dimension mismatch")
}

fn elementwise(
    op: BinaryOp,
    a: &[Value],
    b: &[Value],
    state: &DisplayState,
) -> ClacResult<Vec<Value>> {
    if a.len() != b.len() {
        return Err(length_mismatch());
    }
    a.iter()
        .zip(b)
        .map(|(x, y)| apply_binary(op, x, y, state))
        .collect()
}

fn dot(a: &[Value], b: &[Value], state: &DisplayState) -> ClacResult<Value> {
    if a.len() != b.len() {
        return Err(length_mismatch());
    }
    let mut sum = Value::integer(0);
    for (x, y) in a.iter().zip(b) {
        let product = apply_binary(BinaryOp::Mul, x, y, state)?;
        sum = apply_binary(BinaryOp::Add, &sum, &product, state)?;
    }
    Ok(sum)
}

fn combine_vector(
    op: BinaryOp,
    a: &[Value],
    b: &[Value],
    state: &DisplayState,
) -> ClacResult<Value> {
    match op {
        BinaryOp::Add | BinaryOp::Sub => elementwise(op, a, b, state).map(Value::Vector),
        BinaryOp::Mul => dot(a, b, state),
        _ => Err(ClacError::unsupported(op.description(), Kind::Vector)),
    }
}

fn combine_matrix(
    op: BinaryOp,
    a: &[Vec<Value>],
    b: &[Vec<Value>],
    state: &DisplayState,
) -> ClacResult<Value> {
    match op {
        BinaryOp::Add | BinaryOp::Sub => {
            if a.len() != b.len() {
                return Err(length_mismatch());
            }
            a.iter()
                .zip(b)
                .map(|(x, y)| elementwise(op, x, y, state))
                .collect::<ClacResult<Vec<_>>>()
                .map(Value::Matrix)
        }
        BinaryOp::Mul => {
            let inner = a.first().map_or(0, Vec::len);
            if inner != b.len() {
                return Err(length_mismatch());
            }
            let columns = b.first().map_or(0, Vec::len);
            let mut rows = Vec::with_capacity(a.len());
            for row in a {
                let mut out = Vec::with_capacity(columns);
                for column in 0..columns {
                    let column = b
                        .iter()
                        .map(|r| r.get(column).cloned().ok_or_else(length_mismatch))
                        .collect::<ClacResult<Vec<Value>>>()?;
                    out.push(dot(row, &column, state)?);
                }
                rows.push(out);
            }
            Ok(Value::Matrix(rows))
        }
        _ => Err(ClacError::unsupported(op.description(), Kind::Matrix)),
    }
}
