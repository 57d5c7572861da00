//! Unary operations on values.
//!
//! Each kind handles the operations that make sense for it; everything else
//! falls through to a `KindUnsupported` error.

use num_bigint::BigInt;
use num_complex::Complex64;
use num_integer::Roots;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{ClacError, ClacResult, DisplayState, Kind, Value};

/// A unary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Absolute value (magnitude for complex numbers and vectors)
    Abs,
    /// Arccosine
    Acos,
    /// Arcsine
    Asin,
    /// Arctangent
    Atan,
    /// Complex conjugate
    Conj,
    /// Cosine
    Cos,
    /// e raised to the value
    Exp,
    /// 10 raised to the value
    Exp10,
    /// Fractional part
    Frac,
    /// Integer part
    IntPart,
    /// Imaginary part
    Im,
    /// Reciprocal
    Inv,
    /// Natural logarithm
    Ln,
    /// Base 10 logarithm
    Log,
    /// Negation
    Neg,
    /// Real part
    Re,
    /// Sign
    Sign,
    /// Sine
    Sin,
    /// Square
    Sq,
    /// Square root
    Sqrt,
    /// Tangent
    Tan,
    /// Shift one bit left
    ShiftLeft,
    /// Shift one bit right
    ShiftRight,
    /// Rotate one bit left
    RotateLeft,
    /// Rotate one bit right
    RotateRight,
}

impl UnaryOp {
    /// Verb phrase used in error messages
    pub fn description(self) -> &'static str {
        match self {
            UnaryOp::Abs => "take the absolute value of",
            UnaryOp::Acos => "take the arccosine of",
            UnaryOp::Asin => "take the arcsine of",
            UnaryOp::Atan => "take the arctangent of",
            UnaryOp::Conj => "take the complex conjugate of",
            UnaryOp::Cos => "take the cosine of",
            UnaryOp::Exp | UnaryOp::Exp10 => "exponentiate",
            UnaryOp::Frac => "take the fractional part of",
            UnaryOp::IntPart => "take the integer part of",
            UnaryOp::Im => "take the imaginary part of",
            UnaryOp::Inv => "invert",
            UnaryOp::Ln => "take the natural logarithm of",
            UnaryOp::Log => "take the logarithm of",
            UnaryOp::Neg => "negate",
            UnaryOp::Re => "take the real part of",
            UnaryOp::Sign => "find the sign of",
            UnaryOp::Sin => "take the sine of",
            UnaryOp::Sq => "square",
            UnaryOp::Sqrt => "take the square root of",
            UnaryOp::Tan => "take the tangent of",
            UnaryOp::ShiftLeft => "shift left",
            UnaryOp::ShiftRight => "shift right",
            UnaryOp::RotateLeft => "rotate left",
            UnaryOp::RotateRight => "rotate right",
        }
    }

    /// Operations computed through `f64` for exact kinds
    fn is_transcendental(self) -> bool {
        matches!(
            self,
            UnaryOp::Acos
                | UnaryOp::Asin
                | UnaryOp::Atan
                | UnaryOp::Cos
                | UnaryOp::Sin
                | UnaryOp::Tan
                | UnaryOp::Exp
                | UnaryOp::Exp10
                | UnaryOp::Ln
                | UnaryOp::Log
                | UnaryOp::Sqrt
        )
    }
}

impl Value {
    /// Apply a unary operation, producing a new value
    ///
    /// ```
    /// use core_types::{DisplayState, UnaryOp, Value};
    ///
    /// let state = DisplayState::new();
    /// let result = Value::integer(-4).apply_unary(UnaryOp::Abs, &state).unwrap();
    /// assert_eq!(result, Value::integer(4));
    /// ```
    pub fn apply_unary(&self, op: UnaryOp, state: &DisplayState) -> ClacResult<Value> {
        match self {
            Value::Binary(bits) => binary_unary(*bits, op, state),
            Value::Complex(z) => complex_unary(*z, op),
            Value::Float(x) => float_unary(*x, op, state),
            Value::Integer(n) => integer_unary(n, op, state),
            Value::Rational(r) => rational_unary(r, op, state),
            Value::Vector(items) => vector_unary(items, op, state),
            Value::Matrix(rows) => matrix_unary(rows, op, state),
            Value::Directory(_)
            | Value::Labeled(..)
            | Value::List(_)
            | Value::Program(_)
            | Value::String(_) => Err(ClacError::unsupported(op.description(), self.kind())),
        }
    }
}

pub(crate) fn bigint_to_f64(n: &BigInt) -> f64 {
    n.to_f64().unwrap_or(f64::NAN)
}

pub(crate) fn rational_to_f64(r: &BigRational) -> f64 {
    r.to_f64().unwrap_or(f64::NAN)
}

fn binary_unary(bits: u32, op: UnaryOp, state: &DisplayState) -> ClacResult<Value> {
    let width = state.word_size.clamp(1, DisplayState::MAX_WORD_SIZE);
    let b = state.word(bits);
    let result = match op {
        UnaryOp::Abs | UnaryOp::Conj | UnaryOp::Re | UnaryOp::IntPart => b,
        UnaryOp::Im | UnaryOp::Frac => 0,
        UnaryOp::Neg => b.wrapping_neg(),
        UnaryOp::Sign => u64::from(b != 0),
        UnaryOp::Sq => b.wrapping_mul(b),
        UnaryOp::ShiftLeft => b << 1,
        UnaryOp::ShiftRight => b >> 1,
        UnaryOp::RotateLeft => (b << 1) | (b >> (width - 1)),
        UnaryOp::RotateRight => (b >> 1) | ((b & 1) << (width - 1)),
        _ => return Err(ClacError::unsupported(op.description(), Kind::Binary)),
    };
    Ok(Value::binary(result, state))
}

fn complex_unary(z: Complex64, op: UnaryOp) -> ClacResult<Value> {
    let result = match op {
        UnaryOp::Abs => return Ok(Value::Float(z.norm())),
        UnaryOp::Re => return Ok(Value::Float(z.re)),
        UnaryOp::Im => return Ok(Value::Float(z.im)),
        UnaryOp::Acos => z.acos(),
        UnaryOp::Asin => z.asin(),
        UnaryOp::Atan => z.atan(),
        UnaryOp::Conj => z.conj(),
        UnaryOp::Cos => z.cos(),
        UnaryOp::Sin => z.sin(),
        UnaryOp::Tan => z.tan(),
        UnaryOp::Exp => z.exp(),
        UnaryOp::Exp10 => z.expf(10.0),
        UnaryOp::Ln | UnaryOp::Log if z.is_zero() => {
            return Err(ClacError::domain("Logarithm of zero"))
        }
        UnaryOp::Ln => z.ln(),
        UnaryOp::Log => z.log10(),
        UnaryOp::Inv if z.is_zero() => return Err(ClacError::domain("Division by zero")),
        UnaryOp::Inv => z.inv(),
        UnaryOp::Neg => -z,
        UnaryOp::Sign if z.is_zero() => z,
        UnaryOp::Sign => z / z.norm(),
        UnaryOp::Sq => z * z,
        UnaryOp::Sqrt => z.sqrt(),
        _ => return Err(ClacError::unsupported(op.description(), Kind::Complex)),
    };
    Ok(Value::Complex(result))
}

fn float_unary(x: f64, op: UnaryOp, state: &DisplayState) -> ClacResult<Value> {
    let result = match op {
        UnaryOp::Abs => x.abs(),
        UnaryOp::Acos | UnaryOp::Asin if !(-1.0..=1.0).contains(&x) => {
            return Err(ClacError::domain("Argument outside [-1, 1]"))
        }
        UnaryOp::Acos => state.from_radians(x.acos()),
        UnaryOp::Asin => state.from_radians(x.asin()),
        UnaryOp::Atan => state.from_radians(x.atan()),
        UnaryOp::Conj | UnaryOp::Re => x,
        UnaryOp::Im => 0.0,
        UnaryOp::Cos => state.to_radians(x).cos(),
        UnaryOp::Sin => state.to_radians(x).sin(),
        UnaryOp::Tan => state.to_radians(x).tan(),
        UnaryOp::Exp => x.exp(),
        UnaryOp::Exp10 => 10f64.powf(x),
        UnaryOp::Frac => x.fract(),
        UnaryOp::IntPart => x.trunc(),
        UnaryOp::Inv if x == 0.0 => return Err(ClacError::domain("Division by zero")),
        UnaryOp::Inv => 1.0 / x,
        UnaryOp::Ln | UnaryOp::Log if x == 0.0 => {
            return Err(ClacError::domain("Logarithm of zero"))
        }
        UnaryOp::Ln | UnaryOp::Log | UnaryOp::Sqrt if x < 0.0 => {
            return complex_unary(Complex64::new(x, 0.0), op)
        }
        UnaryOp::Ln => x.ln(),
        UnaryOp::Log => x.log10(),
        UnaryOp::Neg => -x,
        UnaryOp::Sign if x > 0.0 => 1.0,
        UnaryOp::Sign if x < 0.0 => -1.0,
        UnaryOp::Sign => 0.0,
        UnaryOp::Sq => x * x,
        UnaryOp::Sqrt => x.sqrt(),
        _ => return Err(ClacError::unsupported(op.description(), Kind::Float)),
    };
    Ok(Value::Float(result))
}

fn integer_unary(n: &BigInt, op: UnaryOp, state: &DisplayState) -> ClacResult<Value> {
    let result = match op {
        UnaryOp::Abs => n.abs(),
        UnaryOp::Conj | UnaryOp::Re | UnaryOp::IntPart => n.clone(),
        UnaryOp::Im | UnaryOp::Frac => BigInt::zero(),
        UnaryOp::Neg => -n,
        UnaryOp::Sign => n.signum(),
        UnaryOp::Sq => n * n,
        UnaryOp::Inv if n.is_zero() => return Err(ClacError::domain("Division by zero")),
        UnaryOp::Inv => return Value::rational(BigInt::one(), n.clone()),
        UnaryOp::Sqrt if !n.is_negative() => {
            let root = n.sqrt();
            if &(&root * &root) == n {
                root
            } else {
                return float_unary(bigint_to_f64(n), op, state);
            }
        }
        _ if op.is_transcendental() => return float_unary(bigint_to_f64(n), op, state),
        _ => return Err(ClacError::unsupported(op.description(), Kind::Integer)),
    };
    Ok(Value::Integer(result))
}

fn rational_unary(r: &BigRational, op: UnaryOp, state: &DisplayState) -> ClacResult<Value> {
    let result = match op {
        UnaryOp::Abs => r.abs(),
        UnaryOp::Conj | UnaryOp::Re => r.clone(),
        UnaryOp::Im => BigRational::zero(),
        UnaryOp::Frac => r.fract(),
        UnaryOp::IntPart => r.trunc(),
        UnaryOp::Neg => -r,
        UnaryOp::Sign => return Ok(Value::Integer(r.numer().signum())),
        UnaryOp::Sq => r * r,
        UnaryOp::Inv if r.is_zero() => return Err(ClacError::domain("Division by zero")),
        UnaryOp::Inv => r.recip(),
        UnaryOp::Sqrt if !r.is_negative() => {
            let (numer, denom) = (r.numer().sqrt(), r.denom().sqrt());
            let candidate = BigRational::new(numer, denom);
            if &(&candidate * &candidate) == r {
                candidate
            } else {
                return float_unary(rational_to_f64(r), op, state);
            }
        }
        _ if op.is_transcendental() => return float_unary(rational_to_f64(r), op, state),
        _ => return Err(ClacError::unsupported(op.description(), Kind::Rational)),
    };
    Ok(Value::Rational(result))
}

fn vector_unary(items: &[Value], op: UnaryOp, state: &DisplayState) -> ClacResult<Value> {
    match op {
        UnaryOp::Neg => items
            .iter()
            .map(|item| item.apply_unary(op, state))
            .collect::<ClacResult<Vec<_>>>()
            .map(Value::Vector),
        UnaryOp::Abs => {
            let mut sum = 0.0;
            for item in items {
                let magnitude = item
                    .apply_unary(UnaryOp::Abs, state)?
                    .convert(Kind::Float, state)?;
                if let Value::Float(m) = magnitude {
                    sum += m * m;
                }
            }
            Ok(Value::Float(sum.sqrt()))
        }
        _ => Err(ClacError::unsupported(op.description(), Kind::Vector)),
    }
}

fn matrix_unary(rows: &[Vec<Value>], op: UnaryOp, state: &DisplayState) -> ClacResult<Value> {
    match op {
        UnaryOp::Neg => rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|item| item.apply_unary(op, state))
                    .collect::<ClacResult<Vec<_>>>()
            })
            .collect::<ClacResult<Vec<_>>>()
            .map(Value::Matrix),
        _ => Err(ClacError::unsupported(op.description(), Kind::Matrix)),
    }
}
