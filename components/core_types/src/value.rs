//! Calculator value representation.
//!
//! This module provides the core `Value` enum: a closed set of twelve kinds
//! covering numbers, text and aggregates. Values are immutable; every
//! operation produces a new value. Aggregates own their children outright, so
//! [`Value::duplicate`] is a full deep copy.

use std::collections::BTreeMap;

use num_bigint::BigInt;
use num_complex::Complex64;
use num_rational::BigRational;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};

use crate::{ClacError, ClacResult, DisplayState, Kind};

/// Represents any calculator value.
///
/// # Examples
///
/// ```
/// use core_types::{DisplayState, Kind, Value};
///
/// let state = DisplayState::new();
/// let seven = Value::integer(7);
/// let pi = Value::Float(3.14159);
///
/// assert_eq!(seven.kind(), Kind::Integer);
/// assert_eq!(seven.render(&state), "7");
/// assert_eq!(pi.render(&state), "3.142");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Unsigned word, masked to the configured word size
    Binary(u32),
    /// Double precision complex number
    Complex(Complex64),
    /// Named values, ordered by name
    Directory(BTreeMap<String, Value>),
    /// IEEE 754 double-precision floating point
    Float(f64),
    /// Arbitrary precision integer
    Integer(BigInt),
    /// A value with a label
    Labeled(String, Box<Value>),
    /// Ordered sequence of values
    List(Vec<Value>),
    /// Rows of values, all rows the same length
    Matrix(Vec<Vec<Value>>),
    /// Program source text
    Program(String),
    /// Fraction in lowest terms
    Rational(BigRational),
    /// Text
    String(String),
    /// Ordered sequence of values with element-wise arithmetic
    Vector(Vec<Value>),
}

impl Value {
    /// The kind of this value
    pub fn kind(&self) -> Kind {
        match self {
            Value::Binary(_) => Kind::Binary,
            Value::Complex(_) => Kind::Complex,
            Value::Directory(_) => Kind::Directory,
            Value::Float(_) => Kind::Float,
            Value::Integer(_) => Kind::Integer,
            Value::Labeled(..) => Kind::Labeled,
            Value::List(_) => Kind::List,
            Value::Matrix(_) => Kind::Matrix,
            Value::Program(_) => Kind::Program,
            Value::Rational(_) => Kind::Rational,
            Value::String(_) => Kind::String,
            Value::Vector(_) => Kind::Vector,
        }
    }

    /// A fully independent deep copy of this value
    pub fn duplicate(&self) -> Value {
        self.clone()
    }

    /// Binary word holding the low `word_size` bits of `bits`
    ///
    /// ```
    /// use core_types::{DisplayState, Value};
    ///
    /// let mut state = DisplayState::new();
    /// state.word_size = 8;
    /// assert_eq!(Value::binary(0x1FF, &state), Value::Binary(0xFF));
    /// ```
    pub fn binary(bits: u64, state: &DisplayState) -> Value {
        // The mask never exceeds 32 bits.
        Value::Binary((bits & state.word_mask()) as u32)
    }

    /// Integer from a machine integer
    pub fn integer(n: i64) -> Value {
        Value::Integer(BigInt::from(n))
    }

    /// Rational `numerator/denominator`, reduced to lowest terms
    pub fn rational(numerator: BigInt, denominator: BigInt) -> ClacResult<Value> {
        if denominator.is_zero() {
            return Err(ClacError::domain("Zero denominator"));
        }
        Ok(Value::Rational(BigRational::new(numerator, denominator)))
    }

    /// Complex number from its rectangular parts
    pub fn complex(re: f64, im: f64) -> Value {
        Value::Complex(Complex64::new(re, im))
    }

    /// String value
    pub fn string(text: impl Into<String>) -> Value {
        Value::String(text.into())
    }

    /// Labeled value
    pub fn labeled(label: impl Into<String>, value: Value) -> Value {
        Value::Labeled(label.into(), Box::new(value))
    }

    /// Matrix from rows; every row must have the same length
    pub fn matrix(rows: Vec<Vec<Value>>) -> ClacResult<Value> {
        if let Some(first) = rows.first() {
            let width = first.len();
            if rows.iter().any(|row| row.len() != width) {
                return Err(ClacError::domain("Matrix rows differ in length"));
            }
        }
        Ok(Value::Matrix(rows))
    }

    /// Text of a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer 1 for true, 0 for false
    pub fn truth(flag: bool) -> Value {
        Value::integer(i64::from(flag))
    }

    /// Check the rules the constructors enforce, recursively.
    ///
    /// Values built through the constructors always pass. Values decoded from
    /// outside the process may not: matrices must be rectangular and
    /// rationals must have a positive denominator and be in lowest terms.
    pub fn validate(&self) -> ClacResult<()> {
        match self {
            Value::Rational(r) => {
                if !r.denom().is_positive() || !r.numer().gcd(r.denom()).is_one() {
                    return Err(ClacError::domain("Rational is not in lowest terms"));
                }
                Ok(())
            }
            Value::Matrix(rows) => {
                let width = rows.first().map_or(0, Vec::len);
                if rows.iter().any(|row| row.len() != width) {
                    return Err(ClacError::domain("Matrix rows differ in length"));
                }
                rows.iter().flatten().try_for_each(Value::validate)
            }
            Value::List(items) | Value::Vector(items) => items.iter().try_for_each(Value::validate),
            Value::Labeled(_, value) => value.validate(),
            Value::Directory(entries) => entries.values().try_for_each(Value::validate),
            Value::Binary(_)
            | Value::Complex(_)
            | Value::Float(_)
            | Value::Integer(_)
            | Value::Program(_)
            | Value::String(_) => Ok(()),
        }
    }
}
