//! Kind conversions and the conversion matrix.
//!
//! [`Value::convert`] implements the twelve conversion operations. The
//! matrix records, for every ordered pair of kinds, the target each side is
//! coerced to before a binary operation runs.

use std::collections::BTreeMap;

use num_bigint::{BigInt, Sign};
use num_complex::Complex64;
use num_rational::BigRational;

use crate::unary::{bigint_to_f64, rational_to_f64};
use crate::Kind::{
    Binary as B, Complex as C, Float as F, Integer as I, Labeled as Lb, List as Ls, Matrix as M,
    Program as P, Rational as R, String as S, Vector as V,
};
use crate::{ClacError, ClacResult, DisplayState, Kind, Value};

/// Targets for the left and right operand of a binary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coercion {
    /// Kind the left operand is converted to
    pub left: Kind,
    /// Kind the right operand is converted to
    pub right: Kind,
}

const fn to(kind: Kind) -> Option<Coercion> {
    Some(Coercion {
        left: kind,
        right: kind,
    })
}

const N: Option<Coercion> = None;

/// Conversion matrix, indexed `[left][right]` by [`Kind::index`]
#[rustfmt::skip]
static CONVERSION_TABLE: [[Option<Coercion>; Kind::COUNT]; Kind::COUNT] = [
    //           BIN    CPX    DIR FLT    INT    LBL     LST     MAT    PGM    RAT    STR    VEC
    /* BIN */ [to(B), to(C), N, to(F), to(I), N,      N,      N,     N,     to(R), N,     N    ],
    /* CPX */ [to(C), to(C), N, to(C), to(C), N,      N,      N,     N,     to(C), N,     N    ],
    /* DIR */ [N,     N,     N, N,     N,     N,      N,      N,     N,     N,     N,     N    ],
    /* FLT */ [to(F), to(C), N, to(F), to(F), N,      N,      N,     N,     to(F), N,     N    ],
    /* INT */ [to(I), to(C), N, to(F), to(I), N,      N,      N,     N,     to(R), N,     N    ],
    /* LBL */ [N,     N,     N, N,     N,     to(Lb), N,      N,     N,     N,     N,     N    ],
    /* LST */ [N,     N,     N, N,     N,     N,      to(Ls), N,     N,     N,     N,     N    ],
    /* MAT */ [N,     N,     N, N,     N,     N,      N,      to(M), N,     N,     N,     N    ],
    /* PGM */ [N,     N,     N, N,     N,     N,      N,      N,     to(P), N,     N,     N    ],
    /* RAT */ [to(R), to(C), N, to(F), to(R), N,      N,      N,     N,     to(R), N,     N    ],
    /* STR */ [N,     N,     N, N,     N,     N,      N,      N,     N,     N,     to(S), N    ],
    /* VEC */ [N,     N,     N, N,     N,     N,      N,      N,     N,     N,     N,     to(V)],
];

/// Coercion for a binary operation on `left` and `right`, if one exists
///
/// ```
/// use core_types::{coercion, Kind};
///
/// let pair = coercion(Kind::Integer, Kind::Float).unwrap();
/// assert_eq!(pair.left, Kind::Float);
/// assert!(coercion(Kind::String, Kind::Integer).is_none());
/// ```
pub fn coercion(left: Kind, right: Kind) -> Option<Coercion> {
    CONVERSION_TABLE[left.index()][right.index()]
}

impl Value {
    /// Convert to `target`, producing a new value
    pub fn convert(&self, target: Kind, state: &DisplayState) -> ClacResult<Value> {
        if let Value::Binary(bits) = self {
            if target == Kind::Binary {
                return Ok(Value::binary(state.word(*bits), state));
            }
        }
        if self.kind() == target {
            return Ok(self.duplicate());
        }
        match target {
            Kind::Binary => self.to_binary(state),
            Kind::Complex => self.to_complex(state),
            Kind::Directory => self.to_directory(),
            Kind::Float => self.to_float(state),
            Kind::Integer => self.to_integer(state),
            Kind::List => self.to_list(),
            Kind::Matrix => self.to_matrix(),
            Kind::Program => match self {
                Value::String(text) => Ok(Value::Program(text.clone())),
                _ => Err(self.cannot_become(target)),
            },
            Kind::Rational => self.to_rational(state),
            Kind::String => Ok(Value::String(match self {
                Value::Program(text) => text.clone(),
                _ => self.render(state),
            })),
            Kind::Vector => match self {
                Value::List(items) => Ok(Value::Vector(items.clone())),
                _ => Err(self.cannot_become(target)),
            },
            Kind::Labeled => Err(self.cannot_become(target)),
        }
    }

    fn cannot_become(&self, target: Kind) -> ClacError {
        ClacError::no_conversion(self.kind(), target)
    }

    fn to_binary(&self, state: &DisplayState) -> ClacResult<Value> {
        let word = match self {
            Value::Integer(n) => low_word(n),
            Value::Rational(r) => low_word(&r.to_integer()),
            Value::Float(x) => low_word(&float_to_bigint(*x)?),
            _ => return Err(self.cannot_become(Kind::Binary)),
        };
        Ok(Value::binary(word, state))
    }

    fn to_complex(&self, state: &DisplayState) -> ClacResult<Value> {
        let re = match self {
            Value::Binary(b) => state.word(*b) as f64,
            Value::Float(x) => *x,
            Value::Integer(n) => bigint_to_f64(n),
            Value::Rational(r) => rational_to_f64(r),
            _ => return Err(self.cannot_become(Kind::Complex)),
        };
        Ok(Value::Complex(Complex64::new(re, 0.0)))
    }

    fn to_float(&self, state: &DisplayState) -> ClacResult<Value> {
        match self {
            Value::Binary(b) => Ok(Value::Float(state.word(*b) as f64)),
            Value::Integer(n) => Ok(Value::Float(bigint_to_f64(n))),
            Value::Rational(r) => Ok(Value::Float(rational_to_f64(r))),
            _ => Err(self.cannot_become(Kind::Float)),
        }
    }

    fn to_integer(&self, state: &DisplayState) -> ClacResult<Value> {
        match self {
            Value::Binary(b) => Ok(Value::Integer(BigInt::from(state.word(*b)))),
            Value::Float(x) => float_to_bigint(*x).map(Value::Integer),
            Value::Rational(r) => Ok(Value::Integer(r.to_integer())),
            _ => Err(self.cannot_become(Kind::Integer)),
        }
    }

    fn to_rational(&self, state: &DisplayState) -> ClacResult<Value> {
        match self {
            Value::Binary(b) => Ok(Value::Rational(BigRational::from_integer(BigInt::from(
                state.word(*b),
            )))),
            Value::Integer(n) => Ok(Value::Rational(BigRational::from_integer(n.clone()))),
            Value::Float(x) => BigRational::from_float(*x)
                .map(Value::Rational)
                .ok_or_else(|| ClacError::domain("Value is not finite")),
            _ => Err(self.cannot_become(Kind::Rational)),
        }
    }

    fn to_list(&self) -> ClacResult<Value> {
        match self {
            Value::Vector(items) => Ok(Value::List(items.clone())),
            Value::Matrix(rows) => Ok(Value::List(
                rows.iter().map(|row| Value::List(row.clone())).collect(),
            )),
            Value::Directory(entries) => Ok(Value::List(
                entries
                    .iter()
                    .map(|(name, value)| Value::labeled(name.clone(), value.clone()))
                    .collect(),
            )),
            _ => Err(self.cannot_become(Kind::List)),
        }
    }

    fn to_matrix(&self) -> ClacResult<Value> {
        match self {
            Value::Vector(items) => Ok(Value::Matrix(vec![items.clone()])),
            Value::List(items) => {
                let rows = items
                    .iter()
                    .map(|item| match item {
                        Value::List(row) | Value::Vector(row) => Ok(row.clone()),
                        other => Err(ClacError::type_mismatch("List of rows", other.kind())),
                    })
                    .collect::<ClacResult<Vec<_>>>()?;
                Value::matrix(rows)
            }
            _ => Err(self.cannot_become(Kind::Matrix)),
        }
    }

    fn to_directory(&self) -> ClacResult<Value> {
        match self {
            Value::List(items) => {
                let mut entries = BTreeMap::new();
                for item in items {
                    match item {
                        Value::Labeled(name, value) => {
                            entries.insert(name.clone(), (**value).clone());
                        }
                        other => {
                            return Err(ClacError::type_mismatch("Labeled entry", other.kind()))
                        }
                    }
                }
                Ok(Value::Directory(entries))
            }
            _ => Err(self.cannot_become(Kind::Directory)),
        }
    }
}

/// Low 32 bits of `n` in two's complement
fn low_word(n: &BigInt) -> u64 {
    let (_, digits) = n.to_u32_digits();
    let low = u64::from(digits.first().copied().unwrap_or(0));
    if n.sign() == Sign::Minus {
        low.wrapping_neg() & u64::from(u32::MAX)
    } else {
        low
    }
}

/// Truncate toward zero, rejecting NaN and infinities
fn float_to_bigint(x: f64) -> ClacResult<BigInt> {
    if !x.is_finite() {
        return Err(ClacError::domain("Value is not finite"));
    }
    BigRational::from_float(x.trunc())
        .map(|r| r.to_integer())
        .ok_or_else(|| ClacError::domain("Value is not finite"))
}
