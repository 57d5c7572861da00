//! Calculator error types.
//!
//! Every fallible operation in the calculator returns a [`ClacError`]: a kind
//! from the fixed taxonomy plus a human-readable message. The evaluation loop
//! turns each one into a single diagnostic line.

use thiserror::Error;

use crate::Kind;

/// The kind of calculator error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The operation needs operands the stack does not have
    Underflow,
    /// A roll, rotate or swap needs more levels than the stack holds
    InsufficientHeight,
    /// The operation is not defined for the value's kind
    KindUnsupported,
    /// No coercion path exists between the two operand kinds
    ConversionUnavailable,
    /// An argument is not the specific kind an action requires
    TypeMismatch,
    /// A word is neither a builtin nor a valid literal
    MalformedLiteral,
    /// A file could not be opened, read or written
    IoFailure,
    /// The operand is of a supported kind but outside the operation's domain
    Domain,
}

/// A calculator error with its kind and message.
///
/// # Examples
///
/// ```
/// use core_types::{ClacError, ErrorKind};
///
/// let error = ClacError::underflow();
/// assert_eq!(error.kind, ErrorKind::Underflow);
/// assert_eq!(error.to_string(), "Stack underflow");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ClacError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

/// Result type for calculator operations
pub type ClacResult<T> = Result<T, ClacError>;

impl ClacError {
    /// Create an error of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Stack underflow
    pub fn underflow() -> Self {
        Self::new(ErrorKind::Underflow, "Stack underflow")
    }

    /// A stack manipulation needing `needed` levels when only `height` exist
    pub fn insufficient_height(needed: usize, height: usize) -> Self {
        Self::new(
            ErrorKind::InsufficientHeight,
            format!("Stack not high enough: need {}, have {}", needed, height),
        )
    }

    /// `what` is not defined for values of `kind`
    pub fn unsupported(what: &str, kind: Kind) -> Self {
        Self::new(
            ErrorKind::KindUnsupported,
            format!("Unable to {} a {} object", what, kind.abbreviation()),
        )
    }

    /// Values of kind `from` cannot be converted to `to`
    pub fn no_conversion(from: Kind, to: Kind) -> Self {
        Self::new(
            ErrorKind::KindUnsupported,
            format!(
                "Unable to convert a {} object to {}",
                from.abbreviation(),
                to.abbreviation()
            ),
        )
    }

    /// No implicit conversion between `left` and `right`
    pub fn conversion_unavailable(left: Kind, right: Kind) -> Self {
        Self::new(
            ErrorKind::ConversionUnavailable,
            format!(
                "No implicit conversion between {} and {}",
                left.abbreviation(),
                right.abbreviation()
            ),
        )
    }

    /// An action expected `expected` but found `found`
    pub fn type_mismatch(expected: &str, found: Kind) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("{} expected, found {}", expected, found.abbreviation()),
        )
    }

    /// A word that is not a valid literal
    pub fn malformed_literal(word: &str) -> Self {
        Self::new(
            ErrorKind::MalformedLiteral,
            format!("Unrecognized word: {}", word),
        )
    }

    /// A file operation failed
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IoFailure, message)
    }

    /// The operand is outside the operation's domain
    pub fn domain(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Domain, message)
    }
}
