//! Core calculator value types and error handling.
//!
//! This crate provides the value tower of the RPN calculator: twelve value
//! kinds, their unary and binary operations, the conversion matrix used to
//! reconcile mixed-kind operands, rendering under a display state, and the
//! shared error type.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of calculator values
//! - [`Kind`] - The discriminant of a value
//! - [`apply_binary`] - Mixed-kind binary operator protocol
//! - [`DisplayState`] - Formatting configuration consulted by [`Value::render`]
//! - [`ClacError`] - Calculator errors with their [`ErrorKind`]
//!
//! # Examples
//!
//! ```
//! use core_types::{apply_binary, BinaryOp, DisplayState, UnaryOp, Value};
//!
//! let state = DisplayState::new();
//! let sum = apply_binary(BinaryOp::Add, &Value::integer(3), &Value::integer(4), &state).unwrap();
//! assert_eq!(sum.render(&state), "7");
//!
//! let root = Value::integer(16).apply_unary(UnaryOp::Sqrt, &state).unwrap();
//! assert_eq!(root, Value::integer(4));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod binary;
mod convert;
mod display;
mod error;
mod kind;
mod render;
mod unary;
mod value;

pub use binary::{apply_binary, BinaryOp};
pub use convert::{coercion, Coercion};
pub use display::{AngleMode, Base, ComplexMode, DisplayState, FloatMode};
pub use error::{ClacError, ClacResult, ErrorKind};
pub use kind::Kind;
pub use unary::UnaryOp;
pub use value::Value;
