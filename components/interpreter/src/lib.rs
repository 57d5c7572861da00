//! Evaluation engine for the Clac RPN calculator
//!
//! This crate provides the parts that turn words into stack effects:
//! - Operand stack with roll, rotate and swap primitives
//! - Nested word sources, so one script can include another
//! - Builtin dispatch tables for operators and actions
//! - Literal parsing and the evaluation loop
//! - Persisted object files for `read` and `write`
//!
//! # Example
//!
//! ```
//! use interpreter::{Interpreter, Status};
//!
//! let mut clac = Interpreter::new();
//! assert_eq!(clac.evaluate("1 2 3 rot"), Status::Exhausted);
//!
//! let levels: Vec<String> = clac
//!     .stack()
//!     .iter()
//!     .map(|v| v.render(clac.display()))
//!     .collect();
//! assert_eq!(levels, vec!["1", "3", "2"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod actions;
pub mod context;
pub mod dispatch;
pub mod literal;
pub mod persist;
pub mod source;
pub mod stack;
pub mod vm;

// Re-export main types at crate root
pub use context::{Context, Message};
pub use dispatch::{Builtin, Builtins, UnaryWord};
pub use source::{FileSource, LineSource, MasterSource, WordSource};
pub use stack::OperandStack;
pub use vm::{Interpreter, Status, QUIT};
