//! Clac command-line front end
//!
//! Argument parsing, the interactive line loop and the stack view printed
//! between command lines. The binary in `main.rs` only wires these together.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod repl;
pub mod session;

pub use cli::{init_tracing, Cli};
pub use error::{CliError, CliResult};
pub use session::Session;
