//! Interpreter context
//!
//! Bundles the state every builtin operates on: the operand stack, the word
//! source stack, the display state and the root variable directory. Exactly
//! one context exists per interpreter and it is passed by reference to every
//! operator and action.

use std::collections::BTreeMap;

use core_types::{ClacError, DisplayState, Value};

use crate::source::MasterSource;
use crate::stack::OperandStack;

/// A user-visible message produced during evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A word failed; evaluation continued with the next word
    Error(ClacError),
    /// Informational output such as the version banner
    Info(String),
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Message::Error(error) => write!(f, "Error: {}", error),
            Message::Info(text) => f.write_str(text),
        }
    }
}

/// State shared by the evaluation loop and all builtins
#[derive(Debug, Default)]
pub struct Context {
    /// Operand stack
    pub stack: OperandStack,
    /// Nested word sources
    pub sources: MasterSource,
    /// Formatting configuration
    pub display: DisplayState,
    /// Root directory of stored variables
    pub variables: BTreeMap<String, Value>,
    /// Messages waiting to be shown
    pub messages: Vec<Message>,
}

impl Context {
    /// Create a context with an empty stack and default display state
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an informational message
    pub fn info(&mut self, text: impl Into<String>) {
        self.messages.push(Message::Info(text.into()));
    }

    /// Queue an error message
    pub fn report(&mut self, error: ClacError) {
        tracing::warn!(kind = ?error.kind, "{}", error.message);
        self.messages.push(Message::Error(error));
    }
}
