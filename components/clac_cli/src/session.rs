//! Interpreter session
//!
//! Wraps an [`Interpreter`] with the presentation the terminal needs: queued
//! messages as lines, the top of the stack, and the multi-level stack view.

use std::path::Path;

use interpreter::{Interpreter, Status};

use crate::error::CliResult;

/// Shown instead of a value when the stack is empty
pub const EMPTY_STACK: &str = "parameter stack empty";

/// A calculator session
#[derive(Debug, Default)]
pub struct Session {
    interpreter: Interpreter,
    levels: usize,
}

impl Session {
    /// Create a session showing `levels` stack levels (0 shows only the top)
    pub fn new(levels: usize) -> Self {
        Self {
            interpreter: Interpreter::new(),
            levels,
        }
    }

    /// Evaluate one command line
    pub fn execute_line(&mut self, line: &str) -> Status {
        self.interpreter.evaluate(line)
    }

    /// Evaluate a script file the same way `eval` would
    pub fn execute_file(&mut self, path: &Path) -> CliResult<Status> {
        self.interpreter.include_file(path)?;
        Ok(self.interpreter.run())
    }

    /// The underlying interpreter
    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Drain queued diagnostics as printable lines
    pub fn drain_messages(&mut self) -> Vec<String> {
        self.interpreter
            .take_messages()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Level 0 rendered, or [`EMPTY_STACK`]
    pub fn top_line(&self) -> String {
        self.interpreter
            .top_text()
            .unwrap_or_else(|| EMPTY_STACK.to_string())
    }

    /// Up to `levels` entries, deepest first, as `" 1: INT : 7"`
    pub fn stack_view(&self) -> Vec<String> {
        let display = self.interpreter.display();
        let mut lines: Vec<String> = self
            .interpreter
            .stack()
            .iter()
            .take(self.levels)
            .enumerate()
            .map(|(level, value)| {
                format!(
                    "{:2}: {} : {}",
                    level,
                    value.kind().abbreviation(),
                    value.render(display)
                )
            })
            .collect();
        lines.reverse();
        lines
    }

    /// Lines to print after a command line: messages, then the stack
    pub fn report(&mut self) -> Vec<String> {
        let mut lines = self.drain_messages();
        if self.levels == 0 || self.interpreter.stack().is_empty() {
            lines.push(self.top_line());
        } else {
            lines.extend(self.stack_view());
        }
        lines
    }
}
