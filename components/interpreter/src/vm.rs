//! Evaluation loop
//!
//! The interpreter reads words from its master word source one at a time and
//! resolves each one: `quit`, the empty word, the builtin tables, a literal,
//! a stored variable. A failing word is reported and evaluation continues
//! with the next word.

use std::path::Path;

use core_types::{ClacResult, DisplayState};

use crate::actions;
use crate::context::{Context, Message};
use crate::dispatch::{self, Builtins};
use crate::literal::parse_literal;
use crate::source::{FileSource, LineSource, WordSource};
use crate::stack::OperandStack;

/// The only word that stops the interpreter
pub const QUIT: &str = "quit";

/// Outcome of [`Interpreter::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every word source is exhausted; the interpreter is waiting for input
    Exhausted,
    /// `quit` was read; the interpreter will not evaluate anything else
    Stopped,
}

/// RPN calculator interpreter
///
/// # Examples
///
/// ```
/// use interpreter::{Interpreter, Status};
///
/// let mut clac = Interpreter::new();
/// assert_eq!(clac.evaluate("3 4 +"), Status::Exhausted);
/// assert_eq!(clac.top_text().as_deref(), Some("7"));
/// assert_eq!(clac.evaluate("quit"), Status::Stopped);
/// ```
#[derive(Debug, Default)]
pub struct Interpreter {
    ctx: Context,
    builtins: Builtins,
    stopped: bool,
}

impl Interpreter {
    /// Create an interpreter with an empty stack and default display state
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a command line for evaluation
    pub fn submit(&mut self, line: &str) {
        self.ctx.sources.push(Box::new(LineSource::new(line)));
    }

    /// Queue a script file for evaluation
    pub fn include_file(&mut self, path: impl AsRef<Path>) -> ClacResult<()> {
        let source = FileSource::open(path)?;
        self.ctx.sources.push(Box::new(source));
        Ok(())
    }

    /// Submit `line` and run until the sources are exhausted or `quit` is read
    pub fn evaluate(&mut self, line: &str) -> Status {
        self.submit(line);
        self.run()
    }

    /// Evaluate words until every source is exhausted or `quit` is read
    pub fn run(&mut self) -> Status {
        if self.stopped {
            return Status::Stopped;
        }
        while let Some(word) = self.ctx.sources.next_word() {
            if word == QUIT {
                tracing::debug!("quit requested");
                self.stopped = true;
                return Status::Stopped;
            }
            if let Err(error) = self.execute(&word) {
                self.ctx.report(error);
            }
        }
        Status::Exhausted
    }

    /// Resolve and execute a single word
    fn execute(&mut self, word: &str) -> ClacResult<()> {
        if word.is_empty() {
            return actions::dup(&mut self.ctx);
        }
        if let Some(builtin) = self.builtins.lookup(word) {
            tracing::debug!(word, ?builtin, "builtin");
            return dispatch::execute(&mut self.ctx, builtin);
        }
        match parse_literal(word, &self.ctx.display) {
            Ok(value) => {
                tracing::debug!(word, kind = %value.kind(), "literal");
                self.ctx.stack.push(value);
            }
            Err(_) => match self.ctx.variables.get(word) {
                Some(value) => {
                    tracing::debug!(word, "variable recalled");
                    let copy = value.duplicate();
                    self.ctx.stack.push(copy);
                }
                None => tracing::debug!(word, "unrecognized word dropped"),
            },
        }
        Ok(())
    }

    /// Whether `quit` has been read
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// The operand stack
    pub fn stack(&self) -> &OperandStack {
        &self.ctx.stack
    }

    /// The display state
    pub fn display(&self) -> &DisplayState {
        &self.ctx.display
    }

    /// The full interpreter context
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Mutable access to the interpreter context
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    /// Level 0 rendered under the current display state
    pub fn top_text(&self) -> Option<String> {
        self.ctx.stack.get(0).map(|v| v.render(&self.ctx.display))
    }

    /// Drain the messages produced since the last call
    pub fn take_messages(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.ctx.messages)
    }
}
