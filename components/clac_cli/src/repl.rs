//! Interactive line loop

use interpreter::Status;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::{CliError, CliResult};
use crate::session::Session;

/// Prompt shown before each command line
pub const PROMPT: &str = "=> ";

/// Read command lines until `quit` or end of input
///
/// Ctrl-C discards the line being edited. Ctrl-D ends the session like `quit`.
pub fn run_repl(session: &mut Session) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Readline(format!("Failed to initialize editor: {}", e)))?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                let status = session.execute_line(&line);
                for output in session.report() {
                    println!("{}", output);
                }
                if status == Status::Stopped {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(CliError::Readline(err.to_string())),
        }
    }

    Ok(())
}
