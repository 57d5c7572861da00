//! Clac RPN calculator
//!
//! Entry point. Parses arguments, then evaluates `--eval` words, a `--file`
//! script, or runs the interactive loop.

use clap::Parser;
use clac_cli::{init_tracing, repl, Cli, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let mut session = Session::new(cli.levels);

    if let Some(words) = cli.eval {
        session.execute_line(&words);
        print_report(&mut session);
    } else if let Some(file) = cli.file {
        if let Err(e) = session.execute_file(&file) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        print_report(&mut session);
    } else {
        repl::run_repl(&mut session)?;
    }

    Ok(())
}

fn print_report(session: &mut Session) {
    for line in session.report() {
        println!("{}", line);
    }
}
