//! Command-line arguments and log setup

use std::path::PathBuf;
use std::sync::Once;

use clap::Parser;

/// Reverse Polish calculator
///
/// Without `--eval` or `--file`, reads command lines interactively until
/// `quit` or end of input.
#[derive(Debug, Parser)]
#[command(name = "clac", version)]
pub struct Cli {
    /// Log dispatch decisions to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Evaluate WORDS, print the top of the stack and exit
    #[arg(short, long, value_name = "WORDS", conflicts_with = "file")]
    pub eval: Option<String>,

    /// Evaluate a script file, print the top of the stack and exit
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Number of stack levels shown before each prompt (0 echoes only the top)
    #[arg(short, long, value_name = "N", default_value_t = 0)]
    pub levels: usize,
}

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber.
///
/// `debug` forces the `debug` level. Otherwise `RUST_LOG` is honoured, and
/// with neither nothing is installed. Safe to call more than once.
pub fn init_tracing(debug: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if debug {
            EnvFilter::new("debug")
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
