//! TradeUp cart validation function - sandbox entry point.
//!
//! The platform runtime hands the function its input document on stdin and
//! reads the result envelope from stdout; stderr is reserved for logs. The
//! engine itself never fails, so a nonzero exit here always means the host
//! contract was violated (unreadable stdin or a document that is not valid
//! function input).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{Read, Write};

use thiserror::Error;
use tradeup_function::input::FunctionInput;

/// Host-contract violations around the engine invocation.
#[derive(Debug, Error)]
enum EntryError {
    /// Stdin could not be read.
    #[error("failed to read function input: {0}")]
    Read(#[from] std::io::Error),

    /// The input document is not valid function input.
    #[error("failed to parse function input: {0}")]
    Parse(#[from] serde_json::Error),
}

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tradeup_function=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run_entry() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "function invocation failed");
            std::process::ExitCode::FAILURE
        }
    }
}

fn run_entry() -> Result<(), EntryError> {
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;

    let input: FunctionInput = serde_json::from_str(&raw)?;
    let result = tradeup_function::run(&input);

    let rendered = serde_json::to_string(&result)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
