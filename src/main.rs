//! Rust Banking Ledger CLI
//!
//! Interactive menu shell over the in-memory banking ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --export accounts.csv
//! RUST_LOG=debug cargo run -- -v
//! ```
//!
//! The program runs the main menu over stdin/stdout (create account, access
//! account, admin dashboard, exit). All state lives for the lifetime of the
//! process; with `--export PATH`, the final account states are written to a
//! CSV file when the session ends.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (stream I/O failure, export file not writable)

use rust_banking_ledger::cli;
use rust_banking_ledger::{write_accounts_csv, AccountRegistry};
use std::fs::File;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process
///
/// `RUST_LOG` takes precedence; otherwise the verbosity flag picks the
/// default level.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    init_tracing(args.log_filter());

    let registry = AccountRegistry::new();

    // Run the interactive shell over stdin/stdout
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = cli::Shell::new(&registry, stdin.lock(), stdout.lock());
    if let Err(e) = shell.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    drop(shell);

    // Write the final account states if an export path was given
    if let Some(path) = args.export {
        let result = File::create(&path)
            .map_err(|e| format!("Failed to create {}: {}", path.display(), e))
            .and_then(|mut file| write_accounts_csv(&registry.list_all(), &mut file));
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        tracing::info!(path = %path.display(), accounts = registry.len(), "dashboard exported");
    }
}
